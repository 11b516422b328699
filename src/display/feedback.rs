//! Feedback survey formatting

use crate::models::feedback::{MAX_EXPERIENCE, MAX_STARS};
use crate::models::{FeedbackSurvey, ServiceAspect, StarRating};

fn stars(rating: StarRating) -> String {
    (1..=MAX_STARS)
        .map(|n| if rating.lights(n) { '★' } else { '☆' })
        .collect()
}

/// Summarize the current survey answers
pub fn format_survey(survey: &FeedbackSurvey) -> String {
    let form = &survey.form;
    let mut output = String::new();

    for aspect in ServiceAspect::ALL {
        output.push_str(&format!(
            "{:<18} {}\n",
            aspect.label(),
            stars(form.rating(aspect))
        ));
    }

    let score = form.overall_experience.score();
    if score == 0 {
        output.push_str(&format!("{:<18} -\n", "Overall"));
    } else {
        output.push_str(&format!("{:<18} {}/{}\n", "Overall", score, MAX_EXPERIENCE));
    }

    if !form.purpose.is_empty() {
        output.push_str(&format!("{:<18} {}\n", "Purpose", form.purpose));
    }
    if !form.comments.is_empty() {
        output.push_str(&format!("{:<18} {}\n", "Comments", form.comments));
    }
    output
}
