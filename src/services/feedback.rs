//! Feedback service
//!
//! Applies survey answers and submits the survey through a
//! [`FeedbackSink`]. Only a successful submission flips the survey's
//! submitted flag.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::error::{VerziError, VerziResult};
use crate::models::feedback::{FeedbackSubmission, MAX_EXPERIENCE, MAX_STARS};
use crate::models::{ExperienceScore, FeedbackSurvey, ServiceAspect, StarRating};

/// Destination for completed surveys
#[async_trait]
pub trait FeedbackSink: Send + Sync {
    /// Deliver one submission; `Ok` means the receiver accepted it
    async fn submit(&self, submission: &FeedbackSubmission<'_>) -> VerziResult<()>;
}

#[async_trait]
impl<T: FeedbackSink + ?Sized> FeedbackSink for Arc<T> {
    async fn submit(&self, submission: &FeedbackSubmission<'_>) -> VerziResult<()> {
        (**self).submit(submission).await
    }
}

/// Service driving the feedback survey
pub struct FeedbackService<S> {
    sink: S,
}

impl<S: FeedbackSink> FeedbackService<S> {
    /// Create a new feedback service
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Submit the survey and record the outcome
    pub async fn submit(&self, survey: &mut FeedbackSurvey) -> VerziResult<()> {
        let result = self.sink.submit(&survey.submission()).await;
        finish_submission(survey, result)
    }
}

/// Record a submission outcome on the survey
pub fn finish_submission(survey: &mut FeedbackSurvey, result: VerziResult<()>) -> VerziResult<()> {
    match result {
        Ok(()) => {
            info!(rated = survey.form.rated_count(), "feedback submitted");
            survey.mark_submitted();
            Ok(())
        }
        Err(err) => {
            warn!("feedback submission failed: {err}");
            Err(err)
        }
    }
}

/// Rate one service aspect with 0-5 stars
pub fn rate(survey: &mut FeedbackSurvey, aspect: ServiceAspect, stars: u8) -> VerziResult<()> {
    let rating = StarRating::new(stars).ok_or_else(|| {
        VerziError::Validation(format!(
            "{} rating must be between 0 and {}, got {}",
            aspect, MAX_STARS, stars
        ))
    })?;
    survey.form.rate(aspect, rating);
    Ok(())
}

/// Set the overall experience score (0-10)
pub fn set_experience(survey: &mut FeedbackSurvey, score: u8) -> VerziResult<()> {
    let score = ExperienceScore::new(score).ok_or_else(|| {
        VerziError::Validation(format!(
            "Overall experience must be between 0 and {}, got {}",
            MAX_EXPERIENCE, score
        ))
    })?;
    survey.form.overall_experience = score;
    Ok(())
}
