//! CLI commands for the feedback survey

use clap::{Args, Subcommand};

use crate::client::FeedbackClient;
use crate::config::Settings;
use crate::display::format_survey;
use crate::error::VerziResult;
use crate::export::export_json;
use crate::models::{FeedbackSurvey, ServiceAspect};
use crate::services::feedback::{rate, set_experience};
use crate::services::FeedbackService;

use super::chat::runtime;

/// Survey answers given as flags
#[derive(Args, Debug, Clone, Default)]
pub struct SurveyAnswers {
    /// Customer service rating (0-5 stars)
    #[arg(long, default_value_t = 0)]
    pub customer_service: u8,

    /// Business service rating (0-5 stars)
    #[arg(long, default_value_t = 0)]
    pub business_service: u8,

    /// Authenticity rating (0-5 stars)
    #[arg(long, default_value_t = 0)]
    pub authenticity: u8,

    /// Significance rating (0-5 stars)
    #[arg(long, default_value_t = 0)]
    pub significance: u8,

    /// Up-to-date rating (0-5 stars)
    #[arg(long, default_value_t = 0)]
    pub up_to_date: u8,

    /// Overall experience (1-10)
    #[arg(long, default_value_t = 0)]
    pub overall: u8,

    /// Free-text comments
    #[arg(short, long, default_value = "")]
    pub comments: String,

    /// Purpose of the visit
    #[arg(short, long, default_value = "")]
    pub purpose: String,
}

impl SurveyAnswers {
    /// Validate the answers into a survey
    pub fn to_survey(&self) -> VerziResult<FeedbackSurvey> {
        let mut survey = FeedbackSurvey::new();
        let stars = [
            (ServiceAspect::CustomerService, self.customer_service),
            (ServiceAspect::BusinessService, self.business_service),
            (ServiceAspect::Authenticity, self.authenticity),
            (ServiceAspect::Significance, self.significance),
            (ServiceAspect::UpToDate, self.up_to_date),
        ];
        for (aspect, value) in stars {
            rate(&mut survey, aspect, value)?;
        }
        set_experience(&mut survey, self.overall)?;
        survey.form.comments = self.comments.clone();
        survey.form.purpose = self.purpose.clone();
        Ok(survey)
    }
}

/// Feedback subcommands
#[derive(Subcommand, Debug)]
pub enum FeedbackCommands {
    /// Submit a survey to the feedback endpoint
    Submit {
        #[command(flatten)]
        answers: SurveyAnswers,

        /// Print the request body instead of sending it
        #[arg(long)]
        dry_run: bool,
    },
}

/// Handle feedback commands
pub fn handle_feedback_command(settings: &Settings, cmd: FeedbackCommands) -> VerziResult<()> {
    match cmd {
        FeedbackCommands::Submit { answers, dry_run } => {
            let mut survey = answers.to_survey()?;

            if dry_run {
                let mut stdout = std::io::stdout().lock();
                return export_json(&survey.submission(), &mut stdout, true);
            }

            print!("{}", format_survey(&survey));
            let service = FeedbackService::new(FeedbackClient::from_settings(&settings.feedback)?);
            runtime()?.block_on(service.submit(&mut survey))?;

            if survey.is_submitted() {
                println!();
                println!("Thank you for your feedback!");
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answers_to_survey() {
        let answers = SurveyAnswers {
            customer_service: 5,
            up_to_date: 2,
            overall: 9,
            comments: "Great".into(),
            ..SurveyAnswers::default()
        };
        let survey = answers.to_survey().unwrap();

        assert_eq!(survey.form.customer_service.stars(), 5);
        assert_eq!(survey.form.up_to_date.stars(), 2);
        assert_eq!(survey.form.rated_count(), 2);
        assert_eq!(survey.form.overall_experience.score(), 9);
        assert_eq!(survey.form.comments, "Great");
        assert!(!survey.is_submitted());
    }

    #[test]
    fn test_out_of_range_answers_rejected() {
        let stars = SurveyAnswers {
            significance: 6,
            ..SurveyAnswers::default()
        };
        assert!(stars.to_survey().unwrap_err().is_validation());

        let overall = SurveyAnswers {
            overall: 11,
            ..SurveyAnswers::default()
        };
        assert!(overall.to_survey().unwrap_err().is_validation());
    }
}
