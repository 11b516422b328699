//! Customer feedback survey model
//!
//! Five star-rated service aspects, an overall 1-10 score, and two
//! free-text answers. Zero means "not answered" for every score.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest star rating
pub const MAX_STARS: u8 = 5;

/// Highest overall experience score
pub const MAX_EXPERIENCE: u8 = 10;

/// A 0-5 star rating (0 = unrated)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct StarRating(u8);

impl StarRating {
    /// Create a rating, rejecting values above five stars
    pub fn new(stars: u8) -> Option<Self> {
        (stars <= MAX_STARS).then_some(Self(stars))
    }

    pub fn stars(&self) -> u8 {
        self.0
    }

    pub fn is_rated(&self) -> bool {
        self.0 > 0
    }

    /// Whether star number `star` (1-based) is lit
    pub fn lights(&self, star: u8) -> bool {
        self.0 >= star
    }
}

impl TryFrom<u8> for StarRating {
    type Error = FeedbackValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(FeedbackValueError::Stars(value))
    }
}

impl From<StarRating> for u8 {
    fn from(rating: StarRating) -> Self {
        rating.0
    }
}

/// A 0-10 overall experience score (0 = unset)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ExperienceScore(u8);

impl ExperienceScore {
    pub fn new(score: u8) -> Option<Self> {
        (score <= MAX_EXPERIENCE).then_some(Self(score))
    }

    pub fn score(&self) -> u8 {
        self.0
    }

    /// Move the slider by `delta`, clamped to 1..=10
    pub fn nudge(&self, delta: i8) -> Self {
        let next = (self.0 as i16 + delta as i16).clamp(1, MAX_EXPERIENCE as i16);
        Self(next as u8)
    }
}

impl TryFrom<u8> for ExperienceScore {
    type Error = FeedbackValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(FeedbackValueError::Experience(value))
    }
}

impl From<ExperienceScore> for u8 {
    fn from(score: ExperienceScore) -> Self {
        score.0
    }
}

/// Out-of-range survey value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackValueError {
    Stars(u8),
    Experience(u8),
}

impl fmt::Display for FeedbackValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stars(v) => write!(f, "Star rating must be 0-{}, got {}", MAX_STARS, v),
            Self::Experience(v) => {
                write!(f, "Experience score must be 0-{}, got {}", MAX_EXPERIENCE, v)
            }
        }
    }
}

impl std::error::Error for FeedbackValueError {}

/// Service aspects rated with stars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceAspect {
    CustomerService,
    BusinessService,
    Authenticity,
    Significance,
    UpToDate,
}

impl ServiceAspect {
    /// All aspects in survey order
    pub const ALL: [ServiceAspect; 5] = [
        ServiceAspect::CustomerService,
        ServiceAspect::BusinessService,
        ServiceAspect::Authenticity,
        ServiceAspect::Significance,
        ServiceAspect::UpToDate,
    ];

    /// Question label
    pub fn label(&self) -> &'static str {
        match self {
            Self::CustomerService => "Customer Service",
            Self::BusinessService => "Business Service",
            Self::Authenticity => "Authenticity",
            Self::Significance => "Significance",
            Self::UpToDate => "Up To Date",
        }
    }
}

impl fmt::Display for ServiceAspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The survey answers as sent to the feedback endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackForm {
    pub customer_service: StarRating,
    pub business_service: StarRating,
    // The endpoint expects this misspelled key.
    #[serde(rename = "authensity")]
    pub authenticity: StarRating,
    pub significance: StarRating,
    pub up_to_date: StarRating,
    pub overall_experience: ExperienceScore,
    pub comments: String,
    pub purpose: String,
}

impl FeedbackForm {
    /// Rating for one aspect
    pub fn rating(&self, aspect: ServiceAspect) -> StarRating {
        match aspect {
            ServiceAspect::CustomerService => self.customer_service,
            ServiceAspect::BusinessService => self.business_service,
            ServiceAspect::Authenticity => self.authenticity,
            ServiceAspect::Significance => self.significance,
            ServiceAspect::UpToDate => self.up_to_date,
        }
    }

    /// Set the rating for one aspect
    pub fn rate(&mut self, aspect: ServiceAspect, rating: StarRating) {
        let slot = match aspect {
            ServiceAspect::CustomerService => &mut self.customer_service,
            ServiceAspect::BusinessService => &mut self.business_service,
            ServiceAspect::Authenticity => &mut self.authenticity,
            ServiceAspect::Significance => &mut self.significance,
            ServiceAspect::UpToDate => &mut self.up_to_date,
        };
        *slot = rating;
    }

    /// Number of aspects that have a rating
    pub fn rated_count(&self) -> usize {
        ServiceAspect::ALL
            .iter()
            .filter(|a| self.rating(**a).is_rated())
            .count()
    }
}

/// Fixed secondary ratings block sent with every submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyRatings {
    pub service: u8,
    pub cleanliness: u8,
    pub value: u8,
}

impl Default for LegacyRatings {
    fn default() -> Self {
        Self {
            service: 3,
            cleanliness: 3,
            value: 3,
        }
    }
}

/// Request body for the feedback endpoint
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackSubmission<'a> {
    pub ratings: LegacyRatings,
    pub feedback: &'a FeedbackForm,
}

/// Survey answers plus the submitted flag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackSurvey {
    pub form: FeedbackForm,
    pub ratings: LegacyRatings,
    submitted: bool,
}

impl FeedbackSurvey {
    pub fn new() -> Self {
        Self::default()
    }

    /// Body to send for the current answers
    pub fn submission(&self) -> FeedbackSubmission<'_> {
        FeedbackSubmission {
            ratings: self.ratings,
            feedback: &self.form,
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn mark_submitted(&mut self) {
        self.submitted = true;
    }

    /// Return to the form; answers are kept
    pub fn reset_submitted(&mut self) {
        self.submitted = false;
    }
}
