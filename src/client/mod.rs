//! HTTP clients for the remote chat and feedback endpoints

pub mod chat;
pub mod feedback;

pub use chat::ChatClient;
pub use feedback::FeedbackClient;

use reqwest::StatusCode;

/// Describe a non-success response
fn status_error(status: StatusCode, detail: &str) -> String {
    let kind = match status.as_u16() {
        401 => "unauthorized",
        403 => "forbidden",
        404 => "not found",
        429 => "rate limited",
        400..=499 => "rejected",
        _ => "server error",
    };
    if detail.is_empty() {
        format!("{} ({})", kind, status.as_u16())
    } else {
        format!("{} ({}): {}", kind, status.as_u16(), detail)
    }
}
