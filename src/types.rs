//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Classification State** - The outcome of one classification cycle
//! - **API Types** - Classification service response structure
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::PREDICTION_FAILED_MESSAGE;

// =============================================================================
// Classification State
// =============================================================================

/// State of the current classification cycle.
///
/// A tagged state record rather than separate flags, so that a prediction
/// and an error message can never be active at the same time. Selecting a
/// new file resets to [`Classification::Idle`]; submitting moves through
/// [`Classification::Loading`] and settles on exactly one of the two
/// terminal variants.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Classification {
    /// No submission outcome to show.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The service returned a label for the submitted image.
    Succeeded(String),
    /// The cycle failed; holds the user-facing message.
    Failed(String),
}

impl Classification {
    /// True strictly between submission start and response settlement.
    pub fn is_loading(&self) -> bool {
        matches!(self, Classification::Loading)
    }

    /// The predicted label, if the last submission succeeded.
    pub fn prediction(&self) -> Option<&str> {
        match self {
            Classification::Succeeded(label) => Some(label),
            _ => None,
        }
    }

    /// The user-facing error message, if the last cycle failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Classification::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Capitalize the first character of a label for display.
///
/// The service returns lowercase category names ("plastic", "trash");
/// the result panel shows them capitalized.
pub fn capitalize_label(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

// =============================================================================
// API Response Types
// =============================================================================

/// Response from the classification endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PredictResponse {
    /// Predicted category label, e.g. "recyclable".
    pub prediction: String,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations.
#[derive(Clone, Debug)]
pub enum AppError {
    /// Submit attempted with no file selected; detected locally.
    Validation(String),
    /// The request never reached the service (network-level failure).
    Transport(String),
    /// The service answered with a non-success status or an unexpected body.
    Service(String),
    /// Local preview derivation failed.
    Preview(String),
}

impl AppError {
    /// The message shown in the error panel.
    ///
    /// Validation errors are instructive and pass through verbatim. All
    /// other failures collapse into one generic text; the detail is only
    /// logged via [`fmt::Display`].
    pub fn user_message(&self) -> &str {
        match self {
            AppError::Validation(message) => message,
            AppError::Transport(_) | AppError::Service(_) | AppError::Preview(_) => {
                PREDICTION_FAILED_MESSAGE
            }
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::Transport(msg) => write!(f, "Network error: {}", msg),
            AppError::Service(msg) => write!(f, "Service error: {}", msg),
            AppError::Preview(msg) => write!(f, "Preview error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NO_FILE_MESSAGE;

    #[test]
    fn idle_has_no_outcome() {
        let state = Classification::default();
        assert_eq!(state, Classification::Idle);
        assert!(!state.is_loading());
        assert!(state.prediction().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn loading_has_no_outcome() {
        let state = Classification::Loading;
        assert!(state.is_loading());
        assert!(state.prediction().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn prediction_and_error_are_mutually_exclusive() {
        let success = Classification::Succeeded("plastic".to_string());
        assert_eq!(success.prediction(), Some("plastic"));
        assert!(success.error().is_none());
        assert!(!success.is_loading());

        let failure = Classification::Failed(PREDICTION_FAILED_MESSAGE.to_string());
        assert_eq!(failure.error(), Some(PREDICTION_FAILED_MESSAGE));
        assert!(failure.prediction().is_none());
        assert!(!failure.is_loading());
    }

    #[test]
    fn new_selection_discards_previous_outcome() {
        // Selecting a file resets the cycle, dropping an earlier result.
        let mut state = Classification::Succeeded("recyclable".to_string());
        assert_eq!(state.prediction(), Some("recyclable"));
        state = Classification::Idle;
        assert!(state.prediction().is_none());
        assert!(state.error().is_none());

        let mut state = Classification::Failed(NO_FILE_MESSAGE.to_string());
        assert_eq!(state.error(), Some(NO_FILE_MESSAGE));
        state = Classification::Idle;
        assert!(state.error().is_none());
    }

    #[test]
    fn repeated_cycles_leave_no_residual_state() {
        for _ in 0..2 {
            let mut state = Classification::Idle;
            assert!(state.error().is_none());
            state = Classification::Loading;
            assert!(state.is_loading());
            state = Classification::Succeeded("plastic".to_string());
            assert_eq!(state.prediction(), Some("plastic"));
            assert!(state.error().is_none());
        }
    }

    #[test]
    fn validation_message_passes_through() {
        let err = AppError::Validation(NO_FILE_MESSAGE.to_string());
        assert_eq!(err.user_message(), NO_FILE_MESSAGE);
    }

    #[test]
    fn transport_and_service_collapse_to_generic_message() {
        let transport = AppError::Transport("connection refused".to_string());
        let service = AppError::Service("Server error (500)".to_string());
        assert_eq!(transport.user_message(), PREDICTION_FAILED_MESSAGE);
        assert_eq!(service.user_message(), PREDICTION_FAILED_MESSAGE);
    }

    #[test]
    fn display_keeps_diagnostic_detail() {
        let err = AppError::Service("Server error (500)".to_string());
        assert_eq!(err.to_string(), "Service error: Server error (500)");
    }

    #[test]
    fn capitalize_label_uppercases_first_char() {
        assert_eq!(capitalize_label("plastic"), "Plastic");
        assert_eq!(capitalize_label("Trash"), "Trash");
        assert_eq!(capitalize_label(""), "");
        assert_eq!(capitalize_label("émail"), "Émail");
    }
}
