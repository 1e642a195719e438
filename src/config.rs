//! Application configuration.
//!
//! Centralized configuration for the waste classifier frontend.
//! In development, these are hardcoded. In production, they could be
//! loaded from environment or a config file.

/// Classification service base URL.
///
/// The backend exposing the `/predict` endpoint.
pub const BACKEND_URL: &str = "http://localhost:5000";

/// Application name, shown in the header.
pub const APP_NAME: &str = "CleanTech Waste Classifier";

/// Tagline shown below the application name.
pub const APP_TAGLINE: &str = "AI-Powered Waste Classification for a Sustainable Future";

/// Message shown when the user submits without selecting a file.
pub const NO_FILE_MESSAGE: &str = "Please select an image first.";

/// Generic message shown for any failed classification attempt.
///
/// Transport and service failures are not differentiated for the user;
/// the detail only goes to the console log.
pub const PREDICTION_FAILED_MESSAGE: &str = "Prediction failed. Please try again.";
