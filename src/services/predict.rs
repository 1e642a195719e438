//! HTTP service for submitting an image to the classification endpoint.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::types::{AppError, AppResult, PredictResponse};

/// Submit an image to the `/predict` endpoint.
///
/// Sends exactly one multipart request with the file bytes and filename
/// under the `image` field. The multipart content type (with boundary) is
/// set by the browser from the `FormData` body.
pub async fn classify_image(file: File, backend_url: &str) -> AppResult<PredictResponse> {
    // Build the multipart body
    let form_data =
        FormData::new().map_err(|e| AppError::Transport(format!("Failed to create FormData: {:?}", e)))?;

    form_data
        .append_with_blob_and_filename("image", &file, &file.name())
        .map_err(|e| AppError::Transport(format!("Failed to append image: {:?}", e)))?;

    // Send the request
    let url = format!("{}/predict", backend_url);
    let request = Request::post(&url)
        .body(form_data)
        .map_err(|e| AppError::Transport(format!("Failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Transport(format!("HTTP request failed: {}", e)))?;

    // Check the status
    if !response.ok() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(AppError::Service(format!(
            "Server error ({}): {}",
            response.status(),
            error_text
        )));
    }

    // Parse the JSON response
    response
        .json::<PredictResponse>()
        .await
        .map_err(|e| AppError::Service(format!("Failed to parse response: {}", e)))
}

#[cfg(test)]
mod tests {
    use crate::types::PredictResponse;

    #[test]
    fn test_response_deserialization() {
        let json = r#"{ "prediction": "plastic" }"#;

        let result: Result<PredictResponse, _> = serde_json::from_str(json);
        assert!(result.is_ok());

        let response = result.unwrap();
        assert_eq!(response.prediction, "plastic");
    }

    #[test]
    fn test_response_tolerates_extra_fields() {
        let json = r#"{ "prediction": "recyclable", "confidence": 0.93 }"#;

        let response: PredictResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.prediction, "recyclable");
    }

    #[test]
    fn test_response_missing_field_is_an_error() {
        // The Flask error shape has no "prediction" field
        let json = r#"{ "error": "No image uploaded" }"#;

        let result: Result<PredictResponse, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
