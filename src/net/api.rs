//! HTTP client for the external prediction endpoint.
//!
//! Client-side (hydrate): real multipart upload via `gloo-net`.
//! Server-side (SSR): stub returning an error since prediction is only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode — transport error, non-2xx status, unparsable body,
//! out-of-range confidence — collapses into `Err(String)`. Callers surface
//! it as a single failed-analysis notification; the message itself is only
//! ever logged.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::Prediction;

/// Fixed address of the inference service (the FastAPI backend's uvicorn
/// default).
pub const PREDICT_ENDPOINT: &str = "http://localhost:8000/predict";

/// Form field the endpoint expects the image bytes under.
pub const PREDICT_FILE_FIELD: &str = "file";

#[cfg(any(test, feature = "hydrate"))]
fn predict_failed_message(status: u16) -> String {
    format!("predict request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn malformed_confidence_message(confidence: f64) -> String {
    format!("confidence out of range: {confidence}")
}

/// Upload an image to `POST /predict` and return the parsed classification.
///
/// # Errors
///
/// Returns an error string if the request cannot be built or sent, the
/// server responds with a non-2xx status, or the body is malformed.
pub async fn predict(file: &web_sys::File) -> Result<Prediction, String> {
    #[cfg(feature = "hydrate")]
    {
        let form = web_sys::FormData::new().map_err(|_| "form construction failed".to_owned())?;
        form.append_with_blob_and_filename(PREDICT_FILE_FIELD, file, &file.name())
            .map_err(|_| "form construction failed".to_owned())?;

        let resp = gloo_net::http::Request::post(PREDICT_ENDPOINT)
            .body(form)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(predict_failed_message(resp.status()));
        }
        let body: Prediction = resp.json().await.map_err(|e| e.to_string())?;
        if !body.is_well_formed() {
            return Err(malformed_confidence_message(body.confidence));
        }
        Ok(body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = file;
        Err("not available on server".to_owned())
    }
}
