//! The submission pipeline: one POST of the draft, then outcome
//! classification.
//!
//! `submit` performs exactly one request - no retries on any path. Transport
//! failures surface as [`SubmitError`]; any HTTP response, success or not,
//! maps to an [`Outcome`] so the caller can dispatch the matching effect.
//! The session credential is passed in explicitly at call time.

use crate::draft::Draft;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Request timeout for a submission.
const SUBMIT_TIMEOUT: Duration = Duration::from_secs(20);

/// Header carrying the bearer credential, as the posts API expects it.
const ACCESS_TOKEN_HEADER: &str = "access_token";

/// Transport-level submission failures (no HTTP response was obtained).
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Request exceeded the 20-second timeout
    #[error("Request timed out after 20s")]
    Timeout,
    /// Network-level error (DNS, connection, TLS, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Categorized result of a submission attempt.
///
/// Derived purely from the HTTP status; consumed once by the outcome
/// dispatcher to select user-visible effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// 200 - the post was created.
    Accepted,
    /// 403 - the session credential is no longer valid.
    AuthExpired,
    /// 401 - the caller is not allowed to create posts.
    Unauthorized,
    /// Any other status; carries the server's message when one was provided.
    Rejected { status: u16, message: String },
}

/// Error body shape the posts API uses for rejections.
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Submit a draft to `{base_url}/api/posts/`.
///
/// The caller is responsible for local validation before calling; this
/// function only performs the network step. `credential` is attached as a
/// `Bearer` value in the `access_token` header.
pub async fn submit(
    client: &reqwest::Client,
    base_url: &str,
    credential: &SecretString,
    draft: &Draft,
) -> Result<Outcome, SubmitError> {
    let endpoint = format!("{}/api/posts/", base_url.trim_end_matches('/'));

    let request = client
        .post(&endpoint)
        .header(
            ACCESS_TOKEN_HEADER,
            format!("Bearer {}", credential.expose_secret()),
        )
        .json(draft);

    let response = tokio::time::timeout(SUBMIT_TIMEOUT, request.send())
        .await
        .map_err(|_| SubmitError::Timeout)?
        .map_err(SubmitError::Network)?;

    let status = response.status().as_u16();
    let outcome = match status {
        200 => Outcome::Accepted,
        403 => Outcome::AuthExpired,
        401 => Outcome::Unauthorized,
        _ => {
            // Surface the server's message when the body is the usual
            // {"message": ...} shape; otherwise fall back to the status line.
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.message,
                Err(_) => format!("Server returned status {}", status),
            };
            Outcome::Rejected { status, message }
        }
    };

    tracing::debug!(status, outcome = ?outcome, "Submission response classified");
    Ok(outcome)
}
