use thiserror::Error;

/// Errors from the image-search service.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to image service failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("image service returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("could not decode image service response: {0}")]
    MalformedBody(#[source] reqwest::Error),
}
