mod client;
mod error;
mod types;

pub use client::{HttpImageClient, ImageClient, SearchFuture};
pub use error::ApiError;
pub use types::{ImageRecord, SearchResponse};
