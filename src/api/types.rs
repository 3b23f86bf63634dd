use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One image hit as returned by the search service.
///
/// The service's payload shape is not under our control, so every field
/// it may omit is optional, and anything unrecognized lands in `extra`
/// so records round-trip through the snapshot file without loss.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImageRecord {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default, rename = "previewURL")]
    pub preview_url: Option<String>,
    #[serde(default, rename = "previewWidth")]
    pub preview_width: Option<i64>,
    #[serde(default, rename = "previewHeight")]
    pub preview_height: Option<i64>,
    #[serde(default, rename = "webformatURL")]
    pub webformat_url: Option<String>,
    #[serde(default, rename = "webformatWidth")]
    pub webformat_width: Option<i64>,
    #[serde(default, rename = "webformatHeight")]
    pub webformat_height: Option<i64>,
    #[serde(default, rename = "largeImageURL")]
    pub large_image_url: Option<String>,
    #[serde(default, rename = "imageWidth")]
    pub image_width: Option<i64>,
    #[serde(default, rename = "imageHeight")]
    pub image_height: Option<i64>,
    #[serde(default, rename = "imageSize")]
    pub image_size: Option<i64>,
    #[serde(default)]
    pub views: Option<i64>,
    #[serde(default)]
    pub downloads: Option<i64>,
    #[serde(default)]
    pub collections: Option<i64>,
    #[serde(default)]
    pub likes: Option<i64>,
    #[serde(default)]
    pub comments: Option<i64>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub user: Option<String>,
    /// Fields this client does not model, preserved verbatim.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Response envelope of `GET /images`.
///
/// `total <= 0` means the requested page is past the end of the result
/// set for the category.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub hits: Vec<ImageRecord>,
}
