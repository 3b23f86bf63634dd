use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::api::ImageRecord;
use crate::store::mvi::StoreState;

/// Cached results and pagination cursor for the gallery domain.
///
/// `data_by_category[c][p]` is absent when the key was never fetched, or
/// a vec (possibly empty, meaning the service has no more results there).
/// Entries are only added or overwritten, never evicted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryState {
    pub data_by_category: HashMap<String, BTreeMap<u32, Vec<ImageRecord>>>,
    /// 1-based page cursor.
    pub page: u32,
    pub category: String,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            data_by_category: HashMap::new(),
            page: 1,
            category: "sport".to_string(),
        }
    }
}

impl StoreState for GalleryState {}

impl GalleryState {
    /// Records cached for `(category, page)`, if that key was ever fetched.
    /// An empty slice means the service reported no more results there.
    pub fn cached_page(&self, category: &str, page: u32) -> Option<&[ImageRecord]> {
        self.data_by_category
            .get(category)
            .and_then(|pages| pages.get(&page))
            .map(Vec::as_slice)
    }

    /// Records for the current cursor.
    pub fn current_records(&self) -> Option<&[ImageRecord]> {
        self.cached_page(&self.category, self.page)
    }
}
