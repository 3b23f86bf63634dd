use crate::api::ImageRecord;
use crate::store::mvi::Intent;

/// State transitions of the gallery cache.
#[derive(Debug, Clone)]
pub enum GalleryIntent {
    /// Store fetched records under `(category, page)`, overwriting any
    /// previous entry for that key. Other keys are untouched.
    SetData {
        category: String,
        page: u32,
        records: Vec<ImageRecord>,
    },
    /// Move the pagination cursor. Callers keep `page >= 1`; the reducer
    /// does not validate bounds.
    SetPage(u32),
    /// Switch category. Pagination always restarts at page 1.
    SetCategory(String),
}

impl Intent for GalleryIntent {}
