//! Client-side ordering of the current page.
//!
//! Sorting is recomputed from the cached page on every render and never
//! written back to the cache.

use std::cmp::Ordering;

use crate::api::ImageRecord;

/// Fields the gallery can be ordered by, always descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Id,
    Collections,
    Comments,
    Downloads,
    Likes,
    ImageHeight,
    ImageSize,
    ImageWidth,
    PreviewHeight,
    PreviewWidth,
    User,
    UserId,
    Views,
    WebformatWidth,
}

impl SortField {
    /// All fields, in the order the sort panel lists them.
    pub fn all() -> &'static [SortField] {
        &[
            Self::Id,
            Self::Collections,
            Self::Comments,
            Self::Downloads,
            Self::Likes,
            Self::ImageHeight,
            Self::ImageSize,
            Self::ImageWidth,
            Self::PreviewHeight,
            Self::PreviewWidth,
            Self::User,
            Self::UserId,
            Self::Views,
            Self::WebformatWidth,
        ]
    }

    /// Label shown next to the radio marker in the sort panel.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Id => "Sort by ID",
            Self::Collections => "Sort by Collections",
            Self::Comments => "Sort by Comments",
            Self::Downloads => "Sort by Downloads",
            Self::Likes => "Sort by Likes",
            Self::ImageHeight => "Sort by Image Height",
            Self::ImageSize => "Sort by Image Size",
            Self::ImageWidth => "Sort by Image Width",
            Self::PreviewHeight => "Sort by Preview Height",
            Self::PreviewWidth => "Sort by Preview Width",
            Self::User => "Sort by User",
            Self::UserId => "Sort by User ID",
            Self::Views => "Sort by Views",
            Self::WebformatWidth => "Sort by Web Format Width",
        }
    }
}

/// The comparable value a record exposes for a sort field.
enum SortKey {
    Number(f64),
    Text(String),
}

fn sort_key(record: &ImageRecord, field: SortField) -> Option<SortKey> {
    let number = |value: Option<i64>| value.map(|n| SortKey::Number(n as f64));
    match field {
        SortField::Id => Some(SortKey::Number(record.id as f64)),
        SortField::Collections => number(record.collections),
        SortField::Comments => number(record.comments),
        SortField::Downloads => number(record.downloads),
        SortField::Likes => number(record.likes),
        SortField::ImageHeight => number(record.image_height),
        SortField::ImageSize => number(record.image_size),
        SortField::ImageWidth => number(record.image_width),
        SortField::PreviewHeight => number(record.preview_height),
        SortField::PreviewWidth => number(record.preview_width),
        SortField::User => record.user.clone().map(SortKey::Text),
        SortField::UserId => number(record.user_id),
        SortField::Views => number(record.views),
        SortField::WebformatWidth => number(record.webformat_width),
    }
}

/// Descending comparison over `field`. Pairs whose values are missing or
/// of different kinds compare equal instead of erroring, so the sort is
/// a stable no-op for them.
fn compare(a: &ImageRecord, b: &ImageRecord, field: SortField) -> Ordering {
    match (sort_key(a, field), sort_key(b, field)) {
        (Some(SortKey::Number(x)), Some(SortKey::Number(y))) => {
            y.partial_cmp(&x).unwrap_or(Ordering::Equal)
        }
        (Some(SortKey::Text(x)), Some(SortKey::Text(y))) => y.cmp(&x),
        _ => Ordering::Equal,
    }
}

/// New descending ordering of `records` by `field`. The input is never
/// mutated.
pub fn sorted_by(records: &[ImageRecord], field: SortField) -> Vec<ImageRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| compare(a, b, field));
    sorted
}
