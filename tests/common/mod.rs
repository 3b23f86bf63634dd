//! Scripted image client for coordinator and app tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use pixgrid::api::{ApiError, ImageClient, ImageRecord, SearchFuture, SearchResponse};

/// Pops one queued response per call and records the requested keys for
/// assertions. Unscripted calls fail with a sentinel status.
pub struct MockImageClient {
    responses: Mutex<VecDeque<Result<SearchResponse, ApiError>>>,
    calls: Mutex<Vec<(String, u32)>>,
}

impl MockImageClient {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn queue_ok(&self, total: i64, hits: Vec<ImageRecord>) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(SearchResponse { total, hits }));
    }

    pub fn queue_err(&self, status: u16) {
        self.responses.lock().unwrap().push_back(Err(ApiError::Status {
            status,
            url: "http://mock/images".to_string(),
        }));
    }

    pub fn calls(&self) -> Vec<(String, u32)> {
        self.calls.lock().unwrap().clone()
    }
}

impl ImageClient for MockImageClient {
    fn search(&self, category: &str, page: u32) -> SearchFuture {
        self.calls
            .lock()
            .unwrap()
            .push((category.to_string(), page));
        let response = self.responses.lock().unwrap().pop_front();
        Box::pin(async move {
            match response {
                Some(result) => result,
                None => Err(ApiError::Status {
                    status: 599,
                    url: "http://mock/images (unscripted call)".to_string(),
                }),
            }
        })
    }
}

pub fn record(id: u64, views: i64) -> ImageRecord {
    ImageRecord {
        id,
        views: Some(views),
        ..ImageRecord::default()
    }
}

/// `count` records with ascending ids and views.
pub fn records(count: usize) -> Vec<ImageRecord> {
    (0..count)
        .map(|i| record(i as u64 + 1, (i as i64 + 1) * 10))
        .collect()
}
