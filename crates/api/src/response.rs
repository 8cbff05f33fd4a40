//! Shared response envelope types for API handlers.
//!
//! Every endpoint answers with `{ success, data, count? }`. Use these types
//! instead of ad-hoc `serde_json::json!` so the envelope shape stays
//! consistent and compile-time checked.

use serde::Serialize;

/// Standard `{ "success": true, "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        DataResponse {
            success: true,
            data,
        }
    }
}

/// List envelope: `{ "success": true, "data": [...], "count": N }`.
///
/// `count` is the length of `data`, included so clients can render totals
/// without measuring the array.
#[derive(Debug, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub success: bool,
    pub data: Vec<T>,
    pub count: usize,
}

impl<T: Serialize> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        let count = data.len();
        ListResponse {
            success: true,
            data,
            count,
        }
    }
}
