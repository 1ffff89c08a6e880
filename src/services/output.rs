//! Shared response shapes.
//!
//! Every workflow answers with an `{ ok, error? }` payload instead of a `Result`:
//! failures are part of the response, already phrased for the end user.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoreOutput {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CoreOutput {
    pub fn success() -> Self {
        Self { ok: true, error: None }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(error.into()),
        }
    }
}

/// A 1-based page request. Page `0` is read as page `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInput {
    #[serde(default = "first_page")]
    pub page: u32,
}

fn first_page() -> u32 {
    1
}

impl Default for PageInput {
    fn default() -> Self {
        Self { page: first_page() }
    }
}

/// One page out of `items` plus the page count.
pub(crate) fn paginate<T>(items: Vec<T>, page: u32, page_size: usize) -> (Vec<T>, u32, usize) {
    let total_results = items.len();
    let total_pages = total_results.div_ceil(page_size) as u32;
    let skip = (page.max(1) as usize - 1).saturating_mul(page_size);
    let results = items.into_iter().skip(skip).take(page_size).collect();
    (results, total_pages, total_results)
}
