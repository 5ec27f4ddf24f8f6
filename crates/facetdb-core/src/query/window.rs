use crate::value::Value;
use serde::{Deserialize, Serialize};

///
/// PageRequest
///
/// Requested page over the ordered distinct set. Both bounds are optional;
/// absence means "start at 0" / "no limit". Signed inputs are accepted so
/// out-of-range caller values clamp instead of failing at the type level.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct PageRequest {
    pub start_index: Option<i64>,
    pub max_count: Option<i64>,
}

impl PageRequest {
    #[must_use]
    pub const fn new(start_index: Option<i64>, max_count: Option<i64>) -> Self {
        Self {
            start_index,
            max_count,
        }
    }

    /// The whole sequence: start at 0, no limit.
    #[must_use]
    pub const fn all() -> Self {
        Self::new(None, None)
    }
}

/// Clip the ordered sequence to the requested window.
///
/// Effective start is `start_index` clamped into `[0, len]`; effective end
/// is `start + max_count` clamped to `len`, with a negative `max_count`
/// treated as "no limit". The result is the slice `[start, end)` as a new
/// owned sequence. This never fails: an empty window is valid output.
#[must_use]
pub fn window(values: Vec<Value>, page: &PageRequest) -> Vec<Value> {
    let len = values.len();

    let start = match page.start_index {
        Some(start) if start < 0 => 0,
        Some(start) => usize::try_from(start).map_or(len, |start| start.min(len)),
        None => 0,
    };
    let count = match page.max_count {
        Some(max) if max >= 0 => usize::try_from(max).unwrap_or(usize::MAX),
        _ => usize::MAX,
    };

    values.into_iter().skip(start).take(count).collect()
}

///
/// TESTS
///
