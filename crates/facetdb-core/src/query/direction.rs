use serde::{Deserialize, Serialize};

///
/// SortDirective
///
/// Caller-selected ordering mode shared by request parsing and the typed
/// orderer.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum SortDirective {
    Asc,
    Desc,
    #[default]
    Unspecified,
}

impl SortDirective {
    /// Parse the request keyword.
    ///
    /// Exactly `"ASC"` and `"DESC"` are recognized; anything else,
    /// including case variants and `"NONE"`, means no ordering.
    /// Unrecognized input is never an error.
    #[must_use]
    pub fn from_keyword(keyword: Option<&str>) -> Self {
        match keyword {
            Some("ASC") => Self::Asc,
            Some("DESC") => Self::Desc,
            _ => Self::Unspecified,
        }
    }

    #[must_use]
    pub const fn is_sorted(self) -> bool {
        !matches!(self, Self::Unspecified)
    }
}

///
/// TESTS
///
