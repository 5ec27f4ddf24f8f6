use crate::value::Value;
use derive_more::{Deref, IntoIterator};
use serde::{Deserialize, Serialize};

///
/// ResultPage
///
/// The ordered, windowed page of distinct values handed to the caller's
/// result sink. Packaging into an output container or wire format is the
/// sink's concern, not the pipeline's.
///

#[derive(Clone, Debug, Default, Deref, Deserialize, Eq, IntoIterator, PartialEq, Serialize)]
pub struct ResultPage(#[into_iterator(owned, ref)] pub Vec<Value>);

impl ResultPage {
    #[must_use]
    pub const fn count(&self) -> u64 {
        self.0.len() as u64
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.0
    }

    #[must_use]
    pub fn into_values(self) -> Vec<Value> {
        self.0
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_expose_the_page() {
        let page = ResultPage(vec![Value::Null, Value::from(1i32)]);
        assert_eq!(page.count(), 2);
        assert!(!page.is_empty());
        assert_eq!(page.values()[0], Value::Null);
        assert_eq!(page.into_values().len(), 2);
    }

    #[test]
    fn serializes_as_a_plain_sequence() {
        let page = ResultPage(vec![Value::from("a")]);
        let json = serde_json::to_string(&page).expect("serialize");
        assert_eq!(json, r#"[{"Text":"a"}]"#);
    }
}
