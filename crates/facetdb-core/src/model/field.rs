use crate::value::ValueTag;
use serde::{Deserialize, Serialize};

///
/// FieldModel
/// Runtime field metadata: one named column of a dataset schema.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FieldModel {
    /// Field name as used in requests and schema checks.
    pub name: String,
    /// Declared value kind for the column.
    pub kind: ValueTag,
}

impl FieldModel {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ValueTag) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}
