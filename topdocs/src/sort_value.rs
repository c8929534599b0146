// Copyright 2026-Present the topdocs authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::cmp::Ordering;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// One per-document, per-field comparable value.
///
/// Textual values come in two representations: a plain owned string, and a
/// compact refcounted slice that clones without allocating. Extraction
/// layers that materialize sort values for millions of candidates use the
/// compact form; the comparator treats both transparently.
///
/// An absent value is modeled as `Option<SortValue>::None` in the
/// document's value row.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortValue {
    U64(u64),
    I64(i64),
    F64(f64),
    Text(String),
    SharedText(Arc<str>),
}

impl SortValue {
    /// Builds the compact textual representation.
    pub fn shared_text(text: impl AsRef<str>) -> Self {
        SortValue::SharedText(Arc::from(text.as_ref()))
    }

    /// The textual form, if this value is textual.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SortValue::Text(text) => Some(text),
            SortValue::SharedText(text) => Some(text),
            _ => None,
        }
    }

    pub(crate) fn expect_text(&self) -> &str {
        self.as_text()
            .unwrap_or_else(|| panic!("internal error: expected a textual sort value, got `{self:?}`"))
    }

    /// Standard ordered comparison between two scalar values of the same
    /// kind. `F64` uses the IEEE 754 total order, so NaN compares
    /// deterministically.
    ///
    /// Value rows are type-consistent per field index once the sort context
    /// is bound; a representation mismatch here is a caller defect.
    pub(crate) fn compare_scalar(&self, other: &SortValue) -> Ordering {
        match (self, other) {
            (SortValue::U64(left), SortValue::U64(right)) => left.cmp(right),
            (SortValue::I64(left), SortValue::I64(right)) => left.cmp(right),
            (SortValue::F64(left), SortValue::F64(right)) => left.total_cmp(right),
            (left, right) => panic!(
                "internal error: comparing sort values of mismatched types `{left:?}` and `{right:?}`"
            ),
        }
    }
}

impl From<&str> for SortValue {
    fn from(text: &str) -> Self {
        SortValue::Text(text.to_string())
    }
}

impl From<u64> for SortValue {
    fn from(value: u64) -> Self {
        SortValue::U64(value)
    }
}

impl From<i64> for SortValue {
    fn from(value: i64) -> Self {
        SortValue::I64(value)
    }
}

impl From<f64> for SortValue {
    fn from(value: f64) -> Self {
        SortValue::F64(value)
    }
}
