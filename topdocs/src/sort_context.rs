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

use once_cell::sync::OnceCell;
use tracing::debug;

use crate::collation::{resolve_collators, LocaleCollator};
use crate::hit_queue::RankedDocument;
use crate::sort_field::{SortField, SortFieldKind};
use crate::sort_value::SortValue;
use crate::Result;

/// The finalized sort-field sequence and its derived collators, used for
/// every comparison in one ranking operation.
///
/// Published at most once through [`SortContextCell`] and immutable
/// afterwards, so comparisons from multiple merge threads are plain data
/// reads.
#[derive(Debug)]
pub struct BoundSortContext {
    fields: Vec<SortField>,
    collators: Vec<Option<LocaleCollator>>,
}

impl BoundSortContext {
    fn resolve(fields: Vec<SortField>) -> Result<Self> {
        let collators = resolve_collators(&fields)?;
        Ok(BoundSortContext { fields, collators })
    }

    pub fn fields(&self) -> &[SortField] {
        &self.fields
    }

    /// Orders two candidate documents: `Ordering::Greater` means `a` is more
    /// relevant than `b`.
    ///
    /// Bound fields are evaluated in order, stopping at the first one that
    /// discriminates. Exact ties across all fields fall back to the document
    /// id, the larger id losing, so the order is total and deterministic and
    /// repeated or paginated queries cannot see duplicate or missing hits.
    pub fn compare(&self, a: &RankedDocument, b: &RankedDocument) -> Ordering {
        assert!(
            a.sort_values.len() >= self.fields.len() && b.sort_values.len() >= self.fields.len(),
            "internal error: document sort values ({}/{}) shorter than the {} bound sort fields",
            a.sort_values.len(),
            b.sort_values.len(),
            self.fields.len(),
        );
        for (index, field) in self.fields.iter().enumerate() {
            let left = a.sort_values[index].as_ref();
            let right = b.sort_values[index].as_ref();
            let mut by_field = self.compare_field(index, field, left, right);
            if field.reverse {
                by_field = by_field.reverse();
            }
            if by_field != Ordering::Equal {
                // `by_field` orders ascending field values; the document with
                // the smaller value is the more relevant one.
                return by_field.reverse();
            }
        }
        b.doc_id.cmp(&a.doc_id)
    }

    /// Whether `a` should be ranked after `b`.
    #[inline]
    pub fn less_relevant(&self, a: &RankedDocument, b: &RankedDocument) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    fn compare_field(
        &self,
        index: usize,
        field: &SortField,
        left: Option<&SortValue>,
        right: Option<&SortValue>,
    ) -> Ordering {
        match field.kind {
            SortFieldKind::String => match (left, right) {
                // Ordinal-indexed field caches reserve the lowest ordinal for
                // "document has no value": absent values collate first. A
                // null/null tie moves on to the next field.
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Less,
                (Some(_), None) => Ordering::Greater,
                (Some(left), Some(right)) => {
                    let left = left.expect_text();
                    let right = right.expect_text();
                    match &self.collators[index] {
                        Some(collator) => collator.compare(left, right),
                        None => left.cmp(right),
                    }
                }
            },
            // Natural numeric order ranks the larger score "greater", but a
            // larger score must collate like a smaller ascending value.
            SortFieldKind::Score => Self::compare_scalar_opt(left, right).reverse(),
            SortFieldKind::Auto => panic!(
                "internal error: unresolved Auto sort kind at comparison time (field `{}`)",
                field.field
            ),
            _ => Self::compare_scalar_opt(left, right),
        }
    }

    fn compare_scalar_opt(left: Option<&SortValue>, right: Option<&SortValue>) -> Ordering {
        match (left, right) {
            (Some(left), Some(right)) => left.compare_scalar(right),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => Ordering::Equal,
        }
    }
}

/// Write-once holder for the sort-field sequence of one ranking operation.
///
/// Several result-merging workers may race to finalize a deferred
/// ([`SortFieldKind::Auto`]) sort specification once the first concrete
/// result set defines it. The first writer wins; later calls are accepted
/// no-ops. The snapshot is published atomically: a reader never observes
/// the fields without their derived collators.
#[derive(Debug, Default)]
pub struct SortContextCell {
    inner: OnceCell<BoundSortContext>,
}

impl SortContextCell {
    pub fn new() -> Self {
        SortContextCell {
            inner: OnceCell::new(),
        }
    }

    /// Binds the sort-field sequence. First successful caller wins.
    pub fn bind(&self, fields: Vec<SortField>) -> Result<()> {
        let mut newly_bound = false;
        self.inner.get_or_try_init(|| {
            newly_bound = true;
            BoundSortContext::resolve(fields)
        })?;
        if newly_bound {
            debug!(num_fields = self.fields().len(), "bound sort context");
        }
        Ok(())
    }

    /// The bound sort fields, empty while unbound.
    pub fn fields(&self) -> &[SortField] {
        self.inner
            .get()
            .map(BoundSortContext::fields)
            .unwrap_or_default()
    }

    pub fn get(&self) -> Option<&BoundSortContext> {
        self.inner.get()
    }

    /// Compares under the bound context. Unbound, this is a zero-field sort:
    /// only the doc-id tie-break applies.
    #[inline]
    pub(crate) fn compare(&self, a: &RankedDocument, b: &RankedDocument) -> Ordering {
        match self.inner.get() {
            Some(context) => context.compare(a, b),
            None => b.doc_id.cmp(&a.doc_id),
        }
    }
}
