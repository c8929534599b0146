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

use itertools::Itertools;
use topdocs_common::binary_heap::BoundedHeap;
use tracing::debug;

use crate::sort_context::SortContextCell;
use crate::sort_field::SortField;
use crate::sort_value::SortValue;
use crate::{RankError, Result};

/// A candidate search result: document id, relevance score, and the
/// per-field sort values computed by the extraction layer, index-aligned
/// with the bound sort fields.
///
/// Immutable for the lifetime of its presence in the queue.
#[derive(Clone, Debug)]
pub struct RankedDocument {
    pub doc_id: u64,
    pub score: f32,
    pub sort_values: Vec<Option<SortValue>>,
}

impl RankedDocument {
    pub fn new(doc_id: u64, score: f32, sort_values: Vec<Option<SortValue>>) -> Self {
        RankedDocument {
            doc_id,
            score,
            sort_values,
        }
    }
}

/// Queue element: a document plus the shared sort context its ordering
/// reads. `Ord` delegates to the compound comparator, so the heap can stay
/// a plain [`BoundedHeap`].
#[derive(Debug)]
struct QueueHit {
    doc: RankedDocument,
    context: Arc<SortContextCell>,
}

impl Ord for QueueHit {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.context.compare(&self.doc, &other.doc)
    }
}

impl PartialOrd for QueueHit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueueHit {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueHit {}

/// Collects sorted results from independent searchers and collates them
/// into the top-`capacity` most relevant documents.
///
/// The queue owns a [`SortContextCell`]; fan-out workers that only discover
/// the true sort types from their first concrete results grab it via
/// [`SortedHitQueue::context`] and race to [`bind`](SortedHitQueue::bind)
/// — the first one wins. Binding must happen before the first insertion of
/// a document that carries sort values.
///
/// The queue itself is not synchronized: one ranking operation owns one
/// queue and feeds it sequentially.
#[derive(Debug)]
pub struct SortedHitQueue {
    heap: BoundedHeap<QueueHit>,
    context: Arc<SortContextCell>,
}

impl SortedHitQueue {
    /// Creates a queue retaining the `capacity` most relevant documents.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(RankError::InvalidCapacity(capacity));
        }
        debug!(capacity, "creating sorted hit queue");
        Ok(SortedHitQueue {
            heap: BoundedHeap::with_capacity(capacity),
            context: Arc::new(SortContextCell::new()),
        })
    }

    /// The shared sort context cell, for workers that bind late.
    pub fn context(&self) -> Arc<SortContextCell> {
        self.context.clone()
    }

    /// Binds the sort fields for this queue; see [`SortContextCell::bind`].
    pub fn bind(&self, fields: Vec<SortField>) -> Result<()> {
        self.context.bind(fields)
    }

    /// The bound sort fields, empty while unbound.
    pub fn fields(&self) -> &[SortField] {
        self.context.fields()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    /// Admits one candidate.
    ///
    /// Returns the document that lost its spot: the previous least-relevant
    /// retained document if the candidate displaced it, the candidate itself
    /// if it was not more relevant than the current worst, or `None` while
    /// below capacity.
    #[inline]
    pub fn insert(&mut self, doc: RankedDocument) -> Option<RankedDocument> {
        let hit = QueueHit {
            doc,
            context: self.context.clone(),
        };
        self.heap.insert(hit).map(|evicted| evicted.doc)
    }

    /// The least relevant document currently retained.
    pub fn peek_worst(&self) -> Option<&RankedDocument> {
        self.heap.peek_min().map(|hit| &hit.doc)
    }

    /// Consumes the queue, yielding ascending relevance (worst first).
    /// Callers needing best-first order reverse the result.
    pub fn drain_ordered(self) -> Vec<RankedDocument> {
        self.heap.drain_sorted().map(|hit| hit.doc).collect_vec()
    }
}

/// Collates per-source result batches into a single best-first top-K.
///
/// Binds `fields` once, feeds every batch through one bounded queue, and
/// returns the most relevant `capacity` documents, best first — the shape
/// response formatting consumes.
pub fn collate_top_k(
    batches: impl IntoIterator<Item = Vec<RankedDocument>>,
    fields: Vec<SortField>,
    capacity: usize,
) -> Result<Vec<RankedDocument>> {
    let mut queue = SortedHitQueue::new(capacity)?;
    queue.bind(fields)?;
    for doc in batches.into_iter().flatten() {
        queue.insert(doc);
    }
    let mut top_docs = queue.drain_ordered();
    top_docs.reverse();
    Ok(top_docs)
}
