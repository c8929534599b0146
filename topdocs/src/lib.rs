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

//! Result-ranking core of a full-text search engine.
//!
//! This crate merges per-document sort values coming from one or many
//! searchable sources into a single, bounded, correctly-ordered top-K result
//! set. It is organized around three pieces:
//!
//! - [`SortContextCell`], a write-once, first-writer-wins register for the
//!   effective [`SortField`] sequence and its derived locale collators.
//!   Fan-out searches where the true sort type is only known once the first
//!   concrete results come back ([`SortFieldKind::Auto`]) race to bind it,
//!   and exactly one binding survives.
//! - the compound comparator on [`BoundSortContext`], a strict total order
//!   over [`RankedDocument`]s: field by field, locale-aware where declared,
//!   score-inverted, reverse-aware, with a deterministic doc-id tie-break.
//! - [`SortedHitQueue`], a fixed-capacity priority queue retaining the K most
//!   relevant documents seen so far, and [`collate_top_k`] to merge
//!   per-source batches into one best-first sequence.
//!
//! Field-value extraction, scoring and storage are upstream concerns: this
//! crate only consumes already-computed values.

mod collation;
mod error;
mod hit_queue;
mod sort_context;
mod sort_field;
mod sort_value;

pub use collation::{resolve_collators, LocaleCollator};
pub use error::RankError;
pub use hit_queue::{collate_top_k, RankedDocument, SortedHitQueue};
pub use sort_context::{BoundSortContext, SortContextCell};
pub use sort_field::{SortField, SortFieldKind};
pub use sort_value::SortValue;

/// Crate-level `Result` type.
pub type Result<T> = std::result::Result<T, RankError>;
