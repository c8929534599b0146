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

use thiserror::Error;

/// Possible ranking errors.
///
/// All of them are configuration errors surfaced at construction or binding
/// time. Contract violations during comparison (mis-aligned sort value rows,
/// mismatched scalar types, an unresolved `Auto` kind) are defects in the
/// caller and panic instead.
#[derive(Error, Debug)]
pub enum RankError {
    #[error("invalid hit queue capacity: {0} (must be greater than zero)")]
    InvalidCapacity(usize),
    #[error("invalid locale `{locale}`: {reason}")]
    InvalidLocale { locale: String, reason: String },
    #[error("failed to build collator for locale `{locale}`: {reason}")]
    Collator { locale: String, reason: String },
}
