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
use std::fmt;

use icu_collator::options::{CollatorOptions, Strength};
use icu_collator::{Collator, CollatorBorrowed, CollatorPreferences};
use icu_locale_core::Locale;

use crate::sort_field::SortField;
use crate::{RankError, Result};

/// A string comparator bound to one locale's collation rules.
pub struct LocaleCollator {
    collator: CollatorBorrowed<'static>,
}

impl LocaleCollator {
    pub fn new(locale: &Locale) -> Result<Self> {
        let mut options = CollatorOptions::default();
        options.strength = Some(Strength::Tertiary);
        let collator = Collator::try_new(CollatorPreferences::from(locale.clone()), options)
            .map_err(|err| RankError::Collator {
                locale: locale.to_string(),
                reason: err.to_string(),
            })?;
        Ok(LocaleCollator { collator })
    }

    /// Orders two strings under this locale's rules.
    #[inline]
    pub fn compare(&self, left: &str, right: &str) -> Ordering {
        self.collator.compare(left, right)
    }
}

impl fmt::Debug for LocaleCollator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleCollator").finish_non_exhaustive()
    }
}

/// Derives the collator sequence for `fields`.
///
/// The returned sequence is index-aligned with `fields`; entry `i` is
/// present iff `fields[i]` declares a locale. Pure: no state, no caching
/// beyond the returned array.
pub fn resolve_collators(fields: &[SortField]) -> Result<Vec<Option<LocaleCollator>>> {
    fields
        .iter()
        .map(|field| field.locale.as_ref().map(LocaleCollator::new).transpose())
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::sort_field::SortFieldKind;

    use super::*;

    #[test]
    fn test_collators_align_with_locale_fields() {
        let fields = vec![
            SortField::new("count", SortFieldKind::Long),
            SortField::new("title", SortFieldKind::String)
                .with_locale("en")
                .unwrap(),
            SortField::new("body", SortFieldKind::String),
        ];
        let collators = resolve_collators(&fields).unwrap();
        assert_eq!(collators.len(), 3);
        assert!(collators[0].is_none());
        assert!(collators[1].is_some());
        assert!(collators[2].is_none());
    }

    #[test]
    fn test_locale_collation_differs_from_byte_order() {
        let locale: Locale = "en".parse().unwrap();
        let collator = LocaleCollator::new(&locale).unwrap();
        // Byte-wise, uppercase sorts before lowercase and accented letters
        // after ASCII; the collator orders both linguistically.
        assert_eq!(collator.compare("a", "B"), Ordering::Less);
        assert!("a" > "B");
        assert_eq!(collator.compare("étude", "f"), Ordering::Less);
        assert!("étude" > "f");
    }
}
