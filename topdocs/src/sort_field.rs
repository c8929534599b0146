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

use icu_locale_core::Locale;
use serde::{Deserialize, Serialize};

use crate::{RankError, Result};

/// The value kind of one sort criterion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortFieldKind {
    /// Textual values, ordinal or locale-aware.
    String,
    Int,
    Long,
    Float,
    Double,
    /// The relevance score. Higher scores rank first.
    Score,
    /// The document id itself.
    Doc,
    /// Values carrying their own ordering, supplied by the caller.
    Custom,
    /// The kind is not known yet. Distributed searches declare `Auto` and
    /// resolve it to a concrete kind once the first concrete result set
    /// comes back; an `Auto` field must never reach the comparator.
    Auto,
}

/// A single, immutable sort criterion: field identifier, value kind, sort
/// direction and an optional locale for locale-aware string comparison.
///
/// The locale is validated at construction, so downstream collator
/// resolution cannot fail on a well-formed `SortField`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SortField {
    pub field: String,
    pub kind: SortFieldKind,
    #[serde(default)]
    pub reverse: bool,
    #[serde(default, with = "locale_serde", skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
}

impl SortField {
    pub fn new(field: impl Into<String>, kind: SortFieldKind) -> Self {
        SortField {
            field: field.into(),
            kind,
            reverse: false,
            locale: None,
        }
    }

    /// Reverses the sort direction of this criterion.
    pub fn reversed(mut self) -> Self {
        self.reverse = true;
        self
    }

    /// Attaches a locale, given as a BCP-47 identifier.
    pub fn with_locale(mut self, locale: &str) -> Result<Self> {
        let parsed: Locale = locale.parse().map_err(|err| RankError::InvalidLocale {
            locale: locale.to_string(),
            reason: format!("{err:?}"),
        })?;
        self.locale = Some(parsed);
        Ok(self)
    }
}

mod locale_serde {
    use icu_locale_core::Locale;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        locale: &Option<Locale>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match locale {
            Some(locale) => serializer.serialize_some(&locale.to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Locale>, D::Error> {
        let repr: Option<String> = Option::deserialize(deserializer)?;
        repr.map(|raw| raw.parse::<Locale>().map_err(|err| D::Error::custom(format!("{err:?}"))))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_field_builders() {
        let sort_field = SortField::new("title", SortFieldKind::String)
            .reversed()
            .with_locale("fr-FR")
            .unwrap();
        assert_eq!(sort_field.field, "title");
        assert!(sort_field.reverse);
        assert_eq!(sort_field.locale.as_ref().unwrap().to_string(), "fr-FR");
    }

    #[test]
    fn test_invalid_locale_is_rejected() {
        let err = SortField::new("title", SortFieldKind::String)
            .with_locale("not a locale!")
            .unwrap_err();
        assert!(matches!(err, RankError::InvalidLocale { .. }));
    }

    #[test]
    fn test_sort_field_json_round_trip() {
        let sort_field = SortField::new("published_at", SortFieldKind::Long).reversed();
        let json = serde_json::to_string(&sort_field).unwrap();
        assert_eq!(
            json,
            r#"{"field":"published_at","kind":"long","reverse":true}"#
        );
        let back: SortField = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sort_field);

        let localized = SortField::new("title", SortFieldKind::String)
            .with_locale("de")
            .unwrap();
        let json = serde_json::to_string(&localized).unwrap();
        let back: SortField = serde_json::from_str(&json).unwrap();
        assert_eq!(back, localized);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let sort_field: SortField = serde_json::from_str(r#"{"field":"_score","kind":"score"}"#).unwrap();
        assert!(!sort_field.reverse);
        assert!(sort_field.locale.is_none());
    }
}
