//! Tokenized filtering and direction-toggling sort for directory screens.
//!
//! The vendor directory and market registry both derive their tables the
//! same way: a free-text query tokenized on whitespace (every token must
//! hit at least one searchable field), a conjunction of equality/range/flag
//! criteria, then a stable single-key sort whose direction flips when the
//! same column header is clicked again.

use std::cmp::Ordering;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

// ─────────────────────────────────────────────────────────────────────────────
// TEXT CRITERION
// ─────────────────────────────────────────────────────────────────────────────

/// A free-text query split into lowercase whitespace-delimited tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextQuery {
    tokens: Vec<String>,
}

impl TextQuery {
    /// Lowercase, trim and split on whitespace runs. Empty tokens never
    /// survive `split_whitespace`, so `"  "` parses to an empty query.
    pub fn parse(raw: &str) -> Self {
        let tokens = raw
            .to_lowercase()
            .split_whitespace()
            .map(String::from)
            .collect();
        Self { tokens }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Every token must appear as a substring of at least one field
    /// (AND across tokens, OR across fields, case-insensitive). An empty
    /// query matches everything.
    pub fn matches(&self, fields: &[&str]) -> bool {
        self.tokens.iter().all(|token| {
            fields
                .iter()
                .any(|field| field.to_lowercase().contains(token.as_str()))
        })
    }
}

/// Caller-declared searchable text fields for free-text matching.
pub trait TextSearchable {
    /// Field values the text criterion may match against.
    fn search_fields(&self) -> Vec<&str>;
}

// ─────────────────────────────────────────────────────────────────────────────
// EQUALITY / RANGE CRITERIA
// ─────────────────────────────────────────────────────────────────────────────

/// Equality criterion with the dropdowns' "ALL" sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldFilter<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> FieldFilter<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            FieldFilter::All => true,
            FieldFilter::Only(wanted) => wanted == value,
        }
    }
}

/// Inclusive numeric window (the registry's established-year range).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeFilter {
    pub start: i64,
    pub end: i64,
}

impl RangeFilter {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, value: i64) -> bool {
        value >= self.start && value <= self.end
    }
}

/// Retain entities matching the text criterion AND the caller's remaining
/// conjunction (equality filters, range filters, boolean flags). Order is
/// preserved; the result borrows from the input slice.
pub fn filter_entities<'a, E, P>(entities: &'a [E], query: &TextQuery, retain: P) -> Vec<&'a E>
where
    E: TextSearchable,
    P: Fn(&E) -> bool,
{
    let kept: Vec<&E> = entities
        .iter()
        .filter(|entity| query.matches(&entity.search_fields()) && retain(entity))
        .collect();
    debug!(tokens = query.tokens.len(), total = entities.len(), kept = kept.len(), "filtered directory");
    kept
}

/// Distinct values of a field, sorted — the directory builds its category
/// dropdown options from this.
pub fn distinct_values<E, F>(entities: &[E], value_of: F) -> Vec<String>
where
    F: Fn(&E) -> &str,
{
    let mut values: Vec<String> = entities.iter().map(|e| value_of(e).to_string()).collect();
    values.sort_unstable();
    values.dedup();
    values
}

// ─────────────────────────────────────────────────────────────────────────────
// SORTING
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Raised when a sort-direction token from the console can't be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown sort direction: {0}")]
pub struct ParseDirectionError(pub String);

impl FromStr for SortDirection {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Ascending),
            "desc" => Ok(SortDirection::Descending),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

/// Active sort column and direction. `toggle` is the column-header click:
/// the same key flips direction, a new key resets to ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig<K> {
    pub key: K,
    pub direction: SortDirection,
}

impl<K: PartialEq> SortConfig<K> {
    pub fn ascending(key: K) -> Self {
        Self { key, direction: SortDirection::Ascending }
    }

    pub fn toggle(&mut self, key: K) {
        if self.key == key {
            self.direction = self.direction.flip();
        } else {
            self.key = key;
            self.direction = SortDirection::Ascending;
        }
    }
}

/// Extracted comparison value for one entity under the active sort key.
/// Text keys are lowercased at extraction; derived numeric keys (say,
/// rent plus VAT dues) are computed in the extractor, not stored.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Text(String),
    Number(f64),
}

impl SortValue {
    pub fn text(value: &str) -> Self {
        SortValue::Text(value.to_lowercase())
    }

    pub fn number(value: impl Into<f64>) -> Self {
        SortValue::Number(value.into())
    }

    fn cmp_ascending(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
            (SortValue::Number(a), SortValue::Number(b)) => a.total_cmp(b),
            // A single key always extracts one variant; order text first if
            // an extractor ever mixes them
            (SortValue::Text(_), SortValue::Number(_)) => Ordering::Less,
            (SortValue::Number(_), SortValue::Text(_)) => Ordering::Greater,
        }
    }
}

/// Order entities by the extracted key value. Stable: equal keys keep
/// their original relative order in both directions, because descending
/// only reverses the comparator and `Equal` reversed is still `Equal`.
pub fn sort_entities<E, F>(entities: &mut [E], direction: SortDirection, value_of: F)
where
    F: Fn(&E) -> SortValue,
{
    entities.sort_by(|a, b| {
        let ordering = value_of(a).cmp_ascending(&value_of(b));
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}
