//! Catalog record and ranked-result types for the discovery engine.
//!
//! Records are immutable inputs owned by the caller; scored records and
//! result groups are ephemeral, recomputed on every query.

use std::str::FromStr;

use thiserror::Error;

use crate::ranking::EXACT_MATCH_SCORE;

// ─────────────────────────────────────────────────────────────────────────────
// CATALOG RECORDS
// ─────────────────────────────────────────────────────────────────────────────

/// Registry entity class. Consumers map this to a display icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecordKind {
    Vendor,
    Product,
    Order,
    Logistics,
    Module,
}

/// Raised when a record-kind token from the console can't be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown record kind: {0}")]
pub struct ParseRecordKindError(pub String);

impl FromStr for RecordKind {
    type Err = ParseRecordKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "VENDOR" => Ok(RecordKind::Vendor),
            "PRODUCT" => Ok(RecordKind::Product),
            "ORDER" => Ok(RecordKind::Order),
            "LOGISTICS" => Ok(RecordKind::Logistics),
            "MODULE" => Ok(RecordKind::Module),
            _ => Err(ParseRecordKindError(s.to_string())),
        }
    }
}

/// One entry in the discovery catalog: a vendor, product, order, logistics
/// bridge or system module reachable from the console's search box.
///
/// `target` names the navigation destination a click should open. `sub` is
/// an optional secondary label (a product's department); `status` an
/// optional lifecycle tag. Both participate in matching/display when set.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchableRecord {
    pub kind: RecordKind,
    pub name: String,
    pub id: String,
    pub category: String,
    pub sub: Option<String>,
    pub status: Option<String>,
    pub target: String,
}

impl SearchableRecord {
    pub fn new(
        kind: RecordKind,
        name: impl Into<String>,
        id: impl Into<String>,
        category: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            id: id.into(),
            category: category.into(),
            sub: None,
            status: None,
            target: target.into(),
        }
    }

    /// Attach a secondary label (searched as a substring field).
    pub fn with_sub(mut self, sub: impl Into<String>) -> Self {
        self.sub = Some(sub.into());
        self
    }

    /// Attach a lifecycle status tag (display only, not searched).
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// RANKED RESULTS
// ─────────────────────────────────────────────────────────────────────────────

/// A catalog record annotated with its query score. Ephemeral; recomputed
/// per query and never persisted.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScoredRecord {
    pub record: SearchableRecord,
    pub score: f64,
}

impl ScoredRecord {
    /// Display hint: the match landed in the exact tier, so the console
    /// shows its "Exact Match" badge.
    pub fn is_exact(&self) -> bool {
        self.score >= EXACT_MATCH_SCORE
    }
}

/// Matches sharing a category, in the order the category first appeared in
/// the score-descending sequence. `kind` and `target` are the icon/target
/// descriptor taken from the group's best-scored member.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResultGroup {
    pub category: String,
    pub kind: RecordKind,
    pub target: String,
    pub items: Vec<ScoredRecord>,
}
