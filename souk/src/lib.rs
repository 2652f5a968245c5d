//! Souk — discovery and directory engine for the Regional HUB marketplace
//! console.
//!
//! Implements the console's "Registry Discovery Engine": tiered
//! exact/prefix/substring/fuzzy ranking over a heterogeneous record
//! catalog, grouped by category for display, plus the tokenized filtering
//! and direction-toggling sort behind the vendor directory and market
//! registry screens. A debounced-input primitive turns raw keystrokes into
//! committed queries.
//!
//! All engines are pure functions over caller-owned data: the caller holds
//! the catalog and entity lists, the engines return fresh derived results.

pub mod debounce;
pub mod filter;
pub mod fuzzy;
pub mod models;
pub mod ranking;

pub use debounce::{Debouncer, DEFAULT_DEBOUNCE_WINDOW};
pub use filter::{
    distinct_values, filter_entities, sort_entities, FieldFilter, ParseDirectionError,
    RangeFilter, SortConfig, SortDirection, SortValue, TextQuery, TextSearchable,
};
pub use models::{
    ParseRecordKindError, RecordKind, ResultGroup, ScoredRecord, SearchableRecord,
};
pub use ranking::{rank, score_record};
