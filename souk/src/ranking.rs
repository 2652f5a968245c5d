//! Tiered ranking for the registry discovery engine.
//!
//! Each catalog record lands in exactly one tier — exact, prefix,
//! substring, or fuzzy — checked best-first with an early else. Zero-score
//! records are dropped, the rest are ordered score-descending with the
//! catalog index breaking ties, then grouped by category in the order each
//! category first appears in the ranked sequence.

use tracing::debug;

use crate::fuzzy;
use crate::models::{ResultGroup, ScoredRecord, SearchableRecord};

/// Name or id equals the query. Also the threshold for the "Exact Match"
/// badge (`ScoredRecord::is_exact`).
pub const EXACT_MATCH_SCORE: f64 = 1000.0;
/// Name or id starts with the query.
pub const PREFIX_MATCH_SCORE: f64 = 500.0;
/// Name, id or secondary label contains the query.
pub const SUBSTRING_MATCH_SCORE: f64 = 200.0;
/// Multiplier applied to the similarity of a qualifying fuzzy match.
pub const FUZZY_MATCH_WEIGHT: f64 = 100.0;
/// Minimum similarity (strict) for the fuzzy tier to score at all.
pub const FUZZY_SIMILARITY_THRESHOLD: f64 = 0.5;

/// Score a single record against a pre-lowercased query.
///
/// Tiers are exclusive: the first hit wins and later tiers are skipped.
/// A record that misses every tier scores 0 and is dropped by `rank`.
pub fn score_record(query_lower: &str, record: &SearchableRecord) -> f64 {
    let name = record.name.to_lowercase();
    let id = record.id.to_lowercase();
    let sub = record.sub.as_deref().map(str::to_lowercase).unwrap_or_default();

    if name == query_lower || id == query_lower {
        EXACT_MATCH_SCORE
    } else if name.starts_with(query_lower) || id.starts_with(query_lower) {
        PREFIX_MATCH_SCORE
    } else if name.contains(query_lower) || id.contains(query_lower) || sub.contains(query_lower) {
        SUBSTRING_MATCH_SCORE
    } else {
        let similarity = fuzzy::similarity(&name, query_lower);
        if similarity > FUZZY_SIMILARITY_THRESHOLD {
            FUZZY_MATCH_WEIGHT * similarity
        } else {
            0.0
        }
    }
}

/// Rank the catalog against a raw query and group the matches by category.
///
/// An empty (or all-whitespace) query yields no results — the console shows
/// its idle state, not the full catalog. Never fails: no matches is an
/// empty vec.
pub fn rank(query: &str, catalog: &[SearchableRecord]) -> Vec<ResultGroup> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(usize, ScoredRecord)> = catalog
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let score = score_record(&q, record);
            (score > 0.0).then(|| (index, ScoredRecord { record: record.clone(), score }))
        })
        .collect();

    // Best score first; catalog order breaks ties so reruns are deterministic
    scored.sort_unstable_by(|(ia, a), (ib, b)| {
        b.score.total_cmp(&a.score).then_with(|| ia.cmp(ib))
    });

    debug!(query = %q, matches = scored.len(), "ranked discovery query");

    group_by_category(scored.into_iter().map(|(_, item)| item))
}

/// Group score-ordered records by category, preserving the order in which
/// each category first appears. Each group inherits its first member's
/// kind/target descriptor.
fn group_by_category(ranked: impl Iterator<Item = ScoredRecord>) -> Vec<ResultGroup> {
    let mut groups: Vec<ResultGroup> = Vec::new();
    for item in ranked {
        match groups.iter_mut().find(|g| g.category == item.record.category) {
            Some(group) => group.items.push(item),
            None => groups.push(ResultGroup {
                category: item.record.category.clone(),
                kind: item.record.kind,
                target: item.record.target.clone(),
                items: vec![item],
            }),
        }
    }
    groups
}
