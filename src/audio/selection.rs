//! Selection validation
//!
//! Normalizes the caller's track list before any fetch or decode work runs:
//! rejects empty selections and duplicate ranks, clamps gains, and sorts by
//! rank. Everything downstream may assume these invariants hold.

use crate::audio::types::TrackSelection;
use crate::error::{Error, Result};
use std::collections::HashSet;

/// Validate and normalize a track selection.
///
/// - Empty input → [`Error::EmptySelection`]
/// - Any two entries sharing a rank → [`Error::DuplicateRank`]
/// - `gain` outside [0, 1] is clamped, never rejected (it is a UI slider
///   value)
/// - Output is sorted ascending by rank; the sort is stable, though ties are
///   impossible after the duplicate check
pub fn validate_selection(mut selection: Vec<TrackSelection>) -> Result<Vec<TrackSelection>> {
    if selection.is_empty() {
        return Err(Error::EmptySelection);
    }

    let mut seen_ranks = HashSet::with_capacity(selection.len());
    for entry in &selection {
        if !seen_ranks.insert(entry.rank) {
            return Err(Error::DuplicateRank(entry.rank));
        }
    }

    for entry in &mut selection {
        entry.gain = entry.gain.clamp(0.0, 1.0);
    }

    selection.sort_by_key(|entry| entry.rank);

    Ok(selection)
}
