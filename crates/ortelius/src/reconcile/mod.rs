//! Candidate filtering, deduplication and ranking.

use std::{
    cmp::Ordering,
    collections::{HashMap, hash_map::Entry},
};

use tracing::trace;

use crate::candidate::Candidate;

/// Filter, deduplicate and rank raw candidates into a publishable list.
///
/// Keeps only candidates whose `category` equals `filter_category`, then
/// deduplicates by `display_name`: the first occurrence of a name claims a
/// slot, and a later occurrence replaces it in that slot only when its
/// `importance` is strictly greater (ties keep the earlier entry). The
/// surviving list is stable-sorted by descending importance, so exact ties
/// stay in first-seen order.
///
/// Reconciling an already reconciled list is a no-op, and empty input yields
/// empty output.
#[must_use]
pub fn reconcile(raw: Vec<Candidate>, filter_category: &str) -> Vec<Candidate> {
    let mut kept: Vec<Candidate> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for candidate in raw {
        if candidate.category != filter_category {
            continue;
        }
        match slots.entry(candidate.display_name.clone()) {
            Entry::Occupied(slot) => {
                let index = *slot.get();
                if candidate.importance > kept[index].importance {
                    kept[index] = candidate;
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(kept.len());
                kept.push(candidate);
            }
        }
    }

    // NaN importance compares as equal and stays where insertion put it.
    kept.sort_by(|a, b| {
        b.importance
            .partial_cmp(&a.importance)
            .unwrap_or(Ordering::Equal)
    });

    trace!(count = kept.len(), "reconciled candidates");
    kept
}
