//! Ordered-section reconciliation for diffable list rendering.
//!
//! A [`Reconciler`] keeps the last presented arrangement of sections and
//! items and, given a new desired arrangement, reports the minimal set of
//! section and item changes needed to move the display forward. Items carry
//! two notions of equality: an identity key (via [`Identify`]) that says
//! *which* item a value is, and structural equality (`PartialEq`) that says
//! whether its payload changed. An item whose identity survives but whose
//! payload differs is reported as an in-place update, never as a removal plus
//! insertion.
//!
//! The diff is deterministic: all ordering comes from the supplied section
//! order and the stored previous arrangement, never from hash-map iteration.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

/// Identity-key extraction for reconcilable items.
///
/// Deliberately separate from `PartialEq`: the key answers "same entity?",
/// structural equality answers "same content?". Implementations must return
/// keys unique within one section.
pub trait Identify {
    type Key: Clone + Eq + Hash + fmt::Debug;

    fn identity(&self) -> Self::Key;
}

/// Minimal change-set between the previously presented arrangement and the
/// desired one.
///
/// Item-level entries cover sections present in both arrangements; a section
/// in `sections_inserted` or `sections_removed` carries its items implicitly,
/// the way a diffable-snapshot section insert or delete does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrangementDiff<S, K> {
    /// Sections to present, in order, after empty-section filtering.
    pub sections: Vec<S>,
    pub sections_inserted: Vec<S>,
    pub sections_removed: Vec<S>,
    pub items_inserted: Vec<(S, K)>,
    pub items_removed: Vec<(S, K)>,
    /// Same identity, different payload: refresh the cell in place.
    pub items_updated: Vec<(S, K)>,
}

impl<S, K> ArrangementDiff<S, K> {
    /// True when nothing changed relative to the previous arrangement.
    pub fn is_empty(&self) -> bool {
        self.sections_inserted.is_empty()
            && self.sections_removed.is_empty()
            && self.items_inserted.is_empty()
            && self.items_removed.is_empty()
            && self.items_updated.is_empty()
    }
}

/// Holds the last presented arrangement and diffs new ones against it.
///
/// This is the engine's only mutable cross-cycle state. The stored
/// arrangement is replaced in one step after the diff is fully computed, so
/// it is never left partially updated.
#[derive(Debug)]
pub struct Reconciler<S, I> {
    presented: Vec<(S, Vec<I>)>,
}

impl<S, I> Reconciler<S, I> {
    pub fn new() -> Self {
        Self {
            presented: Vec::new(),
        }
    }
}

impl<S, I> Default for Reconciler<S, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, I> Reconciler<S, I>
where
    S: Clone + Eq + Hash + fmt::Debug,
    I: Identify + PartialEq + Clone,
{
    /// Reconcile a desired arrangement against the previously presented one.
    ///
    /// A section is included, in the order given, iff it has at least one
    /// item or is listed in `retained_if_empty`. Items appear in exactly the
    /// supplied order. Duplicate item identities within one section are a
    /// programming-contract violation caught by a debug assertion.
    pub fn apply(
        &mut self,
        section_order: &[S],
        items_by_section: &HashMap<S, Vec<I>>,
        retained_if_empty: &HashSet<S>,
    ) -> ArrangementDiff<S, I::Key> {
        let mut desired: Vec<(S, Vec<I>)> = Vec::new();
        for section in section_order {
            let items = items_by_section.get(section).cloned().unwrap_or_default();
            if items.is_empty() && !retained_if_empty.contains(section) {
                continue;
            }
            debug_assert_unique_identities(section, &items);
            desired.push((section.clone(), items));
        }

        let diff = self.diff_against(&desired);
        self.presented = desired;
        diff
    }

    /// The arrangement currently presented, in display order.
    pub fn presented(&self) -> &[(S, Vec<I>)] {
        &self.presented
    }

    fn diff_against(&self, desired: &[(S, Vec<I>)]) -> ArrangementDiff<S, I::Key> {
        let previous_ids: HashSet<&S> = self.presented.iter().map(|(s, _)| s).collect();
        let desired_ids: HashSet<&S> = desired.iter().map(|(s, _)| s).collect();

        let sections: Vec<S> = desired.iter().map(|(s, _)| s.clone()).collect();
        let sections_inserted: Vec<S> = desired
            .iter()
            .map(|(s, _)| s)
            .filter(|s| !previous_ids.contains(*s))
            .cloned()
            .collect();
        let sections_removed: Vec<S> = self
            .presented
            .iter()
            .map(|(s, _)| s)
            .filter(|s| !desired_ids.contains(*s))
            .cloned()
            .collect();

        let mut items_inserted = Vec::new();
        let mut items_removed = Vec::new();
        let mut items_updated = Vec::new();

        for (section, items) in desired {
            let Some((_, previous_items)) = self.presented.iter().find(|(s, _)| s == section)
            else {
                // New section: carried by sections_inserted.
                continue;
            };

            let previous_by_key: HashMap<I::Key, &I> = previous_items
                .iter()
                .map(|item| (item.identity(), item))
                .collect();
            let desired_keys: HashSet<I::Key> =
                items.iter().map(|item| item.identity()).collect();

            for item in items {
                let key = item.identity();
                match previous_by_key.get(&key) {
                    Some(previous) if *previous != item => {
                        items_updated.push((section.clone(), key));
                    }
                    Some(_) => {}
                    None => items_inserted.push((section.clone(), key)),
                }
            }
            for previous in previous_items {
                let key = previous.identity();
                if !desired_keys.contains(&key) {
                    items_removed.push((section.clone(), key));
                }
            }
        }

        ArrangementDiff {
            sections,
            sections_inserted,
            sections_removed,
            items_inserted,
            items_removed,
            items_updated,
        }
    }
}

fn debug_assert_unique_identities<S, I>(section: &S, items: &[I])
where
    S: fmt::Debug,
    I: Identify,
{
    if cfg!(debug_assertions) {
        let mut seen = HashSet::new();
        for item in items {
            let key = item.identity();
            assert!(
                seen.insert(key.clone()),
                "duplicate item identity {:?} in section {:?}",
                key,
                section
            );
        }
    }
}
