//! Yin-yang pairing rules for single pillars

use crate::ganzhi::{Branch, Stem};

/// A legal pillar pairs a stem and branch of the same polarity.
pub fn is_polarity_matched(stem: Stem, branch: Branch) -> bool {
    stem.polarity() == branch.polarity()
}

/// Branches a selection UI should offer once a stem is chosen.
///
/// Returns the six branches sharing the stem's polarity, in cycle order, or
/// all twelve when no stem has been chosen yet. Callers re-filter on every
/// stem change; see [`crate::pillars::Pillar::set_stem`] for the companion
/// operation that drops a previously chosen branch that no longer fits.
pub fn compatible_branches(stem: Option<Stem>) -> Vec<Branch> {
    match stem {
        Some(stem) => Branch::ALL
            .iter()
            .copied()
            .filter(|branch| branch.polarity() == stem.polarity())
            .collect(),
        None => Branch::ALL.to_vec(),
    }
}
