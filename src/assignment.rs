use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::model::entity::Location;
use crate::model::placement::Assignment;
use crate::permute::permute;

/// How candidate placements are enumerated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Enumeration {
    /// Every full permutation of the locations, truncated to the selection.
    /// Placements that only differ in unused slots come out repeatedly.
    FullPermutations,
    /// Each distinct placement once, in the order of its first appearance
    /// under `FullPermutations`.
    #[default]
    Distinct,
}

/// Candidate placements of `names` onto `locations`: the i-th name goes to
/// the i-th location of an ordering, remaining locations stay empty.
pub fn generate_assignments<'a>(
    names: &[&'a str],
    locations: &[Location],
    enumeration: Enumeration,
) -> Vec<Assignment<'a>> {
    let orderings: Vec<Vec<Location>> = match enumeration {
        Enumeration::FullPermutations => permute(locations)
            .into_iter()
            .filter(|ordering| ordering.len() >= names.len())
            .collect(),
        Enumeration::Distinct => locations.iter().copied().permutations(names.len()).collect(),
    };

    orderings.into_iter()
        .map(|ordering| ordering.into_iter().zip(names.iter().copied()).collect())
        .collect()
}
