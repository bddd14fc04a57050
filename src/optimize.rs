use itertools::Itertools;
use tracing::{debug, trace};

use crate::assignment::{generate_assignments, Enumeration};
use crate::grouping::find_group;
use crate::model::entity::{Location, Score};
use crate::model::group::Qubie;
use crate::model::placement::{Assignment, PlacementResult};

/// Exhaustive search over placements of a qubie selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Optimizer {
    pub enumeration: Enumeration,
}

impl Optimizer {
    pub fn new(enumeration: Enumeration) -> Optimizer {
        Optimizer { enumeration }
    }

    /// Best placement of `selected` onto the four locations. Ties keep the
    /// candidate enumerated first. A name without a qubie is still placed,
    /// it just never catches anything.
    pub fn place<'a>(&self, groups: &[Qubie<'_>], selected: &[&'a str]) -> PlacementResult<'a> {
        debug_assert!(selected.len() <= Location::COUNT, "at most four qubies can be placed");
        debug_assert!(selected.iter().all_unique(), "selected qubies must be distinct");

        if selected.is_empty() {
            return PlacementResult::empty();
        }

        let candidates = generate_assignments(selected, &Location::ALL, self.enumeration);
        let n_candidates = candidates.len();
        let mut best = PlacementResult {
            assignment: Assignment::new(),
            score: Score::NEG_INFINITY,
        };
        for candidate in candidates {
            let score = candidate.score(groups);
            trace!(?candidate, score, "scored candidate");
            if score > best.score {
                best = PlacementResult { assignment: candidate, score };
            }
        }

        debug!(
            selected = selected.len(),
            candidates = n_candidates,
            enumeration = ?self.enumeration,
            best_score = best.score,
            "computed optimal placement"
        );
        best
    }
}

pub fn compute_optimal_placement<'a>(groups: &[Qubie<'_>], selected: &[&'a str]) -> PlacementResult<'a> {
    Optimizer::default().place(groups, selected)
}

/// What a qubie would catch on its own at each location.
#[derive(Debug, Clone, PartialEq)]
pub struct Potential<'a> {
    pub name: &'a str,
    by_location: [Score; Location::COUNT],
}

impl<'a> Potential<'a> {
    pub fn at(&self, location: Location) -> Score {
        self.by_location[location.index()]
    }
}

/// Per selected name, the summed catch change of its qubie's fishes at each
/// location they list.
pub fn group_potential<'a>(groups: &[Qubie<'_>], selected: &[&'a str]) -> Vec<Potential<'a>> {
    selected.iter()
        .map(|&name| {
            let mut by_location = [0.0; Location::COUNT];
            if let Some(group) = find_group(groups, name) {
                for fish in &group.fishes {
                    for location in &fish.locations {
                        by_location[location.index()] += fish.catch_change;
                    }
                }
            }
            Potential { name, by_location }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{compute_optimal_placement, group_potential, Optimizer};
    use crate::assignment::Enumeration;
    use crate::grouping::build_groups;
    use crate::model::entity::{Fish, Location};

    fn fish(name: &str, locations: &[Location], traits: &[&str], catch_change: f64) -> Fish {
        Fish {
            name: name.to_string(),
            locations: locations.to_vec(),
            traits: traits.iter().map(|t| t.to_string()).collect(),
            catch_change,
        }
    }

    fn two_fish_catalog() -> Vec<Fish> {
        vec![
            fish("A", &[Location::Lake], &["X"], 10.0),
            fish("B", &[Location::River], &["Y"], 5.0),
        ]
    }

    #[test]
    fn empty_selection_places_nothing() {
        let catalog = two_fish_catalog();
        let groups = build_groups(&catalog);
        let result = compute_optimal_placement(&groups, &[]);
        assert!(result.assignment.is_empty());
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn places_each_qubie_where_its_fish_live() {
        let catalog = two_fish_catalog();
        let groups = build_groups(&catalog);
        let result = compute_optimal_placement(&groups, &["X", "Y"]);
        assert_eq!(result.score, 15.0);
        assert_eq!(result.assignment.get(Location::Lake), Some("X"));
        assert_eq!(result.assignment.get(Location::River), Some("Y"));
        assert_eq!(result.assignment.len(), 2);
    }

    #[test]
    fn both_enumerations_find_the_same_placement() {
        let catalog = two_fish_catalog();
        let groups = build_groups(&catalog);
        let full = Optimizer::new(Enumeration::FullPermutations).place(&groups, &["Y", "X"]);
        let distinct = Optimizer::new(Enumeration::Distinct).place(&groups, &["Y", "X"]);
        assert_eq!(full, distinct);
    }

    #[test]
    fn avoids_placement_with_negative_catch() {
        let catalog = vec![
            fish("A", &[Location::Lake], &["X"], -3.0),
            fish("B", &[Location::River], &["X"], 2.0),
        ];
        let groups = build_groups(&catalog);
        let result = compute_optimal_placement(&groups, &["X"]);
        assert_eq!(result.score, 2.0);
        assert_eq!(result.assignment.get(Location::River), Some("X"));
    }

    #[test]
    fn all_negative_still_returns_best_real_score() {
        let catalog = vec![
            fish("A", &[Location::Lake], &["X"], -3.0),
            fish("B", &[Location::River], &["X"], -1.0),
            fish("C", &[Location::Ocean], &["X"], -2.0),
            fish("D", &[Location::Sphere], &["X"], -4.0),
        ];
        let groups = build_groups(&catalog);
        let result = compute_optimal_placement(&groups, &["X"]);
        assert_eq!(result.score, -1.0);
        assert_eq!(result.assignment.location_of("X"), Some(Location::River));
    }

    #[test]
    fn ties_keep_first_candidate() {
        let catalog = vec![fish("A", &[Location::Ocean], &["Z"], 1.0)];
        let groups = build_groups(&catalog);
        let result = compute_optimal_placement(&groups, &["X"]);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.assignment.location_of("X"), Some(Location::Lake));
    }

    #[test]
    fn unknown_name_is_placed_with_zero_contribution() {
        let catalog = two_fish_catalog();
        let groups = build_groups(&catalog);
        let result = compute_optimal_placement(&groups, &["X", "Nope"]);
        assert_eq!(result.score, 10.0);
        assert_eq!(result.assignment.get(Location::Lake), Some("X"));
        assert!(result.assignment.location_of("Nope").is_some());
    }

    #[test]
    fn repeated_calls_are_identical() {
        let catalog = two_fish_catalog();
        let groups = build_groups(&catalog);
        let first = compute_optimal_placement(&groups, &["X", "Y"]);
        let second = compute_optimal_placement(&groups, &["X", "Y"]);
        assert_eq!(first, second);
        assert_eq!(first.score.to_bits(), second.score.to_bits());
    }

    #[test]
    fn potential_matches_placement_for_unsorted_groups() {
        let catalog = vec![
            fish("A", &[Location::Lake], &["Z"], 4.0),
            fish("B", &[Location::River], &["Y"], 4.0),
            fish("C", &[Location::Ocean], &["X"], 4.0),
        ];
        let mut groups = build_groups(&catalog);
        groups.reverse();

        let result = compute_optimal_placement(&groups, &["X"]);
        assert_eq!(result.score, 4.0);
        assert_eq!(result.assignment.location_of("X"), Some(Location::Ocean));
        assert_eq!(group_potential(&groups, &["X"])[0].at(Location::Ocean), 4.0);
    }

    #[test]
    fn traitless_fish_changes_nothing() {
        let mut catalog = two_fish_catalog();
        let baseline = {
            let groups = build_groups(&catalog);
            compute_optimal_placement(&groups, &["X", "Y"]).score
        };
        catalog.push(fish("C", &[Location::Lake, Location::River], &[], 100.0));

        let groups = build_groups(&catalog);
        assert_eq!(groups.len(), 2);
        let result = compute_optimal_placement(&groups, &["X", "Y"]);
        assert_eq!(result.score, baseline);
        assert_eq!(result.score, 15.0);
    }

    #[test]
    fn potential_sums_catch_per_location() {
        let catalog = vec![
            fish("A", &[Location::Lake, Location::River], &["X"], 2.0),
            fish("B", &[Location::Lake], &["X", "Y"], 3.0),
        ];
        let groups = build_groups(&catalog);
        let potential = group_potential(&groups, &["X", "Missing"]);

        assert_eq!(potential[0].name, "X");
        assert_eq!(potential[0].at(Location::Lake), 5.0);
        assert_eq!(potential[0].at(Location::River), 2.0);
        assert_eq!(potential[0].at(Location::Sphere), 0.0);
        assert!(Location::ALL.iter().all(|&l| potential[1].at(l) == 0.0));
    }
}
