use std::collections::HashSet;

use crate::model::entity::{Fish, Location, Score};
use crate::model::group::Qubie;
use crate::model::placement::Assignment;

impl<'a> Assignment<'a> {
    /// Where this assignment catches `fish`: the first of its declared
    /// locations whose occupant is one of its traits.
    pub fn catching_location(&self, fish: &Fish) -> Option<Location> {
        fish.locations.iter().copied().find(|location| {
            self.get(*location).is_some_and(|name| fish.has_trait(name))
        })
    }

    /// Total catch change of every fish caught under this assignment. Each
    /// fish counts once, however many placed qubies it belongs to.
    pub fn score(&self, groups: &[Qubie<'_>]) -> Score {
        let mut counted: HashSet<&str> = HashSet::new();
        let mut score = 0.0;
        for group in groups {
            for fish in &group.fishes {
                if counted.contains(fish.name.as_str()) {
                    continue;
                }
                if self.catching_location(fish).is_some() {
                    score += fish.catch_change;
                    counted.insert(fish.name.as_str());
                }
            }
        }
        score
    }
}
