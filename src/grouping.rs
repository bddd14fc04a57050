use std::collections::HashMap;

use itertools::Itertools;
use tracing::debug;

use crate::model::entity::Fish;
use crate::model::group::Qubie;

/// Groups the catalog by trait. Qubies come out sorted by name ignoring
/// case (ties broken by the exact name), members in catalog order. A fish
/// without traits ends up in no qubie.
pub fn build_groups(catalog: &[Fish]) -> Vec<Qubie<'_>> {
    let mut by_trait: HashMap<&str, Vec<&Fish>> = HashMap::new();
    for fish in catalog {
        for name in fish.traits.iter().unique() {
            by_trait.entry(name.as_str()).or_default().push(fish);
        }
    }

    debug!(fishes = catalog.len(), qubies = by_trait.len(), "built qubies");
    let mut groups: Vec<Qubie> = by_trait.into_iter()
        .map(|(name, fishes)| Qubie { name, fishes })
        .collect();
    groups.sort_by_cached_key(|group| (group.name.to_lowercase(), group.name));
    groups
}

/// Looks a qubie up by name. `groups` may be in any order.
pub fn find_group<'q, 'a>(groups: &'q [Qubie<'a>], name: &str) -> Option<&'q Qubie<'a>> {
    groups.iter().find(|group| group.name == name)
}
