pub mod entity {
    use std::fmt;
    use serde::{Deserialize, Serialize};

    pub type Trait = String;
    pub type Score = f64;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
    pub enum Location {
        Lake,
        River,
        Ocean,
        Sphere,
    }

    impl Location {
        pub const COUNT: usize = 4;
        /// Canonical order, the one candidate placements are enumerated in.
        pub const ALL: [Location; Location::COUNT] =
            [Location::Lake, Location::River, Location::Ocean, Location::Sphere];
        /// Order rows are listed in when a placement is shown to a user.
        pub const DISPLAY_ORDER: [Location; Location::COUNT] =
            [Location::Lake, Location::River, Location::Sphere, Location::Ocean];

        pub fn label(self) -> &'static str {
            match self {
                Location::Lake => "Lake",
                Location::River => "River",
                Location::Ocean => "Ocean",
                Location::Sphere => "Sphere",
            }
        }

        pub fn from_label(label: &str) -> Option<Location> {
            Location::ALL.into_iter().find(|location| location.label() == label)
        }

        pub(crate) fn index(self) -> usize {
            self as usize
        }
    }

    impl fmt::Display for Location {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.label())
        }
    }

    /// One catalog entry. `locations` keeps the declared order, which decides
    /// where a fish is counted when several slots qualify.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Fish {
        pub name: String,
        #[serde(default)]
        pub locations: Vec<Location>,
        pub traits: Vec<Trait>,
        #[serde(rename = "catchChange")]
        pub catch_change: Score,
    }

    impl Fish {
        pub fn has_trait(&self, name: &str) -> bool {
            self.traits.iter().any(|t| t == name)
        }
    }
}


pub mod group {
    use super::entity::Fish;

    /// All fishes of the catalog sharing one trait.
    #[derive(Debug, Clone, PartialEq)]
    pub struct Qubie<'a> {
        pub name: &'a str,
        pub fishes: Vec<&'a Fish>,
    }

    impl<'a> Qubie<'a> {
        #[allow(clippy::len_without_is_empty)]
        pub fn len(&self) -> usize {
            self.fishes.len()
        }
    }
}

pub mod placement {
    use serde::ser::{SerializeMap, Serializer};
    use serde::Serialize;
    use super::entity::{Location, Score};

    /// Injective partial mapping from location to qubie name.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
    pub struct Assignment<'a> {
        slots: [Option<&'a str>; Location::COUNT],
    }

    impl<'a> Assignment<'a> {
        pub fn new() -> Assignment<'a> {
            Assignment::default()
        }

        pub fn get(&self, location: Location) -> Option<&'a str> {
            self.slots[location.index()]
        }

        /// Puts `name` at `location`, returning whatever occupied it before.
        pub fn place(&mut self, location: Location, name: &'a str) -> Option<&'a str> {
            self.slots[location.index()].replace(name)
        }

        pub fn occupied(&self) -> impl Iterator<Item = (Location, &'a str)> + '_ {
            Location::ALL.into_iter()
                .filter_map(|location| self.get(location).map(|name| (location, name)))
        }

        pub fn location_of(&self, name: &str) -> Option<Location> {
            self.occupied().find(|(_, n)| *n == name).map(|(location, _)| location)
        }

        pub fn len(&self) -> usize {
            self.slots.iter().flatten().count()
        }

        pub fn is_empty(&self) -> bool {
            self.slots.iter().all(Option::is_none)
        }
    }

    impl<'a> FromIterator<(Location, &'a str)> for Assignment<'a> {
        fn from_iter<I: IntoIterator<Item = (Location, &'a str)>>(iter: I) -> Self {
            let mut assignment = Assignment::new();
            for (location, name) in iter {
                assignment.place(location, name);
            }
            assignment
        }
    }

    impl Serialize for Assignment<'_> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (location, name) in self.occupied() {
                map.serialize_entry(location.label(), name)?;
            }
            map.end()
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct PlacementResult<'a> {
        #[serde(rename = "placement")]
        pub assignment: Assignment<'a>,
        #[serde(rename = "expectedScore")]
        pub score: Score,
    }

    impl<'a> PlacementResult<'a> {
        pub fn empty() -> PlacementResult<'a> {
            PlacementResult { assignment: Assignment::new(), score: 0.0 }
        }
    }
}
