//! Picks where to put up to four qubies among the four net locations so that
//! the catch is as large as possible.
//!
//! A catalog of [`Fish`] is grouped by trait into [`Qubie`]s with
//! [`build_groups`]. [`compute_optimal_placement`] then tries every way of
//! placing a selection of qubie names onto the locations and keeps the one
//! with the highest score, where a fish scores its catch change once if some
//! location it lives at holds a qubie named after one of its traits.
//!
//! ```
//! use qubie_net::{build_groups, compute_optimal_placement, Fish, Location};
//!
//! let catalog = vec![
//!     Fish { name: "A".into(), locations: vec![Location::Lake], traits: vec!["X".into()], catch_change: 10.0 },
//!     Fish { name: "B".into(), locations: vec![Location::River], traits: vec!["Y".into()], catch_change: 5.0 },
//! ];
//! let groups = build_groups(&catalog);
//! let result = compute_optimal_placement(&groups, &["X", "Y"]);
//!
//! assert_eq!(result.score, 15.0);
//! assert_eq!(result.assignment.get(Location::Lake), Some("X"));
//! assert_eq!(result.assignment.get(Location::River), Some("Y"));
//! ```

pub mod assignment;
pub mod catalog;
pub mod config;
pub mod error;
pub mod grouping;
pub mod model;
pub mod optimize;
pub mod permute;
mod score;
pub mod selection;
pub mod sheet;
pub mod telemetry;

pub use grouping::build_groups;
pub use model::entity::{Fish, Location, Score};
pub use model::group::Qubie;
pub use model::placement::{Assignment, PlacementResult};
pub use optimize::{compute_optimal_placement, Optimizer};
