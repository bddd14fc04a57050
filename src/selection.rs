use std::collections::HashSet;

use thiserror::Error;

use crate::grouping::find_group;
use crate::model::entity::Location;
use crate::model::group::Qubie;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SelectionError {
    #[error("at most four qubies can be selected, got {count}")]
    TooMany { count: usize },
    #[error("qubie '{0}' is selected more than once")]
    Duplicate(String),
    #[error("no fish carries the trait '{0}'")]
    UnknownQubie(String),
}

/// Checks a user selection before it is handed to the optimizer. With
/// `strict` off, names without a qubie pass and simply never score.
pub fn validate_selection<'s>(
    groups: &[Qubie<'_>],
    names: &'s [String],
    strict: bool,
) -> Result<Vec<&'s str>, SelectionError> {
    if names.len() > Location::COUNT {
        return Err(SelectionError::TooMany { count: names.len() });
    }

    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name.as_str()) {
            return Err(SelectionError::Duplicate(name.clone()));
        }
        if strict && find_group(groups, name).is_none() {
            return Err(SelectionError::UnknownQubie(name.clone()));
        }
    }
    Ok(names.iter().map(String::as_str).collect())
}
