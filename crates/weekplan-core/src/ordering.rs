//! Ordering utilities for time-slot and catalog-name enumeration.

use std::cmp::Ordering;

use crate::{models::TimeOfDay, Result};

/// Compares two `HH:MM` strings numerically by (hour, minute).
///
/// Used for chronological enumeration of slot times held as raw strings.
/// Fails with `InvalidTime` if either input does not parse; callers are
/// expected to have already validated stored data, so an error here
/// indicates a data-integrity fault rather than user input.
pub fn compare_times(a: &str, b: &str) -> Result<Ordering> {
    let a: TimeOfDay = a.parse()?;
    let b: TimeOfDay = b.parse()?;
    Ok(a.cmp(&b))
}

/// Compares two catalog names in natural alphabetic order.
///
/// Case-accounting rather than raw code-point order: names are compared by
/// their Unicode lowercase folding first, so "apple" sorts between "Ant"
/// and "Banana". Ties between distinct spellings of the same folded form
/// are broken by raw code-point order for determinism.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));

    match folded {
        Ordering::Equal => a.cmp(b),
        other => other,
    }
}
