//! Error types for the nuclide directory.
//!
//! One crate-wide error enum covers all failure modes: malformed species
//! construction, registry key collisions, lookup misses, ambiguous predicate
//! queries, malformed burn-chain records, and unresolvable burn-chain
//! products. Every variant carries enough structured detail (the offending
//! key, the offending matches, or the offending product groups) for the
//! caller to act without re-deriving registry state.

use thiserror::Error;

/// Errors produced by directory construction, registry operations, and the
/// burn-chain closure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A species definition was internally inconsistent.
    ///
    /// Occurs when neither or both of an element reference and an explicit
    /// atomic number are supplied, or when a placeholder record is missing
    /// required fields.
    #[error("invalid species definition: {detail}")]
    Construction {
        /// Description of the problem.
        detail: String,
    },

    /// A registry insertion collided with an existing unique key.
    ///
    /// Insertion is atomic: a collision on any single index aborts the whole
    /// insertion and leaves every index unchanged.
    #[error("duplicate {index} key '{key}': an entry with this key is already registered")]
    DuplicateKey {
        /// The index namespace in which the collision occurred.
        index: &'static str,
        /// The colliding key.
        key: String,
    },

    /// A keyed lookup found no entry.
    #[error("no entry for {index} key '{key}'")]
    NotFound {
        /// The index namespace that was searched.
        index: &'static str,
        /// The key that was not found.
        key: String,
    },

    /// A `single` predicate query matched zero or more than one nuclide.
    #[error("expected exactly one matching nuclide, found {}: [{}]", .matched.len(), .matched.join(", "))]
    AmbiguousMatch {
        /// Display forms of every nuclide that satisfied the predicate.
        matched: Vec<String>,
    },

    /// A burn-chain record did not carry exactly one interaction tag.
    #[error("malformed burn record for {nuclide}: {detail}")]
    MalformedBurnRecord {
        /// Canonical name of the nuclide the record was attached to.
        nuclide: String,
        /// Description of the problem.
        detail: String,
    },

    /// The burn-chain closure could not resolve one or more interaction
    /// products within the active-nuclide set.
    ///
    /// Each group lists the alternative products of one interaction; adding
    /// any one nuclide from each group to the active set fixes the closure.
    #[error("missing active nuclides in the burn chain; add one nuclide from each group:\n{}", format_product_groups(.groups))]
    MissingActiveNuclides {
        /// Alternative-product name groups, one per unresolvable interaction.
        groups: Vec<Vec<String>>,
    },
}

impl Error {
    /// Creates a [`Construction`](Error::Construction) error.
    pub fn construction(detail: impl Into<String>) -> Self {
        Self::Construction {
            detail: detail.into(),
        }
    }

    /// Creates a [`DuplicateKey`](Error::DuplicateKey) error.
    pub fn duplicate_key(index: &'static str, key: impl Into<String>) -> Self {
        Self::DuplicateKey {
            index,
            key: key.into(),
        }
    }

    /// Creates a [`NotFound`](Error::NotFound) error.
    pub fn not_found(index: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound {
            index,
            key: key.into(),
        }
    }

    /// Creates an [`AmbiguousMatch`](Error::AmbiguousMatch) error.
    pub fn ambiguous_match(matched: Vec<String>) -> Self {
        Self::AmbiguousMatch { matched }
    }

    /// Creates a [`MalformedBurnRecord`](Error::MalformedBurnRecord) error.
    pub fn malformed_burn_record(nuclide: &str, detail: impl Into<String>) -> Self {
        Self::MalformedBurnRecord {
            nuclide: nuclide.to_string(),
            detail: detail.into(),
        }
    }

    /// Creates a [`MissingActiveNuclides`](Error::MissingActiveNuclides) error.
    pub fn missing_active_nuclides(groups: Vec<Vec<String>>) -> Self {
        Self::MissingActiveNuclides { groups }
    }
}

fn format_product_groups(groups: &[Vec<String>]) -> String {
    groups
        .iter()
        .enumerate()
        .map(|(i, group)| format!(" {} - {}", i + 1, group.join(" or ")))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_key_message_names_index_and_key() {
        let err = Error::duplicate_key("label", "U235");
        assert_eq!(
            err.to_string(),
            "duplicate label key 'U235': an entry with this key is already registered"
        );
    }

    #[test]
    fn ambiguous_match_message_enumerates_matches() {
        let err = Error::ambiguous_match(vec!["U235".to_string(), "U238".to_string()]);
        assert_eq!(
            err.to_string(),
            "expected exactly one matching nuclide, found 2: [U235, U238]"
        );
    }

    #[test]
    fn ambiguous_match_reports_zero_matches() {
        let err = Error::ambiguous_match(Vec::new());
        assert_eq!(err.to_string(), "expected exactly one matching nuclide, found 0: []");
    }

    #[test]
    fn missing_active_nuclides_message_enumerates_groups() {
        let err = Error::missing_active_nuclides(vec![
            vec!["PU239".to_string(), "PU240".to_string()],
            vec!["XE135".to_string()],
        ]);
        let msg = err.to_string();
        assert!(msg.contains(" 1 - PU239 or PU240"));
        assert!(msg.contains(" 2 - XE135"));
    }
}
