use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::nuclide::HEAVY_METAL_CUTOFF_Z;

/// A chemical element, defined by its atomic number.
///
/// Elements own (by slot reference) the set of nuclides registered under
/// their atomic number. The `standard_weight` is derived from the attached
/// isotopes by the directory and is never set by the element itself.
#[derive(Debug, Clone)]
pub struct Element {
    pub z: u32,
    pub symbol: String,
    pub name: String,
    standard_weight: Option<f64>,
    isotopes: HashSet<usize>,
}

impl Element {
    pub fn new(z: u32, symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            z,
            symbol: symbol.into(),
            name: name.into(),
            standard_weight: None,
            isotopes: HashSet::new(),
        }
    }

    /// Abundance-weighted mean atomic weight over the naturally-occurring
    /// isotopes, or `None` if no attached isotope has positive abundance.
    #[inline]
    pub fn standard_weight(&self) -> Option<f64> {
        self.standard_weight
    }

    #[inline]
    pub fn isotope_count(&self) -> usize {
        self.isotopes.len()
    }

    /// Slots of the attached nuclides in the nuclide registry.
    ///
    /// Set semantics: unordered, no duplicates.
    pub fn isotope_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.isotopes.iter().copied()
    }

    #[inline]
    pub fn is_heavy_metal(&self) -> bool {
        self.z > HEAVY_METAL_CUTOFF_Z
    }

    /// True when any attached isotope occurs naturally.
    ///
    /// The derived standard weight exists exactly when the attached isotopes
    /// carry positive total abundance, so it doubles as the occurrence flag.
    #[inline]
    pub fn is_naturally_occurring(&self) -> bool {
        self.standard_weight.is_some()
    }

    pub(crate) fn attach(&mut self, nuclide_slot: usize) -> bool {
        self.isotopes.insert(nuclide_slot)
    }

    pub(crate) fn set_standard_weight(&mut self, weight: Option<f64>) {
        self.standard_weight = weight;
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.z == other.z && self.symbol == other.symbol && self.name == other.name
    }
}

impl Eq for Element {}

impl Hash for Element {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.z.hash(state);
        self.symbol.hash(state);
        self.name.hash(state);
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Z={})", self.symbol, self.z)
    }
}
