use std::collections::HashMap;

use crate::error::Error;
use crate::model::element::Element;
use crate::model::nuclide::Nuclide;

/// Owns every [`Element`] of a directory, keyed by atomic number, symbol,
/// and name.
///
/// Insertion is atomic: a key collision in any of the three maps rejects the
/// whole element and leaves every map unchanged. Iteration order is
/// unspecified.
#[derive(Debug, Clone, Default)]
pub struct ElementRegistry {
    elements: Vec<Element>,
    by_z: HashMap<u32, usize>,
    by_symbol: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an element under all three key namespaces.
    pub fn add(&mut self, element: Element) -> Result<usize, Error> {
        if self.by_z.contains_key(&element.z) {
            return Err(Error::duplicate_key("element atomic number", element.z.to_string()));
        }
        if self.by_symbol.contains_key(&element.symbol) {
            return Err(Error::duplicate_key("element symbol", element.symbol.clone()));
        }
        if self.by_name.contains_key(&element.name) {
            return Err(Error::duplicate_key("element name", element.name.clone()));
        }
        let slot = self.elements.len();
        self.by_z.insert(element.z, slot);
        self.by_symbol.insert(element.symbol.clone(), slot);
        self.by_name.insert(element.name.clone(), slot);
        self.elements.push(element);
        Ok(slot)
    }

    pub fn by_z(&self, z: u32) -> Result<&Element, Error> {
        self.slot_by_z(z)
            .map(|slot| &self.elements[slot])
            .ok_or_else(|| Error::not_found("element atomic number", z.to_string()))
    }

    pub fn by_symbol(&self, symbol: &str) -> Result<&Element, Error> {
        self.by_symbol
            .get(symbol)
            .map(|&slot| &self.elements[slot])
            .ok_or_else(|| Error::not_found("element symbol", symbol))
    }

    pub fn by_name(&self, name: &str) -> Result<&Element, Error> {
        self.by_name
            .get(name)
            .map(|&slot| &self.elements[slot])
            .ok_or_else(|| Error::not_found("element name", name))
    }

    /// Adds `nuclide_slot` to the isotope set of the element owning the
    /// nuclide's atomic number. Re-attaching an already-attached slot is a
    /// no-op (set semantics).
    pub fn attach_isotope(&mut self, nuclide_slot: usize, nuclide: &Nuclide) -> Result<(), Error> {
        let slot = self
            .slot_by_z(nuclide.z)
            .ok_or_else(|| Error::not_found("element atomic number", nuclide.z.to_string()))?;
        self.elements[slot].attach(nuclide_slot);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Empties every map and the owned arena. Only used when rebuilding a
    /// directory from scratch.
    pub fn clear(&mut self) {
        self.elements.clear();
        self.by_z.clear();
        self.by_symbol.clear();
        self.by_name.clear();
    }

    pub(crate) fn slot_by_z(&self, z: u32) -> Option<usize> {
        self.by_z.get(&z).copied()
    }

    pub(crate) fn get(&self, slot: usize) -> &Element {
        &self.elements[slot]
    }

    pub(crate) fn get_mut(&mut self, slot: usize) -> &mut Element {
        &mut self.elements[slot]
    }

    pub(crate) fn slots(&self) -> std::ops::Range<usize> {
        0..self.elements.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carbon() -> Element {
        Element::new(6, "C", "carbon")
    }

    #[test]
    fn add_and_lookup_by_all_keys() {
        let mut reg = ElementRegistry::new();
        reg.add(carbon()).unwrap();
        assert_eq!(reg.by_z(6).unwrap().symbol, "C");
        assert_eq!(reg.by_symbol("C").unwrap().name, "carbon");
        assert_eq!(reg.by_name("carbon").unwrap().z, 6);
    }

    #[test]
    fn duplicate_on_any_key_is_rejected() {
        let mut reg = ElementRegistry::new();
        reg.add(carbon()).unwrap();

        let err = reg.add(Element::new(6, "X", "xcarbon")).unwrap_err();
        assert!(matches!(err, Error::DuplicateKey { index: "element atomic number", .. }));
        let err = reg.add(Element::new(99, "C", "xcarbon")).unwrap_err();
        assert!(matches!(err, Error::DuplicateKey { index: "element symbol", .. }));
        let err = reg.add(Element::new(99, "X", "carbon")).unwrap_err();
        assert!(matches!(err, Error::DuplicateKey { index: "element name", .. }));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn lookup_miss_is_not_found() {
        let reg = ElementRegistry::new();
        assert!(matches!(reg.by_z(6), Err(Error::NotFound { .. })));
        assert!(matches!(reg.by_symbol("C"), Err(Error::NotFound { .. })));
        assert!(matches!(reg.by_name("carbon"), Err(Error::NotFound { .. })));
    }

    #[test]
    fn attach_isotope_requires_registered_element() {
        let mut reg = ElementRegistry::new();
        let slot = reg.add(carbon()).unwrap();
        let c12 = Nuclide::isotope(slot, reg.get(slot), 12, 0, 12.0, 0.9893, None).unwrap();

        reg.attach_isotope(0, &c12).unwrap();
        reg.attach_isotope(0, &c12).unwrap();
        assert_eq!(reg.by_z(6).unwrap().isotope_count(), 1);

        let mut empty = ElementRegistry::new();
        assert!(matches!(
            empty.attach_isotope(0, &c12),
            Err(Error::NotFound { .. })
        ));
    }

    #[test]
    fn clear_resets_everything() {
        let mut reg = ElementRegistry::new();
        reg.add(carbon()).unwrap();
        reg.clear();
        assert!(reg.is_empty());
        assert!(reg.by_z(6).is_err());
        reg.add(carbon()).unwrap();
    }
}
