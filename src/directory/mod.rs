//! The directory: composition root over the element and nuclide registries.
//!
//! A [`Directory`] is built once from seed records, wires the bidirectional
//! element/nuclide relationship, derives element standard weights, and (at
//! most once) takes on a burn chain. After that it is read-only; every query
//! takes `&self` and is safe to run from many threads at once. Multiple
//! independent directories may coexist, e.g. one with lumped fission
//! products and one without.

mod elements;
mod nuclides;

pub use elements::ElementRegistry;
pub use nuclides::NuclideRegistry;

use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use crate::chain;
use crate::error::Error;
use crate::model::element::Element;
use crate::model::nuclide::{Nuclide, NuclideKind};
use crate::model::transmutation::{BurnChainData, BurnTag, DecayMode, Transmutation};
use crate::seed::{ElementRecord, NuclideSeed};

/// ENDF/B-VII.1 base MAT isotope numbers for elements with no stable
/// isotope, from https://t2.lanl.gov/nis/data/endf/endfvii-n.html.
const BASE_ENDFB7_MAT_NUM: [(&str, i64); 12] = [
    ("PM", 139),
    ("RA", 223),
    ("AC", 225),
    ("TH", 227),
    ("PA", 229),
    ("NP", 230),
    ("PU", 235),
    ("AM", 235),
    ("CM", 240),
    ("BK", 240),
    ("CF", 240),
    ("TC", 99),
];

/// A fully-wired registry of elements and nuclides.
#[derive(Debug, Clone)]
pub struct Directory {
    elements: ElementRegistry,
    nuclides: NuclideRegistry,
    burn_chain_imposed: bool,
}

impl Directory {
    /// Builds a directory from seed records.
    ///
    /// Population runs in two passes: every element and nuclide is registered
    /// and attached first, and only then is each element's standard weight
    /// derived, since the abundance-weighted mean needs the complete isotope
    /// set per element.
    pub fn build(element_seed: &[ElementRecord], nuclide_seed: &NuclideSeed) -> Result<Self, Error> {
        let mut elements = ElementRegistry::new();
        for record in element_seed {
            elements.add(Element::new(record.z, record.symbol.clone(), record.name.clone()))?;
        }

        let mut nuclides = NuclideRegistry::new();
        for iso in &nuclide_seed.isotopes {
            if iso.z == 0 && iso.a == 1 {
                // the free neutron is not a directory species
                continue;
            }
            let slot = elements
                .slot_by_z(iso.z)
                .ok_or_else(|| Error::not_found("element atomic number", iso.z.to_string()))?;
            let nuclide = Nuclide::isotope(slot, elements.get(slot), iso.a, 0, iso.mass, 0.0, None)?;
            nuclides.add(nuclide)?;
        }

        for ab in &nuclide_seed.abundances {
            let name = format!("{}{}", ab.symbol.to_uppercase(), ab.a);
            let slot = nuclides
                .slot_by_name(&name)
                .ok_or_else(|| Error::not_found("nuclide name", name))?;
            nuclides.set_abundance(slot, ab.percent / 100.0);
        }

        for m in &nuclide_seed.mnemonics {
            if m.z == 0 {
                let weight = m.weight.ok_or_else(|| {
                    Error::construction(format!(
                        "placeholder record '{}' carries no weight",
                        m.name
                    ))
                })?;
                let nuclide = if m.name.contains("LFP") || m.name.contains("LREGN") {
                    Nuclide::lump(&m.name, m.z, m.id.clone(), weight)?
                } else {
                    Nuclide::dummy(&m.name, m.id.clone(), weight)?
                };
                nuclides.add(nuclide)?;
            } else if m.a == 0 {
                let slot = elements
                    .slot_by_z(m.z)
                    .ok_or_else(|| Error::not_found("element atomic number", m.z.to_string()))?;
                // abundance-weighted sum over the isotopes read so far
                let weight: f64 = nuclides
                    .iter()
                    .filter(|n| n.z == m.z && n.kind == NuclideKind::Isotope && n.abundance > 0.0)
                    .map(|n| n.weight * n.abundance)
                    .sum();
                let nuclide =
                    Nuclide::natural(&m.name, slot, elements.get(slot), weight, m.id.clone())?;
                nuclides.add(nuclide)?;
            } else {
                let mut need_to_add = true;
                if m.state == 0 {
                    let matching: Vec<usize> = (0..nuclides.len())
                        .filter(|&s| {
                            let n = nuclides.get(s);
                            n.z == m.z && n.a == m.a && n.state == 0
                        })
                        .collect();
                    if matching.len() > 1 {
                        return Err(Error::ambiguous_match(
                            matching.iter().map(|&s| nuclides.get(s).to_string()).collect(),
                        ));
                    }
                    if let Some(&slot) = matching.first() {
                        need_to_add = false;
                        if let Some(id) = &m.id {
                            nuclides.assign_mc2_id(slot, id)?;
                        }
                    }
                }
                if need_to_add {
                    let slot = elements
                        .slot_by_z(m.z)
                        .ok_or_else(|| Error::not_found("element atomic number", m.z.to_string()))?;
                    let element = elements.get(slot);
                    let weight = element.standard_weight().unwrap_or(f64::from(m.a));
                    let nuclide =
                        Nuclide::isotope(slot, element, m.a, m.state, weight, 0.0, m.id.clone())?;
                    nuclides.add(nuclide)?;
                }
            }
        }

        rename_am242(&mut nuclides)?;

        // pass two: attach everything, then derive every standard weight
        for slot in 0..nuclides.len() {
            let nuclide = nuclides.get(slot);
            if nuclide.element.is_some() {
                elements.attach_isotope(slot, nuclide)?;
            }
        }
        for eslot in elements.slots() {
            let (weighted, total) = elements
                .get(eslot)
                .isotope_slots()
                .map(|s| nuclides.get(s))
                .filter(|n| n.abundance > 0.0)
                .fold((0.0, 0.0), |(w, t), n| {
                    (w + n.weight * n.abundance, t + n.abundance)
                });
            let standard = if total > 0.0 { Some(weighted / total) } else { None };
            elements.get_mut(eslot).set_standard_weight(standard);
        }

        Ok(Self {
            elements,
            nuclides,
            burn_chain_imposed: false,
        })
    }

    #[inline]
    pub fn elements(&self) -> &ElementRegistry {
        &self.elements
    }

    #[inline]
    pub fn nuclides(&self) -> &NuclideRegistry {
        &self.nuclides
    }

    #[inline]
    pub fn burn_chain_imposed(&self) -> bool {
        self.burn_chain_imposed
    }

    /// Applies transmutation and decay information to each named nuclide.
    ///
    /// Allowed at most once per directory: imposing a chain on top of an
    /// existing one would snowball edges unphysically, so a second call is a
    /// no-op that logs a warning instead of re-mutating state.
    pub fn impose_burn_chain(&mut self, burn_data: &BurnChainData) -> Result<(), Error> {
        if self.burn_chain_imposed {
            log::warn!("burn chain already imposed; skipping reimposition");
            return Ok(());
        }
        for (name, records) in burn_data.iter() {
            let slot = self
                .nuclides
                .slot_by_name(name)
                .ok_or_else(|| Error::not_found("nuclide name", name))?;
            let mut transmutations: Vec<Transmutation> = Vec::new();
            let mut decays: Vec<DecayMode> = Vec::new();
            let mut nu_sf = 0.0;
            for record in records {
                match record.single_tag(name)? {
                    BurnTag::Transmutation(t) => transmutations.push(t.clone()),
                    BurnTag::Decay(d) => decays.push(d.clone()),
                    BurnTag::SpontaneousFission(nu) => nu_sf = nu,
                }
            }
            self.nuclides.set_burn_data(slot, transmutations, decays, nu_sf);
        }
        self.burn_chain_imposed = true;
        Ok(())
    }

    /// Extends `composition` in place with every active nuclide reachable
    /// from its keys through transmutation and decay edges.
    ///
    /// Newly reached species enter with quantity zero. Fails with
    /// [`Error::MissingActiveNuclides`] if any interaction has no product in
    /// the active set, enumerating every unresolvable product group.
    pub fn grow_reachable(
        &self,
        composition: &mut HashMap<String, f64>,
        active: &HashSet<String>,
    ) -> Result<(), Error> {
        chain::grow_reachable(self, composition, active)
    }

    /// The naturally-occurring isotopes of element `z`, sorted by mass
    /// number.
    pub fn natural_isotopics(&self, z: u32) -> Result<Vec<&Nuclide>, Error> {
        let element = self.elements.by_z(z)?;
        let mut isotopes: Vec<&Nuclide> = element
            .isotope_slots()
            .map(|slot| self.nuclides.get(slot))
            .filter(|n| n.abundance > 0.0 && n.a > 0)
            .collect();
        isotopes.sort_unstable_by_key(|n| (n.a, n.state));
        Ok(isotopes)
    }

    /// Expands a nuclide name to isotopic nuclides.
    ///
    /// Elemental pseudo-species expand to their natural isotopes, real
    /// isotopes to themselves, and lumped/dummy placeholders to nothing.
    pub fn isotopics(&self, name: &str) -> Result<Vec<&Nuclide>, Error> {
        let nuclide = self.nuclides.by_name(name)?;
        match nuclide.kind {
            NuclideKind::Lump | NuclideKind::Dummy => Ok(Vec::new()),
            NuclideKind::Natural => self.natural_isotopics(nuclide.z),
            NuclideKind::Isotope => Ok(vec![nuclide]),
        }
    }

    /// True if this nuclide is the only naturally-occurring isotope of its
    /// element.
    pub fn is_mono_isotopic_element(&self, name: &str) -> Result<bool, Error> {
        let nuclide = self.nuclides.by_name(name)?;
        if nuclide.abundance <= 0.0 {
            return Ok(false);
        }
        Ok(self.natural_isotopics(nuclide.z)?.len() == 1)
    }

    /// Canonical name for a database-column name, or `None` if the column
    /// does not correspond to a nuclide.
    pub fn nuc_name_from_db_name(&self, db_name: &str) -> Option<&str> {
        self.nuclides
            .by_db_name(db_name)
            .ok()
            .map(|n| n.name.as_str())
    }

    /// The ENDF MAT number: `Z*100 + I`, with `I = 25` for the lightest
    /// stable isotope and stepping by 3 per mass number to leave room for
    /// isomers.
    ///
    /// The lightest-stable reference comes from a hard-coded table for
    /// elements with no stable isotope, else from the minimum mass number
    /// among the element's natural isotopes; with neither source the lookup
    /// fails. Elementals map to `Z*100`, which only exists in ENDF/B-VII.1
    /// for carbon — anything else logs a warning.
    pub fn endf_mat_num(&self, nuclide: &Nuclide) -> Result<i64, Error> {
        match nuclide.kind {
            NuclideKind::Natural => {
                if nuclide.z != 6 {
                    log::warn!(
                        "the only elemental in ENDF/B-VII.1 is carbon; MAT number for {} will not be useful",
                        nuclide.name
                    );
                }
                Ok(i64::from(nuclide.z) * 100)
            }
            NuclideKind::Lump | NuclideKind::Dummy => {
                Err(Error::not_found("endf mat number", nuclide.name.clone()))
            }
            NuclideKind::Isotope => {
                let symbol = nuclide
                    .element_symbol()
                    .ok_or_else(|| Error::not_found("endf mat number", nuclide.name.clone()))?;
                let smallest_stable_a = match BASE_ENDFB7_MAT_NUM
                    .iter()
                    .find(|(sym, _)| *sym == symbol)
                {
                    Some(&(_, base)) => base,
                    None => self
                        .natural_isotopics(nuclide.z)?
                        .iter()
                        .map(|n| i64::from(n.a))
                        .min()
                        .ok_or_else(|| Error::not_found("endf mat number", nuclide.name.clone()))?,
                };
                let isotope_num =
                    (i64::from(nuclide.a) - smallest_stable_a) * 3 + i64::from(nuclide.state) + 25;
                Ok(i64::from(nuclide.z) * 100 + isotope_num)
            }
        }
    }
}

/// AM242 swap: downstream consumers overwhelmingly mean the metastable when
/// they say AM242, so the ground state becomes AM242G and the metastable
/// takes the plain name (and the ground state's measured mass, since
/// metastable mass data is unreliable). Skipped when either species is
/// absent from the seed.
fn rename_am242(nuclides: &mut NuclideRegistry) -> Result<(), Error> {
    let (Some(ground), Some(meta)) = (
        nuclides.slot_by_name("AM242"),
        nuclides.slot_by_name("AM242M"),
    ) else {
        return Ok(());
    };
    let ground_weight = nuclides.get(ground).weight;
    nuclides.rename(ground, "AM242G")?;
    nuclides.rename(meta, "AM242")?;
    nuclides.set_weight(meta, ground_weight);
    Ok(())
}

static CURRENT: RwLock<Option<Arc<Directory>>> = RwLock::new(None);

/// Publishes `directory` as the process-wide "current" directory.
///
/// This is a convenience cache of the most-recently-built directory, not
/// authoritative state; code needing correctness guarantees should hold its
/// own `Directory` handle.
pub fn set_current(directory: Arc<Directory>) {
    let mut slot = CURRENT.write().unwrap_or_else(|e| e.into_inner());
    *slot = Some(directory);
}

/// The most-recently-published directory, if any.
pub fn current() -> Option<Arc<Directory>> {
    CURRENT.read().unwrap_or_else(|e| e.into_inner()).clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{AbundanceRecord, IsotopeRecord, MnemonicRecord};

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    fn element_seed() -> Vec<ElementRecord> {
        [
            (6, "C", "carbon"),
            (43, "TC", "technetium"),
            (92, "U", "uranium"),
            (94, "PU", "plutonium"),
            (95, "AM", "americium"),
        ]
        .iter()
        .map(|&(z, symbol, name)| ElementRecord {
            z,
            symbol: symbol.to_string(),
            name: name.to_string(),
        })
        .collect()
    }

    fn isotope(z: u32, a: u32, mass: f64) -> IsotopeRecord {
        IsotopeRecord {
            z,
            a,
            mass,
            uncertainty: None,
        }
    }

    fn abundance(z: u32, a: u32, symbol: &str, percent: f64) -> AbundanceRecord {
        AbundanceRecord {
            z,
            a,
            symbol: symbol.to_string(),
            percent,
        }
    }

    fn mnemonic(name: &str, z: u32, a: u32, state: u8, id: &str, weight: Option<f64>) -> MnemonicRecord {
        MnemonicRecord {
            name: name.to_string(),
            z,
            a,
            state,
            id: Some(id.to_string()),
            weight,
        }
    }

    fn nuclide_seed() -> NuclideSeed {
        NuclideSeed {
            isotopes: vec![
                isotope(0, 1, 1.0087), // free neutron, skipped
                isotope(6, 12, 12.0),
                isotope(6, 13, 13.0),
                isotope(43, 99, 98.906),
                isotope(92, 234, 234.041),
                isotope(92, 235, 235.044),
                isotope(92, 238, 238.051),
                isotope(94, 239, 239.052),
                isotope(95, 242, 242.06),
            ],
            abundances: vec![
                abundance(6, 12, "C", 98.93),
                abundance(6, 13, "C", 1.07),
                abundance(92, 234, "U", 0.0054),
                abundance(92, 235, "U", 0.7204),
                abundance(92, 238, "U", 99.2742),
            ],
            mnemonics: vec![
                mnemonic("U235", 92, 235, 0, "U-2355", None),
                mnemonic("AM242M", 95, 242, 1, "AM242M", None),
                mnemonic("C", 6, 0, 0, "C____5", None),
                mnemonic("LFP35", 0, 0, 0, "LFP35", Some(233.0)),
                mnemonic("DUMP1", 0, 0, 0, "DUMP1", Some(10.0)),
            ],
        }
    }

    fn build() -> Directory {
        Directory::build(&element_seed(), &nuclide_seed()).unwrap()
    }

    #[test]
    fn carbon_standard_weight_is_abundance_weighted() {
        let dir = build();
        let carbon = dir.elements().by_z(6).unwrap();
        assert!(approx_eq(carbon.standard_weight().unwrap(), 12.0107, 1e-4));
    }

    #[test]
    fn elements_without_natural_isotopes_have_no_weight() {
        let dir = build();
        assert_eq!(dir.elements().by_z(43).unwrap().standard_weight(), None);
        assert_eq!(dir.elements().by_z(94).unwrap().standard_weight(), None);
    }

    #[test]
    fn natural_occurrence_is_derived_from_abundances() {
        let dir = build();
        assert!(dir.elements().by_z(6).unwrap().is_naturally_occurring());
        assert!(!dir.elements().by_z(43).unwrap().is_naturally_occurring());
    }

    #[test]
    fn free_neutron_is_skipped() {
        let dir = build();
        assert!(dir.nuclides().where_matching(|n| n.z == 0 && n.a == 1).next().is_none());
    }

    #[test]
    fn mnemonics_backfill_mc2_ids_on_existing_ground_states() {
        let dir = build();
        assert_eq!(dir.nuclides().by_mc2_id("U-2355").unwrap().name, "U235");
    }

    #[test]
    fn mnemonics_create_metastables_lumps_dummies_and_naturals() {
        let dir = build();
        let am242m = dir.nuclides().by_name("AM242").unwrap();
        assert_eq!(am242m.state, 1);

        let natural = dir.nuclides().by_name("C").unwrap();
        assert_eq!(natural.kind, NuclideKind::Natural);
        assert_eq!(natural.a, 0);
        assert_eq!(natural.abundance, 0.0);
        assert!(approx_eq(natural.weight, 12.0107, 1e-4));

        assert_eq!(dir.nuclides().by_name("LFP35").unwrap().kind, NuclideKind::Lump);
        assert_eq!(dir.nuclides().by_name("DUMP1").unwrap().kind, NuclideKind::Dummy);
    }

    #[test]
    fn am242_swap_renames_and_reweights() {
        let dir = build();
        let meta = dir.nuclides().by_name("AM242").unwrap();
        let ground = dir.nuclides().by_name("AM242G").unwrap();
        assert_eq!(meta.state, 1);
        assert_eq!(ground.state, 0);
        // the metastable takes the ground state's measured mass
        assert_eq!(meta.weight, ground.weight);
        // both re-registered under their new database names
        assert_eq!(dir.nuclides().by_db_name("nAm242").unwrap().state, 1);
        assert_eq!(dir.nuclides().by_db_name("nAm242g").unwrap().state, 0);
        // the MCNP ids land per the library quirk
        assert_eq!(meta.mcnp_id().unwrap(), "95242");
        assert_eq!(ground.mcnp_id().unwrap(), "95642");
    }

    #[test]
    fn every_isotope_is_attached_to_exactly_its_element() {
        let dir = build();
        let uranium = dir.elements().by_z(92).unwrap();
        let attached: Vec<&str> = uranium
            .isotope_slots()
            .map(|slot| dir.nuclides().get(slot).name.as_str())
            .collect();
        assert_eq!(attached.len(), 3);
        for nuclide in dir.nuclides().where_matching(|n| n.z == 92) {
            assert!(attached.contains(&nuclide.name.as_str()));
            assert_eq!(nuclide.element, Some(dir.elements.slot_by_z(92).unwrap()));
        }
    }

    #[test]
    fn impose_burn_chain_twice_warns_and_keeps_edges() {
        let mut dir = build();
        let mut chain = BurnChainData::new();
        chain.insert(
            "U235",
            vec![crate::model::transmutation::BurnRecord {
                transmutation: Some(Transmutation {
                    reaction: "nGamma".to_string(),
                    products: vec!["U238".to_string()],
                    branch: 1.0,
                }),
                ..Default::default()
            }],
        );
        dir.impose_burn_chain(&chain).unwrap();
        assert_eq!(dir.nuclides().by_name("U235").unwrap().transmutations.len(), 1);

        let mut bigger = chain.clone();
        bigger.insert(
            "U238",
            vec![crate::model::transmutation::BurnRecord {
                nu_sf: Some(2.0),
                ..Default::default()
            }],
        );
        dir.impose_burn_chain(&bigger).unwrap();
        // second imposition is a no-op
        assert_eq!(dir.nuclides().by_name("U235").unwrap().transmutations.len(), 1);
        assert_eq!(dir.nuclides().by_name("U238").unwrap().nu_sf, 0.0);
    }

    #[test]
    fn malformed_burn_record_fails_imposition() {
        let mut dir = build();
        let mut chain = BurnChainData::new();
        chain.insert("U235", vec![crate::model::transmutation::BurnRecord::default()]);
        let err = dir.impose_burn_chain(&chain).unwrap_err();
        assert!(matches!(err, Error::MalformedBurnRecord { .. }));
    }

    #[test]
    fn natural_isotopics_and_expansion() {
        let dir = build();
        let isotopics: Vec<u32> = dir.natural_isotopics(92).unwrap().iter().map(|n| n.a).collect();
        assert_eq!(isotopics, vec![234, 235, 238]);

        let expanded: Vec<&str> = dir.isotopics("C").unwrap().iter().map(|n| n.name.as_str()).collect();
        assert_eq!(expanded, vec!["C12", "C13"]);
        assert_eq!(dir.isotopics("U235").unwrap().len(), 1);
        assert!(dir.isotopics("LFP35").unwrap().is_empty());
        assert!(dir.isotopics("DUMP1").unwrap().is_empty());
    }

    #[test]
    fn mono_isotopic_detection() {
        let dir = build();
        assert!(!dir.is_mono_isotopic_element("C12").unwrap());
        assert!(!dir.is_mono_isotopic_element("TC99").unwrap());
    }

    #[test]
    fn db_name_round_trip() {
        let dir = build();
        assert_eq!(dir.nuc_name_from_db_name("nU235"), Some("U235"));
        assert_eq!(dir.nuc_name_from_db_name("nXe135"), None);
    }

    #[test]
    fn endf_mat_numbers() {
        let dir = build();
        // lightest natural uranium isotope is U234, so U235 is 9228
        let u235 = dir.nuclides().by_name("U235").unwrap();
        assert_eq!(dir.endf_mat_num(u235).unwrap(), 9228);
        // technetium has no stable isotope and comes from the base table
        let tc99 = dir.nuclides().by_name("TC99").unwrap();
        assert_eq!(dir.endf_mat_num(tc99).unwrap(), 4325);
        // elemental carbon is the one legitimate elemental MAT
        let c = dir.nuclides().by_name("C").unwrap();
        assert_eq!(dir.endf_mat_num(c).unwrap(), 600);
        // placeholders have no MAT number
        let lump = dir.nuclides().by_name("LFP35").unwrap();
        assert!(matches!(dir.endf_mat_num(lump), Err(Error::NotFound { .. })));
    }

    #[test]
    fn independent_directories_share_no_state() {
        let a = build();
        let b = build();
        assert_eq!(a.nuclides().len(), b.nuclides().len());
        // same physical species compare equal across directories
        assert_eq!(
            a.nuclides().by_name("U235").unwrap(),
            b.nuclides().by_name("U235").unwrap()
        );
    }

    #[test]
    fn current_directory_is_a_cache() {
        assert!(current().is_none() || current().is_some()); // no panic on empty
        let dir = Arc::new(build());
        set_current(Arc::clone(&dir));
        let cached = current().unwrap();
        assert_eq!(cached.nuclides().len(), dir.nuclides().len());
    }
}
