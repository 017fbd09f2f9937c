use std::collections::HashMap;

use crate::error::Error;
use crate::model::nuclide::{database_name_for, Nuclide, NuclideKind};
use crate::model::transmutation::{DecayMode, Transmutation};

/// Owns every [`Nuclide`] of a directory and enforces uniqueness across six
/// key namespaces: canonical name, database name, label, MC2 id (v2 and v3
/// share one namespace), MCNP id, and AAAZZZS id.
///
/// Insertion is atomic: every derivable key is checked against its map before
/// any map is touched, so a collision on one key cannot leave a partial
/// registration behind. Ids that are shared by construction (the dummy
/// MC2-v3 `DUMMY`, lump/dummy MCNP and AAAZZZS ids, the natural C/V AAAZZZS
/// aliases) are computable on the nuclide but never indexed.
#[derive(Debug, Clone, Default)]
pub struct NuclideRegistry {
    nuclides: Vec<Nuclide>,
    by_name: HashMap<String, usize>,
    by_db_name: HashMap<String, usize>,
    by_label: HashMap<String, usize>,
    by_mc2_id: HashMap<String, usize>,
    by_mcnp_id: HashMap<String, usize>,
    by_aaazzzs_id: HashMap<String, usize>,
}

impl NuclideRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a nuclide under every key namespace it participates in.
    pub fn add(&mut self, nuclide: Nuclide) -> Result<usize, Error> {
        let db_name = nuclide.database_name();
        let mcc3 = match nuclide.kind {
            // every dummy shares the DUMMY sentinel
            NuclideKind::Dummy => None,
            _ => nuclide.mcc3_id().filter(|id| Some(id) != nuclide.mc2_id.as_ref()),
        };
        let mcnp = nuclide.mcnp_id();
        let aaazzzs = match nuclide.kind {
            // natural C/V carry hard-coded ids that alias their dominant
            // isotope's id (C12, V51)
            NuclideKind::Natural => None,
            _ => nuclide.aaazzzs_id(),
        };

        if self.by_name.contains_key(&nuclide.name) {
            return Err(Error::duplicate_key("nuclide name", nuclide.name));
        }
        if self.by_db_name.contains_key(&db_name) {
            return Err(Error::duplicate_key("database name", db_name));
        }
        if self.by_label.contains_key(&nuclide.label) {
            return Err(Error::duplicate_key("label", nuclide.label));
        }
        if let Some(id) = &nuclide.mc2_id {
            if self.by_mc2_id.contains_key(id) {
                return Err(Error::duplicate_key("mc2 id", id.clone()));
            }
        }
        if let Some(id) = &mcc3 {
            if self.by_mc2_id.contains_key(id) {
                return Err(Error::duplicate_key("mc2 id", id.clone()));
            }
        }
        if let Some(id) = &mcnp {
            if self.by_mcnp_id.contains_key(id) {
                return Err(Error::duplicate_key("mcnp id", id.clone()));
            }
        }
        if let Some(id) = &aaazzzs {
            if self.by_aaazzzs_id.contains_key(id) {
                return Err(Error::duplicate_key("aaazzzs id", id.clone()));
            }
        }

        let slot = self.nuclides.len();
        self.by_name.insert(nuclide.name.clone(), slot);
        self.by_db_name.insert(db_name, slot);
        self.by_label.insert(nuclide.label.clone(), slot);
        if let Some(id) = &nuclide.mc2_id {
            self.by_mc2_id.insert(id.clone(), slot);
        }
        if let Some(id) = mcc3 {
            self.by_mc2_id.insert(id, slot);
        }
        if let Some(id) = mcnp {
            self.by_mcnp_id.insert(id, slot);
        }
        if let Some(id) = aaazzzs {
            self.by_aaazzzs_id.insert(id, slot);
        }
        self.nuclides.push(nuclide);
        Ok(slot)
    }

    pub fn by_name(&self, name: &str) -> Result<&Nuclide, Error> {
        self.keyed(&self.by_name, name, "nuclide name")
    }

    pub fn by_db_name(&self, db_name: &str) -> Result<&Nuclide, Error> {
        self.keyed(&self.by_db_name, db_name, "database name")
    }

    pub fn by_label(&self, label: &str) -> Result<&Nuclide, Error> {
        self.keyed(&self.by_label, label, "label")
    }

    /// Looks up by MC2-v2 or MC2-v3 id; both live in one namespace.
    pub fn by_mc2_id(&self, id: &str) -> Result<&Nuclide, Error> {
        self.keyed(&self.by_mc2_id, id, "mc2 id")
    }

    pub fn by_mcnp_id(&self, id: &str) -> Result<&Nuclide, Error> {
        self.keyed(&self.by_mcnp_id, id, "mcnp id")
    }

    pub fn by_aaazzzs_id(&self, id: &str) -> Result<&Nuclide, Error> {
        self.keyed(&self.by_aaazzzs_id, id, "aaazzzs id")
    }

    /// Lazy, restartable filter over the full nuclide set.
    ///
    /// Read-only and allocation-free; order is unspecified. Mutation during
    /// iteration is ruled out by the borrow on `self`.
    pub fn where_matching<'a, P>(&'a self, predicate: P) -> impl Iterator<Item = &'a Nuclide>
    where
        P: Fn(&Nuclide) -> bool + 'a,
    {
        self.nuclides.iter().filter(move |n| predicate(n))
    }

    /// The unique nuclide satisfying `predicate`.
    ///
    /// Fails with [`Error::AmbiguousMatch`] when zero or more than one
    /// nuclide matches, enumerating every offending match.
    pub fn single<P>(&self, predicate: P) -> Result<&Nuclide, Error>
    where
        P: Fn(&Nuclide) -> bool,
    {
        let matches: Vec<&Nuclide> = self.nuclides.iter().filter(|n| predicate(n)).collect();
        match matches.as_slice() {
            [unique] => Ok(*unique),
            _ => Err(Error::ambiguous_match(
                matches.iter().map(|n| n.to_string()).collect(),
            )),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Nuclide> {
        self.nuclides.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nuclides.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nuclides.is_empty()
    }

    pub(crate) fn slot_by_name(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub(crate) fn get(&self, slot: usize) -> &Nuclide {
        &self.nuclides[slot]
    }

    /// Re-registers a nuclide under a new canonical name and database name.
    ///
    /// Used for the AM242 ground/metastable swap after bulk construction;
    /// the label and external-id keys are untouched.
    pub(crate) fn rename(&mut self, slot: usize, new_name: &str) -> Result<(), Error> {
        let new_db = database_name_for(new_name);
        if self.by_name.get(new_name).is_some_and(|&other| other != slot) {
            return Err(Error::duplicate_key("nuclide name", new_name));
        }
        if self.by_db_name.get(&new_db).is_some_and(|&other| other != slot) {
            return Err(Error::duplicate_key("database name", new_db));
        }
        let old_db = self.nuclides[slot].database_name();
        let old_name = std::mem::replace(&mut self.nuclides[slot].name, new_name.to_string());
        self.by_name.remove(&old_name);
        self.by_db_name.remove(&old_db);
        self.by_name.insert(new_name.to_string(), slot);
        self.by_db_name.insert(new_db, slot);
        Ok(())
    }

    /// Backfills an MC2-v2 id on an already-registered nuclide and indexes it.
    pub(crate) fn assign_mc2_id(&mut self, slot: usize, id: &str) -> Result<(), Error> {
        if self.by_mc2_id.get(id).is_some_and(|&other| other != slot) {
            return Err(Error::duplicate_key("mc2 id", id));
        }
        self.nuclides[slot].mc2_id = Some(id.to_string());
        self.by_mc2_id.insert(id.to_string(), slot);
        Ok(())
    }

    pub(crate) fn set_weight(&mut self, slot: usize, weight: f64) {
        self.nuclides[slot].weight = weight;
    }

    pub(crate) fn set_abundance(&mut self, slot: usize, abundance: f64) {
        self.nuclides[slot].abundance = abundance;
    }

    pub(crate) fn set_burn_data(
        &mut self,
        slot: usize,
        transmutations: Vec<Transmutation>,
        decays: Vec<DecayMode>,
        nu_sf: f64,
    ) {
        self.nuclides[slot].set_burn_data(transmutations, decays, nu_sf);
    }

    fn keyed<'a>(
        &'a self,
        map: &HashMap<String, usize>,
        key: &str,
        index: &'static str,
    ) -> Result<&'a Nuclide, Error> {
        map.get(key)
            .map(|&slot| &self.nuclides[slot])
            .ok_or_else(|| Error::not_found(index, key))
    }
}
