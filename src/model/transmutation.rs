//! Burn-chain interaction edges and the raw records they are built from.
//!
//! A burn chain arrives as externally-parsed [`BurnRecord`]s, one sequence
//! per nuclide. Each record must carry exactly one tag: a transmutation, a
//! decay mode, or a spontaneous-fission neutron yield. The directory
//! classifies records when the chain is imposed and stores the typed
//! [`Transmutation`] and [`DecayMode`] edges on the nuclides.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A neutron-induced transmutation edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transmutation {
    /// Reaction mnemonic, e.g. `nGamma`, `n2n`.
    #[serde(rename = "type")]
    pub reaction: String,
    /// Candidate product names, in preference order.
    pub products: Vec<String>,
    /// Branch fraction of the reaction going to these products.
    #[serde(default = "full_branch")]
    pub branch: f64,
}

/// A radioactive decay edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecayMode {
    /// Decay mnemonic, e.g. `bmd`, `alpha`, `sf`.
    #[serde(rename = "type")]
    pub mode: String,
    /// Candidate product names, in preference order.
    pub products: Vec<String>,
    #[serde(default = "full_branch")]
    pub branch: f64,
    #[serde(rename = "halfLifeInSeconds", default)]
    pub half_life_seconds: f64,
}

fn full_branch() -> f64 {
    1.0
}

impl Transmutation {
    /// First candidate product present in the active set, if any.
    pub fn preferred_product<'a>(&'a self, active: &HashSet<String>) -> Option<&'a str> {
        preferred(&self.products, active)
    }
}

impl DecayMode {
    /// First candidate product present in the active set, if any.
    pub fn preferred_product<'a>(&'a self, active: &HashSet<String>) -> Option<&'a str> {
        preferred(&self.products, active)
    }
}

fn preferred<'a>(products: &'a [String], active: &HashSet<String>) -> Option<&'a str> {
    products
        .iter()
        .map(String::as_str)
        .find(|p| active.contains(*p))
}

/// One raw burn-chain record, exactly one tag populated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BurnRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transmutation: Option<Transmutation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decay: Option<DecayMode>,
    /// Spontaneous-fission neutron yield.
    #[serde(rename = "nuSF", default, skip_serializing_if = "Option::is_none")]
    pub nu_sf: Option<f64>,
}

/// The single classified tag of a [`BurnRecord`].
#[derive(Debug, Clone, PartialEq)]
pub enum BurnTag<'a> {
    Transmutation(&'a Transmutation),
    Decay(&'a DecayMode),
    SpontaneousFission(f64),
}

impl BurnRecord {
    /// Classifies the record, rejecting anything but exactly one tag.
    pub fn single_tag(&self, nuclide: &str) -> Result<BurnTag<'_>, Error> {
        let tags = usize::from(self.transmutation.is_some())
            + usize::from(self.decay.is_some())
            + usize::from(self.nu_sf.is_some());
        if tags != 1 {
            return Err(Error::malformed_burn_record(
                nuclide,
                format!("expected exactly one of transmutation, decay, or nuSF; found {tags}"),
            ));
        }
        if let Some(t) = &self.transmutation {
            Ok(BurnTag::Transmutation(t))
        } else if let Some(d) = &self.decay {
            Ok(BurnTag::Decay(d))
        } else {
            // tags == 1 and the first two are None
            Ok(BurnTag::SpontaneousFission(self.nu_sf.unwrap_or_default()))
        }
    }
}

/// Burn-chain data for a whole directory: per-nuclide record sequences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BurnChainData(pub BTreeMap<String, Vec<BurnRecord>>);

impl BurnChainData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, nuclide: impl Into<String>, records: Vec<BurnRecord>) {
        self.0.insert(nuclide.into(), records);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[BurnRecord])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transmutation(products: &[&str]) -> Transmutation {
        Transmutation {
            reaction: "nGamma".to_string(),
            products: products.iter().map(|p| p.to_string()).collect(),
            branch: 1.0,
        }
    }

    fn active(names: &[&str]) -> HashSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn preferred_product_takes_first_active_candidate() {
        let t = transmutation(&["PU240", "PU239"]);
        assert_eq!(t.preferred_product(&active(&["PU239", "PU240"])), Some("PU240"));
        assert_eq!(t.preferred_product(&active(&["PU239"])), Some("PU239"));
        assert_eq!(t.preferred_product(&active(&["U235"])), None);
    }

    #[test]
    fn single_tag_accepts_one_tag() {
        let rec = BurnRecord {
            transmutation: Some(transmutation(&["PU239"])),
            ..Default::default()
        };
        assert!(matches!(
            rec.single_tag("U238").unwrap(),
            BurnTag::Transmutation(_)
        ));

        let rec = BurnRecord {
            nu_sf: Some(2.1),
            ..Default::default()
        };
        match rec.single_tag("CM244").unwrap() {
            BurnTag::SpontaneousFission(nu) => assert_eq!(nu, 2.1),
            other => panic!("unexpected tag {other:?}"),
        }
    }

    #[test]
    fn single_tag_rejects_multiple_and_empty() {
        let rec = BurnRecord {
            transmutation: Some(transmutation(&["PU239"])),
            nu_sf: Some(2.1),
            ..Default::default()
        };
        let err = rec.single_tag("U238").unwrap_err();
        assert!(matches!(err, Error::MalformedBurnRecord { .. }));
        assert!(err.to_string().contains("found 2"));

        let err = BurnRecord::default().single_tag("U238").unwrap_err();
        assert!(err.to_string().contains("found 0"));
    }
}
