use std::fmt;
use std::hash::{Hash, Hasher};

use super::element::Element;
use super::transmutation::{DecayMode, Transmutation};
use crate::error::Error;

/// Atomic numbers above this are counted as heavy metal.
pub const HEAVY_METAL_CUTOFF_Z: u32 = 89;

/// Nuclides conventionally treated as fissile.
const FISSILE: [&str; 6] = ["U235", "PU239", "PU241", "AM242M", "CM244", "U233"];

/// Base digits for the last label character: `0-9` for ground state,
/// `A-J` for the first metastable state.
const LABEL_DIGITS: &[u8; 20] = b"0123456789ABCDEFGHIJ";

/// The species variant a [`Nuclide`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NuclideKind {
    /// A real isotope: A > 0, owned by an element.
    Isotope,
    /// A whole naturally-occurring element as a pseudo-species: A = 0,
    /// abundance forced to zero so it never skews element weight averaging.
    Natural,
    /// A lumped fission-product group: Z = 0, no isotopics.
    Lump,
    /// An unmodeled decay/transmutation sink: Z = 0, no element reference.
    Dummy,
}

/// A single nuclide species, identified by (Z, A, excitation state).
///
/// Nuclides are constructed in bulk at directory-build time and never
/// individually removed. Transmutation and decay edges are attached exactly
/// once, when a burn chain is imposed on the owning directory. Equality and
/// hashing go by physical identity (Z, A, state) only, so nuclides from
/// independent directories compare equal when they denote the same species.
#[derive(Debug, Clone)]
pub struct Nuclide {
    pub z: u32,
    pub a: u32,
    /// 0 = ground state, >0 = metastable.
    pub state: u8,
    /// Atomic mass.
    pub weight: f64,
    /// Natural atom fraction in [0, 1].
    pub abundance: f64,
    /// Canonical name, e.g. `U235`, `AM242M`, `LFP35`.
    pub name: String,
    /// Compact unique label, e.g. `U235`, `H03`, `FP35`.
    pub label: String,
    /// MC2-v2 library id, when the mnemonic table supplies one.
    pub mc2_id: Option<String>,
    pub kind: NuclideKind,
    /// Slot of the owning element in the element registry. Absent for lump
    /// and dummy pseudo-species.
    pub element: Option<usize>,
    pub transmutations: Vec<Transmutation>,
    pub decays: Vec<DecayMode>,
    /// Neutrons released per spontaneous fission.
    pub nu_sf: f64,
    symbol: Option<String>,
}

impl Nuclide {
    /// Shared constructor behind the variant-specific ones.
    ///
    /// Exactly one of `element` and `z` must be supplied; violating that is a
    /// construction error, not a silent pick.
    fn from_parts(
        element: Option<(usize, &Element)>,
        z: Option<u32>,
        a: u32,
        state: u8,
        weight: f64,
        abundance: f64,
        name: Option<String>,
        label: Option<String>,
        mc2_id: Option<String>,
        kind: NuclideKind,
    ) -> Result<Self, Error> {
        if element.is_some() == z.is_some() {
            return Err(Error::construction(
                "either an element or an atomic number must be provided, but not both",
            ));
        }
        let (slot, symbol, z) = match element {
            Some((slot, el)) => (Some(slot), Some(el.symbol.clone()), el.z),
            None => (None, None, z.unwrap_or(0)),
        };
        let name = match name {
            Some(name) => name,
            None => match &symbol {
                Some(symbol) => derive_name(symbol, a, state),
                None => {
                    return Err(Error::construction(
                        "a canonical name is required when no element is supplied",
                    ))
                }
            },
        };
        let label = match label {
            Some(label) => label,
            None => match &symbol {
                Some(symbol) => derive_label(symbol, a, state)?,
                None => {
                    return Err(Error::construction(
                        "a label is required when no element is supplied",
                    ))
                }
            },
        };
        Ok(Self {
            z,
            a,
            state,
            weight,
            abundance,
            name,
            label,
            mc2_id,
            kind,
            element: slot,
            transmutations: Vec::new(),
            decays: Vec::new(),
            nu_sf: 0.0,
            symbol,
        })
    }

    /// Creates a real isotope of `element`, with auto-derived name and label.
    pub fn isotope(
        slot: usize,
        element: &Element,
        a: u32,
        state: u8,
        weight: f64,
        abundance: f64,
        mc2_id: Option<String>,
    ) -> Result<Self, Error> {
        Self::from_parts(
            Some((slot, element)),
            None,
            a,
            state,
            weight,
            abundance,
            None,
            None,
            mc2_id,
            NuclideKind::Isotope,
        )
    }

    /// Creates the natural/elemental pseudo-species for `element`.
    ///
    /// `weight` is the abundance-weighted sum over the element's natural
    /// isotopes; abundance stays zero so the pseudo-species never
    /// double-counts in element weight averaging.
    pub fn natural(
        name: &str,
        slot: usize,
        element: &Element,
        weight: f64,
        mc2_id: Option<String>,
    ) -> Result<Self, Error> {
        Self::from_parts(
            Some((slot, element)),
            None,
            0,
            0,
            weight,
            0.0,
            Some(name.to_string()),
            Some(name.to_string()),
            mc2_id,
            NuclideKind::Natural,
        )
    }

    /// Creates a lumped fission-product pseudo-species.
    ///
    /// The label drops the leading character of the name (`LFP35` -> `FP35`)
    /// so it fits the fixed label width.
    pub fn lump(name: &str, z: u32, mc2_id: Option<String>, weight: f64) -> Result<Self, Error> {
        if name.len() < 2 {
            return Err(Error::construction(format!(
                "lump nuclide name '{name}' is too short to derive a label"
            )));
        }
        Self::from_parts(
            None,
            Some(z),
            0,
            0,
            weight,
            0.0,
            Some(name.to_string()),
            Some(name[1..].to_string()),
            mc2_id,
            NuclideKind::Lump,
        )
    }

    /// Creates a dummy placeholder sink.
    ///
    /// Dummy names follow the `DUMP<n>` convention; the label keeps the
    /// trailing digit (`DUMP1` -> `DMP1`).
    pub fn dummy(name: &str, mc2_id: Option<String>, weight: f64) -> Result<Self, Error> {
        let digit = name.chars().nth(4).ok_or_else(|| {
            Error::construction(format!(
                "dummy nuclide name '{name}' is too short to derive a label"
            ))
        })?;
        Self::from_parts(
            None,
            Some(0),
            0,
            0,
            weight,
            0.0,
            Some(name.to_string()),
            Some(format!("DMP{digit}")),
            mc2_id,
            NuclideKind::Dummy,
        )
    }

    /// Symbol of the owning element, when there is one.
    #[inline]
    pub fn element_symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    /// Name used for this nuclide in database columns, e.g. `nPu239`.
    pub fn database_name(&self) -> String {
        database_name_for(&self.name)
    }

    /// The MC2-v3 library id, e.g. `U235_7`, `AM42M7`, `C____7`.
    ///
    /// Dummies share the sentinel `DUMMY`; lumps reuse their MC2-v2 id.
    pub fn mcc3_id(&self) -> Option<String> {
        match self.kind {
            NuclideKind::Dummy => Some("DUMMY".to_string()),
            NuclideKind::Lump => self.mc2_id.clone(),
            NuclideKind::Natural => {
                let symbol = self.symbol.as_deref()?;
                Some(format!("{symbol:_<5}7"))
            }
            NuclideKind::Isotope => {
                let symbol = self.symbol.as_deref()?;
                let base = if self.state > 0 {
                    format!("{}{}M", symbol, self.a % 100)
                } else {
                    format!("{}{}", symbol, self.a % 100)
                };
                Some(format!("{base:_<5}7"))
            }
        }
    }

    /// The MCNP library id, e.g. `92235`, `6000`.
    ///
    /// Metastables add `300 + 100*state` to A. AM242 swaps the rule: MCNP
    /// names the common metastable plainly (`95242`) and offsets the ground
    /// state (`95642`). That mirrors the published MCNP ACE library
    /// convention and is deliberately not "fixed" here.
    pub fn mcnp_id(&self) -> Option<String> {
        if matches!(self.kind, NuclideKind::Lump | NuclideKind::Dummy) {
            return None;
        }
        let mut a = self.a;
        if self.z == 95 && self.a == 242 {
            if self.state != 1 {
                a += 300 + 100 * u32::from(self.state.max(1));
            }
        } else if self.state > 0 {
            a += 300 + 100 * u32::from(self.state);
        }
        Some(format!("{}{:03}", self.z, a))
    }

    /// The AAAZZZS id: decimal A, zero-padded 3-digit Z, one state digit.
    ///
    /// Natural carbon and vanadium carry hard-coded ids because their
    /// elemental forms appear in real libraries; other pseudo-species have
    /// none.
    pub fn aaazzzs_id(&self) -> Option<String> {
        match self.kind {
            NuclideKind::Isotope => Some(format!(
                "{}{:03}{}",
                self.a,
                self.z,
                if self.state > 0 { 1 } else { 0 }
            )),
            NuclideKind::Natural => match self.symbol.as_deref() {
                Some("C") => Some("120060".to_string()),
                Some("V") => Some("510230".to_string()),
                _ => None,
            },
            NuclideKind::Lump | NuclideKind::Dummy => None,
        }
    }

    /// The SERPENT-style id, e.g. `U-235`, `Te-129m`, `C-nat`.
    pub fn serpent_id(&self) -> Option<String> {
        let symbol = capitalize(self.symbol.as_deref()?);
        match self.kind {
            NuclideKind::Isotope => Some(format!(
                "{}-{}{}",
                symbol,
                self.a,
                if self.state > 0 { "m" } else { "" }
            )),
            NuclideKind::Natural => Some(format!("{symbol}-nat")),
            NuclideKind::Lump | NuclideKind::Dummy => None,
        }
    }

    /// True for the elemental pseudo-species standing in for natural
    /// isotopics.
    #[inline]
    pub fn is_natural(&self) -> bool {
        matches!(self.kind, NuclideKind::Natural)
    }

    #[inline]
    pub fn is_fissile(&self) -> bool {
        FISSILE.contains(&self.name.as_str())
    }

    #[inline]
    pub fn is_heavy_metal(&self) -> bool {
        self.z > HEAVY_METAL_CUTOFF_Z
    }

    /// First decay mode of the given kind, e.g. `"sf"`, `"alpha"`.
    pub fn decay(&self, mode: &str) -> Option<&DecayMode> {
        self.decays.iter().find(|d| d.mode == mode)
    }

    pub(crate) fn set_burn_data(
        &mut self,
        transmutations: Vec<Transmutation>,
        decays: Vec<DecayMode>,
        nu_sf: f64,
    ) {
        self.transmutations = transmutations;
        self.decays = decays;
        self.nu_sf = nu_sf;
    }
}

impl PartialEq for Nuclide {
    fn eq(&self, other: &Self) -> bool {
        self.z == other.z && self.a == other.a && self.state == other.state
    }
}

impl Eq for Nuclide {}

impl Hash for Nuclide {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.z.hash(state);
        self.a.hash(state);
        self.state.hash(state);
    }
}

impl fmt::Display for Nuclide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (Z={}, A={}, S={}, label={})",
            self.name, self.z, self.a, self.state, self.label
        )
    }
}

/// Canonical name: symbol, mass number, and an `M` suffix for metastables.
pub fn derive_name(symbol: &str, a: u32, state: u8) -> String {
    format!("{}{}{}", symbol, a, if state == 1 { "M" } else { "" })
}

/// Compact label: symbol, the leading digits of A, and one base-20 digit
/// encoding `(A mod 10) + 10*state`.
///
/// Mass numbers below 10 come out zero-padded (`H03` for tritium, not `H3`),
/// which keeps metastable tritium (`H0D`) from colliding with elemental
/// helium (`HE`). The leading-digit field is `A` modulo 10^(4 - symbol
/// length), integer-divided by 10, so any label fits in four characters.
///
/// The base-20 digit only encodes states 0 and 1; a higher excitation state
/// has no label and is a construction error.
pub fn derive_label(symbol: &str, a: u32, state: u8) -> Result<String, Error> {
    let modulus = 10u32.pow(4 - symbol.len() as u32);
    let leading = (a % modulus) / 10;
    let digit = (a % 10 + 10 * u32::from(state)) as usize;
    let last = LABEL_DIGITS.get(digit).copied().ok_or_else(|| {
        Error::construction(format!(
            "excitation state {state} of {symbol}{a} has no label digit"
        ))
    })?;
    Ok(format!("{symbol}{leading}{}", char::from(last)))
}

/// Database-column name for a canonical nuclide name, e.g. `nPu239`.
pub(crate) fn database_name_for(name: &str) -> String {
    format!("n{}", capitalize(name))
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
