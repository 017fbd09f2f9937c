//! Raw seed records consumed by [`Directory::build`](crate::Directory::build),
//! plus the built-in periodic-table element seed.
//!
//! Parsing the mass, abundance, and mnemonic source files is an external
//! collaborator's job; this module only defines the already-parsed record
//! shapes those collaborators produce.

use serde::{Deserialize, Serialize};

/// One element of the periodic table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementRecord {
    pub z: u32,
    pub symbol: String,
    pub name: String,
}

/// One measured isotope mass, ground state implied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsotopeRecord {
    pub z: u32,
    pub a: u32,
    /// Measured atomic mass.
    pub mass: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uncertainty: Option<f64>,
}

/// Natural abundance of one isotope, as a percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbundanceRecord {
    pub z: u32,
    pub a: u32,
    pub symbol: String,
    pub percent: f64,
}

/// One entry of the external mnemonic table.
///
/// Mnemonic records backfill MC2-v2 ids on existing ground-state isotopes and
/// create the species the mass file cannot know about: metastables, natural
/// pseudo-nuclides (Z > 0, A = 0), lumped fission products and dummy sinks
/// (Z = 0, with an explicit weight).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MnemonicRecord {
    pub name: String,
    pub z: u32,
    pub a: u32,
    #[serde(default)]
    pub state: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// The full nuclide seed: everything the directory needs besides elements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NuclideSeed {
    pub isotopes: Vec<IsotopeRecord>,
    pub abundances: Vec<AbundanceRecord>,
    pub mnemonics: Vec<MnemonicRecord>,
}

/// The standard 118-element periodic-table seed.
///
/// Symbols are upper-cased and names lower-cased, matching the conventions
/// the canonical-name and database-name derivations expect.
pub fn periodic_table() -> Vec<ElementRecord> {
    PERIODIC_TABLE
        .iter()
        .map(|&(z, symbol, name)| ElementRecord {
            z,
            symbol: symbol.to_string(),
            name: name.to_string(),
        })
        .collect()
}

const PERIODIC_TABLE: &[(u32, &str, &str)] = &[
    (1, "H", "hydrogen"),
    (2, "HE", "helium"),
    (3, "LI", "lithium"),
    (4, "BE", "beryllium"),
    (5, "B", "boron"),
    (6, "C", "carbon"),
    (7, "N", "nitrogen"),
    (8, "O", "oxygen"),
    (9, "F", "fluorine"),
    (10, "NE", "neon"),
    (11, "NA", "sodium"),
    (12, "MG", "magnesium"),
    (13, "AL", "aluminum"),
    (14, "SI", "silicon"),
    (15, "P", "phosphorus"),
    (16, "S", "sulfur"),
    (17, "CL", "chlorine"),
    (18, "AR", "argon"),
    (19, "K", "potassium"),
    (20, "CA", "calcium"),
    (21, "SC", "scandium"),
    (22, "TI", "titanium"),
    (23, "V", "vanadium"),
    (24, "CR", "chromium"),
    (25, "MN", "manganese"),
    (26, "FE", "iron"),
    (27, "CO", "cobalt"),
    (28, "NI", "nickel"),
    (29, "CU", "copper"),
    (30, "ZN", "zinc"),
    (31, "GA", "gallium"),
    (32, "GE", "germanium"),
    (33, "AS", "arsenic"),
    (34, "SE", "selenium"),
    (35, "BR", "bromine"),
    (36, "KR", "krypton"),
    (37, "RB", "rubidium"),
    (38, "SR", "strontium"),
    (39, "Y", "yttrium"),
    (40, "ZR", "zirconium"),
    (41, "NB", "niobium"),
    (42, "MO", "molybdenum"),
    (43, "TC", "technetium"),
    (44, "RU", "ruthenium"),
    (45, "RH", "rhodium"),
    (46, "PD", "palladium"),
    (47, "AG", "silver"),
    (48, "CD", "cadmium"),
    (49, "IN", "indium"),
    (50, "SN", "tin"),
    (51, "SB", "antimony"),
    (52, "TE", "tellurium"),
    (53, "I", "iodine"),
    (54, "XE", "xenon"),
    (55, "CS", "cesium"),
    (56, "BA", "barium"),
    (57, "LA", "lanthanum"),
    (58, "CE", "cerium"),
    (59, "PR", "praseodymium"),
    (60, "ND", "neodymium"),
    (61, "PM", "promethium"),
    (62, "SM", "samarium"),
    (63, "EU", "europium"),
    (64, "GD", "gadolinium"),
    (65, "TB", "terbium"),
    (66, "DY", "dysprosium"),
    (67, "HO", "holmium"),
    (68, "ER", "erbium"),
    (69, "TM", "thulium"),
    (70, "YB", "ytterbium"),
    (71, "LU", "lutetium"),
    (72, "HF", "hafnium"),
    (73, "TA", "tantalum"),
    (74, "W", "tungsten"),
    (75, "RE", "rhenium"),
    (76, "OS", "osmium"),
    (77, "IR", "iridium"),
    (78, "PT", "platinum"),
    (79, "AU", "gold"),
    (80, "HG", "mercury"),
    (81, "TL", "thallium"),
    (82, "PB", "lead"),
    (83, "BI", "bismuth"),
    (84, "PO", "polonium"),
    (85, "AT", "astatine"),
    (86, "RN", "radon"),
    (87, "FR", "francium"),
    (88, "RA", "radium"),
    (89, "AC", "actinium"),
    (90, "TH", "thorium"),
    (91, "PA", "protactinium"),
    (92, "U", "uranium"),
    (93, "NP", "neptunium"),
    (94, "PU", "plutonium"),
    (95, "AM", "americium"),
    (96, "CM", "curium"),
    (97, "BK", "berkelium"),
    (98, "CF", "californium"),
    (99, "ES", "einsteinium"),
    (100, "FM", "fermium"),
    (101, "MD", "mendelevium"),
    (102, "NO", "nobelium"),
    (103, "LR", "lawrencium"),
    (104, "RF", "rutherfordium"),
    (105, "DB", "dubnium"),
    (106, "SG", "seaborgium"),
    (107, "BH", "bohrium"),
    (108, "HS", "hassium"),
    (109, "MT", "meitnerium"),
    (110, "DS", "darmstadtium"),
    (111, "RG", "roentgenium"),
    (112, "CN", "copernicium"),
    (113, "NH", "nihonium"),
    (114, "FL", "flerovium"),
    (115, "MC", "moscovium"),
    (116, "LV", "livermorium"),
    (117, "TS", "tennessine"),
    (118, "OG", "oganesson"),
];
