//! A consistency-preserving registry of chemical elements and their nuclide
//! variants, used as the single source of truth for species identity,
//! physical properties, and transmutation/decay relationships.
//!
//! # Features
//!
//! - **Species model** — Immutable-after-construction `Element` and `Nuclide`
//!   value types, covering real isotopes, metastable states, natural/elemental
//!   pseudo-species, lumped fission-product groups, and dummy sinks
//! - **Multi-keyed indexing** — Unique lookup by canonical name, database
//!   name, compact label, MC2 id, MCNP id, and AAAZZZS id, with atomic
//!   conflict-rejecting insertion
//! - **Derived properties** — Element standard weights kept consistent with
//!   attached-isotope abundances by the directory, never by hand
//! - **Burn-chain closure** — Reachability over transmutation/decay edges
//!   restricted to an active-species set, with precise missing-link reporting
//!
//! # Quick start
//!
//! The main entry point is [`Directory::build`], which takes an element seed
//! and a nuclide seed and produces a fully-wired directory:
//!
//! ```
//! use nuclide_directory::{Directory, ElementRecord, IsotopeRecord, AbundanceRecord, NuclideSeed};
//!
//! let elements = vec![ElementRecord {
//!     z: 6,
//!     symbol: "C".to_string(),
//!     name: "carbon".to_string(),
//! }];
//! let seed = NuclideSeed {
//!     isotopes: vec![
//!         IsotopeRecord { z: 6, a: 12, mass: 12.0, uncertainty: None },
//!         IsotopeRecord { z: 6, a: 13, mass: 13.0, uncertainty: None },
//!     ],
//!     abundances: vec![
//!         AbundanceRecord { z: 6, a: 12, symbol: "C".to_string(), percent: 98.93 },
//!         AbundanceRecord { z: 6, a: 13, symbol: "C".to_string(), percent: 1.07 },
//!     ],
//!     mnemonics: vec![],
//! };
//!
//! let directory = Directory::build(&elements, &seed)?;
//!
//! // every lookup namespace resolves to the same nuclide
//! let c12 = directory.nuclides().by_name("C12")?;
//! assert_eq!(directory.nuclides().by_label("C12")?, c12);
//! assert_eq!(directory.nuclides().by_mcnp_id("6012")?, c12);
//!
//! // the element's standard weight is derived from its isotopes
//! let carbon = directory.elements().by_symbol("C")?;
//! assert!((carbon.standard_weight().unwrap() - 12.0107).abs() < 1e-4);
//! # Ok::<(), nuclide_directory::Error>(())
//! ```
//!
//! # Module organization
//!
//! - [`Directory`] — Composition root; builds the registries, wires the
//!   element/nuclide relationship, imposes the burn chain, and runs the
//!   reachability closure
//! - [`ElementRegistry`] / [`NuclideRegistry`] — Multi-keyed ownership of the
//!   species arenas
//! - [`Nuclide`] / [`Element`] — The species value types and their id
//!   derivations
//! - [`BurnChainData`] — Externally-parsed burn-chain records
//! - [`periodic_table`] — Built-in element seed
//!
//! # Concurrency
//!
//! A directory is built by a single writer and read by many: construction and
//! [`Directory::impose_burn_chain`] take `&mut self`, everything after takes
//! `&self` and allocates no shared state. [`set_current`]/[`current`] expose
//! the most-recently-built directory as a process-wide convenience cache; it
//! is never authoritative.

mod chain;
mod directory;
mod error;
mod model;
mod seed;

pub use directory::{current, set_current, Directory, ElementRegistry, NuclideRegistry};
pub use error::Error;
pub use model::element::Element;
pub use model::nuclide::{derive_label, derive_name, Nuclide, NuclideKind, HEAVY_METAL_CUTOFF_Z};
pub use model::transmutation::{
    BurnChainData, BurnRecord, BurnTag, DecayMode, Transmutation,
};
pub use seed::{
    periodic_table, AbundanceRecord, ElementRecord, IsotopeRecord, MnemonicRecord, NuclideSeed,
};
