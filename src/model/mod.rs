//! Core value types of the nuclide directory.
//!
//! - [`element`] – Chemical elements with their attached-isotope sets and
//!   derived standard weights.
//! - [`nuclide`] – The nuclide variant family (isotopes, natural and lumped
//!   pseudo-species, dummy sinks) and all external-id derivations.
//! - [`transmutation`] – Burn-chain interaction edges and the raw records
//!   they are classified from.
//!
//! Entities here are immutable after directory construction; the only
//! component allowed to wire element/nuclide relationships or overwrite
//! derived properties is [`crate::Directory`].

pub mod element;
pub mod nuclide;
pub mod transmutation;
