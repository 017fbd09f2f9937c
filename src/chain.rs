//! Burn-chain reachability closure.
//!
//! Marches through the transmutation/decay graph from a starting composition
//! and pulls every reachable active nuclide into the composition, so a
//! depletion solver can restrict itself to the smallest set of species that
//! matters. An interaction whose products are all outside the active set is
//! a hard failure: an incomplete burn chain silently produces wrong depletion
//! results, so the caller gets every unresolvable product group back to fix
//! the active set with.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::directory::Directory;
use crate::error::Error;

/// Extends `composition` in place with all active nuclides reachable from
/// its keys.
///
/// The worklist is recomputed as composition-keys-minus-visited after every
/// pop, since resolving products grows the composition. Inactive keys are
/// marked visited without expanding their edges. Terminates because the
/// species universe is finite and visited nuclides are never re-expanded.
pub(crate) fn grow_reachable(
    directory: &Directory,
    composition: &mut HashMap<String, f64>,
    active: &HashSet<String>,
) -> Result<(), Error> {
    let mut visited: HashSet<String> = HashSet::new();
    let mut missing: BTreeSet<Vec<String>> = BTreeSet::new();

    while let Some(name) = composition
        .keys()
        .find(|key| !visited.contains(*key))
        .cloned()
    {
        visited.insert(name.clone());
        if !active.contains(&name) {
            continue;
        }
        let nuclide = directory.nuclides().by_name(&name)?;
        let interactions = nuclide
            .transmutations
            .iter()
            .map(|t| (&t.products, t.preferred_product(active)))
            .chain(
                nuclide
                    .decays
                    .iter()
                    .map(|d| (&d.products, d.preferred_product(active))),
            );
        let mut resolved: Vec<String> = Vec::new();
        for (products, preferred) in interactions {
            match preferred {
                Some(product) => resolved.push(product.to_string()),
                None => {
                    missing.insert(products.clone());
                }
            }
        }
        for product in resolved {
            composition.entry(product).or_insert(0.0);
        }
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::missing_active_nuclides(missing.into_iter().collect()))
    }
}
