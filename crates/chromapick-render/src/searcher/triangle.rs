//! Triangle and quad searchers.
//!
//! Triangle-family candidates come three at a time (strips, fans and
//! adjacency variants share vertices with neighboring primitives); quads
//! carry four. Either way the exact vertex is resolved by re-rendering just
//! the candidates as ID-tagged points.

use chromapick_core::{PickQuery, PickResult};

use crate::bridge::PickRenderer;

use super::{dedupe, disambiguate};

/// Zero-index triangle search.
pub(crate) fn zero_index(
    renderer: &mut dyn PickRenderer,
    query: &PickQuery,
    candidates: &[u32],
) -> PickResult<Option<u32>> {
    debug_assert_eq!(candidates.len(), 3);
    disambiguate(renderer, query, candidates)
}

/// One-index triangle search, with degenerate-primitive short-circuit.
pub(crate) fn one_index(
    renderer: &mut dyn PickRenderer,
    query: &PickQuery,
    candidates: &[u32],
) -> PickResult<Option<u32>> {
    debug_assert_eq!(candidates.len(), 3);
    let unique = dedupe(candidates);
    if unique.len() == 1 {
        return Ok(unique.first().copied());
    }
    disambiguate(renderer, query, &unique)
}

/// Zero-index quad search.
pub(crate) fn zero_index_quad(
    renderer: &mut dyn PickRenderer,
    query: &PickQuery,
    candidates: &[u32],
) -> PickResult<Option<u32>> {
    debug_assert_eq!(candidates.len(), 4);
    disambiguate(renderer, query, candidates)
}

/// One-index quad search.
pub(crate) fn one_index_quad(
    renderer: &mut dyn PickRenderer,
    query: &PickQuery,
    candidates: &[u32],
) -> PickResult<Option<u32>> {
    debug_assert_eq!(candidates.len(), 4);
    let unique = dedupe(candidates);
    if unique.len() == 1 {
        return Ok(unique.first().copied());
    }
    disambiguate(renderer, query, &unique)
}
