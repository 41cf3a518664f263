//! Line searchers.
//!
//! Line-family primitives carry two visible candidates. Strip, loop and
//! adjacency modes share endpoints with their neighbors, so the exact
//! vertex always needs a disambiguation pass.

use chromapick_core::{PickQuery, PickResult};

use crate::bridge::PickRenderer;

use super::{dedupe, disambiguate};

/// Zero-index line search: candidates are distinct range offsets.
pub(crate) fn zero_index(
    renderer: &mut dyn PickRenderer,
    query: &PickQuery,
    candidates: &[u32],
) -> PickResult<Option<u32>> {
    debug_assert_eq!(candidates.len(), 2);
    disambiguate(renderer, query, candidates)
}

/// One-index line search: the shared index buffer may map both endpoints to
/// one vertex (degenerate segment), in which case no second render is
/// needed.
pub(crate) fn one_index(
    renderer: &mut dyn PickRenderer,
    query: &PickQuery,
    candidates: &[u32],
) -> PickResult<Option<u32>> {
    debug_assert_eq!(candidates.len(), 2);
    let unique = dedupe(candidates);
    if unique.len() == 1 {
        return Ok(unique.first().copied());
    }
    disambiguate(renderer, query, &unique)
}
