//! Point searcher.

use chromapick_core::{PickQuery, PickResult};

use crate::bridge::PickRenderer;

/// A point primitive has a single candidate; recognition alone resolves it
/// and no second render is issued. Shared by both addressing modes since no
/// buffer construction is involved.
pub(crate) fn search(
    _renderer: &mut dyn PickRenderer,
    _query: &PickQuery,
    candidates: &[u32],
) -> PickResult<Option<u32>> {
    debug_assert_eq!(candidates.len(), 1);
    Ok(candidates.first().copied())
}
