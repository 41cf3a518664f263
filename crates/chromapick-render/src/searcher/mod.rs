//! Per-category searchers and their dispatch table.
//!
//! A searcher resolves which exact vertex of a recognized primitive sits
//! under the cursor. When the candidate set has one element the answer is
//! immediate; otherwise the searcher stages the candidates in a
//! [`SyntheticBuffer`], asks the renderer for one overriding draw, and
//! validates the second readback against the candidate set.
//!
//! Dispatch is a static table over {vertex addressing} x {topology
//! category}. One-index cells resolve candidates through a shared index
//! buffer, which may map several stream positions to the same vertex, so
//! they deduplicate first and can skip the second render entirely when the
//! candidates collapse to a single vertex. Zero-index candidates are
//! distinct by construction.

pub(crate) mod line;
pub(crate) mod point;
pub(crate) mod triangle;

use chromapick_core::{GeometryKind, PickError, PickQuery, PickResult, VertexAddressing, NO_HIT};
use log::{debug, warn};

use crate::bridge::PickRenderer;

/// One cell of the dispatch table: resolves the exact picked vertex among
/// the candidates, `None` when the disambiguation pass samples background.
pub(crate) type SearchFn =
    fn(&mut dyn PickRenderer, &PickQuery, &[u32]) -> PickResult<Option<u32>>;

static SEARCH_TABLE: [[SearchFn; 4]; 2] = [
    // OneIndex
    [
        point::search,
        line::one_index,
        triangle::one_index,
        triangle::one_index_quad,
    ],
    // ZeroIndex
    [
        point::search,
        line::zero_index,
        triangle::zero_index,
        triangle::zero_index_quad,
    ],
];

/// Looks up the searcher for an addressing mode and topology category.
pub(crate) fn searcher_for(addressing: VertexAddressing, kind: GeometryKind) -> SearchFn {
    let row = match addressing {
        VertexAddressing::OneIndex => 0,
        VertexAddressing::ZeroIndex => 1,
    };
    let col = match kind {
        GeometryKind::Point => 0,
        GeometryKind::Line => 1,
        GeometryKind::Triangle => 2,
        GeometryKind::Quad => 3,
    };
    SEARCH_TABLE[row][col]
}

/// Runs one disambiguation pass over the candidate set.
///
/// The synthetic buffer is released on every exit path; an ID outside the
/// candidate set is internal desynchronization and surfaces as
/// [`PickError::InconsistentPick`].
pub(crate) fn disambiguate(
    renderer: &mut dyn PickRenderer,
    query: &PickQuery,
    candidates: &[u32],
) -> PickResult<Option<u32>> {
    let buffer = renderer.create_override(candidates)?;
    let id = renderer.render_with_override(query, &buffer)?;

    if id == NO_HIT {
        debug!("disambiguation pass sampled background at ({}, {})", query.x, query.y);
        return Ok(None);
    }
    if buffer.contains(id) {
        return Ok(Some(id));
    }
    warn!(
        "disambiguation readback {id} outside candidate set {:?}",
        buffer.candidates()
    );
    Err(PickError::InconsistentPick {
        got: id,
        candidates: buffer.candidates().to_vec(),
    })
}

/// Deduplicates resolved candidates, preserving first-seen order.
pub(crate) fn dedupe(candidates: &[u32]) -> Vec<u32> {
    let mut unique = Vec::with_capacity(candidates.len());
    for &id in candidates {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synthetic::{SyntheticBuffer, COUNTER_GATE};
    use chromapick_core::DrawMode;
    use std::collections::VecDeque;

    /// Scripted renderer: each render pops the next raw ID off a queue.
    pub(crate) struct ScriptedRenderer {
        pub mode: DrawMode,
        pub addressing: VertexAddressing,
        pub stream: Vec<u32>,
        pub readbacks: VecDeque<u32>,
        pub full_renders: usize,
        pub override_renders: usize,
    }

    impl ScriptedRenderer {
        pub fn new(mode: DrawMode, addressing: VertexAddressing, stream: Vec<u32>) -> Self {
            Self {
                mode,
                addressing,
                stream,
                readbacks: VecDeque::new(),
                full_renders: 0,
                override_renders: 0,
            }
        }

        pub fn script(mut self, ids: &[u32]) -> Self {
            self.readbacks.extend(ids);
            self
        }

        fn next_readback(&mut self) -> u32 {
            self.readbacks.pop_front().unwrap_or(NO_HIT)
        }
    }

    impl PickRenderer for ScriptedRenderer {
        fn draw_mode(&self) -> DrawMode {
            self.mode
        }

        fn addressing(&self) -> VertexAddressing {
            self.addressing
        }

        fn stream_len(&self) -> u32 {
            self.stream.len() as u32
        }

        fn resolve_index(&self, pos: u32) -> PickResult<u32> {
            crate::bridge::check_stream_pos(pos, self.stream_len())?;
            Ok(match self.addressing {
                VertexAddressing::OneIndex => self.stream[pos as usize],
                VertexAddressing::ZeroIndex => self.stream[0] + pos,
            })
        }

        fn render_for_picking(&mut self, _query: &PickQuery) -> PickResult<u32> {
            self.full_renders += 1;
            Ok(self.next_readback())
        }

        fn create_override(&self, candidates: &[u32]) -> PickResult<SyntheticBuffer> {
            Ok(SyntheticBuffer::detached(candidates))
        }

        fn render_with_override(
            &mut self,
            _query: &PickQuery,
            _buffer: &SyntheticBuffer,
        ) -> PickResult<u32> {
            self.override_renders += 1;
            Ok(self.next_readback())
        }
    }

    fn query() -> PickQuery {
        PickQuery::new(64, 48, glam::Mat4::IDENTITY)
    }

    #[test]
    fn disambiguation_accepts_candidate_and_releases_buffer() {
        let _gate = COUNTER_GATE
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let before = SyntheticBuffer::live_count();

        let mut renderer = ScriptedRenderer::new(
            DrawMode::TriangleStrip,
            VertexAddressing::ZeroIndex,
            (0..10).collect(),
        )
        .script(&[5]);

        let picked = disambiguate(&mut renderer, &query(), &[4, 5, 6]).unwrap();
        assert_eq!(picked, Some(5));
        assert_eq!(renderer.override_renders, 1);
        assert_eq!(SyntheticBuffer::live_count(), before);
    }

    #[test]
    fn disambiguation_mismatch_is_typed_error_without_leak() {
        let _gate = COUNTER_GATE
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let before = SyntheticBuffer::live_count();

        let mut renderer = ScriptedRenderer::new(
            DrawMode::Triangles,
            VertexAddressing::ZeroIndex,
            (0..9).collect(),
        )
        .script(&[42]);

        let err = disambiguate(&mut renderer, &query(), &[6, 7, 8]).unwrap_err();
        match err {
            PickError::InconsistentPick { got, candidates } => {
                assert_eq!(got, 42);
                assert_eq!(candidates, vec![6, 7, 8]);
            }
            other => panic!("expected InconsistentPick, got {other:?}"),
        }
        assert_eq!(SyntheticBuffer::live_count(), before);
    }

    #[test]
    fn disambiguation_background_is_no_hit_not_error() {
        let _gate = COUNTER_GATE
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let before = SyntheticBuffer::live_count();

        let mut renderer = ScriptedRenderer::new(
            DrawMode::Triangles,
            VertexAddressing::ZeroIndex,
            (0..9).collect(),
        )
        .script(&[NO_HIT]);

        let picked = disambiguate(&mut renderer, &query(), &[0, 1, 2]).unwrap();
        assert_eq!(picked, None);
        assert_eq!(SyntheticBuffer::live_count(), before);
    }

    #[test]
    fn point_search_needs_no_second_render() {
        let mut renderer = ScriptedRenderer::new(
            DrawMode::Points,
            VertexAddressing::ZeroIndex,
            (0..4).collect(),
        );
        let picked = point::search(&mut renderer, &query(), &[3]).unwrap();
        assert_eq!(picked, Some(3));
        assert_eq!(renderer.override_renders, 0);
    }

    #[test]
    fn one_index_collapsed_candidates_skip_second_render() {
        // A degenerate strip where the index buffer repeats one vertex.
        let mut renderer = ScriptedRenderer::new(
            DrawMode::TriangleStrip,
            VertexAddressing::OneIndex,
            vec![7, 7, 7, 7],
        );
        let picked = triangle::one_index(&mut renderer, &query(), &[7, 7, 7]).unwrap();
        assert_eq!(picked, Some(7));
        assert_eq!(renderer.override_renders, 0);
    }

    #[test]
    fn dedupe_preserves_order() {
        assert_eq!(dedupe(&[5, 3, 5, 9, 3]), vec![5, 3, 9]);
        assert_eq!(dedupe(&[1, 2, 3]), vec![1, 2, 3]);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn dedupe_keeps_membership_and_uniqueness(ids in proptest::collection::vec(0u32..32, 0..12)) {
                let unique = dedupe(&ids);
                for id in &ids {
                    prop_assert!(unique.contains(id));
                }
                for (i, id) in unique.iter().enumerate() {
                    prop_assert!(!unique[i + 1..].contains(id));
                }
            }
        }
    }
}
