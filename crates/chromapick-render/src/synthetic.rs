//! Synthetic disambiguation buffers.
//!
//! A disambiguation pass re-renders only the candidate vertices of one
//! primitive. The candidates are staged in a small storage buffer whose slot
//! *values* are the true vertex IDs, distinct from the slot positions, so
//! the readback maps straight back to an original vertex. The buffer lives
//! for exactly one searcher invocation; dropping it releases the GPU
//! allocation, and a process-wide live counter makes the no-leak property
//! observable from tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::buffer::create_storage_buffer;

static LIVE_BUFFERS: AtomicUsize = AtomicUsize::new(0);

/// Serializes tests that assert on [`SyntheticBuffer::live_count`]; the
/// counter is process-wide and cargo runs tests in parallel.
#[cfg(test)]
pub(crate) static COUNTER_GATE: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// A short-lived buffer of candidate vertex IDs for one disambiguation pass.
///
/// Owned exclusively by the searcher that created it; release happens via
/// `Drop` on every exit path, including the no-match and inconsistent-pick
/// paths.
pub struct SyntheticBuffer {
    candidates: Vec<u32>,
    gpu: Option<wgpu::Buffer>,
}

impl SyntheticBuffer {
    /// Stages the candidate IDs into a GPU storage buffer.
    pub fn new(device: &wgpu::Device, candidates: &[u32]) -> Self {
        let gpu = create_storage_buffer(device, candidates, Some("Pick Candidate Buffer"));
        LIVE_BUFFERS.fetch_add(1, Ordering::SeqCst);
        Self {
            candidates: candidates.to_vec(),
            gpu: Some(gpu),
        }
    }

    /// Creates a buffer with no GPU backing, for renderers that stage
    /// candidates outside wgpu (software fallbacks, tests).
    pub fn detached(candidates: &[u32]) -> Self {
        LIVE_BUFFERS.fetch_add(1, Ordering::SeqCst);
        Self {
            candidates: candidates.to_vec(),
            gpu: None,
        }
    }

    /// The candidate vertex IDs, in slot order.
    pub fn candidates(&self) -> &[u32] {
        &self.candidates
    }

    /// Whether a decoded readback ID belongs to the candidate set.
    pub fn contains(&self, id: u32) -> bool {
        self.candidates.contains(&id)
    }

    /// The backing GPU buffer, when staged through [`SyntheticBuffer::new`].
    pub fn gpu_buffer(&self) -> Option<&wgpu::Buffer> {
        self.gpu.as_ref()
    }

    /// Number of synthetic buffers currently alive in the process.
    ///
    /// Stays flat across pick queries; a growing count means a searcher
    /// leaked an exit path.
    pub fn live_count() -> usize {
        LIVE_BUFFERS.load(Ordering::SeqCst)
    }
}

impl Drop for SyntheticBuffer {
    fn drop(&mut self) {
        LIVE_BUFFERS.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_count_tracks_creation_and_drop() {
        let _gate = COUNTER_GATE
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let before = SyntheticBuffer::live_count();
        let buf = SyntheticBuffer::detached(&[10, 12, 14]);
        assert_eq!(SyntheticBuffer::live_count(), before + 1);
        assert_eq!(buf.candidates(), &[10, 12, 14]);
        assert!(buf.contains(12));
        assert!(!buf.contains(11));
        drop(buf);
        assert_eq!(SyntheticBuffer::live_count(), before);
    }
}
