use crate::grid::*;
use crate::util::*;
use std::marker::PhantomData;
use std::ops::Range;
use std::sync::atomic::{AtomicUsize, Ordering};
use sync_ptr::SyncMutPtr;

/// Both buffers of a `FieldPair`, shared by the threads of one solve.
///
/// Threads read the whole current buffer and write disjoint layer
/// ranges of the next one. Only the coordinator swaps, and only while
/// every other thread is parked in the iteration handshake.
pub struct SharedFields<'a, F> {
    buffers: [SyncMutPtr<F>; 2],
    len: usize,
    layer_len: usize,
    current: AtomicUsize,
    _borrow: PhantomData<&'a mut [F]>,
}

impl<'a, F: FloatTrait> SharedFields<'a, F> {
    pub fn new(fields: &'a mut FieldPair<F>) -> Self {
        let n = fields.n();
        let current = fields.current_index();
        let [a, b] = fields.buffers_mut();
        debug_assert_eq!(a.len(), b.len());
        let len = a.len();
        let buffers = unsafe {
            [SyncMutPtr::new(a.as_mut_ptr()), SyncMutPtr::new(b.as_mut_ptr())]
        };
        SharedFields {
            buffers,
            len,
            layer_len: n * n,
            current: AtomicUsize::new(current),
            _borrow: PhantomData,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current.load(Ordering::Acquire)
    }

    /// The whole current buffer.
    ///
    /// # Safety
    /// No thread may swap while the returned slice is alive.
    pub unsafe fn current(&self) -> &[F] {
        let ptr = self.buffers[self.current_index()].inner();
        std::slice::from_raw_parts(ptr as *const F, self.len)
    }

    /// Layers `zs` of the next buffer.
    ///
    /// # Safety
    /// Ranges handed out within one iteration must not overlap,
    /// and no thread may swap while the returned slice is alive.
    #[allow(clippy::mut_from_ref)]
    pub unsafe fn next_layers(&self, zs: Range<usize>) -> &mut [F] {
        let offset = zs.start * self.layer_len;
        let len = zs.len() * self.layer_len;
        debug_assert!(offset + len <= self.len);
        let ptr = self.buffers[1 - self.current_index()].inner();
        std::slice::from_raw_parts_mut(ptr.add(offset), len)
    }

    /// Exchange the roles of the two buffers.
    /// Coordinator only, while every worker is parked.
    pub fn swap(&self) {
        self.current.fetch_xor(1, Ordering::AcqRel);
    }
}
