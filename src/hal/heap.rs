//! OS heap interface.
//!
//! The heap behind this trait owns a single, statically provisioned
//! region and all of the bookkeeping for it. Nothing in mortar looks
//! inside it: the runtime adapter only forwards requests and results.
use core::ptr::NonNull;

/// The four primitives an OS allocator exposes over its heap region.
///
/// Implementors decide their own locking. `INTERRUPT_SAFE` must state
/// truthfully whether every primitive may be called from an interrupt
/// handler; callers get no stronger guarantee than that.
pub trait OsHeap {
    /// Minimum alignment of every block handed out.
    const ALIGNMENT: usize;
    /// Whether the primitives may be called from interrupt context.
    const INTERRUPT_SAFE: bool;

    /// Hands out a block of at least `size` bytes, or `None` if the
    /// region can't satisfy the request.
    fn allocate(&self, size: usize) -> Option<NonNull<u8>>;

    /// Returns a block to the region.
    ///
    /// # Safety
    ///
    /// `block` must have been handed out by this heap and not released since.
    unsafe fn release(&self, block: NonNull<u8>);

    /// Resizes `block` to `new_size` bytes, preserving the bytes both
    /// sizes have in common. On `None`, `block` is still owned by the
    /// caller and its contents are untouched.
    ///
    /// # Safety
    ///
    /// `block` must have been handed out by this heap and not released since.
    unsafe fn reallocate(&self, block: NonNull<u8>, new_size: usize) -> Option<NonNull<u8>>;

    /// Like [`allocate`](OsHeap::allocate), with every byte set to zero.
    fn allocate_zeroed(&self, size: usize) -> Option<NonNull<u8>>;
}

impl<H: OsHeap> OsHeap for &H {
    const ALIGNMENT: usize = H::ALIGNMENT;
    const INTERRUPT_SAFE: bool = H::INTERRUPT_SAFE;

    fn allocate(&self, size: usize) -> Option<NonNull<u8>> { (**self).allocate(size) }

    unsafe fn release(&self, block: NonNull<u8>) { (**self).release(block) }

    unsafe fn reallocate(&self, block: NonNull<u8>, new_size: usize) -> Option<NonNull<u8>> {
        (**self).reallocate(block, new_size)
    }

    fn allocate_zeroed(&self, size: usize) -> Option<NonNull<u8>> { (**self).allocate_zeroed(size) }
}
