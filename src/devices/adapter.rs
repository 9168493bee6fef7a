//! Reentrant runtime adapter.
//!
//! Presents the standard dynamic-memory operations on top of an
//! [`OsHeap`], so the language runtime and any linked C code share the
//! one heap the OS owns instead of fighting over the same RAM with a
//! second allocator.
//!
//! The adapter holds nothing but the heap handle. It filters requests
//! the OS heap can't be trusted with (null handles, zero sizes,
//! overflowing size products, over-aligned layouts) and forwards
//! everything else unchanged. Whatever reentrancy the heap offers is
//! all the adapter offers.
use crate::{error::Error, hal::heap::OsHeap};
use core::{
    alloc::{GlobalAlloc, Layout},
    ptr::{null_mut, NonNull},
};

pub struct RuntimeAdapter<H: OsHeap> {
    heap: H,
}

impl<H: OsHeap> RuntimeAdapter<H> {
    pub const fn new(heap: H) -> Self { Self { heap } }

    pub fn heap(&self) -> &H { &self.heap }

    pub fn try_allocate(&self, size: usize) -> Result<NonNull<u8>, Error> {
        if size == 0 {
            return Err(Error::ZeroSize);
        }
        self.heap.allocate(size).ok_or(Error::OutOfMemory)
    }

    /// Resizes `block`. A null `block` behaves as a fresh allocation;
    /// on any error the original block is left alone.
    ///
    /// # Safety
    ///
    /// `block`, if non-null, must come from this adapter and not have
    /// been released.
    pub unsafe fn try_reallocate(&self, block: *mut u8, new_size: usize) -> Result<NonNull<u8>, Error> {
        match NonNull::new(block) {
            None => self.try_allocate(new_size),
            Some(_) if new_size == 0 => Err(Error::ZeroSize),
            Some(block) => self.heap.reallocate(block, new_size).ok_or(Error::OutOfMemory),
        }
    }

    pub fn try_allocate_zeroed(&self, count: usize, size: usize) -> Result<NonNull<u8>, Error> {
        let total = count.checked_mul(size).ok_or(Error::SizeOverflow)?;
        if total == 0 {
            return Err(Error::ZeroSize);
        }
        self.heap.allocate_zeroed(total).ok_or(Error::OutOfMemory)
    }

    /// Block of at least `size` bytes, or null.
    pub fn allocate(&self, size: usize) -> *mut u8 {
        self.try_allocate(size).map_or(null_mut(), NonNull::as_ptr)
    }

    /// Returns `block` to the heap. Null is ignored.
    ///
    /// # Safety
    ///
    /// `block`, if non-null, must come from this adapter and not have
    /// been released.
    pub unsafe fn release(&self, block: *mut u8) {
        if let Some(block) = NonNull::new(block) {
            self.heap.release(block);
        }
    }

    /// Resized block, or null. On null, `block` is still valid and
    /// unchanged; that includes a `new_size` of zero, which is refused.
    ///
    /// # Safety
    ///
    /// `block`, if non-null, must come from this adapter and not have
    /// been released.
    pub unsafe fn reallocate(&self, block: *mut u8, new_size: usize) -> *mut u8 {
        self.try_reallocate(block, new_size).map_or(null_mut(), NonNull::as_ptr)
    }

    /// Zeroed block of `count * size` bytes, or null, including when
    /// the product overflows.
    pub fn allocate_zeroed(&self, count: usize, size: usize) -> *mut u8 {
        self.try_allocate_zeroed(count, size).map_or(null_mut(), NonNull::as_ptr)
    }

    /// Refuses layouts the OS heap can't align.
    pub fn check_layout(layout: &Layout) -> Result<(), Error> {
        if layout.align() > H::ALIGNMENT {
            return Err(Error::UnsupportedAlignment);
        }
        Ok(())
    }
}

unsafe impl<H: OsHeap> GlobalAlloc for RuntimeAdapter<H> {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        Self::check_layout(&layout)
            .and_then(|_| self.try_allocate(layout.size()))
            .map_or(null_mut(), NonNull::as_ptr)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, _layout: Layout) { self.release(ptr) }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        Self::check_layout(&layout)
            .and_then(|_| self.try_allocate_zeroed(1, layout.size()))
            .map_or(null_mut(), NonNull::as_ptr)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        Self::check_layout(&layout)
            .and_then(|_| self.try_reallocate(ptr, new_size))
            .map_or(null_mut(), NonNull::as_ptr)
    }
}
