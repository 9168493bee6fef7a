//! Cortex-M bindings for the HAL interfaces.
use super::header::{self, HEADER_SIZE};
use crate::hal::{heap::OsHeap, idle::Park, interrupts::InterruptControl};
use alloc_cortex_m::CortexMHeap;
use core::{
    alloc::{GlobalAlloc, Layout},
    ptr::NonNull,
};
use cortex_m::{asm, interrupt, register::primask};

/// Core interrupt mask (PRIMASK).
pub struct CortexMInterrupts;

impl InterruptControl for CortexMInterrupts {
    fn disable(&mut self) { interrupt::disable() }
    fn enabled(&self) -> bool { primask::read().is_active() }
}

/// Sleeps until reset. With PRIMASK set a pending interrupt still
/// wakes the core from `wfi`, so the sleep is looped.
pub struct WaitForInterrupt;

impl Park for WaitForInterrupt {
    fn park(&mut self) -> ! {
        loop {
            asm::wfi();
        }
    }
}

/// OS heap over a linked list allocator. Every primitive runs inside a
/// critical section, so it is safe to call from interrupt handlers.
///
/// Each block is preceded by a [`header`](super::header) recording its
/// size; blocks whose header isn't live are ignored on release and
/// refused on reallocation.
pub struct CortexMOsHeap {
    heap: CortexMHeap,
}

impl CortexMOsHeap {
    pub const fn empty() -> Self { Self { heap: CortexMHeap::empty() } }

    /// Hands the heap region to the allocator.
    ///
    /// # Safety
    ///
    /// Must be called once, before any allocation, with a region that
    /// nothing else uses for the rest of the execution.
    pub unsafe fn init(&self, start: usize, size: usize) { self.heap.init(start, size) }

    /// Bytes in use, headers included.
    pub fn used(&self) -> usize { self.heap.used() }
    pub fn free(&self) -> usize { self.heap.free() }

    fn layout(size: usize) -> Option<Layout> {
        Layout::from_size_align(header::raw_size(size)?, Self::ALIGNMENT).ok()
    }

    unsafe fn raw_layout(size: usize) -> Layout {
        Layout::from_size_align_unchecked(size + HEADER_SIZE, Self::ALIGNMENT)
    }
}

impl OsHeap for CortexMOsHeap {
    const ALIGNMENT: usize = 8;
    const INTERRUPT_SAFE: bool = true;

    fn allocate(&self, size: usize) -> Option<NonNull<u8>> {
        let layout = Self::layout(size)?;
        unsafe { header::stamp(self.heap.alloc(layout), size) }
    }

    unsafe fn release(&self, block: NonNull<u8>) {
        if let Some((raw, size)) = header::inspect(block) {
            header::retire(raw);
            self.heap.dealloc(raw, Self::raw_layout(size));
        }
    }

    unsafe fn reallocate(&self, block: NonNull<u8>, new_size: usize) -> Option<NonNull<u8>> {
        let new_layout = Self::layout(new_size)?;
        let (raw, size) = header::inspect(block)?;
        // The old location must not look live once the heap has moved it.
        header::retire(raw);
        let moved = self.heap.realloc(raw, Self::raw_layout(size), new_layout.size());
        if moved.is_null() {
            header::stamp(raw, size);
            return None;
        }
        header::stamp(moved, new_size)
    }

    fn allocate_zeroed(&self, size: usize) -> Option<NonNull<u8>> {
        let layout = Self::layout(size)?;
        unsafe { header::stamp(self.heap.alloc_zeroed(layout), size) }
    }
}
