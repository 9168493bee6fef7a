use crate::hal::heap::OsHeap;
use std::{
    alloc::{self, Layout},
    cell::{Cell, RefCell},
    collections::HashMap,
    ptr::NonNull,
};

/// Bounded heap backed by the host allocator.
///
/// Keeps a byte budget so exhaustion can be provoked, and tracks every
/// live block so releasing something twice, or something it never
/// handed out, is refused instead of corrupting the host heap.
#[derive(Debug)]
pub struct FakeHeap {
    capacity: usize,
    used: Cell<usize>,
    live: RefCell<HashMap<usize, usize>>,
    calls: Cell<usize>,
    refused_releases: Cell<usize>,
}

impl FakeHeap {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            used: Cell::new(0),
            live: RefCell::new(HashMap::new()),
            calls: Cell::new(0),
            refused_releases: Cell::new(0),
        }
    }

    /// Bytes currently handed out.
    pub fn used(&self) -> usize { self.used.get() }
    pub fn live_blocks(&self) -> usize { self.live.borrow().len() }
    /// Number of primitive calls that reached this heap.
    pub fn calls(&self) -> usize { self.calls.get() }
    pub fn refused_releases(&self) -> usize { self.refused_releases.get() }
    /// Size recorded for a live block.
    pub fn size_of(&self, block: NonNull<u8>) -> Option<usize> {
        self.live.borrow().get(&(block.as_ptr() as usize)).copied()
    }

    fn layout(size: usize) -> Layout {
        // Sizes are bounded by `capacity`, which always forms a valid layout.
        Layout::from_size_align(size.max(1), Self::ALIGNMENT).unwrap()
    }

    fn fits(&self, extra: usize) -> bool {
        self.used.get().checked_add(extra).map_or(false, |total| total <= self.capacity)
    }

    fn track(&self, raw: *mut u8, size: usize) -> Option<NonNull<u8>> {
        let block = NonNull::new(raw)?;
        self.live.borrow_mut().insert(raw as usize, size);
        self.used.set(self.used.get() + size);
        Some(block)
    }

    fn take(&self, size: usize, zeroed: bool) -> Option<NonNull<u8>> {
        self.calls.set(self.calls.get() + 1);
        if !self.fits(size) {
            return None;
        }
        let layout = Self::layout(size);
        let raw = unsafe { if zeroed { alloc::alloc_zeroed(layout) } else { alloc::alloc(layout) } };
        self.track(raw, size)
    }
}

impl OsHeap for FakeHeap {
    const ALIGNMENT: usize = 8;
    const INTERRUPT_SAFE: bool = false;

    fn allocate(&self, size: usize) -> Option<NonNull<u8>> { self.take(size, false) }

    unsafe fn release(&self, block: NonNull<u8>) {
        self.calls.set(self.calls.get() + 1);
        let removed = self.live.borrow_mut().remove(&(block.as_ptr() as usize));
        match removed {
            Some(size) => {
                self.used.set(self.used.get() - size);
                alloc::dealloc(block.as_ptr(), Self::layout(size));
            }
            None => self.refused_releases.set(self.refused_releases.get() + 1),
        }
    }

    unsafe fn reallocate(&self, block: NonNull<u8>, new_size: usize) -> Option<NonNull<u8>> {
        self.calls.set(self.calls.get() + 1);
        let old_size = self.size_of(block)?;
        if new_size > old_size && !self.fits(new_size - old_size) {
            return None;
        }
        let raw = alloc::realloc(block.as_ptr(), Self::layout(old_size), new_size.max(1));
        let moved = NonNull::new(raw)?;
        let mut live = self.live.borrow_mut();
        live.remove(&(block.as_ptr() as usize));
        live.insert(raw as usize, new_size);
        self.used.set(self.used.get() - old_size + new_size);
        Some(moved)
    }

    fn allocate_zeroed(&self, size: usize) -> Option<NonNull<u8>> { self.take(size, true) }
}

impl Drop for FakeHeap {
    fn drop(&mut self) {
        for (address, size) in self.live.borrow_mut().drain() {
            unsafe { alloc::dealloc(address as *mut u8, Self::layout(size)) };
        }
    }
}
