//! Header placed in front of every block the Cortex-M OS heap hands out.
//!
//! Callers of the C-style interface don't say how big a block was when
//! they release it, so the header records the usable size. It also
//! carries a tag that is wiped before the block goes back to the heap:
//! releasing the same block twice finds no tag and does nothing.
use core::{mem::size_of, ptr::NonNull};

pub const HEADER_SIZE: usize = 8;

const LIVE: u32 = 0xB10C_A11C;
const RETIRED: u32 = 0;

#[repr(C)]
struct Header {
    tag: u32,
    size: u32,
}

static_assertions::const_assert_eq!(size_of::<Header>(), HEADER_SIZE);

/// Full size of the raw block needed for `size` usable bytes, if the
/// header can record it.
pub fn raw_size(size: usize) -> Option<usize> {
    u32::try_from(size).ok()?;
    size.checked_add(HEADER_SIZE)
}

/// Marks `raw` as a live block of `size` usable bytes and returns the
/// usable part.
///
/// # Safety
///
/// `raw` must be null, or point to `raw_size(size)` writable bytes
/// aligned for `u32`.
pub unsafe fn stamp(raw: *mut u8, size: usize) -> Option<NonNull<u8>> {
    let raw = NonNull::new(raw)?;
    (raw.as_ptr() as *mut Header).write(Header { tag: LIVE, size: size as u32 });
    NonNull::new(raw.as_ptr().add(HEADER_SIZE))
}

/// Raw block and usable size behind `block`, or `None` if the block
/// isn't live.
///
/// # Safety
///
/// `block` must have been returned by [`stamp`], and the memory it came
/// from must still belong to the heap.
pub unsafe fn inspect(block: NonNull<u8>) -> Option<(*mut u8, usize)> {
    let raw = block.as_ptr().sub(HEADER_SIZE);
    let header = (raw as *const Header).read();
    (header.tag == LIVE).then(|| (raw, header.size as usize))
}

/// Wipes the tag of the raw block at `raw`.
///
/// # Safety
///
/// `raw` must come from [`inspect`].
pub unsafe fn retire(raw: *mut u8) { (raw as *mut u32).write(RETIRED) }
