//! Binding mortar into a firmware image.
//!
//! Nothing is interposed behind the caller's back: the image states at
//! its root which OS heap backs the Rust allocator, and (optionally)
//! which adapter and trampoline the C entry points lead to.
//!
//! # Example
//!
//! ```ignore
//! mortar_lib::bind_runtime!(ADAPTER: CortexMOsHeap = CortexMOsHeap::empty());
//! mortar_lib::export_c_runtime!(ADAPTER);
//! mortar_lib::export_fault_entry!(FaultTrampoline::new(
//!     CortexMInterrupts,
//!     DefmtLogger,
//!     WaitForInterrupt,
//!     &SYSTEM_STATE,
//! ));
//! ```
use core::ffi::{c_char, CStr};

/// Module name logged when the kernel hands over nothing readable.
pub const UNKNOWN_MODULE: &str = "?";

/// Declares the global allocator: a runtime adapter over an OS heap.
#[macro_export]
macro_rules! bind_runtime {
    ($name:ident: $heap:ty = $init:expr) => {
        #[global_allocator]
        static $name: $crate::devices::adapter::RuntimeAdapter<$heap> =
            $crate::devices::adapter::RuntimeAdapter::new($init);
    };
}

/// Exports the C allocation entry points, plain and reentrant, so C code
/// linked into the image allocates from the same heap as Rust. The
/// reentrancy argument of the `_r` variants is ignored: the adapter keeps
/// no per-caller state.
#[macro_export]
macro_rules! export_c_runtime {
    ($adapter:path) => {
        #[no_mangle]
        pub extern "C" fn malloc(size: usize) -> *mut u8 { $adapter.allocate(size) }

        #[no_mangle]
        pub unsafe extern "C" fn free(block: *mut u8) { $adapter.release(block) }

        #[no_mangle]
        pub unsafe extern "C" fn realloc(block: *mut u8, size: usize) -> *mut u8 {
            $adapter.reallocate(block, size)
        }

        #[no_mangle]
        pub extern "C" fn calloc(count: usize, size: usize) -> *mut u8 {
            $adapter.allocate_zeroed(count, size)
        }

        #[no_mangle]
        pub extern "C" fn _malloc_r(_reent: *mut core::ffi::c_void, size: usize) -> *mut u8 {
            $adapter.allocate(size)
        }

        #[no_mangle]
        pub unsafe extern "C" fn _free_r(_reent: *mut core::ffi::c_void, block: *mut u8) {
            $adapter.release(block)
        }

        #[no_mangle]
        pub unsafe extern "C" fn _realloc_r(
            _reent: *mut core::ffi::c_void,
            block: *mut u8,
            size: usize,
        ) -> *mut u8 {
            $adapter.reallocate(block, size)
        }

        #[no_mangle]
        pub extern "C" fn _calloc_r(
            _reent: *mut core::ffi::c_void,
            count: usize,
            size: usize,
        ) -> *mut u8 {
            $adapter.allocate_zeroed(count, size)
        }
    };
}

/// Exports the symbol the nano-kernel calls on a failed assertion,
/// leading to a freshly built fault trampoline.
#[macro_export]
macro_rules! export_fault_entry {
    ($trampoline:expr) => {
        #[allow(non_snake_case)]
        #[no_mangle]
        pub unsafe extern "C" fn Q_onAssert(
            module: *const core::ffi::c_char,
            location: core::ffi::c_int,
        ) -> ! {
            let module = $crate::runtime::module_name(module);
            $trampoline.on_assert(module, location)
        }
    };
}

/// Reads a module name handed over by C code.
///
/// # Safety
///
/// `module` must be null or point to a NUL-terminated string that
/// outlives the program.
pub unsafe fn module_name(module: *const c_char) -> &'static str {
    if module.is_null() {
        return UNKNOWN_MODULE;
    }
    CStr::from_ptr(module).to_str().unwrap_or(UNKNOWN_MODULE)
}
