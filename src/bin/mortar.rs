#![cfg_attr(test, allow(unused_attributes))]
#![cfg_attr(all(not(test), target_arch = "arm"), no_std)]
#![cfg_attr(target_arch = "arm", no_main)]

#[cfg(target_arch = "arm")]
extern crate alloc;

#[cfg(target_arch = "arm")]
use defmt_rtt as _;
#[cfg(target_arch = "arm")]
use panic_semihosting as _;

#[cfg(target_arch = "arm")]
mod firmware {
    use alloc::vec::Vec;
    use mortar_lib::{
        bind_runtime,
        config,
        devices::state::SYSTEM_STATE,
        drivers::cortex::{CortexMOsHeap, WaitForInterrupt},
        hal::idle::Park,
        utilities::checksum::Crc32,
    };

    bind_runtime!(ADAPTER: CortexMOsHeap = CortexMOsHeap::empty());

    #[cfg(feature = "c-runtime")]
    mortar_lib::export_c_runtime!(ADAPTER);

    #[cfg(feature = "c-runtime")]
    mortar_lib::export_fault_entry!(mortar_lib::devices::trampoline::FaultTrampoline::new(
        mortar_lib::drivers::cortex::CortexMInterrupts,
        mortar_lib::devices::logger::DefmtLogger,
        WaitForInterrupt,
        &SYSTEM_STATE,
    ));

    pub fn run() -> ! {
        let heap_start = cortex_m_rt::heap_start() as usize;
        unsafe { ADAPTER.heap().init(heap_start, config::HEAP_SIZE_BYTES) }
        defmt::info!("Heap ready: {} bytes free", ADAPTER.heap().free());

        // Grows through the adapter's reallocation path.
        let mut scratch: Vec<u8> = Vec::with_capacity(64);
        scratch.extend((0..128u32).map(|i| i as u8));
        let crc = Crc32::new().checksum(&scratch);
        defmt::info!("Scratch checksum {=u32}, {} bytes in use", crc, ADAPTER.heap().used());
        drop(scratch);

        defmt::info!("Handing over to the kernel ({})", SYSTEM_STATE.state());
        WaitForInterrupt.park()
    }
}

#[cfg(target_arch = "arm")]
#[cortex_m_rt::entry]
fn main() -> ! { firmware::run() }

#[cfg(not(target_arch = "arm"))]
fn main() {}
