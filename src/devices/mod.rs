//! Modules with the actual mortar logic, laid on top of the
//! abstract HAL interfaces. Devices are generic; concrete targets
//! are bound in `drivers` and the firmware binary.

pub mod adapter;
pub mod logger;
pub mod state;
pub mod trampoline;
