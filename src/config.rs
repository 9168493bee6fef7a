//! Build-time configuration.
//!
//! Generated by the build script from the RON configuration file
//! (`config/host.ron` unless `MORTAR_CONFIG` points elsewhere). Nothing
//! here carries runtime logic; it only exposes the chosen toggles.

include!(concat!(env!("OUT_DIR"), "/config.rs"));
