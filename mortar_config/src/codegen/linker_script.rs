use std::{fs::File, io::Write, path::Path};

use anyhow::Result;

use crate::Configuration;

/// Generates the linker script `memory.x`, which describes the amount and location
/// of flash and RAM memory available on the configured board. Host builds have no
/// memory map, so nothing is written for them.
pub fn generate_linker_script<P: AsRef<Path>>(out_dir: P, configuration: &Configuration) -> Result<()> {
    let constants = match configuration.port.linker_script_constants() {
        Some(constants) => constants,
        None => return Ok(()),
    };

    let mut file = File::create(out_dir.as_ref().join("memory.x"))?;
    write!(
        file,
        "MEMORY\n\
         {{\n\
             FLASH : ORIGIN = 0x{:08X}, LENGTH = {}K\n\
             RAM : ORIGIN = 0x{:08X}, LENGTH = {}K\n\
         }}\n",
        constants.flash.origin,
        constants.flash.size / 1024,
        constants.ram.origin,
        constants.ram.size / 1024,
    )?;

    Ok(())
}
