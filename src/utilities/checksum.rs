//! CRC-32 (IEEE) over a lookup table.
//!
//! Whether the table is the precomputed one in flash or generated in
//! RAM is a build-time choice (`crc-static-table`). Both produce the
//! same checksums; the choice trades flash for RAM.
use crate::config;
use crc::crc32;

enum Table {
    Static(&'static [u32; 256]),
    Generated([u32; 256]),
}

pub struct Crc32 {
    table: Table,
}

impl Crc32 {
    /// Checksum engine with the table kind the build asks for.
    pub fn new() -> Self {
        if config::STATIC_CHECKSUM_TABLE {
            Self::with_static_table()
        } else {
            Self::with_generated_table()
        }
    }

    pub fn with_static_table() -> Self { Self { table: Table::Static(&crc32::IEEE_TABLE) } }

    pub fn with_generated_table() -> Self {
        Self { table: Table::Generated(crc32::make_table(crc32::IEEE)) }
    }

    pub fn is_static(&self) -> bool { matches!(self.table, Table::Static(_)) }

    fn table(&self) -> &[u32; 256] {
        match &self.table {
            Table::Static(table) => table,
            Table::Generated(table) => table,
        }
    }

    /// Continues a running checksum over `bytes`.
    pub fn update(&self, crc: u32, bytes: &[u8]) -> u32 { crc32::update(crc, self.table(), bytes) }

    pub fn checksum(&self, bytes: &[u8]) -> u32 { self.update(0, bytes) }
}

impl Default for Crc32 {
    fn default() -> Self { Self::new() }
}
