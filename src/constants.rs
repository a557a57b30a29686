pub const SECTORS_PER_TRACK: u64 = 200;
pub const TRACKS_PER_CYLINDER: u64 = 8;
pub const CYLINDER_COUNT: u64 = 500_000;
pub const RPM: u64 = 10_000;

pub const PHYSICAL_SECTOR_SIZE: u64 = 512;
pub const LOGICAL_BLOCK_SIZE: u64 = 4096;

/// Bytes per second moved across the channel once the head is positioned
pub const TRANSFER_RATE: f64 = 1_000_000_000.0;

pub const SECTORS_PER_BLOCK: u64 = LOGICAL_BLOCK_SIZE / PHYSICAL_SECTOR_SIZE;
pub const SECTORS_PER_CYLINDER: u64 = SECTORS_PER_TRACK * TRACKS_PER_CYLINDER;

/// Seconds per platter revolution
pub const ROTATION_PERIOD: f64 = 60.0 / RPM as f64;
pub const SECONDS_PER_SECTOR: f64 = ROTATION_PERIOD / SECTORS_PER_TRACK as f64;
pub const SECTORS_PER_SECOND: f64 = SECTORS_PER_TRACK as f64 / ROTATION_PERIOD;

// seek curve, milliseconds: SEEK_SETTLE_MS + SEEK_PER_CYLINDER_MS * distance
pub const SEEK_SETTLE_MS: f64 = 2.0;
pub const SEEK_PER_CYLINDER_MS: f64 = 0.000028;
