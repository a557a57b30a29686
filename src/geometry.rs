use crate::constants::*;

/// Physical location of a logical block on the simulated disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiskAddress {
    pub psn: u64,
    pub cylinder: u64,
    pub surface: u64,
    pub sector_offset: u64,
}

impl DiskAddress {
    /// Map a logical block number onto (psn, cylinder, surface, sector offset)
    pub fn from_lbn(lbn: u64) -> Self {
        Self::from_psn(lbn * SECTORS_PER_BLOCK)
    }

    pub fn from_psn(psn: u64) -> Self {
        let cylinder = psn / SECTORS_PER_CYLINDER;
        let surface = (psn % SECTORS_PER_CYLINDER) / SECTORS_PER_TRACK;
        let sector_offset = psn % SECTORS_PER_TRACK;

        DiskAddress { psn, cylinder, surface, sector_offset }
    }

    /// Surface holding an arbitrary sector, used for post-transfer reporting
    #[inline]
    pub fn surface_of(psn: u64) -> u64 {
        (psn % SECTORS_PER_CYLINDER) / SECTORS_PER_TRACK
    }

    #[inline]
    pub fn in_range(&self) -> bool {
        self.cylinder < CYLINDER_COUNT
    }
}

impl std::fmt::Display for DiskAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PSN({}) = (cyl={}, surf={}, off={})",
            self.psn, self.cylinder, self.surface, self.sector_offset
        )
    }
}
