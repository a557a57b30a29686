use crate::geometry::DiskAddress;

/// One disk I/O demand from the trace
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Request {
    pub arrival_time: f64,
    pub lbn: u64,
    /// Logical blocks transferred; always positive
    pub size: u64,
    /// Computed once from `lbn` when the request is created
    pub addr: DiskAddress,
}

impl Request {
    pub fn new(arrival_time: f64, lbn: u64, size: u64) -> Self {
        Request {
            arrival_time,
            lbn,
            size,
            addr: DiskAddress::from_lbn(lbn),
        }
    }

    #[inline]
    pub fn cylinder(&self) -> u64 {
        self.addr.cylinder
    }

    #[inline]
    pub fn seek_distance_from(&self, head_cylinder: u64) -> u64 {
        head_cylinder.abs_diff(self.addr.cylinder)
    }

    #[inline]
    pub fn has_arrived(&self, clock: f64) -> bool {
        self.arrival_time <= clock
    }
}
