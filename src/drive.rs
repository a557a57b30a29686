use log::debug;

use crate::request::Request;
use crate::timing::{self, ServiceBreakdown};

/// Simulated drive state owned by a single policy run
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DriveState {
    pub clock: f64,
    pub head_cylinder: u64,
    /// Sector position currently under the head
    pub phase: f64,
}

/// Timing of one request as computed by [`DriveState::service`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Serviced {
    pub wait_time: f64,
    pub finish_time: f64,
    pub seek_distance: u64,
    pub breakdown: ServiceBreakdown,
}

impl DriveState {
    /// Head parked at cylinder 0, phase 0, clock 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward to `time`; never moves it backwards
    pub fn advance_to(&mut self, time: f64) {
        if self.clock < time {
            self.clock = time;
        }
    }

    /// Seek, wait for the sector, transfer, then leave the head on the
    /// request's cylinder with the clock at its finish time
    pub fn service(&mut self, request: &Request) -> Serviced {
        let seek_distance = request.seek_distance_from(self.head_cylinder);
        let seek = timing::seek_time(seek_distance);

        self.phase = timing::phase_after_seek(self.phase, seek);
        let target = request.addr.sector_offset;
        let sectors = timing::sectors_to_go(self.phase, target as f64);

        let breakdown = ServiceBreakdown {
            seek,
            rotation: timing::rotational_latency(sectors),
            transfer: timing::transfer_time(request.size),
        };

        let wait_time = timing::wait_time(self.clock, request.arrival_time);
        let finish_time = request.arrival_time + wait_time + breakdown.total();

        debug!(
            "LBN {} cyl {}: seek {} ({:.6}s), {:.3} sectors to go ({:.6}s), transfer {:.6}s, wait {:.6}s, finish {:.6}s",
            request.lbn,
            request.cylinder(),
            seek_distance,
            breakdown.seek,
            sectors,
            breakdown.rotation,
            breakdown.transfer,
            wait_time,
            finish_time
        );

        self.clock = finish_time;
        self.head_cylinder = request.cylinder();
        self.phase = timing::phase_after_transfer(target, request.size);

        Serviced { wait_time, finish_time, seek_distance, breakdown }
    }
}
