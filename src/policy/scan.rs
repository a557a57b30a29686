use log::trace;

use super::earliest_pending;
use crate::drive::DriveState;
use crate::error::Result;
use crate::record::{RecordSink, ServiceRecord};
use crate::request::Request;

/// Direction of the head sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Whether `cylinder` lies ahead of (or under) the head in this direction
    #[inline]
    pub fn admits(self, cylinder: u64, head_cylinder: u64) -> bool {
        match self {
            Direction::Up => cylinder >= head_cylinder,
            Direction::Down => cylinder <= head_cylinder,
        }
    }
}

/// SCAN (elevator) over arrived requests.
///
/// The head keeps its direction while an arrived request lies ahead and
/// reverses as soon as none does; it never sweeps on to the last cylinder.
/// When nothing has arrived the clock jumps to the earliest pending
/// arrival, so every request is eventually serviced.
pub fn scan<S: RecordSink>(requests: &[Request], sink: &mut S) -> Result<usize> {
    let mut drive = DriveState::new();
    let mut direction = Direction::Up;
    let mut serviced = vec![false; requests.len()];
    let mut remaining = requests.len();

    while remaining > 0 {
        let mut ready: Vec<usize> = (0..requests.len())
            .filter(|&i| !serviced[i] && requests[i].has_arrived(drive.clock))
            .collect();

        if ready.is_empty() {
            let Some(i) = earliest_pending(requests, &serviced) else {
                break;
            };
            trace!("SCAN idle until {:.6}", requests[i].arrival_time);
            drive.advance_to(requests[i].arrival_time);
            continue;
        }

        // stable: equal cylinders stay in input order
        ready.sort_by_key(|&i| requests[i].cylinder());

        // A non-empty ready set always has a candidate on one side of the
        // head, so this flips at most once per selection
        let Some(next) = nearest_ahead(requests, &ready, drive.head_cylinder, direction) else {
            direction = direction.reversed();
            trace!("SCAN reversing to {:?} at cylinder {}", direction, drive.head_cylinder);
            continue;
        };

        let request = &requests[next];
        serviced[next] = true;
        remaining -= 1;

        let done = drive.service(request);
        sink.accept(ServiceRecord {
            arrival_time: request.arrival_time,
            finish_time: done.finish_time,
            wait_time: done.wait_time,
            psn: request.addr.psn + request.size,
            cylinder: request.cylinder(),
            surface: request.addr.surface,
            sector_offset: drive.phase,
            seek_distance: done.seek_distance,
        })?;
    }

    Ok(requests.len() - remaining)
}

/// Closest ready request in `direction`; first in cylinder order wins ties
fn nearest_ahead(requests: &[Request], ready: &[usize], head_cylinder: u64, direction: Direction) -> Option<usize> {
    let mut best: Option<(usize, u64)> = None;
    for &i in ready {
        let request = &requests[i];
        if !direction.admits(request.cylinder(), head_cylinder) {
            continue;
        }
        let distance = request.seek_distance_from(head_cylinder);
        if best.is_none_or(|(_, d)| distance < d) {
            best = Some((i, distance));
        }
    }
    best.map(|(i, _)| i)
}
