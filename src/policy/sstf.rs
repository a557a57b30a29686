use log::trace;

use super::earliest_pending;
use super::fcfs::post_transfer_record;
use crate::drive::DriveState;
use crate::error::Result;
use crate::record::RecordSink;
use crate::request::Request;

/// Shortest-seek-time-first among requests that have already arrived
pub fn sstf<S: RecordSink>(requests: &[Request], sink: &mut S) -> Result<usize> {
    let mut drive = DriveState::new();
    let mut serviced = vec![false; requests.len()];
    let mut remaining = requests.len();

    while remaining > 0 {
        let next = match nearest_arrived(requests, &serviced, &drive) {
            Some(i) => i,
            None => {
                // Nothing has arrived: jump to the earliest pending arrival
                // and take that request as-is
                let Some(i) = earliest_pending(requests, &serviced) else {
                    break;
                };
                trace!("SSTF idle until {:.6}", requests[i].arrival_time);
                drive.advance_to(requests[i].arrival_time);
                i
            }
        };

        let request = &requests[next];
        serviced[next] = true;
        remaining -= 1;

        let done = drive.service(request);
        sink.accept(post_transfer_record(request, &drive, &done))?;
    }

    Ok(requests.len() - remaining)
}

/// Arrived, unserviced request closest to the head; earliest in input wins ties
fn nearest_arrived(requests: &[Request], serviced: &[bool], drive: &DriveState) -> Option<usize> {
    let mut best: Option<(usize, u64)> = None;
    for (i, request) in requests.iter().enumerate() {
        if serviced[i] || !request.has_arrived(drive.clock) {
            continue;
        }
        let distance = request.seek_distance_from(drive.head_cylinder);
        if best.is_none_or(|(_, d)| distance < d) {
            best = Some((i, distance));
        }
    }
    best.map(|(i, _)| i)
}
