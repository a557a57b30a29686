use crate::drive::{DriveState, Serviced};
use crate::error::Result;
use crate::geometry::DiskAddress;
use crate::record::{RecordSink, ServiceRecord};
use crate::request::Request;

/// First-come-first-served: strictly input order
pub fn fcfs<S: RecordSink>(requests: &[Request], sink: &mut S) -> Result<usize> {
    let mut drive = DriveState::new();

    for request in requests {
        drive.advance_to(request.arrival_time);
        let done = drive.service(request);
        sink.accept(post_transfer_record(request, &drive, &done))?;
    }

    Ok(requests.len())
}

/// Record reported by FCFS and SSTF: PSN and surface after the transfer,
/// sector offset is the drive's post-transfer phase
pub(super) fn post_transfer_record(request: &Request, drive: &DriveState, done: &Serviced) -> ServiceRecord {
    let psn = request.addr.psn + request.size;
    ServiceRecord {
        arrival_time: request.arrival_time,
        finish_time: done.finish_time,
        wait_time: done.wait_time,
        psn,
        cylinder: drive.head_cylinder,
        surface: DiskAddress::surface_of(psn),
        sector_offset: drive.phase,
        seek_distance: done.seek_distance,
    }
}
