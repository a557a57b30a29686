use log::debug;

use crate::constants::SECTORS_PER_TRACK;
use crate::error::Result;
use crate::record::{RecordSink, ServiceRecord};
use crate::request::Request;
use crate::timing::{self, ServiceBreakdown};

/// C-LOOK as this simulator defines it.
///
/// The whole collection is stably sorted by cylinder up front and serviced
/// in that order in a single upward pass. Unlike textbook C-LOOK there is
/// no arrival gating during selection and no wrap back to the lowest
/// cylinder. Rotational latency is approximated from the distance between
/// `cylinder / SECTORS_PER_TRACK` "tracks" rather than from the platter
/// phase, and each request's PSN is rewritten as
/// `cylinder * SECTORS_PER_TRACK + sector_offset` once it is serviced.
pub fn clook<S: RecordSink>(requests: &mut [Request], sink: &mut S) -> Result<usize> {
    requests.sort_by_key(|r| r.cylinder());

    let mut head_cylinder = 0u64;
    let mut last_finish = 0.0f64;

    for request in requests.iter_mut() {
        let wait_time = timing::wait_time(last_finish, request.arrival_time);
        let seek_distance = request.seek_distance_from(head_cylinder);

        let current_track = head_cylinder / SECTORS_PER_TRACK;
        let requested_track = request.cylinder() / SECTORS_PER_TRACK;
        let sectors = current_track.abs_diff(requested_track);

        let breakdown = ServiceBreakdown {
            seek: timing::seek_time(seek_distance),
            rotation: timing::rotational_latency(sectors as f64),
            transfer: timing::transfer_time(request.size),
        };
        let finish_time = request.arrival_time + wait_time + breakdown.total();

        debug!(
            "LBN {} cyl {}: seek {} ({:.6}s), {} tracks ({:.6}s), transfer {:.6}s, wait {:.6}s, finish {:.6}s",
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

        last_finish = finish_time;
        head_cylinder = request.cylinder();
        request.addr.psn = request.cylinder() * SECTORS_PER_TRACK + request.addr.sector_offset;

        sink.accept(ServiceRecord {
            arrival_time: request.arrival_time,
            finish_time,
            wait_time,
            psn: request.addr.psn,
            cylinder: request.cylinder(),
            surface: request.addr.surface,
            sector_offset: request.addr.sector_offset as f64,
            seek_distance,
        })?;
    }

    Ok(requests.len())
}
