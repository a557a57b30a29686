//! Disk scheduling policies.
//!
//! Every engine starts from a fresh [`DriveState`](crate::drive::DriveState)
//! and emits one [`ServiceRecord`](crate::record::ServiceRecord) per serviced
//! request, in service order, into a [`RecordSink`].

mod clook;
mod fcfs;
mod scan;
mod sstf;

use std::fmt;
use std::str::FromStr;

use log::info;

use crate::error::{Result, SimError};
use crate::record::RecordSink;
use crate::request::Request;

pub use clook::clook;
pub use fcfs::fcfs;
pub use scan::scan;
pub use sstf::sstf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    Fcfs,
    Sstf,
    Scan,
    CLook,
}

impl Policy {
    pub const ALL: [Policy; 4] = [Policy::Fcfs, Policy::Sstf, Policy::Scan, Policy::CLook];

    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::Sstf => "SSTF",
            Policy::Scan => "SCAN",
            Policy::CLook => "CLOOK",
        }
    }

    /// Run this policy over the whole request collection.
    ///
    /// `requests` must be sorted by arrival time. C-LOOK reorders it by
    /// cylinder and rewrites each request's PSN; the other policies leave it
    /// untouched. Returns the number of records emitted.
    pub fn run<S: RecordSink>(&self, requests: &mut [Request], sink: &mut S) -> Result<usize> {
        info!("Running {} over {} requests", self, requests.len());
        let emitted = match self {
            Policy::Fcfs => fcfs(requests, sink)?,
            Policy::Sstf => sstf(requests, sink)?,
            Policy::Scan => scan(requests, sink)?,
            Policy::CLook => clook(requests, sink)?,
        };
        info!("{} serviced {} requests", self, emitted);
        Ok(emitted)
    }
}

/// Unserviced request with the smallest arrival time; earliest in input wins ties
pub(super) fn earliest_pending(requests: &[Request], serviced: &[bool]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, request) in requests.iter().enumerate() {
        if serviced[i] {
            continue;
        }
        if best.is_none_or(|b| request.arrival_time < requests[b].arrival_time) {
            best = Some(i);
        }
    }
    best
}

impl FromStr for Policy {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        Policy::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SimError::UnknownPolicy(s.to_string()))
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
