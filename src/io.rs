use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{info, warn};

use crate::constants::{LOGICAL_BLOCK_SIZE, SECTORS_PER_BLOCK};
use crate::error::{Result, SimError};
use crate::record::{RecordSink, ServiceRecord};
use crate::request::Request;
use crate::stats::Summary;

/// Requests loaded from a trace file, in arrival order
#[derive(Debug, Default)]
pub struct Trace {
    pub requests: Vec<Request>,
}

impl Trace {
    /// Read at most `limit` requests from `path`
    pub fn from_file<P: AsRef<Path>>(path: P, limit: Option<usize>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SimError::ReadTrace {
            path: path.to_path_buf(),
            source,
        })?;
        let trace = Self::parse(&content, limit)?;
        info!("Loaded {} requests from {}", trace.requests.len(), path.display());
        Ok(trace)
    }

    /// Parse `arrival_time lbn request_size` lines.
    ///
    /// Parsing stops once `limit` requests have been read, so anything past
    /// the limit is never looked at. Blank lines are skipped.
    pub fn parse(content: &str, limit: Option<usize>) -> Result<Self> {
        let limit = limit.unwrap_or(usize::MAX);
        let mut requests: Vec<Request> = Vec::new();

        for (idx, line) in content.lines().enumerate() {
            if requests.len() >= limit {
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            let line_no = idx + 1;
            let request = Self::parse_line(line, line_no)?;

            if let Some(previous) = requests.last() {
                if request.arrival_time < previous.arrival_time {
                    return Err(SimError::UnsortedTrace {
                        line: line_no,
                        arrival: request.arrival_time,
                        previous: previous.arrival_time,
                    });
                }
            }
            if !request.addr.in_range() {
                warn!(
                    "Line {}: LBN {} maps to cylinder {}, beyond the last cylinder",
                    line_no,
                    request.lbn,
                    request.cylinder()
                );
            }
            requests.push(request);
        }

        Ok(Trace { requests })
    }

    fn parse_line(line: &str, line_no: usize) -> Result<Request> {
        let err = |reason: String| SimError::Parse { line: line_no, reason };

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 3 {
            return Err(err(format!("expected 3 fields, got {}", tokens.len())));
        }

        let arrival: f64 = tokens[0]
            .parse()
            .map_err(|_| err(format!("invalid arrival time: {}", tokens[0])))?;
        if !arrival.is_finite() || arrival < 0.0 {
            return Err(err(format!("arrival time must be a non-negative number: {}", tokens[0])));
        }
        let lbn: u64 = tokens[1]
            .parse()
            .map_err(|_| err(format!("invalid logical block number: {}", tokens[1])))?;
        let size: u64 = tokens[2]
            .parse()
            .map_err(|_| err(format!("invalid request size: {}", tokens[2])))?;
        if size == 0 {
            return Err(err("request size must be positive".to_string()));
        }

        // geometry and timing work in u64: PSN, bytes moved and the
        // post-transfer PSN must all fit
        let psn = lbn
            .checked_mul(SECTORS_PER_BLOCK)
            .ok_or_else(|| err(format!("logical block number out of range: {}", lbn)))?;
        if size.checked_mul(LOGICAL_BLOCK_SIZE).is_none() || psn.checked_add(size).is_none() {
            return Err(err(format!("request size out of range: {}", size)));
        }

        Ok(Request::new(arrival, lbn, size))
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

/// Writes one line per serviced request and tallies a [`Summary`]
pub struct ResultWriter<W: Write> {
    out: W,
    summary: Summary,
}

impl ResultWriter<BufWriter<File>> {
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| SimError::CreateOutput {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> ResultWriter<W> {
    pub fn new(out: W) -> Self {
        ResultWriter { out, summary: Summary::new() }
    }

    /// Flush buffered output and hand back the run summary
    pub fn finish(mut self) -> Result<Summary> {
        self.out.flush()?;
        Ok(self.summary)
    }
}

impl<W: Write> RecordSink for ResultWriter<W> {
    fn accept(&mut self, record: ServiceRecord) -> Result<()> {
        writeln!(self.out, "{}", format_record(&record))?;
        self.summary.record(&record);
        Ok(())
    }
}

/// `arrival finish wait psn cylinder surface sector_offset seek_distance`
pub fn format_record(r: &ServiceRecord) -> String {
    format!(
        "{:.6} {:.6} {:.6} {} {} {} {:.6} {}",
        r.arrival_time,
        r.finish_time,
        r.wait_time,
        r.psn,
        r.cylinder,
        r.surface,
        r.sector_offset,
        r.seek_distance
    )
}
