use crate::error::Result;

/// Outcome of servicing one request, emitted in service order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServiceRecord {
    pub arrival_time: f64,
    pub finish_time: f64,
    pub wait_time: f64,
    pub psn: u64,
    pub cylinder: u64,
    pub surface: u64,
    pub sector_offset: f64,
    pub seek_distance: u64,
}

/// Destination for records produced by a policy run
pub trait RecordSink {
    fn accept(&mut self, record: ServiceRecord) -> Result<()>;
}

impl RecordSink for Vec<ServiceRecord> {
    fn accept(&mut self, record: ServiceRecord) -> Result<()> {
        self.push(record);
        Ok(())
    }
}
