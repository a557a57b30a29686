use crate::record::ServiceRecord;

/// Aggregate figures for one policy run
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Summary {
    pub requests: usize,
    pub total_wait: f64,
    pub max_wait: f64,
    pub total_seek_distance: u64,
    first_arrival: Option<f64>,
    last_finish: f64,
}

impl Summary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, record: &ServiceRecord) {
        self.requests += 1;
        self.total_wait += record.wait_time;
        self.max_wait = self.max_wait.max(record.wait_time);
        self.total_seek_distance += record.seek_distance;

        let first = self.first_arrival.get_or_insert(record.arrival_time);
        *first = first.min(record.arrival_time);
        self.last_finish = self.last_finish.max(record.finish_time);
    }

    pub fn mean_wait(&self) -> f64 {
        if self.requests == 0 {
            return 0.0;
        }
        self.total_wait / self.requests as f64
    }

    /// Time from the earliest arrival to the last completion
    pub fn makespan(&self) -> f64 {
        match self.first_arrival {
            Some(first) => self.last_finish - first,
            None => 0.0,
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} requests, mean wait {:.6}s, max wait {:.6}s, total seek {} cylinders, makespan {:.6}s",
            self.requests,
            self.mean_wait(),
            self.max_wait,
            self.total_seek_distance,
            self.makespan()
        )
    }
}
