//! Physical timing model shared by every scheduling policy.
//!
//! All times are in seconds. Rotational phase is measured in sector
//! positions and always lies in `[0, SECTORS_PER_TRACK)`.

use crate::constants::*;

/// Time to move the head `distance` cylinders
pub fn seek_time(distance: u64) -> f64 {
    if distance == 0 {
        return 0.0;
    }
    (SEEK_PER_CYLINDER_MS * distance as f64 + SEEK_SETTLE_MS) / 1000.0
}

/// The platter keeps spinning while the arm moves
pub fn phase_after_seek(phase: f64, seek: f64) -> f64 {
    (phase + seek * SECTORS_PER_SECOND).rem_euclid(SECTORS_PER_TRACK as f64)
}

/// Forward angular distance from `phase` to `target_offset`, in sectors
pub fn sectors_to_go(phase: f64, target_offset: f64) -> f64 {
    if phase <= target_offset {
        target_offset - phase
    } else {
        SECTORS_PER_TRACK as f64 - (phase - target_offset)
    }
}

pub fn rotational_latency(sectors: f64) -> f64 {
    sectors * SECONDS_PER_SECTOR
}

pub fn transfer_time(request_size: u64) -> f64 {
    (request_size * LOGICAL_BLOCK_SIZE) as f64 / TRANSFER_RATE
}

/// Phase once the transfer completes: one sector position per block moved
pub fn phase_after_transfer(target_offset: u64, request_size: u64) -> f64 {
    ((target_offset + request_size) % SECTORS_PER_TRACK) as f64
}

/// Wait between arrival and the start of service; never negative
#[inline]
pub fn wait_time(clock: f64, arrival_time: f64) -> f64 {
    (clock - arrival_time).max(0.0)
}

/// Components of a single request's service time
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ServiceBreakdown {
    pub seek: f64,
    pub rotation: f64,
    pub transfer: f64,
}

impl ServiceBreakdown {
    #[inline]
    pub fn total(&self) -> f64 {
        self.seek + self.rotation + self.transfer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_seek_time_zero_distance() {
        assert_eq!(seek_time(0), 0.0);
    }

    #[test]
    fn test_seek_time_curve() {
        // (0.000028 * d + 2) ms
        assert_close(seek_time(1), 0.002000028);
        assert_close(seek_time(200), 0.0020056);
        assert_close(seek_time(499_999), (0.000028 * 499_999.0 + 2.0) / 1000.0);
    }

    #[test]
    fn test_seek_time_monotonic() {
        let mut previous = seek_time(0);
        for distance in [1u64, 2, 10, 100, 1_000, 10_000, 100_000, 499_999] {
            let t = seek_time(distance);
            assert!(t > previous, "seek_time({}) = {} not above {}", distance, t, previous);
            previous = t;
        }
    }

    #[test]
    fn test_rotation_constants() {
        assert_close(ROTATION_PERIOD, 0.006);
        assert_close(SECONDS_PER_SECTOR, 0.00003);
        assert!((SECTORS_PER_SECOND - 200.0 / 0.006).abs() < 1e-6);
    }

    #[test]
    fn test_phase_after_seek_wraps() {
        // one cylinder of seek turns the platter ~66.67 sectors
        assert_close(phase_after_seek(1.0, seek_time(1)), 1.0 + 0.002000028 / 0.00003);

        // a full revolution's worth of seek lands back where it started
        assert_close(phase_after_seek(10.0, ROTATION_PERIOD), 10.0);

        let phase = phase_after_seek(150.0, seek_time(1));
        assert!(phase >= 0.0 && phase < SECTORS_PER_TRACK as f64);
        assert_close(phase, 150.0 + 66.6676 - 200.0);
    }

    #[test]
    fn test_sectors_to_go() {
        assert_close(sectors_to_go(0.0, 0.0), 0.0);
        assert_close(sectors_to_go(10.0, 50.0), 40.0);
        // target already passed: wait for the next revolution
        assert_close(sectors_to_go(50.0, 10.0), 160.0);
        assert_close(sectors_to_go(199.5, 0.0), 0.5);
    }

    #[test]
    fn test_sectors_to_go_bounds() {
        for phase in [0.0, 0.25, 99.9, 150.0, 199.99] {
            for target in [0.0, 1.0, 100.0, 199.0] {
                let n = sectors_to_go(phase, target);
                assert!(n >= 0.0 && n < SECTORS_PER_TRACK as f64);
            }
        }
    }

    #[test]
    fn test_rotational_latency() {
        assert_close(rotational_latency(0.0), 0.0);
        assert_close(rotational_latency(200.0), ROTATION_PERIOD);
        assert_close(rotational_latency(100.0), 0.003);
    }

    #[test]
    fn test_transfer_time() {
        assert_close(transfer_time(1), 0.000004096);
        assert_close(transfer_time(8), 8.0 * 0.000004096);
    }

    #[test]
    fn test_phase_after_transfer() {
        assert_eq!(phase_after_transfer(0, 1), 1.0);
        assert_eq!(phase_after_transfer(195, 10), 5.0);
        assert_eq!(phase_after_transfer(199, 1), 0.0);
    }

    #[test]
    fn test_wait_time_clamped() {
        assert_eq!(wait_time(1.0, 2.0), 0.0);
        assert_close(wait_time(2.5, 2.0), 0.5);
    }

    #[test]
    fn test_breakdown_total() {
        let b = ServiceBreakdown { seek: 0.002, rotation: 0.001, transfer: 0.000004 };
        assert_close(b.total(), 0.003004);
        assert_eq!(ServiceBreakdown::default().total(), 0.0);
    }
}
