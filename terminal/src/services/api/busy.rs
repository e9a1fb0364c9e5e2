//! In-flight request gauge.
//!
//! A counter, not a flag: with overlapping calls the store stays busy until
//! the last one finishes.

use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Default)]
pub struct BusyGauge {
    in_flight: AtomicUsize,
}

impl BusyGauge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one request in flight until the returned guard drops.
    pub fn enter(&self) -> BusyGuard<'_> {
        self.in_flight.fetch_add(1, Ordering::AcqRel);
        BusyGuard { gauge: self }
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::Acquire)
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight() > 0
    }
}

/// Decrements the gauge on drop, including when a call future is cancelled.
#[derive(Debug)]
pub struct BusyGuard<'a> {
    gauge: &'a BusyGauge,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.gauge.in_flight.fetch_sub(1, Ordering::AcqRel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_guards() {
        let gauge = BusyGauge::new();
        assert!(!gauge.is_busy());

        let first = gauge.enter();
        let second = gauge.enter();
        assert_eq!(gauge.in_flight(), 2);

        drop(first);
        assert!(gauge.is_busy());

        drop(second);
        assert!(!gauge.is_busy());
    }
}
