//! Reference count report for the boolean singletons.

use crate::registry;
use ob_core::IMMORTAL_FLOOR;
use ob_core::refcount;
use std::fmt;

/// Snapshot of the singleton counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RefCountReport {
    pub true_refcnt: isize,
    pub false_refcnt: isize,
    /// Releases clamped at the immortal floor, across every immortal kind.
    pub clamped_releases: usize,
}

impl RefCountReport {
    /// Claims held above the registry's own. Non-zero at shutdown means
    /// someone leaked a handle.
    pub fn outstanding(&self) -> isize {
        (self.true_refcnt - IMMORTAL_FLOOR) + (self.false_refcnt - IMMORTAL_FLOOR)
    }

    pub fn is_balanced(&self) -> bool {
        self.outstanding() == 0
    }
}

impl fmt::Display for RefCountReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "True refcnt={} False refcnt={} outstanding={} clamped={}",
            self.true_refcnt,
            self.false_refcnt,
            self.outstanding(),
            self.clamped_releases
        )
    }
}

pub fn report() -> RefCountReport {
    RefCountReport {
        true_refcnt: registry::py_true().refcnt(),
        false_refcnt: registry::py_false().refcnt(),
        clamped_releases: refcount::clamped_releases(),
    }
}

/// Takes a report and logs it.
pub fn log_report() -> RefCountReport {
    let report = report();
    tracing::info!(
        true_refcnt = report.true_refcnt,
        false_refcnt = report.false_refcnt,
        outstanding = report.outstanding(),
        clamped = report.clamped_releases,
        "boolean refcount report"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn outstanding_counts_claims_above_floor() {
        let report = RefCountReport {
            true_refcnt: IMMORTAL_FLOOR + 3,
            false_refcnt: IMMORTAL_FLOOR,
            clamped_releases: 2,
        };
        assert_eq!(report.outstanding(), 3);
        assert!(!report.is_balanced());
        assert_eq!(
            report.to_string(),
            "True refcnt=4 False refcnt=1 outstanding=3 clamped=2"
        );
    }

    #[test]
    fn live_report_never_below_floor() {
        let report = report();
        assert!(report.true_refcnt >= IMMORTAL_FLOOR);
        assert!(report.false_refcnt >= IMMORTAL_FLOOR);
        assert!(report.outstanding() >= 0);
    }

    #[test]
    #[traced_test]
    fn log_report_emits_summary() {
        log_report();
        assert!(logs_contain("boolean refcount report"));
    }
}
