use std::time::Duration;

use common::Credits;

/// Tunable enrollment rules, injected into the service.
#[derive(Debug, Clone)]
pub struct EnrollmentPolicy {
    /// Maximum credits a student may carry per semester.
    pub credit_cap: Credits,

    /// Seat allocation attempts before a transient conflict is surfaced.
    pub seat_retry_attempts: u32,

    /// Delay before the first allocation retry; doubles on each retry.
    pub retry_base_delay: Duration,
}

impl Default for EnrollmentPolicy {
    fn default() -> Self {
        Self {
            credit_cap: Credits::new(12),
            seat_retry_attempts: 3,
            retry_base_delay: Duration::from_millis(10),
        }
    }
}
