use chrono::{DateTime, Utc};

/// Time source for the issuer and the registry. Injected so the token
/// validity window can be driven manually in tests.
pub(crate) trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Clone, Debug)]
pub(crate) struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
