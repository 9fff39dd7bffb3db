use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use jsonwebtoken::DecodingKey;

use crate::core::error::Error;
use crate::token::claims::{self, Claims};
use crate::token::clock::Clock;

/// Bookkeeping for a consumed token, kept until the sweep evicts it.
/// Absence of a record means the token has never been presented.
#[derive(Clone, Debug)]
struct UsageRecord {
    used_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct RegistryStats {
    pub(crate) active_records: usize,
    pub(crate) total_consumed: u64,
}

/// Authoritative record of which tokens have been consumed. The map is the
/// only shared mutable state in the service; every check-then-insert happens
/// under a single lock acquisition.
pub(crate) struct TokenRegistry {
    decoding_key: DecodingKey,
    clock: Arc<dyn Clock>,
    records: Mutex<HashMap<String, UsageRecord>>,
    total_consumed: AtomicU64,
}

impl std::fmt::Debug for TokenRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenRegistry")
            .field("total_consumed", &self.total_consumed.load(Ordering::Relaxed))
            .finish()
    }
}

impl TokenRegistry {
    pub(crate) fn new(secret: &str, clock: Arc<dyn Clock>) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            clock,
            records: Mutex::new(HashMap::new()),
            total_consumed: AtomicU64::new(0),
        }
    }

    /// Accept a token exactly once. Rejection points, in order: signature,
    /// expiry, prior use. An expired token never creates a record, and of
    /// any number of concurrent callers presenting the same token, exactly
    /// one observes the vacant entry.
    pub(crate) fn verify_and_consume(&self, token: &str) -> Result<Claims, Error> {
        let claims = claims::decode(token, &self.decoding_key)?.claims;

        let now = self.clock.now();

        if now.timestamp() >= claims.exp {
            return Err(Error::ExpiredToken);
        }

        let expires_at = DateTime::from_timestamp(claims.exp, 0).ok_or(Error::InvalidToken)?;

        let mut records = self.records.lock().unwrap();

        match records.entry(claims.jti.clone()) {
            Entry::Occupied(entry) => {
                tracing::warn!(
                    "token {} already used at {}",
                    claims.jti,
                    entry.get().used_at
                );

                Err(Error::AlreadyUsed)
            }
            Entry::Vacant(entry) => {
                entry.insert(UsageRecord {
                    used_at: now,
                    expires_at,
                });

                self.total_consumed.fetch_add(1, Ordering::Relaxed);

                Ok(claims)
            }
        }
    }

    /// Drop every record whose expiry has passed. Expired tokens are already
    /// rejected before the map lookup, so eviction never races with a
    /// legitimate verification of the same token.
    pub(crate) fn sweep(&self) -> usize {
        let now = self.clock.now();

        let mut records = self.records.lock().unwrap();

        let before = records.len();
        records.retain(|_, record| record.expires_at > now);

        before - records.len()
    }

    /// Snapshot of the registry counters. `total_consumed` is monotonic;
    /// `active_records` shrinks as the sweep evicts.
    pub(crate) fn stats(&self) -> RegistryStats {
        let active_records = self.records.lock().unwrap().len();

        RegistryStats {
            active_records,
            total_consumed: self.total_consumed.load(Ordering::Relaxed),
        }
    }
}
