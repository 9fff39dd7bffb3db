use std::sync::Arc;
use std::time::Duration;

use crate::token::registry::TokenRegistry;

/// Periodic eviction of expired usage records. Runs on its own schedule,
/// decoupled from request handling, so cleanup cadence never adds latency
/// to verification.
pub(crate) async fn sweep_loop(registry: Arc<TokenRegistry>, period: Duration) {
    let mut interval = tokio::time::interval(period);

    loop {
        interval.tick().await;

        let evicted = registry.sweep();

        if evicted > 0 {
            tracing::info!("swept {} expired usage records", evicted);
        }
    }
}
