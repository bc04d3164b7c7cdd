use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::task::JoinHandle;

use crate::store::StateStore;

/// Spawn the simulation loop on the current tokio runtime.
///
/// The loop runs for the lifetime of the process; the handle is only
/// returned so tests can abort it.
pub fn start(store: Arc<StateStore>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(run(store, period, StdRng::from_entropy()))
}

/// Tick forever, sleeping `period` between iterations.
///
/// Idle ticks (monitoring off) only re-check the flag.
pub async fn run<R: Rng + Send>(store: Arc<StateStore>, period: Duration, mut rng: R) {
    tracing::info!("Simulation loop started (period {:?})", period);

    loop {
        let report = store.tick(&mut rng);

        if report.active {
            tracing::debug!(
                process = report.process.as_ref().map(|p| p.name.as_str()).unwrap_or("-"),
                connection = report.connection.as_ref().map(|c| c.domain.as_str()).unwrap_or("-"),
                blocked = report.blocked,
                "Simulation tick"
            );
        }

        tokio::time::sleep(period).await;
    }
}
