use crate::collectors::Backend;
use crate::error::BridgeError;
use crate::models::memory::MemoryStats;
use crate::surface::{Container, Node, NodeId, Surface};
use log::{error, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

pub const DEFAULT_PERIOD: Duration = Duration::from_secs(1);

/// The memory gauge node and the surface it lives on.
pub struct MemoryGauge {
    node:    NodeId,
    surface: Arc<dyn Surface>,
}

impl MemoryGauge {
    /// Put an empty gauge into the memory container.
    pub fn mount(surface: Arc<dyn Surface>) -> Self {
        let node = surface.append(
            Container::Memory,
            Node::Gauge { fill: 0.0, label: String::new() },
        );
        Self { node, surface }
    }

    /// One poll. On failure the gauge keeps whatever it showed before.
    pub async fn tick(&self, bridge: &dyn Backend) -> Result<MemoryStats, BridgeError> {
        let stats = bridge.get_memory_usage().await?;
        if stats.is_overcommitted() {
            warn!(
                "backend reports {} MB used of {} MB; gauge clamped at 100%",
                stats.used_memory, stats.max_memory
            );
        }
        self.surface.set_fill(self.node, stats.usage_pct());
        self.surface.set_text(self.node, stats.label());
        Ok(stats)
    }
}

/// Handle to the recurring poll task.
pub struct PollHandle {
    task: JoinHandle<()>,
}

impl PollHandle {
    pub fn cancel(&self) {
        self.task.abort();
    }

    #[cfg(test)]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Poll immediately, then once per `period` until cancelled.
///
/// Each request is awaited before the next tick is taken, so at most one
/// is ever in flight; ticks that fall due meanwhile are skipped.
pub fn spawn(bridge: Arc<dyn Backend>, gauge: MemoryGauge, period: Duration) -> PollHandle {
    let task = tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            if let Err(e) = gauge.tick(bridge.as_ref()).await {
                error!("Error fetching memory usage: {}", e);
            }
        }
    });
    PollHandle { task }
}
