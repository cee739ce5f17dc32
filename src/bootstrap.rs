use crate::collectors::Backend;
use crate::panels::memory_gauge::{self, MemoryGauge, PollHandle};
use crate::panels::volumes;
use crate::surface::Surface;
use log::{error, info};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// The two flows started once the surface is ready.
pub struct Flows {
    pub volumes: JoinHandle<()>,
    pub memory:  PollHandle,
}

impl Flows {
    pub fn shutdown(&self) {
        self.volumes.abort();
        self.memory.cancel();
    }
}

/// Start the volume flow and the memory poll independently of each other.
pub fn start(bridge: Arc<dyn Backend>, surface: Arc<dyn Surface>, poll_interval: Duration) -> Flows {
    info!("starting panels (memory poll every {} ms)", poll_interval.as_millis());

    let vol_bridge  = bridge.clone();
    let vol_surface = surface.clone();
    let volumes = tokio::spawn(async move {
        if let Err(e) = volumes::load(vol_bridge.as_ref(), vol_surface.as_ref()).await {
            error!("Error fetching drives: {}", e);
        }
    });

    let gauge  = MemoryGauge::mount(surface);
    let memory = memory_gauge::spawn(bridge, gauge, poll_interval);

    Flows { volumes, memory }
}
