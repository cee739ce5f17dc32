pub mod drives;
pub mod folders;
pub mod memory;

use crate::error::BridgeError;
use crate::models::memory::MemoryStats;
use crate::models::volume::Volume;
use async_trait::async_trait;
use drives::VolumeFilter;
use log::debug;
use std::time::Instant;

/// The request/response bridge every panel reads its data through.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn get_drives(&self) -> Result<Vec<Volume>, BridgeError>;
    async fn get_memory_usage(&self) -> Result<MemoryStats, BridgeError>;
}

/// Backend answering from the local machine via `sysinfo`.
pub struct SysinfoBackend {
    filter: VolumeFilter,
}

impl SysinfoBackend {
    pub fn new(filter: VolumeFilter) -> Self {
        Self { filter }
    }
}

#[async_trait]
impl Backend for SysinfoBackend {
    async fn get_drives(&self) -> Result<Vec<Volume>, BridgeError> {
        let start  = Instant::now();
        let filter = self.filter.clone();
        let result = tokio::task::spawn_blocking(move || drives::read_volumes(&filter))
            .await
            .map_err(|e| BridgeError::new("get_drives", e.to_string()));
        debug!("get_drives took: {} ms", start.elapsed().as_millis());
        result
    }

    async fn get_memory_usage(&self) -> Result<MemoryStats, BridgeError> {
        let start  = Instant::now();
        let result = tokio::task::spawn_blocking(memory::read_memory)
            .await
            .map_err(|e| BridgeError::new("get_memory_usage", e.to_string()))?;
        debug!("get_memory_usage took: {} ms", start.elapsed().as_millis());
        result
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    type MemoryScript = Box<dyn Fn(usize) -> Result<MemoryStats, BridgeError> + Send + Sync>;

    /// Backend with canned answers that counts how it is called.
    pub struct ScriptedBackend {
        drives:            Result<Vec<Volume>, String>,
        memory:            MemoryScript,
        memory_delay:      Duration,
        pub drive_calls:   AtomicUsize,
        pub memory_calls:  AtomicUsize,
        in_flight:         AtomicUsize,
        pub max_in_flight: AtomicUsize,
    }

    impl ScriptedBackend {
        pub fn new(drives: Result<Vec<Volume>, String>) -> Self {
            Self {
                drives,
                memory:        Box::new(|_| Ok(MemoryStats { used_memory: 4096, max_memory: 8192 })),
                memory_delay:  Duration::ZERO,
                drive_calls:   AtomicUsize::new(0),
                memory_calls:  AtomicUsize::new(0),
                in_flight:     AtomicUsize::new(0),
                max_in_flight: AtomicUsize::new(0),
            }
        }

        /// `script` receives the zero-based call number.
        pub fn with_memory<F>(mut self, script: F) -> Self
        where
            F: Fn(usize) -> Result<MemoryStats, BridgeError> + Send + Sync + 'static,
        {
            self.memory = Box::new(script);
            self
        }

        pub fn with_memory_delay(mut self, delay: Duration) -> Self {
            self.memory_delay = delay;
            self
        }

        pub fn memory_calls(&self) -> usize {
            self.memory_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Backend for ScriptedBackend {
        async fn get_drives(&self) -> Result<Vec<Volume>, BridgeError> {
            self.drive_calls.fetch_add(1, Ordering::SeqCst);
            self.drives.clone().map_err(|e| BridgeError::new("get_drives", e))
        }

        async fn get_memory_usage(&self) -> Result<MemoryStats, BridgeError> {
            let n   = self.memory_calls.fetch_add(1, Ordering::SeqCst);
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);
            if !self.memory_delay.is_zero() {
                tokio::time::sleep(self.memory_delay).await;
            }
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            (self.memory)(n)
        }
    }
}
