use crate::util::human::clamp_pct;
use serde::{Deserialize, Serialize};

/// One memory reading, both values in megabytes. Superseded by the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MemoryStats {
    pub used_memory: u64,
    pub max_memory:  u64,
}

impl MemoryStats {
    pub fn usage_pct(&self) -> f64 {
        if self.max_memory == 0 { return 0.0; }
        clamp_pct(self.used_memory as f64 / self.max_memory as f64 * 100.0)
    }

    pub fn is_overcommitted(&self) -> bool {
        self.used_memory > self.max_memory
    }

    /// Raw megabyte figures; the byte formatter is deliberately not used here.
    pub fn label(&self) -> String {
        format!("Memory Used: {} MB / {} MB", self.used_memory, self.max_memory)
    }
}
