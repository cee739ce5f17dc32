use crate::error::BridgeError;
use crate::models::memory::MemoryStats;
use sysinfo::System;

const BYTES_PER_MB: u64 = 1024 * 1024;

pub fn read_memory() -> Result<MemoryStats, BridgeError> {
    let mut sys = System::new();
    sys.refresh_memory();
    to_stats(sys.used_memory(), sys.total_memory())
}

fn to_stats(used_bytes: u64, total_bytes: u64) -> Result<MemoryStats, BridgeError> {
    if total_bytes == 0 {
        return Err(BridgeError::new("get_memory_usage", "total memory reported as 0"));
    }
    Ok(MemoryStats {
        used_memory: used_bytes / BYTES_PER_MB,
        max_memory:  total_bytes / BYTES_PER_MB,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_become_megabytes() {
        let m = to_stats(4096 * BYTES_PER_MB, 8192 * BYTES_PER_MB).unwrap();
        assert_eq!(m, MemoryStats { used_memory: 4096, max_memory: 8192 });
    }

    #[test]
    fn unreadable_total_is_an_error() {
        assert!(to_stats(0, 0).is_err());
    }
}
