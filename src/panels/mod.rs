pub mod memory_gauge;
pub mod volumes;
