pub mod folder;
pub mod memory;
pub mod volume;
