pub mod dashboard;
pub mod footer;
pub mod memory_bar;
pub mod theme;
pub mod volume_list;
