//! The update interface panels draw through.
//!
//! Panels never touch the terminal. They append nodes to their own
//! container and later adjust fill or text on the nodes they created;
//! the UI loop applies those updates to the [`ViewState`](crate::view::ViewState)
//! it owns and redraws.

use crate::models::volume::VolumeKind;
use log::debug;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::mpsc::UnboundedSender;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u64);

/// Disjoint screen regions, one per panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    Volumes,
    Memory,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VolumeEntry {
    pub name:         String,
    pub kind:         VolumeKind,
    pub mount_point:  String,
    pub file_system:  String,
    pub fill:         f64,
    pub label:        String,
    pub inconsistent: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Static entry heading the volume list; carries no data.
    AllVolumes,
    Volume(VolumeEntry),
    Gauge { fill: f64, label: String },
}

impl Node {
    pub fn title(&self) -> &str {
        match self {
            Node::AllVolumes     => "All Volumes",
            Node::Volume(e)      => &e.name,
            Node::Gauge { .. }   => "Memory",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceUpdate {
    Append  { container: Container, id: NodeId, node: Node },
    SetFill { id: NodeId, pct: f64 },
    SetText { id: NodeId, text: String },
}

pub trait Surface: Send + Sync {
    fn append(&self, container: Container, node: Node) -> NodeId;
    fn set_fill(&self, id: NodeId, pct: f64);
    fn set_text(&self, id: NodeId, text: String);
}

/// Production surface: forwards every update to the UI loop.
pub struct ChannelSurface {
    next_id: AtomicU64,
    tx:      UnboundedSender<SurfaceUpdate>,
}

impl ChannelSurface {
    pub fn new(tx: UnboundedSender<SurfaceUpdate>) -> Self {
        Self { next_id: AtomicU64::new(0), tx }
    }

    fn send(&self, update: SurfaceUpdate) {
        // A closed channel only means the UI is shutting down.
        if self.tx.send(update).is_err() {
            debug!("surface update dropped: UI loop gone");
        }
    }
}

impl Surface for ChannelSurface {
    fn append(&self, container: Container, node: Node) -> NodeId {
        let id = NodeId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.send(SurfaceUpdate::Append { container, id, node });
        id
    }

    fn set_fill(&self, id: NodeId, pct: f64) {
        self.send(SurfaceUpdate::SetFill { id, pct });
    }

    fn set_text(&self, id: NodeId, text: String) {
        self.send(SurfaceUpdate::SetText { id, text });
    }
}
