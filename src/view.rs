use crate::surface::{Container, Node, NodeId, SurfaceUpdate};
use log::{debug, info};

/// What is currently on screen, rebuilt only from surface updates.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub volumes: Vec<(NodeId, Node)>,
    pub memory:  Vec<(NodeId, Node)>,
    /// Last acknowledgment shown in the status line.
    pub status:  Option<String>,
}

impl ViewState {
    pub fn apply(&mut self, update: SurfaceUpdate) {
        match update {
            SurfaceUpdate::Append { container, id, node } => match container {
                Container::Volumes => self.volumes.push((id, node)),
                Container::Memory  => self.memory.push((id, node)),
            },
            SurfaceUpdate::SetFill { id, pct } => match self.node_mut(id) {
                Some(Node::Volume(e))         => e.fill = pct,
                Some(Node::Gauge { fill, .. }) => *fill = pct,
                Some(Node::AllVolumes) | None => debug!("set_fill on {:?} ignored", id),
            },
            SurfaceUpdate::SetText { id, text } => match self.node_mut(id) {
                Some(Node::Volume(e))          => e.label = text,
                Some(Node::Gauge { label, .. }) => *label = text,
                Some(Node::AllVolumes) | None  => debug!("set_text on {:?} ignored", id),
            },
        }
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.volumes
            .iter_mut()
            .chain(self.memory.iter_mut())
            .find(|(nid, _)| *nid == id)
            .map(|(_, node)| node)
    }

    /// Number of per-volume entries, not counting "All Volumes".
    pub fn volume_count(&self) -> usize {
        self.volumes.iter().filter(|(_, n)| matches!(n, Node::Volume(_))).count()
    }

    #[cfg(test)]
    pub fn has_all_volumes(&self) -> bool {
        self.volumes.iter().any(|(_, n)| *n == Node::AllVolumes)
    }

    /// Fill and label of the memory gauge, once it has been mounted.
    pub fn gauge(&self) -> Option<(f64, &str)> {
        self.memory.iter().find_map(|(_, n)| match n {
            Node::Gauge { fill, label } => Some((*fill, label.as_str())),
            _ => None,
        })
    }

    /// Acknowledge a selection in the volume list. Nothing else changes.
    pub fn select(&mut self, index: usize) -> Option<&str> {
        let (_, node) = self.volumes.get(index)?;
        let ack = format!("Selected {}", node.title());
        info!("{}", ack);
        self.status = Some(ack);
        self.status.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::volume::VolumeKind;
    use crate::surface::VolumeEntry;

    fn entry(name: &str) -> Node {
        Node::Volume(VolumeEntry {
            name:         name.into(),
            kind:         VolumeKind::Hdd,
            mount_point:  "/".into(),
            file_system:  "ext4".into(),
            fill:         10.0,
            label:        "1 B / 10 B".into(),
            inconsistent: false,
        })
    }

    #[test]
    fn updates_land_in_their_container() {
        let mut v = ViewState::default();
        v.apply(SurfaceUpdate::Append { container: Container::Volumes, id: NodeId(0), node: Node::AllVolumes });
        v.apply(SurfaceUpdate::Append { container: Container::Volumes, id: NodeId(1), node: entry("sda") });
        v.apply(SurfaceUpdate::Append {
            container: Container::Memory,
            id: NodeId(2),
            node: Node::Gauge { fill: 0.0, label: String::new() },
        });
        v.apply(SurfaceUpdate::SetFill { id: NodeId(2), pct: 50.0 });
        v.apply(SurfaceUpdate::SetText { id: NodeId(2), text: "half".into() });

        assert!(v.has_all_volumes());
        assert_eq!(v.volume_count(), 1);
        assert_eq!(v.gauge(), Some((50.0, "half")));
    }

    #[test]
    fn updates_for_unknown_nodes_are_ignored() {
        let mut v = ViewState::default();
        v.apply(SurfaceUpdate::SetFill { id: NodeId(9), pct: 1.0 });
        assert!(v.gauge().is_none());
    }

    #[test]
    fn selecting_acknowledges_by_name() {
        let mut v = ViewState::default();
        v.apply(SurfaceUpdate::Append { container: Container::Volumes, id: NodeId(0), node: Node::AllVolumes });
        v.apply(SurfaceUpdate::Append { container: Container::Volumes, id: NodeId(1), node: entry("Disk1") });
        assert_eq!(v.select(1), Some("Selected Disk1"));
        assert_eq!(v.select(0), Some("Selected All Volumes"));
        assert_eq!(v.select(7), None);
        assert_eq!(v.status.as_deref(), Some("Selected All Volumes"));
    }
}
