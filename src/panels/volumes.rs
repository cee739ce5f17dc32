use crate::collectors::Backend;
use crate::error::BridgeError;
use crate::models::volume::Volume;
use crate::surface::{Container, Node, Surface, VolumeEntry};
use log::{info, warn};

pub fn entry_for(v: &Volume) -> VolumeEntry {
    VolumeEntry {
        name:         v.name.clone(),
        kind:         v.kind,
        mount_point:  v.mount_point.clone(),
        file_system:  v.file_system.clone(),
        fill:         v.usage_pct(),
        label:        v.space_label(),
        inconsistent: v.is_inconsistent(),
    }
}

/// Fill the volume panel once.
///
/// "All Volumes" goes up before the request, so it stays even when the
/// backend fails. Returns how many volume entries were appended.
pub async fn load(bridge: &dyn Backend, surface: &dyn Surface) -> Result<usize, BridgeError> {
    surface.append(Container::Volumes, Node::AllVolumes);

    let volumes = bridge.get_drives().await?;
    for v in &volumes {
        if v.is_inconsistent() {
            warn!(
                "{}: backend reports {} bytes free of {} total",
                v.name, v.available_space, v.total_space
            );
        }
        surface.append(Container::Volumes, Node::Volume(entry_for(v)));
    }
    info!("volume panel loaded with {} volume(s)", volumes.len());
    Ok(volumes.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collectors::testing::ScriptedBackend;
    use crate::models::volume::volume;
    use crate::surface::testing::RecordingSurface;
    use crate::util::logging::capture;

    #[tokio::test]
    async fn one_entry_per_volume_in_backend_order() {
        let backend = ScriptedBackend::new(Ok(vec![
            volume("Disk1", 1_000_000_000_000, 250_000_000_000),
            volume("Alpha", 2_000, 1_000),
        ]));
        let surface = RecordingSurface::default();

        let n = load(&backend, &surface).await.unwrap();
        assert_eq!(n, 2);

        let view = surface.snapshot();
        let titles: Vec<&str> = view.volumes.iter().map(|(_, n)| n.title()).collect();
        assert_eq!(titles, ["All Volumes", "Disk1", "Alpha"]);

        match &view.volumes[1].1 {
            Node::Volume(e) => {
                assert_eq!(e.fill, 75.0);
                assert_eq!(e.label, "750.00 GB / 1.00 TB");
            }
            other => panic!("unexpected node {:?}", other),
        }
    }

    #[tokio::test]
    async fn empty_list_leaves_only_all_volumes() {
        let backend = ScriptedBackend::new(Ok(Vec::new()));
        let surface = RecordingSurface::default();

        assert_eq!(load(&backend, &surface).await.unwrap(), 0);
        let view = surface.snapshot();
        assert!(view.has_all_volumes());
        assert_eq!(view.volume_count(), 0);
        assert_eq!(view.volumes.len(), 1);
    }

    #[tokio::test]
    async fn failed_request_keeps_all_volumes_and_nothing_else() {
        capture::start();
        let backend = ScriptedBackend::new(Err("enumeration failed".into()));
        let surface = RecordingSurface::default();

        let err = load(&backend, &surface).await.unwrap_err();
        assert_eq!(err.op, "get_drives");
        // Reporting the failure is left to the caller.
        assert_eq!(capture::errors(), 0);
        let view = surface.snapshot();
        assert!(view.has_all_volumes());
        assert_eq!(view.volume_count(), 0);
    }

    #[tokio::test]
    async fn zero_capacity_volume_renders_empty_bar() {
        let backend = ScriptedBackend::new(Ok(vec![volume("ghost", 0, 0)]));
        let surface = RecordingSurface::default();
        load(&backend, &surface).await.unwrap();

        match &surface.snapshot().volumes[1].1 {
            Node::Volume(e) => {
                assert_eq!(e.fill, 0.0);
                assert_eq!(e.label, "0 B / 0 B");
            }
            other => panic!("unexpected node {:?}", other),
        }
    }
}
