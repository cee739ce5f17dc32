use crate::models::volume::{Volume, VolumeKind};
use sysinfo::{DiskKind, Disks};

/// Which volumes the backend should report at all.
#[derive(Debug, Clone, Default)]
pub struct VolumeFilter {
    pub hide_removable: bool,
    /// Mount-point prefixes to leave out, e.g. "/snap".
    pub exclude: Vec<String>,
}

impl VolumeFilter {
    pub fn allows(&self, v: &Volume) -> bool {
        if self.hide_removable && v.removable { return false; }
        !self.exclude.iter().any(|p| v.mount_point.starts_with(p.as_str()))
    }
}

fn kind_of(kind: DiskKind) -> VolumeKind {
    match kind {
        DiskKind::HDD => VolumeKind::Hdd,
        DiskKind::SSD => VolumeKind::Ssd,
        _             => VolumeKind::Unknown,
    }
}

/// Enumerate mounted volumes in the order the OS lists them.
pub fn read_volumes(filter: &VolumeFilter) -> Vec<Volume> {
    let disks = Disks::new_with_refreshed_list();
    disks
        .iter()
        .map(|disk| {
            let kind = kind_of(disk.kind());
            Volume {
                name:            disk.name().to_string_lossy().into_owned(),
                kind,
                icon:            kind.icon_path().to_string(),
                mount_point:     disk.mount_point().to_string_lossy().into_owned(),
                file_system:     disk.file_system().to_string_lossy().into_owned(),
                removable:       disk.is_removable(),
                total_space:     disk.total_space(),
                available_space: disk.available_space(),
            }
        })
        .filter(|v| filter.allows(v))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::volume::volume;

    #[test]
    fn default_filter_keeps_everything() {
        let f = VolumeFilter::default();
        let mut v = volume("usb", 10, 5);
        v.removable = true;
        assert!(f.allows(&v));
    }

    #[test]
    fn removable_and_excluded_prefixes_are_dropped() {
        let f = VolumeFilter { hide_removable: true, exclude: vec!["/snap".into()] };
        let mut usb = volume("usb", 10, 5);
        usb.removable = true;
        let mut snap = volume("core", 10, 5);
        snap.mount_point = "/snap/core/123".into();
        let root = volume("root", 10, 5);
        assert!(!f.allows(&usb));
        assert!(!f.allows(&snap));
        assert!(f.allows(&root));
    }
}
