use crate::util::human::{clamp_pct, fmt_bytes};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeKind {
    Hdd,
    Ssd,
    Unknown,
}

impl VolumeKind {
    pub fn label(&self) -> &'static str {
        match self {
            VolumeKind::Hdd     => "HDD",
            VolumeKind::Ssd     => "SSD",
            VolumeKind::Unknown => "---",
        }
    }

    /// Image resource shipped alongside the app for this kind of drive.
    pub fn icon_path(&self) -> &'static str {
        match self {
            VolumeKind::Hdd     => "icons/drives/hdd.png",
            VolumeKind::Ssd     => "icons/drives/ssd.png",
            VolumeKind::Unknown => "icons/drives/default_disk.png",
        }
    }

    /// Terminal stand-in for the icon image.
    pub fn glyph(&self) -> &'static str {
        match self {
            VolumeKind::Hdd     => "◉",
            VolumeKind::Ssd     => "▣",
            VolumeKind::Unknown => "□",
        }
    }
}

/// One storage volume as answered by the backend. Read-only snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Volume {
    pub name:            String,
    pub kind:            VolumeKind,
    pub icon:            String,
    pub mount_point:     String,
    pub file_system:     String,
    pub removable:       bool,
    pub total_space:     u64,
    pub available_space: u64,
}

impl Volume {
    pub fn used_space(&self) -> u64 {
        self.total_space.saturating_sub(self.available_space)
    }

    /// Backend reported more free space than the volume holds.
    pub fn is_inconsistent(&self) -> bool {
        self.available_space > self.total_space
    }

    /// Used share of the volume, 0–100. An empty volume reads as 0%.
    pub fn usage_pct(&self) -> f64 {
        if self.total_space == 0 { return 0.0; }
        clamp_pct(self.used_space() as f64 / self.total_space as f64 * 100.0)
    }

    /// "750.00 GB / 1.00 TB": each side picks its own unit.
    pub fn space_label(&self) -> String {
        format!("{} / {}", fmt_bytes(self.used_space()), fmt_bytes(self.total_space))
    }
}

#[cfg(test)]
pub(crate) fn volume(name: &str, total: u64, avail: u64) -> Volume {
    Volume {
        name:            name.to_string(),
        kind:            VolumeKind::Ssd,
        icon:            VolumeKind::Ssd.icon_path().to_string(),
        mount_point:     format!("/mnt/{}", name.to_lowercase()),
        file_system:     "ext4".to_string(),
        removable:       false,
        total_space:     total,
        available_space: avail,
    }
}
