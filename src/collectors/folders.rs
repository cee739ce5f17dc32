use crate::error::ScanError;
use crate::models::folder::Folder;
use log::{debug, warn};
use std::fs;
use std::path::{Component, Path};
use std::time::Instant;
use walkdir::WalkDir;

pub const DEFAULT_DEPTH: usize = 2;

/// Result of one folder scan.
#[derive(Debug)]
pub struct ScanReport {
    pub root:    Folder,
    /// Entries that could not be read and were left out of the totals.
    pub skipped: usize,
}

/// Size every folder under `root`, expanding `depth` levels of subfolders.
///
/// Files deeper than `depth` still count toward the folder they sit under
/// at the last expanded level. Symlinks are not followed or counted.
pub fn scan_folder(root: &Path, depth: usize) -> Result<ScanReport, ScanError> {
    let unreadable = |source| ScanError::Unreadable { path: root.to_path_buf(), source };
    let meta = fs::metadata(root).map_err(unreadable)?;
    if !meta.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }
    fs::read_dir(root).map_err(unreadable)?;

    let start = Instant::now();
    let mut tree = Folder::new(root.to_path_buf());
    let mut skipped = 0;

    for entry in WalkDir::new(root).follow_links(false).min_depth(1) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!("skipping during scan of {}: {}", root.display(), e);
                skipped += 1;
                continue;
            }
        };
        let Ok(rel) = entry.path().strip_prefix(root) else { continue };
        let mut dirs = rel
            .components()
            .filter_map(|c| match c {
                Component::Normal(n) => Some(n.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect::<Vec<_>>();

        let ft = entry.file_type();
        if ft.is_dir() {
            // Empty folders still show up within the expanded levels.
            if entry.depth() <= depth {
                let mut node = &mut tree;
                for name in &dirs {
                    node = node.child_mut(name);
                }
            }
            continue;
        }
        if !ft.is_file() {
            continue;
        }

        let size = match entry.metadata() {
            Ok(m) => m.len(),
            Err(e) => {
                warn!("skipping {}: {}", entry.path().display(), e);
                skipped += 1;
                continue;
            }
        };
        dirs.pop();
        dirs.truncate(depth);
        tree.record_file(dirs.iter().map(String::as_str), size);
    }

    tree.sort_by_size();
    debug!(
        "scanned {} ({} files, {} skipped) in {:.1?}",
        root.display(),
        tree.file_count,
        skipped,
        start.elapsed()
    );
    Ok(ScanReport { root: tree, skipped })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{create_dir_all, write};
    use tempfile::tempdir;

    fn fixture() -> tempfile::TempDir {
        let dir = tempdir().unwrap();
        let root = dir.path();
        create_dir_all(root.join("a/deep/deeper")).unwrap();
        create_dir_all(root.join("b")).unwrap();
        create_dir_all(root.join("empty")).unwrap();
        write(root.join("a/x.bin"), vec![0u8; 100]).unwrap();
        write(root.join("a/deep/y.bin"), vec![0u8; 50]).unwrap();
        write(root.join("a/deep/deeper/z.bin"), vec![0u8; 25]).unwrap();
        write(root.join("b/z.txt"), vec![0u8; 10]).unwrap();
        write(root.join("top.txt"), vec![0u8; 1]).unwrap();
        dir
    }

    fn names(f: &Folder) -> Vec<&str> {
        f.subfolders.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn totals_cover_the_whole_tree() {
        let dir = fixture();
        let report = scan_folder(dir.path(), DEFAULT_DEPTH).unwrap();
        let root = &report.root;

        assert_eq!(report.skipped, 0);
        assert_eq!((root.size, root.file_count), (186, 5));
        assert_eq!(names(root), ["a", "b", "empty"]);

        let a = &root.subfolders[0];
        assert_eq!((a.size, a.file_count), (175, 3));
        assert_eq!(names(a), ["deep"]);
        // "deeper" is past the depth limit but its file is counted in "deep".
        assert_eq!(a.subfolders[0].size, 75);
        assert!(a.subfolders[0].subfolders.is_empty());
        assert_eq!(root.subfolders[2].size, 0);
    }

    #[test]
    fn depth_zero_reports_only_the_root() {
        let dir = fixture();
        let report = scan_folder(dir.path(), 0).unwrap();
        assert_eq!(report.root.size, 186);
        assert!(report.root.subfolders.is_empty());
    }

    #[test]
    fn depth_one_stops_at_direct_children() {
        let dir = fixture();
        let report = scan_folder(dir.path(), 1).unwrap();
        assert_eq!(names(&report.root), ["a", "b", "empty"]);
        assert!(report.root.subfolders.iter().all(|f| f.subfolders.is_empty()));
        assert_eq!(report.root.subfolders[0].size, 175);
    }

    #[test]
    fn a_file_is_not_a_scan_root() {
        let dir = fixture();
        let err = scan_folder(&dir.path().join("top.txt"), 2).unwrap_err();
        assert!(matches!(err, ScanError::NotADirectory(_)));
    }

    #[test]
    fn a_missing_root_is_unreadable() {
        let dir = tempdir().unwrap();
        let err = scan_folder(&dir.path().join("gone"), 2).unwrap_err();
        assert!(matches!(err, ScanError::Unreadable { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_are_not_followed() {
        let dir = fixture();
        std::os::unix::fs::symlink(dir.path().join("a"), dir.path().join("link")).unwrap();
        let report = scan_folder(dir.path(), 2).unwrap();
        assert_eq!(report.root.size, 186);
        assert!(!names(&report.root).contains(&"link"));
    }
}
