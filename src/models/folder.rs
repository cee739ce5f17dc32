use crate::util::human::fmt_bytes;
use serde::Serialize;
use std::path::PathBuf;

/// One folder of a size scan.
///
/// `size` and `file_count` cover everything below the folder, however deep;
/// `subfolders` is only filled down to the scan depth.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Folder {
    pub name:       String,
    pub path:       PathBuf,
    pub size:       u64,
    pub file_count: u64,
    pub subfolders: Vec<Folder>,
}

impl Folder {
    pub fn new(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { name, path, ..Default::default() }
    }

    /// The direct child called `name`, created empty if it is not there yet.
    pub fn child_mut(&mut self, name: &str) -> &mut Folder {
        let idx = match self.subfolders.iter().position(|f| f.name == name) {
            Some(i) => i,
            None => {
                self.subfolders.push(Folder::new(self.path.join(name)));
                self.subfolders.len() - 1
            }
        };
        &mut self.subfolders[idx]
    }

    fn add_file(&mut self, size: u64) {
        self.size = self.size.saturating_add(size);
        self.file_count += 1;
    }

    /// Count a file against this folder and each folder on `dirs` below it.
    pub fn record_file<'a, I>(&mut self, dirs: I, size: u64)
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.add_file(size);
        let mut node = self;
        for name in dirs {
            node = node.child_mut(name);
            node.add_file(size);
        }
    }

    /// Largest first, ties by name, at every level.
    pub fn sort_by_size(&mut self) {
        self.subfolders
            .sort_by(|a, b| b.size.cmp(&a.size).then_with(|| a.name.cmp(&b.name)));
        for f in &mut self.subfolders {
            f.sort_by_size();
        }
    }

    /// Pre-order list of the tree with each folder's level (root is 0).
    pub fn flatten(&self) -> Vec<(usize, &Folder)> {
        let mut out = Vec::new();
        self.flatten_into(0, &mut out);
        out
    }

    fn flatten_into<'a>(&'a self, level: usize, out: &mut Vec<(usize, &'a Folder)>) {
        out.push((level, self));
        for f in &self.subfolders {
            f.flatten_into(level + 1, out);
        }
    }

    /// Share of `parent_size` this folder takes, 0 when the parent is empty.
    pub fn share_of(&self, parent_size: u64) -> f64 {
        if parent_size == 0 { return 0.0; }
        (self.size as f64 / parent_size as f64 * 100.0).clamp(0.0, 100.0)
    }

    pub fn size_label(&self) -> String {
        fmt_bytes(self.size)
    }
}
