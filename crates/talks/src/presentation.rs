use std::path::{Component, Path, PathBuf};

use dorset_talks_core::{is_directory, path_exists};
use log::trace;

/// Answers whether a talk's slides can be offered for download
pub trait PresentationFiles: Send + Sync {
    fn document_root(&self) -> &Path;
    /// `relative_path` is the talk's stored pdf path, e.g. `/slides/2023/june/slides.pdf`
    fn has_presentation(&self, relative_path: &str) -> bool;
}

pub struct DocumentRoot {
    root: PathBuf,
}

impl DocumentRoot {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolves a stored path under the root, refusing anything that climbs out of it
    pub fn resolve(&self, relative_path: &str) -> Option<PathBuf> {
        let relative = Path::new(relative_path.trim_start_matches('/'));
        if relative.as_os_str().is_empty() {
            return None;
        }
        if !relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return None;
        }
        Some(self.root.join(relative))
    }
}

impl PresentationFiles for DocumentRoot {
    fn document_root(&self) -> &Path {
        &self.root
    }

    fn has_presentation(&self, relative_path: &str) -> bool {
        match self.resolve(relative_path) {
            Some(path) => {
                let found = path_exists(&path) && !is_directory(&path);
                trace!("presentation {} found: {}", path.display(), found);
                found
            }
            None => false,
        }
    }
}
