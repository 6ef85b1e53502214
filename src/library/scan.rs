use rand::Rng;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

use super::is_supported_extension;

/// 递归扫描媒体文件
///
/// Each root may be a single file or a directory; directories are walked
/// recursively and files are kept when their extension is in the supported
/// set. Unreadable entries are logged and skipped, never fatal. Order is
/// whatever the walk yields; callers wanting a random slideshow order run
/// the result through [`shuffle_in_place`].
pub fn find_media_files<P: AsRef<Path>>(roots: &[P]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for root in roots {
        let root = root.as_ref();
        for entry in WalkDir::new(root).into_iter() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("[library] skipping unreadable entry under {:?}: {}", root, e);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            let ext = path
                .extension()
                .and_then(|value| value.to_str())
                .unwrap_or("")
                .to_ascii_lowercase();
            if is_supported_extension(&ext) {
                files.push(path.to_path_buf());
            }
        }
    }

    info!("[library] discovered {} media files", files.len());
    files
}

/// Fisher–Yates shuffle, in place.
pub fn shuffle_in_place<T>(items: &mut [T]) {
    let mut rng = rand::thread_rng();
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
