//! Input tree discovery and output path mirroring.

use std::path::{Path, PathBuf};

/// Supported image extensions (matched case-insensitively)
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// The three dataset splits expected under the input root
pub const SPLIT_NAMES: &[&str] = &["train", "test", "val"];

/// One image discovered in the dataset tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitImage {
    /// Absolute (or root-relative) path to the input file
    pub input_path: PathBuf,

    /// Path relative to the dataset root: `<split>/<class>/<file>`
    pub relative_path: PathBuf,
}

/// Discover every eligible image under `<root>/{train,test,val}/<class>/`.
///
/// Each split must exist and contain one subdirectory per class; files
/// directly inside a split directory are ignored, as are files with
/// unsupported extensions. Results are sorted for deterministic ordering.
pub fn collect_split_images(input_root: &Path) -> Result<Vec<SplitImage>, String> {
    if !input_root.is_dir() {
        return Err(format!(
            "Input root is not a directory: {}",
            input_root.display()
        ));
    }

    let mut images = Vec::new();

    for split in SPLIT_NAMES {
        let split_dir = input_root.join(split);
        if !split_dir.is_dir() {
            return Err(format!(
                "Missing split directory '{}' under {}",
                split,
                input_root.display()
            ));
        }

        for class_entry in read_dir_sorted(&split_dir)? {
            if !class_entry.is_dir() {
                continue;
            }
            let class_name = match class_entry.file_name() {
                Some(name) => name.to_os_string(),
                None => continue,
            };

            for file in read_dir_sorted(&class_entry)? {
                if !file.is_file() || !has_supported_extension(&file) {
                    continue;
                }
                let file_name = match file.file_name() {
                    Some(name) => name.to_os_string(),
                    None => continue,
                };
                images.push(SplitImage {
                    relative_path: Path::new(split).join(&class_name).join(file_name),
                    input_path: file,
                });
            }
        }
    }

    images.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    Ok(images)
}

/// Mirror an input image's position under the output root.
pub fn mirrored_output_path(output_root: &Path, image: &SplitImage) -> PathBuf {
    output_root.join(&image.relative_path)
}

/// Create a directory (and its parents) if absent.
///
/// Safe under concurrent callers: a directory created by a sibling worker
/// between check and creation is not an error.
pub fn ensure_output_dir(dir: &Path) -> Result<(), String> {
    std::fs::create_dir_all(dir)
        .map_err(|e| format!("Failed to create directory {}: {}", dir.display(), e))
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| SUPPORTED_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn read_dir_sorted(dir: &Path) -> Result<Vec<PathBuf>, String> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| format!("Failed to read directory {}: {}", dir.display(), e))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| format!("Error reading directory entry: {}", e))?;
        paths.push(entry.path());
    }
    paths.sort();
    Ok(paths)
}
