//! Dataset traversal: class folders under the input root, image files under each
//! class, and the flat output paths they map to.
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::types::CollisionPolicy;

/// An immediate subdirectory of the input root. Its name is the class label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassFolder {
    pub label: String,
    pub path: PathBuf,
}

/// Image candidates found under one class folder
#[derive(Debug, Clone, Default)]
pub struct ClassImages {
    pub images: Vec<PathBuf>,
    /// Files directly inside the class folder that were left out
    pub skipped_shallow: usize,
}

/// Return the immediate subdirectories of `input_root`, in enumeration order.
pub fn list_class_folders(input_root: &Path) -> Result<Vec<ClassFolder>> {
    let mut classes = Vec::new();
    for entry in fs::read_dir(input_root)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            let label = entry.file_name().to_string_lossy().into_owned();
            classes.push(ClassFolder { label, path });
        } else {
            debug!("Ignoring non-directory in input root: {:?}", path);
        }
    }
    Ok(classes)
}

/// Walk a class folder for image files.
///
/// Only files inside a subdirectory of the class folder (depth >= 2) are returned
/// unless `include_shallow` is set; files sitting directly in the class folder are
/// counted as skipped.
pub fn collect_class_images(class_dir: &Path, include_shallow: bool) -> Result<ClassImages> {
    let mut found = ClassImages::default();
    // Symlinked directories are not descended into; symlinks to files count as files.
    for entry in WalkDir::new(class_dir).min_depth(1).follow_links(false) {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.path().is_file() {
            continue;
        }
        if entry.depth() == 1 && !include_shallow {
            debug!("Skipping file directly under class folder: {:?}", entry.path());
            found.skipped_shallow += 1;
            continue;
        }
        found.images.push(entry.into_path());
    }
    Ok(found)
}

/// Output path for `image` inside `output_class_dir`.
///
/// Sub-directory structure is flattened. With [`CollisionPolicy::Prefix`] the relative
/// sub-path is folded into the file name (`a/b/x.jpg` becomes `a_b_x.jpg`).
pub fn destination_for(
    output_class_dir: &Path,
    class_dir: &Path,
    image: &Path,
    policy: CollisionPolicy,
) -> Result<PathBuf> {
    let file_name = image.file_name().ok_or_else(|| Error::InvalidArgument {
        arg: "image",
        value: image.display().to_string(),
    })?;

    match policy {
        CollisionPolicy::Overwrite | CollisionPolicy::Reject => {
            Ok(output_class_dir.join(file_name))
        }
        CollisionPolicy::Prefix => {
            let relative = image.strip_prefix(class_dir).unwrap_or(image);
            let joined = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("_");
            Ok(output_class_dir.join(joined))
        }
    }
}

/// Create `path` and any missing parents. An existing directory is fine; any other
/// failure is returned.
pub fn ensure_output_dir(path: &Path) -> Result<()> {
    match fs::create_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
        Err(source) => Err(Error::CreateDir {
            path: path.to_path_buf(),
            source,
        }),
    }
}
