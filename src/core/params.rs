use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::CollisionPolicy;

pub const DEFAULT_INPUT_FOLDER: &str = "images";
pub const DEFAULT_OUTPUT_FOLDER: &str = "formatted images";
pub const DEFAULT_TARGET_SIZE: u32 = 150;
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Processing parameters suitable for config files and CLI overrides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingParams {
    /// Input root, relative to the base directory; its subfolders are class labels
    pub input_folder: PathBuf,
    /// Output root, relative to the base directory
    pub output_folder: PathBuf,
    /// Side length of the square output in pixels
    pub target_size: u32,
    pub collision: CollisionPolicy,
    /// Also process files placed directly inside a class folder
    pub include_shallow: bool,
    pub jpeg_quality: u8,
}

impl Default for ProcessingParams {
    fn default() -> Self {
        Self {
            input_folder: PathBuf::from(DEFAULT_INPUT_FOLDER),
            output_folder: PathBuf::from(DEFAULT_OUTPUT_FOLDER),
            target_size: DEFAULT_TARGET_SIZE,
            collision: CollisionPolicy::Overwrite,
            include_shallow: false,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl ProcessingParams {
    /// Load params from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.target_size == 0 {
            return Err(Error::ZeroSize {
                size: self.target_size,
            });
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(Error::InvalidArgument {
                arg: "jpeg_quality",
                value: self.jpeg_quality.to_string(),
            });
        }
        if self.input_folder.as_os_str().is_empty() {
            return Err(Error::InvalidArgument {
                arg: "input_folder",
                value: String::new(),
            });
        }
        if self.output_folder.as_os_str().is_empty() {
            return Err(Error::InvalidArgument {
                arg: "output_folder",
                value: String::new(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_layout() {
        let params = ProcessingParams::default();
        assert_eq!(params.input_folder, PathBuf::from("images"));
        assert_eq!(params.output_folder, PathBuf::from("formatted images"));
        assert_eq!(params.target_size, 150);
        assert_eq!(params.collision, CollisionPolicy::Overwrite);
        assert!(!params.include_shallow);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let params: ProcessingParams =
            serde_json::from_str(r#"{ "output_folder": "classes", "collision": "prefix" }"#)
                .unwrap();
        assert_eq!(params.output_folder, PathBuf::from("classes"));
        assert_eq!(params.collision, CollisionPolicy::Prefix);
        assert_eq!(params.input_folder, PathBuf::from("images"));
        assert_eq!(params.target_size, 150);
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.json");
        std::fs::write(&path, r#"{ "target_size": 64, "include_shallow": true }"#).unwrap();

        let params = ProcessingParams::from_json_file(&path).unwrap();
        assert_eq!(params.target_size, 64);
        assert!(params.include_shallow);
    }

    #[test]
    fn test_bad_json_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        match ProcessingParams::from_json_file(&path) {
            Err(Error::Config { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_size_rejected() {
        let params = ProcessingParams {
            target_size: 0,
            ..Default::default()
        };
        assert!(matches!(params.validate(), Err(Error::ZeroSize { size: 0 })));
    }

    #[test]
    fn test_quality_out_of_range_rejected() {
        let params = ProcessingParams {
            jpeg_quality: 0,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(Error::InvalidArgument {
                arg: "jpeg_quality",
                ..
            })
        ));
    }
}
