//! Shared types used across squarepad.
//! Includes `CollisionPolicy` (how flattened destination names are resolved) and the
//! `Padding` geometry of a squared image.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// What to do when two source files in one class map to the same destination name.
///
/// Output class folders are flat, so `a/x.jpg` and `b/x.jpg` both land on `x.jpg`
/// unless the policy says otherwise.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Flatten and let the last processed file win.
    #[default]
    Overwrite,
    /// Prefix the file name with its sub-path inside the class folder (`a_x.jpg`).
    Prefix,
    /// Fail the run on the second file that maps to an already-written destination.
    Reject,
}

impl std::fmt::Display for CollisionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CollisionPolicy::Overwrite => "overwrite",
            CollisionPolicy::Prefix => "prefix",
            CollisionPolicy::Reject => "reject",
        };
        write!(f, "{}", s)
    }
}

/// Border widths, in pixels, added around resized content to reach a square.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Padding {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}

impl Padding {
    pub fn is_empty(&self) -> bool {
        self.top == 0 && self.bottom == 0 && self.left == 0 && self.right == 0
    }
}
