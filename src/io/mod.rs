//! I/O layer: colour image decoding (`reader`), dataset traversal (`walker`), and
//! format-by-extension encoders (`writers`).
pub mod reader;
pub use reader::load_color_image;

pub mod walker;
pub use walker::{ClassFolder, ClassImages, collect_class_images, list_class_folders};

pub mod writers;
pub use writers::write_image;
