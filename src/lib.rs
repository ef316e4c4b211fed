#![doc = r#"
squarepad: square a labeled image dataset for classifier training.

Given an input root whose subfolders are class labels, squarepad resizes every image so
its long side equals a target size (aspect ratio preserved, short side truncated), pads
the short side symmetrically with black to an exact square, and writes the result into a
mirrored, flat-per-class output tree. It powers the `squarepad` CLI and can be embedded
in your own Rust applications.

Expected layout
---------------
```text
images/<class-label>/<any-subdir>/<image-file>     (input)
formatted images/<class-label>/<image-file>       (output)
```

Files placed directly inside a class folder are skipped unless
`ProcessingParams::include_shallow` is set.

Quick start: process a dataset
------------------------------
```rust,no_run
use std::path::{Path, PathBuf};
use squarepad::{run_in, CollisionPolicy, ProcessingParams};

fn main() -> squarepad::Result<()> {
    let params = ProcessingParams {
        input_folder: PathBuf::from("images"),
        output_folder: PathBuf::from("classes"),
        target_size: 150,
        collision: CollisionPolicy::Prefix,
        ..Default::default()
    };

    let report = run_in(Path::new("/data/pets"), &params)?;
    println!("classes={} processed={}", report.classes, report.processed);
    Ok(())
}
```

Square a single image in memory
-------------------------------
```rust
use image::{Rgb, RgbImage};

fn main() -> squarepad::Result<()> {
    let img = RgbImage::from_pixel(300, 200, Rgb([255, 255, 255]));
    let squared = squarepad::square_image(&img, 150)?;

    assert_eq!(squared.image.dimensions(), (150, 150));
    assert_eq!((squared.padding.top, squared.padding.bottom), (25, 25));
    Ok(())
}
```

Error handling
--------------
All public functions return `squarepad::Result<T>`; match on `squarepad::Error` to handle
specific cases.

```rust,no_run
use squarepad::{run, Error, ProcessingParams};

fn main() {
    match run(&ProcessingParams::default()) {
        Ok(report) => println!("{report:?}"),
        Err(Error::NotFound { folder }) => eprintln!("no input folder {folder}"),
        Err(other) => eprintln!("failed: {other}"),
    }
}
```

Useful modules
--------------
- [`api`]: high-level entry points.
- [`types`]: `CollisionPolicy` and `Padding`.
- [`io`]: image decode, dataset traversal, encoders.
- [`error`]: crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::ProcessingParams;
pub use error::{Error, Result};
pub use types::{CollisionPolicy, Padding};

// High-level API re-exports
pub use api::{
    BatchReport, SquaredImage, resize_square_and_save, resize_square_and_save_with_quality,
    run, run_in, square_image,
};
