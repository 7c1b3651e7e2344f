//! # flatten-tools
//!
//! A Rust library for fabric flattening workflows: converting the UV layer
//! of a flattened 3D mesh into an SVG cut pattern.
//!
//! ## Features
//!
//! - **OBJ to SVG**: Project the texture coordinates of a flattened OBJ file
//!   (as produced by a boundary-first-flattening tool) into a 2D vector
//!   drawing, one polygon per face, styled as a cut pattern outline
//!
//! ## Example - File Conversion
//!
//! ```rust,ignore
//! use flatten_tools::obj::{Conversion, convert_obj_file};
//! use std::path::Path;
//!
//! match convert_obj_file(Path::new("model_flattened.obj"), None).unwrap() {
//!     Conversion::Written(path) => println!("SVG exported: {}", path.display()),
//!     Conversion::Skipped => println!("No texture coordinates found"),
//! }
//! ```
//!
//! ## Example - In-Memory Conversion
//!
//! ```rust,ignore
//! use flatten_tools::obj::{obj_to_svg, parse_obj};
//!
//! let obj_content = std::fs::read_to_string("model_flattened.obj").unwrap();
//! let mesh = parse_obj(&obj_content).unwrap();
//! if let Some(svg) = obj_to_svg(&mesh) {
//!     std::fs::write("pattern.svg", svg).unwrap();
//! }
//! ```

pub mod obj;

// Re-export commonly used items
pub use obj::{Conversion, FlatMesh, convert_obj_file, load_obj, obj_to_svg, parse_obj};
