//! OBJ UV to SVG conversion module
//!
//! This module parses the texture-coordinate layer of a flattened Wavefront
//! OBJ file and renders it as an SVG cut pattern.

pub mod bounds;
pub mod parser;
pub mod svg;
pub mod types;

// Re-export main public API
pub use parser::{load_obj, parse_obj};
pub use svg::{Conversion, convert_obj_file, obj_to_svg};
pub use types::*;
