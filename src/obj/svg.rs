use crate::obj::bounds::{PatternTransform, UvBounds};
use crate::obj::parser::load_obj;
use crate::obj::types::{Face, FlatMesh, UvVertex};
use std::fs;
use std::path::{Path, PathBuf};

/// Format a coordinate with 2 decimal places
fn f(n: f64) -> String {
    format!("{:.2}", n)
}

/// Build the `points` attribute for one face, or `None` if it degenerates.
///
/// Indices outside the coordinate range are skipped rather than aborting
/// the document; the upstream flattening tool's output may legitimately
/// contain partial corners. A face left with fewer than 3 points draws
/// nothing.
fn polygon_points(
    face: &Face,
    coords: &[UvVertex],
    transform: &PatternTransform,
    log: &mut Vec<String>,
) -> Option<String> {
    let mut points = Vec::with_capacity(face.tex_indices.len());
    for &idx in &face.tex_indices {
        match coords.get(idx) {
            Some(&c) => {
                let (x, y) = transform.project(c);
                points.push(format!("{},{}", f(x), f(y)));
            }
            None => log.push(format!(
                "Texture index {} out of range ({} coordinates), corner skipped",
                idx,
                coords.len()
            )),
        }
    }

    if points.len() < 3 {
        return None;
    }
    Some(points.join(" "))
}

/// Render the flattened faces of a mesh as an SVG cut pattern.
///
/// Returns `None` when the mesh carries no texture coordinates, in which
/// case there is nothing to project. A mesh whose faces are all degenerate
/// still yields a valid (empty) document.
pub fn obj_to_svg(mesh: &FlatMesh) -> Option<String> {
    let bounds = UvBounds::of(&mesh.tex_coords)?;
    let transform = PatternTransform::new(bounds);

    let width = f(transform.canvas_width());
    let height = f(transform.canvas_height());

    let mut log: Vec<String> = Vec::new();

    let mut svg = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n\
         <g id=\"flattened-mesh\" stroke=\"black\" stroke-width=\"0.5\" fill=\"none\">\n",
        w = width,
        h = height
    );

    for face in &mesh.faces {
        if let Some(points) = polygon_points(face, &mesh.tex_coords, &transform, &mut log) {
            svg.push_str(&format!("  <polygon points=\"{}\" />\n", points));
        }
    }

    svg.push_str("</g>\n</svg>");

    if !log.is_empty() {
        eprintln!("SVG conversion warnings: {:?}", log);
    }

    Some(svg)
}

/// Outcome of a conversion call
#[derive(Debug, Clone, PartialEq)]
pub enum Conversion {
    /// Pattern written to the contained path
    Written(PathBuf),
    /// Mesh had no texture coordinates; nothing was written
    Skipped,
}

/// Convert a flattened OBJ file to an SVG cut pattern.
///
/// The document is built fully in memory and written in a single call, so
/// a failed conversion never leaves a partial file behind. When `output` is
/// `None` the SVG lands next to the input with its extension replaced.
pub fn convert_obj_file(input: &Path, output: Option<&Path>) -> Result<Conversion, String> {
    let mesh = load_obj(input)?;

    let svg = match obj_to_svg(&mesh) {
        Some(svg) => svg,
        None => return Ok(Conversion::Skipped),
    };

    let out_path = match output {
        Some(p) => p.to_path_buf(),
        None => input.with_extension("svg"),
    };

    fs::write(&out_path, &svg)
        .map_err(|e| format!("Failed to write \"{}\": {}", out_path.display(), e))?;

    Ok(Conversion::Written(out_path))
}
