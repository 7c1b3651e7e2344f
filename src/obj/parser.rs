use crate::obj::types::{Face, FlatMesh, UvVertex};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Incremental line-oriented OBJ scanner for the UV layer.
///
/// Only `vt` and `f` records are of interest; every other record kind is
/// ignored. Feeding lines one at a time keeps memory flat for large meshes
/// and leaves a natural seam between lines for a future cancellation check.
#[derive(Debug, Default)]
struct ObjUvScanner {
    tex_coords: Vec<UvVertex>,
    faces: Vec<Face>,
}

impl ObjUvScanner {
    fn feed_line(&mut self, line_no: usize, line: &str) -> Result<(), String> {
        let mut fields = line.split_whitespace();
        match fields.next() {
            Some("vt") => self.feed_tex_coord(line_no, line, fields),
            Some("f") => self.feed_face(line_no, fields),
            _ => Ok(()),
        }
    }

    fn feed_tex_coord<'a>(
        &mut self,
        line_no: usize,
        line: &str,
        mut fields: impl Iterator<Item = &'a str>,
    ) -> Result<(), String> {
        // OBJ allows an optional third (w) component; only u and v matter.
        let u = parse_component(fields.next(), line_no, line, "u")?;
        let v = parse_component(fields.next(), line_no, line, "v")?;
        self.tex_coords.push(UvVertex::new(u, v));
        Ok(())
    }

    fn feed_face<'a>(
        &mut self,
        line_no: usize,
        fields: impl Iterator<Item = &'a str>,
    ) -> Result<(), String> {
        let mut tex_indices = Vec::new();
        for corner in fields {
            if let Some(idx) = parse_corner_tex_index(corner, line_no)? {
                tex_indices.push(idx);
            }
        }
        // A face whose corners all lacked texture indices carries no UV
        // information and is not recorded at all.
        if !tex_indices.is_empty() {
            self.faces.push(Face::new(tex_indices));
        }
        Ok(())
    }

    fn finish(self) -> FlatMesh {
        FlatMesh {
            tex_coords: self.tex_coords,
            faces: self.faces,
        }
    }
}

fn parse_component(
    field: Option<&str>,
    line_no: usize,
    line: &str,
    name: &str,
) -> Result<f64, String> {
    let field = field.ok_or_else(|| {
        format!(
            "line {}: texture coordinate missing {} component: \"{}\"",
            line_no,
            name,
            line.trim()
        )
    })?;
    field.parse().map_err(|_| {
        format!(
            "line {}: invalid {} component \"{}\" in texture coordinate \"{}\"",
            line_no,
            name,
            field,
            line.trim()
        )
    })
}

/// Extract the zero-based texture index from a face corner descriptor.
///
/// Corners come as `pos`, `pos/tex`, or `pos/tex/norm`; only the texture
/// field is relevant. `Ok(None)` means the corner has no texture index and
/// is dropped. OBJ indices are one-based.
fn parse_corner_tex_index(corner: &str, line_no: usize) -> Result<Option<usize>, String> {
    let mut parts = corner.split('/');
    let _pos = parts.next();
    let tex = match parts.next() {
        Some(t) if !t.is_empty() => t,
        _ => return Ok(None),
    };
    let one_based: usize = tex.parse().map_err(|_| {
        format!(
            "line {}: invalid texture index \"{}\" in face corner \"{}\"",
            line_no, tex, corner
        )
    })?;
    if one_based == 0 {
        return Err(format!(
            "line {}: texture index 0 in face corner \"{}\" (OBJ indices are 1-based)",
            line_no, corner
        ));
    }
    Ok(Some(one_based - 1))
}

/// Parse an OBJ string into its UV layer
pub fn parse_obj(content: &str) -> Result<FlatMesh, String> {
    let mut scanner = ObjUvScanner::default();
    for (i, line) in content.lines().enumerate() {
        scanner.feed_line(i + 1, line)?;
    }
    Ok(scanner.finish())
}

/// Read and parse an OBJ file line by line
pub fn load_obj(path: &Path) -> Result<FlatMesh, String> {
    let file = File::open(path)
        .map_err(|e| format!("Failed to open \"{}\": {}", path.display(), e))?;
    let reader = BufReader::new(file);

    let mut scanner = ObjUvScanner::default();
    for (i, line) in reader.lines().enumerate() {
        let line =
            line.map_err(|e| format!("Failed to read \"{}\": {}", path.display(), e))?;
        scanner.feed_line(i + 1, &line)?;
    }
    Ok(scanner.finish())
}
