/// 2D texture coordinate in normalized flattening space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvVertex {
    pub u: f64,
    pub v: f64,
}

impl UvVertex {
    pub fn new(u: f64, v: f64) -> Self {
        Self { u, v }
    }
}

/// Mesh face, reduced to the texture-coordinate indices of its corners.
///
/// Indices are zero-based (the OBJ source is one-based). Corners without a
/// texture index are dropped at parse time, so a face may carry fewer
/// corners than it had in the file.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    pub tex_indices: Vec<usize>,
}

impl Face {
    pub fn new(tex_indices: Vec<usize>) -> Self {
        Self { tex_indices }
    }
}

/// Parsed flattened mesh: the UV layer of an OBJ file
#[derive(Debug, Clone, PartialEq)]
pub struct FlatMesh {
    pub tex_coords: Vec<UvVertex>,
    pub faces: Vec<Face>,
}
