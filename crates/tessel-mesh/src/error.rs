#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// Per-vertex colors were requested together with vertex sharing. A
    /// shared corner can belong to faces of different types, so there is no
    /// single color to give it.
    ColorsRequireAppend,
    /// The grid could produce more vertices than `u32` indices address.
    TooManyVertices { upper_bound: u64 },
}

impl std::fmt::Display for MeshError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeshError::ColorsRequireAppend => {
                write!(f, "vertex colors need the append policy; disable dedup_vertices")
            }
            MeshError::TooManyVertices { upper_bound } => write!(
                f,
                "grid may emit up to {} vertices, more than 32-bit indices allow",
                upper_bound
            ),
        }
    }
}

impl std::error::Error for MeshError {}
