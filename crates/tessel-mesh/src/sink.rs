use hashbrown::HashMap;
use tessel_geom::Vec3;

/// A vertex position in half units (`2 * coord`). Every corner the mesher
/// emits is `integer ± 0.5`, so this is always an exact integer triple.
pub type HalfPoint = [i32; 3];

/// Accumulates emitted corners and hands back their vertex index.
///
/// Callers keep the total vertex count within `u32`; the engine checks an
/// upper bound before it starts emitting.
pub trait VertexSink {
    fn emit(&mut self, p: HalfPoint) -> u32;
    fn reset(&mut self);
    fn vertices(&self) -> &[Vec3];

    #[inline]
    fn len(&self) -> usize {
        self.vertices().len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.vertices().is_empty()
    }
}

/// Every face contributes four fresh vertices.
#[derive(Default, Clone, Debug)]
pub struct AppendSink {
    vertices: Vec<Vec3>,
}

impl AppendSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-reserve room for `n_faces` faces.
    #[inline]
    pub fn reserve_faces(&mut self, n_faces: usize) {
        self.vertices.reserve(n_faces * 4);
    }
}

impl VertexSink for AppendSink {
    #[inline]
    fn emit(&mut self, p: HalfPoint) -> u32 {
        let ix = self.vertices.len() as u32;
        self.vertices.push(Vec3::from_half_lattice(p));
        ix
    }

    /// Clears vertices but retains capacity for the next pass.
    #[inline]
    fn reset(&mut self) {
        self.vertices.clear();
    }

    #[inline]
    fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }
}

/// Coincident corners share one vertex.
///
/// Lookups key on the half-unit lattice point rather than the float
/// position, which is the same equality for `integer ± 0.5` coordinates.
#[derive(Default, Clone, Debug)]
pub struct DedupSink {
    vertices: Vec<Vec3>,
    lookup: HashMap<HalfPoint, u32>,
}

impl DedupSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index previously assigned to `p`, if any.
    #[inline]
    pub fn index_of(&self, p: HalfPoint) -> Option<u32> {
        self.lookup.get(&p).copied()
    }
}

impl VertexSink for DedupSink {
    #[inline]
    fn emit(&mut self, p: HalfPoint) -> u32 {
        let vertices = &mut self.vertices;
        *self.lookup.entry(p).or_insert_with(|| {
            let ix = vertices.len() as u32;
            vertices.push(Vec3::from_half_lattice(p));
            ix
        })
    }

    #[inline]
    fn reset(&mut self) {
        self.vertices.clear();
        self.lookup.clear();
    }

    #[inline]
    fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }
}
