use maquette_geom::{Aabb, Vec3};

/// Which texture slot an index range binds to. Full-height geometry uses a
/// single `Sides` group; raised blocks carry all three.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum MaterialSlot {
    Bottom = 0,
    Top = 1,
    Sides = 2,
}

/// A contiguous index range rendered with one material slot.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MaterialGroup {
    pub slot: MaterialSlot,
    pub start: usize,
    pub count: usize,
}

/// CPU-side mesh buffers: flat position/normal/uv attribute arrays plus a
/// triangle index list and material group ranges.
#[derive(Default, Clone)]
pub struct MeshBuild {
    pub pos: Vec<f32>,
    pub norm: Vec<f32>,
    pub uv: Vec<f32>,
    pub idx: Vec<u16>,
    pub groups: Vec<MaterialGroup>,
}

impl MeshBuild {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos.len() / 3
    }

    #[inline]
    pub fn index_count(&self) -> usize {
        self.idx.len()
    }

    /// Pre-reserve capacity for approximately `n_quads` quads worth of data.
    #[inline]
    pub fn reserve_quads(&mut self, n_quads: usize) {
        self.pos.reserve(n_quads * 4 * 3);
        self.norm.reserve(n_quads * 4 * 3);
        self.uv.reserve(n_quads * 4 * 2);
        self.idx.reserve(n_quads * 6);
    }

    /// Opens a material group at the current end of the index list.
    /// Close it with [`MeshBuild::end_group`] after emitting the faces.
    pub fn begin_group(&mut self, slot: MaterialSlot) {
        self.groups.push(MaterialGroup {
            slot,
            start: self.idx.len(),
            count: 0,
        });
    }

    pub fn end_group(&mut self) {
        if let Some(g) = self.groups.last_mut() {
            g.count = self.idx.len() - g.start;
        }
    }

    /// Appends one vertex and returns its index.
    #[inline]
    pub fn push_vertex(&mut self, p: Vec3, n: Vec3, uv: (f32, f32)) -> u16 {
        let i = self.vertex_count() as u16;
        self.pos.extend_from_slice(&[p.x, p.y, p.z]);
        self.norm.extend_from_slice(&[n.x, n.y, n.z]);
        self.uv.extend_from_slice(&[uv.0, uv.1]);
        i
    }

    #[inline]
    pub fn push_tri(&mut self, a: u16, b: u16, c: u16) {
        self.idx.extend_from_slice(&[a, b, c]);
    }

    /// Appends a quad (two triangles) with per-vertex UVs. `uvs[i]` belongs
    /// to `vs[i]`. If the corner order disagrees with the supplied normal,
    /// corners 1 and 3 are swapped (UVs follow) so the emitted winding
    /// always faces along `n`.
    pub fn add_quad_uv(&mut self, mut vs: [Vec3; 4], mut uvs: [(f32, f32); 4], n: Vec3) {
        let e1 = vs[1] - vs[0];
        let e2 = vs[2] - vs[0];
        if e1.cross(e2).dot(n) < 0.0 {
            vs.swap(1, 3);
            uvs.swap(1, 3);
        }
        let base = self.push_vertex(vs[0], n, uvs[0]);
        self.push_vertex(vs[1], n, uvs[1]);
        self.push_vertex(vs[2], n, uvs[2]);
        self.push_vertex(vs[3], n, uvs[3]);
        self.push_tri(base, base + 1, base + 2);
        self.push_tri(base, base + 2, base + 3);
    }

    /// World-space bounds of all positions; `None` for an empty mesh.
    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(
            self.pos
                .chunks_exact(3)
                .map(|c| Vec3::new(c[0], c[1], c[2])),
        )
    }
}
