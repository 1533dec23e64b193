//! Mesh and submesh data structures

use crate::material::Material;
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A named, indexed triangle list sharing one material
///
/// Submeshes are the unit of rendering: every three entries of `indices`
/// form one triangle over `vertices`. Texture coordinates are stored per
/// UV channel in `tex_coord_sets`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubMesh {
    pub name: String,
    pub vertices: Vec<Point3f>,
    pub normals: Vec<Vector3f>,
    pub tex_coord_sets: Vec<Vec<Vector2f>>,
    pub indices: Vec<u32>,
    pub material_index: Option<u32>,
}

impl SubMesh {
    /// Create a new empty submesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty submesh with the given name
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add a vertex, returning its index
    pub fn add_vertex(&mut self, vertex: Point3f) -> usize {
        let index = self.vertices.len();
        self.vertices.push(vertex);
        index
    }

    /// Add a vertex normal
    pub fn add_normal(&mut self, normal: Vector3f) {
        self.normals.push(normal);
    }

    /// Add a triangle index
    pub fn add_index(&mut self, index: u32) {
        self.indices.push(index);
    }

    /// Add a texture coordinate to the given UV set, growing the set list
    /// as needed
    pub fn add_tex_coord_to_set(&mut self, u: f32, v: f32, set: usize) {
        if self.tex_coord_sets.len() <= set {
            self.tex_coord_sets.resize(set + 1, Vec::new());
        }
        self.tex_coord_sets[set].push(Vector2f::new(u, v));
    }

    /// Get the texture coordinates of one UV set, if present
    pub fn tex_coords(&self, set: usize) -> Option<&[Vector2f]> {
        self.tex_coord_sets.get(set).map(|s| s.as_slice())
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of indices
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Get the number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check if the submesh has no geometry
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.indices.is_empty()
    }

    /// Get the axis-aligned bounding box as (min, max)
    pub fn bounding_box(&self) -> (Point3f, Point3f) {
        bounding_box_of(&self.vertices)
    }

    /// Get the center of the bounding box
    pub fn center(&self) -> Point3f {
        let (min, max) = self.bounding_box();
        nalgebra::center(&min, &max)
    }

    /// Scale every vertex by per-axis factors
    pub fn scale(&mut self, factor: Vector3f) {
        for v in &mut self.vertices {
            v.x *= factor.x;
            v.y *= factor.y;
            v.z *= factor.z;
        }
    }

    /// Translate every vertex by an offset
    pub fn translate(&mut self, offset: Vector3f) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }
}

/// A mesh assembled from submeshes and a shared material list
///
/// Submesh material indices refer to slots in `materials`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Mesh {
    pub name: String,
    /// Directory the mesh was loaded from, used to resolve texture paths
    pub path: PathBuf,
    pub sub_meshes: Vec<SubMesh>,
    pub materials: Vec<Material>,
}

impl Mesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a material, returning its index in the material list
    pub fn add_material(&mut self, material: Material) -> u32 {
        let index = self.materials.len() as u32;
        self.materials.push(material);
        index
    }

    /// Add a submesh
    pub fn add_sub_mesh(&mut self, sub_mesh: SubMesh) {
        self.sub_meshes.push(sub_mesh);
    }

    /// Look up a material by index
    pub fn material(&self, index: u32) -> Option<&Material> {
        self.materials.get(index as usize)
    }

    /// Find a submesh by name
    pub fn sub_mesh_by_name(&self, name: &str) -> Option<&SubMesh> {
        self.sub_meshes.iter().find(|s| s.name == name)
    }

    /// Get the number of submeshes
    pub fn sub_mesh_count(&self) -> usize {
        self.sub_meshes.len()
    }

    /// Get the number of materials
    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    /// Get the total number of vertices across all submeshes
    pub fn vertex_count(&self) -> usize {
        self.sub_meshes.iter().map(|s| s.vertex_count()).sum()
    }

    /// Get the total number of indices across all submeshes
    pub fn index_count(&self) -> usize {
        self.sub_meshes.iter().map(|s| s.index_count()).sum()
    }

    /// Get the total number of triangles across all submeshes
    pub fn triangle_count(&self) -> usize {
        self.sub_meshes.iter().map(|s| s.triangle_count()).sum()
    }

    /// Check if the mesh has no geometry
    pub fn is_empty(&self) -> bool {
        self.sub_meshes.iter().all(|s| s.is_empty())
    }

    /// Get the axis-aligned bounding box over all submeshes as (min, max)
    pub fn bounding_box(&self) -> (Point3f, Point3f) {
        let mut points = Vec::new();
        for sub in &self.sub_meshes {
            points.extend_from_slice(&sub.vertices);
        }
        bounding_box_of(&points)
    }

    /// Get the center of the bounding box
    pub fn center(&self) -> Point3f {
        let (min, max) = self.bounding_box();
        nalgebra::center(&min, &max)
    }

    /// Scale every submesh by per-axis factors
    pub fn scale(&mut self, factor: Vector3f) {
        for sub in &mut self.sub_meshes {
            sub.scale(factor);
        }
    }

    /// Scale every submesh uniformly
    pub fn uniform_scale(&mut self, factor: f32) {
        self.scale(Vector3f::new(factor, factor, factor));
    }
}

/// Compute the axis-aligned bounding box of a point set
///
/// An empty set yields a degenerate box at the origin.
fn bounding_box_of(points: &[Point3f]) -> (Point3f, Point3f) {
    if points.is_empty() {
        return (Point3f::origin(), Point3f::origin());
    }

    let mut min = points[0];
    let mut max = points[0];

    for p in points {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        min.z = min.z.min(p.z);

        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
        max.z = max.z.max(p.z);
    }

    (min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> SubMesh {
        let mut sub = SubMesh::with_name("tri");
        sub.add_vertex(Point3f::new(0.0, 0.0, 0.0));
        sub.add_vertex(Point3f::new(1.0, 0.0, 0.0));
        sub.add_vertex(Point3f::new(0.0, 2.0, 0.0));
        for i in 0..3 {
            sub.add_index(i);
            sub.add_normal(Vector3f::new(0.0, 0.0, 1.0));
        }
        sub
    }

    #[test]
    fn submesh_counts() {
        let sub = triangle();
        assert_eq!(sub.vertex_count(), 3);
        assert_eq!(sub.index_count(), 3);
        assert_eq!(sub.triangle_count(), 1);
        assert!(!sub.is_empty());
        assert!(SubMesh::new().is_empty());
    }

    #[test]
    fn submesh_tex_coord_sets() {
        let mut sub = triangle();
        sub.add_tex_coord_to_set(0.0, 1.0, 0);
        sub.add_tex_coord_to_set(0.5, 0.5, 1);
        assert_eq!(sub.tex_coord_sets.len(), 2);
        assert_eq!(sub.tex_coords(0).unwrap()[0], Vector2f::new(0.0, 1.0));
        assert_eq!(sub.tex_coords(1).unwrap()[0], Vector2f::new(0.5, 0.5));
        assert!(sub.tex_coords(2).is_none());
    }

    #[test]
    fn submesh_bounding_box() {
        let sub = triangle();
        let (min, max) = sub.bounding_box();
        assert_eq!(min, Point3f::new(0.0, 0.0, 0.0));
        assert_eq!(max, Point3f::new(1.0, 2.0, 0.0));
        assert_eq!(sub.center(), Point3f::new(0.5, 1.0, 0.0));
    }

    #[test]
    fn submesh_scale_translate() {
        let mut sub = triangle();
        sub.scale(Vector3f::new(2.0, 1.0, 1.0));
        sub.translate(Vector3f::new(0.0, 0.0, 3.0));
        let (min, max) = sub.bounding_box();
        assert_eq!(min, Point3f::new(0.0, 0.0, 3.0));
        assert_eq!(max, Point3f::new(2.0, 2.0, 3.0));
    }

    #[test]
    fn mesh_material_indices() {
        let mut mesh = Mesh::new();
        let idx = mesh.add_material(Material::with_name("red"));
        assert_eq!(idx, 0);

        let mut sub = triangle();
        sub.material_index = Some(idx);
        mesh.add_sub_mesh(sub);

        assert_eq!(mesh.material(0).unwrap().name, "red");
        assert!(mesh.material(1).is_none());
    }

    #[test]
    fn mesh_lookup_and_counts() {
        let mut mesh = Mesh::new();
        mesh.add_sub_mesh(triangle());
        let mut other = triangle();
        other.name = "other".to_string();
        mesh.add_sub_mesh(other);

        assert_eq!(mesh.sub_mesh_count(), 2);
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.triangle_count(), 2);
        assert!(mesh.sub_mesh_by_name("other").is_some());
        assert!(mesh.sub_mesh_by_name("missing").is_none());
    }

    #[test]
    fn mesh_uniform_scale() {
        let mut mesh = Mesh::new();
        mesh.add_sub_mesh(triangle());
        mesh.uniform_scale(2.0);
        let (_, max) = mesh.bounding_box();
        assert_eq!(max, Point3f::new(2.0, 4.0, 0.0));
    }

    #[test]
    fn empty_mesh_bounding_box() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.bounding_box(), (Point3f::origin(), Point3f::origin()));
    }
}
