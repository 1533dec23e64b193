//! Assimp-backed scene import
//!
//! [`AssimpLoader`] hands a scene file to assimp, then flattens the
//! resulting node tree into a [`Mesh`]: one [`SubMesh`] per node-referenced
//! assimp mesh, vertices and normals baked into world coordinates, texture
//! coordinates flipped to the library's UV convention and material slots
//! carried over by index. Parsing, format detection and triangulation all
//! happen inside assimp.

use crate::error::{LoaderError, Result};
use crate::MeshLoader;
use russimp::material::{Material as AiMaterial, PropertyTypeInfo, TextureType};
use russimp::mesh::Mesh as AiMesh;
use russimp::node::Node;
use russimp::scene::{PostProcess, Scene};
use russimp::Matrix4x4;
use simcommon_core::{Color, Material, Matrix4f, Mesh, Point3f, SubMesh, Transform3f, Vector3f};
use std::path::Path;
use std::rc::Rc;

/// Mesh loader backed by the assimp import library
#[derive(Debug, Default)]
pub struct AssimpLoader;

impl AssimpLoader {
    /// File extensions handled by this loader
    pub const EXTENSIONS: &'static [&'static str] = &["dae", "obj", "fbx", "gltf", "glb", "stl"];

    /// Create a new loader
    pub fn new() -> Self {
        Self
    }

    fn post_process() -> Vec<PostProcess> {
        vec![
            PostProcess::RemoveRedundantMaterials,
            PostProcess::SortByPrimitiveType,
            PostProcess::Triangulate,
        ]
    }
}

impl MeshLoader for AssimpLoader {
    fn load(&self, path: &Path) -> Result<Mesh> {
        let scene = Scene::from_file(path.to_string_lossy().as_ref(), Self::post_process())
            .map_err(|e| {
                LoaderError::Import(format!("unable to import [{}]: {e}", path.display()))
            })?;

        let dir = path.parent().unwrap_or_else(|| Path::new(""));
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut mesh = convert_scene(&scene, &name, dir)?;
        mesh.path = dir.to_path_buf();
        Ok(mesh)
    }

    fn load_from_buffer(&self, buffer: &[u8], hint: &str) -> Result<Mesh> {
        let scene = Scene::from_buffer(buffer, Self::post_process(), hint)
            .map_err(|e| LoaderError::Import(format!("unable to import buffer: {e}")))?;
        convert_scene(&scene, "", Path::new(""))
    }

    fn supported_extensions(&self) -> &[&'static str] {
        Self::EXTENSIONS
    }
}

/// Flatten an imported scene into a mesh
fn convert_scene(scene: &Scene, name: &str, dir: &Path) -> Result<Mesh> {
    let mut mesh = Mesh::new();
    mesh.name = name.to_string();

    // Materials first, so submesh material indices stay valid
    for ai_mat in &scene.materials {
        mesh.add_material(convert_material(ai_mat, dir));
    }

    let root = scene
        .root
        .as_ref()
        .ok_or_else(|| LoaderError::MissingRoot(name.to_string()))?;
    process_node(scene, root, Transform3f::identity(), &mut mesh);

    log::debug!(
        "imported [{name}]: {} meshes, {} materials, {} animations",
        scene.meshes.len(),
        scene.materials.len(),
        scene.animations.len()
    );
    for anim in &scene.animations {
        // Animations are not converted; see the crate docs
        log::debug!(
            "skipping animation [{}]: {} node channels, {} mesh channels, {} morph channels",
            anim.name,
            anim.channels.len(),
            anim.mesh_channels.len(),
            anim.morph_mesh_channels.len()
        );
    }

    Ok(mesh)
}

/// Walk the node tree, accumulating transforms and emitting submeshes
fn process_node(scene: &Scene, node: &Rc<Node>, parent: Transform3f, mesh: &mut Mesh) {
    let trans = parent * convert_transform(&node.transformation);
    let rot = trans.without_translation();

    if !node.meshes.is_empty() {
        log::debug!("processing node [{}] with {} meshes", node.name, node.meshes.len());
    }

    for &mesh_idx in &node.meshes {
        let Some(ai_mesh) = scene.meshes.get(mesh_idx as usize) else {
            log::warn!("node [{}] references missing mesh {mesh_idx}", node.name);
            continue;
        };
        let mut sub = convert_mesh(ai_mesh, &trans, &rot);
        sub.name = node.name.clone();
        mesh.add_sub_mesh(sub);
    }

    for child in node.children.borrow().iter() {
        process_node(scene, child, trans, mesh);
    }
}

/// Convert one assimp mesh into a submesh in world coordinates
fn convert_mesh(ai_mesh: &AiMesh, trans: &Transform3f, rot: &Transform3f) -> SubMesh {
    let mut sub = SubMesh::new();
    let has_normals = ai_mesh.normals.len() == ai_mesh.vertices.len();

    for (i, v) in ai_mesh.vertices.iter().enumerate() {
        sub.add_vertex(trans.transform_point(&Point3f::new(v.x, v.y, v.z)));

        if has_normals {
            let n = &ai_mesh.normals[i];
            let normal = rot.transform_vector(&Vector3f::new(n.x, n.y, n.z));
            sub.add_normal(normal.try_normalize(f32::EPSILON).unwrap_or(normal));
        }

        for (set, coords) in ai_mesh.texture_coords.iter().enumerate() {
            if let Some(coords) = coords {
                // Assimp's UV origin is bottom-left; ours is top-left
                sub.add_tex_coord_to_set(coords[i].x, 1.0 - coords[i].y, set);
            }
        }
    }

    for face in &ai_mesh.faces {
        if face.0.len() != 3 {
            log::warn!(
                "skipping non-triangle face with {} indices in mesh [{}]",
                face.0.len(),
                ai_mesh.name
            );
            continue;
        }
        for &index in &face.0 {
            sub.add_index(index);
        }
    }

    sub.material_index = Some(ai_mesh.material_index);
    sub
}

/// Convert an assimp material into the library's material
fn convert_material(ai_mat: &AiMaterial, dir: &Path) -> Material {
    let mut mat = Material::new();

    for prop in &ai_mat.properties {
        match (prop.key.as_str(), &prop.data) {
            ("?mat.name", PropertyTypeInfo::String(s)) => mat.name = s.clone(),
            ("$clr.ambient", PropertyTypeInfo::FloatArray(c)) => {
                if let Some(color) = convert_color(c) {
                    mat.ambient = color;
                }
            }
            ("$clr.diffuse", PropertyTypeInfo::FloatArray(c)) => {
                if let Some(color) = convert_color(c) {
                    mat.diffuse = color;
                }
            }
            ("$clr.specular", PropertyTypeInfo::FloatArray(c)) => {
                if let Some(color) = convert_color(c) {
                    mat.specular = color;
                }
            }
            ("$clr.emissive", PropertyTypeInfo::FloatArray(c)) => {
                if let Some(color) = convert_color(c) {
                    mat.emissive = color;
                }
            }
            ("$mat.shininess", PropertyTypeInfo::FloatArray(v)) => {
                if let Some(&shininess) = v.first() {
                    mat.shininess = shininess;
                }
            }
            ("$mat.opacity", PropertyTypeInfo::FloatArray(v)) => {
                if let Some(&opacity) = v.first() {
                    mat.transparency = 1.0 - opacity;
                }
            }
            ("$tex.file", PropertyTypeInfo::String(s))
                if prop.semantic == TextureType::Diffuse =>
            {
                mat.set_texture_image(s, dir);
            }
            _ => {}
        }
    }

    mat
}

fn convert_color(c: &[f32]) -> Option<Color> {
    match c.len() {
        3 => Some(Color::rgb(c[0], c[1], c[2])),
        4 => Some(Color::new(c[0], c[1], c[2], c[3])),
        _ => None,
    }
}

/// Convert assimp's row-major 4x4 matrix
fn convert_transform(m: &Matrix4x4) -> Transform3f {
    Matrix4f::new(
        m.a1, m.a2, m.a3, m.a4,
        m.b1, m.b2, m.b3, m.b4,
        m.c1, m.c2, m.c3, m.c4,
        m.d1, m.d2, m.d3, m.d4,
    )
    .into()
}
