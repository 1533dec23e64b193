//! Scene file import for simcommon
//!
//! This crate converts 3D scene files (COLLADA, OBJ, FBX, glTF, STL, ...)
//! into [`simcommon_core::Mesh`] structures. Format detection, parsing and
//! post-processing such as triangulation are delegated to the assimp
//! library through the `russimp` binding; this crate only adapts the
//! imported scene graph into the library's own representation.

pub mod assimp;
pub mod registry;
pub mod error;

pub use assimp::AssimpLoader;
pub use error::{LoaderError, Result};
pub use registry::LoaderRegistry;

use simcommon_core::Mesh;
use std::path::Path;

/// Trait for mesh loaders backing one or more file formats
pub trait MeshLoader: Send + Sync {
    /// Load a mesh from a file
    fn load(&self, path: &Path) -> Result<Mesh>;

    /// Load a mesh from an in-memory buffer, with a file extension hint
    /// such as `"obj"` to guide format detection
    fn load_from_buffer(&self, buffer: &[u8], hint: &str) -> Result<Mesh>;

    /// Get the file extensions this loader handles
    fn supported_extensions(&self) -> &[&'static str];
}

/// Load a mesh, dispatching on the file extension
pub fn load_mesh<P: AsRef<Path>>(path: P) -> Result<Mesh> {
    LoaderRegistry::with_default_loaders().load(path.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn load_mesh_dispatches_on_extension() {
        let temp_file = "test_dispatch.obj";
        fs::write(
            temp_file,
            "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n",
        )
        .unwrap();

        let mesh = load_mesh(temp_file).unwrap();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);

        let _ = fs::remove_file(temp_file);
    }

    #[test]
    fn load_mesh_rejects_unknown_extension() {
        let result = load_mesh("mesh.unknown-format");
        assert!(matches!(result, Err(LoaderError::UnsupportedFormat(_))));
    }

    #[test]
    fn load_mesh_rejects_missing_extension() {
        let result = load_mesh("no-extension");
        assert!(matches!(result, Err(LoaderError::UnsupportedFormat(_))));
    }
}
