//! Loader registry for extension-based dispatch

use crate::error::{LoaderError, Result};
use crate::{AssimpLoader, MeshLoader};
use simcommon_core::{util, Mesh};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Registry mapping file extensions to mesh loaders
pub struct LoaderRegistry {
    loaders: HashMap<String, Arc<dyn MeshLoader>>,
}

impl LoaderRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            loaders: HashMap::new(),
        }
    }

    /// Create a registry with the built-in loaders registered
    pub fn with_default_loaders() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(AssimpLoader::new()));
        registry
    }

    /// Register a loader for every extension it supports
    ///
    /// A later registration takes over extensions already claimed by an
    /// earlier one.
    pub fn register(&mut self, loader: Arc<dyn MeshLoader>) {
        for extension in loader.supported_extensions() {
            self.loaders
                .insert(util::lowercase(extension), Arc::clone(&loader));
        }
    }

    /// Get the loader registered for an extension
    pub fn loader_for(&self, extension: &str) -> Option<Arc<dyn MeshLoader>> {
        self.loaders.get(&util::lowercase(extension)).cloned()
    }

    /// Check if an extension is supported
    pub fn supports(&self, extension: &str) -> bool {
        self.loaders.contains_key(&util::lowercase(extension))
    }

    /// Get the supported extensions
    pub fn supported_extensions(&self) -> Vec<String> {
        self.loaders.keys().cloned().collect()
    }

    /// Load a mesh by dispatching on the file extension
    pub fn load(&self, path: &Path) -> Result<Mesh> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| {
                LoaderError::UnsupportedFormat(format!(
                    "no file extension in [{}]",
                    path.display()
                ))
            })?;

        let loader = self.loader_for(extension).ok_or_else(|| {
            LoaderError::UnsupportedFormat(format!("no loader for extension [{extension}]"))
        })?;

        loader.load(path)
    }
}

impl Default for LoaderRegistry {
    fn default() -> Self {
        Self::with_default_loaders()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simcommon_core::SubMesh;

    struct MockLoader;

    impl MeshLoader for MockLoader {
        fn load(&self, _path: &Path) -> Result<Mesh> {
            let mut mesh = Mesh::new();
            mesh.add_sub_mesh(SubMesh::with_name("mock"));
            Ok(mesh)
        }

        fn load_from_buffer(&self, _buffer: &[u8], _hint: &str) -> Result<Mesh> {
            Ok(Mesh::new())
        }

        fn supported_extensions(&self) -> &[&'static str] {
            &["mock", "MOCK2"]
        }
    }

    #[test]
    fn register_claims_all_extensions() {
        let mut registry = LoaderRegistry::new();
        registry.register(Arc::new(MockLoader));

        assert!(registry.supports("mock"));
        assert!(registry.supports("mock2"));
        assert!(registry.supports("MOCK"));
        assert!(!registry.supports("dae"));
    }

    #[test]
    fn load_dispatches_to_registered_loader() {
        let mut registry = LoaderRegistry::new();
        registry.register(Arc::new(MockLoader));

        let mesh = registry.load(Path::new("anything.mock")).unwrap();
        assert!(mesh.sub_mesh_by_name("mock").is_some());
    }

    #[test]
    fn load_rejects_unregistered_extension() {
        let registry = LoaderRegistry::new();
        let result = registry.load(Path::new("mesh.dae"));
        assert!(matches!(result, Err(LoaderError::UnsupportedFormat(_))));
    }

    #[test]
    fn default_loaders_cover_common_formats() {
        let registry = LoaderRegistry::with_default_loaders();
        for extension in ["dae", "obj", "fbx", "gltf", "glb", "stl"] {
            assert!(registry.supports(extension), "missing loader for {extension}");
        }
    }
}
