//! Material description attached to submeshes

use crate::types::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Surface material referenced by submeshes through a material index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
    pub emissive: Color,
    pub shininess: f32,
    pub transparency: f32,
    pub lighting: bool,
    /// Diffuse texture image, resolved against the scene file's directory
    pub texture_image: Option<PathBuf>,
}

impl Material {
    /// Create a material with default colors
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a named material with default colors
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the diffuse texture image, resolving relative references
    /// against a search directory
    pub fn set_texture_image(&mut self, image: impl AsRef<Path>, search_path: &Path) {
        let image = image.as_ref();
        self.texture_image = Some(if image.is_absolute() {
            image.to_path_buf()
        } else {
            search_path.join(image)
        });
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: String::new(),
            ambient: Color::gray(0.4),
            diffuse: Color::gray(0.8),
            specular: Color::BLACK,
            emissive: Color::BLACK,
            shininess: 0.0,
            transparency: 0.0,
            lighting: true,
            texture_image: None,
        }
    }
}
