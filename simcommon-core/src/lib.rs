//! Core data structures and utilities for simcommon
//!
//! This crate provides the shared types used by robotics/simulation tools:
//! meshes, submeshes, materials, a plugin registry, and small string, URI
//! and base64 helpers.

pub mod types;
pub mod mesh;
pub mod material;
pub mod transform;
pub mod plugin;
pub mod uri;
pub mod encoding;
pub mod util;
pub mod error;

pub use types::*;
pub use mesh::*;
pub use material::*;
pub use transform::*;
pub use plugin::{PluginInfo, PluginRegistry};
pub use uri::Uri;
pub use error::Error;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Matrix4, Point2, Point3, Vector2, Vector3};

/// Common result type for simcommon operations
pub type Result<T> = std::result::Result<T, Error>;
