//! Load a scene file and print a summary of the converted mesh

use anyhow::{bail, Result};
use simcommon_io::load_mesh;

fn main() -> Result<()> {
    env_logger::init();

    let Some(path) = std::env::args().nth(1) else {
        bail!("usage: mesh_info <scene-file>");
    };

    let mesh = load_mesh(&path)?;

    println!("Mesh [{}] from {}", mesh.name, mesh.path.display());
    println!(
        "  {} submeshes, {} materials, {} vertices, {} triangles",
        mesh.sub_mesh_count(),
        mesh.material_count(),
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    let (min, max) = mesh.bounding_box();
    println!("  bounds: [{:.3} {:.3} {:.3}] .. [{:.3} {:.3} {:.3}]", min.x, min.y, min.z, max.x, max.y, max.z);

    for sub in &mesh.sub_meshes {
        let material = sub
            .material_index
            .and_then(|i| mesh.material(i))
            .map(|m| m.name.as_str())
            .unwrap_or("<none>");
        println!(
            "  submesh [{}]: {} vertices, {} triangles, {} UV sets, material [{}]",
            sub.name,
            sub.vertex_count(),
            sub.triangle_count(),
            sub.tex_coord_sets.len(),
            material
        );
    }

    Ok(())
}
