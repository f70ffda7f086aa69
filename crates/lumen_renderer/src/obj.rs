//! Wavefront OBJ import into [`TriangleMesh`].
//!
//! Only positions and faces are used. Faces are triangulated on load and
//! every model in the file is merged into a single mesh; face normals are
//! recomputed from the winding.

use crate::{CullMode, MaterialId, TriangleMesh};
use lumen_math::Vec3;
use std::io::BufRead;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while importing a mesh.
#[derive(Error, Debug)]
pub enum MeshError {
    #[error("Failed to load OBJ: {0}")]
    Load(#[from] tobj::LoadError),

    #[error("No triangles found in {0}")]
    NoGeometry(String),
}

pub type MeshResult<T> = std::result::Result<T, MeshError>;

fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        single_index: true,
        triangulate: true,
        ..Default::default()
    }
}

impl TriangleMesh {
    /// Load every model in an OBJ file as one mesh.
    pub fn from_obj(path: impl AsRef<Path>, cull_mode: CullMode, material: MaterialId) -> MeshResult<Self> {
        let path = path.as_ref();
        let (models, _materials) = tobj::load_obj(path, &load_options())?;

        merge_models(&models, &path.display().to_string(), cull_mode, material)
    }

    /// Load OBJ data from a reader. Material libraries are not resolved.
    pub fn from_obj_reader<R: BufRead>(
        reader: &mut R,
        cull_mode: CullMode,
        material: MaterialId,
    ) -> MeshResult<Self> {
        let (models, _materials) = tobj::load_obj_buf(reader, &load_options(), |_| {
            Err(tobj::LoadError::OpenFileFailed)
        })?;

        merge_models(&models, "<reader>", cull_mode, material)
    }
}

/// Concatenate models, offsetting each model's indices past the vertices
/// already collected.
fn merge_models(
    models: &[tobj::Model],
    source: &str,
    cull_mode: CullMode,
    material: MaterialId,
) -> MeshResult<TriangleMesh> {
    let mut positions = Vec::new();
    let mut indices = Vec::new();

    for model in models {
        let mesh = &model.mesh;
        if mesh.indices.is_empty() {
            log::warn!("Skipping model '{}' in {}: no faces", model.name, source);
            continue;
        }

        let offset = positions.len() as u32;
        positions.extend(mesh.positions.chunks_exact(3).map(Vec3::from_slice));
        indices.extend(mesh.indices.iter().map(|&i| i + offset));
    }

    if indices.is_empty() {
        return Err(MeshError::NoGeometry(source.to_string()));
    }

    let mesh = TriangleMesh::from_indexed(positions, indices, cull_mode, material);
    log::info!(
        "Loaded {} models from {}: {} vertices, {} triangles",
        models.len(),
        source,
        mesh.positions().len(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HitRecord, Hittable};
    use lumen_math::Ray;
    use std::io::Cursor;

    const QUAD: &str = "\
# unit quad facing -Z
v 0 0 0
v 0 1 0
v 1 1 0
v 1 0 0
f 1 2 3 4
";

    const TWO_OBJECTS: &str = "\
o first
v 0 0 0
v 0 1 0
v 1 0 0
f 1 2 3
o second
v 0 0 2
v 0 1 2
v 1 0 2
f 4 5 6
";

    #[test]
    fn test_quad_is_triangulated() {
        let mesh = TriangleMesh::from_obj_reader(&mut Cursor::new(QUAD), CullMode::None, 0).unwrap();

        assert_eq!(mesh.positions().len(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        for normal in mesh.normals() {
            assert!((*normal - Vec3::NEG_Z).length() < 1e-5);
        }
    }

    #[test]
    fn test_models_are_merged() {
        let mesh = TriangleMesh::from_obj_reader(&mut Cursor::new(TWO_OBJECTS), CullMode::None, 3).unwrap();

        assert_eq!(mesh.positions().len(), 6);
        assert_eq!(mesh.indices(), &[0, 1, 2, 3, 4, 5]);
        assert_eq!(mesh.material, 3);

        let mut rec = HitRecord::default();
        let ray = Ray::new(Vec3::new(0.2, 0.2, 5.0), Vec3::NEG_Z);
        assert!(mesh.hit(&ray, &mut rec));
        assert!((rec.t - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_loaded_mesh_respects_culling() {
        // Quad winds clockwise seen from -Z, so its front faces -Z
        let mesh = TriangleMesh::from_obj_reader(&mut Cursor::new(QUAD), CullMode::BackFace, 0).unwrap();

        let from_front = Ray::new(Vec3::new(0.5, 0.5, -1.0), Vec3::Z);
        let from_back = Ray::new(Vec3::new(0.5, 0.5, 1.0), Vec3::NEG_Z);
        assert!(mesh.does_hit(&from_front));
        assert!(!mesh.does_hit(&from_back));
    }

    #[test]
    fn test_no_faces_is_an_error() {
        let result = TriangleMesh::from_obj_reader(&mut Cursor::new("v 0 0 0\nv 1 0 0\n"), CullMode::None, 0);
        assert!(matches!(result, Err(MeshError::NoGeometry(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = TriangleMesh::from_obj("does/not/exist.obj", CullMode::None, 0);
        assert!(matches!(result, Err(MeshError::Load(_))));
    }
}
