//=========================================================================
// Proxy Geometry
//=========================================================================
//
// CPU-side data for the proxy pass: a unit cube mesh, one instance per
// mesh-bound entity and the per-frame globals. Everything here is plain
// data so it can be tested without a GPU.
//
//=========================================================================

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::world::{AssetRef, FrameSnapshot};

//=== GPU Layouts =========================================================

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub(crate) struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub(crate) struct Instance {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl Instance {
    // model matrix columns, then colour
    const ATTRIBUTES: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        2 => Float32x4,
        3 => Float32x4,
        4 => Float32x4,
        5 => Float32x4,
        6 => Float32x4
    ];

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Instance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub(crate) struct Globals {
    pub view_proj: [[f32; 4]; 4],
    pub light_dir: [f32; 4],
    pub light_color: [f32; 4],
}

//=== Builders ============================================================

/// Unit cube centred on the origin, outward normals, counter-clockwise
/// front faces.
pub(crate) fn cube_mesh() -> (Vec<Vertex>, Vec<u16>) {
    // (normal, u, v) with u × v == normal
    const FACES: [(Vec3, Vec3, Vec3); 6] = [
        (Vec3::X, Vec3::Y, Vec3::Z),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::Z, Vec3::X),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::Y, Vec3::X),
    ];

    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for (normal, u, v) in FACES {
        let base = vertices.len() as u16;
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let corner = (normal + u * su + v * sv) * 0.5;
            vertices.push(Vertex {
                position: corner.to_array(),
                normal: normal.to_array(),
            });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    (vertices, indices)
}

pub(crate) fn instances(snapshot: &FrameSnapshot) -> Vec<Instance> {
    snapshot
        .items
        .iter()
        .map(|item| Instance {
            model: item.world.to_cols_array_2d(),
            color: proxy_color(&item.mesh),
        })
        .collect()
}

pub(crate) fn globals(snapshot: &FrameSnapshot, aspect: f32) -> Globals {
    let (light_dir, light_color) = match &snapshot.sun {
        Some(sun) => (
            sun.direction.normalize_or_zero().extend(1.0),
            (sun.color * sun.intensity).extend(1.0),
        ),
        None => (Vec3::ZERO.extend(0.0), Vec3::ZERO.extend(1.0)),
    };

    Globals {
        view_proj: snapshot.camera.view_projection(aspect).to_cols_array_2d(),
        light_dir: light_dir.to_array(),
        light_color: light_color.to_array(),
    }
}

/// Stable colour per asset file so each proxy is recognisable.
pub(crate) fn proxy_color(asset: &AssetRef) -> [f32; 4] {
    // FNV-1a
    let hash = asset
        .filename
        .bytes()
        .fold(0x811c_9dc5_u32, |h, b| (h ^ b as u32).wrapping_mul(0x0100_0193));

    let channel = |shift: u32| 0.35 + 0.6 * ((hash >> shift) & 0xff) as f32 / 255.0;
    [channel(0), channel(8), channel(16), 1.0]
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{Camera, DirectionalLight, DrawItem, World};
    use glam::Mat4;

    fn snapshot_with(items: Vec<DrawItem>, sun: Option<DirectionalLight>) -> FrameSnapshot {
        FrameSnapshot { tick: 3, camera: Camera::default(), sun, items }
    }

    #[test]
    fn cube_has_outward_ccw_faces() {
        let (vertices, indices) = cube_mesh();
        assert_eq!(vertices.len(), 24);
        assert_eq!(indices.len(), 36);

        for triangle in indices.chunks(3) {
            let [a, b, c] = [0, 1, 2].map(|i| Vec3::from(vertices[triangle[i] as usize].position));
            let normal = Vec3::from(vertices[triangle[0] as usize].normal);
            let winding = (b - a).cross(c - a).normalize();
            assert!(winding.dot(normal) > 0.99, "triangle {:?} faces inward", triangle);
        }
    }

    #[test]
    fn cube_spans_unit_extent() {
        let (vertices, _) = cube_mesh();
        for vertex in vertices {
            for coord in vertex.position {
                assert_eq!(coord.abs(), 0.5);
            }
        }
    }

    #[test]
    fn one_instance_per_item() {
        let translated = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let snapshot = snapshot_with(
            vec![DrawItem {
                entity: World::new("assets").create_entity(),
                mesh: AssetRef::new("ball", "usdc"),
                world: translated,
                animation: None,
            }],
            None,
        );

        let instances = instances(&snapshot);
        assert_eq!(instances.len(), 1);
        assert_eq!(instances[0].model[3], [1.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn colour_depends_on_filename_only() {
        let a = proxy_color(&AssetRef::new("ball", "usdc"));
        let b = proxy_color(&AssetRef::new("ball", "glb"));
        let c = proxy_color(&AssetRef::new("stadium", "usdc"));

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a[..3].iter().all(|v| (0.3..1.0).contains(v)));
    }

    #[test]
    fn globals_without_sun_disable_lighting() {
        let globals = globals(&snapshot_with(vec![], None), 16.0 / 9.0);
        assert_eq!(globals.light_dir[3], 0.0);
    }

    #[test]
    fn globals_scale_light_by_intensity() {
        let sun = DirectionalLight { intensity: 2.0, ..DirectionalLight::default() };
        let globals = globals(&snapshot_with(vec![], Some(sun)), 1.0);

        assert_eq!(globals.light_dir[3], 1.0);
        assert_eq!(&globals.light_color[..3], &[2.0, 2.0, 2.0]);
    }
}
