//! Ground planes and simple props

use std::f32::consts::PI;

use crate::gfx::geometry::{
    generate_box, generate_cone, generate_cylinder, generate_plane, generate_sphere,
    DEFAULT_RADIAL_SEGMENTS,
};
use crate::gfx::material::Material;
use crate::gfx::scene::{Container, Mesh, ObjectId};
use crate::gfx::texture::{TextureLoader, Wrapping};

/// Planes are generated upright; this lays them flat
const FLAT: f32 = -0.5 * PI;

pub const FLOOR_TEXTURE: &str = "textures/general/floor-wood.jpg";

/// Ids of the meshes added by [`add_default_cube_and_sphere`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubeAndSphere {
    pub cube: ObjectId,
    pub sphere: ObjectId,
}

/// White 60x20 shadow-receiving plane centred at x = 15
pub fn add_ground_plane(scene: &mut impl Container) -> ObjectId {
    let plane = Mesh::new(generate_plane(60.0, 20.0, 120, 120), Material::phong(0xffffff))
        .with_name("groundPlane")
        .rotated(FLAT, 0.0, 0.0)
        .at(15.0, 0.0, 0.0)
        .with_shadows(false, true);
    scene.add(plane)
}

/// Walled lawn with a house and a tree on it
pub fn add_house_and_tree(scene: &mut impl Container) {
    add_bounding_wall(scene);
    add_lawn(scene);
    add_house(scene);
    add_tree(scene);
}

fn add_bounding_wall(scene: &mut impl Container) {
    let wall = Material::phong(0xa0522d).into_shared();
    let walls = [
        ("wallLeft", (70.0, 2.0, 2.0), (15.0, 1.0, -25.0)),
        ("wallRight", (70.0, 2.0, 2.0), (15.0, 1.0, 25.0)),
        ("wallBottom", (2.0, 2.0, 50.0), (49.0, 1.0, 0.0)),
        ("wallTop", (2.0, 2.0, 50.0), (-19.0, 1.0, 0.0)),
    ];
    for (name, (width, height, depth), (x, y, z)) in walls {
        scene.add(
            Mesh::with_shared_material(generate_box(width, height, depth), wall.clone())
                .with_name(name)
                .at(x, y, z),
        );
    }
}

fn add_lawn(scene: &mut impl Container) {
    scene.add(
        Mesh::new(generate_plane(70.0, 50.0, 1, 1), Material::phong(0x9acd32))
            .with_name("lawn")
            .rotated(FLAT, 0.0, 0.0)
            .at(15.0, 0.0, 0.0)
            .with_shadows(false, true),
    );
}

fn add_house(scene: &mut impl Container) {
    scene.add(
        Mesh::new(generate_cone(5.0, 4.0, DEFAULT_RADIAL_SEGMENTS), Material::phong(0x8b7213))
            .with_name("roof")
            .at(25.0, 8.0, 0.0)
            .with_shadows(true, true),
    );
    scene.add(
        Mesh::new(
            generate_cylinder(5.0, 5.0, 6.0, DEFAULT_RADIAL_SEGMENTS),
            Material::phong(0xffe4c4),
        )
        .with_name("houseBase")
        .at(25.0, 3.0, 0.0)
        .with_shadows(true, true),
    );
}

fn add_tree(scene: &mut impl Container) {
    // Trunk sits on the ground: y is half its height
    scene.add(
        Mesh::new(generate_box(1.0, 8.0, 1.0), Material::phong(0x8b4513))
            .with_name("trunk")
            .at(-10.0, 4.0, 0.0)
            .with_shadows(true, true),
    );
    scene.add(
        Mesh::new(generate_sphere(4.0, 32, 16), Material::phong(0x00ff00))
            .with_name("leaves")
            .at(-10.0, 12.0, 0.0)
            .with_shadows(true, true),
    );
}

/// Red cube and blue sphere, both casting shadows
pub fn add_default_cube_and_sphere(scene: &mut impl Container) -> CubeAndSphere {
    let cube = scene.add(
        Mesh::new(generate_box(4.0, 4.0, 4.0), Material::lambert(0xff0000))
            .with_name("cube")
            .at(-4.0, 3.0, 0.0)
            .with_shadows(true, false),
    );
    let sphere = scene.add(
        Mesh::new(generate_sphere(4.0, 20, 20), Material::lambert(0x7777ff))
            .with_name("sphere")
            .at(20.0, 0.0, 2.0)
            .with_shadows(true, false),
    );
    CubeAndSphere { cube, sphere }
}

/// 10000x10000 plane at the origin, optionally tiled with a wood floor texture
pub fn add_large_ground_plane(
    scene: &mut impl Container,
    loader: &TextureLoader,
    use_texture: bool,
) -> ObjectId {
    let mut material = Material::phong(0xffffff);
    if use_texture {
        let floor = loader
            .load(FLOOR_TEXTURE)
            .with_wrapping(Wrapping::Repeat, Wrapping::Repeat)
            .with_repeat(80.0, 80.0);
        material = material.with_map(floor);
    }
    let plane = Mesh::new(generate_plane(10000.0, 10000.0, 1, 1), material)
        .with_name("largeGroundPlane")
        .rotated(FLAT, 0.0, 0.0)
        .at(0.0, 0.0, 0.0)
        .with_shadows(false, true);
    scene.add(plane)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use cgmath::Vector3;

    use super::*;
    use crate::gfx::scene::Scene;

    #[test]
    fn test_ground_plane() {
        let mut scene = Scene::new();
        let id = add_ground_plane(&mut scene);
        let plane = scene.mesh(id).unwrap();
        assert!(plane.receive_shadow);
        assert!(!plane.cast_shadow);
        assert_eq!(plane.transform.position, Vector3::new(15.0, 0.0, 0.0));
        assert_eq!(plane.transform.rotation.x, -0.5 * PI);
        assert_eq!(plane.geometry.triangle_count(), 120 * 120 * 2);
    }

    #[test]
    fn test_house_and_tree() {
        let mut scene = Scene::new();
        add_house_and_tree(&mut scene);
        assert_eq!(scene.statistics().mesh_count, 9);

        let left = scene.get_object_by_name("wallLeft").and_then(|o| o.as_mesh()).unwrap();
        let right = scene.get_object_by_name("wallRight").and_then(|o| o.as_mesh()).unwrap();
        assert!(Rc::ptr_eq(left.material(), right.material()));

        let leaves = scene.get_object_by_name("leaves").and_then(|o| o.as_mesh()).unwrap();
        assert_eq!(leaves.transform.position, Vector3::new(-10.0, 12.0, 0.0));
        assert!(leaves.cast_shadow && leaves.receive_shadow);
    }

    #[test]
    fn test_cube_and_sphere() {
        let mut scene = Scene::new();
        let CubeAndSphere { cube, sphere } = add_default_cube_and_sphere(&mut scene);
        let cube = scene.mesh(cube).unwrap();
        assert_eq!(cube.transform.position, Vector3::new(-4.0, 3.0, 0.0));
        assert!(cube.cast_shadow);
        assert_eq!(cube.material().borrow().color.to_hex(), 0xff0000);

        let sphere = scene.mesh(sphere).unwrap();
        assert_eq!(sphere.transform.position, Vector3::new(20.0, 0.0, 2.0));
        assert_eq!(sphere.material().borrow().color.to_hex(), 0x7777ff);
    }

    #[test]
    fn test_large_ground_plane_texture() {
        let loader = TextureLoader::new().with_base_path("public");
        let mut scene = Scene::new();

        let plain = add_large_ground_plane(&mut scene, &loader, false);
        assert!(scene.mesh(plain).unwrap().material().borrow().map.is_none());

        let textured = add_large_ground_plane(&mut scene, &loader, true);
        let mesh = scene.mesh(textured).unwrap();
        let material = mesh.material().borrow();
        let map = material.map.as_ref().unwrap();
        assert!(map.path().ends_with(FLOOR_TEXTURE));
        assert_eq!(map.wrap_s, Wrapping::Repeat);
        assert_eq!(map.repeat, cgmath::Vector2::new(80.0, 80.0));
    }
}
