//! Textured planets lit by a rig on a separate pivot
//!
//! The lights hang off a pivot group so they can be spun around the planet
//! independently of it.

use cgmath::Vector2;
use log::debug;

use super::lighting::init_default_lighting;
use crate::gfx::geometry::generate_sphere;
use crate::gfx::material::Material;
use crate::gfx::scene::{Container, Group, Mesh, ObjectId};
use crate::gfx::texture::TextureLoader;

pub const EARTH_TEXTURE: &str = "textures/earth/Earth.png";
pub const EARTH_NORMAL_TEXTURE: &str = "textures/earth/EarthNormal.png";
pub const EARTH_SPECULAR_TEXTURE: &str = "textures/earth/EarthSpec.png";
pub const MARS_TEXTURE: &str = "textures/mars/mars_1k_color.jpg";
pub const MARS_NORMAL_TEXTURE: &str = "textures/mars/mars_1k_normal.jpg";

/// Sphere parameters for [`add_earth`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EarthOptions {
    pub radius: f32,
    pub width_segments: u32,
    pub height_segments: u32,
}

impl Default for EarthOptions {
    fn default() -> Self {
        Self {
            radius: 25.0,
            width_segments: 100,
            height_segments: 100,
        }
    }
}

/// Ids of a planet mesh and its light pivot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Planet {
    pub mesh: ObjectId,
    pub pivot: ObjectId,
}

pub fn add_earth(
    scene: &mut impl Container,
    loader: &TextureLoader,
    options: Option<EarthOptions>,
) -> Planet {
    let options = options.unwrap_or_default();
    let material = Material::phong(0xffffff)
        .with_map(loader.load(EARTH_TEXTURE))
        .with_normal_map(loader.load(EARTH_NORMAL_TEXTURE), Vector2::new(6.0, 6.0))
        .with_specular_map(loader.load(EARTH_SPECULAR_TEXTURE))
        .with_specular(0x4444aa)
        .with_shininess(0.5);
    let earth = Mesh::new(
        generate_sphere(
            options.radius,
            options.width_segments,
            options.height_segments,
        ),
        material,
    )
    .with_name("earth");

    debug!("Adding earth with radius {}", options.radius);
    add_with_pivot(scene, earth)
}

pub fn add_mars(scene: &mut impl Container, loader: &TextureLoader) -> Planet {
    let material = Material::phong(0xffffff)
        .with_map(loader.load(MARS_TEXTURE))
        .with_normal_map(loader.load(MARS_NORMAL_TEXTURE), Vector2::new(6.0, 6.0))
        .with_shininess(0.5);
    let mars = Mesh::new(generate_sphere(15.0, 40, 40), material).with_name("mars");
    add_with_pivot(scene, mars)
}

fn add_with_pivot(scene: &mut impl Container, planet: Mesh) -> Planet {
    let mesh = scene.add(planet);
    let mut pivot = Group::new().with_name("pivot");
    init_default_lighting(&mut pivot, None);
    let pivot = scene.add(pivot);
    Planet { mesh, pivot }
}
