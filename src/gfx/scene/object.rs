use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use cgmath::{Matrix4, Rad, Vector3, Zero};

use crate::gfx::{
    geometry::GeometryData,
    light::Light,
    material::{Material, SharedMaterial},
};

static NEXT_OBJECT_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identifier of a scene object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u64);

impl ObjectId {
    pub(crate) fn next() -> Self {
        Self(NEXT_OBJECT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Position, XYZ euler rotation (radians) and scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vector3<f32>,
    pub rotation: Vector3<f32>,
    pub scale: Vector3<f32>,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vector3::zero(),
            rotation: Vector3::zero(),
            scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    pub fn set_position(&mut self, x: f32, y: f32, z: f32) {
        self.position = Vector3::new(x, y, z);
    }

    /// Local matrix, composed as T * Rx * Ry * Rz * S
    pub fn matrix(&self) -> Matrix4<f32> {
        let t = Matrix4::from_translation(self.position);
        let r = Matrix4::from_angle_x(Rad(self.rotation.x))
            * Matrix4::from_angle_y(Rad(self.rotation.y))
            * Matrix4::from_angle_z(Rad(self.rotation.z));
        let s = Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z);
        t * r * s
    }
}

/// Geometry drawn with a (possibly shared) material
#[derive(Debug)]
pub struct Mesh {
    id: ObjectId,
    pub name: String,
    pub geometry: GeometryData,
    material: SharedMaterial,
    pub transform: Transform,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl Mesh {
    /// Creates a mesh owning a fresh material
    pub fn new(geometry: GeometryData, material: Material) -> Self {
        Self::with_shared_material(geometry, material.into_shared())
    }

    /// Creates a mesh drawing with a material other meshes or panels also hold
    pub fn with_shared_material(geometry: GeometryData, material: SharedMaterial) -> Self {
        Self {
            id: ObjectId::next(),
            name: String::new(),
            geometry,
            material,
            transform: Transform::default(),
            cast_shadow: false,
            receive_shadow: false,
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn material(&self) -> &SharedMaterial {
        &self.material
    }

    pub fn set_material(&mut self, material: SharedMaterial) {
        self.material = material;
    }

    /// Builder pattern: set the lookup name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builder pattern: set the position
    pub fn at(mut self, x: f32, y: f32, z: f32) -> Self {
        self.transform.set_position(x, y, z);
        self
    }

    /// Builder pattern: set the euler rotation in radians
    pub fn rotated(mut self, x: f32, y: f32, z: f32) -> Self {
        self.transform.rotation = Vector3::new(x, y, z);
        self
    }

    /// Builder pattern: set shadow casting and receiving
    pub fn with_shadows(mut self, cast: bool, receive: bool) -> Self {
        self.cast_shadow = cast;
        self.receive_shadow = receive;
        self
    }
}

/// Empty transform node parenting other objects, e.g. a light pivot
#[derive(Debug)]
pub struct Group {
    id: ObjectId,
    pub name: String,
    pub transform: Transform,
    pub(crate) children: Vec<SceneObject>,
}

impl Group {
    pub fn new() -> Self {
        Self {
            id: ObjectId::next(),
            name: String::new(),
            transform: Transform::default(),
            children: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }
}

impl Default for Group {
    fn default() -> Self {
        Self::new()
    }
}

/// Anything that can be placed in a scene or group
#[derive(Debug)]
pub enum SceneObject {
    Mesh(Mesh),
    Light(Light),
    Group(Group),
}

impl SceneObject {
    pub fn id(&self) -> ObjectId {
        match self {
            SceneObject::Mesh(mesh) => mesh.id(),
            SceneObject::Light(light) => light.id(),
            SceneObject::Group(group) => group.id(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            SceneObject::Mesh(mesh) => &mesh.name,
            SceneObject::Light(light) => &light.name,
            SceneObject::Group(group) => &group.name,
        }
    }

    pub fn as_mesh(&self) -> Option<&Mesh> {
        match self {
            SceneObject::Mesh(mesh) => Some(mesh),
            _ => None,
        }
    }

    pub fn as_mesh_mut(&mut self) -> Option<&mut Mesh> {
        match self {
            SceneObject::Mesh(mesh) => Some(mesh),
            _ => None,
        }
    }

    pub fn as_light(&self) -> Option<&Light> {
        match self {
            SceneObject::Light(light) => Some(light),
            _ => None,
        }
    }

    pub fn as_group(&self) -> Option<&Group> {
        match self {
            SceneObject::Group(group) => Some(group),
            _ => None,
        }
    }

    pub fn as_group_mut(&mut self) -> Option<&mut Group> {
        match self {
            SceneObject::Group(group) => Some(group),
            _ => None,
        }
    }
}

impl From<Mesh> for SceneObject {
    fn from(mesh: Mesh) -> Self {
        SceneObject::Mesh(mesh)
    }
}

impl From<Light> for SceneObject {
    fn from(light: Light) -> Self {
        SceneObject::Light(light)
    }
}

impl From<Group> for SceneObject {
    fn from(group: Group) -> Self {
        SceneObject::Group(group)
    }
}
