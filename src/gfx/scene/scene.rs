use cgmath::{Vector3, Zero};

use super::object::{Group, Mesh, ObjectId, SceneObject};
use crate::gfx::light::Light;

/// Parent of scene objects
///
/// Implemented by [`Scene`] and [`Group`] so presets can populate either,
/// e.g. default lighting attached to a rotating pivot instead of the scene.
pub trait Container {
    fn children(&self) -> &[SceneObject];

    fn children_mut(&mut self) -> &mut Vec<SceneObject>;

    /// Appends an object and returns its id
    fn add(&mut self, object: impl Into<SceneObject>) -> ObjectId
    where
        Self: Sized,
    {
        let object = object.into();
        let id = object.id();
        self.children_mut().push(object);
        id
    }

    /// Detaches a direct child
    fn remove(&mut self, id: ObjectId) -> Option<SceneObject> {
        let children = self.children_mut();
        let index = children.iter().position(|child| child.id() == id)?;
        Some(children.remove(index))
    }

    /// Finds an object anywhere below this container
    fn get_object(&self, id: ObjectId) -> Option<&SceneObject> {
        find(self.children(), &|object| object.id() == id)
    }

    fn get_object_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        find_mut(self.children_mut(), id)
    }

    /// Finds the first object with the given name, depth first
    fn get_object_by_name(&self, name: &str) -> Option<&SceneObject> {
        find(self.children(), &|object| object.name() == name)
    }

    fn mesh(&self, id: ObjectId) -> Option<&Mesh> {
        self.get_object(id).and_then(SceneObject::as_mesh)
    }

    fn mesh_mut(&mut self, id: ObjectId) -> Option<&mut Mesh> {
        self.get_object_mut(id).and_then(SceneObject::as_mesh_mut)
    }
}

fn find<'a>(
    children: &'a [SceneObject],
    predicate: &dyn Fn(&SceneObject) -> bool,
) -> Option<&'a SceneObject> {
    for child in children {
        if predicate(child) {
            return Some(child);
        }
        if let SceneObject::Group(group) = child {
            if let Some(found) = find(&group.children, predicate) {
                return Some(found);
            }
        }
    }
    None
}

fn find_mut(children: &mut [SceneObject], id: ObjectId) -> Option<&mut SceneObject> {
    for child in children.iter_mut() {
        if child.id() == id {
            return Some(child);
        }
        if let SceneObject::Group(group) = child {
            if let Some(found) = find_mut(&mut group.children, id) {
                return Some(found);
            }
        }
    }
    None
}

impl Container for Group {
    fn children(&self) -> &[SceneObject] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<SceneObject> {
        &mut self.children
    }
}

/// Root of the object hierarchy
#[derive(Debug)]
pub struct Scene {
    /// Origin cameras look at by default
    pub position: Vector3<f32>,
    children: Vec<SceneObject>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            position: Vector3::zero(),
            children: Vec::new(),
        }
    }

    /// Visits every object depth first
    pub fn for_each_object(&self, mut visit: impl FnMut(&SceneObject)) {
        fn walk(children: &[SceneObject], visit: &mut dyn FnMut(&SceneObject)) {
            for child in children {
                visit(child);
                if let SceneObject::Group(group) = child {
                    walk(&group.children, visit);
                }
            }
        }
        walk(&self.children, &mut visit);
    }

    /// Every light in the scene, including lights parented to groups
    pub fn lights(&self) -> Vec<&Light> {
        let mut lights = Vec::new();
        collect_lights(&self.children, &mut lights);
        lights
    }

    /// Gets statistics about the scene
    pub fn statistics(&self) -> SceneStatistics {
        let mut stats = SceneStatistics::default();
        self.for_each_object(|object| {
            stats.object_count += 1;
            match object {
                SceneObject::Mesh(mesh) => {
                    stats.mesh_count += 1;
                    stats.total_triangles += mesh.geometry.triangle_count();
                    stats.total_vertices += mesh.geometry.vertex_count();
                }
                SceneObject::Light(_) => stats.light_count += 1,
                SceneObject::Group(_) => {}
            }
        });
        stats
    }
}

fn collect_lights<'a>(children: &'a [SceneObject], lights: &mut Vec<&'a Light>) {
    for child in children {
        match child {
            SceneObject::Light(light) => lights.push(light),
            SceneObject::Group(group) => collect_lights(&group.children, lights),
            SceneObject::Mesh(_) => {}
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Container for Scene {
    fn children(&self) -> &[SceneObject] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<SceneObject> {
        &mut self.children
    }
}

/// Scene statistics for debugging and UI display
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SceneStatistics {
    pub object_count: usize,
    pub mesh_count: usize,
    pub light_count: usize,
    pub total_triangles: usize,
    pub total_vertices: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::{
        geometry::generate_box,
        light::AmbientLight,
        material::Material,
    };

    #[test]
    fn test_add_and_remove() {
        let mut scene = Scene::new();
        let id = scene.add(Mesh::new(generate_box(1.0, 1.0, 1.0), Material::normal()));
        assert!(scene.mesh(id).is_some());

        let removed = scene.remove(id).unwrap();
        assert_eq!(removed.id(), id);
        assert!(scene.get_object(id).is_none());
        assert!(scene.remove(id).is_none());
    }

    #[test]
    fn test_lookup_descends_into_groups() {
        let mut scene = Scene::new();
        let mut pivot = Group::new().with_name("pivot");
        let light_id = pivot.add(Light::ambient(AmbientLight::new(0x343434)).with_name("ambientLight"));
        scene.add(pivot);

        assert_eq!(scene.get_object_by_name("ambientLight").unwrap().id(), light_id);
        assert!(scene.get_object_mut(light_id).is_some());
        assert_eq!(scene.lights().len(), 1);
        // Removal only detaches direct children
        assert!(scene.remove(light_id).is_none());
    }

    #[test]
    fn test_statistics() {
        let mut scene = Scene::new();
        let shared = Material::lambert(0xff0000).into_shared();
        scene.add(Mesh::with_shared_material(generate_box(1.0, 1.0, 1.0), shared.clone()));
        scene.add(Mesh::with_shared_material(generate_box(2.0, 2.0, 2.0), shared));
        scene.add(Light::ambient(AmbientLight::new(0xffffff)));

        let stats = scene.statistics();
        assert_eq!(stats.object_count, 3);
        assert_eq!(stats.mesh_count, 2);
        assert_eq!(stats.light_count, 1);
        assert_eq!(stats.total_triangles, 24);
        assert_eq!(stats.total_vertices, 48);
    }

    #[test]
    fn test_transform_matrix_translation() {
        let mesh = Mesh::new(generate_box(1.0, 1.0, 1.0), Material::normal()).at(15.0, 1.0, -25.0);
        let matrix = mesh.transform.matrix();
        assert_eq!(matrix.w.truncate(), Vector3::new(15.0, 1.0, -25.0));
    }
}
