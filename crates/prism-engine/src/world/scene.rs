use super::{DirectionalLight, Mesh};

/// Index of a mesh inside a [`Scene`]. Stable for the scene's lifetime.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Root of the drawable world: a light, a background and meshes in draw order.
///
/// Meshes are only ever appended, so `NodeId`s never dangle.
#[derive(Debug, Clone)]
pub struct Scene {
    pub background: u32,
    pub light: DirectionalLight,
    meshes: Vec<Mesh>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            background: 0x000000,
            light: DirectionalLight::default(),
            meshes: Vec::new(),
        }
    }

    pub fn add(&mut self, mesh: Mesh) -> NodeId {
        let id = NodeId(self.meshes.len());
        log::debug!("scene: added mesh {:?} as {id:?}", mesh.name);
        self.meshes.push(mesh);
        id
    }

    pub fn mesh(&self, id: NodeId) -> Option<&Mesh> {
        self.meshes.get(id.0)
    }

    pub fn mesh_mut(&mut self, id: NodeId) -> Option<&mut Mesh> {
        self.meshes.get_mut(id.0)
    }

    /// All meshes with their ids, in insertion order.
    pub fn meshes(&self) -> impl Iterator<Item = (NodeId, &Mesh)> {
        self.meshes.iter().enumerate().map(|(i, m)| (NodeId(i), m))
    }

    /// Meshes with `visible` set.
    pub fn visible_meshes(&self) -> impl Iterator<Item = (NodeId, &Mesh)> {
        self.meshes().filter(|(_, m)| m.visible)
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::world::{BasicMaterial, Geometry};

    fn mesh(name: &str) -> Mesh {
        Mesh::new(name, Rc::new(Geometry::icosahedron(1.0, 0)), BasicMaterial::default())
    }

    #[test]
    fn ids_address_meshes_in_order() {
        let mut scene = Scene::new();
        let a = scene.add(mesh("a"));
        let b = scene.add(mesh("b"));
        assert_eq!(scene.mesh(a).map(|m| m.name.as_str()), Some("a"));
        assert_eq!(scene.mesh(b).map(|m| m.name.as_str()), Some("b"));
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn hidden_meshes_are_skipped() {
        let mut scene = Scene::new();
        let a = scene.add(mesh("a"));
        let b = scene.add(mesh("b"));
        if let Some(m) = scene.mesh_mut(a) {
            m.visible = false;
        }
        let visible: Vec<_> = scene.visible_meshes().map(|(id, _)| id).collect();
        assert_eq!(visible, vec![b]);
    }

    #[test]
    fn foreign_id_is_none() {
        let scene = Scene::new();
        assert!(scene.mesh(NodeId(4)).is_none());
    }
}
