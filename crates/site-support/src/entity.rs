//! Content entities and the entity lookup capability.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// One language variant of a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeTranslation {
    pub langcode: String,
    pub title: String,
    pub published: bool,
}

/// A content node with zero or more translations keyed by langcode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub nid: u64,
    pub translations: BTreeMap<String, NodeTranslation>,
}

impl Node {
    pub fn new(nid: u64) -> Self {
        Self {
            nid,
            translations: BTreeMap::new(),
        }
    }

    pub fn with_translation(mut self, translation: NodeTranslation) -> Self {
        self.translations
            .insert(translation.langcode.clone(), translation);
        self
    }

    pub fn has_translation(&self, langcode: &str) -> bool {
        self.translations.contains_key(langcode)
    }

    pub fn translation(&self, langcode: &str) -> Option<&NodeTranslation> {
        self.translations.get(langcode)
    }
}

/// A managed file with a URI into the site's file storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntity {
    pub fid: u64,
    pub uri: String,
}

/// Any entity the storage can hand back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Entity {
    Node(Node),
    File(FileEntity),
}

impl Entity {
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Entity::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_file(&self) -> Option<&FileEntity> {
        match self {
            Entity::File(file) => Some(file),
            _ => None,
        }
    }
}

/// Entity lookup capability. `load` returns `None` for unknown ids.
pub trait EntityStorage {
    fn load(&self, id: u64) -> Option<Entity>;
}

impl<S: EntityStorage + ?Sized> EntityStorage for &S {
    fn load(&self, id: u64) -> Option<Entity> {
        (**self).load(id)
    }
}

/// In-memory storage used by tests and wiring demos.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entities: HashMap<u64, Entity>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: u64, entity: Entity) {
        self.entities.insert(id, entity);
    }
}

impl EntityStorage for MemoryStorage {
    fn load(&self, id: u64) -> Option<Entity> {
        self.entities.get(&id).cloned()
    }
}
