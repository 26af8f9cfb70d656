//! Host document model.
//!
//! The document supplies named templates and named containers. Components
//! instantiate a template's root element, give it an id and attach it to a
//! container. Containers registered by mounted components (such as a
//! column's project list) become mount points for nested components.

use super::error::{BoardError, BoardResult};
use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, PoisonError, RwLock, RwLockWriteGuard};

/// Document shared between the components mounted on it.
pub type SharedDocument = Arc<RwLock<HostDocument>>;

/// Where an element is inserted relative to its container's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    /// Before the first child.
    AfterBegin,
    /// After the last child.
    BeforeEnd,
}

/// An element instantiated from a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: BTreeSet<String>,
    draggable: bool,
}

impl Element {
    /// Creates an element with no id and no classes.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: BTreeSet::new(),
            draggable: false,
        }
    }

    /// Returns the tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the element id, if set.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Sets the element id.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    /// Returns `true` when the element can be dragged.
    #[must_use]
    pub const fn draggable(&self) -> bool {
        self.draggable
    }

    /// Marks the element as draggable or not.
    pub const fn set_draggable(&mut self, draggable: bool) {
        self.draggable = draggable;
    }

    /// Returns `true` when the element carries `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Returns the classes in sorted order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// Adds a class.
    pub fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_owned());
    }

    /// Removes a class, returning whether it was present.
    pub fn remove_class(&mut self, class: &str) -> bool {
        self.classes.remove(class)
    }

    /// Replaces `old` with `new` when `old` is present.
    pub fn replace_class(&mut self, old: &str, new: &str) -> bool {
        if self.remove_class(old) {
            self.add_class(new);
            return true;
        }
        false
    }

    /// Returns the classes joined by spaces.
    #[must_use]
    pub fn class_list(&self) -> String {
        self.classes().collect::<Vec<_>>().join(" ")
    }
}

/// Named templates and containers of a host document.
#[derive(Debug, Clone, Default)]
pub struct HostDocument {
    templates: HashMap<String, Element>,
    containers: HashMap<String, Vec<Element>>,
}

impl HostDocument {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps the document for sharing between components.
    #[must_use]
    pub fn into_shared(self) -> SharedDocument {
        Arc::new(RwLock::new(self))
    }

    /// Registers a template whose content root has the given tag.
    #[must_use]
    pub fn with_template(mut self, id: impl Into<String>, root_tag: impl Into<String>) -> Self {
        self.templates.insert(id.into(), Element::new(root_tag));
        self
    }

    /// Registers an empty container.
    #[must_use]
    pub fn with_container(mut self, id: impl Into<String>) -> Self {
        self.add_container(id);
        self
    }

    /// Registers an empty container, keeping existing children when the id
    /// is already registered.
    pub fn add_container(&mut self, id: impl Into<String>) {
        self.containers.entry(id.into()).or_default();
    }

    /// Returns the children of a container in document order.
    #[must_use]
    pub fn children(&self, container_id: &str) -> Option<&[Element]> {
        self.containers.get(container_id).map(Vec::as_slice)
    }

    /// Clones the root element of a template.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::MissingTemplate`] when no template has `id`.
    pub fn instantiate(&self, template_id: &str) -> BoardResult<Element> {
        self.templates
            .get(template_id)
            .cloned()
            .ok_or_else(|| BoardError::MissingTemplate(template_id.to_owned()))
    }

    /// Inserts an element into a container.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::MissingMountPoint`] when no container has `id`.
    pub fn attach(
        &mut self,
        container_id: &str,
        position: InsertPosition,
        element: Element,
    ) -> BoardResult<()> {
        let children = self
            .containers
            .get_mut(container_id)
            .ok_or_else(|| BoardError::MissingMountPoint(container_id.to_owned()))?;
        match position {
            InsertPosition::AfterBegin => children.insert(0, element),
            InsertPosition::BeforeEnd => children.push(element),
        }
        Ok(())
    }

    /// Removes every child of a container.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::MissingMountPoint`] when no container has `id`.
    pub fn clear(&mut self, container_id: &str) -> BoardResult<()> {
        self.containers
            .get_mut(container_id)
            .ok_or_else(|| BoardError::MissingMountPoint(container_id.to_owned()))?
            .clear();
        Ok(())
    }
}

/// Locks a shared document for writing, recovering from poisoning.
pub(crate) fn write_document(document: &SharedDocument) -> RwLockWriteGuard<'_, HostDocument> {
    document.write().unwrap_or_else(PoisonError::into_inner)
}
