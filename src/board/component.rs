//! Component capability contract and template mounting.

use super::document::{Element, HostDocument, InsertPosition};
use super::error::BoardResult;

/// Capability shared by every board component.
pub trait Component {
    /// Registers the component's handlers and subscriptions.
    ///
    /// # Errors
    ///
    /// Returns a [`super::BoardError`] when registration fails.
    fn activate(&mut self) -> BoardResult<()>;

    /// Fills the component's element with its content.
    ///
    /// # Errors
    ///
    /// Returns a [`super::BoardError`] when rendering fails.
    fn render_content(&mut self) -> BoardResult<()>;
}

/// Where and how a component's element is mounted.
#[derive(Debug, Clone, Copy)]
pub struct MountSpec<'a> {
    /// Template whose root element is instantiated.
    pub template_id: &'a str,
    /// Container the element is attached to.
    pub container_id: &'a str,
    /// Insert position inside the container.
    pub position: InsertPosition,
    /// Id given to the new element.
    pub element_id: Option<&'a str>,
}

/// Instantiates a template and attaches its root element.
///
/// Fails before touching the document when either the template or the
/// container is missing.
///
/// # Errors
///
/// Returns [`super::BoardError::MissingTemplate`] or
/// [`super::BoardError::MissingMountPoint`].
pub fn mount(document: &mut HostDocument, spec: MountSpec<'_>) -> BoardResult<Element> {
    let mut element = document.instantiate(spec.template_id)?;
    if let Some(id) = spec.element_id {
        element.set_id(id);
    }
    document.attach(spec.container_id, spec.position, element.clone())?;
    Ok(element)
}
