//! Headless rendering host.
//!
//! Stands in for the browser DOM: holds the mounted tree under a container,
//! routes synthetic events to listeners and tracks keyboard focus. Every
//! render replaces the whole tree; there is no diffing.

use crate::html;
use crate::node::{Element, Listener, Node, NodeRef};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while routing an event
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HostError {
    /// Nothing in the mounted tree matches the event target
    #[error("No element matches {0}")]
    TargetNotFound(String),

    /// The target exists but ignores this kind of event
    #[error("Element {target} has no {event} listener")]
    NoListener {
        /// Event kind, e.g. `"click"`
        event: &'static str,
        /// The target that was hit
        target: String,
    },
}

/// A container selector was not `#id` or `.class`
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid container selector {0:?}, expected `#id` or `.class`")]
pub struct ParseSelectorError(pub String);

/// The element the application is mounted into
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Container {
    /// `#id`
    Id(String),
    /// `.class`
    Class(String),
}

impl Default for Container {
    fn default() -> Self {
        Self::Id("container".to_string())
    }
}

impl FromStr for Container {
    type Err = ParseSelectorError;

    fn from_str(selector: &str) -> Result<Self, Self::Err> {
        let selector = selector.trim();
        let valid = |name: &str| {
            !name.is_empty()
                && name
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        };

        match selector.split_at_checked(1) {
            Some(("#", name)) if valid(name) => Ok(Self::Id(name.to_string())),
            Some((".", name)) if valid(name) => Ok(Self::Class(name.to_string())),
            _ => Err(ParseSelectorError(selector.to_string())),
        }
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(name) => write!(f, "#{name}"),
            Self::Class(name) => write!(f, ".{name}"),
        }
    }
}

impl Container {
    fn open_tag(&self) -> String {
        match self {
            Self::Id(name) => format!("<div id=\"{}\">", html::escape(name)),
            Self::Class(name) => format!("<div class=\"{}\">", html::escape(name)),
        }
    }
}

/// How an event picks its element: the first match in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Element with this sibling key
    Key(String),
    /// Element with this tag
    Tag(&'static str),
    /// Element holding this reference
    Ref(NodeRef),
    /// Element whose direct text equals this
    Text(String),
}

impl Target {
    /// Target by key
    #[must_use]
    pub fn key(key: impl ToString) -> Self {
        Self::Key(key.to_string())
    }

    /// Target by direct text
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    fn matches<A>(&self, element: &Element<A>) -> bool {
        match self {
            Self::Key(key) => element.key.as_deref() == Some(key.as_str()),
            Self::Tag(tag) => element.tag == *tag,
            Self::Ref(node_ref) => element.node_ref == Some(*node_ref),
            Self::Text(content) => element.own_text() == *content,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => write!(f, "[key={key}]"),
            Self::Tag(tag) => write!(f, "<{tag}>"),
            Self::Ref(node_ref) => write!(f, "{node_ref}"),
            Self::Text(content) => write!(f, "{content:?}"),
        }
    }
}

/// A synthetic user interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Pointer click
    Click(Target),
    /// Form submission
    Submit(Target),
    /// Text field edit, with the new value
    Input(Target, String),
    /// Select change, with the chosen value
    Change(Target, String),
}

impl DomEvent {
    /// The element this event is aimed at
    #[must_use]
    pub const fn target(&self) -> &Target {
        match self {
            Self::Click(target)
            | Self::Submit(target)
            | Self::Input(target, _)
            | Self::Change(target, _) => target,
        }
    }

    /// Event kind name
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Click(_) => "click",
            Self::Submit(_) => "submit",
            Self::Input(..) => "input",
            Self::Change(..) => "change",
        }
    }
}

/// The headless DOM stand-in
#[derive(Debug)]
pub struct Host<A> {
    container: Container,
    tree: Node<A>,
    focused: Option<NodeRef>,
}

impl<A: Clone> Host<A> {
    /// A host with nothing mounted
    #[must_use]
    pub const fn new(container: Container) -> Self {
        Self {
            container,
            tree: Node::Empty,
            focused: None,
        }
    }

    /// Mount the root tree and focus its first `autofocus` element
    pub fn mount(&mut self, tree: Node<A>) {
        self.focused = tree
            .elements()
            .into_iter()
            .find(|element| element.attribute("autofocus").is_some())
            .and_then(|element| element.node_ref);
        self.tree = tree;
        tracing::debug!(container = %self.container, focused = ?self.focused, "Mounted root");
    }

    /// Replace the mounted tree, keeping focus if its element still exists
    pub fn render(&mut self, tree: Node<A>) {
        self.tree = tree;
        if let Some(node_ref) = self.focused {
            if !self.contains(node_ref) {
                tracing::trace!(%node_ref, "Focused element gone after render");
                self.focused = None;
            }
        }
    }

    /// The mounted tree
    #[must_use]
    pub const fn tree(&self) -> &Node<A> {
        &self.tree
    }

    /// The container selector
    #[must_use]
    pub const fn container(&self) -> &Container {
        &self.container
    }

    /// The element holding keyboard focus, if any
    #[must_use]
    pub const fn focused(&self) -> Option<NodeRef> {
        self.focused
    }

    /// The container with the mounted tree inside, as HTML
    #[must_use]
    pub fn html(&self) -> String {
        format!("{}{}</div>", self.container.open_tag(), html::render(&self.tree))
    }

    /// Route an event and return the actions it produces, in order
    ///
    /// Clicking a submit button also submits its enclosing form. Focus
    /// listeners are applied here and produce no action.
    ///
    /// # Errors
    ///
    /// - [`HostError::TargetNotFound`] if no element matches the target
    /// - [`HostError::NoListener`] if the element ignores the event
    pub fn handle(&mut self, event: &DomEvent) -> Result<Vec<A>, HostError> {
        let target = event.target();
        let path = find_path(&self.tree, target)
            .ok_or_else(|| HostError::TargetNotFound(target.to_string()))?;
        let Some(element) = element_at(&self.tree, &path) else {
            return Err(HostError::TargetNotFound(target.to_string()));
        };

        let mut actions = Vec::new();
        let mut focus = None;
        let mut handled = false;

        for listener in &element.listeners {
            match (event, listener) {
                (DomEvent::Click(_), Listener::Click(action))
                | (DomEvent::Submit(_), Listener::Submit(action)) => {
                    actions.push(action.clone());
                    handled = true;
                },
                (DomEvent::Input(_, value), Listener::Input(make))
                | (DomEvent::Change(_, value), Listener::Change(make)) => {
                    actions.push(make(value.clone()));
                    handled = true;
                },
                (DomEvent::Click(_), Listener::Focus(node_ref)) => {
                    focus = Some(*node_ref);
                    handled = true;
                },
                _ => {},
            }
        }

        if matches!(event, DomEvent::Click(_)) && is_submit_button(element) {
            let form = (0..path.len())
                .rev()
                .filter_map(|depth| element_at(&self.tree, &path[..depth]))
                .find(|ancestor| ancestor.tag == "form");

            if let Some(form) = form {
                for listener in &form.listeners {
                    if let Listener::Submit(action) = listener {
                        actions.push(action.clone());
                        handled = true;
                    }
                }
            }
        }

        if !handled {
            return Err(HostError::NoListener {
                event: event.kind(),
                target: target.to_string(),
            });
        }

        if let Some(node_ref) = focus {
            if self.contains(node_ref) {
                self.focused = Some(node_ref);
            }
        }

        tracing::trace!(event = event.kind(), %target, actions = actions.len(), "Routed event");
        Ok(actions)
    }

    fn contains(&self, node_ref: NodeRef) -> bool {
        find_path(&self.tree, &Target::Ref(node_ref)).is_some()
    }
}

fn is_submit_button<A>(element: &Element<A>) -> bool {
    element.tag == "button" && !matches!(element.attribute("type"), Some("button" | "reset"))
}

/// Child indices from the root to the first element matching `target`
fn find_path<A>(root: &Node<A>, target: &Target) -> Option<Vec<usize>> {
    fn search<A>(node: &Node<A>, target: &Target, path: &mut Vec<usize>) -> bool {
        let Node::Element(element) = node else {
            return false;
        };
        if target.matches(element) {
            return true;
        }
        for (index, child) in element.children.iter().enumerate() {
            path.push(index);
            if search(child, target, path) {
                return true;
            }
            path.pop();
        }
        false
    }

    let mut path = Vec::new();
    search(root, target, &mut path).then_some(path)
}

fn element_at<'a, A>(root: &'a Node<A>, path: &[usize]) -> Option<&'a Element<A>> {
    let mut element = root.as_element()?;
    for &index in path {
        element = element.children.get(index)?.as_element()?;
    }
    Some(element)
}
