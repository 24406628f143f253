//! Declarative markup tree.
//!
//! Views are plain functions from state to [`Node`]. Listeners carry the
//! action to dispatch (or a constructor for it), so a rendered tree is a
//! complete description of what the UI shows and what each interaction does.

use std::fmt;

/// Named handle on a rendered element, used for focus management
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRef(&'static str);

impl NodeRef {
    /// Create a reference with the given name
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// The reference name
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ref:{}", self.name())
    }
}

/// What an element does when an event reaches it
#[derive(Debug, Clone)]
pub enum Listener<A> {
    /// Dispatch an action on click
    Click(A),
    /// Dispatch an action when the form is submitted
    Submit(A),
    /// Build an action from the new field value on input
    Input(fn(String) -> A),
    /// Build an action from the selected value on change
    Change(fn(String) -> A),
    /// Move keyboard focus to the referenced element on click
    Focus(NodeRef),
}

/// An element with attributes, listeners and children
#[derive(Debug, Clone)]
pub struct Element<A> {
    /// Tag name, e.g. `"li"`
    pub tag: &'static str,
    /// Identity among siblings, not rendered
    pub key: Option<String>,
    /// Attributes in insertion order; an empty value renders as a boolean attribute
    pub attributes: Vec<(&'static str, String)>,
    /// Inline style declarations
    pub style: Vec<(&'static str, String)>,
    /// Event listeners
    pub listeners: Vec<Listener<A>>,
    /// Optional reference for focus management
    pub node_ref: Option<NodeRef>,
    /// Child nodes
    pub children: Vec<Node<A>>,
}

/// A node of the markup tree
#[derive(Debug, Clone)]
pub enum Node<A> {
    /// An element
    Element(Element<A>),
    /// A text node
    Text(String),
    /// Renders nothing
    Empty,
}

/// Start building an element
#[must_use]
pub const fn el<A>(tag: &'static str) -> Element<A> {
    Element {
        tag,
        key: None,
        attributes: Vec::new(),
        style: Vec::new(),
        listeners: Vec::new(),
        node_ref: None,
        children: Vec::new(),
    }
}

/// A text node
#[must_use]
pub fn text<A>(content: impl Into<String>) -> Node<A> {
    Node::Text(content.into())
}

impl<A> Element<A> {
    /// Set the sibling key
    #[must_use]
    pub fn key(mut self, key: impl ToString) -> Self {
        self.key = Some(key.to_string());
        self
    }

    /// Add an attribute
    #[must_use]
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    /// Add a boolean attribute when `on` is true
    #[must_use]
    pub fn flag(self, name: &'static str, on: bool) -> Self {
        if on { self.attr(name, "") } else { self }
    }

    /// Add an inline style declaration
    #[must_use]
    pub fn style(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.style.push((property, value.into()));
        self
    }

    /// Attach a reference
    #[must_use]
    pub const fn node_ref(mut self, node_ref: NodeRef) -> Self {
        self.node_ref = Some(node_ref);
        self
    }

    /// Dispatch `action` on click
    #[must_use]
    pub fn on_click(mut self, action: A) -> Self {
        self.listeners.push(Listener::Click(action));
        self
    }

    /// Dispatch `action` on submit
    #[must_use]
    pub fn on_submit(mut self, action: A) -> Self {
        self.listeners.push(Listener::Submit(action));
        self
    }

    /// Dispatch `make(value)` on input
    #[must_use]
    pub fn on_input(mut self, make: fn(String) -> A) -> Self {
        self.listeners.push(Listener::Input(make));
        self
    }

    /// Dispatch `make(value)` on change
    #[must_use]
    pub fn on_change(mut self, make: fn(String) -> A) -> Self {
        self.listeners.push(Listener::Change(make));
        self
    }

    /// Focus `target` on click
    #[must_use]
    pub fn focus_on_click(mut self, target: NodeRef) -> Self {
        self.listeners.push(Listener::Focus(target));
        self
    }

    /// Append one child
    #[must_use]
    pub fn child(mut self, child: impl Into<Node<A>>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several children
    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Node<A>>) -> Self {
        self.children.extend(children);
        self
    }

    /// Value of an attribute, if set
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(attr, _)| *attr == name)
            .map(|(_, value)| value.as_str())
    }

    /// Concatenated text of the direct text children
    #[must_use]
    pub fn own_text(&self) -> String {
        self.children
            .iter()
            .filter_map(|child| match child {
                Node::Text(content) => Some(content.as_str()),
                Node::Element(_) | Node::Empty => None,
            })
            .collect()
    }
}

impl<A> From<Element<A>> for Node<A> {
    fn from(element: Element<A>) -> Self {
        Self::Element(element)
    }
}

impl<A> From<Option<Element<A>>> for Node<A> {
    fn from(element: Option<Element<A>>) -> Self {
        element.map_or(Self::Empty, Self::Element)
    }
}

impl<A> From<&str> for Node<A> {
    fn from(content: &str) -> Self {
        Self::Text(content.to_string())
    }
}

impl<A> From<String> for Node<A> {
    fn from(content: String) -> Self {
        Self::Text(content)
    }
}

impl<A> Node<A> {
    /// The element, if this node is one
    #[must_use]
    pub const fn as_element(&self) -> Option<&Element<A>> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) | Self::Empty => None,
        }
    }

    /// Visit every element in document order
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Element<A>)) {
        if let Self::Element(element) = self {
            visit(element);
            for child in &element.children {
                child.walk(visit);
            }
        }
    }

    /// Every element in document order
    #[must_use]
    pub fn elements(&self) -> Vec<&Element<A>> {
        let mut found = Vec::new();
        self.walk(&mut |element| found.push(element));
        found
    }
}
