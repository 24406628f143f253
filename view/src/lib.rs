//! # Composable Todo View
//!
//! Declarative UI layer for the Composable Todo architecture.
//!
//! Views are pure functions from state to a [`Node`] tree. A headless
//! [`Host`] mounts the tree, routes synthetic [`DomEvent`]s to the listeners
//! on it and tracks focus. [`Connected`] ties a [`Store`](composable_todo_runtime::Store)
//! to a view so every new snapshot re-renders the host.
//!
//! ## Example
//!
//! ```ignore
//! use composable_todo_view::{Connected, Container, DomEvent, Target};
//!
//! let mut app = Connected::mount(store, Container::default(), todo_widget);
//! app.dispatch(DomEvent::Input(Target::Tag("input"), "Buy milk".into())).await?;
//! app.dispatch(DomEvent::Submit(Target::Tag("form"))).await?;
//! println!("{}", app.html());
//! ```

pub mod config;
pub mod connect;
pub mod host;
pub mod html;
pub mod node;

pub use config::{AppConfig, ConfigError};
pub use connect::{Connected, View};
pub use host::{Container, DomEvent, Host, HostError, ParseSelectorError, Target};
pub use node::{Element, Listener, Node, NodeRef, el, text};
