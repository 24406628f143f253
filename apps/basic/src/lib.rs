//! Basic to-do list built on the Composable Todo architecture.
//!
//! Type into the field and submit to add an item, click an item to toggle
//! it, and press "clear completed" to drop finished items.
//!
//! # Quick Start
//!
//! ```no_run
//! use composable_todo_view::{AppConfig, DomEvent, Target};
//! use todo_basic::launch;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut app = launch(&AppConfig::from_env()?);
//!
//! app.dispatch(DomEvent::Input(Target::Tag("input"), "Buy milk".to_string())).await?;
//! app.dispatch(DomEvent::Submit(Target::Tag("form"))).await?;
//! app.dispatch(DomEvent::Click(Target::key(0))).await?;
//!
//! println!("{}", app.html());
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod reducer;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use app::{TodoApp, TodoStore, launch};
pub use reducer::TodoReducer;
pub use types::{Todo, TodoAction, TodoItem, TodoState, with_ids};
