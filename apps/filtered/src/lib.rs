//! Filtered to-do list built on the Composable Todo architecture.
//!
//! Extends the basic list with a status filter (`all`, `complete`, `todo`)
//! and starts from a short seeded list.
//!
//! # Quick Start
//!
//! ```no_run
//! use composable_todo_view::{AppConfig, DomEvent, Target};
//! use todo_filtered::launch;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut app = launch(&AppConfig::from_env()?);
//!
//! app.dispatch(DomEvent::Change(Target::Tag("select"), "todo".to_string())).await?;
//! app.dispatch(DomEvent::Click(Target::text("Learn Scala"))).await?;
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
pub use types::{Filter, ParseFilterError, TodoAction, TodoItem, TodoState};
