//! Store and view wiring.

use crate::reducer::TodoReducer;
use crate::types::{TodoAction, TodoState};
use crate::view::todo_widget;
use composable_todo_runtime::{Store, TracingInspector};
use composable_todo_view::{AppConfig, Connected};
use std::sync::Arc;

/// Store for the basic list
pub type TodoStore = Store<TodoState, TodoAction, (), TodoReducer>;

/// The mounted application
pub type TodoApp = Connected<TodoState, TodoAction, (), TodoReducer>;

/// Build the store, attaching the dev-tools inspector when configured
#[must_use]
pub fn store(config: &AppConfig) -> TodoStore {
    let store = Store::with_config(
        TodoState::new(),
        TodoReducer::new(),
        (),
        config.store_config(),
    );

    if config.devtools {
        tracing::info!("Dev-tools inspector attached");
        store.with_inspector(Arc::new(TracingInspector))
    } else {
        store
    }
}

/// Build the store and mount the root view under the configured container
#[must_use]
pub fn launch(config: &AppConfig) -> TodoApp {
    Connected::mount(store(config), config.container.clone(), todo_widget)
}
