//! Store inspection hooks.
//!
//! An [`Inspector`] is attached to a store with
//! [`Store::with_inspector`](crate::Store::with_inspector) and observes the
//! initial state plus every processed action. Stores without an inspector
//! skip the hook entirely.

use chrono::{DateTime, Utc};
use composable_todo_core::{action::Action, environment::Clock};
use serde::Serialize;
use std::sync::Mutex;

/// Observer of store activity
pub trait Inspector<S, A>: Send + Sync {
    /// Called once when the inspector is attached
    fn init(&self, _state: &S) {}

    /// Called after `action` has been reduced, with the resulting state
    fn action(&self, action: &A, state: &S);
}

/// Logs every action and the resulting state as JSON at `debug`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingInspector;

impl TracingInspector {
    fn dump<S: Serialize>(state: &S) -> String {
        serde_json::to_string(state)
            .unwrap_or_else(|error| format!("<unserializable state: {error}>"))
    }
}

impl<S, A> Inspector<S, A> for TracingInspector
where
    S: Serialize,
    A: Action,
{
    fn init(&self, state: &S) {
        tracing::debug!(target: "devtools", state = %Self::dump(state), "init");
    }

    fn action(&self, action: &A, state: &S) {
        tracing::debug!(
            target: "devtools",
            action = action.action_type(),
            state = %Self::dump(state),
            "action"
        );
    }
}

/// One recorded step of a [`History`]
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry<S> {
    /// Tag of the action, `None` for the initial state
    pub action_type: Option<&'static str>,
    /// State after the action
    pub state: S,
    /// When the entry was recorded
    pub at: DateTime<Utc>,
}

/// Records every step the store takes, timestamped by an injected clock
///
/// # Example
///
/// ```ignore
/// let history = Arc::new(History::new(SystemClock));
/// let store = Store::new(state, reducer, env).with_inspector(history.clone());
/// store.send(action).await;
/// assert_eq!(history.len(), 2);
/// ```
#[derive(Debug)]
pub struct History<S, C> {
    clock: C,
    entries: Mutex<Vec<HistoryEntry<S>>>,
}

impl<S: Clone, C: Clock> History<S, C> {
    /// Create an empty history
    #[must_use]
    pub const fn new(clock: C) -> Self {
        Self {
            clock,
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Copy of every recorded entry, oldest first
    #[must_use]
    pub fn entries(&self) -> Vec<HistoryEntry<S>> {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// Number of recorded entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .len()
    }

    /// Whether nothing has been recorded yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn record(&self, action_type: Option<&'static str>, state: &S) {
        let entry = HistoryEntry {
            action_type,
            state: state.clone(),
            at: self.clock.now(),
        };
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(entry);
    }
}

impl<S, A, C> Inspector<S, A> for History<S, C>
where
    S: Clone + Send,
    A: Action,
    C: Clock,
{
    fn init(&self, state: &S) {
        self.record(None, state);
    }

    fn action(&self, action: &A, state: &S) {
        self.record(Some(action.action_type()), state);
    }
}
