//! # Composable Todo Runtime
//!
//! Runtime implementation for the Composable Todo architecture.
//!
//! This crate provides the Store runtime that coordinates reducer execution
//! and effect handling.
//!
//! ## Core Components
//!
//! - **Store**: The runtime that owns state, serialises dispatch and publishes snapshots
//! - **Effect Executor**: Feeds actions dispatched by effects back into the reducer
//! - **Inspector**: Optional dev-tools hook observing every processed action
//!
//! ## Example
//!
//! ```ignore
//! use composable_todo_runtime::Store;
//!
//! let store = Store::new(TodoState::default(), TodoReducer::new(), ());
//!
//! // Send an action
//! store.send(TodoAction::add_item("Buy milk")).await;
//!
//! // Read state
//! let count = store.state(|s| s.todos.len()).await;
//! ```

use composable_todo_core::{action::Action, effect::Effect, reducer::Reducer};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Dev-tools inspection hooks
pub mod devtools;

pub use devtools::{History, HistoryEntry, Inspector, TracingInspector};

/// Lenient `{type, payload}` decoding
pub mod record;

pub use record::ActionRecord;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    ///
    /// Reducers themselves cannot fail; errors only occur at the edges of
    /// the store.
    #[derive(Error, Debug)]
    pub enum StoreError {
        /// A wire record could not be decoded into an action
        ///
        /// Covers malformed JSON as well as unrecognised action types.
        /// State is left untouched.
        #[error("Failed to decode action record: {0}")]
        Decode(#[from] serde_json::Error),

        /// Snapshot channel closed
        ///
        /// Every store handle was dropped while a subscriber was waiting.
        #[error("Snapshot channel closed")]
        ChannelClosed,
    }
}

pub use error::StoreError;

/// Configuration for Store instances
///
/// # Example
///
/// ```
/// use composable_todo_runtime::StoreConfig;
///
/// let config = StoreConfig::default().with_broadcast_capacity(64);
/// assert_eq!(config.action_broadcast_capacity, 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Buffer size of the action broadcast channel
    pub action_broadcast_capacity: usize,
}

impl StoreConfig {
    /// Create a new configuration with custom values
    #[must_use]
    pub const fn new(action_broadcast_capacity: usize) -> Self {
        Self {
            action_broadcast_capacity,
        }
    }

    /// Set the action broadcast capacity
    ///
    /// Zero is bumped to one, since the channel cannot be empty.
    #[must_use]
    pub const fn with_broadcast_capacity(mut self, capacity: usize) -> Self {
        self.action_broadcast_capacity = if capacity == 0 { 1 } else { capacity };
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            action_broadcast_capacity: 16,
        }
    }
}

/// Store module - The runtime coordinator
pub mod store {
    use super::{Action, Arc, Effect, Inspector, Reducer, RwLock, StoreConfig, StoreError};
    use serde::de::DeserializeOwned;
    use std::collections::VecDeque;
    use tokio::sync::{broadcast, watch};

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (an immutable `Arc` snapshot behind a `RwLock`)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Effect execution (with feedback loop)
    /// 5. Subscribers (snapshot and action channels)
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: Arc<RwLock<Arc<S>>>,
        reducer: R,
        environment: E,
        snapshots: Arc<watch::Sender<Arc<S>>>,
        /// Every processed action, including ones dispatched by effects.
        action_broadcast: broadcast::Sender<A>,
        inspector: Option<Arc<dyn Inspector<S, A>>>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Send + Sync + 'static,
        A: Action + Clone + Send + 'static,
        S: Clone + PartialEq + Send + Sync + 'static,
        E: Send + Sync + 'static,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// Uses [`StoreConfig::default`].
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_config(initial_state, reducer, environment, StoreConfig::default())
        }

        /// Create a new store with custom configuration
        #[must_use]
        pub fn with_config(
            initial_state: S,
            reducer: R,
            environment: E,
            config: StoreConfig,
        ) -> Self {
            let initial = Arc::new(initial_state);
            let (snapshots, _) = watch::channel(Arc::clone(&initial));
            let (action_broadcast, _) =
                broadcast::channel(config.action_broadcast_capacity.max(1));

            Self {
                state: Arc::new(RwLock::new(initial)),
                reducer,
                environment,
                snapshots: Arc::new(snapshots),
                action_broadcast,
                inspector: None,
            }
        }

        /// Attach a dev-tools inspector
        ///
        /// The inspector sees the current state immediately and every
        /// processed action afterwards.
        #[must_use]
        pub fn with_inspector(mut self, inspector: Arc<dyn Inspector<S, A>>) -> Self {
            inspector.init(&self.snapshot());
            self.inspector = Some(inspector);
            self
        }

        /// Send an action to the store
        ///
        /// 1. Acquires the write lock on state
        /// 2. Reduces the action into a copy of the current snapshot
        /// 3. Queues every action dispatched by the returned effects
        /// 4. Repeats until the queue is empty
        ///
        /// Each reduction that changes state publishes a new snapshot. A
        /// reduction that leaves state equal keeps the previous `Arc`, so
        /// subscribers are not woken for no-ops.
        ///
        /// Concurrent `send` calls are processed one at a time.
        ///
        /// # Returns
        ///
        /// The snapshot after the action and all of its follow-ups.
        #[tracing::instrument(skip(self, action), fields(action = action.action_type()), name = "store_send")]
        pub async fn send(&self, action: A) -> Arc<S> {
            let mut current = self.state.write().await;
            tracing::trace!("Acquired write lock on state");

            let mut queue = VecDeque::from([action]);

            while let Some(action) = queue.pop_front() {
                let action_type = action.action_type();
                metrics::counter!("store.actions.total", "type" => action_type).increment(1);

                let mut next = S::clone(&current);
                let effects = {
                    let span = tracing::debug_span!("reducer_execution", action = action_type);
                    let _enter = span.enter();
                    self.reducer.reduce(&mut next, action.clone(), &self.environment)
                };

                for effect in effects {
                    Self::execute_effect(effect, &mut queue);
                }

                if next == **current {
                    tracing::trace!(action = action_type, "State unchanged");
                } else {
                    *current = Arc::new(next);
                    self.snapshots.send_replace(Arc::clone(&current));
                    tracing::debug!(action = action_type, "Published new snapshot");
                }

                if let Some(inspector) = &self.inspector {
                    inspector.action(&action, &current);
                }

                // No receivers is fine
                let _ = self.action_broadcast.send(action);
            }

            Arc::clone(&current)
        }

        /// Decode a `{type, payload}` wire record and send it
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::Decode`] if the record is not valid JSON or
        /// names an action type this store does not know. State is left
        /// untouched in that case.
        pub async fn send_record(&self, record: &str) -> Result<Arc<S>, StoreError>
        where
            A: DeserializeOwned,
        {
            match serde_json::from_str::<A>(record) {
                Ok(action) => Ok(self.send(action).await),
                Err(error) => {
                    tracing::debug!(%error, "Ignoring undecodable action record");
                    metrics::counter!("store.actions.rejected").increment(1);
                    Err(StoreError::Decode(error))
                },
            }
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let todo_count = store.state(|s| s.todos.len()).await;
        /// ```
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&state)
        }

        /// The most recently published snapshot
        ///
        /// Never blocks; a `send` in progress is not visible until it
        /// publishes.
        #[must_use]
        pub fn snapshot(&self) -> Arc<S> {
            Arc::clone(&self.snapshots.borrow())
        }

        /// Subscribe to state snapshots
        ///
        /// The receiver holds the latest snapshot and is notified whenever a
        /// reduction changes state.
        #[must_use]
        pub fn subscribe(&self) -> watch::Receiver<Arc<S>> {
            self.snapshots.subscribe()
        }

        /// Subscribe to processed actions
        ///
        /// Every action is broadcast after it has been reduced, including
        /// actions dispatched by effects. Slow receivers may observe
        /// `RecvError::Lagged`.
        #[must_use]
        pub fn subscribe_actions(&self) -> broadcast::Receiver<A> {
            self.action_broadcast.subscribe()
        }

        fn execute_effect(effect: Effect<A>, queue: &mut VecDeque<A>) {
            match effect {
                Effect::None => {
                    tracing::trace!("Executing Effect::None (no-op)");
                },
                Effect::Dispatch(action) => {
                    tracing::trace!(action = action.action_type(), "Queueing dispatched action");
                    metrics::counter!("store.effects.dispatched").increment(1);
                    queue.push_back(*action);
                },
                Effect::Sequential(effects) => {
                    for effect in effects {
                        Self::execute_effect(effect, queue);
                    }
                },
            }
        }
    }

    impl<S, A, E, R> Clone for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Clone,
        E: Clone,
    {
        fn clone(&self) -> Self {
            Self {
                state: Arc::clone(&self.state),
                reducer: self.reducer.clone(),
                environment: self.environment.clone(),
                snapshots: Arc::clone(&self.snapshots),
                action_broadcast: self.action_broadcast.clone(),
                inspector: self.inspector.clone(),
            }
        }
    }

    /// Wait until the next published snapshot
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ChannelClosed`] if every store handle was
    /// dropped before a new snapshot arrived.
    pub async fn changed<S>(receiver: &mut watch::Receiver<Arc<S>>) -> Result<Arc<S>, StoreError> {
        receiver
            .changed()
            .await
            .map_err(|_| StoreError::ChannelClosed)?;
        Ok(Arc::clone(&receiver.borrow_and_update()))
    }
}

// Re-export for convenience
pub use store::{Store, changed};
