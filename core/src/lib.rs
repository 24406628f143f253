//! # Composable Todo Core
//!
//! Core traits and types for the Composable Todo architecture.
//!
//! This crate provides the fundamental abstractions for building small,
//! unidirectional UI applications around the Reducer pattern.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state for a feature
//! - **Action**: All possible inputs to a reducer
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Follow-up work descriptions (not execution)
//! - **Environment**: Injected dependencies via traits
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - Explicit Effects (no hidden I/O)
//! - Dependency Injection via Environment
//!
//! ## Example
//!
//! ```
//! use composable_todo_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
//!
//! #[derive(Clone, Debug, Default)]
//! struct InputState {
//!     input: String,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum InputAction {
//!     ReadInput(String),
//!     ClearInput,
//! }
//!
//! struct InputReducer;
//!
//! impl Reducer for InputReducer {
//!     type State = InputState;
//!     type Action = InputAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut InputState,
//!         action: InputAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<InputAction>; 4]> {
//!         match action {
//!             InputAction::ReadInput(text) => state.input = text,
//!             InputAction::ClearInput => state.input.clear(),
//!         }
//!         smallvec![Effect::None]
//!     }
//! }
//!
//! let mut state = InputState::default();
//! InputReducer.reduce(&mut state, InputAction::ReadInput("milk".into()), &());
//! assert_eq!(state.input, "milk");
//! ```

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use serde::{Deserialize, Serialize};
pub use smallvec::{smallvec, SmallVec};

/// Action module - Unified input type for reducers
///
/// Actions are closed enums matched exhaustively by the reducer. The string
/// tag only exists at the boundary (wire records, logs, dev tools) and is
/// usually generated with `#[derive(Action)]`.
pub mod action {
    /// Common behaviour of action enums
    pub trait Action {
        /// The camelCase wire tag of this action (e.g. `"addItem"`)
        fn action_type(&self) -> &'static str;
    }
}

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`
///
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Updates state in place
        /// 2. Returns effect descriptions to be executed
        ///
        /// The runtime calls this on a private copy of the current snapshot,
        /// so in-place updates are never observed by earlier readers.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - Follow-up work descriptions
///
/// Effects are values returned from reducers and executed by the Store
/// runtime after the reducer call that produced them.
pub mod effect {
    /// Effect type - describes work to be performed after a reduction
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Feed an action back into the reducer
        ///
        /// The store processes it before `send` returns, after any actions
        /// queued ahead of it.
        Dispatch(Box<Action>),

        /// Run effects in order
        Sequential(Vec<Effect<Action>>),
    }

    impl<Action> Effect<Action> {
        /// Dispatch a follow-up action
        #[must_use]
        pub fn dispatch(action: Action) -> Self {
            Self::Dispatch(Box::new(action))
        }

        /// Chain effects to run sequentially
        #[must_use]
        pub const fn chain(effects: Vec<Self>) -> Self {
            Self::Sequential(effects)
        }

        /// Returns true if this effect does nothing when executed
        #[must_use]
        pub fn is_none(&self) -> bool {
            match self {
                Self::None => true,
                Self::Dispatch(_) => false,
                Self::Sequential(effects) => effects.iter().all(Self::is_none),
            }
        }

        /// Flattens the effect tree into the actions it dispatches, in order
        #[must_use]
        pub fn into_actions(self) -> Vec<Action> {
            let mut actions = Vec::new();
            self.collect_into(&mut actions);
            actions
        }

        fn collect_into(self, out: &mut Vec<Action>) {
            match self {
                Self::None => {},
                Self::Dispatch(action) => out.push(*action),
                Self::Sequential(effects) => {
                    for effect in effects {
                        effect.collect_into(out);
                    }
                },
            }
        }
    }
}

/// Environment module - Dependency injection traits
///
/// All external dependencies are abstracted behind traits and injected
/// via the Environment parameter.
pub mod environment {
    use chrono::{DateTime, Utc};

    /// Clock trait - abstracts time operations for testability
    ///
    /// # Examples
    ///
    /// ```
    /// use composable_todo_core::environment::{Clock, SystemClock};
    ///
    /// let clock = SystemClock;
    /// let _now = clock.now();
    /// ```
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Production clock backed by the system time
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }
}
