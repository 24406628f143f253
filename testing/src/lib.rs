//! # Composable Todo Testing
//!
//! Testing utilities and helpers for the Composable Todo architecture.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - A Given-When-Then harness for reducers
//! - Property-based testing strategies
//! - Assertion helpers for reducer effects
//!
//! ## Example
//!
//! ```ignore
//! use composable_todo_testing::{assertions, ReducerTest};
//!
//! #[test]
//! fn test_add_item() {
//!     ReducerTest::new(TodoReducer::new())
//!         .with_env(())
//!         .given_state(TodoState::default())
//!         .when_action(TodoAction::add_item("Buy milk"))
//!         .then_state(|state| assert_eq!(state.todos.len(), 1))
//!         .then_effects(assertions::assert_no_effects)
//!         .run();
//! }
//! ```

use chrono::{DateTime, Utc};
use composable_todo_core::environment::Clock;


pub use reducer_test::{ReducerTest, assertions};

/// Mock implementations for testing.
pub mod mocks {
    use super::{Clock, DateTime, Utc};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use composable_todo_testing::mocks::FixedClock;
    /// use composable_todo_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }
}

/// Test helpers and utilities.
pub mod helpers {
    use std::fmt;
    use std::sync::{Arc, Mutex, PoisonError};
    use tracing::field::{Field, Visit};
    use tracing::subscriber::DefaultGuard;
    use tracing::{Event, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    /// Install a `tracing` subscriber that writes through the test harness
    ///
    /// Honours `RUST_LOG`. Safe to call from every test; only the first call
    /// installs anything.
    pub fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    /// Steps logged under the `devtools` tracing target
    ///
    /// ```ignore
    /// let (log, _guard) = DevtoolsLog::capture();
    /// let app = launch(&AppConfig { devtools: true, ..AppConfig::default() });
    /// assert_eq!(log.steps(), vec!["init"]);
    /// ```
    #[derive(Debug, Clone, Default)]
    pub struct DevtoolsLog {
        steps: Arc<Mutex<Vec<String>>>,
    }

    impl DevtoolsLog {
        /// Capture this thread's events into a fresh log until the guard drops
        ///
        /// `#[tokio::test]` drives the test on a single thread, so every
        /// awaited store call is captured.
        #[must_use]
        pub fn capture() -> (Self, DefaultGuard) {
            let log = Self::default();
            let subscriber = tracing_subscriber::registry().with(log.clone());
            (log, tracing::subscriber::set_default(subscriber))
        }

        /// `"init"` for the initial dump, then one action tag per processed action
        #[must_use]
        pub fn steps(&self) -> Vec<String> {
            self.steps
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }
    }

    impl<S: Subscriber> Layer<S> for DevtoolsLog {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if event.metadata().target() != "devtools" {
                return;
            }

            let mut fields = StepFields::default();
            event.record(&mut fields);
            if let Some(step) = fields.action.or(fields.message) {
                self.steps
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .push(step);
            }
        }
    }

    #[derive(Default)]
    struct StepFields {
        action: Option<String>,
        message: Option<String>,
    }

    impl Visit for StepFields {
        fn record_str(&mut self, field: &Field, value: &str) {
            if field.name() == "action" {
                self.action = Some(value.to_string());
            }
        }

        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            match field.name() {
                "action" => self.action = Some(format!("{value:?}")),
                "message" => self.message = Some(format!("{value:?}")),
                _ => {},
            }
        }
    }
}

/// Property-based testing strategies using proptest.
pub mod properties {
    use proptest::prelude::*;

    /// Item text with at least one non-whitespace character
    pub fn subject() -> impl Strategy<Value = String> {
        "[ ]{0,2}[a-zA-Z0-9][a-zA-Z0-9 !?.,-]{0,30}"
    }

    /// Item text that is empty or whitespace only
    pub fn blank_subject() -> impl Strategy<Value = String> {
        "[ \t]{0,5}"
    }

    /// A list of completion flags, used to seed todo lists
    pub fn completion_flags() -> impl Strategy<Value = Vec<bool>> {
        prop::collection::vec(any::<bool>(), 0..20)
    }
}

// Re-export commonly used items
pub use mocks::{FixedClock, test_clock};
