//! Reducer for the basic to-do list.

use crate::types::{Todo, TodoAction, TodoState};
use composable_todo_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};

/// Reducer for the basic to-do list
///
/// Needs no environment.
#[derive(Clone, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = ();

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TodoAction::ReadInput(text) => {
                state.input = text;
            },

            TodoAction::AddItem(subject) => {
                if subject.trim().is_empty() {
                    tracing::debug!("Ignoring blank item");
                } else {
                    state.todos.push(Todo::new(subject));
                }
            },

            TodoAction::ToggleItem(index) => {
                if let Some(todo) = state.todos.get_mut(index) {
                    todo.completed = !todo.completed;
                } else {
                    tracing::debug!(index, len = state.todos.len(), "Toggle out of range");
                }
            },

            TodoAction::ClearInput => state.input.clear(),

            TodoAction::ClearCompleted => state.todos.retain(|todo| !todo.completed),

            TodoAction::SubmitInput => {
                return smallvec![
                    Effect::dispatch(TodoAction::add_item(state.input.trim())),
                    Effect::dispatch(TodoAction::clear_input()),
                ];
            },
        }

        smallvec![Effect::None]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use composable_todo_testing::{ReducerTest, assertions, properties};
    use proptest::prelude::*;

    fn state_with(flags: &[bool]) -> TodoState {
        TodoState {
            todos: flags
                .iter()
                .enumerate()
                .map(|(i, &completed)| Todo {
                    subject: format!("item {i}"),
                    completed,
                })
                .collect(),
            input: String::new(),
        }
    }

    #[test]
    fn read_input_keeps_text_verbatim() {
        ReducerTest::new(TodoReducer::new())
            .with_env(())
            .given_state(TodoState::new())
            .when_action(TodoAction::read_input("  Buy milk "))
            .then_state(|state| assert_eq!(state.input, "  Buy milk "))
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn add_item_appends_open_item() {
        ReducerTest::new(TodoReducer::new())
            .with_env(())
            .given_state(TodoState::new())
            .when_action(TodoAction::add_item("Buy milk"))
            .then_state(|state| {
                assert_eq!(state.todos, vec![Todo::new("Buy milk")]);
                assert_eq!(state.input, "");
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn add_item_does_not_trim() {
        ReducerTest::new(TodoReducer::new())
            .with_env(())
            .given_state(TodoState::new())
            .when_action(TodoAction::add_item(" padded "))
            .then_state(|state| assert_eq!(state.todos[0].subject, " padded "))
            .run();
    }

    #[test]
    fn add_blank_item_is_ignored() {
        ReducerTest::new(TodoReducer::new())
            .with_env(())
            .given_state(state_with(&[false]))
            .when_actions([TodoAction::add_item(""), TodoAction::add_item("   ")])
            .then_state(|state| assert_eq!(state.count(), 1))
            .run();
    }

    #[test]
    fn toggle_out_of_range_is_noop() {
        let given = state_with(&[false, true]);
        let expected = given.clone();

        ReducerTest::new(TodoReducer::new())
            .with_env(())
            .given_state(given)
            .when_action(TodoAction::toggle_item(5))
            .then_state(move |state| assert_eq!(*state, expected))
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn clear_input_empties_input() {
        ReducerTest::new(TodoReducer::new())
            .with_env(())
            .given_state(TodoState {
                todos: Vec::new(),
                input: "draft".to_string(),
            })
            .when_action(TodoAction::clear_input())
            .then_state(|state| assert!(state.input.is_empty()))
            .run();
    }

    #[test]
    fn submit_input_dispatches_trimmed_add_then_clear() {
        ReducerTest::new(TodoReducer::new())
            .with_env(())
            .given_state(TodoState {
                todos: Vec::new(),
                input: "  Buy milk  ".to_string(),
            })
            .when_action(TodoAction::submit_input())
            .then_state(|state| {
                assert!(state.todos.is_empty());
                assert_eq!(state.input, "  Buy milk  ");
            })
            .then_effects(|effects| {
                assertions::assert_dispatches(
                    effects,
                    &[TodoAction::add_item("Buy milk"), TodoAction::clear_input()],
                );
            })
            .run();
    }

    #[test]
    fn add_toggle_clear_scenario() {
        ReducerTest::new(TodoReducer::new())
            .with_env(())
            .given_state(TodoState::new())
            .when_action(TodoAction::add_item("Buy milk"))
            .when_action(TodoAction::toggle_item(0))
            .then_state(|state| {
                assert_eq!(state.items()[0].id, 0);
                assert!(state.todos[0].completed);
            })
            .run();

        ReducerTest::new(TodoReducer::new())
            .with_env(())
            .given_state(TodoState::new())
            .when_actions([
                TodoAction::add_item("Buy milk"),
                TodoAction::toggle_item(0),
                TodoAction::clear_completed(),
            ])
            .then_state(|state| assert_eq!(*state, TodoState::new()))
            .run();
    }

    fn reduce_all(mut state: TodoState, actions: Vec<TodoAction>) -> TodoState {
        let reducer = TodoReducer::new();
        for action in actions {
            let _ = reducer.reduce(&mut state, action, &());
        }
        state
    }

    proptest! {
        #[test]
        fn add_item_appends_exactly_one(flags in properties::completion_flags(), subject in properties::subject()) {
            let before = state_with(&flags);
            let after = reduce_all(before.clone(), vec![TodoAction::add_item(subject.clone())]);
            let appended = Todo::new(subject);

            prop_assert_eq!(after.count(), before.count() + 1);
            prop_assert_eq!(&after.todos[..before.count()], &before.todos[..]);
            prop_assert_eq!(after.todos.last(), Some(&appended));
        }

        #[test]
        fn add_blank_item_changes_nothing(flags in properties::completion_flags(), subject in properties::blank_subject()) {
            let before = state_with(&flags);
            let after = reduce_all(before.clone(), vec![TodoAction::add_item(subject)]);
            prop_assert_eq!(after, before);
        }

        #[test]
        fn toggle_twice_restores(flags in properties::completion_flags(), index in 0usize..25) {
            let before = state_with(&flags);
            let after = reduce_all(
                before.clone(),
                vec![TodoAction::toggle_item(index), TodoAction::toggle_item(index)],
            );
            prop_assert_eq!(after, before);
        }

        #[test]
        fn clear_completed_keeps_open_items_in_order(flags in properties::completion_flags()) {
            let before = state_with(&flags);
            let once = reduce_all(before.clone(), vec![TodoAction::clear_completed()]);
            let twice = reduce_all(once.clone(), vec![TodoAction::clear_completed()]);

            let survivors: Vec<Todo> = before.todos.into_iter().filter(|todo| !todo.completed).collect();
            prop_assert!(once.todos.iter().all(|todo| !todo.completed));
            prop_assert_eq!(&once.todos, &survivors);
            prop_assert_eq!(twice, once);
        }
    }
}
