//! Reducer for the filtered to-do list.

use crate::types::{Filter, TodoAction, TodoItem, TodoState};
use composable_todo_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};

/// Reducer for the filtered to-do list
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
            TodoAction::ReadInput(text) => state.input = text,

            TodoAction::AddItem(subject) => {
                if subject.trim().is_empty() {
                    tracing::debug!("Ignoring blank item");
                } else {
                    let id = state.todos.len();
                    state.todos.push(TodoItem::new(subject, id));
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

            TodoAction::ToggleFilter(text) => match text.parse::<Filter>() {
                Ok(filter) => state.filter = filter,
                Err(error) => tracing::warn!(%error, "Ignoring filter change"),
            },

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
                .map(|(id, &completed)| TodoItem {
                    subject: format!("item {id}"),
                    completed,
                    id,
                })
                .collect(),
            ..TodoState::default()
        }
    }

    fn reduce_all(mut state: TodoState, actions: Vec<TodoAction>) -> TodoState {
        let reducer = TodoReducer::new();
        for action in actions {
            let _ = reducer.reduce(&mut state, action, &());
        }
        state
    }

    #[test]
    fn add_item_uses_list_length_as_id() {
        ReducerTest::new(TodoReducer::new())
            .with_env(())
            .given_state(TodoState::seeded())
            .when_action(TodoAction::add_item("Learn Rust"))
            .then_state(|state| {
                assert_eq!(state.todos.last(), Some(&TodoItem::new("Learn Rust", 3)));
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn ids_repeat_after_clearing_completed() {
        ReducerTest::new(TodoReducer::new())
            .with_env(())
            .given_state(TodoState::seeded())
            .when_actions([
                TodoAction::clear_completed(),
                TodoAction::add_item("Learn Rust"),
            ])
            .then_state(|state| {
                let ids: Vec<_> = state.todos.iter().map(|todo| todo.id).collect();
                assert_eq!(ids, vec![0, 2, 2]);
            })
            .run();
    }

    #[test]
    fn toggle_goes_by_position_even_with_repeated_ids() {
        let state = reduce_all(
            TodoState::seeded(),
            vec![
                TodoAction::clear_completed(),
                TodoAction::add_item("Learn Rust"),
                TodoAction::toggle_item(2),
            ],
        );

        assert!(!state.todos[1].completed);
        assert!(state.todos[2].completed);
        assert_eq!(state.todos[2].subject, "Learn Rust");
    }

    #[test]
    fn toggle_filter_switches_filter() {
        ReducerTest::new(TodoReducer::new())
            .with_env(())
            .given_state(TodoState::seeded())
            .when_action(TodoAction::toggle_filter("complete"))
            .then_state(|state| {
                assert_eq!(state.filter, Filter::Complete);
                assert_eq!(state.todos, TodoState::seeded().todos);
            })
            .run();
    }

    #[test]
    fn invalid_filter_is_noop() {
        ReducerTest::new(TodoReducer::new())
            .with_env(())
            .given_state(TodoState {
                filter: Filter::Todo,
                ..TodoState::seeded()
            })
            .when_action(TodoAction::toggle_filter("done"))
            .then_state(|state| assert_eq!(state.filter, Filter::Todo))
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn toggle_out_of_range_is_noop() {
        ReducerTest::new(TodoReducer::new())
            .with_env(())
            .given_state(TodoState::seeded())
            .when_action(TodoAction::toggle_item(3))
            .then_state(|state| assert_eq!(*state, TodoState::seeded()))
            .run();
    }

    #[test]
    fn submit_input_dispatches_trimmed_add_then_clear() {
        ReducerTest::new(TodoReducer::new())
            .with_env(())
            .given_state(TodoState {
                input: " Learn Rust\t".to_string(),
                ..TodoState::default()
            })
            .when_action(TodoAction::submit_input())
            .then_effects(|effects| {
                assertions::assert_dispatches(
                    effects,
                    &[TodoAction::add_item("Learn Rust"), TodoAction::clear_input()],
                );
            })
            .run();
    }

    #[test]
    fn read_then_clear_input() {
        ReducerTest::new(TodoReducer::new())
            .with_env(())
            .given_state(TodoState::default())
            .when_action(TodoAction::read_input("draft"))
            .then_state(|state| assert_eq!(state.input, "draft"))
            .run();

        ReducerTest::new(TodoReducer::new())
            .with_env(())
            .given_state(TodoState {
                input: "draft".to_string(),
                ..TodoState::default()
            })
            .when_action(TodoAction::clear_input())
            .then_state(|state| assert!(state.input.is_empty()))
            .run();
    }

    proptest! {
        #[test]
        fn add_item_appends_exactly_one(flags in properties::completion_flags(), subject in properties::subject()) {
            let before = state_with(&flags);
            let after = reduce_all(before.clone(), vec![TodoAction::add_item(subject.clone())]);
            let appended = TodoItem::new(subject, before.count());

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
        fn clear_completed_is_idempotent(flags in properties::completion_flags()) {
            let before = state_with(&flags);
            let once = reduce_all(before.clone(), vec![TodoAction::clear_completed()]);
            let twice = reduce_all(once.clone(), vec![TodoAction::clear_completed()]);

            let survivors: Vec<TodoItem> = before.todos.into_iter().filter(|todo| !todo.completed).collect();
            prop_assert!(once.todos.iter().all(|todo| !todo.completed));
            prop_assert_eq!(&once.todos, &survivors);
            prop_assert_eq!(twice, once);
        }

        #[test]
        fn filter_never_changes_items(flags in properties::completion_flags(), name in "all|complete|todo|[a-z]{0,8}") {
            let before = state_with(&flags);
            let after = reduce_all(before.clone(), vec![TodoAction::toggle_filter(name)]);
            prop_assert_eq!(after.todos, before.todos);
        }
    }
}
