//! Domain types for the filtered to-do list.

use composable_todo_macros::Action;
use composable_todo_runtime::ActionRecord;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which items the list shows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    /// Every item
    #[default]
    All,
    /// Completed items only
    Complete,
    /// Open items only
    Todo,
}

/// Text that names no filter
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown filter {0:?}, expected one of all, complete, todo")]
pub struct ParseFilterError(pub String);

impl Filter {
    /// Every filter, in selector order
    pub const ALL: [Self; 3] = [Self::All, Self::Complete, Self::Todo];

    /// Name used in the selector and on the wire
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Complete => "complete",
            Self::Todo => "todo",
        }
    }

    /// Whether an item with this completion flag is shown
    #[must_use]
    pub const fn matches(self, completed: bool) -> bool {
        match self {
            Self::All => true,
            Self::Complete => completed,
            Self::Todo => !completed,
        }
    }
}

impl FromStr for Filter {
    type Err = ParseFilterError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|filter| filter.as_str() == text)
            .ok_or_else(|| ParseFilterError(text.to_string()))
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A to-do record
///
/// `id` is the list length at creation time. Once completed items are
/// cleared, a new item can get the same id as a surviving one, so the id is
/// only used as the render key. Toggling goes by position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Text of the item
    pub subject: String,
    /// Whether the item is done
    pub completed: bool,
    /// Creation-time list length
    pub id: usize,
}

impl TodoItem {
    /// An open item
    #[must_use]
    pub fn new(subject: impl Into<String>, id: usize) -> Self {
        Self {
            subject: subject.into(),
            completed: false,
            id,
        }
    }
}

/// Application state
///
/// `Default` is the empty list; [`TodoState::seeded`] is what the app starts with.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoState {
    /// Items in insertion order
    pub todos: Vec<TodoItem>,
    /// Live text of the add form
    pub input: String,
    /// Current view filter
    pub filter: Filter,
}

impl TodoState {
    /// The starting list: three learning goals, the second one done
    #[must_use]
    pub fn seeded() -> Self {
        let mut redux = TodoItem::new("Learn Redux", 1);
        redux.completed = true;

        Self {
            todos: vec![
                TodoItem::new("Learn React", 0),
                redux,
                TodoItem::new("Learn Scala", 2),
            ],
            input: String::new(),
            filter: Filter::All,
        }
    }

    /// Returns the number of items
    #[must_use]
    pub fn count(&self) -> usize {
        self.todos.len()
    }

    /// Returns the number of completed items
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|todo| todo.completed).count()
    }

    /// Items passing the current filter, with their positions
    pub fn visible(&self) -> impl Iterator<Item = (usize, &TodoItem)> {
        self.todos
            .iter()
            .enumerate()
            .filter(|(_, todo)| self.filter.matches(todo.completed))
    }
}

/// Everything that can happen to the list
///
/// Wire form is `{"type": <tag>, "payload": <value>}`. On decode the older
/// tags `readInputForm` and `clearInputForm` are accepted, and actions
/// without data ignore any payload sent along (older senders pass `""`).
#[derive(Action, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum TodoAction {
    /// Replace the input text
    ReadInput(String),
    /// Append an item; blank text is ignored
    AddItem(String),
    /// Flip the item at this position
    ToggleItem(usize),
    /// Empty the input text
    ClearInput,
    /// Drop every completed item
    ClearCompleted,
    /// Form submit: add the trimmed input, then clear it
    SubmitInput,
    /// Switch the view filter by name
    ToggleFilter(String),
}

impl TodoAction {
    /// `ReadInput`
    #[must_use]
    pub fn read_input(text: impl Into<String>) -> Self {
        Self::ReadInput(text.into())
    }

    /// `AddItem`
    #[must_use]
    pub fn add_item(subject: impl Into<String>) -> Self {
        Self::AddItem(subject.into())
    }

    /// `ToggleItem`
    #[must_use]
    pub const fn toggle_item(index: usize) -> Self {
        Self::ToggleItem(index)
    }

    /// `ClearInput`
    #[must_use]
    pub const fn clear_input() -> Self {
        Self::ClearInput
    }

    /// `ClearCompleted`
    #[must_use]
    pub const fn clear_completed() -> Self {
        Self::ClearCompleted
    }

    /// `SubmitInput`
    #[must_use]
    pub const fn submit_input() -> Self {
        Self::SubmitInput
    }

    /// `ToggleFilter`
    #[must_use]
    pub fn toggle_filter(text: impl Into<String>) -> Self {
        Self::ToggleFilter(text.into())
    }
}

impl<'de> Deserialize<'de> for TodoAction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = ActionRecord::deserialize(deserializer)?;

        match record.tag() {
            "readInput" | "readInputForm" => record.payload().map(Self::ReadInput),
            "addItem" => record.payload().map(Self::AddItem),
            "toggleItem" => record.payload().map(Self::ToggleItem),
            "clearInput" | "clearInputForm" => Ok(Self::ClearInput),
            "clearCompleted" => Ok(Self::ClearCompleted),
            "submitInput" => Ok(Self::SubmitInput),
            "toggleFilter" => record.payload().map(Self::ToggleFilter),
            _ => Err(record.unknown(Self::ACTION_TYPES)),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use composable_todo_core::action::Action as _;

    #[test]
    fn filter_parses_its_names() {
        for filter in Filter::ALL {
            assert_eq!(filter.as_str().parse::<Filter>().unwrap(), filter);
        }
        assert_eq!(
            "done".parse::<Filter>(),
            Err(ParseFilterError("done".to_string()))
        );
        assert!("All".parse::<Filter>().is_err());
    }

    #[test]
    fn filter_predicate() {
        assert!(Filter::All.matches(true) && Filter::All.matches(false));
        assert!(Filter::Complete.matches(true) && !Filter::Complete.matches(false));
        assert!(!Filter::Todo.matches(true) && Filter::Todo.matches(false));
    }

    #[test]
    fn seeded_state() {
        let state = TodoState::seeded();
        let subjects: Vec<_> = state.todos.iter().map(|todo| todo.subject.as_str()).collect();

        assert_eq!(subjects, vec!["Learn React", "Learn Redux", "Learn Scala"]);
        assert_eq!(state.completed_count(), 1);
        assert_eq!(state.filter, Filter::All);
        assert_eq!(TodoState::default().count(), 0);
    }

    #[test]
    fn visible_keeps_positions() {
        let mut state = TodoState::seeded();
        state.filter = Filter::Todo;

        let positions: Vec<_> = state.visible().map(|(index, _)| index).collect();
        assert_eq!(positions, vec![0, 2]);
    }

    #[test]
    fn legacy_tags_decode() {
        let action: TodoAction =
            serde_json::from_str(r#"{"type":"readInputForm","payload":"x"}"#).unwrap();
        assert_eq!(action, TodoAction::read_input("x"));

        let action: TodoAction = serde_json::from_str(r#"{"type":"clearInputForm"}"#).unwrap();
        assert_eq!(action, TodoAction::ClearInput);
    }

    #[test]
    fn unit_actions_ignore_payload() {
        for (record, expected) in [
            (r#"{"type":"clearInputForm","payload":""}"#, TodoAction::ClearInput),
            (r#"{"type":"clearInput","payload":null}"#, TodoAction::ClearInput),
            (r#"{"type":"clearCompleted","payload":""}"#, TodoAction::ClearCompleted),
            (r#"{"type":"submitInput","payload":{}}"#, TodoAction::SubmitInput),
        ] {
            let action: TodoAction = serde_json::from_str(record).unwrap();
            assert_eq!(action, expected, "{record}");
        }
    }

    #[test]
    fn data_actions_still_check_payload() {
        assert!(serde_json::from_str::<TodoAction>(r#"{"type":"toggleItem","payload":"x"}"#).is_err());
        assert!(serde_json::from_str::<TodoAction>(r#"{"type":"readInput"}"#).is_err());
        assert!(serde_json::from_str::<TodoAction>(r#"{"type":"clearDone","payload":""}"#).is_err());
    }

    #[test]
    fn action_types() {
        assert_eq!(TodoAction::toggle_filter("all").action_type(), "toggleFilter");
        assert_eq!(TodoAction::ACTION_TYPES.len(), 7);
        assert_eq!(
            serde_json::to_string(&TodoAction::toggle_filter("todo")).unwrap(),
            r#"{"type":"toggleFilter","payload":"todo"}"#
        );
    }
}
