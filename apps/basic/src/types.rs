//! Domain types for the basic to-do list.
//!
//! Items carry no identity of their own: the view numbers them by position
//! (see [`with_ids`]).

use composable_todo_macros::Action;
use composable_todo_runtime::ActionRecord;
use serde::{Deserialize, Deserializer, Serialize};

/// A stored to-do record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Text of the item
    pub subject: String,
    /// Whether the item is done
    pub completed: bool,
}

impl Todo {
    /// An open item
    #[must_use]
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            completed: false,
        }
    }
}

/// A record as the view sees it, numbered by position
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TodoItem {
    /// Text of the item
    pub subject: String,
    /// Whether the item is done
    pub completed: bool,
    /// Position in the list
    pub id: usize,
}

/// Number records by their position
#[must_use]
pub fn with_ids(todos: &[Todo]) -> Vec<TodoItem> {
    todos
        .iter()
        .enumerate()
        .map(|(id, todo)| TodoItem {
            subject: todo.subject.clone(),
            completed: todo.completed,
            id,
        })
        .collect()
}

/// Application state
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoState {
    /// Items in insertion order
    pub todos: Vec<Todo>,
    /// Live text of the add form
    pub input: String,
}

impl TodoState {
    /// Empty list, empty input
    #[must_use]
    pub fn new() -> Self {
        Self::default()
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

    /// Items numbered by position
    #[must_use]
    pub fn items(&self) -> Vec<TodoItem> {
        with_ids(&self.todos)
    }
}

/// Everything that can happen to the list
///
/// On the wire each action is `{"type": <tag>, "payload": <value>}`, e.g.
/// `{"type":"toggleItem","payload":0}`. `addItem` also decodes from a whole
/// record, `{"subject": .., "completed": ..}`, keeping only the subject.
/// Actions without data ignore any payload sent along.
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
    pub const fn toggle_item(id: usize) -> Self {
        Self::ToggleItem(id)
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
}

/// `addItem` payload: bare text or a full record
#[derive(Deserialize)]
#[serde(untagged)]
enum AddItemPayload {
    Subject(String),
    Record { subject: String },
}

impl<'de> Deserialize<'de> for TodoAction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = ActionRecord::deserialize(deserializer)?;

        match record.tag() {
            "readInput" => record.payload().map(Self::ReadInput),
            "addItem" => record.payload().map(|payload: AddItemPayload| match payload {
                AddItemPayload::Subject(subject) | AddItemPayload::Record { subject } => {
                    Self::AddItem(subject)
                },
            }),
            "toggleItem" => record.payload().map(Self::ToggleItem),
            "clearInput" => Ok(Self::ClearInput),
            "clearCompleted" => Ok(Self::ClearCompleted),
            "submitInput" => Ok(Self::SubmitInput),
            _ => Err(record.unknown(Self::ACTION_TYPES)),
        }
    }
}
