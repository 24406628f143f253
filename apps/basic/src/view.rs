//! Render functions for the basic to-do list.

use crate::types::{TodoAction, TodoItem, TodoState};
use composable_todo_view::{Element, Node, NodeRef, el};

/// The text field of the add form
pub const INPUT: NodeRef = NodeRef::new("input");

/// Root view: the add form above the list
#[must_use]
pub fn todo_widget(state: &TodoState) -> Node<TodoAction> {
    el("div")
        .child(input_form(&state.input))
        .child(todo_list(&state.items()))
        .into()
}

/// Text field plus the clear-completed button; submitting adds the item
#[must_use]
pub fn input_form(input: &str) -> Element<TodoAction> {
    el("form")
        .on_submit(TodoAction::submit_input())
        .child(
            el("input")
                .flag("autofocus", true)
                .attr("value", input)
                .node_ref(INPUT)
                .on_input(TodoAction::ReadInput),
        )
        .child(
            el("button")
                .attr("type", "button")
                .on_click(TodoAction::clear_completed())
                .child("clear completed"),
        )
}

/// The list of items
#[must_use]
pub fn todo_list(items: &[TodoItem]) -> Element<TodoAction> {
    el("ul").children(items.iter().map(|todo| item(todo).into()))
}

/// One item; clicking toggles it
#[must_use]
pub fn item(todo: &TodoItem) -> Element<TodoAction> {
    el("li")
        .key(todo.id)
        .style(
            "text-decoration",
            if todo.completed { "line-through" } else { "none" },
        )
        .on_click(TodoAction::toggle_item(todo.id))
        .child(todo.subject.as_str())
}
