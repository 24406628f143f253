//! Render functions for the filtered to-do list.

use crate::types::{Filter, TodoAction, TodoItem, TodoState};
use composable_todo_view::{Element, Node, NodeRef, el};

/// The text field of the add form
pub const INPUT: NodeRef = NodeRef::new("input");

/// Root view: header, filter selector, list, add form
#[must_use]
pub fn todo_container(state: &TodoState) -> Node<TodoAction> {
    el("div")
        .child(header())
        .child(filter(state.filter))
        .child(todo_list(state))
        .child(todo_form(&state.input))
        .into()
}

/// Page title
#[must_use]
pub fn header() -> Element<TodoAction> {
    el("h1").child("Todo List")
}

/// Labelled selector with one option per filter
#[must_use]
pub fn filter(current: Filter) -> Element<TodoAction> {
    let options = Filter::ALL.into_iter().map(|option| {
        Node::from(
            el("option")
                .key(option)
                .attr("value", option.as_str())
                .flag("selected", option == current)
                .child(option.as_str()),
        )
    });

    el("label")
        .child("Filter:")
        .child(el("select").on_change(TodoAction::ToggleFilter).children(options))
}

/// Items passing the current filter
#[must_use]
pub fn todo_list(state: &TodoState) -> Element<TodoAction> {
    el("ul").children(state.visible().map(|(index, todo)| item(index, todo).into()))
}

/// One item, keyed by its id; clicking toggles the item at `index`
#[must_use]
pub fn item(index: usize, todo: &TodoItem) -> Element<TodoAction> {
    el("li")
        .key(todo.id)
        .style(
            "text-decoration",
            if todo.completed { "line-through" } else { "none" },
        )
        .on_click(TodoAction::toggle_item(index))
        .child(todo.subject.as_str())
}

/// Text field, add button and clear-completed button
///
/// The add button submits the form and puts focus back on the field.
#[must_use]
pub fn todo_form(input: &str) -> Element<TodoAction> {
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
                .attr("type", "submit")
                .focus_on_click(INPUT)
                .child("add"),
        )
        .child(
            el("button")
                .attr("type", "button")
                .on_click(TodoAction::clear_completed())
                .child("clear completed"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use composable_todo_view::{Listener, html};

    #[test]
    fn seeded_list_renders_all_items() {
        let list: Node<TodoAction> = todo_list(&TodoState::seeded()).into();
        assert_eq!(
            html::render(&list),
            "<ul>\
             <li style=\"text-decoration: none\">Learn React</li>\
             <li style=\"text-decoration: line-through\">Learn Redux</li>\
             <li style=\"text-decoration: none\">Learn Scala</li>\
             </ul>"
        );
    }

    #[test]
    fn filter_hides_items_but_keeps_positions() {
        let state = TodoState {
            filter: Filter::Todo,
            ..TodoState::seeded()
        };
        let list = todo_list(&state);

        let clicks: Vec<_> = list
            .children
            .iter()
            .filter_map(Node::as_element)
            .flat_map(|li| li.listeners.iter())
            .filter_map(|listener| match listener {
                Listener::Click(TodoAction::ToggleItem(index)) => Some(*index),
                _ => None,
            })
            .collect();
        assert_eq!(clicks, vec![0, 2]);
    }

    #[test]
    fn selector_marks_current_filter() {
        let label: Node<TodoAction> = filter(Filter::Complete).into();
        assert_eq!(
            html::render(&label),
            "<label>Filter:<select>\
             <option value=\"all\">all</option>\
             <option value=\"complete\" selected>complete</option>\
             <option value=\"todo\">todo</option>\
             </select></label>"
        );
    }

    #[test]
    fn container_order() {
        let root = todo_container(&TodoState::default());
        let tags: Vec<_> = root
            .as_element()
            .map(|div| {
                div.children
                    .iter()
                    .filter_map(Node::as_element)
                    .map(|child| child.tag)
                    .collect()
            })
            .unwrap_or_default();
        assert_eq!(tags, vec!["h1", "label", "ul", "form"]);
    }
}
