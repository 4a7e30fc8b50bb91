//! Todo List Component
//!
//! Renders the todos that pass the current filter.

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::controller::use_controller;

#[component]
pub fn TodoList() -> impl IntoView {
    let ctrl = use_controller();
    let visible = Memo::new(move |_| ctrl.visible_todos());

    view! {
        <section class="todoapp__main" data-cy="TodoList">
            <For
                each=move || visible.get()
                // Mutable fields are part of the key so edits re-render the row
                key=|todo| (todo.id, todo.title.clone(), todo.completed)
                children=move |todo| view! { <TodoItem todo=todo /> }
            />
        </section>
    }
}
