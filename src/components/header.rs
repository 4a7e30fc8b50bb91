//! Header Component
//!
//! Toggle-all button and the new-todo form.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::controller::use_controller;
use crate::store::TodoStateStoreFields;

#[component]
pub fn Header() -> impl IntoView {
    let ctrl = use_controller();
    let store = ctrl.store();
    let input_ref = NodeRef::<html::Input>::new();

    // Give focus back once nothing is being added or deleted
    Effect::new(move |_| {
        let busy = store.adding().get() || ctrl.is_deleting_any();
        if !busy {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = store.title_input().get_untracked();
        spawn_local(async move {
            ctrl.add(&title).await;
        });
    };

    let toggle_all = move |_| {
        spawn_local(async move {
            ctrl.toggle_all().await;
        });
    };

    view! {
        <header class="todoapp__header">
            {move || ctrl.has_todos().then(|| view! {
                <button
                    type="button"
                    class=move || {
                        if ctrl.counts().all_completed() {
                            "todoapp__toggle-all active"
                        } else {
                            "todoapp__toggle-all"
                        }
                    }
                    data-cy="ToggleAllButton"
                    on:click=toggle_all
                />
            })}

            <form on:submit=add_todo>
                <input
                    node_ref=input_ref
                    data-cy="NewTodoField"
                    type="text"
                    class="todoapp__new-todo"
                    placeholder="What needs to be done?"
                    prop:value=move || store.title_input().get()
                    on:input=move |ev| ctrl.set_title_input(event_target_value(&ev))
                    disabled=move || store.adding().get()
                />
            </form>
        </header>
    }
}
