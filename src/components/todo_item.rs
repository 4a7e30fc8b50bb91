//! Todo Item Component
//!
//! One row of the list. Edit mode is local to the row.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::controller::{edit_outcome, use_controller, EditOutcome};
use crate::models::{Todo, TodoPatch};

/// A single todo row
///
/// # Arguments
/// * `todo` - The todo to render
/// * `placeholder` - Row for an unconfirmed create: always loading, ignores input
#[component]
pub fn TodoItem(
    todo: Todo,
    #[prop(optional)] placeholder: bool,
) -> impl IntoView {
    let ctrl = use_controller();

    let id = todo.id;
    let title = todo.title;

    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(title.clone());
    let edit_ref = NodeRef::<html::Input>::new();
    let status_ref = NodeRef::<html::Input>::new();

    Effect::new(move |_| {
        if editing.get() {
            if let Some(input) = edit_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let is_loading = move || placeholder || ctrl.is_busy(id);

    let commit = {
        let title = title.clone();
        move || {
            let outcome = edit_outcome(&title, &draft.get_untracked());
            spawn_local(async move {
                let closed = match outcome {
                    EditOutcome::Delete => ctrl.delete(id).await,
                    EditOutcome::Close => true,
                    EditOutcome::Rename(clean) => ctrl.update(id, TodoPatch::title(clean)).await,
                };
                if closed {
                    set_editing.set(false);
                }
            });
        }
    };

    let cancel = {
        let title = title.clone();
        move || {
            set_draft.set(title.clone());
            set_editing.set(false);
        }
    };

    // The browser flips the box before the request settles; put it back on failure
    let sync_status = move || {
        if let Some(input) = status_ref.get_untracked() {
            input.set_checked(ctrl.store_completed(id));
        }
    };

    let toggle = move |_| {
        if placeholder {
            sync_status();
            return;
        }
        spawn_local(async move {
            if !ctrl.toggle(id).await {
                sync_status();
            }
        });
    };

    let delete = move |_| {
        if placeholder {
            return;
        }
        spawn_local(async move {
            ctrl.delete(id).await;
        });
    };

    view! {
        <div
            data-cy="Todo"
            class=move || if ctrl.is_completed(id) { "todo completed" } else { "todo" }
            on:dblclick=move |_| {
                if !placeholder {
                    set_editing.set(true);
                }
            }
        >
            <label class="todo__status-label">
                <input
                    data-cy="TodoStatus"
                    type="checkbox"
                    class="todo__status"
                    node_ref=status_ref
                    prop:checked=move || ctrl.is_completed(id)
                    on:change=toggle
                />
            </label>

            {move || if editing.get() {
                let on_submit = {
                    let commit = commit.clone();
                    move |ev: web_sys::SubmitEvent| {
                        ev.prevent_default();
                        commit();
                    }
                };
                let on_blur = {
                    let commit = commit.clone();
                    move |_| commit()
                };
                let cancel = cancel.clone();
                view! {
                    <form on:submit=on_submit>
                        <input
                            node_ref=edit_ref
                            data-cy="TodoTitleField"
                            type="text"
                            class="todo__title-field"
                            placeholder="Empty todo will be deleted"
                            prop:value=move || draft.get()
                            on:input=move |ev| set_draft.set(event_target_value(&ev))
                            on:blur=on_blur
                            on:keyup=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Escape" {
                                    cancel();
                                }
                            }
                        />
                    </form>
                }.into_any()
            } else {
                view! {
                    <span data-cy="TodoTitle" class="todo__title">
                        {title.clone()}
                    </span>
                    <button
                        type="button"
                        class="todo__remove"
                        data-cy="TodoDelete"
                        on:click=delete
                    >
                        "×"
                    </button>
                }.into_any()
            }}

            <div
                data-cy="TodoLoader"
                class=move || if is_loading() { "modal overlay is-active" } else { "modal overlay" }
            >
                <div class="modal-background has-background-white-ter" />
                <div class="loader" />
            </div>
        </div>
    }
}
