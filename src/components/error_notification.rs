//! Error Notification Component
//!
//! Banner for the current error message, with a dismiss button.

use leptos::prelude::*;

use crate::controller::use_controller;

#[component]
pub fn ErrorNotification() -> impl IntoView {
    let ctrl = use_controller();

    view! {
        <div
            data-cy="ErrorNotification"
            class=move || {
                if ctrl.error_message().is_some() {
                    "notification is-danger is-light has-text-weight-normal"
                } else {
                    "notification is-danger is-light has-text-weight-normal hidden"
                }
            }
        >
            <button
                data-cy="HideErrorButton"
                type="button"
                class="delete"
                on:click=move |_| ctrl.hide_error()
            />
            {move || ctrl.error_message().unwrap_or_default()}
        </div>
    }
}
