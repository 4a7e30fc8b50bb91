//! User Warning Component
//!
//! Shown instead of the app when no user id was configured.

use leptos::prelude::*;

#[component]
pub fn UserWarning() -> impl IntoView {
    view! {
        <section class="section">
            <p class="box is-size-3">
                "Please get your "
                <b>"userId"</b>
                " and rebuild with it set in "
                <code>"TODO_USER_ID"</code>
                ", e.g. "
                <code>"TODO_USER_ID=2968 trunk serve"</code>
                "."
            </p>
            <p class="is-size-5">
                "Without it the app has no todo list to show."
            </p>
        </section>
    }
}
