//! Todo App
//!
//! Root component: setup gate, controller wiring and page layout.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpTodoApi;
use crate::components::{ErrorNotification, Footer, Header, TodoItem, TodoList, UserWarning};
use crate::config::AppConfig;
use crate::controller::TodoController;
use crate::models::Filter;
use crate::store::TodoStateStoreFields;
use crate::timer::BrowserTimer;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    if !config.is_configured() {
        log::warn!("[APP] No user id configured, showing setup instructions");
        return view! { <UserWarning /> }.into_any();
    }

    let ctrl = TodoController::new(
        config.user_id,
        Arc::new(HttpTodoApi::new(config.api_base_url.clone())),
        Arc::new(BrowserTimer),
    );
    let store = ctrl.store();

    // Provide controller to all children
    provide_context(ctrl);

    let hash = window().location().hash().unwrap_or_default();
    ctrl.set_filter(Filter::from_hash(&hash));

    // Load todos on mount
    spawn_local(async move {
        ctrl.load().await;
    });

    view! {
        <div class="todoapp">
            <h1 class="todoapp__title">"todos"</h1>

            <Header />

            <div class="todoapp__content">
                {move || ctrl.has_todos().then(|| view! { <TodoList /> })}

                {move || store.temp_todo().get().map(|todo| view! {
                    <TodoItem todo=todo placeholder=true />
                })}

                {move || ctrl.has_todos().then(|| view! { <Footer /> })}
            </div>

            <ErrorNotification />
        </div>
    }
    .into_any()
}
