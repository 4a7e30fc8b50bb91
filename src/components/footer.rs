//! Footer Component
//!
//! Active counter, filter links and the clear-completed button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::controller::use_controller;
use crate::models::Filter;
use crate::store::TodoStateStoreFields;

#[component]
pub fn Footer() -> impl IntoView {
    let ctrl = use_controller();
    let store = ctrl.store();
    let counts = Memo::new(move |_| ctrl.counts());

    let clear_completed = move |_| {
        spawn_local(async move {
            ctrl.clear_completed().await;
        });
    };

    view! {
        <footer class="todoapp__footer" data-cy="Footer">
            <span class="todo-count" data-cy="TodosCounter">
                {move || format!("{} items left", counts.get().active)}
            </span>

            <nav class="filter" data-cy="Filter">
                {Filter::VARIANTS.iter().map(|&filter| {
                    let is_selected = move || store.filter().get() == filter;
                    view! {
                        <a
                            href=filter.href()
                            class=move || if is_selected() { "filter__link selected" } else { "filter__link" }
                            data-cy=format!("FilterLink{}", filter.label())
                            on:click=move |_| ctrl.set_filter(filter)
                        >
                            {filter.label()}
                        </a>
                    }
                }).collect_view()}
            </nav>

            <button
                type="button"
                class="todoapp__clear-completed"
                data-cy="ClearCompletedButton"
                disabled=move || counts.get().completed == 0
                on:click=clear_completed
            >
                "Clear completed"
            </button>
        </footer>
    }
}
