//! Loading and failure panels shared by the post views.

use leptos::prelude::*;

use crate::util::animation::FADE_IN;

#[component]
pub fn LoadingPanel(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class=format!("status-panel status-panel--loading {FADE_IN}") role="status">
            <span class="spinner" aria-hidden="true"></span>
            <p>{message}</p>
        </div>
    }
}

/// Message plus exactly one recovery action.
#[component]
pub fn FailurePanel(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(into)] action_label: String,
    on_action: Callback<()>,
) -> impl IntoView {
    view! {
        <div class=format!("status-panel status-panel--error {FADE_IN}") role="alert">
            <h2>{title}</h2>
            <p>{message}</p>
            <button class="btn btn--primary" on:click=move |_| on_action.run(())>
                {action_label}
            </button>
        </div>
    }
}

/// Successful fetch with nothing to show.
#[component]
pub fn EmptyPanel(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(into)] action_label: String,
    on_action: Callback<()>,
) -> impl IntoView {
    view! {
        <div class=format!("status-panel status-panel--empty {FADE_IN}")>
            <h2>{title}</h2>
            <p>{message}</p>
            <button class="btn" on:click=move |_| on_action.run(())>
                {action_label}
            </button>
        </div>
    }
}
