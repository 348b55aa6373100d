//! Listing of every post in the collection.
//!
//! SYSTEM CONTEXT
//! ==============
//! One fetch per activation. "Try Again" and "Refresh" start a new activation;
//! cleanup deactivates so a late response is dropped instead of written into
//! a disposed signal.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::fetch_status::{EmptyPanel, FailurePanel, LoadingPanel};
use crate::components::post_card::PostGrid;
use crate::model::post::Post;
use crate::net::store::PostStore;
use crate::state::fetch::{Activation, FetchState, ListingPhase, load_listing};
use crate::util::animation::FADE_UP;

#[component]
pub fn BlogsPage(store: Arc<dyn PostStore>) -> impl IntoView {
    let state = RwSignal::new(FetchState::<Vec<Post>>::Loading);
    let activation = Activation::new();

    let refetch = Callback::new({
        let activation = activation.clone();
        move |()| {
            let ticket = activation.begin();
            state.set(FetchState::Loading);
            let store = store.clone();
            let activation = activation.clone();
            leptos::task::spawn_local(async move {
                let result = load_listing(store.as_ref()).await;
                if activation.is_current(ticket) {
                    state.set(result);
                }
            });
        }
    });

    Effect::new(move || refetch.run(()));
    on_cleanup(move || activation.deactivate());

    view! {
        <section class="blogs-page">
            <header class="blogs-page__header">
                <h1 class=format!("blogs-page__title {FADE_UP}")>"Blog Articles"</h1>
                <a href="/create" class="btn btn--primary">"Write a Post"</a>
            </header>
            {move || match state.with(|s| ListingPhase::from(s)) {
                ListingPhase::Loading => view! { <LoadingPanel message="Loading articles..."/> }.into_any(),
                ListingPhase::Failure(message) => {
                    view! {
                        <FailurePanel title="Error" message=message action_label="Try Again" on_action=refetch/>
                    }
                        .into_any()
                }
                ListingPhase::Empty => {
                    view! {
                        <EmptyPanel
                            title="No articles found"
                            message="Be the first to publish something."
                            action_label="Refresh"
                            on_action=refetch
                        />
                    }
                        .into_any()
                }
                ListingPhase::Populated(posts) => view! { <PostGrid posts=posts/> }.into_any(),
            }}
        </section>
    }
}
