//! Single post view for `/blog/:id`.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::fetch_status::LoadingPanel;
use crate::model::date::DateInfo;
use crate::model::post::Post;
use crate::net::store::PostStore;
use crate::state::fetch::{Activation, FetchState, load_post};
use crate::util::animation::{self, FADE_IN, FADE_UP};

#[component]
pub fn SinglePostPage(store: Arc<dyn PostStore>) -> impl IntoView {
    let params = use_params_map();
    let state = RwSignal::new(FetchState::<Post>::Loading);
    let activation = Activation::new();

    {
        let activation = activation.clone();
        // Re-runs when the route param changes, each time as a new activation.
        Effect::new(move || {
            let id = params.read().get("id").unwrap_or_default();
            let ticket = activation.begin();
            state.set(FetchState::Loading);
            let store = store.clone();
            let activation = activation.clone();
            leptos::task::spawn_local(async move {
                let result = load_post(store.as_ref(), &id).await;
                if activation.is_current(ticket) {
                    state.set(result);
                }
            });
        });
    }
    on_cleanup(move || activation.deactivate());

    view! {
        <section class="post-page">
            {move || match state.get() {
                FetchState::Loading => view! { <LoadingPanel message="Loading post..."/> }.into_any(),
                FetchState::Failure(err) => {
                    view! {
                        <div class=format!("status-panel status-panel--error {FADE_IN}") role="alert">
                            <h2>{err.heading()}</h2>
                            <p>{err.to_string()}</p>
                            <a href="/blogs" class="btn btn--primary">"Back to Blogs"</a>
                        </div>
                    }
                        .into_any()
                }
                FetchState::Success(post) => view! { <PostBody post=post/> }.into_any(),
            }}
        </section>
    }
}

#[component]
fn PostBody(post: Post) -> impl IntoView {
    let date = DateInfo::local(post.created_at);
    let tags = post
        .tags
        .iter()
        .map(|tag| view! { <span class="tag">{tag.clone()}</span> })
        .collect_view();
    let paragraphs = post
        .paragraphs()
        .into_iter()
        .enumerate()
        .map(|(i, text)| {
            view! {
                <p class=format!("post-page__paragraph {FADE_UP}") style=animation::stagger_style(0.4, i)>
                    {text.to_owned()}
                </p>
            }
        })
        .collect_view();

    view! {
        <article class="post-page__article">
            <a href="/blogs" class="post-page__back">"← Back to Blogs"</a>
            <h1 class=format!("post-page__title {FADE_UP}")>{post.title.clone()}</h1>
            <div class=format!("post-page__meta {FADE_IN}") style=animation::stagger_style(0.1, 1)>
                <time datetime=date.iso.clone()>{date.exact_date.clone()}</time>
                {(!date.time.is_empty()).then(|| view! { <span class="post-page__dot">"•"</span> })}
                <span title="Published time">{date.time.clone()}</span>
                <span class="post-page__relative">{date.relative_date.clone()}</span>
            </div>
            <div class="post-page__tags">{tags}</div>
            {post
                .image
                .clone()
                .map(|src| {
                    view! { <img class=format!("post-page__image {FADE_IN}") src=src alt=post.title.clone()/> }
                })}
            <div class="post-page__body">{paragraphs}</div>
        </article>
    }
}
