//! Create-post form, available only with a session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded twice: the route redirects to `/login` once auth has resolved
//! without a session, and [`submit_post`] refuses to write without one.
//! The store assigns the creation timestamp; the client only generates the id.

#[cfg(test)]
#[path = "create_post_test.rs"]
mod create_post_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::model::post::{NewPost, PostDraft};
use crate::net::store::{CreatedPost, PostStore};
use crate::state::auth::AuthState;
use crate::util::animation::{self, FADE_UP};
use crate::util::auth::{LOGIN_ROUTE, install_unauth_redirect};

pub const CREATE_FAILED: &str = "Failed to create post. Please try again.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No session; nothing was written.
    RedirectToLogin,
    /// Draft rejected before contacting the store.
    Invalid(String),
    Failed(String),
    Created(CreatedPost),
}

/// Validate `draft` and write it, unless no one is signed in.
pub async fn submit_post(store: &dyn PostStore, auth: &AuthState, draft: &PostDraft) -> SubmitOutcome {
    if !auth.is_signed_in() {
        return SubmitOutcome::RedirectToLogin;
    }
    let post = match NewPost::from_draft(draft) {
        Ok(post) => post,
        Err(e) => return SubmitOutcome::Invalid(e.to_string()),
    };
    match store.create(&post).await {
        Ok(created) => SubmitOutcome::Created(created),
        Err(e) => {
            leptos::logging::warn!("create post {} failed: {e}", post.id);
            SubmitOutcome::Failed(CREATE_FAILED.to_owned())
        }
    }
}

#[component]
pub fn CreatePostPage(auth: RwSignal<AuthState>, store: Arc<dyn PostStore>) -> impl IntoView {
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate.clone());

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let tags = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Route requested by the async submit.
    let destination = RwSignal::new(None::<&'static str>);
    Effect::new(move || {
        if let Some(route) = destination.get() {
            destination.set(None);
            navigate(route, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(String::new());
        let draft = PostDraft {
            title: title.get_untracked(),
            description: description.get_untracked(),
            tags_input: tags.get_untracked(),
        };
        busy.set(true);
        let store = store.clone();
        leptos::task::spawn_local(async move {
            match submit_post(store.as_ref(), &auth.get_untracked(), &draft).await {
                SubmitOutcome::Created(created) => {
                    leptos::logging::log!("created post {}", created.id);
                    destination.set(Some("/blogs"));
                }
                SubmitOutcome::RedirectToLogin => destination.set(Some(LOGIN_ROUTE)),
                SubmitOutcome::Invalid(msg) | SubmitOutcome::Failed(msg) => error.set(msg),
            }
            busy.set(false);
        });
    };

    view! {
        <Show
            when=move || auth.get().is_signed_in()
            fallback=move || {
                view! {
                    <div class="status-panel">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="create-page">
                <a href="/blogs" class="create-page__back">"← Back to Blogs"</a>
                <h1 class=format!("create-page__title {FADE_UP}")>"Create New Post"</h1>
                <form class="create-form" on:submit=on_submit.clone()>
                    <label class=format!("create-form__row {FADE_UP}") style=animation::stagger_style(0.2, 0)>
                        <span>"Title"</span>
                        <input
                            type="text"
                            placeholder="Enter post title"
                            prop:value=move || title.get()
                            on:input=move |ev| title.set(event_target_value(&ev))
                        />
                    </label>
                    <label class=format!("create-form__row {FADE_UP}") style=animation::stagger_style(0.2, 1)>
                        <span>"Content"</span>
                        <textarea
                            rows="12"
                            placeholder="Write your post content here..."
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <label class=format!("create-form__row {FADE_UP}") style=animation::stagger_style(0.2, 2)>
                        <span>"Tags"</span>
                        <input
                            type="text"
                            placeholder="design, rust, web"
                            prop:value=move || tags.get()
                            on:input=move |ev| tags.set(event_target_value(&ev))
                        />
                        <small>"Add relevant tags to help others find your post"</small>
                    </label>
                    <Show when=move || !error.get().is_empty()>
                        <p class="create-form__error" role="alert">{move || error.get()}</p>
                    </Show>
                    <button
                        class=format!("btn btn--primary {FADE_UP}")
                        style=animation::stagger_style(0.2, 3)
                        type="submit"
                        disabled=move || busy.get()
                    >
                        {move || if busy.get() { "Publishing..." } else { "Publish Post" }}
                    </button>
                </form>
            </div>
        </Show>
    }
}
