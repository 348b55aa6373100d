//! Root application component with routing and the shared handles.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds the session provider, the post store, and the auth signal
//! once, then hands each route exactly the handles it uses. The session
//! subscription is dropped on cleanup, which unregisters the listener.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::{BackendConfig, META_NAME};
use crate::net::http::BrowserHttp;
use crate::net::store::{FirestoreStore, PostStore};
use crate::pages::{
    blogs::BlogsPage, create_post::CreatePostPage, home::HomePage, login::LoginPage,
    signup::SignupPage, single_post::SinglePostPage,
};
use crate::state::auth::AuthState;
use crate::state::session::SessionProvider;

/// HTML shell rendered on the server for SSR + hydration.
///
/// The backend config comes from server-provided context and is embedded as a
/// `<meta>` tag for the hydrated client.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let backend = BackendConfig::current();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=META_NAME content=backend.to_meta_content()/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let backend = BackendConfig::current();
    if !backend.is_configured() {
        leptos::logging::warn!("backend config missing api key or project id; sign-in and posts will fail");
    }

    let auth = RwSignal::new(AuthState::pending());
    let session = SessionProvider::browser(backend.clone());
    let store: Arc<dyn PostStore> = Arc::new(
        FirestoreStore::new(backend, Arc::new(BrowserHttp)).with_token_source(Arc::new(session.clone())),
    );

    let subscription = session.subscribe(move |current| auth.set(AuthState::resolved(current.cloned())));
    on_cleanup(move || drop(subscription));

    // Client only: effects do not run during SSR, so the server renders the
    // pending state.
    {
        let session = session.clone();
        Effect::new(move || {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                session.restore(chrono::Utc::now()).await;
            });
        });
    }

    let home = {
        let session = session.clone();
        move || view! { <HomePage auth=auth session=session.clone()/> }
    };
    let login = {
        let session = session.clone();
        move || view! { <LoginPage session=session.clone()/> }
    };
    let signup = move || view! { <SignupPage session=session.clone()/> };
    let create = {
        let store = store.clone();
        move || view! { <CreatePostPage auth=auth store=store.clone()/> }
    };
    let blogs = {
        let store = store.clone();
        move || view! { <BlogsPage store=store.clone()/> }
    };
    let single = move || view! { <SinglePostPage store=store.clone()/> };

    view! {
        <Stylesheet id="leptos" href="/pkg/quill.css"/>
        <Title text="Quill"/>

        <Router>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=home/>
                    <Route path=StaticSegment("login") view=login/>
                    <Route path=StaticSegment("signin") view=signup/>
                    <Route path=StaticSegment("create") view=create/>
                    <Route path=StaticSegment("blogs") view=blogs/>
                    <Route path=(StaticSegment("blog"), ParamSegment("id")) view=single/>
                </Routes>
            </main>
        </Router>
    }
}
