//! Sign-in page: email + password, or Google via a redirect round trip.
//!
//! SYSTEM CONTEXT
//! ==============
//! Federated sign-in leaves the app for the provider's consent page and
//! returns to `/login`. On mount this page finishes any sign-in that was
//! started in the same tab.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::identity::FederatedProvider;
use crate::state::session::SessionProvider;
use crate::util::animation::{self, FADE_UP, SCALE_IN};
use crate::util::location;

pub const MISSING_FIELDS: &str = "Please fill in all fields";

/// Reject blank credentials before contacting the provider.
///
/// # Errors
///
/// Returns [`MISSING_FIELDS`] when either field is blank.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), &'static str> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok(())
}

#[component]
pub fn LoginPage(session: SessionProvider) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let google_busy = RwSignal::new(false);
    let navigate = use_navigate();

    // Returning from the provider's consent page.
    {
        let session = session.clone();
        let navigate = navigate.clone();
        Effect::new(move || {
            if !session.has_pending_federated_sign_in() {
                return;
            }
            let Some(request_uri) = location::current_href() else {
                return;
            };
            google_busy.set(true);
            let session = session.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match session.complete_federated_sign_in(&request_uri).await {
                    Ok(_) => navigate("/", NavigateOptions::default()),
                    Err(e) => {
                        leptos::logging::warn!("federated sign-in failed: {e}");
                        error.set(e.to_string());
                        google_busy.set(false);
                    }
                }
            });
        });
    }

    let on_submit = {
        let session = session.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get_untracked() {
                return;
            }
            error.set(String::new());
            let email_value = email.get_untracked().trim().to_owned();
            let password_value = password.get_untracked();
            if let Err(msg) = validate_credentials(&email_value, &password_value) {
                error.set(msg.to_owned());
                return;
            }
            busy.set(true);
            let session = session.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match session.sign_in(&email_value, &password_value).await {
                    Ok(_) => navigate("/", NavigateOptions::default()),
                    Err(e) => error.set(e.to_string()),
                }
                busy.set(false);
            });
        }
    };

    let on_google = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        if google_busy.get_untracked() {
            return;
        }
        error.set(String::new());
        google_busy.set(true);
        let session = session.clone();
        leptos::task::spawn_local(async move {
            let continue_uri = location::absolute_url("/login");
            match session.begin_federated_sign_in(FederatedProvider::Google, &continue_uri).await {
                Ok(auth_uri) => location::redirect(&auth_uri),
                Err(e) => {
                    error.set(e.to_string());
                    google_busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class=format!("auth-card {SCALE_IN}")>
                <h1 class=format!("auth-card__title {FADE_UP}")>"Welcome Back"</h1>
                <p class=format!("auth-card__subtitle {FADE_UP}") style=animation::stagger_style(0.3, 0)>
                    "Sign in to access your account"
                </p>
                <form class="auth-form" on:submit=on_submit>
                    <label class=format!("auth-form__row {FADE_UP}") style=animation::stagger_style(0.3, 1)>
                        <span>"Email"</span>
                        <input
                            id="email"
                            type="email"
                            placeholder="you@example.com"
                            autocomplete="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class=format!("auth-form__row {FADE_UP}") style=animation::stagger_style(0.3, 2)>
                        <span>"Password"</span>
                        <input
                            id="password"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || !error.get().is_empty()>
                        <p class="auth-form__error" role="alert">{move || error.get()}</p>
                    </Show>
                    <button
                        class=format!("btn btn--primary auth-form__submit {FADE_UP}")
                        style=animation::stagger_style(0.3, 3)
                        type="submit"
                        disabled=move || busy.get()
                    >
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <div class="auth-card__divider">
                    <span>"Or continue with"</span>
                </div>
                <button
                    class=format!("btn auth-card__google {FADE_UP}")
                    style=animation::stagger_style(0.3, 4)
                    disabled=move || google_busy.get()
                    on:click=on_google
                >
                    <GoogleLogo/>
                    {move || if google_busy.get() { "Connecting..." } else { "Continue with Google" }}
                </button>
                <p class="auth-card__switch">
                    "Don't have an account? " <a href="/signin">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}

#[component]
fn GoogleLogo() -> impl IntoView {
    view! {
        <svg class="google-logo" viewBox="0 0 24 24" aria-hidden="true">
            <path
                d="M22.56 12.25c0-.78-.07-1.53-.2-2.25H12v4.26h5.92c-.26 1.37-1.04 2.53-2.21 3.31v2.77h3.57c2.08-1.92 3.28-4.74 3.28-8.09z"
                fill="#4285F4"
            />
            <path
                d="M12 23c2.97 0 5.46-.98 7.28-2.66l-3.57-2.77c-.98.66-2.23 1.06-3.71 1.06-2.86 0-5.29-1.93-6.16-4.53H2.18v2.84C3.99 20.53 7.7 23 12 23z"
                fill="#34A853"
            />
            <path
                d="M5.84 14.09c-.22-.66-.35-1.36-.35-2.09s.13-1.43.35-2.09V7.07H2.18C1.43 8.55 1 10.22 1 12s.43 3.45 1.18 4.93l2.85-2.22.81-.62z"
                fill="#FBBC05"
            />
            <path
                d="M12 5.38c1.62 0 3.06.56 4.21 1.64l3.15-3.15C17.45 2.09 14.97 1 12 1 7.7 1 3.99 3.47 2.18 7.07l3.66 2.84c.87-2.6 3.3-4.53 6.16-4.53z"
                fill="#EA4335"
            />
        </svg>
    }
}
