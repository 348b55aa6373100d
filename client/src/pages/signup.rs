//! Account creation with email + password.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::login::validate_credentials;
use crate::state::session::SessionProvider;
use crate::util::animation::{self, FADE_UP, SCALE_IN};

pub const PASSWORD_MISMATCH: &str = "Passwords do not match";

/// Blank-field check first, then the confirmation must match exactly.
///
/// # Errors
///
/// Returns the message to show under the form.
pub fn validate_signup(email: &str, password: &str, confirm: &str) -> Result<(), &'static str> {
    validate_credentials(email, password)?;
    if password != confirm {
        return Err(PASSWORD_MISMATCH);
    }
    Ok(())
}

#[component]
pub fn SignupPage(session: SessionProvider) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(String::new());
        let email_value = email.get_untracked().trim().to_owned();
        let password_value = password.get_untracked();
        if let Err(msg) = validate_signup(&email_value, &password_value, &confirm.get_untracked()) {
            error.set(msg.to_owned());
            return;
        }
        busy.set(true);
        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match session.sign_up(&email_value, &password_value).await {
                Ok(session) => {
                    leptos::logging::log!("account created for {}", session.uid);
                    navigate("/", NavigateOptions::default());
                }
                Err(e) => error.set(e.to_string()),
            }
            busy.set(false);
        });
    };

    let field = move |index: usize, label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <label class=format!("auth-form__row {FADE_UP}") style=animation::stagger_style(0.3, index)>
                <span>{label}</span>
                <input
                    type=kind
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <div class="auth-page">
            <div class=format!("auth-card {SCALE_IN}")>
                <h1 class=format!("auth-card__title {FADE_UP}")>"Create Account"</h1>
                <p class=format!("auth-card__subtitle {FADE_UP}") style=animation::stagger_style(0.3, 0)>
                    "Join the community and start writing"
                </p>
                <form class="auth-form" on:submit=on_submit>
                    {field(1, "Email", "email", email)}
                    {field(2, "Password", "password", password)}
                    {field(3, "Confirm Password", "password", confirm)}
                    <Show when=move || !error.get().is_empty()>
                        <p class="auth-form__error" role="alert">{move || error.get()}</p>
                    </Show>
                    <button
                        class=format!("btn btn--primary auth-form__submit {FADE_UP}")
                        style=animation::stagger_style(0.3, 4)
                        type="submit"
                        disabled=move || busy.get()
                    >
                        {move || if busy.get() { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already have an account? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
