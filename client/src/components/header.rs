//! Site header with primary navigation and the login/logout control.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered at the top of the home page. Auth-gated entries point at `/login`
//! while signed out so guarded routes are never entered without a session.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::session::SessionProvider;
use crate::util::animation::{self, SLIDE_DOWN};
use crate::util::auth::LOGIN_ROUTE;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub to: &'static str,
    pub requires_auth: bool,
}

pub const NAV_ITEMS: [NavItem; 3] = [
    NavItem { label: "Home", to: "/", requires_auth: false },
    NavItem { label: "Blogs", to: "/blogs", requires_auth: false },
    NavItem { label: "Create", to: "/create", requires_auth: true },
];

/// Where a nav entry leads for the current sign-in state.
#[must_use]
pub fn nav_target(item: &NavItem, signed_in: bool) -> &'static str {
    if item.requires_auth && !signed_in { LOGIN_ROUTE } else { item.to }
}

#[component]
pub fn Header(auth: RwSignal<AuthState>, session: SessionProvider) -> impl IntoView {
    let navigate = use_navigate();
    let signed_in = move || auth.get().is_signed_in();

    let on_logout = move |_| {
        session.sign_out();
        navigate(LOGIN_ROUTE, NavigateOptions::default());
    };

    let links = NAV_ITEMS
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let item = *item;
            view! {
                <a
                    class=format!("site-header__link {SLIDE_DOWN}")
                    style=animation::stagger_style(0.2, i)
                    href=move || nav_target(&item, signed_in())
                >
                    {item.label}
                </a>
            }
        })
        .collect_view();

    view! {
        <header class=format!("site-header {SLIDE_DOWN}")>
            <a href="/" class="site-header__brand">"Quill"</a>
            <nav class="site-header__nav">
                {links}
                <a href=LOGIN_ROUTE class="btn btn--primary site-header__auth" hidden=signed_in>
                    "Login"
                </a>
                <span class="site-header__user" hidden=move || !signed_in()>
                    {move || auth.get().session.map(|s| s.label().to_owned()).unwrap_or_default()}
                </span>
                <button class="btn site-header__auth" hidden=move || !signed_in() on:click=on_logout>
                    "Logout"
                </button>
            </nav>
        </header>
    }
}
