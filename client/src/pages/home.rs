//! Landing page: header, hero, and the featured-articles grid.

use leptos::prelude::*;

use crate::components::features::Features;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::state::auth::AuthState;
use crate::state::session::SessionProvider;

#[component]
pub fn HomePage(auth: RwSignal<AuthState>, session: SessionProvider) -> impl IntoView {
    view! {
        <div class="home-page">
            <Header auth=auth session=session/>
            <Hero/>
            <Features/>
        </div>
    }
}
