//! Landing hero with the headline and the two calls to action.

use leptos::prelude::*;

use crate::util::animation::{self, FADE_IN, FADE_UP};

const FLOATING_GLYPHS: [&str; 8] = ["✍️", "📚", "✨", "🖋️", "📖", "🌟", "📝", "📓"];

#[component]
pub fn Hero() -> impl IntoView {
    let glyphs = FLOATING_GLYPHS
        .iter()
        .enumerate()
        .map(|(i, glyph)| {
            view! {
                <span
                    class=format!("hero__glyph hero__glyph--{i}")
                    style=animation::stagger_style(0.0, i * 5)
                    aria-hidden="true"
                >
                    {*glyph}
                </span>
            }
        })
        .collect_view();

    view! {
        <section class="hero">
            <div class="hero__backdrop">{glyphs}</div>
            <div class=format!("hero__content {FADE_IN}") style=animation::stagger_style(0.3, 0)>
                <h1 class=format!("hero__title {FADE_UP}") style=animation::stagger_style(0.3, 1)>
                    "Discover " <span class="hero__accent">"Amazing"</span> " Stories"
                </h1>
                <p class=format!("hero__subtitle {FADE_UP}") style=animation::stagger_style(0.3, 2)>
                    "Dive into our collection of inspiring articles, tutorials, and creative writing from passionate authors."
                </p>
                <div class=format!("hero__cta {FADE_UP}") style=animation::stagger_style(0.3, 3)>
                    <a href="/blogs" class="btn btn--glass">"Explore Articles"</a>
                    <a href="/signin" class="btn btn--glass btn--accent">"Join Community"</a>
                </div>
            </div>
        </section>
    }
}
