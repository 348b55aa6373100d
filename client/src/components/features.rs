//! Static "Featured Articles" showcase on the home page.
//!
//! These entries are editorial copy, not store documents; the live collection
//! is rendered by the `/blogs` page.

use leptos::prelude::*;

use crate::util::animation::{self, FADE_UP, SCALE_IN};

struct Featured {
    title: &'static str,
    excerpt: &'static str,
    category: &'static str,
    date: &'static str,
    read_time: &'static str,
    image: &'static str,
}

const FEATURED: [Featured; 3] = [
    Featured {
        title: "The Future of Web Development in 2024",
        excerpt: "Exploring the latest trends and technologies shaping the future of web development.",
        category: "Technology",
        date: "May 15, 2024",
        read_time: "8 min read",
        image: "https://images.unsplash.com/photo-1555066931-4365d14bab8c?auto=format&fit=crop&w=1470&q=80",
    },
    Featured {
        title: "Mastering React Performance Optimization",
        excerpt: "Advanced techniques to make your React applications lightning fast.",
        category: "Development",
        date: "June 2, 2024",
        read_time: "12 min read",
        image: "https://images.unsplash.com/photo-1633356122544-f134324a6cee?auto=format&fit=crop&w=1470&q=80",
    },
    Featured {
        title: "Design Systems for Developers",
        excerpt: "How to implement and maintain design systems in large-scale applications.",
        category: "Design",
        date: "June 10, 2024",
        read_time: "10 min read",
        image: "https://images.unsplash.com/photo-1547658719-da2b51169166?auto=format&fit=crop&w=1528&q=80",
    },
];

#[component]
pub fn Features() -> impl IntoView {
    let cards = FEATURED
        .iter()
        .enumerate()
        .map(|(i, post)| {
            view! {
                <article class=format!("feature-card {SCALE_IN}") style=animation::stagger_style(0.3, i * 2)>
                    <img class="feature-card__image" src=post.image alt=post.title loading="lazy"/>
                    <div class="feature-card__body">
                        <span class="tag">{post.category}</span>
                        <h3 class="feature-card__title">{post.title}</h3>
                        <p class="feature-card__excerpt">{post.excerpt}</p>
                        <div class="feature-card__meta">
                            <span>{post.date}</span>
                            <span>{post.read_time}</span>
                        </div>
                        <a href="/blogs" class="feature-card__link">"Read more"</a>
                    </div>
                </article>
            }
        })
        .collect_view();

    view! {
        <section class="features">
            <h2 class=format!("features__title {FADE_UP}")>
                "Featured " <span class="features__accent">"Articles"</span>
            </h2>
            <p class=format!("features__subtitle {FADE_UP}") style=animation::stagger_style(0.1, 0)>
                "Discover our most popular and insightful blog posts about web development, design, and technology."
            </p>
            <div class="features__grid">{cards}</div>
            <a href="/blogs" class="btn btn--primary features__all">"View All Articles"</a>
        </section>
    }
}
