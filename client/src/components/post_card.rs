//! Listing cards for posts.

#[cfg(test)]
#[path = "post_card_test.rs"]
mod post_card_test;

use leptos::prelude::*;

use crate::model::date::DateInfo;
use crate::model::post::Post;
use crate::util::animation::{self, FADE_UP};

#[component]
pub fn PostCard(post: Post, index: usize) -> impl IntoView {
    let date = DateInfo::local(post.created_at);
    let href = post.href();
    let tags = post
        .tags
        .iter()
        .map(|tag| view! { <span class="tag">{tag.clone()}</span> })
        .collect_view();

    view! {
        <article class=format!("post-card {FADE_UP}") style=animation::stagger_style(0.0, index)>
            <div class="post-card__meta">
                <time datetime=date.iso.clone() title=date.full_date_time.clone()>
                    {date.exact_date.clone()}
                </time>
                <span class="post-card__relative">{date.relative_date.clone()}</span>
            </div>
            <h2 class="post-card__title">{post.title.clone()}</h2>
            <p class="post-card__description">{post.description.clone()}</p>
            <div class="post-card__tags">{tags}</div>
            <a href=href class="post-card__link">"Read More"</a>
        </article>
    }
}

/// Grid of one card per post, in the given order.
#[component]
pub fn PostGrid(posts: Vec<Post>) -> impl IntoView {
    view! {
        <div class="blogs-page__grid">
            {posts
                .into_iter()
                .enumerate()
                .map(|(index, post)| view! { <PostCard post=post index=index/> })
                .collect_view()}
        </div>
    }
}
