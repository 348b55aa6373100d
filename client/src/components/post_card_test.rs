use chrono::{TimeZone, Utc};

use super::*;

fn post(id: &str, title: &str, description: &str) -> Post {
    Post {
        id: id.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        tags: vec!["rust".to_owned(), "web".to_owned()],
        image: None,
        created_at: Some(Utc.with_ymd_and_hms(2025, 3, 4, 9, 5, 0).unwrap()),
    }
}

// =============================================================
// PostGrid
// =============================================================

#[test]
fn grid_renders_one_card_per_post() {
    let posts = vec![
        post("a", "First light", "Notes from the first morning"),
        post("b", "Second wind", "What happened after lunch"),
        post("c", "Third act", "Closing thoughts"),
    ];
    let html = view! { <PostGrid posts=posts.clone()/> }.to_html();

    assert_eq!(html.matches("class=\"post-card__title\"").count(), posts.len());
    for p in &posts {
        assert_eq!(html.matches(p.title.as_str()).count(), 1, "title {:?}", p.title);
        assert_eq!(html.matches(p.description.as_str()).count(), 1, "description {:?}", p.description);
        assert!(html.contains(&format!("href=\"/blog/{}\"", p.id)));
    }
}

#[test]
fn grid_keeps_store_order() {
    let html = view! { <PostGrid posts=vec![post("z", "Zulu", "z"), post("a", "Alpha", "a")]/> }.to_html();
    let zulu = html.find("Zulu").unwrap();
    let alpha = html.find("Alpha").unwrap();
    assert!(zulu < alpha);
}

#[test]
fn empty_grid_has_no_cards() {
    let html = view! { <PostGrid posts=Vec::new()/> }.to_html();
    assert!(!html.contains("post-card__title"));
}

// =============================================================
// PostCard
// =============================================================

#[test]
fn card_shows_tags_and_staggered_delay() {
    let html = view! { <PostCard post=post("a", "Tagged", "d") index=2/> }.to_html();
    assert!(html.contains("<span class=\"tag\">rust</span>"));
    assert!(html.contains("<span class=\"tag\">web</span>"));
    assert!(html.contains(&animation::stagger_style(0.0, 2)));
}
