use super::*;

fn post(id: &str, title: &str) -> Post {
    Post {
        id: id.to_owned(),
        title: title.to_owned(),
        description: "body".to_owned(),
        tags: Vec::new(),
        image: None,
        created_at: None,
    }
}

// =============================================================
// select_post
// =============================================================

#[test]
fn select_post_finds_second_entry() {
    let found = select_post(vec![post("a", "first"), post("b", "second")], "b").unwrap();
    assert_eq!(found.title, "second");
}

#[test]
fn select_post_missing_id_is_none() {
    assert!(select_post(vec![post("a", "first"), post("b", "second")], "c").is_none());
}

#[test]
fn select_post_first_match_wins() {
    let found = select_post(vec![post("a", "one"), post("a", "two")], "a").unwrap();
    assert_eq!(found.title, "one");
}

#[test]
fn select_post_is_exact_match() {
    assert!(select_post(vec![post("abc", "x")], "ab").is_none());
    assert!(select_post(vec![post("abc", "x")], "ABC").is_none());
}

// =============================================================
// Post helpers
// =============================================================

#[test]
fn paragraphs_split_on_newlines() {
    let p = Post { description: "one\ntwo\n\nfour".to_owned(), ..post("a", "t") };
    assert_eq!(p.paragraphs(), vec!["one", "two", "", "four"]);
}

#[test]
fn href_points_at_single_post_route() {
    assert_eq!(post("abc-123", "t").href(), "/blog/abc-123");
}

// =============================================================
// parse_tags
// =============================================================

#[test]
fn parse_tags_trims_and_drops_empty() {
    assert_eq!(parse_tags(" rust, web ,, design ,"), vec!["rust", "web", "design"]);
}

#[test]
fn parse_tags_empty_input() {
    assert!(parse_tags("").is_empty());
    assert!(parse_tags(" , ,").is_empty());
}

// =============================================================
// PostDraft / NewPost
// =============================================================

#[test]
fn validate_trims_fields() {
    let draft = PostDraft {
        title: "  Hello ".to_owned(),
        description: "\nWorld\n".to_owned(),
        tags_input: "a, b".to_owned(),
    };
    let valid = draft.validate().unwrap();
    assert_eq!(valid.title, "Hello");
    assert_eq!(valid.description, "World");
    assert_eq!(valid.tags, vec!["a", "b"]);
}

#[test]
fn validate_requires_title_and_description() {
    let no_title = PostDraft { description: "body".to_owned(), ..PostDraft::default() };
    assert_eq!(no_title.validate(), Err(DraftError::MissingFields));
    let no_body = PostDraft { title: "title".to_owned(), description: "   ".to_owned(), ..PostDraft::default() };
    assert_eq!(no_body.validate(), Err(DraftError::MissingFields));
}

#[test]
fn missing_fields_message() {
    assert_eq!(DraftError::MissingFields.to_string(), "Title and description are required.");
}

#[test]
fn new_post_from_draft_assigns_uuid() {
    let draft = PostDraft {
        title: "T".to_owned(),
        description: "D".to_owned(),
        tags_input: String::new(),
    };
    let a = NewPost::from_draft(&draft).unwrap();
    let b = NewPost::from_draft(&draft).unwrap();
    assert!(uuid::Uuid::parse_str(&a.id).is_ok());
    assert_ne!(a.id, b.id);
    assert!(a.tags.is_empty());
    assert!(a.image.is_none());
}
