use contactbook::{
    contact::Contact,
    core::store::ContactStore,
    view::{
        query::{ViewQuery, compare_names, visible},
        state::{ViewState, ViewSummary},
    },
};
use std::cmp::Ordering;

fn names(list: &[Contact]) -> Vec<&str> {
    list.iter().map(|c| c.name.as_str()).collect()
}

fn scenario_store() -> ContactStore {
    ContactStore::from_contacts(vec![
        Contact::new("2", "Diya Patel", "diya.patel@email.com", "9876543211").with_favorite(true),
        Contact::new("1", "Aarav Sharma", "aarav.sharma@email.com", "+91 98765 43210"),
    ])
    .unwrap()
}

#[test]
fn scenario_sort_favorites_and_phone_search() {
    let store = scenario_store();

    assert_eq!(names(&store.visible(&ViewQuery::all())), ["Aarav Sharma", "Diya Patel"]);
    assert_eq!(names(&store.visible(&ViewQuery::favorites())), ["Diya Patel"]);
    assert_eq!(names(&store.visible(&ViewQuery::search("987654321"))), ["Diya Patel"]);
}

#[test]
fn phone_match_is_raw_substring_without_normalization() {
    let store = scenario_store();

    assert!(store.visible(&ViewQuery::search("9876543210")).is_empty());
    assert_eq!(names(&store.visible(&ViewQuery::search("98765 432"))), ["Aarav Sharma"]);
    assert_eq!(names(&store.visible(&ViewQuery::search("+91"))), ["Aarav Sharma"]);
}

#[test]
fn name_and_email_match_case_insensitively() {
    let store = scenario_store();

    assert_eq!(names(&store.visible(&ViewQuery::search("PATEL"))), ["Diya Patel"]);
    assert_eq!(names(&store.visible(&ViewQuery::search("Aarav.Sharma@"))), ["Aarav Sharma"]);
    assert_eq!(names(&store.visible(&ViewQuery::search("email.com"))).len(), 2);
    assert!(store.visible(&ViewQuery::search("nobody")).is_empty());
}

#[test]
fn whitespace_only_search_matches_everything() {
    let store = scenario_store();
    assert_eq!(store.visible(&ViewQuery::search("   ")).len(), 2);
}

#[test]
fn search_text_is_matched_untrimmed() {
    let store = scenario_store();
    assert_eq!(names(&store.visible(&ViewQuery::search(" sharma"))), ["Aarav Sharma"]);
    assert!(store.visible(&ViewQuery::search("sharma ")).is_empty());
}

#[test]
fn search_and_favorites_compose() {
    let store = scenario_store();
    let query = ViewQuery {
        search: "aarav".to_string(),
        favorites_only: true,
    };
    assert!(store.visible(&query).is_empty());
}

#[test]
fn sort_is_case_insensitive_and_stable() {
    let input = vec![
        Contact::new("1", "Bob", "first@email.com", "1"),
        Contact::new("2", "alice", "alice@email.com", "2"),
        Contact::new("3", "Bob", "second@email.com", "3"),
    ];

    let out = visible(&input, &ViewQuery::all());

    assert_eq!(names(&out), ["alice", "Bob", "Bob"]);
    assert_eq!(out[1].email, "first@email.com");
    assert_eq!(out[2].email, "second@email.com");
}

#[test]
fn query_does_not_mutate_input_and_is_repeatable() {
    let input = vec![
        Contact::new("1", "Zed", "z@email.com", "1").with_favorite(true),
        Contact::new("2", "amy", "a@email.com", "2"),
    ];
    let snapshot = input.clone();
    let query = ViewQuery::search("e");

    let first = visible(&input, &query);
    let second = visible(&input, &query);

    assert_eq!(first, second);
    assert_eq!(input, snapshot);
}

#[test]
fn compare_names_orders_case_variants_lowercase_first() {
    assert_eq!(compare_names("alice", "Bob"), Ordering::Less);
    assert_eq!(compare_names("bob", "Bob"), Ordering::Less);
    assert_eq!(compare_names("Bob", "bob"), Ordering::Greater);
    assert_eq!(compare_names("Bob", "Bob"), Ordering::Equal);
    assert_eq!(compare_names("Bo", "bob"), Ordering::Less);
}

#[test]
fn view_state_tracks_query_and_summary() {
    let mut store = scenario_store();
    let mut view = ViewState::new();

    assert_eq!(
        view.summary(&store),
        ViewSummary { total: 2, favorites: 1, visible: 2 }
    );

    assert!(view.toggle_favorites_only());
    assert_eq!(names(&view.visible(&store)), ["Diya Patel"]);

    store.toggle_favorite(&"1".into());
    assert_eq!(names(&view.visible(&store)), ["Aarav Sharma", "Diya Patel"]);

    view.set_search("diya");
    assert_eq!(
        view.summary(&store),
        ViewSummary { total: 2, favorites: 2, visible: 1 }
    );

    view.set_favorites_only(false);
    view.set_search("");
    assert_eq!(view.query(), &ViewQuery::all());
}

#[test]
fn accented_names_sort_by_locale_not_code_point() {
    let input = vec![
        Contact::new("1", "Zoe", "zoe@email.com", "1"),
        Contact::new("2", "Émile", "emile@email.com", "2"),
        Contact::new("3", "Ana", "ana@email.com", "3"),
        Contact::new("4", "ólafur", "olafur@email.com", "4"),
    ];

    let out = visible(&input, &ViewQuery::all());

    assert_eq!(names(&out), ["Ana", "Émile", "ólafur", "Zoe"]);
    assert_eq!(compare_names("Émile", "Zoe"), Ordering::Less);
    assert_eq!(compare_names("emile", "Émile"), Ordering::Less);
}
