use contactbook::{
    capability::{ActionError, ContactAction, parse_contact_action},
    core::store::ContactStore,
    draft::{ContactDraft, RequiredField, ValidationError},
    seed::{initial_contacts, seeded_store},
    view::query::ViewQuery,
};

const NOW_MS: u64 = 1_700_000_000_000;

#[test]
fn draft_reports_first_missing_field_in_form_order() {
    let empty = ContactDraft::default();
    assert_eq!(
        empty.validate(),
        Err(ValidationError::MissingField(RequiredField::Name))
    );

    let no_email = ContactDraft {
        name: "Anya".to_string(),
        phone: "123".to_string(),
        ..ContactDraft::default()
    };
    assert_eq!(
        no_email.into_contact().unwrap_err(),
        ValidationError::MissingField(RequiredField::Email)
    );
}

#[test]
fn draft_mints_unique_ids_with_defaults() {
    let draft = ContactDraft {
        name: "Anya".to_string(),
        email: "anya@email.com".to_string(),
        phone: "123".to_string(),
        location: String::new(),
    };

    let a = draft.clone().into_contact().expect("valid");
    let b = draft.into_contact().expect("valid");

    assert_ne!(a.id, b.id);
    assert!(!a.is_favorite);
    assert_eq!(a.avatar, None);
    assert_eq!(a.last_contacted_ms, None);

    let mut store = ContactStore::new();
    store.add(a).expect("add a");
    store.add(b).expect("add b");
    assert_eq!(store.len(), 2);
}

#[test]
fn seed_resolves_relative_timestamps() {
    let contacts = initial_contacts(NOW_MS).expect("seed");

    assert_eq!(contacts.len(), 6);
    assert_eq!(contacts[0].name, "Aarav Sharma");
    assert_eq!(contacts[0].last_contacted_ms, Some(NOW_MS - 2 * 24 * 60 * 60 * 1000));
    assert_eq!(contacts[1].last_contacted_ms, Some(NOW_MS - 5 * 60 * 60 * 1000));
    assert_eq!(contacts[4].last_contacted_ms, None);
    assert!(contacts[2].birth_date_ms.is_some());
    assert!(contacts.iter().all(|c| !c.phone.is_empty() && !c.email.is_empty()));
}

#[test]
fn seeded_store_keeps_seed_order_and_sorts_view() {
    let store = seeded_store(NOW_MS).expect("seed");

    let canonical: Vec<&str> = store.contacts().map(|c| c.id.as_str()).collect();
    assert_eq!(canonical, ["1", "2", "3", "4", "5", "6"]);
    assert_eq!(store.favorite_count(), 2);

    let hits: Vec<String> = store
        .visible(&ViewQuery::search("maharashtra"))
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert!(hits.is_empty(), "location is not searchable");

    let hits: Vec<String> = store
        .visible(&ViewQuery::search("98"))
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(
        hits,
        [
            "Aarav Sharma",
            "Diya Patel",
            "Ishaan Verma",
            "Kavya Reddy",
            "Rohan Gupta",
            "Saanvi Singh"
        ]
    );
}

#[test]
fn only_add_and_toggle_are_implemented() {
    let implemented: Vec<ContactAction> = ContactAction::implemented().collect();
    assert_eq!(implemented, [ContactAction::Add, ContactAction::ToggleFavorite]);
    assert!(!ContactAction::Delete.is_implemented());
    assert_eq!(ContactAction::all().len(), 11);
}

#[test]
fn actions_parse_from_string_ids() {
    for action in ContactAction::all() {
        assert_eq!(parse_contact_action(action.as_str()), Ok(*action));
    }
    assert_eq!(parse_contact_action(" video_call "), Ok(ContactAction::VideoCall));
    assert_eq!(parse_contact_action("  "), Err(ActionError::Empty));
    assert_eq!(
        parse_contact_action("qr_code"),
        Err(ActionError::Unknown("qr_code".to_string()))
    );
}

#[test]
fn draft_parses_from_form_json_with_optional_location() {
    let draft: ContactDraft = serde_json::from_str(
        r#"{"name":"Anya","email":"anya@email.com","phone":"+91 90000 00001"}"#,
    )
    .expect("form json");

    assert_eq!(draft.location, "");
    let contact = draft.into_contact().expect("valid");
    assert_eq!(contact.phone, "+91 90000 00001");
}
