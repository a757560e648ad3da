//! Full form cycle: collect, validate, request, re-render

use formdesk::{
    models::{Book, Student},
    render::RowAction,
    services::SearchCriteria,
    ui::Point,
    AppError,
};

use crate::stub::{self, RecordingNotifier};

fn student_form<'a>(name: &'a str, number: &'a str) -> Vec<(&'a str, &'a str)> {
    vec![
        ("name", name),
        ("studentNumber", number),
        ("address", " 12 Hanok-ro, Seoul "),
        ("phoneNumber", "010-1234-5678"),
        ("email", ""),
        ("dateOfBirth", "2005-04-12"),
    ]
}

fn book_form(isbn: &str) -> Vec<(&'static str, String)> {
    vec![
        ("title", "The Left Hand of Darkness".to_string()),
        ("author", "Ursula K. Le Guin".to_string()),
        ("isbn", isbn.to_string()),
        ("price", "12000".to_string()),
        ("publishDate", "".to_string()),
    ]
}

#[tokio::test]
async fn test_empty_list_renders_placeholder_row() {
    let backend = stub::spawn().await;
    let mut desk = backend.desk::<Book>(RecordingNotifier::new(true));

    desk.load_all().await.unwrap();

    let html = desk.view().table.0.clone();
    assert_eq!(html.matches("<tr class=\"placeholder\">").count(), 1);
    assert_eq!(html.matches("<tr").count(), 2);
}

#[tokio::test]
async fn test_create_then_list_contains_record() {
    let backend = stub::spawn().await;
    let notifier = RecordingNotifier::new(true);
    let mut desk = backend.desk::<Student>(notifier.clone());

    let saved = desk.submit(student_form("Kim Minji", "S2024001")).await.unwrap();

    assert_eq!(saved.detail.as_ref().unwrap().address, "12 Hanok-ro, Seoul");
    assert_eq!(desk.view().rows, vec![saved]);
    assert!(desk.view().table.0.contains("S2024001"));
    assert!(notifier.texts().contains(&"Student saved successfully!".to_string()));
    assert!(!desk.loading().is_visible());
}

#[tokio::test]
async fn test_duplicate_number_shows_server_message() {
    let backend = stub::spawn().await;
    let notifier = RecordingNotifier::new(true);
    let mut desk = backend.desk::<Student>(notifier.clone());
    desk.submit(student_form("Kim Minji", "S2024001")).await.unwrap();

    let err = desk
        .submit(student_form("Another Kim", "S2024001"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)));
    assert_eq!(notifier.last_text().as_deref(), Some("duplicate"));
    assert_eq!(desk.view().rows.len(), 1);
}

#[tokio::test]
async fn test_invalid_form_sends_nothing() {
    let backend = stub::spawn().await;
    let notifier = RecordingNotifier::new(true);
    let mut desk = backend.desk::<Book>(notifier.clone());

    let err = desk.submit(book_form("ISBN-12345")).await.unwrap_err();
    assert!(matches!(err, AppError::Validation { field: "isbn", .. }));
    assert_eq!(notifier.last_text().as_deref(), Some("Please enter a valid ISBN"));

    let listed = backend.api().resource::<Book>().list().await.unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_edit_cycle_updates_and_clears_editing_id() {
    let backend = stub::spawn().await;
    let mut desk = backend.desk::<Book>(RecordingNotifier::new(true));
    let saved = desk.submit(book_form("978-0441478125")).await.unwrap();

    desk.handle_action(RowAction::Edit, saved.id).await.unwrap();
    assert_eq!(desk.form().editing_id(), Some(saved.id));
    assert!(desk.modals().edit.is_visible());
    let prefill = desk.modals().edit.content().unwrap().clone();
    assert_eq!(prefill.get("price"), "12000");

    let mut values = prefill.clone();
    values.set("price", "15000");
    let updated = desk.submit(values.iter()).await.unwrap();

    assert_eq!(updated.id, saved.id);
    assert_eq!(updated.price, Some(15000));
    assert_eq!(desk.form().editing_id(), None);
    assert!(!desk.modals().edit.is_visible());
    assert_eq!(desk.view().rows.len(), 1);
    assert!(desk.view().table.0.contains("15,000"));
}

#[tokio::test]
async fn test_delete_removes_from_next_list() {
    let backend = stub::spawn().await;
    let mut desk = backend.desk::<Student>(RecordingNotifier::new(true));
    let a = desk.submit(student_form("Kim", "S1")).await.unwrap();
    let b = desk.submit(student_form("Lee", "S2")).await.unwrap();

    assert!(desk.delete(a.id).await.unwrap());

    assert_eq!(desk.view().rows, vec![b]);
    let listed = backend.api().resource::<Student>().list().await.unwrap();
    assert!(listed.iter().all(|s| s.id != a.id));
}

#[tokio::test]
async fn test_loading_overlay_wraps_each_request() {
    let backend = stub::spawn().await;
    let notifier = RecordingNotifier::new(true);
    let mut desk = backend.desk::<Student>(notifier.clone());
    let saved = desk.submit(student_form("Kim", "S1")).await.unwrap();

    desk.delete(saved.id).await.unwrap();

    assert_eq!(
        notifier.overlay(),
        [
            "Saving student...",
            "-",
            "Loading student list...",
            "-",
            "Deleting student...",
            "-",
            "Loading student list...",
            "-",
        ]
    );
    assert!(!desk.loading().is_visible());
}

#[tokio::test]
async fn test_delete_missing_record_reports_not_found() {
    let backend = stub::spawn().await;
    let notifier = RecordingNotifier::new(true);
    let mut desk = backend.desk::<Student>(notifier.clone());

    let err = desk.delete(99).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(notifier.last_text().as_deref(), Some("No such record"));
}

#[tokio::test]
async fn test_student_number_search_strategies() {
    let backend = stub::spawn().await;
    let mut desk = backend.desk::<Student>(RecordingNotifier::new(true));
    desk.submit(student_form("Kim", "S2024001")).await.unwrap();
    desk.submit(student_form("Lee", "S2024002")).await.unwrap();

    // exact hit
    let criteria = SearchCriteria::new().with("studentNumber", "S2024002");
    desk.search(&criteria).await.unwrap();
    assert_eq!(desk.view().rows.len(), 1);
    assert_eq!(desk.view().rows[0].name, "Lee");

    // 404 means no rows, no fallback
    let criteria = SearchCriteria::new().with("studentNumber", "S2024");
    desk.search(&criteria).await.unwrap();
    assert!(desk.view().rows.is_empty());
    assert!(desk.view().table.0.contains("No records found"));
}

#[tokio::test]
async fn test_failed_exact_lookup_falls_back_to_partial_match() {
    let backend = stub::spawn().await;
    let mut desk = backend.desk::<Student>(RecordingNotifier::new(true));
    desk.submit(student_form("Kim", "ERR1")).await.unwrap();
    desk.submit(student_form("Lee", "S2")).await.unwrap();

    let criteria = SearchCriteria::new().with("studentNumber", "ERR");
    desk.search(&criteria).await.unwrap();

    assert_eq!(desk.view().rows.len(), 1);
    assert_eq!(desk.view().rows[0].student_number, "ERR1");
}

#[tokio::test]
async fn test_name_and_address_search_filter_client_side() {
    let backend = stub::spawn().await;
    let mut desk = backend.desk::<Student>(RecordingNotifier::new(true));
    desk.submit(student_form("Kim Minji", "S1")).await.unwrap();
    desk.submit(student_form("Lee Jun", "S2")).await.unwrap();

    let criteria = SearchCriteria::new()
        .with("name", "minji")
        .with("studentNumber", "S2");
    desk.search(&criteria).await.unwrap();
    assert_eq!(desk.view().rows.len(), 1);
    assert_eq!(desk.view().rows[0].name, "Kim Minji");

    let criteria = SearchCriteria::new().with("name", "").with("address", "SEOUL");
    desk.search(&criteria).await.unwrap();
    assert_eq!(desk.view().rows.len(), 2);
}

#[tokio::test]
async fn test_book_search_by_author_and_empty_criteria() {
    let backend = stub::spawn().await;
    let mut desk = backend.desk::<Book>(RecordingNotifier::new(true));
    desk.submit(book_form("978-0441478125")).await.unwrap();

    let criteria = SearchCriteria::new()
        .with("title", "")
        .with("author", "Herbert");
    desk.search(&criteria).await.unwrap();
    assert!(desk.view().rows.is_empty());

    let criteria = SearchCriteria::new().with("title", "").with("author", "");
    desk.search(&criteria).await.unwrap();
    assert_eq!(desk.view().rows.len(), 1);
}

#[tokio::test]
async fn test_title_takes_priority_over_author() {
    let backend = stub::spawn().await;
    let mut desk = backend.desk::<Book>(RecordingNotifier::new(true));
    let books = backend.api().resource::<Book>();
    books
        .create(&formdesk::models::BookRequest {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            isbn: "978-0441013593".to_string(),
            price: None,
            publish_date: None,
        })
        .await
        .unwrap();
    books
        .create(&formdesk::models::BookRequest {
            title: "Emma".to_string(),
            author: "Jane Austen".to_string(),
            isbn: "978-0141439587".to_string(),
            price: None,
            publish_date: None,
        })
        .await
        .unwrap();

    let criteria = SearchCriteria::new()
        .with("author", "Austen")
        .with("title", "Dune");
    desk.search(&criteria).await.unwrap();

    let titles: Vec<&str> = desk.view().rows.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, ["Dune"]);
}

#[tokio::test]
async fn test_student_search_follows_name_number_address_priority() {
    let backend = stub::spawn().await;
    let mut desk = backend.desk::<Student>(RecordingNotifier::new(true));
    desk.submit(student_form("Kim Minji", "S1")).await.unwrap();
    desk.submit(student_form("Lee Jun", "S2")).await.unwrap();

    let criteria = SearchCriteria::new()
        .with("address", "Seoul")
        .with("studentNumber", "S2");
    desk.search(&criteria).await.unwrap();
    assert_eq!(desk.view().rows.len(), 1);
    assert_eq!(desk.view().rows[0].name, "Lee Jun");
}

#[tokio::test]
async fn test_unknown_search_field_is_rejected() {
    let backend = stub::spawn().await;
    let notifier = RecordingNotifier::new(true);
    let mut desk = backend.desk::<Book>(notifier.clone());

    let criteria = SearchCriteria::new().with("publisher", "Ace");
    let err = desk.search(&criteria).await.unwrap_err();
    assert!(matches!(err, AppError::Validation { field: "search", .. }));
    assert_eq!(
        notifier.last_text().as_deref(),
        Some("Search failed: Cannot search by publisher")
    );
}

#[tokio::test]
async fn test_detail_overlay_opens_and_closes_on_outside_click() {
    let backend = stub::spawn().await;
    let mut desk = backend.desk::<Student>(RecordingNotifier::new(true));
    let saved = desk.submit(student_form("Kim", "S1")).await.unwrap();

    desk.handle_action(RowAction::Detail, saved.id).await.unwrap();
    let detail = desk.modals().detail.content().unwrap().0.clone();
    assert!(detail.contains("12 Hanok-ro, Seoul"));
    assert!(detail.contains("2005-04-12"));

    desk.handle_click(Point { x: 10.0, y: 10.0 });
    assert!(desk.modals().detail.is_visible());
    desk.handle_click(Point { x: 5000.0, y: 10.0 });
    assert!(!desk.modals().detail.is_visible());
}

#[tokio::test]
async fn test_unreachable_backend_renders_error_row() {
    let notifier = RecordingNotifier::new(true);
    let api = formdesk::api::ApiClient::new(&formdesk::config::BackendConfig {
        base_url: "http://127.0.0.1:9".to_string(),
    })
    .unwrap();
    let mut desk = formdesk::services::EntityDesk::new(
        api.resource::<Student>(),
        notifier.clone(),
        &formdesk::config::UiConfig::default(),
    );

    assert!(desk.load_all().await.is_err());
    let html = &desk.view().table.0;
    assert!(html.contains("An error occurred while loading records"));
    assert!(html.contains("<th>Student number</th>"));
    assert_eq!(notifier.last_text().as_deref(), Some("Failed to load student list"));
}
