use chrono::{TimeZone, Utc};
use skiff_core::book::TaskBook;
use skiff_core::form::build_draft;
use skiff_core::record::{NewTaskRecord, TaskFieldsPatch, TaskRecord};
use skiff_core::task::Task;
use skiff_core::views::{StatusFilter, filter_visible_tasks, split_sorted};
use uuid::Uuid;

/// Plays a session the way the composition root does: validated drafts
/// become insert payloads, confirmed records land in the book, views are
/// derived per render, and edits go out as completion-free patches.
#[test]
fn confirmed_mutations_flow_through_book_and_views() {
    let owner = Uuid::from_u128(7);
    let mut book = TaskBook::default();

    let first = build_draft("Buy milk", "", "2024-03-01").expect("valid draft");
    let second = build_draft("File taxes", "before the deadline", "2024-01-15")
        .expect("valid draft");

    // The store assigns ids and creation times; the client only reflects
    // what came back.
    let stored_first = TaskRecord {
        id: Uuid::from_u128(1),
        user_id: owner,
        title: first.title.clone(),
        description: first.description.clone(),
        due_date: first.due_date,
        completed: NewTaskRecord::from_draft(owner, &first).completed,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
    };
    let stored_second = TaskRecord {
        id: Uuid::from_u128(2),
        user_id: owner,
        title: second.title.clone(),
        description: second.description.clone(),
        due_date: second.due_date,
        completed: false,
        created_at: Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap(),
    };

    book.insert_newest(Task::from(stored_first));
    book.insert_newest(Task::from(stored_second));

    assert_eq!(book.tasks()[0].title, "File taxes");
    assert!(!book.tasks()[0].completed);

    // Pending view orders by due date, not insertion.
    let (pending, completed) = split_sorted(book.tasks());
    assert_eq!(pending[0].title, "File taxes");
    assert_eq!(pending[1].title, "Buy milk");
    assert!(completed.is_empty());

    // Completing one task moves it across views.
    assert_eq!(book.apply_toggle(Uuid::from_u128(1)), Some(true));
    let visible = filter_visible_tasks(book.tasks(), "", StatusFilter::Completed);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Buy milk");

    // An edit rewrites the editable fields and nothing else.
    let edit = build_draft("Buy oat milk", "two cartons", "2024-03-02").expect("valid draft");
    let patch = serde_json::to_value(TaskFieldsPatch::from_draft(&edit)).expect("serialize");
    assert!(!patch.as_object().expect("object").contains_key("completed"));

    assert!(book.apply_edit(Uuid::from_u128(1), &edit));
    let edited = book.get(Uuid::from_u128(1)).expect("present");
    assert_eq!(edited.title, "Buy oat milk");
    assert!(edited.completed);

    // Deleting leaves the rest untouched.
    assert!(book.remove(Uuid::from_u128(2)));
    assert_eq!(book.tasks().len(), 1);
    assert_eq!(book.tasks()[0].title, "Buy oat milk");
}

#[test]
fn search_narrows_across_both_sections() {
    let owner = Uuid::from_u128(7);
    let make = |id: u128, title: &str, completed: bool| Task {
        id: Uuid::from_u128(id),
        owner,
        title: title.to_string(),
        description: String::new(),
        due_date: chrono::NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date"),
        completed,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, id as u32).unwrap(),
    };

    let book = TaskBook::from_tasks(vec![
        make(1, "Water the plants", false),
        make(2, "Water filter order", true),
        make(3, "Call the bank", false),
    ]);

    let visible = filter_visible_tasks(book.tasks(), "WATER", StatusFilter::All);
    assert_eq!(visible.len(), 2);

    let (pending, completed) = split_sorted(&visible);
    assert_eq!(pending.len(), 1);
    assert_eq!(completed.len(), 1);
}
