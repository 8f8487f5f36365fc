//! End-to-end workflow tests against the public API
//!
//! Run with: cargo test --test fair_workflows

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use bookfair_core::model::{BookVariant, Isbn, NewBook, NewPerson, NewPublisher, NewStand, Nit, Person, PersonKind};
use bookfair_core::workflow::*;
use bookfair_core::{BookFair, FairError, Response, StatusCode};

const NITS: [&str; 3] = ["900.000.001-1", "900.000.002-2", "900.000.003-3"];

fn fair_with_publishers() -> BookFair {
    let fair = BookFair::new();
    for (i, nit) in NITS.iter().enumerate() {
        let manager_id = 900 + i as i64;
        create_manager(&fair, &NewPerson::new(manager_id, "Manager", format!("No{}", i))).unwrap();
        create_publisher(
            &fair,
            &NewPublisher {
                nit: nit.to_string(),
                name: format!("Publisher {}", i),
                address: "Feria del Libro".to_string(),
                manager_id,
            },
        )
        .unwrap();
    }
    fair
}

fn new_book(isbn: &str, author_ids: Vec<i64>, nit: &str) -> NewBook {
    NewBook {
        title: "A Title".to_string(),
        author_ids,
        isbn: isbn.to_string(),
        genre: "Fiction".to_string(),
        format: "Paperback".to_string(),
        value: 25.0,
        publisher_nit: nit.to_string(),
    }
}

#[test]
fn test_uniqueness_per_registry() {
    let fair = fair_with_publishers();
    create_author(&fair, &NewPerson::new(1, "Ana", "Rios")).unwrap();
    create_narrator(&fair, &NewPerson::new(2, "Luz", "Vega")).unwrap();
    create_stand(&fair, &NewStand { id: 1, price: 10.0 }).unwrap();
    create_printed_book(&fair, &new_book("111-1-11-111111-1", vec![1], NITS[0]), 10, 1).unwrap();
    create_audiobook(&fair, &new_book("111-1-11-111111-2", vec![1], NITS[0]), 90, 2).unwrap();

    let err = create_author(&fair, &NewPerson::new(1, "Other", "Author")).unwrap_err();
    assert!(err.is_duplicate());

    let err = create_manager(&fair, &NewPerson::new(900, "Other", "Manager")).unwrap_err();
    assert!(err.is_duplicate());

    let err = create_narrator(&fair, &NewPerson::new(2, "Other", "Narrator")).unwrap_err();
    assert!(err.is_duplicate());

    let err = create_audiobook(&fair, &new_book("111-1-11-111111-2", vec![1], NITS[1]), 30, 2).unwrap_err();
    assert!(err.is_duplicate());

    let err = create_printed_book(&fair, &new_book("111-1-11-111111-2", vec![1], NITS[1]), 5, 5).unwrap_err();
    assert!(err.is_duplicate());

    let err = create_stand(&fair, &NewStand { id: 1, price: 99.0 }).unwrap_err();
    assert!(err.is_duplicate());

    let err = create_digital_book(&fair, &new_book("111-1-11-111111-1", vec![1], NITS[1]), None).unwrap_err();
    assert!(err.is_duplicate());

    let err = create_publisher(
        &fair,
        &NewPublisher {
            nit: NITS[0].to_string(),
            name: "Copy".to_string(),
            address: "Elsewhere".to_string(),
            manager_id: 900,
        },
    )
    .unwrap_err();
    assert!(err.is_duplicate());

    assert_eq!(all_authors(&fair).len(), 1);
    assert_eq!(all_managers(&fair).len(), 3);
    assert_eq!(all_narrators(&fair).len(), 1);
    assert_eq!(all_narrators(&fair)[0].book_quantity(), 1);
    assert_eq!(all_stands(&fair).len(), 1);
    assert_eq!(all_books(&fair).len(), 2);
    assert_eq!(all_publishers(&fair).len(), 3);
}

#[test]
fn test_returned_copies_are_isolated() {
    let fair = fair_with_publishers();
    let mut returned = create_author(&fair, &NewPerson::new(1, "Ana", "Rios")).unwrap();
    let isbn = Isbn::parse("111-1-11-111111-1").unwrap();
    let nit = Nit::parse(NITS[0]).unwrap();

    returned.add_book(isbn.clone(), &nit);
    let mut listed = all_authors(&fair);
    listed[0].add_book(isbn, &nit);
    assert_eq!(listed[0].book_quantity(), 1);

    let stored = author_by_id(&fair, 1).unwrap();
    assert_eq!(stored.book_quantity(), 0);
    assert_eq!(stored.publisher_quantity(), 0);
    assert!(books_by_author(&fair, 1).unwrap().is_empty());

    let mut stand = create_stand(&fair, &NewStand { id: 3, price: 40.0 }).unwrap();
    stand.add_publisher(nit);
    assert!(all_stands(&fair)[0].publishers().is_empty());
}

#[test]
fn test_bidirectional_linkage() {
    let fair = fair_with_publishers();
    create_author(&fair, &NewPerson::new(1, "Ana", "Rios")).unwrap();
    create_author(&fair, &NewPerson::new(2, "Juan", "Paz")).unwrap();
    let book = create_printed_book(&fair, &new_book("111-1-11-111111-1", vec![1, 2], NITS[0]), 10, 1).unwrap();

    for id in [1, 2] {
        let books = books_by_author(&fair, id).unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].isbn(), book.isbn());
    }
    let publisher = publisher_by_nit(&fair, NITS[0]).unwrap();
    assert_eq!(publisher.books().iter().filter(|isbn| *isbn == book.isbn()).count(), 1);

    purchase_stands_fixture(&fair);
    let publisher = publisher_by_nit(&fair, NITS[1]).unwrap();
    assert_eq!(publisher.stands(), &[7]);
    let stand = &all_stands(&fair)[0];
    assert_eq!(stand.publishers(), &[Nit::parse(NITS[1]).unwrap()]);
}

fn purchase_stands_fixture(fair: &BookFair) {
    create_stand(fair, &NewStand { id: 7, price: 300.0 }).unwrap();
    purchase_stands(fair, &[7], &[NITS[1].to_string()]).unwrap();
}

#[test]
fn test_purchase_is_all_or_nothing() {
    let fair = fair_with_publishers();
    create_stand(&fair, &NewStand { id: 1, price: 300.0 }).unwrap();

    let err = purchase_stands(&fair, &[1], &[NITS[0].to_string(), "999.999.999-9".to_string()]).unwrap_err();
    assert!(matches!(err, FairError::NotFound { entity: "Publisher", .. }));

    assert!(all_stands(&fair)[0].publishers().is_empty());
    assert!(publisher_by_nit(&fair, NITS[0]).unwrap().stands().is_empty());
}

#[test]
fn test_most_distinct_publishers_ties() {
    let fair = fair_with_publishers();
    for id in [4, 3, 2, 1] {
        create_author(&fair, &NewPerson::new(id, "Author", format!("No{}", id))).unwrap();
    }

    // Authors 4 and 2 reach three publishers, author 3 one, author 1 none
    let books = [
        ("100-0-00-000000-1", vec![4, 2], NITS[0]),
        ("100-0-00-000000-2", vec![4, 2, 3], NITS[1]),
        ("100-0-00-000000-3", vec![4], NITS[2]),
        ("100-0-00-000000-4", vec![2], NITS[2]),
        ("100-0-00-000000-5", vec![3], NITS[1]),
    ];
    for (isbn, authors, nit) in books {
        create_digital_book(&fair, &new_book(isbn, authors, nit), None).unwrap();
    }

    let leaders: Vec<i64> = authors_with_most_distinct_publishers(&fair)
        .iter()
        .map(|author| author.id())
        .collect();
    assert_eq!(leaders, vec![2, 4]);
}

#[test]
fn test_key_formats() {
    assert!(Isbn::parse("123-4-56-789012-3").is_ok());
    assert!(matches!(Isbn::parse("123-45-6-789012-3"), Err(FairError::InvalidIsbn(_))));
    assert!(Nit::parse("900.123.456-7").is_ok());
    assert!(matches!(Nit::parse("900123456-7"), Err(FairError::InvalidNit(_))));
}

#[test]
fn test_empty_state_queries() {
    let fair = fair_with_publishers();
    create_author(&fair, &NewPerson::new(1, "Ana", "Rios")).unwrap();
    fair.clear();

    assert!(authors_with_most_distinct_publishers(&fair).is_empty());
    assert!(all_books(&fair).is_empty());
    assert!(all_persons(&fair).is_empty());
    assert!(all_audiobooks(&fair).is_empty());
}

#[test]
fn test_all_persons_ordering() {
    let fair = BookFair::new();
    create_narrator(&fair, &NewPerson::new(5, "Luz", "Vega")).unwrap();
    create_manager(&fair, &NewPerson::new(5, "Eva", "Sol")).unwrap();
    create_author(&fair, &NewPerson::new(5, "Ana", "Rios")).unwrap();
    create_author(&fair, &NewPerson::new(2, "Juan", "Paz")).unwrap();

    let order: Vec<(i64, PersonKind)> = all_persons(&fair).iter().map(|p| (p.id(), p.kind())).collect();
    assert_eq!(
        order,
        vec![
            (2, PersonKind::Author),
            (5, PersonKind::Author),
            (5, PersonKind::Manager),
            (5, PersonKind::Narrator),
        ]
    );
    assert!(matches!(all_persons(&fair)[0], Person::Author(_)));
}

#[test]
fn test_observers_fire_after_add() {
    let fair = fair_with_publishers();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let id = fair.books().add_observer(Arc::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    }));

    create_author(&fair, &NewPerson::new(1, "Ana", "Rios")).unwrap();
    create_printed_book(&fair, &new_book("111-1-11-111111-1", vec![1], NITS[0]), 1, 1).unwrap();
    let _ = create_printed_book(&fair, &new_book("111-1-11-111111-1", vec![1], NITS[0]), 1, 1);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    assert!(fair.books().remove_observer(id));
    create_printed_book(&fair, &new_book("111-1-11-111111-2", vec![1], NITS[0]), 1, 1).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_audiobook_workflow_and_listing() {
    let fair = fair_with_publishers();
    create_author(&fair, &NewPerson::new(1, "Ana", "Rios")).unwrap();
    create_narrator(&fair, &NewPerson::new(3, "Luz", "Vega")).unwrap();
    create_audiobook(&fair, &new_book("111-1-11-111111-1", vec![1], NITS[2]), 480, 3).unwrap();

    let audiobooks = all_audiobooks(&fair);
    assert_eq!(audiobooks.len(), 1);
    assert_eq!(audiobooks[0].variant(), BookVariant::Audiobook);
    assert_eq!(all_narrators(&fair)[0].book_quantity(), 1);
    assert!(all_printed_books(&fair).is_empty());
}

#[test]
fn test_response_envelope_status_codes() {
    let fair = fair_with_publishers();

    let created = Response::from_result(
        create_stand(&fair, &NewStand { id: 1, price: 50.0 }),
        StatusCode::Created,
        "Stand created",
    );
    assert_eq!(created.status.code(), 201);

    let conflict = Response::from_result(
        create_stand(&fair, &NewStand { id: 1, price: 50.0 }),
        StatusCode::Created,
        "Stand created",
    );
    assert_eq!(conflict.status, StatusCode::Conflict);

    let bad = Response::from_result(
        create_stand(&fair, &NewStand { id: 2, price: -1.0 }),
        StatusCode::Created,
        "Stand created",
    );
    assert_eq!(bad.status, StatusCode::BadRequest);

    let missing = Response::from_result(author_by_id(&fair, 404), StatusCode::Ok, "Author found");
    assert_eq!(missing.status.code(), 404);
}

#[test]
fn test_concurrent_creation_keeps_keys_unique() {
    let fair = Arc::new(BookFair::new());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let fair = Arc::clone(&fair);
            std::thread::spawn(move || create_stand(&fair, &NewStand { id: 42, price: 10.0 }).is_ok())
        })
        .collect();

    let successes = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|ok| *ok)
        .count();
    assert_eq!(successes, 1);
    assert_eq!(all_stands(&fair).len(), 1);
}
