//! Resolution ladder: digits, exact slug, fuzzy search.

mod common;

use std::sync::atomic::Ordering;

use uniplan_engine::resolver::{resolve_employee, Resolution, FUZZY_CANDIDATE_LIMIT};

use common::{employee, FakeDirectory};

#[tokio::test]
async fn test_digit_string_is_taken_as_primary_key() {
    let directory = FakeDirectory::new();

    let resolution = resolve_employee(&directory, "501").await.unwrap();

    assert_eq!(
        resolution,
        Resolution::Resolved {
            employee_id: 501,
            slug: "501".to_string(),
        }
    );
    // No storage round-trip to validate existence.
    assert_eq!(directory.slug_calls.load(Ordering::SeqCst), 0);
    assert_eq!(directory.search_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_input_is_trimmed_before_dispatch() {
    let directory = FakeDirectory::new();

    let resolution = resolve_employee(&directory, "  42  ").await.unwrap();

    assert_eq!(
        resolution,
        Resolution::Resolved {
            employee_id: 42,
            slug: "42".to_string(),
        }
    );
}

#[tokio::test]
async fn test_exact_slug_match_bypasses_search() {
    let directory = FakeDirectory::new().with_slug("ivanov-i-i", 501);

    let resolution = resolve_employee(&directory, "ivanov-i-i").await.unwrap();

    assert_eq!(
        resolution,
        Resolution::Resolved {
            employee_id: 501,
            slug: "ivanov-i-i".to_string(),
        }
    );
    assert_eq!(directory.search_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_unique_fuzzy_match_resolves_with_slug() {
    let directory = FakeDirectory::new().with_search(
        "Иванов",
        vec![employee(501, "ivanov-i-i", "Иванов", "Иван")],
    );

    let resolution = resolve_employee(&directory, "Иванов").await.unwrap();

    assert_eq!(
        resolution,
        Resolution::Resolved {
            employee_id: 501,
            slug: "ivanov-i-i".to_string(),
        }
    );
}

#[tokio::test]
async fn test_unique_fuzzy_match_without_slug_falls_back_to_id() {
    let directory =
        FakeDirectory::new().with_search("Сидоров", vec![employee(77, "", "Сидоров", "Пётр")]);

    let resolution = resolve_employee(&directory, "Сидоров").await.unwrap();

    assert_eq!(
        resolution,
        Resolution::Resolved {
            employee_id: 77,
            slug: "77".to_string(),
        }
    );
}

#[tokio::test]
async fn test_zero_matches_is_unresolved() {
    let directory = FakeDirectory::new();

    let resolution = resolve_employee(&directory, "Nobody").await.unwrap();

    assert_eq!(resolution, Resolution::Unresolved);
}

#[tokio::test]
async fn test_multiple_matches_are_ambiguous_order_independent() {
    let candidates = vec![
        employee(501, "ivanov-i-i", "Иванов", "Иван"),
        employee(502, "ivanov-p-p", "Иванов", "Пётр"),
        employee(503, "ivanova-a-a", "Иванова", "Анна"),
    ];
    let directory = FakeDirectory::new().with_search("Иванов", candidates.clone());

    let resolution = resolve_employee(&directory, "Иванов").await.unwrap();

    match resolution {
        Resolution::Ambiguous(found) => {
            let mut expected: Vec<i64> = candidates.iter().map(|c| c.id).collect();
            let mut got: Vec<i64> = found.iter().map(|c| c.id).collect();
            expected.sort_unstable();
            got.sort_unstable();
            assert_eq!(got, expected);
        }
        other => panic!("expected ambiguous resolution, got {other:?}"),
    }
}

#[tokio::test]
async fn test_search_is_capped_at_the_candidate_limit() {
    let directory = FakeDirectory::new();

    resolve_employee(&directory, "anyone").await.unwrap();

    assert_eq!(
        *directory.last_search_limit.lock().unwrap(),
        Some(FUZZY_CANDIDATE_LIMIT)
    );
}

#[tokio::test]
async fn test_blank_input_is_unresolved() {
    let directory = FakeDirectory::new();

    let resolution = resolve_employee(&directory, "   ").await.unwrap();

    assert_eq!(resolution, Resolution::Unresolved);
}
