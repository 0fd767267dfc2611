use chrono::{DateTime, Duration, FixedOffset};
use emotrack::db::initialize::{PREDICTIONS_TABLE, VISITS_TABLE, init_db, table_exists};
use emotrack::db::{PredictionLog, Store, VisitLog};
use emotrack::errors::AppError;
use emotrack::models::visit::PageVisit;
use emotrack::utils::time::{Clock, FixedClock};
use std::sync::Arc;
use std::thread;

mod common;
use common::setup_test_db;

fn ts(s: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(s).expect("valid timestamp")
}

fn fixed_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock(ts("2025-03-01T10:15:30+05:30")))
}

fn count_tables(store: &Store, name: &str) -> i64 {
    store
        .with_conn(|conn| {
            conn.query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1",
                [name],
                |row| row.get(0),
            )
        })
        .expect("count tables")
}

#[test]
fn test_fresh_store_is_empty() {
    let store = Store::open_in_memory().expect("open");
    let visits = VisitLog::new(&store, fixed_clock());
    let predictions = PredictionLog::new(&store, fixed_clock());

    assert!(visits.all_visits().expect("read visits").is_empty());
    assert!(predictions.all_predictions().expect("read predictions").is_empty());
}

#[test]
fn test_open_creates_both_tables() {
    let store = Store::open_in_memory().expect("open");

    let (visits, predictions) = store
        .with_conn(|conn| {
            Ok((
                table_exists(conn, VISITS_TABLE)?,
                table_exists(conn, PREDICTIONS_TABLE)?,
            ))
        })
        .expect("inspect schema");

    assert!(visits);
    assert!(predictions);
}

#[test]
fn test_ensure_tables_is_idempotent() {
    let store = Store::open_in_memory().expect("open");
    let visits = VisitLog::new(&store, fixed_clock());

    store.ensure_visit_table().expect("ensure 1");
    visits.record_visit_now("Home").expect("write 1");
    store.ensure_prediction_table().expect("ensure 2");
    store.ensure_visit_table().expect("ensure 3");
    visits.record_visit_now("About").expect("write 2");
    store.ensure_visit_table().expect("ensure 4");
    store
        .with_conn(|conn| init_db(conn))
        .expect("init again");

    assert_eq!(count_tables(&store, VISITS_TABLE), 1);
    assert_eq!(count_tables(&store, PREDICTIONS_TABLE), 1);

    let names: Vec<String> = visits
        .all_visits()
        .expect("read")
        .into_iter()
        .map(|v| v.page_name)
        .collect();
    assert_eq!(names, vec!["Home", "About"]);
}

#[test]
fn test_reopen_file_keeps_history() {
    let db_path = setup_test_db("reopen_file_keeps_history");

    {
        let store = Store::open(&db_path).expect("open 1");
        let visits = VisitLog::new(&store, fixed_clock());
        visits.record_visit_now("Home").expect("write");
        let predictions = PredictionLog::new(&store, fixed_clock());
        predictions
            .record_prediction_now("what a day", "joy", 0.5)
            .expect("write prediction");
    }

    let store = Store::open(&db_path).expect("open 2");
    let visits = VisitLog::new(&store, fixed_clock());
    let predictions = PredictionLog::new(&store, fixed_clock());

    assert_eq!(visits.all_visits().expect("read").len(), 1);
    assert_eq!(predictions.all_predictions().expect("read").len(), 1);
    store.close().expect("close");
}

#[test]
fn test_visit_round_trip_keeps_subsecond_precision() {
    let store = Store::open_in_memory().expect("open");
    let visits = VisitLog::new(&store, fixed_clock());

    let when = ts("2025-03-01T10:15:30.123456789+05:30");
    visits.record_visit("Monitor", &when).expect("write");

    let all = visits.all_visits().expect("read");
    let last = all.last().expect("one row");
    assert_eq!(last, &PageVisit::new("Monitor", when));
    assert_eq!(last.visited_at.offset(), when.offset());
    assert_eq!(last.visited_at.timestamp_subsec_nanos(), 123_456_789);
}

#[test]
fn test_record_visit_now_uses_injected_clock() {
    let store = Store::open_in_memory().expect("open");
    let visits = VisitLog::new(&store, fixed_clock());

    let stamped = visits.record_visit_now("About").expect("write");

    assert_eq!(stamped, ts("2025-03-01T10:15:30+05:30"));
    assert_eq!(visits.all_visits().expect("read")[0].visited_at, stamped);
}

#[test]
fn test_visit_order_is_insertion_order() {
    let store = Store::open_in_memory().expect("open");
    let visits = VisitLog::new(&store, fixed_clock());

    // Timestamps deliberately go backwards: order must follow insertion.
    let base = ts("2025-06-01T12:00:00+05:30");
    let expected: Vec<PageVisit> = (0..50)
        .map(|i| PageVisit::new(format!("page-{i}"), base - Duration::minutes(i)))
        .collect();

    for v in &expected {
        visits.record_visit(&v.page_name, &v.visited_at).expect("write");
    }

    assert_eq!(visits.all_visits().expect("read"), expected);
}

#[test]
fn test_visit_page_name_is_not_validated() {
    let store = Store::open_in_memory().expect("open");
    let visits = VisitLog::new(&store, fixed_clock());

    visits.record_visit_now("").expect("empty name");
    visits.record_visit_now("Página secreta 🚪").expect("unicode name");

    let names: Vec<String> = visits
        .all_visits()
        .expect("read")
        .into_iter()
        .map(|v| v.page_name)
        .collect();
    assert_eq!(names, vec!["", "Página secreta 🚪"]);
}

#[test]
fn test_confidence_passes_through_unchanged() {
    let store = Store::open_in_memory().expect("open");
    let predictions = PredictionLog::new(&store, fixed_clock());

    predictions
        .record_prediction_now("I love this", "joy", 0.87)
        .expect("write");

    let all = predictions.all_predictions().expect("read");
    assert_eq!(all.len(), 1);
    assert!((all[0].confidence - 0.87).abs() < f64::EPSILON);
}

#[test]
fn test_prediction_values_are_not_clamped_or_checked() {
    let store = Store::open_in_memory().expect("open");
    let predictions = PredictionLog::new(&store, fixed_clock());
    let when = ts("2025-01-02T03:04:05.5+05:30");

    let text = "line one\nline two — «quoted» 😊\t";
    predictions
        .record_prediction(text, "not-a-label", 1.7, &when)
        .expect("write above 1");
    predictions
        .record_prediction("", "anger", -0.25, &when)
        .expect("write below 0");

    let all = predictions.all_predictions().expect("read");
    assert_eq!(all[0].raw_text, text);
    assert_eq!(all[0].predicted_label, "not-a-label");
    assert_eq!(all[0].confidence, 1.7);
    assert_eq!(all[0].predicted_at, when);
    assert_eq!(all[1].raw_text, "");
    assert_eq!(all[1].confidence, -0.25);
}

#[test]
fn test_prediction_order_is_insertion_order() {
    let store = Store::open_in_memory().expect("open");
    let predictions = PredictionLog::new(&store, fixed_clock());

    for (i, label) in ["joy", "anger", "joy", "fear"].iter().enumerate() {
        predictions
            .record_prediction_now(&format!("text {i}"), label, 0.1 * i as f64)
            .expect("write");
    }

    let labels: Vec<String> = predictions
        .all_predictions()
        .expect("read")
        .into_iter()
        .map(|p| p.predicted_label)
        .collect();
    assert_eq!(labels, vec!["joy", "anger", "joy", "fear"]);
}

#[test]
fn test_concurrent_visit_writes_are_all_recorded() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 25;

    let db_path = setup_test_db("concurrent_visit_writes");
    let store = Store::open(&db_path).expect("open");
    let visits = VisitLog::new(&store, fixed_clock());

    thread::scope(|s| {
        for t in 0..THREADS {
            let visits = &visits;
            s.spawn(move || {
                for i in 0..PER_THREAD {
                    visits
                        .record_visit_now(&format!("t{t}-{i}"))
                        .expect("concurrent write");
                }
            });
        }
    });

    let all = visits.all_visits().expect("read");
    assert_eq!(all.len(), THREADS * PER_THREAD);

    // Every row is well formed and each thread's writes keep their order.
    for t in 0..THREADS {
        let seq: Vec<usize> = all
            .iter()
            .filter_map(|v| v.page_name.strip_prefix(&format!("t{t}-")))
            .map(|n| n.parse().expect("numeric suffix"))
            .collect();
        assert_eq!(seq, (0..PER_THREAD).collect::<Vec<_>>());
    }
}

#[test]
fn test_concurrent_mixed_writes_share_one_store() {
    let store = Arc::new(Store::open_in_memory().expect("open"));

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let visits = VisitLog::new(&store, fixed_clock());
                let predictions = PredictionLog::new(&store, fixed_clock());
                for i in 0..10 {
                    visits.record_visit_now("Home").expect("visit");
                    predictions
                        .record_prediction_now(&format!("{t}:{i}"), "joy", 0.9)
                        .expect("prediction");
                }
            })
        })
        .collect();
    for h in handles {
        h.join().expect("join");
    }

    let visits = VisitLog::new(&store, fixed_clock());
    let predictions = PredictionLog::new(&store, fixed_clock());
    assert_eq!(visits.all_visits().expect("read").len(), 40);
    assert_eq!(predictions.all_predictions().expect("read").len(), 40);
}

#[test]
fn test_open_in_missing_directory_is_storage_unavailable() {
    let mut path = std::env::temp_dir();
    path.push("emotrack_no_such_dir_for_tests");
    std::fs::remove_dir_all(&path).ok();
    path.push("telemetry.sqlite");

    let err = Store::open(&path.to_string_lossy()).err().expect("open must fail");
    assert!(matches!(err, AppError::StorageUnavailable { .. }));
}

#[test]
fn test_write_and_read_failures_are_reported() {
    let store = Store::open_in_memory().expect("open");
    let visits = VisitLog::new(&store, fixed_clock());
    let predictions = PredictionLog::new(&store, fixed_clock());

    store
        .with_conn(|conn| conn.execute_batch("DROP TABLE page_visits; DROP TABLE predictions;"))
        .expect("drop tables");

    assert!(matches!(
        visits.record_visit_now("Home"),
        Err(AppError::WriteFailed { table: "page_visits", .. })
    ));
    assert!(matches!(
        visits.all_visits(),
        Err(AppError::ReadFailed { table: "page_visits", .. })
    ));
    assert!(matches!(
        predictions.record_prediction_now("x", "joy", 0.5),
        Err(AppError::WriteFailed { table: "predictions", .. })
    ));
    assert!(matches!(
        predictions.all_predictions(),
        Err(AppError::ReadFailed { table: "predictions", .. })
    ));

    // Re-ensuring brings the store back without touching anything else.
    store.ensure_visit_table().expect("ensure visits");
    store.ensure_prediction_table().expect("ensure predictions");
    visits.record_visit_now("Home").expect("write after ensure");
    assert_eq!(visits.all_visits().expect("read").len(), 1);
}

#[test]
fn test_malformed_timestamp_is_read_failure() {
    let store = Store::open_in_memory().expect("open");
    let visits = VisitLog::new(&store, fixed_clock());

    store
        .with_conn(|conn| {
            conn.execute(
                "INSERT INTO page_visits (page_name, visited_at) VALUES ('Home', 'yesterday')",
                [],
            )
        })
        .expect("raw insert");

    assert!(matches!(
        visits.all_visits(),
        Err(AppError::ReadFailed { .. })
    ));
}

#[test]
fn test_unreadable_timestamp_is_refused_and_history_stays_readable() {
    let store = Store::open_in_memory().expect("open");
    let visits = VisitLog::new(&store, fixed_clock());
    let predictions = PredictionLog::new(&store, fixed_clock());

    visits.record_visit_now("Home").expect("valid write");
    predictions
        .record_prediction_now("fine", "joy", 0.5)
        .expect("valid write");

    let far = ts("9999-12-31T23:00:00+05:30") + Duration::days(2);
    assert!(matches!(
        visits.record_visit("Home", &far),
        Err(AppError::WriteFailed { table: "page_visits", .. })
    ));
    assert!(matches!(
        predictions.record_prediction("later", "joy", 0.5, &far),
        Err(AppError::WriteFailed { table: "predictions", .. })
    ));

    assert_eq!(visits.all_visits().expect("read visits").len(), 1);
    assert_eq!(predictions.all_predictions().expect("read predictions").len(), 1);
}

#[test]
fn test_year_bounds_round_trip() {
    let store = Store::open_in_memory().expect("open");
    let visits = VisitLog::new(&store, fixed_clock());

    let first = ts("0001-01-01T12:00:00+05:30");
    let last = ts("9999-12-31T23:59:59.999999999+05:30");
    visits.record_visit("first", &first).expect("year 1");
    visits.record_visit("last", &last).expect("year 9999");

    assert_eq!(
        visits.all_visits().expect("read"),
        vec![PageVisit::new("first", first), PageVisit::new("last", last)]
    );
}

#[test]
fn test_nan_confidence_is_rejected_without_a_row() {
    let store = Store::open_in_memory().expect("open");
    let predictions = PredictionLog::new(&store, fixed_clock());

    // SQLite binds NaN as NULL, which the NOT NULL column refuses.
    assert!(matches!(
        predictions.record_prediction_now("x", "joy", f64::NAN),
        Err(AppError::WriteFailed { table: "predictions", .. })
    ));
    assert!(predictions.all_predictions().expect("read").is_empty());

    predictions
        .record_prediction_now("y", "joy", f64::INFINITY)
        .expect("infinity is stored as given");
    assert_eq!(
        predictions.all_predictions().expect("read")[0].confidence,
        f64::INFINITY
    );
}
