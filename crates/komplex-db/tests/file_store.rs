//! Service state persisted through the JSON file store, plus the trail.

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use komplex_config::KomplexConfig;
use komplex_core::enums::{CompletionKind, EntityType, TrailOp};
use komplex_db::service::KomplexService;
use komplex_db::trail::reader;

fn config(dir: &TempDir, seed: bool, trail: bool) -> KomplexConfig {
    let mut config = KomplexConfig::default();
    config.storage.path = dir.path().join("store.json").to_string_lossy().into_owned();
    config.trail.enabled = trail;
    config.trail.dir = dir.path().join("trail").to_string_lossy().into_owned();
    config.general.seed_demo_data = seed;
    config
}

#[test]
fn state_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let cfg = config(&dir, true, false);

    {
        let mut svc = KomplexService::open(&cfg).unwrap();
        assert_eq!(svc.list_courses().len(), 3);
        svc.enroll("crs-00000001", "stu-1").unwrap();
        svc.mark_lesson_complete("crs-00000001", "lsn-00000001", "stu-1")
            .unwrap();
    }

    let svc = KomplexService::open(&cfg).unwrap();
    assert_eq!(svc.list_courses().len(), 3, "reopen must not reseed");
    assert_eq!(svc.get_course("crs-00000001").unwrap().student_count, 1);
    assert_eq!(
        svc.completed_ids(CompletionKind::Lesson, "crs-00000001", "stu-1"),
        vec!["lsn-00000001".to_string()]
    );
    // 1 of 2 lessons, 0 of 1 assignments, 0 of 1 quizzes.
    assert_eq!(svc.get_progress("crs-00000001", "stu-1"), 30);
}

#[test]
fn seeding_can_be_disabled() {
    let dir = TempDir::new().unwrap();
    let svc = KomplexService::open(&config(&dir, false, false)).unwrap();
    assert!(svc.list_courses().is_empty());
}

#[test]
fn corrupt_store_file_opens_empty() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("store.json"), "{{{ not json").unwrap();

    let svc = KomplexService::open(&config(&dir, false, false)).unwrap();
    assert!(svc.list_courses().is_empty());
}

#[test]
fn namespace_isolates_keys() {
    let dir = TempDir::new().unwrap();
    let mut cfg = config(&dir, false, false);
    cfg.storage.namespace = "tenant".into();

    let mut svc = KomplexService::open(&cfg).unwrap();
    svc.enroll("crs-1", "stu-1").unwrap();
    assert!(svc.db().kv().contains("tenant_enrollments"));
    assert!(!svc.db().kv().contains("komplex_enrollments"));
}

#[test]
fn trail_records_learning_events_per_student() {
    let dir = TempDir::new().unwrap();
    let mut svc = KomplexService::open(&config(&dir, true, true)).unwrap();

    svc.enroll("crs-00000001", "stu-1").unwrap();
    svc.mark_lesson_complete("crs-00000001", "lsn-00000001", "stu-1")
        .unwrap();
    svc.mark_lesson_complete("crs-00000001", "lsn-00000001", "stu-1")
        .unwrap();

    let trail_dir = svc.trail().trail_dir().to_path_buf();
    let ops: Vec<(TrailOp, EntityType)> = reader::read_actor(&trail_dir, "stu-1")
        .unwrap()
        .into_iter()
        .map(|op| (op.op, op.entity))
        .collect();
    assert_eq!(
        ops,
        vec![
            (TrailOp::Enroll, EntityType::Enrollment),
            (TrailOp::Complete, EntityType::Completion),
            (TrailOp::Progress, EntityType::Enrollment),
        ]
    );

    // Seeding does not write to the trail.
    assert!(reader::read_actor(&trail_dir, "catalog").unwrap().is_empty());
}
