use std::fs;

use tempfile::tempdir;

#[test]
fn unwritable_log_file_does_not_abort_startup() {
    let dir = tempdir().unwrap();
    let not_a_dir = dir.path().join("not_a_dir");
    fs::write(&not_a_dir, "plain file").unwrap();

    unified_control_panel::logging::init(false, Some(not_a_dir.join("log.txt")));
    tracing::info!("still logging to stdout");

    assert!(not_a_dir.is_file());
    assert!(!not_a_dir.join("log.txt").exists());
}
