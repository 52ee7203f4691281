use std::fs;
use std::path::{MAIN_SEPARATOR_STR, Path};
use std::sync::Arc;
use std::thread;

use path_sanitizer::inspect::DEFAULT_MAX_LENGTH;
use path_sanitizer::{
    RepairOutcome, RepairPolicy, StorageError, check_path, ensure_directory, inspect, repair,
};
use tempfile::TempDir;

// Helper to build a path string below the temporary root
fn under(root: &Path, relative: &str) -> String {
    format!(
        "{}{}{}",
        root.to_str().unwrap(),
        MAIN_SEPARATOR_STR,
        relative.replace('/', MAIN_SEPARATOR_STR)
    )
}

#[test]
fn test_repair_creates_missing_directory_chain() {
    let temp = TempDir::new().unwrap();
    let path = under(temp.path(), "plates/2024/run?1.csv");

    let outcome = check_path(&path, &RepairPolicy::default()).unwrap();
    assert!(outcome.is_repaired());
    let final_path = outcome.final_path().unwrap().to_string();

    assert_eq!(final_path, under(temp.path(), "plates/2024/run~1.csv"));
    assert!(Path::new(&final_path).parent().unwrap().is_dir());
    assert!(temp.path().join("plates").join("2024").is_dir());
    // Only the directory is provisioned, the file is left to the caller
    assert!(!Path::new(&final_path).exists());
}

#[test]
fn test_rejection_leaves_filesystem_untouched() {
    let temp = TempDir::new().unwrap();
    let path = under(temp.path(), "fresh/dir/bad:name.txt");
    let policy = RepairPolicy::builder()
        .replace_illegal_chars(false)
        .build()
        .unwrap();

    let outcome = check_path(&path, &policy).unwrap();

    assert!(matches!(outcome, RepairOutcome::RejectedIllegalChars));
    assert!(!outcome.is_repaired());
    assert!(!temp.path().join("fresh").exists());
}

#[test]
fn test_directory_creation_disabled_skips_provisioning() {
    let temp = TempDir::new().unwrap();
    let path = under(temp.path(), "never/made/file.txt");
    let policy = RepairPolicy::builder()
        .create_missing_directory(false)
        .build()
        .unwrap();

    let outcome = check_path(&path, &policy).unwrap();

    assert_eq!(outcome.final_path(), Some(path.as_str()));
    assert!(!temp.path().join("never").exists());
}

#[test]
fn test_directory_creation_failure_preserves_cause() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("occupied"), b"not a directory").unwrap();
    let path = under(temp.path(), "occupied/sub/file.txt");

    let outcome = check_path(&path, &RepairPolicy::default()).unwrap();

    match outcome {
        RepairOutcome::DirectoryCreationFailed(StorageError::CreateDirectory { path, source }) => {
            assert!(path.ends_with("sub"));
            assert!(!source.to_string().is_empty());
        }
        other => panic!("expected DirectoryCreationFailed, got {other:?}"),
    }
}

#[test]
fn test_existing_directory_is_not_an_error() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("already")).unwrap();
    let path = under(temp.path(), "already/there.txt");

    let outcome = check_path(&path, &RepairPolicy::default()).unwrap();
    assert_eq!(outcome.final_path(), Some(path.as_str()));
}

#[test]
fn test_second_pass_is_no_op() {
    let temp = TempDir::new().unwrap();
    let long_name = format!("{}|{}.dat", "n".repeat(200), "m".repeat(200));
    let path = under(temp.path(), &format!("deep/{long_name}"));
    let policy = RepairPolicy::default();

    let first = check_path(&path, &policy).unwrap();
    let first_path = first.final_path().unwrap().to_string();
    assert!(first_path.chars().count() <= DEFAULT_MAX_LENGTH);
    assert!(first_path.ends_with("~.dat"));

    let report = inspect(&first_path, policy.max_length());
    assert!(report.is_valid());
    let second = repair(&report, &policy).unwrap();
    assert_eq!(second.final_path(), Some(first_path.as_str()));
}

#[test]
fn test_report_queries_existing_file() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("sample.txt");
    fs::write(&file, b"12345").unwrap();

    let report = inspect(file.to_str().unwrap(), DEFAULT_MAX_LENGTH);
    assert!(report.exists());
    assert_eq!(report.filename(), "sample.txt");

    let info = report.file_info().unwrap();
    assert_eq!(info.size, 5);
    assert!(info.modified.is_some());
    assert_eq!(report.absolute_path().unwrap(), file);

    let missing = inspect(&under(temp.path(), "missing.txt"), DEFAULT_MAX_LENGTH);
    assert!(!missing.exists());
    assert!(missing.file_info().is_none());
}

#[test]
fn test_relative_path_is_anchored_at_working_directory() {
    let report = inspect("relative/file.txt", DEFAULT_MAX_LENGTH);
    let absolute = report.absolute_path().unwrap();
    assert!(absolute.is_absolute());
    assert!(absolute.ends_with(Path::new("relative").join("file.txt")));
}

#[test]
fn test_concurrent_ensure_directory_on_shared_prefix() {
    let temp = TempDir::new().unwrap();
    let target = Arc::new(under(temp.path(), "shared/prefix/leaf"));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let target = Arc::clone(&target);
            thread::spawn(move || ensure_directory(&target))
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap().is_ok());
    }
    assert!(Path::new(target.as_str()).is_dir());
}

#[tokio::test]
async fn test_concurrent_repairs_sharing_directories() {
    let temp = TempDir::new().unwrap();
    let policy = Arc::new(RepairPolicy::default());

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let path = under(temp.path(), &format!("batch/{}/item:{i}.json", i % 3));
            let policy = Arc::clone(&policy);
            tokio::task::spawn_blocking(move || check_path(&path, &policy))
        })
        .collect();

    for handle in handles {
        let outcome = handle.await.unwrap().unwrap();
        let final_path = outcome.final_path().unwrap().to_string();
        assert!(final_path.contains("item~"));
    }
    for bucket in 0..3 {
        assert!(temp.path().join("batch").join(bucket.to_string()).is_dir());
    }
}
