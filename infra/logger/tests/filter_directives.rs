use foodpacker_logger::{LevelFilter, Logger};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn filter_directives_select_targets_in_plain_file() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let logger = Logger::builder()
        .name("storefront")
        .console(false)
        .level(LevelFilter::WARN)
        .env_filter("foodpacker_storefront=debug,warn")
        .path(&log_dir)
        .max_files(2)
        .init()?;

    tracing::debug!(target: "foodpacker_storefront", actions = 3, "navbar mounted");
    tracing::info!(target: "foodpacker_kernel", "config loaded");
    tracing::warn!(target: "foodpacker_kernel", "window size clamped");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let mut files = fs::read_dir(&log_dir)?.flatten().map(|entry| entry.path()).collect::<Vec<_>>();
    assert_eq!(files.len(), 1, "one rolling file per day");
    let log_file = files.remove(0);
    let file_name = log_file.file_name().and_then(|n| n.to_str()).unwrap_or_default().to_owned();
    assert!(file_name.starts_with("storefront"), "unexpected file name {file_name}");
    assert!(file_name.ends_with(".log"));

    let contents = fs::read_to_string(&log_file)?;
    assert!(contents.contains("navbar mounted"));
    assert!(contents.contains("actions=3"));
    assert!(contents.contains("window size clamped"));
    assert!(!contents.contains("config loaded"), "info from other targets is filtered out");
    assert!(!contents.contains('{'), "plain output expected: {contents}");

    Ok(())
}
