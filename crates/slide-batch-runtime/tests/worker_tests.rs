use slide_batch_runtime::*;
use std::path::PathBuf;

async fn collect_until_complete(handle: &mut BatchHandle) -> Vec<BatchUpdate> {
    let mut updates = Vec::new();
    while let Some(update) = handle.next_update().await {
        let done = matches!(update, BatchUpdate::BatchComplete { .. });
        updates.push(update);
        if done {
            break;
        }
    }
    updates
}

#[test]
fn test_jobs_keep_file_names() {
    let jobs = jobs_for_output_dir(&["slides/week1.pdf", "/tmp/week2.pdf"], "/out");
    assert_eq!(
        jobs,
        vec![
            BatchJob {
                input: PathBuf::from("slides/week1.pdf"),
                output: PathBuf::from("/out/week1.pdf"),
            },
            BatchJob {
                input: PathBuf::from("/tmp/week2.pdf"),
                output: PathBuf::from("/out/week2.pdf"),
            },
        ]
    );
    assert_eq!(jobs[0].name(), "week1.pdf");
}

#[test]
fn test_shared_output_names_are_detected() {
    let jobs = jobs_for_output_dir(
        &["term1/lecture.pdf", "term2/lecture.pdf", "term2/lab.pdf"],
        "/out",
    );
    assert_eq!(shared_outputs(&jobs), vec![PathBuf::from("/out/lecture.pdf").as_path()]);

    let distinct = jobs_for_output_dir(&["a.pdf", "b.pdf"], "/out");
    assert!(shared_outputs(&distinct).is_empty());
}

#[test]
fn test_output_in_input_directory_overwrites_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("deck.pdf");
    std::fs::write(&input, b"%PDF-1.7").unwrap();

    let jobs = jobs_for_output_dir(&[&input], dir.path());
    assert!(jobs[0].overwrites_input());

    let elsewhere = tempfile::tempdir().unwrap();
    let jobs = jobs_for_output_dir(&[&input], elsewhere.path());
    assert!(!jobs[0].overwrites_input());
}

#[test]
fn test_batch_result_failures() {
    let result = BatchResult {
        outcomes: vec![
            ("a.pdf".to_string(), DocumentOutcome::Success { sheets: 3 }),
            (
                "b.pdf".to_string(),
                DocumentOutcome::Failed {
                    reason: "b.pdf has no pages to process".to_string(),
                },
            ),
        ],
        cancelled: false,
    };

    assert!(!result.is_success());
    assert_eq!(
        result.failures(),
        vec![("b.pdf", "b.pdf has no pages to process")]
    );
    assert!(BatchResult::default().is_success());
}

#[tokio::test]
async fn test_failures_do_not_stop_the_batch() {
    let dir = tempfile::tempdir().unwrap();
    let inputs = [dir.path().join("missing1.pdf"), dir.path().join("missing2.pdf")];
    let jobs = jobs_for_output_dir(&inputs, dir.path().join("out"));

    let mut handle = spawn_worker();
    handle
        .submit(BatchCommand::Process {
            jobs,
            config: ProcessingConfig::default(),
        })
        .unwrap();

    let updates = collect_until_complete(&mut handle).await;

    let started: Vec<(usize, usize)> = updates
        .iter()
        .filter_map(|u| match u {
            BatchUpdate::DocumentStarted { index, total, .. } => Some((*index, *total)),
            _ => None,
        })
        .collect();
    assert_eq!(started, vec![(1, 2), (2, 2)]);

    match updates.last() {
        Some(BatchUpdate::BatchComplete { result }) => {
            assert_eq!(result.outcomes.len(), 2);
            assert!(!result.cancelled);
            let names: Vec<&str> = result.failures().iter().map(|(n, _)| *n).collect();
            assert_eq!(names, vec!["missing1.pdf", "missing2.pdf"]);
        }
        other => panic!("Expected BatchComplete, got {:?}", other),
    }

    handle.shutdown().await;
}

#[tokio::test]
async fn test_cancel_before_first_document() {
    let dir = tempfile::tempdir().unwrap();
    let inputs = [dir.path().join("a.pdf"), dir.path().join("b.pdf")];

    let mut handle = spawn_worker();
    handle
        .submit(BatchCommand::Process {
            jobs: jobs_for_output_dir(&inputs, dir.path()),
            config: ProcessingConfig::default(),
        })
        .unwrap();
    handle.submit(BatchCommand::Cancel).unwrap();

    let updates = collect_until_complete(&mut handle).await;
    assert_eq!(updates.len(), 1);
    match &updates[0] {
        BatchUpdate::BatchComplete { result } => {
            assert!(result.cancelled);
            assert!(result.outcomes.is_empty());
        }
        other => panic!("Expected BatchComplete, got {:?}", other),
    }

    handle.shutdown().await;
}

#[tokio::test]
async fn test_invalid_config_reports_error() {
    let mut handle = spawn_worker();
    handle
        .submit(BatchCommand::Process {
            jobs: jobs_for_output_dir(&["deck.pdf"], "out"),
            config: ProcessingConfig {
                pages_per_sheet: 0,
                ..Default::default()
            },
        })
        .unwrap();

    let updates = collect_until_complete(&mut handle).await;
    assert!(matches!(updates[0], BatchUpdate::Error { .. }));
    assert!(matches!(
        updates.last(),
        Some(BatchUpdate::BatchComplete { result }) if result.outcomes.is_empty()
    ));

    handle.shutdown().await;
}
