use image_uploader::ui::{FileUploadControl, UploadsView};
use image_uploader::{
    partition, FileId, FileViewModel, LocalUploader, UploadEvent, UploaderConfig,
    UploadsCollectionState,
};
use std::collections::HashSet;
use std::sync::mpsc::channel;
use std::time::{Duration, Instant};
use tempfile::TempDir;

fn sample_uploads() -> UploadsCollectionState {
    UploadsCollectionState::from_json(
        r#"{
            "files": [
                {"id": 1, "name": "half.png", "progress": 50},
                {"id": 2, "name": "done.png", "url": "file:///tmp/done.png"},
                {"id": 3, "name": "broken.png", "error": "Server said no"},
                {"id": "four", "name": "start.png", "progress": 0}
            ],
            "update": {"status": "init", "message": ""},
            "delete": {"status": "pending", "message": "working"},
            "share": {"status": "init", "message": ""}
        }"#,
    )
    .unwrap()
}

#[test]
fn partition_places_each_file_once() {
    let uploads = sample_uploads();
    let split = partition(&uploads.files);

    let placed: Vec<FileId> = split
        .pending
        .iter()
        .chain(split.completed.iter())
        .map(|f| f.id.clone())
        .collect();
    let unique: HashSet<&FileId> = placed.iter().collect();
    assert_eq!(placed.len(), uploads.files.len());
    assert_eq!(unique.len(), uploads.files.len());

    assert!(split.pending.iter().any(|f| f.name == "half.png"));
    assert!(split.completed.iter().all(|f| f.name != "half.png"));

    let done = split.completed.iter().find(|f| f.name == "done.png").unwrap();
    assert_eq!(done.url(), Some("file:///tmp/done.png"));
    let broken = split.completed.iter().find(|f| f.name == "broken.png").unwrap();
    assert_eq!(broken.error(), Some("Server said no"));
}

#[test]
fn enlarge_a_then_b_then_clear() {
    let uploads = sample_uploads();
    let split = partition(&uploads.files);
    let mut view = UploadsView::new();

    let a: FileViewModel = split.completed[0].clone();
    let b: FileViewModel = split.completed[1].clone();

    view.select_file(a.clone());
    assert_eq!(view.selected_file(), Some(&a));
    view.select_file(b.clone());
    assert_eq!(view.selected_file(), Some(&b));
    view.clear_selection();
    assert_eq!(view.selected_file(), None);
}

#[test]
fn picked_files_flow_through_local_uploader_into_collection() {
    let dir = TempDir::new().unwrap();
    let image = dir.path().join("photo.png");
    std::fs::write(&image, [137u8, 80, 78, 71]).unwrap();
    let text = dir.path().join("notes.txt");
    std::fs::write(&text, "hello").unwrap();

    let (sender, receiver) = channel();
    let mut uploader = LocalUploader::new(UploaderConfig::default(), sender).unwrap();
    FileUploadControl::default().dispatch(vec![image, text], &mut uploader);

    let mut uploads = UploadsCollectionState::default();
    let mut finished = 0;
    let deadline = Instant::now() + Duration::from_secs(5);
    while finished < 2 {
        let remaining = deadline.saturating_duration_since(Instant::now());
        let event = receiver.recv_timeout(remaining).expect("uploads stalled");
        if matches!(event, UploadEvent::Finished { .. }) {
            finished += 1;
        }
        uploads.apply(event);
    }

    assert_eq!(uploads.files.len(), 2);
    assert_eq!(uploads.files[0].name, "photo.png");
    assert_eq!(uploads.files[1].name, "notes.txt");
    assert!(uploads.files[0].url().unwrap().ends_with("photo.png"));
    assert_eq!(
        uploads.files[1].error(),
        Some("Unsupported file type: txt")
    );
    assert!(!uploads.has_pending());
}

#[test]
fn new_uploads_never_reuse_snapshot_ids() {
    let mut uploads = UploadsCollectionState::from_json(
        r#"{
            "files": [{"id": "local-1", "name": "old.png", "url": "file:///old.png"}],
            "update": {"status": "init", "message": ""},
            "delete": {"status": "init", "message": ""},
            "share": {"status": "init", "message": ""}
        }"#,
    )
    .unwrap();

    let (sender, receiver) = channel();
    let mut uploader = LocalUploader::new(UploaderConfig::default(), sender)
        .unwrap()
        .with_taken_ids(uploads.ids());
    FileUploadControl::default().dispatch(vec!["new.pdf".into()], &mut uploader);

    loop {
        let event = receiver
            .recv_timeout(Duration::from_secs(5))
            .expect("upload stalled");
        let done = matches!(event, UploadEvent::Finished { .. });
        uploads.apply(event);
        if done {
            break;
        }
    }

    assert_eq!(uploads.files.len(), 2);
    assert_eq!(uploads.files[0].url(), Some("file:///old.png"));
    assert_eq!(uploads.files[1].name, "new.pdf");
    assert_eq!(uploads.files[1].error(), Some("Unsupported file type: pdf"));
}
