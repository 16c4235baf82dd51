use catalog_core::{CategoryInMemoryRepository, CategoryInput, CategoryService};
use log::{LevelFilter, Log, Metadata, Record};
use std::sync::Mutex;

struct EventRecorder {
    lines: Mutex<Vec<String>>,
}

impl Log for EventRecorder {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.lines.lock().unwrap().push(record.args().to_string());
    }

    fn flush(&self) {}
}

static RECORDER: EventRecorder = EventRecorder {
    lines: Mutex::new(Vec::new()),
};

fn assert_event(lines: &[String], needle: &str) {
    assert!(
        lines.iter().any(|line| line.contains(needle)),
        "no event line contains `{needle}`: {lines:#?}"
    );
}

#[test]
fn every_mutation_emits_a_paired_status_event() {
    log::set_logger(&RECORDER).unwrap();
    log::set_max_level(LevelFilter::Info);

    let mut service = CategoryService::new(CategoryInMemoryRepository::new());
    let missing = "00000000-0000-4000-8000-00000000dead";

    let created = service
        .create_category(CategoryInput {
            name: "Movie".to_string(),
            ..CategoryInput::default()
        })
        .unwrap();
    service.update_category(&created.id, "Film", None).unwrap();
    service.update_category(&created.id, "", None).unwrap_err();
    service.deactivate_category(&created.id).unwrap();
    service.delete_category(&created.id).unwrap();

    service.create_category(CategoryInput::default()).unwrap_err();
    service.update_category(missing, "Ghost", None).unwrap_err();
    service.activate_category(missing).unwrap_err();
    service.delete_category(missing).unwrap_err();

    let lines = RECORDER.lines.lock().unwrap().clone();

    for operation in [
        "category_create",
        "category_update",
        "category_set_active",
        "category_delete",
    ] {
        assert_event(
            &lines,
            &format!("event={operation} module=category_service status=ok"),
        );
        assert_event(
            &lines,
            &format!("event={operation} module=category_service status=error"),
        );
    }

    assert_event(
        &lines,
        "error=entity validation failed: name=[This field may not be blank.]",
    );
    assert_event(&lines, &format!("error=category not found: `{missing}`"));

    assert!(lines.iter().all(|line| !line.contains('\n')));
}
