//! End-to-end scenarios: event source -> store -> presenter.

use lifelog::core::{DisplayColor, LifecycleState, TransitionKind};
use lifelog::presentation::{Notifier, NotifyError, Presenter};
use lifelog::source::{attach_store, EventSource, LifecycleRegistry};
use lifelog::store::LogStore;
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;

#[derive(Clone, Default)]
struct Snackbar {
    shown: Arc<Mutex<Vec<String>>>,
}

impl Notifier for Snackbar {
    fn notify(&self, message: &str) -> Result<(), NotifyError> {
        self.shown.lock().push(message.to_string());
        Ok(())
    }
}

fn setup() -> (Arc<LifecycleRegistry>, Arc<LogStore>) {
    (
        Arc::new(LifecycleRegistry::new("main")),
        Arc::new(LogStore::new()),
    )
}

#[test]
fn created_then_started_is_newest_first() {
    let store = LogStore::new();
    store.record(TransitionKind::Created);
    store.record(TransitionKind::Started);

    let records = store.records();
    let kinds: Vec<_> = records.iter().map(|r| r.kind()).collect();
    assert_eq!(kinds, vec![TransitionKind::Started, TransitionKind::Created]);
}

#[test]
fn notify_defaults_to_true() {
    assert!(LogStore::new().notify_on_transition());
}

#[test]
fn destroyed_is_the_only_grey_record() {
    let store = LogStore::new();
    for kind in TransitionKind::ALL {
        store.record(kind);
    }

    let records = store.records();
    let grey: Vec<_> = records
        .iter()
        .filter(|r| r.color() == DisplayColor::Grey)
        .map(|r| r.kind())
        .collect();
    assert_eq!(grey, vec![TransitionKind::Destroyed]);

    let distinct: HashSet<_> = records.iter().map(|r| r.color()).collect();
    assert_eq!(distinct.len(), 7);
}

#[test]
fn thousand_rapid_records_are_kept_in_order() {
    let store = LogStore::new();
    let kinds: Vec<_> = (0..1000)
        .map(|i| TransitionKind::ALL[i % TransitionKind::ALL.len()])
        .collect();

    for kind in &kinds {
        store.record(*kind);
    }

    let records = store.records();
    assert_eq!(records.len(), 1000);
    let recorded: Vec<_> = records.iter().map(|r| r.kind()).collect();
    let expected: Vec<_> = kinds.iter().rev().copied().collect();
    assert_eq!(recorded, expected);
}

#[test]
fn full_lifecycle_flows_into_store_and_notifications() {
    let (registry, store) = setup();
    let snackbar = Snackbar::default();
    let mut presenter = Presenter::new(store.clone(), snackbar.clone());
    let _registration = attach_store(registry.clone(), store.clone()).unwrap();

    registry.move_to(LifecycleState::Resumed).unwrap();
    registry.move_to(LifecycleState::Destroyed).unwrap();
    let report = presenter.pump();

    assert_eq!(report.observed, 6);
    assert_eq!(report.notified, 6);
    assert_eq!(
        *snackbar.shown.lock(),
        vec![
            "Event: ON_CREATE",
            "Event: ON_START",
            "Event: ON_RESUME",
            "Event: ON_PAUSE",
            "Event: ON_STOP",
            "Event: ON_DESTROY",
        ]
    );

    let screen = presenter.render(registry.current_state());
    assert_eq!(screen.header(), "Current State: DESTROYED");
    assert_eq!(screen.rows[0].event, "ON_DESTROY");
    assert_eq!(screen.rows[0].swatch, DisplayColor::Grey);
    assert_eq!(screen.rows[5].event, "ON_CREATE");
}

#[test]
fn toggling_off_keeps_recording_but_stops_notifying() {
    let (registry, store) = setup();
    let snackbar = Snackbar::default();
    let mut presenter = Presenter::new(store.clone(), snackbar.clone());
    let _registration = attach_store(registry.clone(), store.clone()).unwrap();

    registry.dispatch(TransitionKind::Created);
    presenter.pump();
    presenter.toggle_notifications(false);
    registry.dispatch(TransitionKind::Started);
    presenter.pump();

    assert_eq!(store.records().len(), 2);
    assert_eq!(*snackbar.shown.lock(), vec!["Event: ON_CREATE"]);
    assert!(!presenter.render(registry.current_state()).notify_on_transition);
}

#[test]
fn double_deregistration_leaves_no_ghost_records() {
    let (registry, store) = setup();
    let mut registration = attach_store(registry.clone(), store.clone()).unwrap();

    registry.dispatch(TransitionKind::Created);
    assert!(registration.detach());
    assert!(!registration.detach());

    let id = registry
        .add_observer(Arc::new(lifelog::source::StoreObserver::new(store.clone())))
        .unwrap();
    assert!(registry.remove_observer(id));
    assert!(!registry.remove_observer(id));
    drop(registration);

    registry.dispatch(TransitionKind::Started);
    registry.dispatch(TransitionKind::Resumed);

    let records = store.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records.newest().unwrap().kind(), TransitionKind::Created);
}

#[test]
fn reattaching_after_teardown_resumes_logging() {
    let (registry, store) = setup();

    {
        let _registration = attach_store(registry.clone(), store.clone()).unwrap();
        registry.move_to(LifecycleState::Started).unwrap();
    }
    registry.move_to(LifecycleState::Resumed).unwrap();

    let _registration = attach_store(registry.clone(), store.clone()).unwrap();
    registry.move_to(LifecycleState::Started).unwrap();

    let kinds: Vec<_> = store.records().iter().map(|r| r.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            TransitionKind::Paused,
            TransitionKind::Started,
            TransitionKind::Created
        ]
    );
}

#[test]
fn concurrent_dispatch_loses_nothing() {
    let (registry, store) = setup();
    let _registration = attach_store(registry.clone(), store.clone()).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = registry.clone();
            std::thread::spawn(move || {
                for _ in 0..250 {
                    registry.dispatch(TransitionKind::Any);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(store.records().len(), 1000);
}
