//! Drives a simulated component through its lifecycle and prints the
//! tracker screen after each phase.
//!
//! Run with: `cargo run --example lifecycle_demo`
//! Optional: `LIFELOG_NOTIFY_ON_TRANSITION=false`, `RUST_LOG=lifelog=debug`,
//! or a `lifelog.toml` in the working directory.

use anyhow::Result;
use lifelog::core::{LifecycleState, TransitionKind};
use lifelog::presentation::{LogNotifier, Presenter};
use lifelog::source::{attach_store, EventSource, LifecycleRegistry};
use lifelog::store::LogStore;
use lifelog::telemetry::init_tracing;
use lifelog::TrackerConfig;
use std::path::Path;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("lifelog=info");

    let config = TrackerConfig::load(Some(Path::new("lifelog.toml")))?;
    let registry = Arc::new(LifecycleRegistry::new("MainScreen"));
    let store = Arc::new(LogStore::with_config(&config));
    let mut presenter = Presenter::new(store.clone(), LogNotifier)
        .with_timestamp_format(config.timestamp_format.clone());

    println!("=== Lifecycle tracker demo ===\n");

    let registration = attach_store(registry.clone(), store.clone())?;

    println!("--- Launch ---");
    registry.move_to(LifecycleState::Resumed)?;
    presenter.pump();
    println!("{}", presenter.render(registry.current_state()));

    println!("--- Backgrounded, notifications off ---");
    presenter.toggle_notifications(false);
    registry.move_to(LifecycleState::Created)?;
    presenter.pump();
    println!("{}", presenter.render(registry.current_state()));

    println!("--- Foregrounded from a background task ---");
    presenter.toggle_notifications(true);
    let (done_tx, done_rx) = tokio::sync::oneshot::channel::<()>();
    let host = registry.clone();
    tokio::spawn(async move {
        if let Err(err) = host.move_to(LifecycleState::Resumed) {
            tracing::error!(error = %err, "Lifecycle move failed");
        }
        host.dispatch(TransitionKind::Any);
        let _ = done_tx.send(());
    });
    let report = presenter
        .run_until(async {
            let _ = done_rx.await;
        })
        .await;
    println!(
        "observed {} new records, {} notifications",
        report.observed, report.notified
    );
    println!("{}", presenter.render(registry.current_state()));

    println!("--- Teardown ---");
    registry.move_to(LifecycleState::Destroyed)?;
    drop(registration);
    presenter.pump();
    println!("{}", presenter.render(registry.current_state()));

    let records = store.records();
    println!(
        "{} records, {} resumes, session span {:?}",
        records.len(),
        records.count_of(TransitionKind::Resumed),
        records.span().unwrap_or_default()
    );

    Ok(())
}
