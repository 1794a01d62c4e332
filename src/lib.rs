//! Lifelog: an observable log of component lifecycle transitions
//!
//! Lifelog records every lifecycle event a component goes through
//! (create, start, resume, pause, stop, destroy) into an in-memory,
//! timestamped, color-coded list, newest first, and exposes it as
//! observable state for a presentation layer.
//!
//! # Core Concepts
//!
//! - **Transition kinds**: The closed set of seven events, each with a fixed color
//! - **Log store**: Single writer of the record history and the notify flag
//! - **Event sources**: Injected emitters of ordered transitions to one observer
//! - **Presenter**: Renders store state and raises best-effort notifications
//!
//! # Example
//!
//! ```rust
//! use lifelog::core::{LifecycleState, TransitionKind};
//! use lifelog::presentation::{LogNotifier, Presenter};
//! use lifelog::source::{attach_store, EventSource, LifecycleRegistry};
//! use lifelog::store::LogStore;
//! use std::sync::Arc;
//!
//! let registry = Arc::new(LifecycleRegistry::new("main"));
//! let store = Arc::new(LogStore::new());
//! let mut presenter = Presenter::new(store.clone(), LogNotifier);
//!
//! let registration = attach_store(registry.clone(), store.clone()).unwrap();
//! registry.move_to(LifecycleState::Resumed).unwrap();
//! presenter.pump();
//!
//! let screen = presenter.render(registry.current_state());
//! assert_eq!(screen.header(), "Current State: RESUMED");
//! assert_eq!(screen.rows[0].event, TransitionKind::Resumed.name());
//! drop(registration);
//! ```

pub mod config;
pub mod core;
pub mod presentation;
pub mod source;
pub mod store;
pub mod telemetry;

// Re-export commonly used types
pub use config::TrackerConfig;
pub use core::{DisplayColor, LifecycleState, LogRecord, RecordHistory, TransitionKind};
pub use source::{EventSource, LifecycleRegistry, ObserverRegistration, TransitionObserver};
pub use store::LogStore;
