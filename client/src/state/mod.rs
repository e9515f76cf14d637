//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `settings`, `ui`) so components can
//! depend on small focused models. Each model is a plain struct held in an
//! `RwSignal` provided via context; none of it is persisted.

pub mod session;
pub mod settings;
pub mod ui;
