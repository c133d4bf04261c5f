//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load settings → Validate → Select route source → Build lookup
//!     → Seed store (if selected) → Bind listener
//!
//! Shutdown (shutdown.rs, signals.rs):
//!     Ctrl+C → Stop accepting → Drain in-flight requests → Exit
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal, decided once in `main`
//! - Listener binds last (traffic only when routes are ready)

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::{bootstrap, build_routes, load_settings, StartupError};
