//! Service layer for SocialHub
//!
//! Business logic for the composition-and-scheduling state machine,
//! consumable by any interface (CLI, TUI, GUI) without duplication.
//!
//! # Architecture
//!
//! [`Session`] is the single orchestrating owner: it holds the connection
//! registry, the mutable draft, the scheduling history, and the generator
//! service, and wires the invariant enforcement between them (disconnect
//! cascades into deselection, scheduling resets the draft). Sub-modules:
//!
//! - `draft`: the in-progress post
//! - `scheduler`: validation and per-platform fan-out
//! - `history`: ordered, newest-first record of scheduled posts
//! - `events`: broadcast event bus for display surfaces
//!
//! # Example
//!
//! ```no_run
//! use libsocialhub::service::Session;
//! use libsocialhub::types::Platform;
//! use libsocialhub::Config;
//!
//! # fn example() -> libsocialhub::Result<()> {
//! let mut session = Session::from_config(&Config::default_config());
//!
//! session.toggle_connection(Platform::Twitter);
//! session.toggle_selection(Platform::Twitter);
//! session.set_text("Hello decentralized world!");
//!
//! let batch = session.schedule()?;
//! println!("Scheduled {} post(s)", batch.len());
//! # Ok(())
//! # }
//! ```

pub mod draft;
pub mod events;
pub mod history;
pub mod scheduler;
pub mod session;

pub use draft::Draft;
pub use events::{Event, EventBus, EventReceiver};
pub use history::History;
pub use session::Session;
