//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! The reading plan itself needs none of them; they serve the progress,
//! group and reading features around it.
//!
//! - `ProgressRepository` - Per-reader day and chapter completion records
//! - `PreferencesRepository` - Per-reader version, start date and font size
//! - `MemberDirectory` - Group members and their display names
//! - `ScriptureReader` - Chapter text keyed by (version, group, chapter)
//! - `Clock` - Source of "today" for the calendar

mod clock;
mod member_directory;
mod preferences_repository;
mod progress_repository;
mod scripture_reader;

pub use clock::{Clock, FixedClock, SystemClock};
pub use member_directory::MemberDirectory;
pub use preferences_repository::PreferencesRepository;
pub use progress_repository::ProgressRepository;
pub use scripture_reader::{ScriptureChapter, ScriptureReader, ScriptureVersion};
