//! reportfmt - column-aligned text reports for annotated files
//!
//! reportfmt turns a collection of [`FileRecord`]s, each carrying
//! [`Message`]s with a severity, an optional source position, and a reason,
//! into one deterministic, optionally colorized report string: a header per
//! file, aligned message rows, and a trailing pluralized summary line. It is
//! a pure library: no I/O, no environment probing, no global state.
//!
//! ## Module Structure
//!
//! - `message`: diagnostic message data model (severity, position, cause, trace)
//! - `file`: file records grouping messages
//! - `stats`: severity tallies
//! - `width`: ANSI-aware unicode display width
//! - `report`: filtering, ordering, and the [`reporter`] entry point
//! - `row` / `render` / `style` (internal): row construction, column
//!   alignment, and color helpers
//!
//! ## Example
//!
//! ```
//! use reportfmt::{reporter, FileRecord, Message, ReporterOptions, Span};
//!
//! let file = FileRecord::new("a.js")
//!     .with_message(Message::warning("Warning!").at(Span::point(1, 1)));
//!
//! let report = reporter(&[file], &ReporterOptions::default());
//! assert_eq!(report, "a.js\n  1:1  warning  Warning!\n\n⚠ 1 warning");
//! ```

pub mod file;
pub mod message;
pub mod report;
pub mod stats;
pub mod width;

mod render;
mod row;
mod style;

pub use file::FileRecord;
pub use message::{Cause, Message, Point, Severity, Span, TraceNode};
pub use report::{DEFAULT_NAME, ReportInput, ReporterOptions, reporter};
pub use stats::Statistics;
pub use width::display_width;
