//! `brailleline` - cursor-aware braille contraction
//!
//! Contracted (grade 2) braille abbreviates words and letter groups, which
//! makes it hard to see individual letters of the word being edited. This
//! crate renders a line with every word contracted except the one under the
//! cursor, which is shown letter for letter, and keeps the position arrays
//! and cursor consistent across the mixed rendering.
//!
//! The contraction rules themselves sit behind [`TranslationPort`].
//!
//! # Pipeline
//!
//! - [`segment_line`] splits the line into prefix, cursor word, and suffix.
//! - [`translate_segments`] translates the prefix and suffix.
//! - [`stitch`] joins the three spans and their position arrays.
//! - [`Contractor`] picks the mode and drives the steps above.

// Crate-level lint configuration
#![allow(clippy::module_name_repetitions)] // ContractionMode in contract etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::needless_pass_by_value)] // Spans are small Copy types
#![allow(clippy::must_use_candidate)] // Getters are obvious

pub mod contract;
pub mod error;
pub mod event;
pub mod region;
pub mod segment;
pub mod stitch;
pub mod translate;
pub mod translator;

// Re-export core types at crate root
pub use contract::{
    ContractionMode, ContractionOptions, Contractor, contract_line, contract_preserving_cursor,
};
pub use error::{Error, Result};
pub use event::{LogLevel, emit_event, emit_log, set_event_callback, set_log_callback};
pub use region::{BrailleRegion, CellMask, RegionBuilder};
pub use segment::{LineSegments, Span, segment_line};
pub use stitch::{ContractedLine, stitch};
pub use translate::{
    LiteralPort, TableSet, TranslationPort, TranslationResult, Typeform, Unavailable, WordTable,
};
pub use translator::{TranslatedSegments, translate_segments, translate_span};
