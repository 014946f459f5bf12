//! Contracting a line while keeping the word under the cursor readable.
//!
//! [`Contractor`] is the entry point used by a braille refresh: it owns a
//! [`TranslationPort`] and [`ContractionOptions`] and turns a line plus a
//! cursor offset into a [`ContractedLine`].
//!
//! # Examples
//!
//! ```
//! use brailleline::{ContractionOptions, Contractor, TableSet, WordTable};
//!
//! let options = ContractionOptions::new(TableSet::single("en-us-g2.ctb"));
//! let contractor = Contractor::new(WordTable::english_sample(), options).unwrap();
//!
//! // The cursor is inside "the", so that word stays literal.
//! let line = contractor.contract("with the people", 6);
//! assert_eq!(line.text, ") the p");
//! assert_eq!(line.cursor_position, 3);
//! ```

use crate::error::{Error, Result};
use crate::event::{EVENT_FALLBACK, LogLevel, emit_event, emit_log};
use crate::segment::segment_line;
use crate::stitch::{ContractedLine, stitch};
use crate::translate::{TableSet, TranslationPort, Typeform, fit_hints};
use crate::translator::translate_segments;

/// How a line is rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ContractionMode {
    /// One cell per character, no translation.
    FullyLiteral,
    /// The whole line goes through the translator.
    FullyContracted,
    /// Contract everything except the word under the cursor.
    #[default]
    PreserveCursorWord,
}

/// Contraction configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContractionOptions {
    /// Tables handed to the translator.
    pub tables: TableSet,
    /// Rendering mode.
    pub mode: ContractionMode,
    /// Per-character emphasis, empty when there is none.
    ///
    /// Sized to the line when contracting: missing entries count as no
    /// emphasis and extra entries are ignored.
    pub hints: Vec<Typeform>,
    /// Contract the whole line when the cursor sits on whitespace.
    ///
    /// With the cursor on a space no word is being edited. Off by default,
    /// which keeps the word ending just before the cursor literal.
    pub contract_on_space: bool,
}

impl ContractionOptions {
    /// Options with the given tables and default settings.
    #[must_use]
    pub fn new(tables: TableSet) -> Self {
        Self {
            tables,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: ContractionMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_hints(mut self, hints: Vec<Typeform>) -> Self {
        self.hints = hints;
        self
    }

    #[must_use]
    pub fn with_contract_on_space(mut self, contract: bool) -> Self {
        self.contract_on_space = contract;
        self
    }
}

/// Line contractor bound to a translation port.
#[derive(Clone, Debug)]
pub struct Contractor<P> {
    port: P,
    options: ContractionOptions,
}

impl<P: TranslationPort> Contractor<P> {
    /// Create a contractor, checking once that the port can use the tables.
    pub fn new(port: P, options: ContractionOptions) -> Result<Self> {
        if let Err(err) = port.check(&options.tables) {
            emit_log(
                LogLevel::Error,
                &format!("braille contraction unavailable: {err}"),
            );
            return Err(err);
        }
        Ok(Self { port, options })
    }

    #[must_use]
    pub fn port(&self) -> &P {
        &self.port
    }

    #[must_use]
    pub fn options(&self) -> &ContractionOptions {
        &self.options
    }

    /// Change the rendering mode.
    pub fn set_mode(&mut self, mode: ContractionMode) {
        self.options.mode = mode;
    }

    /// Replace the emphasis hints, e.g. when the line changes.
    pub fn set_hints(&mut self, hints: Vec<Typeform>) {
        self.options.hints = hints;
    }

    /// Render `line` with the cursor at `cursor`.
    #[must_use]
    pub fn contract(&self, line: &str, cursor: usize) -> ContractedLine {
        contract_line(&self.port, &self.options, line, cursor)
    }

    /// Like [`contract`](Self::contract), but rejects a cursor past the end
    /// of the line instead of clamping it.
    pub fn try_contract(&self, line: &str, cursor: usize) -> Result<ContractedLine> {
        let len = line.chars().count();
        if cursor > len {
            return Err(Error::CursorOutOfRange { cursor, len });
        }
        Ok(self.contract(line, cursor))
    }
}

/// Contract `line`, keeping the word under `cursor` literal.
///
/// Cursors past the end of the line are treated as end-of-line.
#[must_use]
pub fn contract_preserving_cursor<P: TranslationPort + ?Sized>(
    port: &P,
    tables: &TableSet,
    line: &str,
    cursor: usize,
    hints: &[Typeform],
) -> ContractedLine {
    let len = line.chars().count();
    let cursor = cursor.min(len);
    let segments = segment_line(line, cursor);
    let translated = translate_segments(port, tables, &segments, hints);
    stitch(
        &translated.prefix,
        segments.word,
        &translated.suffix,
        segments.cursor_in_word(cursor),
    )
}

/// Render `line` according to `options`.
#[must_use]
pub fn contract_line<P: TranslationPort + ?Sized>(
    port: &P,
    options: &ContractionOptions,
    line: &str,
    cursor: usize,
) -> ContractedLine {
    let len = line.chars().count();
    let cursor = cursor.min(len);
    if options.mode == ContractionMode::FullyLiteral {
        return ContractedLine::literal(line, cursor);
    }

    let tables = &options.tables;
    let hints = fit_hints(&options.hints, len);
    if options.mode == ContractionMode::FullyContracted {
        return contract_whole(port, tables, line, cursor, &hints);
    }
    if options.contract_on_space && cursor_on_whitespace(line, cursor) {
        emit_log(
            LogLevel::Debug,
            &format!("cursor {cursor} on whitespace, contracting whole line"),
        );
        return contract_whole(port, tables, line, cursor, &hints);
    }
    contract_preserving_cursor(port, tables, line, cursor, &hints)
}

fn contract_whole<P: TranslationPort + ?Sized>(
    port: &P,
    tables: &TableSet,
    line: &str,
    cursor: usize,
    hints: &[Typeform],
) -> ContractedLine {
    if line.is_empty() {
        return ContractedLine::default();
    }
    let len = line.chars().count();
    let result = port
        .translate(tables, line, hints, Some(cursor))
        .and_then(|r| r.validate(len).map(|()| r));

    match result {
        Ok(r) => r.into(),
        Err(err) => {
            emit_log(
                LogLevel::Warn,
                &format!("rendering line literally: {err}"),
            );
            emit_event(EVENT_FALLBACK, "line");
            ContractedLine::literal(line, cursor)
        }
    }
}

fn cursor_on_whitespace(line: &str, cursor: usize) -> bool {
    line.chars().nth(cursor).is_some_and(char::is_whitespace)
}
