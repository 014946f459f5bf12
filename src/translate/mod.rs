//! The boundary to the braille translation capability.
//!
//! Contraction itself (rule tables, grade-2 shorthand) lives behind
//! [`TranslationPort`]. This crate only consumes the port's output: the
//! rendered cells plus two position arrays.
//!
//! # Position arrays
//!
//! Offsets are `char` offsets. For a source text of `n` characters rendered
//! into `m` cells:
//!
//! - `input_positions` has `m` entries; entry `i` is the source offset that
//!   produced cell `i`.
//! - `output_positions` has `n` entries; entry `j` is the cell where source
//!   character `j` starts.
//!
//! Both arrays are non-decreasing.
//!
//! # Examples
//!
//! ```
//! use brailleline::translate::{LiteralPort, TableSet, TranslationPort};
//!
//! let tables = TableSet::single("en-us-g1.ctb");
//! let result = LiteralPort.translate(&tables, "abc", &[], Some(1)).unwrap();
//! assert_eq!(result.text, "abc");
//! assert_eq!(result.input_positions, vec![0, 1, 2]);
//! assert_eq!(result.cursor_position, 1);
//! ```

mod literal;
mod table;
mod tables;

pub use literal::{LiteralPort, Unavailable};
pub use table::WordTable;
pub use tables::TableSet;

use std::borrow::Cow;

use crate::error::{Error, Result};
use bitflags::bitflags;

bitflags! {
    /// Per-character emphasis hints passed through to the translator.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct Typeform: u8 {
        const ITALIC           = 0x01;
        const UNDERLINE        = 0x02;
        const BOLD             = 0x04;
        /// Render this character uncontracted (computer braille).
        const COMPUTER_BRAILLE = 0x08;
    }
}

/// Size `hints` to exactly `len` characters.
///
/// Empty hints stay empty. Missing entries are padded with
/// [`Typeform::empty()`] and extra entries are dropped.
pub(crate) fn fit_hints(hints: &[Typeform], len: usize) -> Cow<'_, [Typeform]> {
    if hints.is_empty() || hints.len() == len {
        return Cow::Borrowed(hints);
    }
    let mut fitted = hints[..hints.len().min(len)].to_vec();
    fitted.resize(len, Typeform::empty());
    Cow::Owned(fitted)
}

/// Translation capability consumed by the contraction engine.
pub trait TranslationPort {
    /// Translate `text` with the given tables.
    ///
    /// `hints` is either empty or holds one [`Typeform`] per character of
    /// `text`. `cursor` is a source offset to carry into cell space.
    fn translate(
        &self,
        tables: &TableSet,
        text: &str,
        hints: &[Typeform],
        cursor: Option<usize>,
    ) -> Result<TranslationResult>;

    /// Check that the port can translate with `tables` at all.
    ///
    /// Called once when a [`Contractor`](crate::Contractor) is built.
    fn check(&self, tables: &TableSet) -> Result<()> {
        if tables.is_empty() {
            return Err(Error::Configuration("no translation tables".into()));
        }
        Ok(())
    }
}

impl<P: TranslationPort + ?Sized> TranslationPort for &P {
    fn translate(
        &self,
        tables: &TableSet,
        text: &str,
        hints: &[Typeform],
        cursor: Option<usize>,
    ) -> Result<TranslationResult> {
        (**self).translate(tables, text, hints, cursor)
    }

    fn check(&self, tables: &TableSet) -> Result<()> {
        (**self).check(tables)
    }
}

impl<P: TranslationPort + ?Sized> TranslationPort for Box<P> {
    fn translate(
        &self,
        tables: &TableSet,
        text: &str,
        hints: &[Typeform],
        cursor: Option<usize>,
    ) -> Result<TranslationResult> {
        (**self).translate(tables, text, hints, cursor)
    }

    fn check(&self, tables: &TableSet) -> Result<()> {
        (**self).check(tables)
    }
}

/// Output of one translation call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TranslationResult {
    /// Rendered braille, one `char` per cell.
    pub text: String,
    /// Source offset for each cell.
    pub input_positions: Vec<usize>,
    /// Cell offset for each source character.
    pub output_positions: Vec<usize>,
    /// Cursor carried into cell space.
    pub cursor_position: usize,
}

impl TranslationResult {
    /// The result for an empty span.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Uncontracted rendering: every character maps onto itself.
    #[must_use]
    pub fn literal(text: &str, cursor: Option<usize>) -> Self {
        let len = text.chars().count();
        Self {
            text: text.to_string(),
            input_positions: (0..len).collect(),
            output_positions: (0..len).collect(),
            cursor_position: cursor.map_or(len, |c| c.min(len)),
        }
    }

    /// Number of rendered cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.input_positions.len()
    }

    /// Check the arrays against a source of `source_len` characters.
    pub fn validate(&self, source_len: usize) -> Result<()> {
        let cells = self.text.chars().count();
        if self.input_positions.len() != cells {
            return Err(Error::InvalidMapping(format!(
                "{} input positions for {cells} cells",
                self.input_positions.len()
            )));
        }
        if self.output_positions.len() != source_len {
            return Err(Error::InvalidMapping(format!(
                "{} output positions for {source_len} source characters",
                self.output_positions.len()
            )));
        }
        if source_len == 0 && cells > 0 {
            return Err(Error::InvalidMapping(
                "cells rendered from empty source".into(),
            ));
        }
        check_positions("input", &self.input_positions, source_len)?;
        check_positions("output", &self.output_positions, cells)
    }
}

fn check_positions(name: &str, positions: &[usize], bound: usize) -> Result<()> {
    let mut previous = 0;
    for (i, &pos) in positions.iter().enumerate() {
        if pos >= bound {
            return Err(Error::InvalidMapping(format!(
                "{name} position {pos} at {i} exceeds {bound}"
            )));
        }
        if pos < previous {
            return Err(Error::InvalidMapping(format!(
                "{name} positions decrease at {i}"
            )));
        }
        previous = pos;
    }
    Ok(())
}
