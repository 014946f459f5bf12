//! Braille regions built on contracted lines.
//!
//! A [`BrailleRegion`] is one editable line as shown on the display: an
//! optional label, the line itself, and an optional end-of-line indicator.
//! It keeps the source cursor so it can switch between contracted and
//! literal rendering, route a pressed cell back to a text offset, and
//! project per-character attributes onto cells.
//!
//! # Examples
//!
//! ```
//! use brailleline::{BrailleRegion, ContractionOptions, Contractor, TableSet, WordTable};
//!
//! let options = ContractionOptions::new(TableSet::single("en-us-g2.ctb"));
//! let contractor = Contractor::new(WordTable::english_sample(), options).unwrap();
//!
//! let region = BrailleRegion::builder("the cat", 5).build(&contractor);
//! assert_eq!(region.text(), "! cat");
//! assert_eq!(region.cursor(), 3);
//!
//! // Pressing the routing key over "!" moves the caret to the start of "the".
//! assert_eq!(region.display_to_source(0), Some(0));
//! ```

use crate::contract::{ContractionMode, Contractor};
use crate::stitch::ContractedLine;
use crate::translate::TranslationPort;
use bitflags::bitflags;

bitflags! {
    /// Dots raised under a cell to flag attributes, links, or selection.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct CellMask: u8 {
        /// Dot 7 (lower left).
        const DOT7 = 0x40;
        /// Dot 8 (lower right).
        const DOT8 = 0x80;
    }
}

/// Builder for [`BrailleRegion`].
#[derive(Clone, Debug)]
pub struct RegionBuilder<'a> {
    text: &'a str,
    cursor: usize,
    label: &'a str,
    eol: &'a str,
}

impl<'a> RegionBuilder<'a> {
    /// Label shown before the text, followed by a space.
    #[must_use]
    pub fn label(mut self, label: &'a str) -> Self {
        self.label = label;
        self
    }

    /// Indicator appended after the rendered text.
    #[must_use]
    pub fn eol(mut self, eol: &'a str) -> Self {
        self.eol = eol;
        self
    }

    /// Render the region with `contractor`.
    ///
    /// The contractor's hints index the region's full line, label included.
    #[must_use]
    pub fn build<P: TranslationPort>(self, contractor: &Contractor<P>) -> BrailleRegion {
        let mut raw_line = String::new();
        if !self.label.is_empty() {
            raw_line.push_str(self.label);
            raw_line.push(' ');
        }
        let label_len = raw_line.chars().count();
        raw_line.push_str(self.text);
        let text_len = self.text.chars().count();

        let mut region = BrailleRegion {
            raw_line,
            label_len,
            text_len,
            eol: self.eol.to_string(),
            source_cursor: label_len + self.cursor.min(text_len),
            contracted: contractor.options().mode != ContractionMode::FullyLiteral,
            rendering: ContractedLine::default(),
            display: String::new(),
        };
        region.render(contractor);
        region
    }
}

/// One line of braille with its source text and cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrailleRegion {
    /// Label and text, the input to contraction.
    raw_line: String,
    label_len: usize,
    text_len: usize,
    eol: String,
    /// Cursor as an offset into `raw_line`.
    source_cursor: usize,
    contracted: bool,
    rendering: ContractedLine,
    /// Rendered cells followed by the end-of-line indicator.
    display: String,
}

impl BrailleRegion {
    /// Start building a region for `text` with the caret at `cursor`.
    #[must_use]
    pub fn builder(text: &str, cursor: usize) -> RegionBuilder<'_> {
        RegionBuilder {
            text,
            cursor,
            label: "",
            eol: "",
        }
    }

    /// The cells to show, including the end-of-line indicator.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.display
    }

    /// Cursor cell.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.rendering.cursor_position
    }

    /// Caret offset within the text, label excluded.
    #[must_use]
    pub fn source_cursor(&self) -> usize {
        self.source_cursor - self.label_len
    }

    #[must_use]
    pub fn is_contracted(&self) -> bool {
        self.contracted
    }

    /// The current rendering of label and text.
    #[must_use]
    pub fn rendering(&self) -> &ContractedLine {
        &self.rendering
    }

    /// Text offset for a routing key pressed over `cell`.
    ///
    /// Cells past the rendered text (the end-of-line indicator, or beyond)
    /// route to the end of the text. Cells over the label return `None`.
    #[must_use]
    pub fn display_to_source(&self, cell: usize) -> Option<usize> {
        let raw_len = self.label_len + self.text_len;
        let offset = if self.contracted {
            self.rendering.source_offset(cell).unwrap_or(raw_len)
        } else {
            cell.min(raw_len)
        };
        offset
            .checked_sub(self.label_len)
            .map(|o| o.min(self.text_len))
    }

    /// Switch to literal rendering. The caret stays where it was.
    pub fn expand(&mut self) {
        if !self.contracted {
            return;
        }
        self.contracted = false;
        self.rendering = ContractedLine::literal(&self.raw_line, self.source_cursor);
        self.rebuild_display();
    }

    /// Switch back to contracted rendering at the current caret.
    ///
    /// Does nothing when `contractor` is in literal mode.
    pub fn contract<P: TranslationPort>(&mut self, contractor: &Contractor<P>) {
        if self.contracted || contractor.options().mode == ContractionMode::FullyLiteral {
            return;
        }
        self.contracted = true;
        self.render(contractor);
    }

    /// Turn contraction on or off.
    pub fn set_contracted<P: TranslationPort>(&mut self, contractor: &Contractor<P>, on: bool) {
        if on {
            self.contract(contractor);
        } else {
            self.expand();
        }
    }

    /// Move the caret to `cursor` (a text offset) and re-render.
    pub fn reposition<P: TranslationPort>(&mut self, contractor: &Contractor<P>, cursor: usize) {
        self.source_cursor = self.label_len + cursor.min(self.text_len);
        self.render(contractor);
    }

    /// Project a per-character mask of the text onto cells.
    ///
    /// Characters that share a cell are OR-combined. Label and end-of-line
    /// cells are never flagged. The result has one entry per displayed cell.
    #[must_use]
    pub fn attribute_mask(&self, source_mask: &[CellMask]) -> Vec<CellMask> {
        let mut mask = vec![CellMask::empty(); self.rendering.cell_count()];
        for (i, m) in source_mask.iter().take(self.text_len).enumerate() {
            let Some(&cell) = self.rendering.output_positions.get(self.label_len + i) else {
                continue;
            };
            if let Some(slot) = mask.get_mut(cell) {
                *slot |= *m;
            }
        }
        mask.extend(std::iter::repeat_n(
            CellMask::empty(),
            self.eol.chars().count(),
        ));
        mask
    }

    fn render<P: TranslationPort>(&mut self, contractor: &Contractor<P>) {
        self.rendering = if self.contracted {
            contractor.contract(&self.raw_line, self.source_cursor)
        } else {
            ContractedLine::literal(&self.raw_line, self.source_cursor)
        };
        self.rebuild_display();
    }

    fn rebuild_display(&mut self) {
        self.display.clear();
        self.display.push_str(&self.rendering.text);
        self.display.push_str(&self.eol);
    }
}
