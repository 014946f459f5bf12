//! Joining the translated spans back into one line.
//!
//! The word under the cursor is carried literally, so its region of both
//! position arrays is an identity run. The suffix's arrays are relative to
//! the suffix itself and get shifted into line coordinates: input positions
//! by the source characters before it, output positions by the cells before
//! it. The word contributes the same count to both shifts since it was never
//! translated.

use crate::segment::Span;
use crate::translate::TranslationResult;

/// A rendered line with its position arrays and cursor cell.
///
/// Uses the same indexing convention as [`TranslationResult`]:
/// `input_positions` has one entry per cell, `output_positions` one entry
/// per source character.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContractedLine {
    /// Rendered braille, one `char` per cell.
    pub text: String,
    /// Source offset for each cell.
    pub input_positions: Vec<usize>,
    /// Cell offset for each source character.
    pub output_positions: Vec<usize>,
    /// Cursor cell.
    pub cursor_position: usize,
}

impl ContractedLine {
    /// The line rendered one character per cell.
    #[must_use]
    pub fn literal(line: &str, cursor: usize) -> Self {
        TranslationResult::literal(line, Some(cursor)).into()
    }

    /// Number of rendered cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.input_positions.len()
    }

    /// Number of source characters.
    #[must_use]
    pub fn source_len(&self) -> usize {
        self.output_positions.len()
    }

    /// Source offset shown at `cell`, or `None` past the last cell.
    #[must_use]
    pub fn source_offset(&self, cell: usize) -> Option<usize> {
        self.input_positions.get(cell).copied()
    }

    /// Cell showing source character `offset`; past the end maps to the
    /// cell after the last one.
    #[must_use]
    pub fn cell_offset(&self, offset: usize) -> usize {
        self.output_positions
            .get(offset)
            .copied()
            .unwrap_or_else(|| self.cell_count())
    }
}

impl From<TranslationResult> for ContractedLine {
    fn from(r: TranslationResult) -> Self {
        let cells = r.input_positions.len();
        Self {
            text: r.text,
            input_positions: r.input_positions,
            output_positions: r.output_positions,
            cursor_position: r.cursor_position.min(cells),
        }
    }
}

/// Merge a translated prefix, the literal word, and a translated suffix.
///
/// `word.start` is the prefix length in source characters; `cursor_in_word`
/// is the cursor relative to the word start and is clamped to the word.
#[must_use]
pub fn stitch(
    prefix: &TranslationResult,
    word: Span<'_>,
    suffix: &TranslationResult,
    cursor_in_word: usize,
) -> ContractedLine {
    let word_len = word.len();
    let prefix_cells = prefix.cell_count();
    let source_before_suffix = word.start + word_len;
    let cells_before_suffix = prefix_cells + word_len;

    let mut text = String::with_capacity(
        prefix.text.len() + word.text.len() + suffix.text.len(),
    );
    text.push_str(&prefix.text);
    text.push_str(word.text);
    text.push_str(&suffix.text);

    let mut input_positions = Vec::with_capacity(cells_before_suffix + suffix.cell_count());
    input_positions.extend_from_slice(&prefix.input_positions);
    input_positions.extend(word.start..source_before_suffix);
    input_positions.extend(
        suffix
            .input_positions
            .iter()
            .map(|p| p + source_before_suffix),
    );

    let mut output_positions =
        Vec::with_capacity(source_before_suffix + suffix.output_positions.len());
    output_positions.extend_from_slice(&prefix.output_positions);
    output_positions.extend(prefix_cells..cells_before_suffix);
    output_positions.extend(
        suffix
            .output_positions
            .iter()
            .map(|p| p + cells_before_suffix),
    );

    ContractedLine {
        text,
        input_positions,
        output_positions,
        cursor_position: prefix_cells + cursor_in_word.min(word_len),
    }
}
