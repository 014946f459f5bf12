//! A small rule-table contractor.
//!
//! Real grade-2 tables have thousands of context-sensitive rules. This port
//! applies two kinds of rules, enough to drive the engine end to end:
//!
//! - whole-word rules, matched case-insensitively against a Unicode word;
//! - letter-group rules, matched greedily (longest first) inside words.
//!
//! Every cell produced by a rule maps back to the first source character the
//! rule consumed, and every consumed character maps to the rule's first cell.

use super::{TableSet, TranslationPort, TranslationResult, Typeform};
use crate::error::{Error, Result};
use std::collections::HashMap;
use unicode_segmentation::UnicodeSegmentation;

/// Rule-table contractor.
#[derive(Clone, Debug, Default)]
pub struct WordTable {
    words: HashMap<String, String>,
    /// Sorted by descending source length so longer groups win.
    groups: Vec<(Vec<char>, String)>,
}

impl WordTable {
    /// Create an empty table (renders everything literally).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a whole-word contraction. Empty rules are ignored.
    #[must_use]
    pub fn with_word(mut self, word: &str, cells: &str) -> Self {
        if !word.is_empty() && !cells.is_empty() {
            self.words.insert(word.to_lowercase(), cells.to_string());
        }
        self
    }

    /// Add a letter-group contraction. Empty rules are ignored.
    #[must_use]
    pub fn with_group(mut self, group: &str, cells: &str) -> Self {
        if !group.is_empty() && !cells.is_empty() {
            self.groups.push((group.chars().collect(), cells.to_string()));
            self.groups.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        }
        self
    }

    /// A handful of North American ASCII braille grade-2 rules.
    #[must_use]
    pub fn english_sample() -> Self {
        let words = [
            ("and", "&"),
            ("for", "="),
            ("of", "("),
            ("the", "!"),
            ("with", ")"),
            ("you", "y"),
            ("people", "p"),
            ("knowledge", "k"),
        ];
        let groups = [
            ("ing", "+"),
            ("ch", "*"),
            ("sh", "%"),
            ("th", "?"),
            ("ed", "$"),
            ("er", "]"),
            ("ou", "\\"),
            ("ow", "["),
            ("st", "/"),
            ("ar", ">"),
        ];
        let table = words
            .into_iter()
            .fold(Self::new(), |t, (w, c)| t.with_word(w, c));
        groups
            .into_iter()
            .fold(table, |t, (g, c)| t.with_group(g, c))
    }

    fn contract_segment(
        &self,
        chars: &[char],
        hints: &[Typeform],
        start: usize,
        out: &mut Builder,
    ) {
        let literal = hints.iter().any(|h| h.contains(Typeform::COMPUTER_BRAILLE));
        let is_word = chars.iter().any(|c| c.is_alphanumeric());

        if literal || !is_word {
            for (i, &c) in chars.iter().enumerate() {
                out.push_rule(start + i, 1, &c.to_string());
            }
            return;
        }

        let lowered: String = chars.iter().collect::<String>().to_lowercase();
        if let Some(cells) = self.words.get(&lowered) {
            out.push_rule(start, chars.len(), cells);
            return;
        }

        let mut i = 0;
        while i < chars.len() {
            let group = self.groups.iter().find(|(from, _)| {
                chars.len() - i >= from.len()
                    && from
                        .iter()
                        .zip(&chars[i..])
                        .all(|(a, b)| b.to_lowercase().eq(a.to_lowercase()))
            });
            match group {
                Some((from, cells)) => {
                    out.push_rule(start + i, from.len(), cells);
                    i += from.len();
                }
                None => {
                    out.push_rule(start + i, 1, &chars[i].to_string());
                    i += 1;
                }
            }
        }
    }
}

/// Accumulates cells and both position arrays.
#[derive(Default)]
struct Builder {
    text: String,
    cells: usize,
    input_positions: Vec<usize>,
    output_positions: Vec<usize>,
}

impl Builder {
    /// Emit `cells` for `consumed` source characters starting at `source`.
    fn push_rule(&mut self, source: usize, consumed: usize, cells: &str) {
        let first_cell = self.cells;
        for c in cells.chars() {
            self.text.push(c);
            self.input_positions.push(source);
            self.cells += 1;
        }
        self.output_positions
            .extend(std::iter::repeat_n(first_cell, consumed));
    }
}

impl TranslationPort for WordTable {
    fn translate(
        &self,
        tables: &TableSet,
        text: &str,
        hints: &[Typeform],
        cursor: Option<usize>,
    ) -> Result<TranslationResult> {
        if tables.is_empty() {
            return Err(Error::Configuration("no translation tables".into()));
        }

        let mut out = Builder::default();
        let mut start = 0;
        for segment in text.split_word_bounds() {
            let chars: Vec<char> = segment.chars().collect();
            let end = start + chars.len();
            let segment_hints = hints.get(start..end).unwrap_or(&[]);
            self.contract_segment(&chars, segment_hints, start, &mut out);
            start = end;
        }

        let cursor_position = match cursor {
            Some(c) if c < out.output_positions.len() => out.output_positions[c],
            _ => out.cells,
        };

        Ok(TranslationResult {
            text: out.text,
            input_positions: out.input_positions,
            output_positions: out.output_positions,
            cursor_position,
        })
    }
}
