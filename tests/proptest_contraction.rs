//! Property-based tests for cursor-preserving contraction.
//!
//! Uses proptest to check the segmentation and stitching invariants across
//! arbitrary lines and cursor offsets.

use brailleline::{
    ContractedLine, ContractionMode, ContractionOptions, Contractor, LiteralPort, TableSet,
    TranslationPort, TranslationResult, WordTable, contract_line, contract_preserving_cursor,
    segment_line,
};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Words that exercise whole-word and letter-group rules.
fn word() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec![
            "the", "and", "with", "of", "knowledge", "people", "thing", "shower", "church",
            "star", "grüße", "naïve", "日本",
        ])
        .prop_map(str::to_string),
        "[a-zA-Z]{1,8}",
        "[a-z.,'!]{1,4}",
    ]
}

fn separator() -> impl Strategy<Value = String> {
    prop::sample::select(vec![" ", "  ", "\t", " \u{a0}"]).prop_map(str::to_string)
}

/// A line of words joined by whitespace, optionally padded.
fn line() -> impl Strategy<Value = String> {
    (
        prop::option::of(separator()),
        prop::collection::vec((word(), separator()), 0..8),
        word(),
    )
        .prop_map(|(lead, parts, last)| {
            let mut s = lead.unwrap_or_default();
            for (w, sep) in parts {
                s.push_str(&w);
                s.push_str(&sep);
            }
            s.push_str(&last);
            s
        })
}

/// A line with a cursor anywhere in `0..=len`.
fn line_and_cursor() -> impl Strategy<Value = (String, usize)> {
    prop_oneof![line(), "\\PC{0,30}"].prop_flat_map(|s| {
        let len = s.chars().count();
        (Just(s), 0..=len)
    })
}

fn tables() -> TableSet {
    TableSet::single("en-us-g2.ctb")
}

fn translate(text: &str) -> TranslationResult {
    if text.is_empty() {
        return TranslationResult::empty();
    }
    WordTable::english_sample()
        .translate(&tables(), text, &[], None)
        .expect("sample table translates")
}

/// Position arrays follow the one-entry-per-cell / per-character convention.
fn assert_well_formed(line: &ContractedLine, source: &str) -> Result<(), TestCaseError> {
    let cells = line.text.chars().count();
    let source_len = source.chars().count();
    prop_assert_eq!(line.input_positions.len(), cells);
    prop_assert_eq!(line.output_positions.len(), source_len);
    for w in line.input_positions.windows(2) {
        prop_assert!(w[0] <= w[1], "input positions decrease: {:?}", line.input_positions);
    }
    for w in line.output_positions.windows(2) {
        prop_assert!(w[0] <= w[1], "output positions decrease: {:?}", line.output_positions);
    }
    for (cell, &src) in line.input_positions.iter().enumerate() {
        prop_assert!(src < source_len);
        prop_assert!(line.output_positions[src] <= cell);
    }
    for (src, &cell) in line.output_positions.iter().enumerate() {
        prop_assert!(cell < cells);
        prop_assert!(line.input_positions[cell] <= src);
    }
    prop_assert!(line.cursor_position <= cells);
    Ok(())
}

// ============================================================================
// Segmentation Properties
// ============================================================================

proptest! {
    /// Prefix, word, and suffix concatenate back to the line.
    #[test]
    fn segments_concatenate_to_line((s, cursor) in line_and_cursor()) {
        let seg = segment_line(&s, cursor);
        let joined = format!("{}{}{}", seg.prefix.text, seg.word.text, seg.suffix.text);
        prop_assert_eq!(joined, s.clone());
        prop_assert_eq!(seg.prefix.start, 0);
        prop_assert_eq!(seg.word.start, seg.prefix.len());
        prop_assert_eq!(seg.suffix.start, seg.word.end());
    }

    /// The word holds no whitespace and contains the cursor.
    #[test]
    fn word_contains_cursor((s, cursor) in line_and_cursor()) {
        let seg = segment_line(&s, cursor);
        prop_assert!(!seg.word.text.chars().any(char::is_whitespace));
        if cursor < s.chars().count() {
            prop_assert!(seg.word.start <= cursor && cursor <= seg.word.end());
            let prefix_ends_clean = seg.prefix.text.chars().last().is_none_or(char::is_whitespace);
            prop_assert!(prefix_ends_clean);
            let suffix_starts_clean = seg.suffix.text.chars().next().is_none_or(char::is_whitespace);
            prop_assert!(suffix_starts_clean);
        } else {
            prop_assert!(seg.word.is_empty() && seg.suffix.is_empty());
        }
    }
}

// ============================================================================
// Stitching Properties
// ============================================================================

proptest! {
    /// Rendered length is the sum of the three rendered spans.
    #[test]
    fn composite_length_is_sum_of_spans((s, cursor) in line_and_cursor()) {
        let seg = segment_line(&s, cursor);
        let prefix = translate(seg.prefix.text);
        let suffix = translate(seg.suffix.text);
        let line = contract_preserving_cursor(
            &WordTable::english_sample(), &tables(), &s, cursor, &[],
        );
        prop_assert_eq!(
            line.text.chars().count(),
            prefix.text.chars().count() + seg.word.len() + suffix.text.chars().count()
        );
    }

    /// The cursor word appears verbatim right after the rendered prefix.
    #[test]
    fn word_is_rendered_literally((s, cursor) in line_and_cursor()) {
        let seg = segment_line(&s, cursor);
        let prefix = translate(seg.prefix.text);
        let line = contract_preserving_cursor(
            &WordTable::english_sample(), &tables(), &s, cursor, &[],
        );
        let shown: String = line
            .text
            .chars()
            .skip(prefix.text.chars().count())
            .take(seg.word.len())
            .collect();
        prop_assert_eq!(shown.as_str(), seg.word.text);
    }

    /// Merged arrays are well formed and the cursor stays inside the line.
    #[test]
    fn merged_positions_are_well_formed((s, cursor) in line_and_cursor()) {
        let line = contract_preserving_cursor(
            &WordTable::english_sample(), &tables(), &s, cursor, &[],
        );
        assert_well_formed(&line, &s)?;
    }

    /// Inside the word, the cursor cell shows the character under the caret.
    #[test]
    fn cursor_cell_matches_caret((s, cursor) in line_and_cursor()) {
        let seg = segment_line(&s, cursor);
        let line = contract_preserving_cursor(
            &WordTable::english_sample(), &tables(), &s, cursor, &[],
        );
        if cursor < seg.word.end() {
            prop_assert_eq!(line.input_positions[line.cursor_position], cursor);
            prop_assert_eq!(line.text.chars().nth(line.cursor_position), s.chars().nth(cursor));
        }
    }

    /// Every mode yields well-formed output.
    #[test]
    fn all_modes_well_formed((s, cursor) in line_and_cursor()) {
        for mode in [
            ContractionMode::FullyLiteral,
            ContractionMode::FullyContracted,
            ContractionMode::PreserveCursorWord,
        ] {
            let options = ContractionOptions::new(tables()).with_mode(mode);
            let line = contract_line(&WordTable::english_sample(), &options, &s, cursor);
            assert_well_formed(&line, &s)?;
        }
    }

    /// Literal mode returns the line unchanged with an identity mapping.
    #[test]
    fn literal_mode_is_identity((s, cursor) in line_and_cursor()) {
        let options = ContractionOptions::new(tables()).with_mode(ContractionMode::FullyLiteral);
        let contractor = Contractor::new(WordTable::english_sample(), options).unwrap();
        let line = contractor.contract(&s, cursor);
        let len = s.chars().count();
        prop_assert_eq!(line.text.as_str(), s.as_str());
        prop_assert_eq!(line.input_positions, (0..len).collect::<Vec<_>>());
        prop_assert_eq!(line.output_positions, (0..len).collect::<Vec<_>>());
        prop_assert_eq!(line.cursor_position, cursor);
    }

    /// With a literal port, preserving the cursor word changes nothing.
    #[test]
    fn literal_port_round_trips((s, cursor) in line_and_cursor()) {
        let line = contract_preserving_cursor(&LiteralPort, &tables(), &s, cursor, &[]);
        prop_assert_eq!(line, ContractedLine::literal(&s, cursor));
    }
}
