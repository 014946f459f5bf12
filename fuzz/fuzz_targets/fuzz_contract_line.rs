//! Fuzz target for cursor-preserving contraction.
//!
//! Contraction must never panic and must always return position arrays that
//! index inside the line and the rendered cells.

#![no_main]

use arbitrary::Arbitrary;
use brailleline::{ContractionMode, ContractionOptions, TableSet, WordTable, contract_line};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    line: &'a str,
    cursor: usize,
    mode: u8,
    contract_on_space: bool,
}

fuzz_target!(|input: Input<'_>| {
    let mode = match input.mode % 3 {
        0 => ContractionMode::FullyLiteral,
        1 => ContractionMode::FullyContracted,
        _ => ContractionMode::PreserveCursorWord,
    };
    let options = ContractionOptions::new(TableSet::single("en-us-g2.ctb"))
        .with_mode(mode)
        .with_contract_on_space(input.contract_on_space);
    let line = contract_line(&WordTable::english_sample(), &options, input.line, input.cursor);

    let cells = line.text.chars().count();
    let source_len = input.line.chars().count();
    assert_eq!(line.input_positions.len(), cells);
    assert_eq!(line.output_positions.len(), source_len);
    assert!(line.input_positions.iter().all(|&p| p < source_len));
    assert!(line.output_positions.iter().all(|&p| p < cells));
    assert!(line.cursor_position <= cells);
});
