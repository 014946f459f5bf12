//! Ports that do not contract.

use super::{TableSet, TranslationPort, TranslationResult, Typeform};
use crate::error::{Error, Result};

/// Renders text one character per cell.
#[derive(Clone, Copy, Debug, Default)]
pub struct LiteralPort;

impl TranslationPort for LiteralPort {
    fn translate(
        &self,
        _tables: &TableSet,
        text: &str,
        _hints: &[Typeform],
        cursor: Option<usize>,
    ) -> Result<TranslationResult> {
        Ok(TranslationResult::literal(text, cursor))
    }
}

/// A port with no tables loaded. Every call fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unavailable;

impl TranslationPort for Unavailable {
    fn translate(
        &self,
        _tables: &TableSet,
        _text: &str,
        _hints: &[Typeform],
        _cursor: Option<usize>,
    ) -> Result<TranslationResult> {
        Err(Error::Configuration("no translation tables loaded".into()))
    }

    fn check(&self, _tables: &TableSet) -> Result<()> {
        Err(Error::Configuration("no translation tables loaded".into()))
    }
}
