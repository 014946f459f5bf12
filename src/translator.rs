//! Translating the spans around the cursor word.

use crate::event::{EVENT_FALLBACK, LogLevel, emit_event, emit_log};
use crate::segment::{LineSegments, Span};
use crate::translate::{TableSet, TranslationPort, TranslationResult, Typeform, fit_hints};

/// Translate one span of a line.
///
/// `hints` covers the whole line and is sliced to the span. Characters past
/// the end of `hints` get no emphasis. Empty spans never reach the port. If
/// the port fails, or returns arrays that do not fit the span, the span is
/// rendered literally.
pub fn translate_span<P: TranslationPort + ?Sized>(
    port: &P,
    tables: &TableSet,
    span: Span<'_>,
    hints: &[Typeform],
) -> TranslationResult {
    if span.is_empty() {
        return TranslationResult::empty();
    }

    let end = span.end().min(hints.len());
    let covered = &hints[span.start.min(end)..end];
    let span_hints = fit_hints(covered, span.len());
    let result = port
        .translate(tables, span.text, &span_hints, None)
        .and_then(|r| r.validate(span.len()).map(|()| r));

    match result {
        Ok(r) => r,
        Err(err) => {
            emit_log(
                LogLevel::Warn,
                &format!("rendering span at {} literally: {err}", span.start),
            );
            emit_event(EVENT_FALLBACK, &format!("span:{}", span.start));
            TranslationResult::literal(span.text, None)
        }
    }
}

/// Prefix and suffix renderings of a segmented line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TranslatedSegments {
    pub prefix: TranslationResult,
    pub suffix: TranslationResult,
}

/// Translate the prefix and suffix of `segments`. The word is left alone.
pub fn translate_segments<P: TranslationPort + ?Sized>(
    port: &P,
    tables: &TableSet,
    segments: &LineSegments<'_>,
    hints: &[Typeform],
) -> TranslatedSegments {
    TranslatedSegments {
        prefix: translate_span(port, tables, segments.prefix, hints),
        suffix: translate_span(port, tables, segments.suffix, hints),
    }
}
