//! Splitting a line around the word under the cursor.
//!
//! All offsets are `char` offsets into the line.

/// A contiguous piece of a line and where it starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span<'a> {
    /// The span's text.
    pub text: &'a str,
    /// Character offset of the span within the line.
    pub start: usize,
}

impl<'a> Span<'a> {
    #[must_use]
    pub fn new(text: &'a str, start: usize) -> Self {
        Self { text, start }
    }

    /// Length in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Character offset just past the span.
    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// A line split into text before the cursor word, the word, and the rest.
///
/// `prefix.text + word.text + suffix.text` is always the original line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineSegments<'a> {
    pub prefix: Span<'a>,
    pub word: Span<'a>,
    pub suffix: Span<'a>,
}

impl LineSegments<'_> {
    /// Offset of a line cursor relative to the start of the word.
    #[must_use]
    pub fn cursor_in_word(&self, cursor: usize) -> usize {
        cursor.saturating_sub(self.word.start).min(self.word.len())
    }
}

/// Split `line` into prefix, word under `cursor`, and suffix.
///
/// The prefix keeps the whitespace that ends it and the suffix keeps the
/// whitespace that starts it. A cursor at or past the end of the line leaves
/// the whole line in the prefix.
///
/// ```
/// use brailleline::segment_line;
///
/// let s = segment_line("hello world", 8);
/// assert_eq!(s.prefix.text, "hello ");
/// assert_eq!(s.word.text, "world");
/// assert_eq!(s.suffix.text, "");
/// ```
#[must_use]
pub fn segment_line(line: &str, cursor: usize) -> LineSegments<'_> {
    let len = line.chars().count();
    if cursor >= len {
        return LineSegments {
            prefix: Span::new(line, 0),
            word: Span::new("", len),
            suffix: Span::new("", len),
        };
    }

    let cursor_byte = byte_offset(line, cursor);
    let (before, after) = line.split_at(cursor_byte);

    // Last whitespace before the cursor belongs to the prefix.
    let word_start_byte = before
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map_or(0, |(i, c)| i + c.len_utf8());

    // First whitespace at or after the cursor starts the suffix.
    let word_end_byte = after
        .char_indices()
        .find(|(_, c)| c.is_whitespace())
        .map_or(line.len(), |(i, _)| cursor_byte + i);

    let prefix = &line[..word_start_byte];
    let word = &line[word_start_byte..word_end_byte];
    let suffix = &line[word_end_byte..];

    let word_start = prefix.chars().count();
    let suffix_start = word_start + word.chars().count();

    LineSegments {
        prefix: Span::new(prefix, 0),
        word: Span::new(word, word_start),
        suffix: Span::new(suffix, suffix_start),
    }
}

/// Byte offset of the `char_offset`-th character (or the string length).
pub(crate) fn byte_offset(s: &str, char_offset: usize) -> usize {
    s.char_indices()
        .nth(char_offset)
        .map_or(s.len(), |(i, _)| i)
}
