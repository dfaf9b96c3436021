//! Fixed-size text segmentation
//!
//! The synthesizer refuses text longer than [`MAX_SEGMENT_CHARS`] per call,
//! so extracted text is cut into windows of at most that many characters.
//! Windows are counted in `char`s, never split a code point, and ignore word
//! boundaries.

/// Largest text the synthesizer accepts in one call
pub const MAX_SEGMENT_CHARS: usize = 32_766;

/// Number of windows of `max_chars` needed to cover `chars` characters.
pub fn segment_count(chars: usize, max_chars: usize) -> usize {
    assert!(max_chars > 0, "segment size must be positive");
    chars.div_ceil(max_chars)
}

/// Split `text` into consecutive windows of at most `max_chars` characters.
///
/// Every window but the last holds exactly `max_chars` characters; the
/// windows concatenate back to `text`. Empty text yields no windows.
pub fn split_segments(text: &str, max_chars: usize) -> Vec<&str> {
    assert!(max_chars > 0, "segment size must be positive");

    let mut segments = Vec::with_capacity(segment_count(text.len(), max_chars));
    let mut start = 0;
    let mut taken = 0;
    for (offset, _) in text.char_indices() {
        if taken == max_chars {
            segments.push(&text[start..offset]);
            start = offset;
            taken = 0;
        }
        taken += 1;
    }
    if taken > 0 {
        segments.push(&text[start..]);
    }
    segments
}
