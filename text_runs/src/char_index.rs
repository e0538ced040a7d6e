// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Character-indexed access to UTF-8 text.
//!
//! Blocks address their text by Unicode scalar value, while `str` is addressed by byte. These
//! helpers translate between the two so that a multi-byte character always counts as a single
//! position and is never split by an edit.

use alloc::string::String;

/// Returns the number of characters in `text`.
#[inline]
pub(crate) fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Returns the byte offset of the character at `char_offset`.
///
/// An offset at or past the last character maps to `text.len()`.
pub(crate) fn byte_offset(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map_or(text.len(), |(index, _)| index)
}

/// Returns the byte range covering `len` characters starting at character `start`.
pub(crate) fn byte_range(text: &str, start: usize, len: usize) -> (usize, usize) {
    let start_byte = byte_offset(text, start);
    let end_byte = start_byte + byte_offset(&text[start_byte..], len);
    (start_byte, end_byte)
}

/// Builds `text[..offset] + insert + text[offset + remove..]`, counting in characters.
pub(crate) fn splice(text: &str, offset: usize, remove: usize, insert: &str) -> String {
    let (start_byte, end_byte) = byte_range(text, offset, remove);
    let mut out = String::with_capacity(text.len() - (end_byte - start_byte) + insert.len());
    out.push_str(&text[..start_byte]);
    out.push_str(insert);
    out.push_str(&text[end_byte..]);
    out
}

#[cfg(test)]
mod tests {
    use super::{byte_offset, byte_range, char_count, splice};

    #[test]
    fn ascii_offsets_match_bytes() {
        let s = "abc";
        assert_eq!(char_count(s), 3);
        for i in 0..=3 {
            assert_eq!(byte_offset(s, i), i);
        }
        assert_eq!(byte_offset(s, 10), 3);
    }

    #[test]
    fn multibyte_counts_as_one() {
        // "é" is 2 bytes in UTF-8.
        let s = "éclair";
        assert_eq!(char_count(s), 6);
        assert_eq!(byte_offset(s, 1), 2);
        assert_eq!(byte_range(s, 0, 1), (0, 2));
        assert_eq!(byte_range(s, 1, 2), (2, 4));
    }

    #[test]
    fn emoji_flag_is_two_characters() {
        let s = "🇯🇵"; // two 4-byte codepoints
        assert_eq!(char_count(s), 2);
        assert_eq!(byte_offset(s, 1), 4);
        assert_eq!(splice(s, 1, 1, "x"), "🇯x");
    }

    #[test]
    fn splice_replaces_character_span() {
        assert_eq!(splice("Hello, BIG", 5, 0, "!!!"), "Hello!!!, BIG");
        assert_eq!(splice("Hello, BIG", 7, 3, ""), "Hello, ");
        assert_eq!(splice("World!", 0, 6, "Bye"), "Bye");
        assert_eq!(splice("naïve", 2, 1, "i"), "naive");
        assert_eq!(splice("", 0, 0, ""), "");
    }
}
