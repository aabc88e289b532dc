//! Text shaping for the narrow device display.

use heapless::String;

const ELLIPSIS: char = '…';

/// Keeps the first `head` and last `tail` characters of `source`, joined by
/// an ellipsis. Sources that already fit are copied unchanged.
///
/// Output stops early if `N` bytes run out.
pub fn truncate_middle<const N: usize>(source: &str, head: usize, tail: usize) -> String<N> {
    let mut out = String::new();
    let total = source.chars().count();

    if total <= head + tail + 1 {
        push_limited(&mut out, source.chars());
        return out;
    }

    push_limited(&mut out, source.chars().take(head));
    if out.push(ELLIPSIS).is_err() {
        return out;
    }
    push_limited(&mut out, source.chars().skip(total - tail));
    out
}

fn push_limited<const N: usize>(out: &mut String<N>, chars: impl Iterator<Item = char>) {
    for ch in chars {
        if out.push(ch).is_err() {
            break;
        }
    }
}

/// Splits `source` into lines of at most `width` characters.
pub fn fixed_width_lines(source: &str, width: usize) -> FixedWidthLines<'_> {
    FixedWidthLines {
        rest: source,
        width: width.max(1),
    }
}

pub struct FixedWidthLines<'a> {
    rest: &'a str,
    width: usize,
}

impl<'a> Iterator for FixedWidthLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        let split = self
            .rest
            .char_indices()
            .nth(self.width)
            .map(|(index, _)| index)
            .unwrap_or(self.rest.len());
        let (line, rest) = self.rest.split_at(split);
        self.rest = rest;
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_text_keeps_head_and_tail() {
        let out: String<24> = truncate_middle("0x1234567890abcdef", 6, 4);
        assert_eq!(out.as_str(), "0x1234…cdef");
    }

    #[test]
    fn short_text_is_unchanged() {
        let out: String<24> = truncate_middle("0xabc", 6, 4);
        assert_eq!(out.as_str(), "0xabc");
    }

    #[test]
    fn small_buffer_truncates_without_panicking() {
        let out: String<4> = truncate_middle("abcdefghijkl", 6, 4);
        assert_eq!(out.as_str(), "abcd");
    }

    #[test]
    fn lines_are_split_on_width() {
        let lines: Vec<&str> = fixed_width_lines("abcdefghij", 4).collect();
        assert_eq!(lines, ["abcd", "efgh", "ij"]);
    }

    #[test]
    fn zero_width_is_treated_as_one() {
        let lines: Vec<&str> = fixed_width_lines("ab", 0).collect();
        assert_eq!(lines, ["a", "b"]);
    }
}
