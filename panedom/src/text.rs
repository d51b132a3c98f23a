use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Cut `s` down to at most `max_width` columns, ending in `…` when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target = max_width - 1;
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = char_width(ch);
        if width + w > target {
            break;
        }
        result.push(ch);
        width += w;
    }
    result.push('…');
    result
}

/// Word-wrap `s` to `max_width` columns. Explicit newlines are kept, and words
/// wider than a whole line are broken at character boundaries.
///
/// Always returns at least one line, so empty text still occupies a row.
pub fn wrap_words(s: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![];
    }

    let mut lines = Vec::new();

    for input_line in s.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;

        for word in input_line.split_whitespace() {
            let word_width = display_width(word);
            let sep = usize::from(!current.is_empty());

            if current_width + sep + word_width <= max_width {
                if sep == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += sep + word_width;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= max_width {
                current.push_str(word);
                current_width = word_width;
                continue;
            }

            // Break an over-long word
            for ch in word.chars() {
                let w = char_width(ch);
                if current_width + w > max_width && !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += w;
            }
        }

        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_simple() {
        assert_eq!(wrap_words("one two three", 7), vec!["one two", "three"]);
    }

    #[test]
    fn test_wrap_keeps_newlines() {
        assert_eq!(wrap_words("a\n\nb", 10), vec!["a", "", "b"]);
    }

    #[test]
    fn test_wrap_breaks_long_word() {
        assert_eq!(wrap_words("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn test_wrap_empty_is_one_line() {
        assert_eq!(wrap_words("", 5), vec![String::new()]);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate_to_width("hello world", 6), "hello…");
        assert_eq!(truncate_to_width("hi", 6), "hi");
    }
}
