//! Highlight engine: a single-pass tokenizer over one rendered line.
//!
//! The scanner is a pure function of the rendered text, the syntax profile,
//! and the block-comment state carried in from the previous line. It never
//! touches the document; cross-line propagation is driven by the document's
//! cascade loop, which keeps the tokenizer referentially transparent and
//! independently testable.
//!
//! Rule order is load-bearing. Line-comment detection runs first (outside
//! string and block-comment context), so `// " not a string` never enters
//! string mode, and a line comment always runs to end of line.

use unicode_width::UnicodeWidthChar;

use crate::core::syntax::SyntaxProfile;

/// Per-character classification of rendered text.
///
/// `Match` marks search hits; it is produced by the search layer, never by
/// the tokenizer itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Normal,
    NonPrint,
    LineComment,
    BlockComment,
    /// Primary keyword class (control flow, declarations).
    Keyword,
    /// Secondary keyword class (type-like names).
    Type,
    String,
    Number,
    Match,
}

/// Token separators: whitespace, NUL, or a fixed punctuation set.
fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || ch == '\0' || ",.()+-/*=~%[];".contains(ch)
}

/// True if `marker` matches the characters starting at `i`.
fn marker_at(chars: &[char], i: usize, marker: &str) -> bool {
    !marker.is_empty()
        && marker
            .chars()
            .enumerate()
            .all(|(k, mc)| chars.get(i + k) == Some(&mc))
}

/// If `kw` matches at `i` as a whole token, return its length in characters.
///
/// End of line counts as a trailing separator (the NUL terminator in the
/// rendered form).
fn keyword_len_at(chars: &[char], i: usize, kw: &str) -> Option<usize> {
    let mut len = 0;
    for (k, mc) in kw.chars().enumerate() {
        if chars.get(i + k) != Some(&mc) {
            return None;
        }
        len = k + 1;
    }
    match chars.get(i + len) {
        None => Some(len),
        Some(&next) if is_separator(next) => Some(len),
        _ => None,
    }
}

/// Classify every character of one rendered line.
///
/// `open_comment` is the carried state from the previous line. Returns one
/// tag per rendered character plus the outgoing carried state: whether an
/// unterminated block comment is still open at end of line.
///
/// Without a profile every character is `Normal` and no comment carries
/// over (plain mode).
pub fn highlight_line(
    render: &str,
    profile: Option<&SyntaxProfile>,
    open_comment: bool,
) -> (Vec<Highlight>, bool) {
    let chars: Vec<char> = render.chars().collect();
    let n = chars.len();
    let mut tags = vec![Highlight::Normal; n];

    let Some(profile) = profile else {
        return (tags, false);
    };

    let mut prev_sep = true;
    let mut in_string: Option<char> = None;
    let mut in_comment = open_comment;
    let mut i = 0;

    while i < n {
        // Line comment: checked before string-open detection, wins outside
        // string/block-comment context, and runs to end of line.
        if in_string.is_none() && !in_comment && marker_at(&chars, i, profile.line_comment) {
            for tag in &mut tags[i..] {
                *tag = Highlight::LineComment;
            }
            break;
        }

        if in_comment {
            tags[i] = Highlight::BlockComment;
            if marker_at(&chars, i, profile.block_comment_end) {
                tags[i + 1] = Highlight::BlockComment;
                i += 2;
                in_comment = false;
                prev_sep = true;
            } else {
                i += 1;
                prev_sep = false;
            }
            continue;
        }

        if in_string.is_none() && marker_at(&chars, i, profile.block_comment_start) {
            tags[i] = Highlight::BlockComment;
            tags[i + 1] = Highlight::BlockComment;
            i += 2;
            in_comment = true;
            prev_sep = false;
            continue;
        }

        if let Some(quote) = in_string {
            tags[i] = Highlight::String;
            if chars[i] == '\\' {
                // Escape sequence: the next character never closes the string.
                if i + 1 < n {
                    tags[i + 1] = Highlight::String;
                }
                i += 2;
                prev_sep = false;
                continue;
            }
            if chars[i] == quote {
                in_string = None;
            }
            i += 1;
            prev_sep = false;
            continue;
        }

        if chars[i] == '"' || chars[i] == '\'' {
            in_string = Some(chars[i]);
            tags[i] = Highlight::String;
            i += 1;
            prev_sep = false;
            continue;
        }

        if chars[i].width().is_none() {
            tags[i] = Highlight::NonPrint;
            i += 1;
            prev_sep = false;
            continue;
        }

        let prev_tag = if i > 0 { tags[i - 1] } else { Highlight::Normal };
        if (chars[i].is_ascii_digit() && (prev_sep || prev_tag == Highlight::Number))
            || (chars[i] == '.' && prev_tag == Highlight::Number)
        {
            tags[i] = Highlight::Number;
            i += 1;
            prev_sep = false;
            continue;
        }

        if prev_sep {
            let mut matched = None;
            'classes: for (set, tag) in [
                (&profile.keywords, Highlight::Keyword),
                (&profile.types, Highlight::Type),
            ] {
                for kw in set.iter() {
                    if let Some(len) = keyword_len_at(&chars, i, kw) {
                        matched = Some((len, tag));
                        break 'classes;
                    }
                }
            }
            if let Some((len, tag)) = matched {
                for t in &mut tags[i..i + len] {
                    *t = tag;
                }
                i += len;
                prev_sep = false;
                continue;
            }
        }

        prev_sep = is_separator(chars[i]);
        i += 1;
    }

    // The comment carries over unless it closed exactly at the final two
    // rendered characters.
    let ends_open = in_comment
        || (n > 0
            && tags[n - 1] == Highlight::BlockComment
            && !(n >= 2 && marker_at(&chars, n - 2, profile.block_comment_end)));

    (tags, ends_open)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c_tags(line: &str) -> (Vec<Highlight>, bool) {
        let profile = SyntaxProfile::c();
        highlight_line(line, Some(&profile), false)
    }

    #[test]
    fn plain_mode_is_all_normal() {
        let (tags, open) = highlight_line("int x = 1; /* anything */", None, false);
        assert!(tags.iter().all(|&t| t == Highlight::Normal));
        assert!(!open);
    }

    #[test]
    fn tag_count_matches_render_length() {
        for line in ["", "int x;", "\u{1}\u{2}", "héllo // ok"] {
            let (tags, _) = c_tags(line);
            assert_eq!(tags.len(), line.chars().count());
        }
    }

    #[test]
    fn keyword_requires_trailing_separator() {
        let (tags, _) = c_tags("intx");
        assert!(tags.iter().all(|&t| t == Highlight::Normal));

        let (tags, _) = c_tags("int x");
        assert_eq!(&tags[..3], &[Highlight::Type; 3]);
        assert_eq!(tags[3], Highlight::Normal);
    }

    #[test]
    fn keyword_requires_leading_separator() {
        // "xif" must not light up "if"
        let (tags, _) = c_tags("xif (y)");
        assert!(!tags.contains(&Highlight::Keyword));
    }

    #[test]
    fn keyword_at_end_of_line_matches() {
        let (tags, _) = c_tags("return");
        assert!(tags.iter().all(|&t| t == Highlight::Keyword));
    }

    #[test]
    fn primary_and_secondary_classes_are_distinct() {
        let (tags, _) = c_tags("while (int)");
        assert_eq!(&tags[..5], &[Highlight::Keyword; 5]);
        assert_eq!(&tags[7..10], &[Highlight::Type; 3]);
    }

    #[test]
    fn numbers_after_separator_only() {
        let (tags, _) = c_tags("x = 42;");
        assert_eq!(tags[4], Highlight::Number);
        assert_eq!(tags[5], Highlight::Number);

        // digits glued to an identifier are not numbers
        let (tags, _) = c_tags("x42");
        assert!(tags.iter().all(|&t| t == Highlight::Normal));
    }

    #[test]
    fn decimal_point_extends_a_number() {
        let (tags, _) = c_tags("y = 3.14");
        assert_eq!(&tags[4..8], &[Highlight::Number; 4]);

        // a leading dot is not a number
        let (tags, _) = c_tags(".5");
        assert_eq!(tags[0], Highlight::Normal);
    }

    #[test]
    fn string_literal_with_escaped_quote_stays_open() {
        // "a\"b" is one string literal through the escaped quote
        let line = r#""a\"b""#;
        let (tags, open) = c_tags(line);
        assert!(tags.iter().all(|&t| t == Highlight::String));
        assert!(!open);
    }

    #[test]
    fn trailing_backslash_in_string_is_safe() {
        let (tags, _) = c_tags("\"abc\\");
        assert!(tags.iter().all(|&t| t == Highlight::String));
    }

    #[test]
    fn single_quotes_open_strings_too() {
        let (tags, _) = c_tags("'a'");
        assert!(tags.iter().all(|&t| t == Highlight::String));
    }

    #[test]
    fn line_comment_beats_keywords() {
        let line = "x = 1; // int y;";
        let (tags, _) = c_tags(line);
        let start = line.find("//").unwrap();
        assert!(tags[start..].iter().all(|&t| t == Highlight::LineComment));
        assert!(!tags[start..].contains(&Highlight::Type));
    }

    #[test]
    fn line_comment_beats_string_open() {
        let (tags, open) = c_tags("// \" not a string");
        assert!(tags.iter().all(|&t| t == Highlight::LineComment));
        assert!(!open);
    }

    #[test]
    fn comment_marker_inside_string_is_text() {
        let (tags, _) = c_tags("\"http://x\"");
        assert!(tags.iter().all(|&t| t == Highlight::String));
    }

    #[test]
    fn block_comment_within_one_line() {
        let line = "a /* b */ c";
        let (tags, open) = c_tags(line);
        assert_eq!(&tags[2..9], &[Highlight::BlockComment; 7]);
        assert_eq!(tags[0], Highlight::Normal);
        assert_eq!(tags[10], Highlight::Normal);
        assert!(!open);
    }

    #[test]
    fn unterminated_block_comment_carries_over() {
        let (tags, open) = c_tags("int x; /*");
        assert_eq!(&tags[7..9], &[Highlight::BlockComment; 2]);
        assert!(open);
    }

    #[test]
    fn comment_closing_at_the_last_two_characters_does_not_carry() {
        let profile = SyntaxProfile::c();
        let (tags, open) = highlight_line("still open */", Some(&profile), true);
        assert!(tags.iter().all(|&t| t == Highlight::BlockComment));
        assert!(!open);
    }

    #[test]
    fn whole_line_inside_comment_stays_open() {
        let profile = SyntaxProfile::c();
        let (tags, open) = highlight_line("anything // int \"x\"", Some(&profile), true);
        assert!(tags.iter().all(|&t| t == Highlight::BlockComment));
        assert!(open);
    }

    #[test]
    fn empty_line_inside_comment_stays_open() {
        let profile = SyntaxProfile::c();
        let (tags, open) = highlight_line("", Some(&profile), true);
        assert!(tags.is_empty());
        assert!(open);
    }

    #[test]
    fn keyword_right_after_block_comment_end() {
        // closing the comment counts as a separator
        let (tags, open) = c_tags("/* c */int x;");
        assert_eq!(&tags[7..10], &[Highlight::Type; 3]);
        assert!(!open);
    }

    #[test]
    fn non_printable_characters_are_tagged() {
        let (tags, _) = c_tags("a\u{1}b");
        assert_eq!(
            tags,
            vec![Highlight::Normal, Highlight::NonPrint, Highlight::Normal]
        );
    }

    #[test]
    fn highlight_is_idempotent() {
        let profile = SyntaxProfile::c();
        let line = "int x = 1; /* open \"str\" 42";
        let first = highlight_line(line, Some(&profile), false);
        let second = highlight_line(line, Some(&profile), false);
        assert_eq!(first, second);
    }
}
