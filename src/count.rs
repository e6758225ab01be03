//! Non-overlapping substring counting.
//!
//! Matches are taken leftmost first and a match consumes its characters, so
//! `"aa"` occurs once in `"aaa"` and twice in `"aaaa"`. This is the same as
//! removing every occurrence of the word and dividing the length lost by the
//! word length.

/// Count non-overlapping occurrences of `word` in `text`.
///
/// Returns 0 for an empty word, a word longer than the text, or no match.
pub fn count_occurrences(word: &str, text: &str) -> usize {
    if word.is_empty() || word.len() > text.len() {
        return 0;
    }
    text.matches(word).count()
}

/// `char` slice form of [`count_occurrences`], used by the grid scan where
/// rows and columns are sliced by character index.
pub(crate) fn count_chars(word: &[char], text: &[char]) -> usize {
    let w = word.len();
    if w == 0 || w > text.len() {
        return 0;
    }
    let mut count = 0;
    let mut i = 0;
    while i + w <= text.len() {
        if text[i..i + w] == *word {
            count += 1;
            i += w;
        } else {
            i += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn counts_are_non_overlapping() {
        assert_eq!(count_occurrences("aa", "aaaa"), 2);
        assert_eq!(count_occurrences("aa", "aaa"), 1);
        assert_eq!(count_occurrences("aba", "ababa"), 1);
    }

    #[test]
    fn missing_or_oversized_words_count_zero() {
        assert_eq!(count_occurrences("xyz", "abc"), 0);
        assert_eq!(count_occurrences("a", ""), 0);
        assert_eq!(count_occurrences("abcd", "abc"), 0);
        assert_eq!(count_occurrences("", "abc"), 0);
    }

    #[test]
    fn char_form_matches_str_form() {
        for (word, text) in [
            ("aa", "aaaa"),
            ("aa", "aaa"),
            ("ab", "xabyabab"),
            ("é", "éaé"),
            ("xyz", "abc"),
            ("a", ""),
        ] {
            assert_eq!(
                count_chars(&chars(word), &chars(text)),
                count_occurrences(word, text),
                "{word} in {text}"
            );
        }
    }
}
