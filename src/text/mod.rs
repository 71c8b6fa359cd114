//! String manipulation
//!
//! Single-pass helpers over `&str`. All functions work on Unicode scalar
//! values (`char`), not bytes, and none of them can fail.

mod processor;

pub use processor::TextProcessor;

const VOWELS: &str = "aeiouAEIOU";

/// Splits `s` into words on runs of whitespace
///
/// Besides Unicode whitespace, the ASCII information separators
/// U+001C..=U+001F also delimit words.
pub fn words(s: &str) -> impl Iterator<Item = &str> {
    s.split(is_separator).filter(|word| !word.is_empty())
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Returns the characters of `s` in reverse order
pub fn reverse_string(s: &str) -> String {
    s.chars().rev().collect()
}

/// Checks whether `s` reads the same forwards and backwards
///
/// Spaces are dropped and the comparison is case-insensitive, so
/// "A man a plan a canal Panama" is a palindrome. Empty input is one too.
pub fn is_palindrome(s: &str) -> bool {
    let cleaned: Vec<char> = s
        .to_lowercase()
        .chars()
        .filter(|&c| c != ' ')
        .collect();

    cleaned.iter().eq(cleaned.iter().rev())
}

/// Counts the ASCII vowels in `s`, in either case
pub fn count_vowels(s: &str) -> usize {
    s.chars().filter(|&c| VOWELS.contains(c)).count()
}

/// Capitalizes every whitespace-separated word
///
/// The first character of each word is upper-cased and the rest lower-cased
/// ("PYTHON" becomes "Python"). Runs of whitespace collapse to one space and
/// leading/trailing whitespace is dropped.
pub fn capitalize_words(s: &str) -> String {
    words(s)
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut capitalized: String = first.to_uppercase().collect();
            capitalized.push_str(&chars.as_str().to_lowercase());
            capitalized
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_string() {
        assert_eq!(reverse_string("hello"), "olleh");
        assert_eq!(reverse_string("Python"), "nohtyP");
        assert_eq!(reverse_string(""), "");
        assert_eq!(reverse_string("a"), "a");
    }

    #[test]
    fn test_reverse_string_multibyte() {
        assert_eq!(reverse_string("añb"), "bña");
    }

    #[test]
    fn test_is_palindrome() {
        assert!(is_palindrome("racecar"));
        assert!(is_palindrome("A man a plan a canal Panama"));
        assert!(!is_palindrome("hello"));
        assert!(is_palindrome(""));
    }

    #[test]
    fn test_is_palindrome_only_spaces() {
        assert!(is_palindrome("   "));
    }

    #[test]
    fn test_is_palindrome_keeps_punctuation() {
        // only spaces are stripped
        assert!(!is_palindrome("race car!"));
    }

    #[test]
    fn test_count_vowels() {
        assert_eq!(count_vowels("hello"), 2);
        assert_eq!(count_vowels("AEIOU"), 5);
        assert_eq!(count_vowels("xyz"), 0);
        assert_eq!(count_vowels("Programming"), 3);
        assert_eq!(count_vowels(""), 0);
    }

    #[test]
    fn test_capitalize_words() {
        assert_eq!(capitalize_words("hello world"), "Hello World");
        assert_eq!(capitalize_words("python programming"), "Python Programming");
        assert_eq!(capitalize_words(""), "");
    }

    #[test]
    fn test_capitalize_words_lowercases_rest() {
        assert_eq!(capitalize_words("PYTHON"), "Python");
        assert_eq!(capitalize_words("mIxEd CaSe"), "Mixed Case");
    }

    #[test]
    fn test_words_split_on_information_separators() {
        assert_eq!(words("a\x1fb\x1c c").collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(capitalize_words("a\x1fb"), "A B");
        assert_eq!(words(" \x1d ").count(), 0);
    }

    #[test]
    fn test_capitalize_words_collapses_whitespace() {
        assert_eq!(capitalize_words("  hello \t\n world  "), "Hello World");
        assert_eq!(capitalize_words(" \t "), "");
    }
}
