//! Integration tests for the string helpers and `TextProcessor`

use textcalc::{capitalize_words, count_vowels, is_palindrome, reverse_string, TextProcessor};

#[test]
fn test_palindromes() {
    let cases = vec![
        ("racecar", true),
        ("A man a plan a canal Panama", true),
        ("hello", false),
        ("", true),
        ("Never odd or even", true),
        ("ab", false),
    ];

    for (input, expected) in cases {
        assert_eq!(is_palindrome(input), expected, "Wrong answer for {:?}", input);
    }
}

#[test]
fn test_count_vowels_cases() {
    let cases = vec![("hello", 2), ("AEIOU", 5), ("xyz", 0), ("Programming", 3), ("", 0)];

    for (input, expected) in cases {
        assert_eq!(count_vowels(input), expected, "Wrong count for {:?}", input);
    }
}

#[test]
fn test_capitalize_words_cases() {
    let cases = vec![
        ("hello world", "Hello World"),
        ("python programming", "Python Programming"),
        ("PYTHON", "Python"),
        ("", ""),
        ("   ", ""),
        ("a\x1fb", "A B"),
        ("tab\tand\u{3000}ideographic", "Tab And Ideographic"),
    ];

    for (input, expected) in cases {
        assert_eq!(capitalize_words(input), expected, "Failed for {:?}", input);
    }
}

#[test]
fn test_reverse_string_cases() {
    assert_eq!(reverse_string("hello"), "olleh");
    assert_eq!(reverse_string(""), "");
}

#[test]
fn test_processor_queries() {
    let processor = TextProcessor::new("Hello World Python");

    assert_eq!(processor.length(), 18);
    assert_eq!(processor.word_count(), 3);
    assert_eq!(processor.to_upper(), "HELLO WORLD PYTHON");
    assert_eq!(processor.to_lower(), "hello world python");

    // repeated queries agree
    assert_eq!(processor.length(), 18);
    assert_eq!(processor.text(), "Hello World Python");
}

#[test]
fn test_processor_length_counts_chars() {
    assert_eq!(TextProcessor::new("Hello World").length(), 11);
    assert_eq!(TextProcessor::new("日本語").length(), 3);
}
