//! String helpers

/// Reverse a string, respecting `char` boundaries.
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// Case-insensitive palindrome check against the full reversal.
///
/// Whitespace and punctuation count, matching a plain reversed-equality
/// comparison rather than an alphanumeric-only one.
pub fn is_palindrome(s: &str) -> bool {
    let forward: Vec<char> = s.chars().flat_map(char::to_lowercase).collect();
    let backward: Vec<char> = forward.iter().rev().copied().collect();
    forward == backward
}

/// Capitalize the first letter of each whitespace-separated word and
/// lowercase the rest, rejoining with single spaces.
pub fn title_case(sentence: &str) -> String {
    sentence
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
