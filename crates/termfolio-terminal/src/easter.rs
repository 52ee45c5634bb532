//! Hidden keyword responses.

/// Keyword and reply, checked in this order.
pub const EGGS: [(&str, &str); 8] = [
    ("matrix", "Wake up"),
    ("coffee", "☕ Coffee, the programmer's fuel!"),
    ("konami", "↑↑↓↓←→←→BA - You've unlocked 30 lives!"),
    ("sudo", "This incident will be reported."),
    ("hack", "ACCESS DENIED: Security protocols activated."),
    ("hello", "Hello, Sir! How predictable."),
    ("42", "Yes, that is the answer to life, the universe, and everything."),
    ("secret", "Shh... there are no secrets here... or are there?"),
];

/// Spelled-out code that also triggers `konami`.
pub const KONAMI_PHRASE: &str = "up up down down left right left right b a";

/// Reply for `normalized` (trimmed, lowercased) input, if any keyword matches
/// one of its whitespace-separated words.
pub fn find(normalized: &str) -> Option<&'static str> {
    let words: Vec<&str> = normalized.split_whitespace().collect();
    if words.is_empty() {
        return None;
    }
    let is_konami_phrase = words.join(" ") == KONAMI_PHRASE;
    EGGS.iter()
        .find(|(keyword, _)| {
            words.contains(keyword) || (*keyword == "konami" && is_konami_phrase)
        })
        .map(|(_, reply)| *reply)
}
