//! Tab completion against a fixed command vocabulary.
//!
//! Only the last whitespace-delimited token of the buffer is completed, by
//! case-insensitive prefix match. There is no cycling: a single match is
//! applied in place, several matches are handed back for the user to pick.

/// Result of a completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Nothing in the vocabulary matched.
    NoMatch,
    /// Exactly one match; holds the full rewritten buffer.
    Single(String),
    /// Several matches, in vocabulary order.
    Multiple(Vec<String>),
}

/// Complete the last token of `buffer` against `vocabulary`.
///
/// An empty buffer completes an empty token, which every word matches.
pub fn complete<S: AsRef<str>>(buffer: &str, vocabulary: &[S]) -> Completion {
    let mut tokens: Vec<&str> = buffer.split_whitespace().collect();
    let last = tokens.pop().unwrap_or("").to_lowercase();

    let matches: Vec<String> = vocabulary
        .iter()
        .map(|w| w.as_ref())
        .filter(|w| w.to_lowercase().starts_with(&last))
        .map(str::to_string)
        .collect();

    match matches.len() {
        0 => Completion::NoMatch,
        1 => {
            let mut out = tokens.join(" ");
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&matches[0]);
            Completion::Single(out)
        },
        _ => Completion::Multiple(matches),
    }
}
