/// Number of initials taken when the caller doesn't choose.
pub const DEFAULT_INITIALS_LIMIT: usize = 3;

/// Returns the first character of each word in `name`, stopping once `limit`
/// characters have been collected.
///
/// A word is a run of alphanumeric characters; an apostrophe between two
/// letters stays inside the word, so `"O'Brien"` is one word.
pub fn initials(name: &str, limit: usize) -> String {
    words(name)
        .filter_map(|word| word.chars().next())
        .take(limit)
        .collect()
}

fn words(s: &str) -> impl Iterator<Item = &str> {
    s.split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '’'))
        .map(|w| w.trim_matches(|c: char| c == '\'' || c == '’'))
        .filter(|w| !w.is_empty())
}
