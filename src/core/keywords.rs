use std::collections::HashSet;

const MIN_KEYWORD_CHARS: usize = 4;

/// Suggestion keywords from a contract's title and description.
///
/// Words are lower-cased, split on single spaces, de-duplicated keeping the
/// first occurrence, and words shorter than four characters are dropped.
pub fn contract_keywords(title: &str, description: &str) -> Vec<String> {
    let title = title.to_lowercase();
    let description = description.to_lowercase();

    let mut seen = HashSet::new();
    title
        .split(' ')
        .chain(description.split(' '))
        .filter(|word| seen.insert(*word))
        .filter(|word| word.chars().count() >= MIN_KEYWORD_CHARS)
        .map(str::to_string)
        .collect()
}
