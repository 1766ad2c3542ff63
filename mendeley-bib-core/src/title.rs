//! Optional title capitalization.
//!
//! Titles are put in title case the way ACS-style bibliographies want them:
//! every word gets a capital first letter, but the rest of the word is left
//! alone so formulae like `MoS2` or `pH` survive. Short articles and
//! prepositions stay lowercase when they sit between two words.
//!
//! Known gap: there is no way to tell the element `As` or `In` apart from
//! the words "as" and "in", and hyphenated verbs are capitalized too.

/// Words kept lowercase when they appear inside a title.
const SMALL_WORDS: &[&str] = &[
    "of", "an", "on", "at", "to", "for", "from", "in", "as", "by", "a", "with", "and", "the",
];

/// Capitalize the first letter of each space- or hyphen-separated word.
///
/// Empty words are dropped, so runs of separators collapse to one.
fn capitalize_words(text: &str) -> String {
    let mut s = text.to_string();
    for sep in [' ', '-'] {
        s = s
            .split(sep)
            .filter(|word| !word.is_empty())
            .map(capitalize_first)
            .collect::<Vec<_>>()
            .join(&sep.to_string());
    }
    s
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert a title to title case.
///
/// ```
/// use mendeley_bib_core::capitalize_title;
///
/// assert_eq!(
///     capitalize_title("growth of MoS2 on gold"),
///     "Growth of MoS2 on Gold",
/// );
/// ```
pub fn capitalize_title(title: &str) -> String {
    let mut title = capitalize_words(title);
    for word in SMALL_WORDS {
        let capital = capitalize_first(word);
        title = title.replace(&format!(" {capital} "), &format!(" {word} "));
        title = title.replace(&format!("-{capital}-"), &format!("-{word}-"));
    }
    title
}
