//! Case conversion and pluralization helpers
//!
//! Addon identities are built from directory names and provider names, so the
//! conversions here must be stable: the same input always yields the same
//! namespace segment or folder name.

use unicode_segmentation::UnicodeSegmentation;

/// Characters treated as word separators by the case converters
const WORD_SEPARATORS: [char; 3] = ['-', '_', ' '];

/// Convert to StudlyCase: `field_type` and `field-type` both become `FieldType`.
///
/// Only the first grapheme of each word is uppercased; the remainder is kept
/// as written, so `myHTML-thing` becomes `MyHTMLThing`.
pub fn studly_case(s: &str) -> String {
    s.split(|c| WORD_SEPARATORS.contains(&c))
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut g = w.graphemes(true);
            match g.next() {
                Some(first) => format!("{}{}", first.to_uppercase(), g.as_str()),
                None => String::new(),
            }
        })
        .collect()
}

/// Convert to lowercase words joined by `-`
pub fn kebab_case(s: &str) -> String {
    delimit_words(s, '-')
}

/// Split on existing separators and on case boundaries, then join lowercase
/// words with `delimiter`.
///
/// A run of capitals is kept together as one word (`HTMLBlock` -> `html`,
/// `block`).
fn delimit_words(s: &str, delimiter: char) -> String {
    let mut words: Vec<String> = Vec::new();

    for part in s.split(|c| WORD_SEPARATORS.contains(&c)) {
        let chars: Vec<char> = part.chars().collect();
        let mut current = String::new();

        for (i, &c) in chars.iter().enumerate() {
            if c.is_uppercase() && !current.is_empty() {
                let prev = chars[i - 1];
                let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
                if prev.is_lowercase() || prev.is_numeric() || (prev.is_uppercase() && next_is_lower)
                {
                    words.push(std::mem::take(&mut current));
                }
            }
            current.extend(c.to_lowercase());
        }

        if !current.is_empty() {
            words.push(current);
        }
    }

    words.join(&delimiter.to_string())
}

/// Pluralize the final word of a delimited identifier.
///
/// `field-type` -> `field-types`, `field_type` -> `field_types`,
/// `category` -> `categories`, `box` -> `boxes`.
pub fn pluralize(s: &str) -> String {
    let split_at = s
        .rfind(|c| WORD_SEPARATORS.contains(&c))
        .map(|i| i + 1)
        .unwrap_or(0);
    let (head, last) = s.split_at(split_at);

    if last.is_empty() {
        return s.to_string();
    }

    let lower = last.to_lowercase();
    let plural = if ["s", "x", "z", "ch", "sh"]
        .iter()
        .any(|suffix| lower.ends_with(suffix))
    {
        format!("{last}es")
    } else if lower.ends_with('y') && !ends_with_vowel_before_y(&lower) {
        format!("{}ies", &last[..last.len() - 1])
    } else {
        format!("{last}s")
    };

    format!("{head}{plural}")
}

fn ends_with_vowel_before_y(word: &str) -> bool {
    let mut rev = word.chars().rev();
    rev.next();
    matches!(rev.next(), Some('a' | 'e' | 'i' | 'o' | 'u'))
}
