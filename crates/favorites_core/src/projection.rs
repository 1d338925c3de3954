//! The displayed list: stored movies filtered by a search term and ordered by
//! the selected sort option.

use std::cmp::Ordering;

use shared::domain::{Movie, SortOption};

/// Filters and sorts `movies` without touching the input. Ties keep the
/// stored (insertion) order.
pub fn project<'a>(movies: &'a [Movie], search: &str, sort: SortOption) -> Vec<&'a Movie> {
    let needle = search.to_lowercase();
    let mut visible: Vec<&Movie> = movies
        .iter()
        .filter(|movie| movie.title.to_lowercase().contains(&needle))
        .collect();

    match sort {
        SortOption::Alphabetical => visible.sort_by(|a, b| collate(&a.title, &b.title)),
        SortOption::Year => visible.sort_by_key(|movie| movie.year),
    }
    visible
}

/// Natural-language ordering for titles.
///
/// Compares base letters first (case and accents ignored), then accents, then
/// case with lowercase first, so "amélie" < "Amélie" < "Zodiac". At the first
/// level punctuation and symbols sort before digits and letters.
pub fn collate(a: &str, b: &str) -> Ordering {
    let primary = |s: &str| {
        s.chars()
            .flat_map(char::to_lowercase)
            .map(|c| (c.is_alphanumeric(), base_letter(c)))
            .collect::<Vec<(bool, char)>>()
    };
    let secondary = |s: &str| s.chars().flat_map(char::to_lowercase).collect::<Vec<char>>();
    let tertiary = |s: &str| s.chars().map(char::is_uppercase).collect::<Vec<bool>>();

    primary(a)
        .cmp(&primary(b))
        .then_with(|| secondary(a).cmp(&secondary(b)))
        .then_with(|| tertiary(a).cmp(&tertiary(b)))
        .then_with(|| a.cmp(b))
}

fn base_letter(c: char) -> char {
    match c {
        'à'..='å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => 'c',
        'ď' | 'đ' => 'd',
        'è'..='ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => 'g',
        'ĥ' | 'ħ' => 'h',
        'ì'..='ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => 'i',
        'ĵ' => 'j',
        'ķ' => 'k',
        'ĺ' | 'ļ' | 'ľ' | 'ŀ' | 'ł' => 'l',
        'ñ' | 'ń' | 'ņ' | 'ň' => 'n',
        'ò'..='ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => 'o',
        'ŕ' | 'ŗ' | 'ř' => 'r',
        'ś' | 'ŝ' | 'ş' | 'š' => 's',
        'ţ' | 'ť' | 'ŧ' => 't',
        'ù'..='ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => 'u',
        'ŵ' => 'w',
        'ý' | 'ÿ' | 'ŷ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        other => other,
    }
}

#[cfg(test)]
#[path = "tests/projection_tests.rs"]
mod tests;
