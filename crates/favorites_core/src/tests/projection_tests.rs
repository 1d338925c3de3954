use super::*;
use shared::domain::MovieId;

fn movie(id: i64, title: &str, year: i32) -> Movie {
    Movie {
        id: MovieId(id),
        title: title.into(),
        year,
        poster: format!("https://x.com/{id}.jpg"),
    }
}

fn titles(movies: &[&Movie]) -> Vec<String> {
    movies.iter().map(|movie| movie.title.clone()).collect()
}

#[test]
fn amelie_and_zodiac_scenario() {
    let stored = vec![movie(1, "Amélie", 2001), movie(2, "Zodiac", 2007)];

    let alphabetical = project(&stored, "", SortOption::Alphabetical);
    assert_eq!(titles(&alphabetical), ["Amélie", "Zodiac"]);

    let by_year = project(&stored, "", SortOption::Year);
    assert_eq!(titles(&by_year), ["Amélie", "Zodiac"]);
    assert_eq!(by_year[0].year, 2001);
    assert_eq!(by_year[1].year, 2007);
}

#[test]
fn accented_titles_sort_with_their_base_letter() {
    let stored = vec![
        movie(1, "Zodiac", 2007),
        movie(2, "Élite", 2018),
        movie(3, "Alien", 1979),
        movie(4, "eraserhead", 1977),
    ];
    let sorted = project(&stored, "", SortOption::Alphabetical);
    assert_eq!(titles(&sorted), ["Alien", "Élite", "eraserhead", "Zodiac"]);
}

#[test]
fn lowercase_sorts_before_uppercase_when_otherwise_equal() {
    assert_eq!(collate("up", "Up"), Ordering::Less);
    assert_eq!(collate("Up", "up"), Ordering::Greater);
    assert_eq!(collate("Up", "Up"), Ordering::Equal);
    assert_eq!(collate("cote", "côte"), Ordering::Less);
}

#[test]
fn search_is_case_insensitive_substring() {
    let stored = vec![
        movie(1, "The Godfather", 1972),
        movie(2, "Godzilla", 1954),
        movie(3, "Heat", 1995),
    ];
    let found = project(&stored, "GOD", SortOption::Alphabetical);
    assert_eq!(titles(&found), ["Godzilla", "The Godfather"]);

    let accented = vec![movie(4, "Amélie", 2001)];
    assert_eq!(project(&accented, "AMÉ", SortOption::Year).len(), 1);
}

#[test]
fn empty_search_returns_everything_and_unmatched_returns_nothing() {
    let stored = vec![movie(1, "Heat", 1995), movie(2, "Alien", 1979)];
    assert_eq!(project(&stored, "", SortOption::Year).len(), 2);
    assert!(project(&stored, "no such title", SortOption::Year).is_empty());
}

#[test]
fn ties_keep_insertion_order() {
    let stored = vec![
        movie(1, "Heat", 1995),
        movie(2, "Casino", 1995),
        movie(3, "Alien", 1979),
        movie(4, "Se7en", 1995),
    ];
    let by_year = project(&stored, "", SortOption::Year);
    let ids: Vec<i64> = by_year.iter().map(|movie| movie.id.0).collect();
    assert_eq!(ids, [3, 1, 2, 4]);

    let dupes = vec![movie(5, "Heat", 1995), movie(6, "Heat", 1986)];
    let alphabetical = project(&dupes, "", SortOption::Alphabetical);
    assert_eq!(alphabetical[0].id, MovieId(5));
    assert_eq!(alphabetical[1].id, MovieId(6));
}

#[test]
fn projection_is_pure_and_repeatable() {
    let stored = vec![
        movie(1, "Zodiac", 2007),
        movie(2, "Amélie", 2001),
        movie(3, "Heat", 1995),
    ];
    let before = stored.clone();

    let first: Vec<Movie> = project(&stored, "e", SortOption::Alphabetical)
        .into_iter()
        .cloned()
        .collect();
    let second: Vec<Movie> = project(&stored, "e", SortOption::Alphabetical)
        .into_iter()
        .cloned()
        .collect();

    assert_eq!(first, second);
    assert_eq!(stored, before);
}

#[test]
fn punctuation_sorts_before_letters_and_digits() {
    assert_eq!(collate("~Heat", "Alien"), Ordering::Less);
    assert_eq!(collate("{Zodiac}", "9 Songs"), Ordering::Less);
    assert_eq!(collate("9 Songs", "Alien"), Ordering::Less);

    let movies = vec![
        movie(1, "Alien", 1979),
        movie(2, "|Brazil|", 1985),
        movie(3, "~Heat", 1995),
    ];
    let visible = project(&movies, "", SortOption::Alphabetical);
    assert_eq!(titles(&visible), ["|Brazil|", "~Heat", "Alien"]);
}
