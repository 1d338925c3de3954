use super::*;
use favorites_core::{FixedClock, DEFAULT_STORAGE_KEY};
use storage::MemoryStore;

fn app() -> Favorites<MemoryStore, FixedClock> {
    Favorites::open(MemoryStore::new(), DEFAULT_STORAGE_KEY, FixedClock(2026))
}

fn script(app: &mut Favorites<MemoryStore, FixedClock>, lines: &str) -> String {
    let mut out = Vec::new();
    run(app, lines.as_bytes(), &mut out).expect("shell run");
    String::from_utf8(out).expect("utf8 output")
}

#[test]
fn adds_movies_through_the_form() {
    let mut app = app();
    let output = script(
        &mut app,
        "set title Amélie\nset year 2001\nset poster https://x.com/a.jpg\nsubmit\n\
         set title Zodiac\nset year 2007\nset poster https://x.com/z.jpg\nsubmit\nlist\nquit\n",
    );

    assert!(output.contains("added id=1"));
    assert!(output.contains("added id=2"));
    let amelie = output.find("Amélie  2001").expect("amelie row");
    let zodiac = output.find("Zodiac  2007").expect("zodiac row");
    assert!(amelie < zodiac);
    assert_eq!(app.movies().len(), 2);
}

#[test]
fn invalid_submit_prints_field_errors() {
    let mut app = app();
    let output = script(&mut app, "set year 99\nset poster nope\nsubmit\n");

    assert!(output.contains("not saved:"));
    assert!(output.contains("title: required"));
    assert!(output.contains("year: must be 4 digits"));
    assert!(output.contains("poster: must be a valid URL"));
    assert!(app.movies().is_empty());
}

#[test]
fn edit_then_submit_updates_in_place() {
    let mut app = app();
    script(
        &mut app,
        "set title Heat\nset year 1995\nset poster https://x.com/h.jpg\nsubmit\n",
    );

    let output = script(&mut app, "edit 1\nset year 1986\nsubmit\n");
    assert!(output.contains("Edit movie 1"));
    assert!(output.contains("\"1995\""));
    assert!(output.contains("updated id=1"));
    assert_eq!(app.movies()[0].year, 1986);
    assert!(app.session().is_idle());
}

#[test]
fn cancel_leaves_the_movie_untouched() {
    let mut app = app();
    script(
        &mut app,
        "set title Heat\nset year 1995\nset poster https://x.com/h.jpg\nsubmit\n",
    );
    let output = script(&mut app, "edit 1\nset title Nope\ncancel\nform\n");
    assert!(output.contains("edit cancelled"));
    assert!(output.contains("Add movie"));
    assert_eq!(app.movies()[0].title, "Heat");
}

#[test]
fn delete_asks_for_confirmation() {
    let mut app = app();
    script(
        &mut app,
        "set title Heat\nset year 1995\nset poster https://x.com/h.jpg\nsubmit\n",
    );

    let output = script(&mut app, "delete 1\nn\n");
    assert!(output.contains("Delete \"Heat\"? [y/N]"));
    assert!(output.contains("kept"));
    assert_eq!(app.movies().len(), 1);

    let output = script(&mut app, "edit 1\ndelete 1\nyes\nform\n");
    assert!(output.contains("deleted id=1 (Heat)"));
    assert!(output.contains("Add movie"));
    assert!(app.movies().is_empty());
    assert!(app.session().is_idle());
}

#[test]
fn search_and_sort_change_the_listing() {
    let mut app = app();
    script(
        &mut app,
        "set title Zodiac\nset year 2007\nset poster https://x.com/z.jpg\nsubmit\n\
         set title Heat\nset year 1995\nset poster https://x.com/h.jpg\nsubmit\n",
    );

    let output = script(&mut app, "sort year\n");
    assert!(output.find("Heat").expect("heat") < output.find("Zodiac").expect("zodiac"));

    let output = script(&mut app, "search zzz\n");
    assert!(output.contains(render::EMPTY_LIST));

    let output = script(&mut app, "sort rating\n");
    assert!(output.contains("unknown sort option 'rating'"));
    assert_eq!(app.sort(), SortOption::Year);
}

#[test]
fn unknown_input_is_reported_and_eof_exits() {
    let mut app = app();
    let output = script(&mut app, "dance\nedit x\nset colour red\n");
    assert!(output.contains("unknown command 'dance'"));
    assert!(output.contains("usage: edit ID"));
    assert!(output.contains("unknown field 'colour'"));
}

#[test]
fn only_y_or_yes_confirm() {
    assert!(is_yes("y\n"));
    assert!(is_yes(" YES "));
    assert!(!is_yes(""));
    assert!(!is_yes("no"));
    assert!(!is_yes("yep"));
}
