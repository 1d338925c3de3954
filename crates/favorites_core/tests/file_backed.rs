use favorites_core::{
    AlwaysConfirm, DeleteOutcome, Favorites, FixedClock, SubmitOutcome, DEFAULT_STORAGE_KEY,
};
use shared::domain::{MovieField, MovieId, SortOption};
use storage::{FileStore, KeyValueStore};

fn add(app: &mut Favorites<FileStore, FixedClock>, title: &str, year: &str, poster: &str) -> MovieId {
    app.form_mut().set(MovieField::Title, title);
    app.form_mut().set(MovieField::Year, year);
    app.form_mut().set(MovieField::Poster, poster);
    match app.submit_form() {
        SubmitOutcome::Added(id) => id,
        other => panic!("expected add, got {other:?}"),
    }
}

#[test]
fn favorites_survive_a_restart() {
    let dir = tempfile::tempdir().expect("tempdir");

    {
        let mut app = Favorites::open(
            FileStore::new(dir.path()),
            DEFAULT_STORAGE_KEY,
            FixedClock(2026),
        );
        add(&mut app, "Zodiac", "2007", "https://x.com/z.jpg");
        let amelie = add(&mut app, "Amélie", "2001", "https://x.com/a.jpg");
        let heat = add(&mut app, "Heat", "1995", "https://x.com/h.jpg");

        app.begin_edit(amelie).expect("amelie");
        app.form_mut().set(MovieField::Year, "2002");
        assert_eq!(app.submit_form(), SubmitOutcome::Updated(amelie));

        assert!(matches!(
            app.delete(heat, &mut AlwaysConfirm),
            DeleteOutcome::Deleted(_)
        ));
    }

    let raw = FileStore::new(dir.path())
        .get(DEFAULT_STORAGE_KEY)
        .expect("read")
        .expect("persisted");
    let json: serde_json::Value = serde_json::from_str(&raw).expect("json");
    assert_eq!(
        json,
        serde_json::json!([
            {"id": 1, "title": "Zodiac", "year": 2007, "poster": "https://x.com/z.jpg"},
            {"id": 2, "title": "Amélie", "year": 2002, "poster": "https://x.com/a.jpg"},
        ])
    );

    let mut reopened = Favorites::open(
        FileStore::new(dir.path()),
        DEFAULT_STORAGE_KEY,
        FixedClock(2026),
    );
    reopened.set_sort(SortOption::Year);
    let titles: Vec<&str> = reopened
        .visible()
        .iter()
        .map(|m| m.title.as_str())
        .collect();
    assert_eq!(titles, ["Amélie", "Zodiac"]);

    let next = add(&mut reopened, "Alien", "1979", "https://x.com/al.jpg");
    assert_eq!(next, MovieId(3));
}

#[test]
fn corrupt_file_is_left_alone_until_the_next_mutation() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut storage = FileStore::new(dir.path());
    storage
        .set(DEFAULT_STORAGE_KEY, "[{\"id\":1,\"title\":")
        .expect("seed corrupt file");

    let mut app = Favorites::open(storage, DEFAULT_STORAGE_KEY, FixedClock(2026));
    assert!(app.movies().is_empty());

    let on_disk = app.store().storage().get(DEFAULT_STORAGE_KEY).expect("read");
    assert_eq!(on_disk.as_deref(), Some("[{\"id\":1,\"title\":"));

    add(&mut app, "Heat", "1995", "https://x.com/h.jpg");
    let on_disk = app
        .store()
        .storage()
        .get(DEFAULT_STORAGE_KEY)
        .expect("read")
        .expect("persisted");
    assert!(on_disk.contains("\"Heat\""));
}
