use catv_core::model::{CardDraft, CardId};
use catv_core::time::fixed_now;
use chrono::Duration;
use storage::repository::{CardRepository, Storage, StorageError};
use storage::sqlite::SqliteRepository;

async fn connect(name: &str) -> SqliteRepository {
    let url = format!("sqlite:file:{name}?mode=memory&cache=shared");
    let repo = SqliteRepository::connect(&url).await.expect("connect");
    repo.migrate().await.expect("migrate");
    repo
}

async fn seed(repo: &SqliteRepository, entries: &[(&str, &str)]) -> Vec<CardId> {
    let mut ids = Vec::new();
    for (file, question) in entries {
        let card = CardDraft::new(*file, *question, "answer").validate().unwrap();
        ids.push(repo.insert_card(&card, fixed_now()).await.unwrap().id());
    }
    ids
}

#[tokio::test]
async fn sqlite_roundtrip_preserves_card_text() {
    let repo = connect("memdb_roundtrip").await;
    let ids = seed(&repo, &[("notes/rust.md", "What is a borrow?")]).await;

    let card = repo.get_card(ids[0], fixed_now()).await.unwrap();
    assert_eq!(card.file(), "notes/rust.md");
    assert_eq!(card.question(), "What is a borrow?");
    assert_eq!(card.answer(), "answer");
    assert_eq!(card.revisit_in(), 0);
    assert!(card.is_due());
}

#[tokio::test]
async fn sqlite_lists_distinct_files_sorted() {
    let repo = connect("memdb_files").await;
    seed(&repo, &[("b.md", "1"), ("a.md", "2"), ("b.md", "3")]).await;

    assert_eq!(repo.unique_files().await.unwrap(), vec!["a.md", "b.md"]);
    assert_eq!(repo.list_cards(fixed_now()).await.unwrap().len(), 3);
}

#[tokio::test]
async fn sqlite_due_cards_follow_interval_and_file_filter() {
    let repo = connect("memdb_due").await;
    let ids = seed(&repo, &[("a.md", "Q1"), ("a.md", "Q2"), ("b.md", "Q3")]).await;
    let now = fixed_now();

    let first = repo.get_card(ids[0], now).await.unwrap();
    repo.update_interval(&first.with_revisit_in(7), now)
        .await
        .unwrap();

    let a_only = vec!["a.md".to_owned()];
    let due = repo.due_cards_for_files(&a_only, now).await.unwrap();
    assert_eq!(
        due.iter().map(|c| c.id()).collect::<Vec<_>>(),
        vec![ids[1]]
    );

    let both = vec!["a.md".to_owned(), "b.md".to_owned()];
    let due = repo.due_cards_for_files(&both, now).await.unwrap();
    assert_eq!(
        due.iter().map(|c| c.id()).collect::<Vec<_>>(),
        vec![ids[1], ids[2]]
    );

    let week_later = now + Duration::days(7);
    let due = repo.due_cards_for_files(&a_only, week_later).await.unwrap();
    assert_eq!(
        due.iter().map(|c| c.id()).collect::<Vec<_>>(),
        vec![ids[0], ids[1]]
    );

    let midweek = repo.get_card(ids[0], now + Duration::days(3)).await.unwrap();
    assert_eq!(midweek.revisit_in(), 4);
}

#[tokio::test]
async fn sqlite_empty_file_set_yields_nothing() {
    let repo = connect("memdb_empty_files").await;
    seed(&repo, &[("a.md", "Q1")]).await;
    assert!(repo.due_cards_for_files(&[], fixed_now()).await.unwrap().is_empty());
}

#[tokio::test]
async fn sqlite_missing_cards_are_not_found() {
    let repo = connect("memdb_missing").await;
    let err = repo.get_card(CardId::new(42), fixed_now()).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound));

    let ghost = CardDraft::new("a.md", "Q", "A")
        .validate()
        .unwrap()
        .assign_id(CardId::new(42));
    let err = repo.update_interval(&ghost, fixed_now()).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound));
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let repo = connect("memdb_migrate_twice").await;
    repo.migrate().await.expect("second migrate");
    seed(&repo, &[("a.md", "Q")]).await;
    assert_eq!(repo.list_cards(fixed_now()).await.unwrap().len(), 1);
}

#[tokio::test]
async fn storage_sqlite_wires_card_repository() {
    let storage = Storage::sqlite("sqlite:file:memdb_storage?mode=memory&cache=shared")
        .await
        .expect("storage");
    let card = CardDraft::new("a.md", "Q", "A").validate().unwrap();
    let stored = storage.cards.insert_card(&card, fixed_now()).await.unwrap();
    assert_eq!(
        storage.cards.get_card(stored.id(), fixed_now()).await.unwrap(),
        stored
    );
}
