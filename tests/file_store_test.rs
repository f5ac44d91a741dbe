use abook::book::AddressBook;
use abook::fields::Field;
use abook::model::Record;
use abook::store::fs::FileStore;
use abook::store::DataStore;
use std::fs;
use std::num::NonZeroUsize;
use tempfile::TempDir;

fn setup() -> (TempDir, FileStore) {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("address_book.csv"));
    (dir, store)
}

fn demo_book() -> AddressBook {
    let mut book = AddressBook::new();

    let mut john = Record::new("John").unwrap();
    john.add_phone("1234567890").unwrap();
    john.add_phone("5555555555").unwrap();
    book.add_record(john);

    let mut jane = Record::new("Jane").unwrap();
    jane.add_phone("9876543210").unwrap();
    book.add_record(jane);

    let mut vicky = Record::with_birthday("Vicky", "23.03.1996").unwrap();
    vicky.add_phone("7777777777").unwrap();
    book.add_record(vicky);

    book
}

#[test]
fn test_save_load_cycle_keeps_everything() {
    let (_dir, mut store) = setup();
    let book = demo_book();

    store.save(&book).unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded, book);
    let names: Vec<_> = loaded.names().collect();
    assert_eq!(names, ["John", "Jane", "Vicky"]);
}

#[test]
fn test_mutations_survive_reload() {
    let (_dir, mut store) = setup();
    store.save(&demo_book()).unwrap();

    let mut book = store.load().unwrap();
    book.find_mut("John")
        .unwrap()
        .edit_phone("1234567890", "1112223333")
        .unwrap();
    book.delete("Jane");
    store.save(&book).unwrap();

    let reloaded = store.load().unwrap();
    let john = reloaded.find("John").unwrap();
    assert!(john.find_phone("1112223333").is_some());
    assert!(john.find_phone("1234567890").is_none());
    assert!(reloaded.find("Jane").is_none());
}

#[test]
fn test_file_is_readable_as_plain_rows() {
    let (dir, mut store) = setup();
    store.save(&demo_book()).unwrap();

    let path = dir.path().join("address_book.csv");
    let rows = AddressBook::read_contacts_from_file(path).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].phones, "1234567890; 5555555555");
    assert_eq!(rows[1].birthday, "");
    assert_eq!(rows[2].birthday, "23.03.1996");
}

#[test]
fn test_hand_written_file_loads() {
    let (dir, store) = setup();
    fs::write(
        dir.path().join("address_book.csv"),
        "Contact_name,phones,birthday\n\"Doe, Jane\",9876543210;1112223333,01.01.1990\nMark,,\n",
    )
    .unwrap();

    let book = store.load().unwrap();
    let jane = book.find("Doe, Jane").unwrap();
    assert_eq!(jane.phones().len(), 2);
    assert_eq!(jane.birthday().unwrap().value(), "01.01.1990");
    assert!(book.find("Mark").unwrap().phones().is_empty());
}

#[test]
fn test_batches_over_loaded_book() {
    let (_dir, mut store) = setup();
    store.save(&demo_book()).unwrap();
    let book = store.load().unwrap();

    let batches: Vec<Vec<&str>> = book
        .iterator(NonZeroUsize::new(2).unwrap())
        .map(|batch| batch.iter().map(|r| r.name().value()).collect())
        .collect();
    assert_eq!(batches, vec![vec!["John", "Jane"], vec!["Vicky"]]);
}
