use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use rusqlite::Connection;

use crate::db::card::insert_card;
use crate::error::Error;
use crate::models::{Flashcard, Source};

/// Write the collection to a JSON file, pretty-printed so the backup
/// stays hand-editable.
pub fn export_cards(path: &Path, cards: &[Flashcard]) -> Result<(), Error> {
    let json = serde_json::to_string_pretty(cards)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Read a collection back from a JSON file.
pub fn import_cards(path: &Path) -> Result<Vec<Flashcard>, Error> {
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let cards: Vec<Flashcard> = serde_json::from_str(&contents)?;
    Ok(cards)
}

/// Import a JSON backup into the store as manually-entered cards.
///
/// Rows go through the validated insert path, so ids and timestamps are
/// assigned fresh and blank fields are rejected. Returns the number of
/// cards inserted.
pub fn import_into_store(conn: &Connection, path: &Path) -> Result<usize, Error> {
    let cards = import_cards(path)?;

    for card in &cards {
        insert_card(conn, &card.front, &card.back, Source::Manual)?;
    }

    Ok(cards.len())
}
