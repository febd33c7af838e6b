use rusqlite::Connection;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::Error;
use crate::models::{Flashcard, Source};

/// Starter cards inserted for a fresh collection, mirroring the set a
/// new account begins with.
const DEFAULT_CARDS: [(&str, &str); 25] = [
    ("Sophisticated", "Wyrafinowany, skomplikowany"),
    ("Prevalent", "Powszechny, rozpowszechniony"),
    ("Comprehensive", "Kompleksowy, wyczerpujący"),
    ("Substantial", "Znaczny, istotny"),
    ("Elaborate", "Rozbudowany, szczegółowy"),
    ("Inevitable", "Nieunikniony, nieuchronny"),
    ("Profound", "Głęboki, dogłębny"),
    ("Resilient", "Odporny, elastyczny"),
    ("Compelling", "Przekonujący, porywający"),
    ("Versatile", "Wszechstronny, uniwersalny"),
    ("Feasible", "Wykonalny, możliwy do zrealizowania"),
    ("Coherent", "Spójny, logiczny"),
    ("Pragmatic", "Pragmatyczny, praktyczny"),
    ("Ambiguous", "Niejednoznaczny, dwuznaczny"),
    ("Innovative", "Innowacyjny, nowatorski"),
    ("Discrepancy", "Rozbieżność, niezgodność"),
    ("Hierarchy", "Hierarchia, porządek"),
    ("Paradigm", "Paradygmat, wzorzec"),
    ("Nevertheless", "Niemniej jednak, mimo to"),
    ("Furthermore", "Ponadto, co więcej"),
    ("Subsequently", "Następnie, w dalszej kolejności"),
    ("Consequently", "W konsekwencji, w rezultacie"),
    ("Presumably", "Prawdopodobnie, przypuszczalnie"),
    ("Predominantly", "Przeważnie, głównie"),
    ("Approximately", "Około, w przybliżeniu"),
];

fn now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs()
}

/// Non-blank front/back is enforced here, at the store boundary; the
/// quiz generator assumes it and never re-checks.
fn validate(front: &str, back: &str) -> Result<(String, String), Error> {
    let front = front.trim();
    let back = back.trim();
    if front.is_empty() {
        return Err(Error::BlankField("front"));
    }
    if back.is_empty() {
        return Err(Error::BlankField("back"));
    }
    Ok((front.to_string(), back.to_string()))
}

pub fn insert_card(
    conn: &Connection,
    front: &str,
    back: &str,
    source: Source,
) -> Result<u64, Error> {
    let (front, back) = validate(front, back)?;
    let created_at = now();

    conn.execute(
        "INSERT INTO flashcards (front, back, source, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?)",
        rusqlite::params![front, back, source.as_str(), created_at, created_at],
    )?;

    Ok(conn.last_insert_rowid() as u64)
}

pub fn list_cards(conn: &Connection) -> Result<Vec<Flashcard>, Error> {
    let mut stmt = conn.prepare(
        "SELECT id, front, back, source, created_at, updated_at
         FROM flashcards ORDER BY id",
    )?;

    let cards = stmt
        .query_map([], |row| {
            let source: String = row.get(3)?;
            let source = Source::parse(&source)
                .ok_or_else(|| rusqlite::Error::InvalidParameterName(source.clone()))?;

            Ok(Flashcard {
                id: row.get(0)?,
                front: row.get(1)?,
                back: row.get(2)?,
                source,
                created_at: row.get(4)?,
                updated_at: row.get(5)?,
            })
        })?
        .filter_map(|r| r.ok())
        .collect();

    Ok(cards)
}

pub fn update_card(conn: &Connection, id: u64, front: &str, back: &str) -> Result<(), Error> {
    let (front, back) = validate(front, back)?;
    let updated_at = now();

    conn.execute(
        "UPDATE flashcards SET front = ?, back = ?, updated_at = ? WHERE id = ?",
        rusqlite::params![front, back, updated_at, id],
    )?;

    Ok(())
}

pub fn delete_card(conn: &Connection, id: u64) -> Result<(), Error> {
    conn.execute("DELETE FROM flashcards WHERE id = ?", [id])?;
    Ok(())
}

pub fn count_cards(conn: &Connection) -> Result<usize, Error> {
    let count: usize = conn.query_row("SELECT COUNT(*) FROM flashcards", [], |row| row.get(0))?;
    Ok(count)
}

/// Seed the starter set into an empty collection. Does nothing when any
/// card already exists, so repeated calls stay harmless.
pub fn seed_default_cards(conn: &Connection) -> Result<usize, Error> {
    if count_cards(conn)? > 0 {
        return Ok(0);
    }

    for (front, back) in DEFAULT_CARDS {
        insert_card(conn, front, back, Source::Default)?;
    }

    Ok(DEFAULT_CARDS.len())
}
