//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_store;

use bookshelf::model::{Book, BookId};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use serde_json::{json, Value};
use std::path::PathBuf;
use tempfile::TempDir;

/// Wire form of a valid record.
pub fn book_json(id: u64, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "author": "Test Author",
        "email": "author@example.com",
        "age": 40
    })
}

pub fn book(id: u64, title: &str) -> Book {
    serde_json::from_value(book_json(id, title)).expect("valid book")
}

/// `count` records titled `Book 1`, `Book 2`, ... with ids from 1.
pub fn numbered_books(count: u64) -> Vec<Book> {
    (1..=count).map(|id| book(id, &format!("Book {}", id))).collect()
}

pub fn ids(books: &[&Book]) -> Vec<BookId> {
    books.iter().map(|book| book.id.clone()).collect()
}

/// Write `contents` to a fresh `config.toml`.
pub fn temp_config(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, contents).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

pub fn ctrl_key(ch: char) -> KeyEvent {
    KeyEvent {
        modifiers: KeyModifiers::CONTROL,
        ..press_key(KeyCode::Char(ch))
    }
}

pub fn type_text(app: &mut bookshelf::ui::app::App, text: &str) {
    for ch in text.chars() {
        bookshelf::ui::input::handle_key(app, press_key(KeyCode::Char(ch)));
    }
}
