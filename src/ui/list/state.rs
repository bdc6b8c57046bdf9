//! State for the book list screen.

use crate::model::{Book, BookId};
use crate::ui::mvi::UiState;

/// Rows per page.
pub const PAGE_SIZE: usize = 5;

/// List screen lifecycle.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ListViewState {
    /// Collection fetch in flight.
    #[default]
    Loading,

    /// Collection loaded.
    Ready(ListSnapshot),

    /// Collection fetch failed; retry re-activates the screen.
    Failed { error: String },
}

impl UiState for ListViewState {}

impl ListViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn snapshot(&self) -> Option<&ListSnapshot> {
        match self {
            Self::Ready(snapshot) => Some(snapshot),
            _ => None,
        }
    }
}

/// The fetched collection plus everything derived from it on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ListSnapshot {
    /// Full collection as of the last fetch, minus local deletions.
    pub collection: Vec<Book>,
    pub filter: String,
    /// 1-based page index.
    pub page: usize,
    /// Cursor within the visible page.
    pub selected: usize,
    /// Record awaiting a yes/no answer before deletion.
    pub confirm_delete: Option<BookId>,
    /// Record whose delete request is in flight.
    pub deleting: Option<BookId>,
    /// Blocking notice (e.g., a failed delete).
    pub notice: Option<String>,
}

impl ListSnapshot {
    pub fn new(collection: Vec<Book>) -> Self {
        Self {
            collection,
            filter: String::new(),
            page: 1,
            selected: 0,
            confirm_delete: None,
            deleting: None,
            notice: None,
        }
    }

    pub fn filtered(&self) -> Vec<&Book> {
        filter_books(&self.collection, &self.filter)
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered().len())
    }

    /// Records on the current page.
    pub fn visible(&self) -> Vec<&Book> {
        page_window(&self.filtered(), self.page).to_vec()
    }

    pub fn selected_book(&self) -> Option<&Book> {
        self.visible().get(self.selected).copied()
    }

    /// Book referenced by the pending confirmation prompt.
    pub fn confirm_target(&self) -> Option<&Book> {
        let id = self.confirm_delete.as_ref()?;
        self.collection.iter().find(|book| &book.id == id)
    }

    /// Keep the page within `1..=max(total_pages, 1)` and the cursor on a row.
    pub(crate) fn clamp(mut self) -> Self {
        let last_page = self.total_pages().max(1);
        self.page = self.page.clamp(1, last_page);
        let visible = self.visible().len();
        self.selected = self.selected.min(visible.saturating_sub(1));
        self
    }
}

/// Records whose title contains `filter`, ignoring case, in collection order.
pub fn filter_books<'a>(collection: &'a [Book], filter: &str) -> Vec<&'a Book> {
    let needle = filter.to_lowercase();
    collection
        .iter()
        .filter(|book| book.title.to_lowercase().contains(&needle))
        .collect()
}

/// `ceil(count / PAGE_SIZE)`.
pub fn total_pages(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE)
}

/// Slice `[(page-1)*PAGE_SIZE, page*PAGE_SIZE)` of `items`; empty when out of range.
pub fn page_window<T>(items: &[T], page: usize) -> &[T] {
    if page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(PAGE_SIZE);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(PAGE_SIZE).min(items.len());
    &items[start..end]
}

/// Drop the record with `id`, keeping the order of the rest.
pub fn remove_by_id(collection: &mut Vec<Book>, id: &BookId) -> bool {
    let before = collection.len();
    collection.retain(|book| &book.id != id);
    collection.len() != before
}
