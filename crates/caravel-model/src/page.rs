//! Cursor-driven forward pagination.
//!
//! One reusable primitive shared by every component that walks a paginated
//! remote resource (log streams, hierarchical content), instead of each
//! duplicating its own fetch loop.

use std::future::Future;

use serde::{Deserialize, Serialize};

/// Opaque continuation token returned by a paginated source.
pub type Cursor = String;

/// One page of a finite, non-restartable remote sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Token for the next page, if the source reported one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<Cursor>,
}

impl<T> Page<T> {
    /// A final page with no continuation.
    pub fn end(items: Vec<T>) -> Self {
        Self { items, next: None }
    }

    pub fn more(items: Vec<T>, next: impl Into<Cursor>) -> Self {
        Self {
            items,
            next: Some(next.into()),
        }
    }
}

/// Drains a cursor-driven sequence into a single ordered `Vec`.
///
/// `fetch` is called with `None` first, then with each continuation token.
/// The stream ends when a page carries no items, no token, or repeats the
/// token it was fetched with (no token progress). Errors end the drain and
/// propagate as-is.
pub async fn drain<T, F, Fut, E>(mut fetch: F) -> Result<Vec<T>, E>
where
    F: FnMut(Option<Cursor>) -> Fut,
    Fut: Future<Output = Result<Page<T>, E>>,
{
    let mut items = Vec::new();
    let mut cursor: Option<Cursor> = None;
    loop {
        let page = fetch(cursor.clone()).await?;
        if page.items.is_empty() {
            return Ok(items);
        }
        items.extend(page.items);
        match page.next {
            Some(next) if Some(&next) != cursor.as_ref() => cursor = Some(next),
            _ => return Ok(items),
        }
    }
}
