//! Lazy, paged upstream sequences.
//!
//! Every upstream list RPC is consumed through a [`Cursor`], which yields
//! one record at a time and reports exhaustion with `Ok(None)`.
//! [`drain`] is the only place that turns a cursor into a materialized
//! sequence.

use async_trait::async_trait;
use std::collections::VecDeque;
use waas_proxy_sdk::client::ClientError;

/// A lazy sequence of upstream records.
#[async_trait]
pub trait Cursor: Send {
    type Item: Send;

    /// Fetch the next record, or `Ok(None)` once the sequence is exhausted.
    async fn next(&mut self) -> Result<Option<Self::Item>, ClientError>;
}

pub type BoxCursor<T> = Box<dyn Cursor<Item = T>>;

/// Collect every remaining record of `cursor`, in upstream order.
///
/// The first error aborts the drain; records collected so far are dropped.
/// There is no cap on the number of records.
pub async fn drain<T: Send>(mut cursor: BoxCursor<T>) -> Result<Vec<T>, ClientError> {
    let mut items = Vec::new();
    while let Some(item) = cursor.next().await? {
        items.push(item);
    }
    Ok(items)
}

/// One page of a list RPC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_page_token: Option<String>,
}

/// Something that can fetch a page of a list RPC given a page token.
#[async_trait]
pub trait PageSource: Send + Sync {
    type Item: Send;

    async fn fetch(&self, page_token: Option<String>) -> Result<Page<Self::Item>, ClientError>;
}

/// A [`Cursor`] over a token-paged [`PageSource`].
///
/// Pages are fetched only when the buffered one runs out. A missing or
/// empty `next_page_token` marks the last page. A page that points back at
/// its own token fails with [`ClientError::RepeatedPageToken`].
pub struct PagedCursor<S: PageSource> {
    source: S,
    buffer: VecDeque<S::Item>,
    page_token: Option<String>,
    last_page_fetched: bool,
}

impl<S: PageSource> PagedCursor<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            buffer: VecDeque::new(),
            page_token: None,
            last_page_fetched: false,
        }
    }
}

#[async_trait]
impl<S: PageSource> Cursor for PagedCursor<S> {
    type Item = S::Item;

    async fn next(&mut self) -> Result<Option<S::Item>, ClientError> {
        loop {
            if let Some(item) = self.buffer.pop_front() {
                return Ok(Some(item));
            }
            if self.last_page_fetched {
                return Ok(None);
            }

            let page = self.source.fetch(self.page_token.clone()).await?;
            match page.next_page_token.filter(|token| !token.is_empty()) {
                Some(token) if self.page_token.as_deref() == Some(token.as_str()) => {
                    tracing::error!(page_token = %token, "upstream returned the same page token again");
                    return Err(ClientError::RepeatedPageToken(token));
                }
                next_page_token => {
                    self.last_page_fetched = next_page_token.is_none();
                    self.page_token = next_page_token;
                }
            }
            self.buffer.extend(page.items);
        }
    }
}

/// A [`Cursor`] over records that are already in memory.
pub struct IterCursor<T> {
    items: std::vec::IntoIter<Result<T, ClientError>>,
}

impl<T> IterCursor<T> {
    /// Yield each result in turn; an `Err` is returned as a fetch failure.
    pub fn new(items: impl IntoIterator<Item = Result<T, ClientError>>) -> Self {
        Self {
            items: items.into_iter().collect::<Vec<_>>().into_iter(),
        }
    }
}

#[async_trait]
impl<T: Send> Cursor for IterCursor<T> {
    type Item = T;

    async fn next(&mut self) -> Result<Option<T>, ClientError> {
        self.items.next().transpose()
    }
}
