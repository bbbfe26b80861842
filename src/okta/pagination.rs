//! Cursor-based pagination over list endpoints
//!
//! The API returns a `Link` header with `rel="next"` while more results
//! exist. The `after` query parameter of that link is the cursor for the
//! following page. [`PaginatedCollection`] holds the current page and the
//! cursor, and re-issues the original query with `after=<cursor>`.

use futures::stream::{self, Stream, StreamExt, TryStreamExt};
use log::debug;
use serde::de::DeserializeOwned;

use crate::error::{OktaError, Result};
use crate::okta::OktaClient;

/// One page of results
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// `None` when there are no further pages
    pub cursor: Option<String>,
}

/// Forward-only, non-restartable walk over a list endpoint
pub struct PaginatedCollection<'c, T> {
    client: &'c OktaClient,
    path: String,
    context: String,
    items: Vec<T>,
    cursor: Option<String>,
}

impl<'c, T> PaginatedCollection<'c, T>
where
    T: DeserializeOwned,
{
    pub(crate) fn new(client: &'c OktaClient, path: &str, context: &str, first: Page<T>) -> Self {
        Self {
            client,
            path: path.to_string(),
            context: context.to_string(),
            items: first.items,
            cursor: first.cursor,
        }
    }

    /// Items of the first page (empty once taken)
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Move the first page's items out
    pub fn take_items(&mut self) -> Vec<T> {
        std::mem::take(&mut self.items)
    }

    pub fn has_next(&self) -> bool {
        self.cursor.is_some()
    }

    /// Fetch the next page and return its items
    pub async fn next(&mut self) -> Result<Vec<T>> {
        let cursor = self.cursor.take().ok_or(OktaError::NoMorePages)?;
        match self
            .client
            .fetch_page(&self.path, Some(&cursor), &self.context)
            .await
        {
            Ok(page) => {
                self.cursor = page.cursor;
                Ok(page.items)
            }
            Err(e) => {
                // Keep the cursor so the caller may retry this page.
                self.cursor = Some(cursor);
                Err(e)
            }
        }
    }

    /// Lazy sequence of every remaining item, first page included
    pub fn into_stream(mut self) -> impl Stream<Item = Result<T>> + 'c
    where
        T: 'c,
    {
        let first = self.take_items();
        let rest = stream::try_unfold(self, |mut collection| async move {
            if !collection.has_next() {
                return Ok::<_, OktaError>(None);
            }
            let items = collection.next().await?;
            Ok(Some((items, collection)))
        });

        stream::once(async move { Ok::<_, OktaError>(first) })
            .chain(rest)
            .map_ok(|items| stream::iter(items.into_iter().map(Ok::<T, OktaError>)))
            .try_flatten()
    }

    /// Walk every page and collect all items
    pub async fn collect_all(self) -> Result<Vec<T>>
    where
        T: 'c,
    {
        let context = self.context.clone();
        let items: Vec<T> = self.into_stream().try_collect().await?;
        debug!("Fetched {} total items for {}", items.len(), context);
        Ok(items)
    }
}

/// Extract the `after` cursor from `Link` header values
pub(crate) fn next_cursor_from_links<'a, I>(values: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    values
        .into_iter()
        .flat_map(|value| value.split(','))
        .find_map(|link| {
            let link = link.trim();
            let (target, params) = link.split_once(';')?;
            let is_next = params
                .split(';')
                .any(|p| p.trim().replace(' ', "") == "rel=\"next\"");
            if !is_next {
                return None;
            }
            let target = target.trim().trim_start_matches('<').trim_end_matches('>');
            let url = reqwest::Url::parse(target).ok()?;
            url.query_pairs()
                .find(|(key, _)| key == "after")
                .map(|(_, value)| value.into_owned())
        })
}
