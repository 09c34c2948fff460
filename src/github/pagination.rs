//! Page cursor handling for the GitHub listing endpoints.
//!
//! GitHub advertises further pages through the `Link` response header.
//! The cursor used here is the `page` query parameter of the `rel="next"`
//! link; a response without one is the last page.

use std::future::Future;

use http::Uri;
use octocrab::Page;

use crate::error::MetricsError;

/// Page number of the first request
pub const FIRST_PAGE: u32 = 1;

/// Page size used for every listing call (GitHub's maximum)
pub const PER_PAGE: u8 = 100;

/// One page of results plus the cursor for the next page, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOf<T> {
    pub items: Vec<T>,
    pub next_page: Option<u32>,
}

impl<T> PageOf<T> {
    pub fn new(items: Vec<T>, next_page: Option<u32>) -> Self {
        Self { items, next_page }
    }

    /// Convert an octocrab page, mapping each raw item into `T`
    pub(crate) fn from_octocrab<A: Into<T>>(page: Page<A>) -> Self {
        let next_page = next_page_number(page.next.as_ref());
        Self {
            items: page.items.into_iter().map(Into::into).collect(),
            next_page,
        }
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> PageOf<U> {
        PageOf {
            items: self.items.into_iter().map(f).collect(),
            next_page: self.next_page,
        }
    }
}

/// Extract the `page` query parameter from a `rel="next"` link
pub fn next_page_number(next: Option<&Uri>) -> Option<u32> {
    let query = next?.query()?;
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "page")
        .and_then(|(_, value)| value.parse::<u32>().ok())
        .filter(|page| *page != 0)
}

/// Walk every page, handing each page's items to `visit` before the next
/// request is made. The first error from either side stops the walk.
pub async fn for_each_page<T, F, Fut, V>(mut fetch_page: F, mut visit: V) -> Result<(), MetricsError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<PageOf<T>, MetricsError>>,
    V: FnMut(Vec<T>) -> Result<(), MetricsError>,
{
    let mut page = FIRST_PAGE;
    loop {
        let PageOf { items, next_page } = fetch_page(page).await?;
        visit(items)?;

        match next_page {
            Some(next) => page = next,
            None => return Ok(()),
        }
    }
}

/// Walk every page and return the concatenation of all items in page order
pub async fn collect_pages<T, F, Fut>(fetch_page: F) -> Result<Vec<T>, MetricsError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<PageOf<T>, MetricsError>>,
{
    let mut results = Vec::new();
    for_each_page(fetch_page, |items| {
        results.extend(items);
        Ok(())
    })
    .await?;
    Ok(results)
}
