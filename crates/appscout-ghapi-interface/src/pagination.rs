//! Page-number pagination.

use std::future::Future;

use crate::Result;

/// Page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GhPage {
    /// Page number, starting at 1.
    pub page: u32,
    /// Items per page.
    pub per_page: u32,
}

impl GhPage {
    /// First page.
    pub fn first(per_page: u32) -> Self {
        Self {
            page: 1,
            per_page: per_page.max(1),
        }
    }

    /// Following page.
    pub fn next(self) -> Self {
        Self {
            page: self.page + 1,
            ..self
        }
    }

    /// Is `count` items a short page for this request?
    pub fn is_last(&self, count: usize) -> bool {
        count < self.per_page as usize
    }
}

/// Fetch pages until a short page comes back, and concatenate them.
pub async fn collect_pages<T, F, Fut>(per_page: u32, mut fetch: F) -> Result<Vec<T>>
where
    F: FnMut(GhPage) -> Fut,
    Fut: Future<Output = Result<Vec<T>>>,
{
    let mut items = Vec::new();
    let mut page = GhPage::first(per_page);

    loop {
        let batch = fetch(page).await?;
        let count = batch.len();
        items.extend(batch);

        if page.is_last(count) {
            break;
        }

        page = page.next();
    }

    Ok(items)
}
