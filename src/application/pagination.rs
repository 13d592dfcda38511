use crate::app_error::{AppError, AppResult};

/// Items returned per page by every list endpoint.
pub const PAGE_SIZE: usize = 10;

/// Slice one page out of an already ordered collection.
///
/// Pages start at 1. An empty page (past the end, an empty collection, or a
/// page below 1) is reported as `NotFound` instead of an empty list.
pub fn paginate<T>(page: i64, items: &[T]) -> AppResult<&[T]> {
    if page < 1 {
        return Err(AppError::NotFound);
    }

    let start = usize::try_from(page - 1)
        .ok()
        .and_then(|p| p.checked_mul(PAGE_SIZE))
        .ok_or(AppError::NotFound)?;
    if start >= items.len() {
        return Err(AppError::NotFound);
    }

    let end = (start + PAGE_SIZE).min(items.len());
    Ok(&items[start..end])
}

/// One page of a collection plus the size of the whole collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T: Clone> Page<T> {
    pub fn from_ordered(page: i64, all: &[T]) -> AppResult<Self> {
        let items = paginate(page, all)?.to_vec();
        Ok(Self {
            items,
            total: all.len(),
        })
    }
}

/// Parse the `page` query value, falling back to the first page the way a
/// typed query lookup with a default would.
pub fn page_or_default(raw: Option<&str>) -> i64 {
    raw.and_then(|p| p.trim().parse().ok()).unwrap_or(1)
}
