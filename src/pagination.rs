// src/pagination.rs
//! Offset pagination over in-memory collections.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected pagination parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaginateError {
    #[error("page number must be at least 1")]
    ZeroPageNumber,
    #[error("page size must be greater than zero")]
    ZeroPageSize,
    #[error("collection has more items than pagination supports")]
    CollectionTooLarge,
}

/// One page of items plus the bookkeeping to render a pager.
///
/// `page_number` is 1-based. A page beyond the end of the collection is
/// valid and simply carries no items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_number: u32,
    pub page_size: u32,
    pub total_items: u32,
    pub total_pages: u32,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.page_number < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page_number > 1
    }
}

/// Copies the requested page out of a slice.
pub fn paginate<T: Clone>(
    items: &[T],
    page_number: u32,
    page_size: u32,
) -> Result<Page<T>, PaginateError> {
    let (total_items, total_pages, skip) = page_layout(items.len(), page_number, page_size)?;
    let page_items = items
        .iter()
        .skip(skip)
        .take(page_size as usize)
        .cloned()
        .collect();
    Ok(Page {
        items: page_items,
        page_number,
        page_size,
        total_items,
        total_pages,
    })
}

/// Consumes a collection and keeps only the requested page.
pub fn into_page<T>(
    items: Vec<T>,
    page_number: u32,
    page_size: u32,
) -> Result<Page<T>, PaginateError> {
    let (total_items, total_pages, skip) = page_layout(items.len(), page_number, page_size)?;
    let page_items = items
        .into_iter()
        .skip(skip)
        .take(page_size as usize)
        .collect();
    Ok(Page {
        items: page_items,
        page_number,
        page_size,
        total_items,
        total_pages,
    })
}

fn page_layout(
    len: usize,
    page_number: u32,
    page_size: u32,
) -> Result<(u32, u32, usize), PaginateError> {
    if page_number == 0 {
        return Err(PaginateError::ZeroPageNumber);
    }
    if page_size == 0 {
        return Err(PaginateError::ZeroPageSize);
    }
    let total_items = u32::try_from(len).map_err(|_| PaginateError::CollectionTooLarge)?;
    let total_pages = total_items.div_ceil(page_size);
    let skip = (page_number as usize - 1) * page_size as usize;
    Ok((total_items, total_pages, skip))
}

/// Pagination as a method on slices and vectors.
pub trait Paginate<T> {
    fn paginate(&self, page_number: u32, page_size: u32) -> Result<Page<T>, PaginateError>;
}

impl<T: Clone> Paginate<T> for [T] {
    fn paginate(&self, page_number: u32, page_size: u32) -> Result<Page<T>, PaginateError> {
        paginate(self, page_number, page_size)
    }
}
