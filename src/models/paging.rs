use std::num::NonZeroUsize;

pub const PAGE_SIZE: usize = 10;

/// A 1-based page number.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PageNumber(NonZeroUsize);

impl PageNumber {
    pub const FIRST: PageNumber = PageNumber(NonZeroUsize::MIN);

    pub fn new(page: usize) -> Option<PageNumber> {
        NonZeroUsize::new(page).map(PageNumber)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }

    fn offset(self) -> usize {
        (self.get() - 1).saturating_mul(PAGE_SIZE)
    }
}

/// The window of `items` shown on `page`, in input order.
/// Pages past the end are empty rather than an error.
pub fn paginate<T>(page: PageNumber, items: &[T]) -> &[T] {
    items
        .get(page.offset()..)
        .map(|rest| &rest[..rest.len().min(PAGE_SIZE)])
        .unwrap_or_default()
}
