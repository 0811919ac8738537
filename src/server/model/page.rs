//! Page requests and paged results.
//!
//! The HTTP surface counts pages from 1 while storage offsets count from 0. The
//! conversion happens exactly twice: `PageRequest::build` subtracts one on the way in and
//! `Page::into_dto` adds it back on the way out.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::student::StudentPageDto,
    server::{
        error::{validation::FieldError, AppError},
        model::student::Student,
    },
};

/// Largest page size a client may request.
pub const MAX_PAGE_SIZE: i64 = 1000;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 20;
pub const DEFAULT_SORT_FIELD: &str = "lastName";
pub const DEFAULT_SORT_DIRECTION: &str = "asc";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Only `asc` (any case) sorts ascending; every other value sorts descending.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("asc") {
            Self::Asc
        } else {
            Self::Desc
        }
    }
}

/// Raw paging parameters as they arrive on the query string.
///
/// `sort` is optional so each listing can supply its own default field.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// One-based page number.
    #[serde(default = "default_page")]
    #[param(default = 1, minimum = 1)]
    pub page: i64,
    /// Number of students per page.
    #[serde(default = "default_page_size")]
    #[param(default = 20, minimum = 1, maximum = 1000)]
    pub size: i64,
    /// Field to sort by, e.g. `lastName`, `dob` or `enrollmentDate`.
    pub sort: Option<String>,
    /// `asc` for ascending, anything else for descending.
    #[serde(default = "default_direction")]
    #[param(default = "asc")]
    pub dir: String,
}

fn default_page() -> i64 {
    DEFAULT_PAGE
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

fn default_direction() -> String {
    DEFAULT_SORT_DIRECTION.to_string()
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
            sort: None,
            dir: default_direction(),
        }
    }
}

impl PageParams {
    /// Validates the parameters, falling back to `default_sort` when no sort field was sent.
    pub fn into_request(self, default_sort: &str) -> Result<PageRequest, AppError> {
        let sort_field = self.sort.unwrap_or_else(|| default_sort.to_string());
        PageRequest::build(self.page, self.size, sort_field, &self.dir)
    }
}

/// Validated, zero-based page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page_index: u64,
    pub size: u64,
    pub sort_field: String,
    pub direction: SortDirection,
}

impl PageRequest {
    /// Builds a page request from a one-based page number.
    ///
    /// # Returns
    /// - `Ok(PageRequest)` - Request with `page_index = page - 1`
    /// - `Err(AppError::Validation)` - `page < 1`, `size < 1`, `size > MAX_PAGE_SIZE`, or a
    ///   page whose row offset does not fit in an `i64`
    pub fn build(
        page: i64,
        size: i64,
        sort_field: impl Into<String>,
        sort_dir: &str,
    ) -> Result<Self, AppError> {
        let mut errors = Vec::new();

        let size_valid = (1..=MAX_PAGE_SIZE).contains(&size);

        if page < 1 {
            errors.push(FieldError::new("page", "Page number must be at least 1"));
        } else if size_valid && (page - 1).checked_mul(size).is_none() {
            // The row offset must fit the store's signed 64-bit OFFSET.
            errors.push(FieldError::new("page", "Page number is too large"));
        }
        if size < 1 {
            errors.push(FieldError::new("size", "Page size must be at least 1"));
        } else if size > MAX_PAGE_SIZE {
            errors.push(FieldError::new(
                "size",
                format!("Page size cannot exceed {}", MAX_PAGE_SIZE),
            ));
        }

        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        Ok(Self {
            page_index: (page - 1) as u64,
            size: size as u64,
            sort_field: sort_field.into(),
            direction: SortDirection::parse(sort_dir),
        })
    }
}

/// One page of results plus the totals needed to derive navigation flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page_index: u64,
    pub page_size: u64,
    pub total_elements: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            page_index: request.page_index,
            page_size: request.size,
            total_elements,
        }
    }

    pub fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total_elements.div_ceil(self.page_size)
    }

    pub fn is_first(&self) -> bool {
        self.page_index == 0
    }

    pub fn has_next(&self) -> bool {
        self.page_index + 1 < self.total_pages()
    }

    pub fn is_last(&self) -> bool {
        !self.has_next()
    }

    pub fn has_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page_index: self.page_index,
            page_size: self.page_size,
            total_elements: self.total_elements,
        }
    }
}

impl Page<Student> {
    /// Converts to the wire envelope; `pageNumber` is reported one-based.
    pub fn into_dto(self) -> StudentPageDto {
        let total_pages = self.total_pages();
        let first = self.is_first();
        let has_next = self.has_next();
        let has_previous = self.has_previous();

        StudentPageDto {
            page_number: self.page_index + 1,
            page_size: self.page_size,
            total_elements: self.total_elements,
            total_pages,
            first,
            last: !has_next,
            has_next,
            has_previous,
            content: self.content.into_iter().map(Student::into_dto).collect(),
        }
    }
}
