// src/pagination.rs
//
// Optional page-based pagination over the already-materialized result
// set, with jsonapi-style first/last/prev/next links
// (http://jsonapi.org/format/#fetching-pagination).

use crate::domain::filter::{get_nonempty, parse_int};
use crate::errors::ServerError;
use serde_json::{json, Value};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub per_page_max: i64,
}

impl PageRequest {
    /// Pagination is requested iff `page` or `per_page_max` shows up
    /// (non-empty) in the query string. Defaults: page 1, 100 per page.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Option<Self>, ServerError> {
        let page = get_nonempty(params, "page");
        let per_page_max = get_nonempty(params, "per_page_max");

        if page.is_none() && per_page_max.is_none() {
            return Ok(None);
        }

        let page = page.map(|v| parse_int("page", v)).transpose()?.unwrap_or(1);
        let per_page_max = per_page_max
            .map(|v| parse_int("per_page_max", v))
            .transpose()?
            .unwrap_or(100);

        if per_page_max < 1 {
            return Err(ServerError::BadRequest(format!(
                "per_page_max must be at least 1, got {per_page_max}"
            )));
        }

        Ok(Some(Self { page, per_page_max }))
    }

    /// Half-open slice [(page-1)*m, page*m), clamped to the data.
    /// An out-of-range page is an empty (or short) page, not an error.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let len = items.len() as i64;
        let start = self
            .page
            .saturating_sub(1)
            .saturating_mul(self.per_page_max)
            .clamp(0, len);
        let end = self.page.saturating_mul(self.per_page_max).clamp(start, len);
        &items[start as usize..end as usize]
    }

    /// Build the `{"page": n, "links": {...}}` object merged into the
    /// feature collection.
    ///
    /// `count` is the total matched rows before slicing. Links are made
    /// by literally substituting the `page=<n>` substring in the request
    /// URL; `&page=<n>` is appended first if the substring is missing.
    /// This is textual, not structural, so a query value that happens to
    /// contain `page=<n>` gets rewritten too.
    pub fn links(&self, count: usize, request_url: &str) -> Value {
        let page = self.page;
        let needle = format!("page={page}");

        let url = if request_url.contains(&needle) {
            request_url.to_string()
        } else {
            format!("{request_url}&{needle}")
        };

        // Integer ceiling; zero matches means zero pages. Saturating:
        // per_page_max comes straight off the query string and may be
        // huge, which must not overflow the rounding term.
        let last_page = (count as i64).saturating_add(self.per_page_max - 1) / self.per_page_max;

        let mut links = serde_json::Map::new();
        links.insert("first".into(), json!(url.replace(&needle, "page=1")));
        if last_page > 1 {
            links.insert(
                "last".into(),
                json!(url.replace(&needle, &format!("page={last_page}"))),
            );
        }
        if page > 1 {
            links.insert(
                "prev".into(),
                json!(url.replace(&needle, &format!("page={}", page - 1))),
            );
        }
        if page < last_page {
            links.insert(
                "next".into(),
                json!(url.replace(&needle, &format!("page={}", page + 1))),
            );
        }

        json!({ "page": page, "links": links })
    }
}
