//! Paged Stash API envelopes.
//!
//! Collection endpoints return pages in this shape, per the Stash API docs:
//!
//! ```json
//! {
//!     "size": 3,
//!     "limit": 3,
//!     "isLastPage": false,
//!     "values": [ {}, {}, {} ],
//!     "start": 0,
//!     "filter": null,
//!     "nextPageStart": 3
//! }
//! ```

use serde::Deserialize;

/// One page of a paged response, as it comes off the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResponse<T> {
    /// Number of entities in this page
    #[serde(default)]
    pub size: u64,

    /// Page size the server applied
    #[serde(default)]
    pub limit: u64,

    pub is_last_page: bool,

    #[serde(default = "Vec::new")]
    pub values: Vec<T>,

    /// Offset of the first entity in this page
    #[serde(default)]
    pub start: u64,

    /// Offset to request for the next page; absent on the last page
    pub next_page_start: Option<u64>,
}

/// All entities accumulated across the pages of one listing.
#[derive(Debug, Clone)]
pub struct Paged<T> {
    pub entities: Vec<T>,
    pub page_count: usize,
}

impl<T> Paged<T> {
    pub fn new() -> Self {
        Paged {
            entities: Vec::new(),
            page_count: 0,
        }
    }

    /// Fold one page into the accumulated listing.
    pub fn push_page(&mut self, page: PagedResponse<T>) {
        self.page_count += 1;
        self.entities.extend(page.values);
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }
}

impl<T> Default for Paged<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_intermediate_page() {
        let json = r#"{
            "size": 2,
            "limit": 2,
            "isLastPage": false,
            "values": ["a", "b"],
            "start": 0,
            "filter": null,
            "nextPageStart": 2
        }"#;

        let page: PagedResponse<String> = serde_json::from_str(json).unwrap();
        assert!(!page.is_last_page);
        assert_eq!(page.values, vec!["a", "b"]);
        assert_eq!(page.next_page_start, Some(2));
    }

    #[test]
    fn test_deserialize_last_page_without_next_start() {
        let json = r#"{
            "size": 1,
            "limit": 25,
            "isLastPage": true,
            "values": ["z"],
            "start": 4
        }"#;

        let page: PagedResponse<String> = serde_json::from_str(json).unwrap();
        assert!(page.is_last_page);
        assert_eq!(page.next_page_start, None);
    }

    #[test]
    fn test_paged_accumulation() {
        let mut paged = Paged::new();
        paged.push_page(PagedResponse {
            size: 2,
            limit: 2,
            is_last_page: false,
            values: vec![1, 2],
            start: 0,
            next_page_start: Some(2),
        });
        paged.push_page(PagedResponse {
            size: 1,
            limit: 2,
            is_last_page: true,
            values: vec![3],
            start: 2,
            next_page_start: None,
        });

        assert_eq!(paged.entity_count(), 3);
        assert_eq!(paged.page_count, 2);
        assert_eq!(paged.entities, vec![1, 2, 3]);
    }
}
