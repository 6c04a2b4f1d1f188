use crate::validation::{
    is_valid_term, parse_order_by, parse_results, DEFAULT_ORDER_BY, DEFAULT_RESULTS,
};

/// The request the app root sends to the API for one page of records
///
/// Values are only set through the validating methods below, so every query
/// can be sent as is. Updates return a new query instead of mutating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordQuery {
    page: u32,
    results: u32,
    order_by: String,
    tag: Option<String>,
}

impl Default for RecordQuery {
    fn default() -> Self {
        Self::new(DEFAULT_RESULTS)
    }
}

impl RecordQuery {
    pub fn new(results: u32) -> Self {
        Self {
            page: 1,
            results: results.max(1),
            order_by: DEFAULT_ORDER_BY.to_string(),
            tag: None,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn results(&self) -> u32 {
        self.results
    }

    pub fn order_by(&self) -> &str {
        &self.order_by
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Same query on `page`; pages below 1 become 1
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }

    /// Same query reset to the first page, used by the refresh action
    pub fn first_page(&self) -> Self {
        self.with_page(1)
    }

    /// New page size from a select value; restarts at the first page
    pub fn with_results(&self, value: &str) -> Self {
        Self {
            page: 1,
            results: parse_results(value),
            ..self.clone()
        }
    }

    /// New sort column from a select value; restarts at the first page
    pub fn with_order_by(&self, value: &str) -> Self {
        Self {
            page: 1,
            order_by: parse_order_by(value),
            ..self.clone()
        }
    }

    /// Query filtered by tag search `term`; restarts at the first page
    ///
    /// An empty term or one with disallowed characters clears the filter.
    pub fn with_tag(&self, term: &str) -> Self {
        let term = term.trim();
        let tag = if term.is_empty() || !is_valid_term(term) {
            None
        } else {
            Some(term.to_string())
        };
        Self {
            page: 1,
            tag,
            ..self.clone()
        }
    }

    /// Query string parameters in the order the API documents them
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("results", self.results.to_string()),
            ("order_by", self.order_by.clone()),
        ];
        if let Some(tag) = &self.tag {
            params.push(("tag", tag.clone()));
        }
        params
    }
}

/// Payload of the search callback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: RecordQuery,
    pub term: String,
}

impl SearchRequest {
    /// The query to fetch for this search
    pub fn into_query(self) -> RecordQuery {
        self.query.with_tag(&self.term)
    }
}
