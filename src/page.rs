use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sort specification echoed back by listing endpoints: field name to
/// direction, `1` ascending and `-1` descending.
pub type Sort = BTreeMap<String, i8>;

/// One page of a listing. The service owns the paging semantics; this is
/// passed through as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub elements: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
    pub total_elements: u64,
    pub first_page: bool,
    pub last_page: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<Sort>,
}

impl<T> Page<T> {
    /// True when there is nothing after this page
    pub fn is_last(&self) -> bool {
        self.last_page
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.content.iter()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.content.into_iter()
    }
}
