use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Paging and summary information returned alongside query results
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
  /// Number of records that matched the query across all pages
  pub total: usize,
  /// Number of pages for the requested page size (0 when nothing matched)
  pub pages: usize,
  pub page: i64,
  pub limit: i64,
  /// Metadata function name -> value label -> count
  #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
  pub counts: BTreeMap<String, BTreeMap<String, u64>>,
  /// Stat function name -> number of records it held for
  #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
  pub stats: BTreeMap<String, u64>,
}

impl PageMetadata {
  pub fn new(total: usize, page: i64, limit: i64) -> Self {
    let pages = if limit > 0 {
      total.div_ceil(limit as usize)
    } else if total > 0 {
      1
    } else {
      0
    };
    Self {
      total,
      pages,
      page,
      limit,
      counts: BTreeMap::new(),
      stats: BTreeMap::new(),
    }
  }

  /// True when a page after the current one would contain records
  pub fn has_more(&self) -> bool {
    self.page >= 0 && ((self.page as usize) + 1) < self.pages
  }
}
