use serde::{Deserialize, Serialize};

use crate::utils::join_keywords;

/// Default keyword list for a collection run.
pub const DEFAULT_COLLECT_KEYWORDS: &str = "热门,爆款,干货";

/// Default minimum read count for collected articles.
pub const DEFAULT_MIN_READS: u64 = 10_000;

/// Collection form submitted to `POST /articles/collect`.
///
/// `keywords` travels as one comma-separated string, matching what the
/// backend splits on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CollectRequest {
    pub category: String,
    pub min_reads: u64,
    pub keywords: String,
}

impl Default for CollectRequest {
    fn default() -> Self {
        Self {
            category: "all".to_string(),
            min_reads: DEFAULT_MIN_READS,
            keywords: DEFAULT_COLLECT_KEYWORDS.to_string(),
        }
    }
}

impl CollectRequest {
    /// Replace the keyword string with the given keywords joined by `,`.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.keywords = join_keywords(keywords);
        self
    }
}

/// Acknowledgment returned when a collection task was queued.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CollectAck {
    pub status: String,
    pub task_id: Option<String>,
    pub message: Option<String>,
}

/// Query for `GET /articles`. Absent fields are left off the query string.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl ArticleQuery {
    /// Query for a 1-based page of `page_size` articles.
    ///
    /// `None` when the page's offset does not fit in a `u32`.
    pub fn page(page: u32, page_size: u32) -> Option<Self> {
        let offset = page.saturating_sub(1).checked_mul(page_size)?;
        Some(Self {
            limit: Some(page_size),
            offset: Some(offset),
            ..Default::default()
        })
    }
}

/// A collected article as stored by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub author: String,
    pub content_url: Option<String>,
    pub read_count: u64,
    pub like_count: u64,
    pub publish_time: Option<String>,
    pub category: Option<String>,
    pub summary: Option<String>,
    pub keywords: Vec<String>,
    pub crawl_time: Option<String>,
}
