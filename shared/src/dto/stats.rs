use serde::{Deserialize, Serialize};

/// Aggregates returned by `GET /stats/dashboard`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DashboardStats {
    pub total_articles: u64,
    pub total_analysis: u64,
    pub total_templates: u64,
    /// Articles per day over the last seven days, keyed by `YYYY-MM-DD`.
    pub article_trend: Vec<StatBucket>,
    pub category_stats: Vec<StatBucket>,
    /// Top ten keywords by article count.
    pub hot_keywords: Vec<StatBucket>,
}

/// One `{_id, count}` aggregation bucket. The key may be `null` for
/// articles without the grouped field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StatBucket {
    #[serde(rename = "_id")]
    pub key: Option<String>,
    pub count: u64,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: Option<String>,
    pub version: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stats_decode() {
        let stats: DashboardStats = serde_json::from_value(json!({
            "total_articles": 120,
            "total_analysis": 8,
            "total_templates": 3,
            "article_trend": [{"_id": "2024-05-01", "count": 16}],
            "category_stats": [{"_id": null, "count": 2}, {"_id": "tech", "count": 40}],
            "hot_keywords": []
        }))
        .unwrap();
        assert_eq!(stats.total_articles, 120);
        assert_eq!(stats.article_trend[0].key.as_deref(), Some("2024-05-01"));
        assert_eq!(stats.category_stats[0].key, None);
    }

    #[test]
    fn test_health() {
        let health: HealthStatus =
            serde_json::from_value(json!({"status": "healthy", "version": "1.0.0"})).unwrap();
        assert!(health.is_healthy());
        assert!(!HealthStatus::default().is_healthy());
    }
}
