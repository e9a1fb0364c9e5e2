use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Free-text analysis payload for `POST /analyze/text`.
///
/// The backend rejects a payload where both fields are empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextAnalysisRequest {
    pub title: String,
    pub content: String,
}

/// Analysis report produced for an article or a piece of text.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnalysisReport {
    pub structure: StructureMetrics,
    pub emotion: EmotionMetrics,
    pub engagement: EngagementMetrics,
    pub seo: SeoMetrics,
    pub keywords: Vec<WeightedKeyword>,
    /// Overall score, 0 to 100.
    pub score: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StructureMetrics {
    pub title_length: u64,
    pub content_length: u64,
    pub sentence_count: u64,
    pub paragraph_count: u64,
    pub avg_sentence_length: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EmotionMetrics {
    /// Hit count per emotion category (positive, negative, urgent, exclusive).
    pub emotion_scores: BTreeMap<String, u64>,
    pub emotion_intensity: f64,
    pub dominant_emotion: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EngagementMetrics {
    pub question_count: u64,
    pub exclamation_count: u64,
    pub number_count: u64,
    pub call_to_action: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SeoMetrics {
    pub title_length_optimal: bool,
    pub keyword_in_title: bool,
    pub readability_score: f64,
    pub keyword_density: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WeightedKeyword {
    pub word: String,
    pub weight: f64,
}
