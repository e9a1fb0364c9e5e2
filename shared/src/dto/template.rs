use serde::{Deserialize, Serialize};

/// Template generation parameters for `POST /templates/generate`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TemplateRequest {
    /// Template family, `listicle` or `howto`. Unknown values fall back to
    /// `listicle` on the backend.
    #[serde(rename = "type")]
    pub kind: String,
    pub audience: String,
    /// Comma-separated keywords.
    pub keywords: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl Default for TemplateRequest {
    fn default() -> Self {
        Self {
            kind: "listicle".to_string(),
            audience: "professional".to_string(),
            keywords: String::new(),
            user_id: None,
        }
    }
}

/// Query for `GET /templates`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TemplateQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// A generated writing template.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WritingTemplate {
    #[serde(rename = "type")]
    pub kind: String,
    pub audience: String,
    pub keywords: Vec<String>,
    pub title_formula: String,
    pub structure: Vec<String>,
    pub examples: Vec<String>,
    pub tips: Vec<String>,
    pub generated_time: Option<String>,
    pub template_id: Option<String>,
}

/// A template as listed by `GET /templates`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StoredTemplate {
    #[serde(rename = "_id")]
    pub id: String,
    pub template: WritingTemplate,
    pub user_id: String,
    pub created_time: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_uses_type_key() {
        let request = TemplateRequest {
            kind: "howto".to_string(),
            keywords: "python,理财".to_string(),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"type": "howto", "audience": "professional", "keywords": "python,理财"})
        );
    }

    #[test]
    fn test_stored_template_decodes() {
        let stored: StoredTemplate = serde_json::from_value(json!({
            "_id": "65f0c0ffee",
            "user_id": "anonymous",
            "template": {"type": "清单型文章", "audience": "youth", "keywords": ["a"]},
            "created_time": "2024-05-01T10:00:00"
        }))
        .unwrap();
        assert_eq!(stored.id, "65f0c0ffee");
        assert_eq!(stored.template.kind, "清单型文章");
        assert!(stored.template.tips.is_empty());
    }
}
