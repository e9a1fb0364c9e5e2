//! Output rendering for command results.
//!
//! JSON mode prints the backend body unchanged. Table mode decodes the body
//! into the typed DTOs from `shared` and lays it out as plain text.

use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::{
    format_timestamp, truncate_text, AnalysisReport, Article, CollectAck, DashboardStats,
    Envelope, HealthStatus, StatBucket, StoredTemplate, WritingTemplate,
};

use crate::core::error::Result;

const TITLE_WIDTH: usize = 40;
const AUTHOR_WIDTH: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Table,
}

/// Which response shape a body has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Collect,
    Articles,
    Analysis,
    Template,
    Templates,
    Stats,
    Health,
}

pub fn render(view: View, body: &Value, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(body)?);
    }
    if body.is_null() {
        return Ok("(empty response)".to_string());
    }

    let text = match view {
        View::Collect => collect_summary(&decode::<CollectAck>(body)?),
        View::Articles => {
            let envelope = envelope::<Vec<Article>>(body)?;
            let total = envelope.total;
            articles_table(&envelope.into_data(), total)
        }
        View::Analysis => analysis_summary(&envelope::<AnalysisReport>(body)?.into_data()),
        View::Template => template_summary(&envelope::<WritingTemplate>(body)?.into_data()),
        View::Templates => templates_table(&envelope::<Vec<StoredTemplate>>(body)?.into_data()),
        View::Stats => stats_summary(&envelope::<DashboardStats>(body)?.into_data()),
        View::Health => health_summary(&decode::<HealthStatus>(body)?),
    };
    Ok(text)
}

fn decode<T: DeserializeOwned>(body: &Value) -> Result<T> {
    Ok(serde_json::from_value(body.clone())?)
}

fn envelope<T: DeserializeOwned>(body: &Value) -> Result<Envelope<T>> {
    Ok(Envelope::from_value(body.clone())?)
}

/// Left-align `text` in `width` columns, counting characters.
fn pad(text: &str, width: usize) -> String {
    let shown = truncate_text(text, width);
    let fill = width.saturating_sub(shown.chars().count());
    format!("{}{}", shown, " ".repeat(fill))
}

fn timestamp(value: Option<&str>) -> String {
    value.map(format_timestamp).unwrap_or_else(|| "-".to_string())
}

fn bucket_key(bucket: &StatBucket) -> &str {
    bucket.key.as_deref().unwrap_or("(none)")
}

pub fn collect_summary(ack: &CollectAck) -> String {
    let mut out = match &ack.task_id {
        Some(task_id) => format!("Collection queued: task {}", task_id),
        None => format!("Collection request: {}", ack.status),
    };
    if let Some(message) = &ack.message {
        out.push('\n');
        out.push_str(message);
    }
    out
}

pub fn articles_table(articles: &[Article], total: Option<u64>) -> String {
    if articles.is_empty() {
        return "No articles found".to_string();
    }

    let mut lines = vec![format!(
        "{}  {}  {}  {:>8}  {:>6}  {}",
        pad("ID", 24),
        pad("TITLE", TITLE_WIDTH),
        pad("AUTHOR", AUTHOR_WIDTH),
        "READS",
        "LIKES",
        "PUBLISHED"
    )];
    for article in articles {
        lines.push(format!(
            "{}  {}  {}  {:>8}  {:>6}  {}",
            pad(&article.id, 24),
            pad(&article.title, TITLE_WIDTH),
            pad(&article.author, AUTHOR_WIDTH),
            article.read_count,
            article.like_count,
            timestamp(article.publish_time.as_deref())
        ));
    }
    lines.push(format!(
        "Showing {} of {}",
        articles.len(),
        total.unwrap_or(articles.len() as u64)
    ));
    lines.join("\n")
}

pub fn analysis_summary(report: &AnalysisReport) -> String {
    let s = &report.structure;
    let e = &report.emotion;
    let g = &report.engagement;
    let seo = &report.seo;

    let keywords = report
        .keywords
        .iter()
        .map(|k| format!("{} ({:.2})", k.word, k.weight))
        .collect::<Vec<_>>()
        .join(", ");

    [
        format!("Score: {}/100", report.score),
        format!(
            "Structure: title {} chars, content {} chars, {} sentences, {} paragraphs, {:.1} chars/sentence",
            s.title_length, s.content_length, s.sentence_count, s.paragraph_count, s.avg_sentence_length
        ),
        format!(
            "Emotion: {} (intensity {:.2})",
            e.dominant_emotion.as_deref().unwrap_or("none"),
            e.emotion_intensity
        ),
        format!(
            "Engagement: {} questions, {} exclamations, {} numbers, {} calls to action",
            g.question_count, g.exclamation_count, g.number_count, g.call_to_action
        ),
        format!(
            "SEO: title length {}, keyword in title {}, readability {:.1}, density {:.2}",
            if seo.title_length_optimal { "ok" } else { "off" },
            if seo.keyword_in_title { "yes" } else { "no" },
            seo.readability_score,
            seo.keyword_density
        ),
        format!("Keywords: {}", if keywords.is_empty() { "-" } else { keywords.as_str() }),
    ]
    .join("\n")
}

pub fn template_summary(template: &WritingTemplate) -> String {
    let mut lines = vec![
        format!("Template: {} / {}", template.kind, template.audience),
        format!("Title formula: {}", template.title_formula),
        "Structure:".to_string(),
    ];
    lines.extend(
        template
            .structure
            .iter()
            .enumerate()
            .map(|(i, section)| format!("  {}. {}", i + 1, section)),
    );
    if !template.examples.is_empty() {
        lines.push("Examples:".to_string());
        lines.extend(template.examples.iter().map(|e| format!("  - {}", e)));
    }
    if !template.tips.is_empty() {
        lines.push("Tips:".to_string());
        lines.extend(template.tips.iter().map(|t| format!("  - {}", t)));
    }
    if let Some(id) = &template.template_id {
        lines.push(format!("Saved as {}", id));
    }
    lines.join("\n")
}

pub fn templates_table(templates: &[StoredTemplate]) -> String {
    if templates.is_empty() {
        return "No templates found".to_string();
    }

    let mut lines = vec![format!(
        "{}  {}  {}  {}  {}",
        pad("ID", 24),
        pad("TYPE", 10),
        pad("AUDIENCE", 14),
        pad("KEYWORDS", 30),
        "CREATED"
    )];
    for stored in templates {
        lines.push(format!(
            "{}  {}  {}  {}  {}",
            pad(&stored.id, 24),
            pad(&stored.template.kind, 10),
            pad(&stored.template.audience, 14),
            pad(&stored.template.keywords.join(","), 30),
            timestamp(stored.created_time.as_deref())
        ));
    }
    lines.join("\n")
}

pub fn stats_summary(stats: &DashboardStats) -> String {
    let mut lines = vec![
        format!("Articles:  {}", stats.total_articles),
        format!("Analyses:  {}", stats.total_analysis),
        format!("Templates: {}", stats.total_templates),
    ];
    let sections = [
        ("Articles per day", &stats.article_trend),
        ("Categories", &stats.category_stats),
        ("Hot keywords", &stats.hot_keywords),
    ];
    for (heading, buckets) in sections {
        if buckets.is_empty() {
            continue;
        }
        lines.push(format!("{}:", heading));
        lines.extend(
            buckets
                .iter()
                .map(|b| format!("  {} {}", pad(bucket_key(b), 20), b.count)),
        );
    }
    lines.join("\n")
}

pub fn health_summary(health: &HealthStatus) -> String {
    let mut out = format!(
        "Backend {}",
        if health.is_healthy() { "healthy" } else { health.status.as_str() }
    );
    if let Some(version) = &health.version {
        out.push_str(&format!(" (version {})", version));
    }
    if let Some(ts) = &health.timestamp {
        out.push_str(&format!(" at {}", format_timestamp(ts)));
    }
    out
}
