//! Command execution.
//!
//! Turns a parsed [`Command`] into one [`ArticleApi`] call and renders the
//! result. Token management commands only touch the [`TokenStore`].

use serde_json::Value;
use shared::{
    join_keywords, split_keywords, ArticleQuery, CollectRequest, TemplateQuery, TemplateRequest,
    TextAnalysisRequest,
};

use super::render::{render, OutputFormat, View};
use super::{Command, TokenAction};
use crate::core::error::{AppError, Result};
use crate::core::ArticleApi;
use crate::services::token_store::{TokenStore, AUTH_TOKEN_KEY};
use crate::utils::validation::{
    validate_analysis_text, validate_article_id, validate_page, validate_template_type,
    validate_token, ValidationResult,
};

/// Page size used with `articles --page` when `--limit` is absent.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

fn check(result: ValidationResult) -> Result<()> {
    result.into_result().map_err(AppError::Input)
}

/// Normalize a user keyword list to the comma-joined form the backend splits.
fn normalize_keywords(keywords: &str) -> String {
    join_keywords(split_keywords(keywords))
}

pub async fn execute(
    api: &dyn ArticleApi,
    tokens: &dyn TokenStore,
    command: Command,
    format: OutputFormat,
) -> Result<String> {
    let (view, body): (View, Value) = match command {
        Command::Collect {
            category,
            min_reads,
            keywords,
        } => {
            let request = CollectRequest {
                category,
                min_reads,
                keywords: normalize_keywords(&keywords),
            };
            (View::Collect, api.collect_articles(&request).await?)
        }

        Command::Articles {
            limit,
            offset,
            page,
            category,
            search,
        } => {
            let mut query = match page {
                Some(page) => {
                    check(validate_page(page))?;
                    ArticleQuery::page(page, limit.unwrap_or(DEFAULT_PAGE_SIZE)).ok_or_else(
                        || AppError::Input(format!("Page {} is out of range", page)),
                    )?
                }
                None => ArticleQuery {
                    limit,
                    offset,
                    ..Default::default()
                },
            };
            query.category = category.filter(|c| !c.trim().is_empty());
            query.search = search.filter(|s| !s.trim().is_empty());
            (View::Articles, api.get_articles(&query).await?)
        }

        Command::Analyze { id } => {
            check(validate_article_id(&id))?;
            (View::Analysis, api.analyze_article(id.trim()).await?)
        }

        Command::AnalyzeText {
            title,
            content,
            content_file,
        } => {
            let content = match content_file {
                Some(path) => tokio::fs::read_to_string(&path).await?,
                None => content.unwrap_or_default(),
            };
            check(validate_analysis_text(&title, &content))?;
            let request = TextAnalysisRequest { title, content };
            (View::Analysis, api.analyze_text(&request).await?)
        }

        Command::Template {
            kind,
            audience,
            keywords,
            user_id,
        } => {
            check(validate_template_type(&kind))?;
            let request = TemplateRequest {
                kind,
                audience,
                keywords: normalize_keywords(&keywords),
                user_id,
            };
            (View::Template, api.generate_template(&request).await?)
        }

        Command::Templates { user_id, limit } => {
            let query = TemplateQuery { user_id, limit };
            (View::Templates, api.get_templates(&query).await?)
        }

        Command::Stats => (View::Stats, api.get_dashboard_stats().await?),

        Command::Health => (View::Health, api.health().await?),

        Command::Token { action } => return token_command(tokens, action),
    };

    render(view, &body, format)
}

fn token_command(tokens: &dyn TokenStore, action: TokenAction) -> Result<String> {
    match action {
        TokenAction::Set { token } => {
            check(validate_token(&token))?;
            tokens.set(AUTH_TOKEN_KEY, token.trim())?;
            tracing::info!("Auth token stored");
            Ok("Token saved".to_string())
        }
        TokenAction::Clear => {
            tokens.remove(AUTH_TOKEN_KEY)?;
            tracing::info!("Auth token cleared");
            Ok("Token cleared".to_string())
        }
        TokenAction::Show => Ok(match tokens.get(AUTH_TOKEN_KEY)? {
            Some(token) if !token.is_empty() => format!("Token: {}", mask_token(&token)),
            _ => "No token stored".to_string(),
        }),
    }
}

/// Show only the ends of a token.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 12 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}
