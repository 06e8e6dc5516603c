use anyhow::Result;
use axum::{extract::{Path, Query, State}, http::StatusCode, routing::get, Json, Router};
use search_core::{build_from_files, ContentProvider, FsContentProvider, KeywordIndex, Occurrence, Strictness};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

const SNIPPET_RADIUS: usize = 80;

#[derive(Deserialize)]
pub struct SearchParams {
    pub kw1: Option<String>,
    pub kw2: Option<String>,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub kw1: String,
    pub kw2: String,
    pub took_s: f64,
    pub total_hits: usize,
    pub results: Vec<SearchHit>,
}

#[derive(Serialize)]
pub struct SearchHit {
    pub rank: usize,
    pub document: String,
    pub snippet: Option<String>,
}

#[derive(Serialize)]
pub struct KeywordResponse {
    pub keyword: String,
    pub occurrences: Vec<Occurrence>,
}

/// Built once at startup, read-only while serving.
#[derive(Clone)]
pub struct AppState {
    pub index: Arc<KeywordIndex>,
    pub content: Arc<FsContentProvider>,
}

pub struct ServerConfig {
    pub docs_file: String,
    pub noise_file: String,
    pub strict: bool,
}

pub fn build_app(config: &ServerConfig) -> Result<Router> {
    let strictness = if config.strict { Strictness::Strict } else { Strictness::Lenient };
    let index = build_from_files(&config.docs_file, &config.noise_file, strictness)?;
    let root = std::path::Path::new(&config.docs_file)
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_default();
    tracing::info!(num_docs = index.documents().len(), num_keywords = index.keyword_count(), "index ready");
    let app_state = AppState { index: Arc::new(index), content: Arc::new(FsContentProvider::new(root)) };

    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/search", get(search_handler))
        .route("/keywords/:keyword", get(keyword_handler))
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);
    Ok(app)
}

pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, (StatusCode, String)> {
    let start = std::time::Instant::now();
    let (kw1, kw2) = match (params.kw1, params.kw2) {
        (Some(a), Some(b)) => (a, b),
        _ => return Err((StatusCode::BAD_REQUEST, "both kw1 and kw2 are required".into())),
    };

    let docs = state.index.top5search(&kw1, &kw2);
    let terms = [kw1.as_str(), kw2.as_str()];
    let results: Vec<SearchHit> = docs
        .into_iter()
        .enumerate()
        .map(|(i, document)| {
            let snippet = state.content.read(&document).ok().and_then(|text| snippet(&text, &terms));
            SearchHit { rank: i + 1, document, snippet }
        })
        .collect();

    let elapsed = start.elapsed();
    Ok(Json(SearchResponse { kw1, kw2, took_s: elapsed.as_secs_f64(), total_hits: results.len(), results }))
}

pub async fn keyword_handler(
    State(state): State<AppState>,
    Path(keyword): Path<String>,
) -> Result<Json<KeywordResponse>, (StatusCode, String)> {
    let key = search_core::normalize(&keyword).unwrap_or_default();
    if !state.index.contains_keyword(&key) {
        return Err((StatusCode::NOT_FOUND, format!("keyword not indexed: {keyword}")));
    }
    let occurrences = state.index.occurrences(&key).to_vec();
    Ok(Json(KeywordResponse { keyword: key, occurrences }))
}

/// Excerpt around the first whole-word match of any term, matches wrapped in `<em>`.
pub fn snippet(text: &str, terms: &[&str]) -> Option<String> {
    if text.trim().is_empty() {
        return None;
    }
    let words: Vec<String> = terms
        .iter()
        .filter_map(|t| search_core::normalize(t))
        .map(|t| regex::escape(&t))
        .collect();
    if words.is_empty() {
        return None;
    }
    let pat = regex::RegexBuilder::new(&format!(r"\b(?:{})\b", words.join("|")))
        .case_insensitive(true)
        .build()
        .ok()?;

    let excerpt = match pat.find(text) {
        Some(m) => {
            let start = floor_char_boundary(text, m.start().saturating_sub(SNIPPET_RADIUS));
            let end = floor_char_boundary(text, (m.end() + SNIPPET_RADIUS).min(text.len()));
            &text[start..end]
        }
        None => &text[..floor_char_boundary(text, (2 * SNIPPET_RADIUS).min(text.len()))],
    };
    let highlighted = pat.replace_all(excerpt, |caps: &regex::Captures| format!("<em>{}</em>", &caps[0]));
    Some(highlighted.trim().to_string())
}

fn floor_char_boundary(s: &str, mut i: usize) -> usize {
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}
