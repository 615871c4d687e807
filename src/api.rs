//! Unified API router for Verdant
//!
//! Merges all module routers into a single axum `Router` with CORS and
//! request tracing.
//!
//! ## Endpoint Map
//!
//! | Path                       | Module   | Description                     |
//! |----------------------------|----------|---------------------------------|
//! | `/`                        | api      | Landing page data               |
//! | `/health`                  | api      | Health probe                    |
//! | `/api/get_nature_insight`  | advisor  | AI biomimicry answer            |
//! | `/submit_insight`          | insights | Community insight submission    |
//! | `/vote_insight/:index`     | insights | Upvote an insight               |
//! | `/api/visualization_data`  | metrics  | Solution chart data             |
//! | `/api/research_stats`      | metrics  | Research chart data             |

use crate::advisor::{advisor_router, AdvisorState};
use crate::catalog::{CaseStudy, ContentCatalog, ResearchPaper, Solution};
use crate::insights::handler::SUBMITTED_NOTICE;
use crate::insights::{insights_router, CommunityInsight, InsightStore, InsightsState};
use crate::metrics::metrics_router;
use axum::{
    extract::{Query, State},
    http::{header, Method},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared state for the landing page
#[derive(Clone)]
pub struct HomeState {
    pub catalog: Arc<ContentCatalog>,
    pub insights: Arc<InsightStore>,
}

/// Build the complete Verdant HTTP application
pub fn build_app(
    home_state: HomeState,
    advisor_state: AdvisorState,
    cors_origins: &[String],
) -> Router {
    let insights_state = InsightsState {
        store: home_state.insights.clone(),
    };

    Router::new()
        .route("/", get(home))
        .route("/health", get(health_check))
        .with_state(home_state)
        .merge(advisor_router(advisor_state))
        .merge(insights_router(insights_state))
        .merge(metrics_router())
        .layer(TraceLayer::new_for_http())
        .layer(build_cors(cors_origins))
}

// =============================================================================
// Root handlers
// =============================================================================

#[derive(Debug, Default, Deserialize)]
struct HomeQuery {
    notice: Option<String>,
}

/// Everything the landing page renders
#[derive(Debug, Serialize)]
pub struct HomePage {
    pub solutions: BTreeMap<String, Solution>,
    pub community_insights: Vec<CommunityInsight>,
    pub research_papers: BTreeMap<String, ResearchPaper>,
    pub case_studies: BTreeMap<String, CaseStudy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

fn notice_text(key: &str) -> Option<&'static str> {
    match key {
        SUBMITTED_NOTICE => Some("Thank you for sharing your insight!"),
        _ => None,
    }
}

/// GET /
async fn home(State(state): State<HomeState>, Query(params): Query<HomeQuery>) -> impl IntoResponse {
    Json(HomePage {
        solutions: state.catalog.get_all_solutions().clone(),
        community_insights: state.insights.list_all().await,
        research_papers: state.catalog.get_all_papers().clone(),
        case_studies: state.catalog.get_all_case_studies().clone(),
        notice: params
            .notice
            .as_deref()
            .and_then(notice_text)
            .map(str::to_string),
    })
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// =============================================================================
// CORS
// =============================================================================

fn build_cors(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        let parsed: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
        cors.allow_origin(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::testing::{FailingGenerator, RecordingGenerator};
    use crate::advisor::{InsightGateway, TextGenerator};
    use crate::error::Error;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn make_app(generator: Arc<dyn TextGenerator>) -> Router {
        let home_state = HomeState {
            catalog: Arc::new(ContentCatalog::builtin()),
            insights: Arc::new(InsightStore::new()),
        };
        let advisor_state = AdvisorState {
            gateway: InsightGateway::new(generator),
        };
        build_app(home_state, advisor_state, &[])
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), 1024 * 256)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_form(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let resp = health_check().await.into_response();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_home_bundles_catalog() {
        let app = make_app(Arc::new(RecordingGenerator::new("x")));
        let resp = app.oneshot(get("/")).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["solutions"].as_object().unwrap().len(), 5);
        assert_eq!(json["research_papers"].as_object().unwrap().len(), 3);
        assert_eq!(json["case_studies"].as_object().unwrap().len(), 5);
        assert_eq!(json["community_insights"].as_array().unwrap().len(), 0);
        assert_eq!(json["solutions"]["stress_relief"]["inspiration"], "Forest Ecosystems");
        assert!(json.get("notice").is_none());
    }

    #[tokio::test]
    async fn test_submit_vote_and_render_flow() {
        let app = make_app(Arc::new(RecordingGenerator::new("x")));

        let resp = app
            .clone()
            .oneshot(post_form(
                "/submit_insight",
                "name=A&title=T&inspiration=I&description=D",
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        let location = resp.headers()[header::LOCATION].to_str().unwrap().to_string();

        let resp = app
            .clone()
            .oneshot(post_form("/vote_insight/0", ""))
            .await
            .unwrap();
        assert_eq!(body_json(resp).await["votes"], 1);

        let resp = app.oneshot(get(&location)).await.unwrap();
        let json = body_json(resp).await;
        assert_eq!(json["notice"], "Thank you for sharing your insight!");
        let insights = json["community_insights"].as_array().unwrap();
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0]["title"], "T");
        assert_eq!(insights[0]["votes"], 1);
    }

    #[tokio::test]
    async fn test_unknown_notice_is_ignored() {
        let app = make_app(Arc::new(RecordingGenerator::new("x")));
        let resp = app.oneshot(get("/?notice=whatever")).await.unwrap();
        assert!(body_json(resp).await.get("notice").is_none());
    }

    #[tokio::test]
    async fn test_merged_routes_are_reachable() {
        let app = make_app(Arc::new(FailingGenerator(|| {
            Error::Upstream("stub failure".to_string())
        })));

        let resp = app.clone().oneshot(get("/api/visualization_data")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = app.clone().oneshot(get("/api/research_stats")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/get_nature_insight")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"query":"q"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(resp).await["error"], "stub failure");
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let app = make_app(Arc::new(RecordingGenerator::new("x")));
        let resp = app.oneshot(get("/nope")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_build_cors_with_origins() {
        let _cors = build_cors(&["http://localhost:5000".to_string()]);
    }
}
