//! HTTP host for the worker.
//!
//! Binds a single axum server that receives tool invocation requests and
//! automation events from the external runtime and dispatches them to the
//! registered handlers. The worker is fully registered before `start` is
//! called; the host never mutates it.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;

use crate::context::WorkerContext;
use crate::documents::DocumentService;
use crate::error::{HostError, RegistryError, WorkerError};
use crate::tools::{ToolError, ToolSchema};
use crate::worker::Worker;
use crate::worker::api::{AutomationEventPayload, ToolInvocationRequest, ToolInvocationResponse};

/// Configuration for the worker host.
pub struct HostConfig {
    /// Address to bind the server to.
    pub addr: SocketAddr,
}

/// Shared state behind the routes.
struct HostState {
    worker: Arc<Worker>,
    documents: Arc<dyn DocumentService>,
}

impl HostState {
    fn context(&self) -> WorkerContext {
        WorkerContext::new(self.documents.clone())
    }
}

/// HTTP server that exposes a worker's registered handlers.
pub struct WorkerHost {
    config: HostConfig,
    state: Arc<HostState>,
    shutdown_tx: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl WorkerHost {
    /// Create a host around a fully-registered worker.
    pub fn new(
        config: HostConfig,
        worker: Arc<Worker>,
        documents: Arc<dyn DocumentService>,
    ) -> Self {
        Self {
            config,
            state: Arc::new(HostState { worker, documents }),
            shutdown_tx: None,
            handle: None,
        }
    }

    /// Bind the listener and spawn the server task.
    pub async fn start(&mut self) -> Result<SocketAddr, HostError> {
        let app = routes(self.state.clone());

        let listener = tokio::net::TcpListener::bind(self.config.addr)
            .await
            .map_err(|e| HostError::StartupFailed {
                reason: format!("Failed to bind to {}: {}", self.config.addr, e),
            })?;
        let addr = listener.local_addr().map_err(|e| HostError::StartupFailed {
            reason: format!("Failed to read local address: {e}"),
        })?;

        tracing::info!("Worker host listening on {}", addr);

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        self.shutdown_tx = Some(shutdown_tx);

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                    tracing::info!("Worker host shutting down");
                })
                .await
            {
                tracing::error!("Worker host error: {}", e);
            }
        });

        self.handle = Some(handle);
        Ok(addr)
    }

    /// Signal graceful shutdown and wait for the server task to finish.
    pub async fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

fn routes(state: Arc<HostState>) -> Router {
    Router::new()
        .route("/v1/tools", get(list_tools))
        .route("/v1/tools/{name}", post(invoke_tool))
        .route("/v1/automations/{name}", post(dispatch_automation))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn list_tools(State(state): State<Arc<HostState>>) -> Json<Vec<ToolSchema>> {
    Json(state.worker.tool_schemas())
}

async fn invoke_tool(
    State(state): State<Arc<HostState>>,
    Path(name): Path<String>,
    Json(request): Json<ToolInvocationRequest>,
) -> Result<Json<ToolInvocationResponse>, ApiError> {
    let ctx = state.context();
    let output = state.worker.invoke_tool(&name, request.input, &ctx).await?;
    Ok(Json(output.into()))
}

async fn dispatch_automation(
    State(state): State<Arc<HostState>>,
    Path(name): Path<String>,
    Json(payload): Json<AutomationEventPayload>,
) -> Result<StatusCode, ApiError> {
    let ctx = state.context();
    state
        .worker
        .dispatch_automation(&name, payload.into(), &ctx)
        .await?;
    Ok(StatusCode::ACCEPTED)
}

/// Worker error with an HTTP status mapping.
struct ApiError(WorkerError);

impl From<WorkerError> for ApiError {
    fn from(err: WorkerError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            WorkerError::Registry(RegistryError::UnknownTool(_))
            | WorkerError::Registry(RegistryError::UnknownAutomation(_)) => StatusCode::NOT_FOUND,
            WorkerError::Registry(_) => StatusCode::CONFLICT,
            WorkerError::Tool(ToolError::InvalidParameters(_)) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self.0);
        }

        let body = Json(serde_json::json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tower::ServiceExt;

    use super::*;
    use crate::documents::InMemoryDocumentService;
    use crate::tools::builtin::SayHelloTool;

    fn test_router() -> (Router, Arc<InMemoryDocumentService>) {
        let mut worker = Worker::new();
        worker.register_tool(Arc::new(SayHelloTool)).unwrap();
        let documents = Arc::new(InMemoryDocumentService::new());
        let state = Arc::new(HostState {
            worker: Arc::new(worker),
            documents: documents.clone(),
        });
        (routes(state), documents)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_list_tools() {
        let (router, _) = test_router();

        let response = router
            .oneshot(
                axum::http::Request::get("/v1/tools")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body[0]["name"], "say_hello");
    }

    #[tokio::test]
    async fn test_invoke_tool_route() {
        let (router, _) = test_router();

        let response = router
            .oneshot(
                axum::http::Request::post("/v1/tools/say_hello")
                    .header("content-type", "application/json")
                    .body(axum::body::Body::from(
                        serde_json::json!({"input": {"name": "Ada"}}).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["result"], "Hello, Ada!");
    }

    #[tokio::test]
    async fn test_unknown_tool_is_404() {
        let (router, _) = test_router();

        let response = router
            .oneshot(
                axum::http::Request::post("/v1/tools/nope")
                    .header("content-type", "application/json")
                    .body(axum::body::Body::from(
                        serde_json::json!({"input": {}}).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_invalid_input_is_400() {
        let (router, _) = test_router();

        let response = router
            .oneshot(
                axum::http::Request::post("/v1/tools/say_hello")
                    .header("content-type", "application/json")
                    .body(axum::body::Body::from(
                        serde_json::json!({"input": {}}).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_automation_is_404() {
        let (router, _) = test_router();

        let response = router
            .oneshot(
                axum::http::Request::post("/v1/automations/nope")
                    .header("content-type", "application/json")
                    .body(axum::body::Body::from(
                        serde_json::json!({"pageId": null, "pageData": null}).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
