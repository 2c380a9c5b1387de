//! Servidor web Axum com WebSocket para visualização do Lesk em tempo real

mod config;

use std::sync::Arc;

use anyhow::Context;
use askama::Template;
use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Path, Query, State,
    },
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use wsd_core::{
    corpus::demo_sentences,
    pipeline::{DisambiguationRequest, PipelineEvent, WsdPipeline},
    LexicalDatabase, LexiconError, DEFAULT_LANG,
};

use crate::config::Config;

/// Estado compartilhado da aplicação
struct AppState {
    pipeline: WsdPipeline,
}

#[derive(Deserialize)]
struct LangQuery {
    #[serde(default)]
    lang: Option<String>,
}

struct DemoView {
    label: &'static str,
    text: &'static str,
    word: &'static str,
    pos: &'static str,
    lang: &'static str,
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    demos: Vec<DemoView>,
    languages: String,
    total_synsets: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let lexicon = config.load_lexicon().context("falha ao carregar o léxico")?;
    info!(
        "Léxico pronto: {} synsets, idiomas {:?}",
        lexicon.len(),
        lexicon.languages()
    );

    let state = Arc::new(AppState {
        pipeline: WsdPipeline::with_lexicon(lexicon),
    });
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("não foi possível escutar em {}", config.addr))?;
    info!("🚀 Servidor WSD iniciado em http://{}", config.addr);
    axum::serve(listener, app).await?;
    Ok(())
}

fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/disambiguate", post(disambiguate_handler))
        .route("/senses/:word", get(senses_handler))
        .route("/demo-texts", get(demo_texts_handler))
        .route("/ws", get(ws_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(serde_json::json!({ "error": message.into() }))).into_response()
}

fn lexicon_error_response(err: &LexiconError) -> Response {
    let status = match err {
        LexiconError::UnsupportedLanguage(_) => StatusCode::UNPROCESSABLE_ENTITY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    error_response(status, err.to_string())
}

/// Retorna a página principal HTML
async fn index_handler(State(state): State<Arc<AppState>>) -> Response {
    let lexicon = &state.pipeline.lexicon;
    let page = IndexTemplate {
        demos: demo_sentences()
            .into_iter()
            .map(|d| DemoView {
                label: d.label,
                text: d.text,
                word: d.word,
                pos: d.pos.unwrap_or(""),
                lang: d.lang,
            })
            .collect(),
        languages: lexicon.languages().join(", "),
        total_synsets: lexicon.len(),
    };
    match page.render() {
        Ok(html) => Html(html).into_response(),
        Err(err) => error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    }
}

/// Desambiguação via HTTP POST (sem streaming)
async fn disambiguate_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DisambiguationRequest>,
) -> Response {
    if req.text.trim().is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Texto vazio");
    }
    if req.word.trim().is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Palavra vazia");
    }

    // O pipeline é síncrono: roda fora do runtime
    let outcome = tokio::task::spawn_blocking(move || state.pipeline.analyze(&req)).await;
    match outcome {
        Ok(Ok(result)) => Json(result).into_response(),
        Ok(Err(err)) => {
            warn!("Desambiguação recusada: {}", err);
            lexicon_error_response(&err)
        }
        Err(err) => {
            warn!("Pipeline interrompido: {}", err);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Falha interna no pipeline")
        }
    }
}

/// Lista todos os sentidos de uma palavra
async fn senses_handler(
    State(state): State<Arc<AppState>>,
    Path(word): Path<String>,
    Query(query): Query<LangQuery>,
) -> Response {
    let lang = query.lang.as_deref().unwrap_or(DEFAULT_LANG);
    match state.pipeline.lexicon.lookup_senses(&word, lang) {
        Ok(senses) => Json(senses).into_response(),
        Err(err) => lexicon_error_response(&err),
    }
}

/// Retorna sentenças de demonstração
async fn demo_texts_handler() -> impl IntoResponse {
    Json(demo_sentences())
}

/// Upgrade HTTP → WebSocket
async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_websocket(socket, state))
}

/// Lógica do WebSocket: recebe um pedido JSON, executa o pipeline e envia os eventos
async fn handle_websocket(mut socket: WebSocket, state: Arc<AppState>) {
    info!("WebSocket conectado");

    while let Some(Ok(msg)) = socket.recv().await {
        match msg {
            Message::Text(text) => {
                let events = match serde_json::from_str::<DisambiguationRequest>(&text) {
                    Ok(req) if req.text.trim().is_empty() => vec![error_event("Texto vazio")],
                    Ok(req) if req.word.trim().is_empty() => vec![error_event("Palavra vazia")],
                    Ok(req) => stream_events(&state, req).await,
                    Err(err) => vec![error_event(format!("Pedido inválido: {err}"))],
                };

                for event in &events {
                    if let Ok(json) = serde_json::to_string(event) {
                        if socket.send(Message::Text(json)).await.is_err() {
                            return; // cliente desconectou
                        }
                        // Pequena pausa para animação visual (passo a passo)
                        tokio::time::sleep(tokio::time::Duration::from_millis(35)).await;
                    }
                }
            }
            Message::Close(_) => {
                info!("WebSocket desconectado");
                return;
            }
            Message::Ping(payload) => {
                let _ = socket.send(Message::Pong(payload)).await;
            }
            _ => {}
        }
    }
}

fn error_event(message: impl Into<String>) -> PipelineEvent {
    PipelineEvent::Error {
        message: message.into(),
    }
}

/// Executa o pipeline numa thread bloqueante e coleta os eventos emitidos.
async fn stream_events(state: &Arc<AppState>, request: DisambiguationRequest) -> Vec<PipelineEvent> {
    info!(
        "Desambiguando via WebSocket '{}' [{:?} | {}]: {} chars",
        request.word,
        request.pos,
        request.lang,
        request.text.len()
    );

    let (tx_std, rx_std) = std::sync::mpsc::channel::<PipelineEvent>();
    let state_for_thread = Arc::clone(state);
    let handle = tokio::task::spawn_blocking(move || {
        state_for_thread.pipeline.analyze_streaming(&request, tx_std);
    });
    let joined = handle.await;

    let mut events: Vec<PipelineEvent> = rx_std.try_iter().collect();
    if let Err(err) = joined {
        warn!("Pipeline interrompido: {}", err);
        events.push(error_event("Falha interna no pipeline"));
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use futures_util::{SinkExt, StreamExt};
    use std::time::Duration;
    use tokio_tungstenite::tungstenite::Message as WsMessage;
    use tower::ServiceExt;

    fn app() -> Router {
        router(Arc::new(AppState {
            pipeline: WsdPipeline::new(),
        }))
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_disambiguate_bank() {
        let response = app()
            .oneshot(post_json(
                "/disambiguate",
                serde_json::json!({
                    "text": "I went to the bank to deposit money.",
                    "word": "bank",
                    "pos": "n"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let value = body_json(response).await;
        assert_eq!(value["sense"]["name"], "depository_financial_institution.n.01");
        assert_eq!(value["candidates"].as_array().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn test_disambiguate_empty_text() {
        let response = app()
            .oneshot(post_json(
                "/disambiguate",
                serde_json::json!({ "text": "  ", "word": "bank" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_disambiguate_unsupported_language() {
        let response = app()
            .oneshot(post_json(
                "/disambiguate",
                serde_json::json!({ "text": "a bank", "word": "bank", "lang": "tlh" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_unknown_word_has_null_sense() {
        let response = app()
            .oneshot(post_json(
                "/disambiguate",
                serde_json::json!({ "text": "nothing to see", "word": "xyzzy" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_json(response).await["sense"].is_null());
    }

    #[tokio::test]
    async fn test_senses_endpoint() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/senses/banco?lang=por")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let value = body_json(response).await;
        assert_eq!(value.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_demo_texts_and_index() {
        let response = app()
            .oneshot(Request::builder().uri("/demo-texts").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(!body_json(response).await.as_array().unwrap().is_empty());

        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    /// Sobe o roteador numa porta livre de 127.0.0.1.
    async fn spawn_server() -> std::net::SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app()).await.unwrap();
        });
        addr
    }

    /// Envia um pedido pelo `/ws` e lê os eventos até `Done` ou `Error`.
    async fn ws_exchange(request: serde_json::Value) -> Vec<serde_json::Value> {
        let addr = spawn_server().await;
        let (mut socket, _) = tokio_tungstenite::connect_async(format!("ws://{addr}/ws"))
            .await
            .unwrap();
        socket.send(WsMessage::Text(request.to_string())).await.unwrap();

        let mut events = Vec::new();
        loop {
            let msg = tokio::time::timeout(Duration::from_secs(10), socket.next())
                .await
                .expect("servidor não respondeu a tempo")
                .expect("conexão encerrada")
                .unwrap();
            let WsMessage::Text(text) = msg else {
                continue;
            };
            let event: serde_json::Value = serde_json::from_str(&text).unwrap();
            let last = event["type"] == "Done" || event["type"] == "Error";
            events.push(event);
            if last {
                break;
            }
        }
        events
    }

    #[tokio::test]
    async fn test_ws_event_order() {
        let events = ws_exchange(serde_json::json!({
            "text": "I went to the bank to deposit money.",
            "word": "bank",
            "pos": "n"
        }))
        .await;

        let kinds: Vec<&str> = events.iter().map(|e| e["type"].as_str().unwrap()).collect();
        assert_eq!(kinds.first(), Some(&"TokenizationDone"));
        assert_eq!(kinds.get(1), Some(&"CandidatesFetched"));
        assert_eq!(kinds.last(), Some(&"Done"));
        let scored = &kinds[2..kinds.len() - 1];
        assert_eq!(scored.len(), 10);
        assert!(scored.iter().all(|k| *k == "CandidateScored"));

        let done = &events[events.len() - 1]["data"]["result"];
        assert_eq!(done["sense"]["name"], "depository_financial_institution.n.01");
    }

    #[tokio::test]
    async fn test_ws_empty_request_gets_error() {
        let events = ws_exchange(serde_json::json!({ "text": "   ", "word": "bank" })).await;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0]["type"], "Error");
        assert_eq!(events[0]["data"]["message"], "Texto vazio");

        let events = ws_exchange(serde_json::json!({ "text": "a bank", "word": "" })).await;
        assert_eq!(events[0]["data"]["message"], "Palavra vazia");
    }

    #[tokio::test]
    async fn test_ws_invalid_json_gets_error() {
        let events = ws_exchange(serde_json::json!("não é um pedido")).await;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0]["type"], "Error");
    }
}
