//! Stand-in for the `chip` ingress. Serves `GET /system` and records every request it sees.
use axum::{
    debug_handler,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::{
    atomic::{AtomicU16, Ordering},
    Arc, Mutex,
};
use tower_http::trace::TraceLayer;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
}

impl RecordedRequest {
    /// Header lookup, case-insensitive on the name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Shared handle to what the mock has received and how it answers.
#[derive(Debug, Clone)]
pub struct Recorder {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    status: Arc<AtomicU16>,
}

impl Default for Recorder {
    fn default() -> Self {
        Self {
            requests: Arc::new(Mutex::new(vec![])),
            status: Arc::new(AtomicU16::new(StatusCode::OK.as_u16())),
        }
    }
}

impl Recorder {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.lock().clone()
    }

    pub fn count(&self) -> usize {
        self.lock().len()
    }

    /// Status code returned for every following request.
    pub fn set_status(&self, status: u16) {
        self.status.store(status, Ordering::Relaxed);
    }

    fn record(&self, request: RecordedRequest) {
        self.lock().push(request);
    }

    fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status.load(Ordering::Relaxed))
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<RecordedRequest>> {
        self.requests.lock().unwrap_or_else(|err| err.into_inner())
    }
}

pub fn router(recorder: Recorder) -> Router {
    Router::new()
        .route("/system", get(system))
        .with_state(recorder)
        .layer(TraceLayer::new_for_http())
}

pub async fn run(addr: SocketAddr, recorder: Recorder) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router(recorder)).await?;
    Ok(())
}

/// Serve on an ephemeral local port in the background.
pub async fn spawn() -> anyhow::Result<(SocketAddr, Recorder)> {
    let recorder = Recorder::default();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let app = router(recorder.clone());
    tokio::spawn(async move {
        if let Err(err) = axum::serve(listener, app).await {
            tracing::error!("Mock service stopped: {err}");
        }
    });

    Ok((addr, recorder))
}

#[debug_handler]
async fn system(
    State(recorder): State<Recorder>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> StatusCode {
    let headers = headers
        .iter()
        .map(|(key, value)| {
            (
                key.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();

    recorder.record(RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        headers,
    });

    let status = recorder.status();
    debug!("MOCK SERVER ___ {status}");
    status
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_requests() {
        let (addr, recorder) = spawn().await.unwrap();

        let res = reqwest::Client::new()
            .get(format!("http://{addr}/system"))
            .header("Host", "chip.linuxtips.demo")
            .send()
            .await
            .unwrap();
        assert_eq!(res.status().as_u16(), 200);

        let requests = recorder.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].path, "/system");
        assert_eq!(requests[0].header("host"), Some("chip.linuxtips.demo"));
    }

    #[tokio::test]
    async fn test_configured_status() {
        let (addr, recorder) = spawn().await.unwrap();
        recorder.set_status(503);

        let res = reqwest::get(format!("http://{addr}/system")).await.unwrap();
        assert_eq!(res.status().as_u16(), 503);
        assert_eq!(recorder.count(), 1);
    }

    #[tokio::test]
    async fn test_unknown_path_not_recorded() {
        let (addr, recorder) = spawn().await.unwrap();

        let res = reqwest::get(format!("http://{addr}/other")).await.unwrap();
        assert_eq!(res.status().as_u16(), 404);
        assert_eq!(recorder.count(), 0);
    }
}
