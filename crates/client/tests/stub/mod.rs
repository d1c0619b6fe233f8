use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// Canned answer for one API path
#[derive(Debug, Clone)]
pub struct StubRoute {
    pub path: &'static str,
    pub status: u16,
    pub body: String,
    pub delay: Option<Duration>,
}

impl StubRoute {
    pub fn json(path: &'static str, body: serde_json::Value) -> Self {
        Self {
            path,
            status: 200,
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn raw(path: &'static str, status: u16, body: &str) -> Self {
        Self {
            path,
            status,
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn slow(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Path and query exactly as received
    pub url: String,
    pub cache_control: Option<String>,
}

impl RecordedRequest {
    /// Decoded query pairs
    pub fn query(&self) -> Vec<(String, String)> {
        let parsed = reqwest::Url::parse(&format!("http://stub{}", self.url)).expect("parse url");
        parsed
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }
}

/// In-process stand-in for the content store
pub struct ContentStoreStub {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    shutdown_tx: Option<mpsc::Sender<()>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl ContentStoreStub {
    pub fn spawn(routes: Vec<StubRoute>) -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("start content store stub");
        let base_url = format!("http://{}", server.server_addr());

        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();

        let handle = thread::spawn(move || {
            loop {
                if shutdown_rx.try_recv().is_ok() {
                    break;
                }

                let request = match server.recv_timeout(Duration::from_millis(50)) {
                    Ok(Some(req)) => req,
                    Ok(None) => continue,
                    Err(_) => break,
                };

                let url = request.url().to_string();
                let cache_control = request
                    .headers()
                    .iter()
                    .find(|h| h.field.equiv("Cache-Control"))
                    .map(|h| h.value.as_str().to_string());
                recorded.lock().unwrap().push(RecordedRequest {
                    url: url.clone(),
                    cache_control,
                });

                let path = url.split('?').next().unwrap_or_default();
                let Some(route) = routes.iter().find(|r| r.path == path) else {
                    let _ = request.respond(
                        tiny_http::Response::from_string("not found").with_status_code(404),
                    );
                    continue;
                };

                if let Some(delay) = route.delay {
                    thread::sleep(delay);
                }

                let response = tiny_http::Response::from_string(route.body.clone())
                    .with_status_code(route.status)
                    .with_header(
                        "Content-Type: application/json"
                            .parse::<tiny_http::Header>()
                            .expect("header"),
                    );
                let _ = request.respond(response);
            }
        });

        Self {
            base_url,
            requests,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for ContentStoreStub {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
