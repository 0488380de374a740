#![allow(dead_code)]

use std::sync::mpsc;
use std::time::Duration;

use http_body_util::BodyExt;

/// One request as the controller saw it
#[derive(Debug)]
pub struct Received {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: serde_json::Value,
}

/// Stand-in for the BLE / VibeKeys controller: accepts everything, answers
/// `{"status":"ok"}` and records what it got.
pub struct MockController {
    pub url: String,
    rx: mpsc::Receiver<Received>,
}

impl MockController {
    pub fn start() -> Self {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.set_nonblocking(true).unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::from_std(listener).unwrap();
                loop {
                    let Ok((stream, _)) = listener.accept().await else {
                        continue;
                    };
                    let tx = tx.clone();
                    tokio::spawn(async move {
                        let service = hyper::service::service_fn(move |r| record(r, tx.clone()));
                        let _ = hyper::server::conn::http1::Builder::new()
                            .serve_connection(hyper_util::rt::TokioIo::new(stream), service)
                            .await;
                    });
                }
            });
        });

        Self { url, rx }
    }

    /// Next recorded request, waiting long enough for a detached delivery
    pub fn next(&self) -> Received {
        self.rx
            .recv_timeout(Duration::from_secs(10))
            .expect("controller received no request")
    }

    /// True when nothing arrives for `wait`
    pub fn quiet_for(&self, wait: Duration) -> bool {
        self.rx.recv_timeout(wait).is_err()
    }
}

async fn record(
    r: hyper::Request<hyper::body::Incoming>,
    tx: mpsc::Sender<Received>,
) -> Result<hyper::Response<http_body_util::Full<hyper::body::Bytes>>, hyper::Error> {
    let method = r.method().to_string();
    let path = r.uri().path().to_string();
    let content_type = r
        .headers()
        .get(hyper::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = r.into_body().collect().await?.to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);

    let _ = tx.send(Received {
        method,
        path,
        content_type,
        body,
    });

    Ok(hyper::Response::new(http_body_util::Full::new(
        hyper::body::Bytes::from_static(b"{\"status\":\"ok\"}"),
    )))
}

/// A URL nothing is listening on
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// A listener that completes the TCP handshake but never answers. Keep the
/// returned listener alive for as long as the test needs the silence.
pub fn silent_controller() -> (std::net::TcpListener, String) {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    (listener, url)
}
