//! 真实监听端口上的端到端测试

use std::net::SocketAddr;

use reqwest::{redirect::Policy, Client, Method, StatusCode};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use xhrtesting::infrastructure::http::{AppState, FixtureSettings, HttpServer, ServerConfig};
use xhrtesting::infrastructure::SharedRng;

struct TestServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestServer {
    async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();

        let state = AppState::new(SharedRng::seeded(7), FixtureSettings::default());
        let server = HttpServer::new(ServerConfig::new("127.0.0.1", addr.port()), state);
        tokio::spawn(server.serve(listener, async move {
            let _ = rx.await;
        }));

        Self {
            addr,
            shutdown: Some(tx),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

fn no_redirect_client() -> Client {
    Client::builder().redirect(Policy::none()).build().unwrap()
}

#[tokio::test]
async fn test_long_body_over_the_wire() {
    let server = TestServer::start().await;

    let response = reqwest::get(server.url("/long/body/100000")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.content_length(), Some(100_000));

    let body = response.bytes().await.unwrap();
    assert_eq!(body.len(), 100_000);
    assert!(body.iter().all(|b| *b == b'x'));

    let response = reqwest::get(server.url("/long/body/-1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_redirect_chain() {
    let server = TestServer::start().await;

    let response = no_redirect_client()
        .get(server.url("/status/302"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()["location"], "/to/302");

    // 默认客户端会跟随重定向
    let response = reqwest::get(server.url("/status/301")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.url().path(), "/to/301");
    assert_eq!(response.text().await.unwrap(), "301");
}

#[tokio::test]
async fn test_cookies_over_the_wire() {
    let server = TestServer::start().await;

    let response = reqwest::get(server.url("/cookie/random/3")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let names: Vec<String> = response.cookies().map(|c| c.name().to_string()).collect();
    assert_eq!(names, ["Random-Cookie-1", "Random-Cookie-2", "Random-Cookie-3"]);

    for cookie in response.cookies() {
        assert_eq!(cookie.path(), Some("/"));
        assert!(cookie.expires().is_some());
        assert!(cookie.value().parse::<u32>().unwrap() < 1_000_000);
    }
}

#[tokio::test]
async fn test_preflight_over_the_wire() {
    let server = TestServer::start().await;

    let response = Client::new()
        .request(Method::OPTIONS, server.url("/json/random"))
        .header("Origin", "https://client.example")
        .header("Access-Control-Request-Method", "POST")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
    assert_eq!(response.headers()["access-control-max-age"], "300");
    assert!(response.text().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_client_ip_header_does_not_break_requests() {
    let server = TestServer::start().await;

    let response = Client::new()
        .get(server.url("/ping"))
        .header("CF-Connecting-IP", "203.0.113.9")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "pong");
}

#[tokio::test]
async fn test_put_after_preflight() {
    let server = TestServer::start().await;
    let client = Client::new();

    let preflight = client
        .request(Method::OPTIONS, server.url("/status/201"))
        .header("Origin", "https://client.example")
        .header("Access-Control-Request-Method", "PUT")
        .send()
        .await
        .unwrap();
    assert_eq!(preflight.status(), StatusCode::OK);

    let response = client
        .put(server.url("/status/201"))
        .header("Origin", "https://client.example")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
    assert_eq!(response.text().await.unwrap(), "Created");
}
