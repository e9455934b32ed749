// tests/api_client.rs
//
// ApiClient against a one-shot HTTP stub on 127.0.0.1:0. The stub records
// the raw request and answers with a canned response.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;

use fashion_console::api::{ApiClient, ApiError};
use fashion_console::config::options::ApiOptions;
use fashion_console::model::{CrawlJob, SaleFilters, WatchListInput, WatchType};

struct Captured {
    request_line: String,
    headers: Vec<(String, String)>,
    body: String,
}

impl Captured {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter().find(|(k, _)| k.eq_ignore_ascii_case(name)).map(|(_, v)| v.as_str())
    }
}

/// Serve exactly one request, then hand back what was received.
fn stub(status: &str, body: &str) -> (String, mpsc::Receiver<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();
        let mut headers = Vec::new();
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            let line = line.trim_end();
            if line.is_empty() {
                break;
            }
            if let Some((k, v)) = line.split_once(':') {
                headers.push((k.trim().to_string(), v.trim().to_string()));
            }
        }
        let len = headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
            .and_then(|(_, v)| v.parse::<usize>().ok())
            .unwrap_or(0);
        let mut body = vec![0u8; len];
        reader.read_exact(&mut body).unwrap();

        let mut stream = stream;
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        tx.send(Captured {
            request_line: request_line.trim_end().to_string(),
            headers,
            body: String::from_utf8(body).unwrap(),
        })
        .unwrap();
    });

    (base, rx)
}

fn client(base: &str, token: Option<&str>) -> ApiClient {
    let opts = ApiOptions { base_url: base.to_string(), admin_token: token.map(String::from), timeout_secs: 5 };
    ApiClient::new(&opts).unwrap()
}

#[test]
fn get_builds_path_and_query_and_decodes() {
    let (base, rx) = stub("200 OK", r#"{"total": 42}"#);
    let api = client(&base, None);
    let filters = SaleFilters { gender: Some("men".into()), max_price: Some(200_000), ..Default::default() };

    let count = api.sale_count(&filters).unwrap();
    assert_eq!(count.total, 42);

    let req = rx.recv().unwrap();
    assert_eq!(req.request_line, "GET /products/sales-count?gender=men&max_price=200000 HTTP/1.1");
    assert_eq!(req.header("content-type"), Some("application/json"));
    assert!(req.header("user-agent").is_some_and(|ua| ua.starts_with("fashion_console/")));
    // public calls never carry the token
    assert_eq!(req.header("authorization"), None);
}

#[test]
fn post_sends_json_body_with_trailing_slash() {
    let (base, rx) = stub(
        "200 OK",
        r#"{"id": 9, "watch_type": "product_key", "watch_value": "nike-dunk", "notes": null}"#,
    );
    let api = client(&base, Some("secret"));
    let input = WatchListInput::product_key(" nike-dunk ", "").unwrap();

    let item = api.add_watchlist_item(&input).unwrap();
    assert_eq!(item.id, 9);
    assert_eq!(item.watch_type, WatchType::ProductKey);

    let req = rx.recv().unwrap();
    assert_eq!(req.request_line, "POST /watchlist/ HTTP/1.1");
    let sent: serde_json::Value = serde_json::from_str(&req.body).unwrap();
    assert_eq!(sent, serde_json::json!({ "watch_type": "product_key", "watch_value": "nike-dunk" }));
    assert_eq!(req.header("authorization"), None);
}

#[test]
fn delete_accepts_no_content() {
    let (base, rx) = stub("204 No Content", "");
    let api = client(&base, None);

    api.delete_purchase(5).unwrap();
    assert_eq!(rx.recv().unwrap().request_line, "DELETE /purchases/5 HTTP/1.1");
}

#[test]
fn error_status_maps_to_http_error() {
    let (base, rx) = stub("404 Not Found", r#"{"detail": "not found"}"#);
    let api = client(&base, None);

    let err = api.price_comparison("missing key").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "API error 404: /products/compare/missing%20key");
    rx.recv().unwrap();
}

#[test]
fn admin_calls_send_bearer_and_prefix_errors() {
    let (base, rx) = stub("403 Forbidden", r#"{"detail": "bad token"}"#);
    let api = client(&base, Some("s3cret"));

    let err = api.trigger_crawl(CrawlJob::Drops, true).unwrap_err();
    assert_eq!(err.status(), Some(403));
    assert_eq!(err.to_string(), "ADMIN API 403: /admin/crawl-trigger?job=drops&dry_run=true");

    let req = rx.recv().unwrap();
    assert!(req.request_line.starts_with("POST /admin/crawl-trigger?job=drops&dry_run=true "));
    assert_eq!(req.header("authorization"), Some("Bearer s3cret"));
}

#[test]
fn admin_patch_sends_null_to_clear() {
    let (base, rx) = stub("200 OK", r#"{"ok": true, "id": 3, "instagram_url": null}"#);
    let api = client(&base, Some("t"));

    let res = api.patch_channel_instagram(3, Some("   ")).unwrap();
    assert_eq!(res.instagram_url, None);

    let req = rx.recv().unwrap();
    assert_eq!(req.request_line, "PATCH /admin/channels/3/instagram HTTP/1.1");
    assert_eq!(req.body, r#"{"instagram_url":null}"#);
}

#[test]
fn admin_without_token_fails_before_sending() {
    // nothing listens on this port; MissingToken must come first
    let api = client("http://127.0.0.1:9", None);
    assert!(matches!(api.admin_stats(), Err(ApiError::MissingToken)));
}

#[test]
fn undecodable_body_reports_the_path() {
    let (base, rx) = stub("200 OK", "<html>oops</html>");
    let api = client(&base, None);

    let err = api.channels().unwrap_err();
    assert!(matches!(err, ApiError::Decode { ref path, .. } if path == "/channels/"));
    rx.recv().unwrap();
}

#[test]
fn invalid_base_url_is_rejected() {
    let opts = ApiOptions { base_url: "not a url".into(), ..ApiOptions::default() };
    assert!(matches!(ApiClient::new(&opts), Err(ApiError::InvalidUrl(_))));
}
