use std::net::SocketAddr;
use std::sync::Arc;

use precisionworks::fixtures::Fixtures;
use precisionworks::server::Server;
use precisionworks::store::{Catalog, Latency};
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::sync::oneshot;

struct Response {
    status: u16,
    headers: String,
    body: String,
}

impl Response {
    fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

async fn start() -> (SocketAddr, oneshot::Sender<()>) {
    let catalog = Arc::new(Catalog::new(Fixtures::bundled().unwrap(), Latency::none()));
    let server = Server::bind("127.0.0.1:0", catalog).await.unwrap();
    let addr = server.local_addr();
    let (stop, stopped) = oneshot::channel::<()>();
    tokio::spawn(server.run_until(async {
        let _ = stopped.await;
    }));
    (addr, stop)
}

async fn send(addr: SocketAddr, method: &str, path: &str, body: Option<&str>) -> Response {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let body = body.unwrap_or("");
    let request = format!(
        "{} {} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n{}",
        method,
        path,
        body.len(),
        body
    );
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.unwrap();
    let raw = String::from_utf8(raw).unwrap();

    let (head, body) = raw.split_once("\r\n\r\n").unwrap();
    let status = head
        .split_whitespace()
        .nth(1)
        .and_then(|code| code.parse().ok())
        .unwrap();
    Response {
        status,
        headers: head.to_ascii_lowercase(),
        body: body.to_string(),
    }
}

async fn get(addr: SocketAddr, path: &str) -> Response {
    send(addr, "GET", path, None).await
}

#[tokio::test]
async fn test_health() {
    let (addr, _stop) = start().await;
    let response = get(addr, "/health").await;
    assert_eq!(response.status, 200);
    assert_eq!(response.json()["status"], "ok");
}

#[tokio::test]
async fn test_product_lookup_errors() {
    let (addr, _stop) = start().await;

    let response = get(addr, "/api/products/1").await;
    assert_eq!(response.status, 200);
    assert_eq!(response.json()["name"], "Aerospace Bracket Assembly");

    let response = get(addr, "/api/products/999").await;
    assert_eq!(response.status, 404);
    let body = response.json();
    assert_eq!(body["error"], "Product not found");
    assert_eq!(body["code"], "NOT_FOUND");

    let response = get(addr, "/api/products/abc").await;
    assert_eq!(response.status, 400);
    assert_eq!(response.json()["code"], "INVALID_ID");
}

#[tokio::test]
async fn test_capability_crud() {
    let (addr, _stop) = start().await;

    let created = send(
        addr,
        "POST",
        "/api/capabilities",
        Some(r#"{"name": "Wire EDM", "description": "Fine-wire cutting", "capacity": "2 machines"}"#),
    )
    .await;
    assert_eq!(created.status, 201);
    assert_eq!(created.json()["Id"], 7);

    let updated = send(
        addr,
        "PATCH",
        "/api/capabilities/7",
        Some(r#"{"capacity": "3 machines"}"#),
    )
    .await;
    assert_eq!(updated.status, 200);
    let body = updated.json();
    assert_eq!(body["capacity"], "3 machines");
    assert_eq!(body["name"], "Wire EDM");

    let deleted = send(addr, "DELETE", "/api/capabilities/7", None).await;
    assert_eq!(deleted.status, 200);
    assert_eq!(get(addr, "/api/capabilities/7").await.status, 404);
    assert_eq!(get(addr, "/api/capabilities").await.json().as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_spec_sheet_download() {
    let (addr, _stop) = start().await;
    let response = get(addr, "/api/products/1/specifications.txt").await;
    assert_eq!(response.status, 200);
    assert!(response.headers.contains("content-type: text/plain; charset=utf-8"));
    assert!(
        response
            .headers
            .contains("content-disposition: attachment; filename=\"aerospace_bracket_assembly_specifications.txt\"")
    );
    assert!(
        response
            .body
            .starts_with("Aerospace Bracket Assembly - Technical Specifications\n")
    );
}

#[tokio::test]
async fn test_inquiry_validation_and_submit() {
    let (addr, _stop) = start().await;

    let rejected = send(addr, "POST", "/api/inquiries", Some("{}")).await;
    assert_eq!(rejected.status, 422);
    let body = rejected.json();
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["fields"]["email"], "Email is required");
    assert_eq!(get(addr, "/api/inquiries").await.json().as_array().unwrap().len(), 0);

    let accepted = send(
        addr,
        "POST",
        "/api/inquiries",
        Some(
            r#"{"inquiryType": "quote-request", "companyName": "Acme Aerospace",
                "contactName": "Dana Lee", "email": "dana@acme.aero",
                "message": "Need 500 brackets"}"#,
        ),
    )
    .await;
    assert_eq!(accepted.status, 201);
    let body = accepted.json();
    assert_eq!(body["Id"], 1);
    assert_eq!(body["companyName"], "Acme Aerospace");
    assert!(body["timestamp"].is_string());

    assert_eq!(get(addr, "/api/inquiries/1").await.status, 200);
}

#[tokio::test]
async fn test_blog_queries() {
    let (addr, _stop) = start().await;

    let featured = get(addr, "/api/blog/featured").await.json();
    let featured = featured.as_array().unwrap();
    assert_eq!(featured.len(), 3);
    assert!(featured.iter().all(|post| post["featured"] == true));

    let recent = get(addr, "/api/blog/recent?limit=2").await.json();
    let dates: Vec<&str> = recent
        .as_array()
        .unwrap()
        .iter()
        .map(|post| post["publishedAt"].as_str().unwrap())
        .collect();
    assert_eq!(dates, ["2024-05-02", "2024-04-05"]);

    let quality = get(addr, "/api/blog?category=Quality").await.json();
    assert!(
        quality
            .as_array()
            .unwrap()
            .iter()
            .all(|post| post["category"] == "Quality")
    );
}

#[tokio::test]
async fn test_products_page() {
    let (addr, _stop) = start().await;

    let page = get(addr, "/products?category=Medical").await.json();
    let products = page["products"].as_array().unwrap();
    assert_eq!(products.len(), 2);
    assert!(products.iter().all(|p| p["category"] == "Medical"));
    assert_eq!(page["total"], 8);
    assert_eq!(page["summary"], "Showing 2 of 8 products");
    assert_eq!(page["filtersActive"], true);
    assert!(page.get("detail").is_none());

    let page = get(addr, "/products?selected=1").await.json();
    assert_eq!(page["detail"]["product"]["Id"], 1);
    assert_eq!(
        page["detail"]["specSheetUrl"],
        "/api/products/1/specifications.txt"
    );
    assert_eq!(page["detail"]["quoteUrl"], "/contact");

    let page = get(addr, "/products?search=zzz").await.json();
    assert_eq!(page["products"].as_array().unwrap().len(), 0);
    assert_eq!(page["empty"]["title"], "No products found");
}

#[tokio::test]
async fn test_insight_pages() {
    let (addr, _stop) = start().await;

    let page = get(addr, "/insights?category=Company%20News").await.json();
    assert_eq!(page["count"], "2 posts found");

    let page = get(addr, "/insights/1").await.json();
    assert_eq!(page["post"]["Id"], 1);
    let body = page["body"].as_array().unwrap();
    assert!(!body.is_empty());
    assert!(body.iter().all(|block| block["type"].is_string()));
    let related = page["related"].as_array().unwrap();
    assert_eq!(related.len(), 1);
    assert_eq!(related[0]["Id"], 5);

    let missing = get(addr, "/insights/99").await;
    assert_eq!(missing.status, 404);
    assert_eq!(missing.json()["error"], "Blog post not found");
}

#[tokio::test]
async fn test_unknown_page() {
    let (addr, _stop) = start().await;
    let response = get(addr, "/warehouse").await;
    assert_eq!(response.status, 404);
    let body = response.json();
    assert_eq!(body["code"], "PAGE_NOT_FOUND");
    assert_eq!(body["path"], "/warehouse");
}
