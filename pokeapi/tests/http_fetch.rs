//! Client tests against a throwaway local HTTP server.
//!
//! Each test binds a listener on an ephemeral port, answers exactly one
//! request with a canned response, and reports the request line it saw.

use pokeapi::{AttributeKind, Error, PokeApi};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

const PIKACHU: &str = r#"{
    "id": 25,
    "name": "pikachu",
    "sprites": { "front_default": "https://img.example/sprites/25.png", "other": {} },
    "types": [ { "slot": 1, "type": { "name": "electric" } } ],
    "stats": [
        { "base_stat": 35, "stat": { "name": "hp" } },
        { "base_stat": 55, "stat": { "name": "attack" } },
        { "base_stat": 40, "stat": { "name": "defense" } },
        { "base_stat": 50, "stat": { "name": "special-attack" } },
        { "base_stat": 50, "stat": { "name": "special-defense" } },
        { "base_stat": 90, "stat": { "name": "speed" } }
    ]
}"#;

/// Serve one canned response. Returns the base URL and the request line.
async fn serve_once(
    status_line: &'static str,
    body: &'static str,
) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");

        let mut request = Vec::new();
        let mut chunk = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut chunk).await.expect("read");
            if n == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..n]);
        }
        let request = String::from_utf8_lossy(&request);
        let request_line = request.lines().next().unwrap_or_default().to_string();
        let _ = tx.send(request_line);

        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.expect("write");
        let _ = socket.shutdown().await;
    });

    (format!("http://{addr}/api/v2/pokemon"), rx)
}

#[tokio::test]
async fn test_fetch_entity_success() {
    let (base, request_line) = serve_once("200 OK", PIKACHU).await;
    let api = PokeApi::new().unwrap().with_entity_url(base);

    let record = api.fetch_entity(25).await.expect("entity");

    assert_eq!(request_line.await.unwrap(), "GET /api/v2/pokemon/25 HTTP/1.1");
    assert_eq!(record.name, "pikachu");
    assert_eq!(record.categories, vec!["electric"]);
    assert_eq!(record.attributes.get(AttributeKind::Speed), 90);
    // No official artwork in the body
    assert_eq!(record.portrait_url(), Some("https://img.example/sprites/25.png"));
}

#[tokio::test]
async fn test_fetch_entity_not_found() {
    let (base, _) = serve_once("404 Not Found", "Not Found").await;
    let api = PokeApi::new().unwrap().with_entity_url(base);

    let err = api.fetch_entity(999_999).await.unwrap_err();

    match err {
        Error::NotFoundOrService { status, ref message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Not Found");
        }
        other => panic!("expected NotFoundOrService, got {other:?}"),
    }
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_fetch_entity_service_error() {
    let (base, _) = serve_once("503 Service Unavailable", "").await;
    let api = PokeApi::new().unwrap().with_entity_url(base);

    let err = api.fetch_entity(1).await.unwrap_err();
    assert!(matches!(err, Error::NotFoundOrService { status: 503, .. }));
}

#[tokio::test]
async fn test_fetch_entity_malformed_body() {
    let body = r#"{ "id": 1, "name": "bulbasaur", "sprites": {} }"#;
    let (base, _) = serve_once("200 OK", body).await;
    let api = PokeApi::new().unwrap().with_entity_url(base);

    let err = api.fetch_entity(1).await.unwrap_err();
    assert!(matches!(err, Error::Malformed(_)));
}

#[tokio::test]
async fn test_fetch_entity_connection_refused() {
    // Grab a free port, then close it so nothing is listening there
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = PokeApi::new()
        .unwrap()
        .with_entity_url(format!("http://{addr}/api/v2/pokemon"));

    let err = api.fetch_entity(1).await.unwrap_err();
    assert!(matches!(err, Error::Network(_)));
}

#[tokio::test]
async fn test_fetch_species() {
    let (base, request_line) = serve_once(
        "200 OK",
        r#"{
            "id": 25,
            "genera": [ { "genus": "Mouse Pokémon", "language": { "name": "en" } } ],
            "flavor_text_entries": [
                { "flavor_text": "When several of\nthese POKéMON gather", "language": { "name": "en" } }
            ]
        }"#,
    )
    .await;
    let api = PokeApi::new().unwrap().with_species_url(base);

    let species = api.fetch_species(25).await.expect("species");

    assert_eq!(request_line.await.unwrap(), "GET /api/v2/pokemon/25 HTTP/1.1");
    assert_eq!(species.genus.as_deref(), Some("Mouse Pokémon"));
    assert_eq!(
        species.flavor_text.as_deref(),
        Some("When several of these POKéMON gather")
    );
}
