use bookhive::api::{ApiError, CatalogClient, CatalogSource};
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

// ============================================================================
// Helper Functions
// ============================================================================

/// A catalog response body with the standard pagination envelope
fn envelope(books: serde_json::Value, total: i64) -> serde_json::Value {
    serde_json::json!({
        "data": books,
        "offset": 0,
        "limit": 10,
        "totalCount": total,
    })
}

fn book_json(id: &str, title: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "isbn": "978-0-452-28423-4",
        "title": title,
        "author": "Ursula K. Le Guin",
        "publication_year": 1969,
        "genre": "Science Fiction",
        "image_url": format!("https://covers.example.com/{id}.jpg"),
        "description": "A classic.",
    })
}

// ============================================================================
// Book Listing Tests
// ============================================================================

#[tokio::test]
async fn test_list_books_success_with_pagination_params() {
    let mock_server = MockServer::start().await;

    let body = envelope(
        serde_json::json!([book_json("1", "The Left Hand of Darkness")]),
        1,
    );

    Mock::given(method("GET"))
        .and(path("/books"))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let client = CatalogClient::new(mock_server.uri());
    let books = client.list_books(0, 12, None).await.unwrap();

    assert_eq!(books.len(), 1);
    assert_eq!(books[0].title, "The Left Hand of Darkness");
    assert_eq!(books[0].publication_year, 1969);
}

#[tokio::test]
async fn test_list_books_sends_search_param() {
    let mock_server = MockServer::start().await;

    let body = envelope(serde_json::json!([book_json("2", "Dune")]), 1);

    Mock::given(method("GET"))
        .and(path("/books"))
        .and(query_param("search", "dune"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let client = CatalogClient::new(mock_server.uri());
    let books = client.list_books(0, 10, Some("dune")).await.unwrap();

    assert_eq!(books.len(), 1);
    assert_eq!(books[0].id, "2");
}

#[tokio::test]
async fn test_list_books_empty_result_is_ok_not_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/books"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(serde_json::json!([]), 0)))
        .mount(&mock_server)
        .await;

    let client = CatalogClient::new(mock_server.uri());
    let books = client.list_books(0, 10, Some("zzzz")).await.unwrap();

    assert!(books.is_empty());
}

#[tokio::test]
async fn test_list_books_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/books"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal server error"))
        .mount(&mock_server)
        .await;

    let client = CatalogClient::new(mock_server.uri());
    let result = client.list_books(0, 10, None).await;

    assert!(matches!(result, Err(ApiError::Api { status: 500, .. })));
}

#[tokio::test]
async fn test_list_books_rejects_bare_array_body() {
    let mock_server = MockServer::start().await;

    // A body without the pagination envelope is a schema violation
    Mock::given(method("GET"))
        .and(path("/books"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([book_json("3", "Hyperion")])),
        )
        .mount(&mock_server)
        .await;

    let client = CatalogClient::new(mock_server.uri());
    let result = client.list_books(0, 10, None).await;

    assert!(matches!(result, Err(ApiError::Parse(_))));
}

#[tokio::test]
async fn test_list_books_network_failure() {
    // Port from a server that was dropped: connection refused. A pooled
    // server (`MockServer::start`) keeps its port open after drop, so use a
    // dedicated one that actually shuts down.
    let mock_server = MockServer::builder().start().await;
    let uri = mock_server.uri();
    drop(mock_server);

    let client = CatalogClient::new(uri);
    let result = client.list_books(0, 10, None).await;

    assert!(matches!(result, Err(ApiError::Network(_))));
}

// ============================================================================
// Book Detail Tests
// ============================================================================

#[tokio::test]
async fn test_book_details_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/books/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(book_json("42", "The Dispossessed")))
        .mount(&mock_server)
        .await;

    let client = CatalogClient::new(mock_server.uri());
    let book = client.book_details("42").await.unwrap();

    assert_eq!(book.id, "42");
    assert_eq!(book.title, "The Dispossessed");
    assert_eq!(book.description.as_deref(), Some("A classic."));
}

#[tokio::test]
async fn test_book_details_missing_description() {
    let mock_server = MockServer::start().await;

    let mut body = book_json("7", "Untitled Draft");
    body.as_object_mut().unwrap().remove("description");

    Mock::given(method("GET"))
        .and(path("/books/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let client = CatalogClient::new(mock_server.uri());
    let book = client.book_details("7").await.unwrap();

    assert_eq!(book.description, None);
}

#[tokio::test]
async fn test_book_details_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/books/nope"))
        .respond_with(ResponseTemplate::new(404).set_body_string("book not found"))
        .mount(&mock_server)
        .await;

    let client = CatalogClient::new(mock_server.uri());
    let result = client.book_details("nope").await;

    match result {
        Err(ApiError::Api { status, message }) => {
            assert_eq!(status, 404);
            assert!(message.contains("book not found"));
        }
        other => panic!("expected 404 Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_base_url_trailing_slash_is_normalized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/books/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(book_json("1", "Solaris")))
        .mount(&mock_server)
        .await;

    let client = CatalogClient::new(format!("{}/", mock_server.uri()));
    let book = client.book_details("1").await.unwrap();

    assert_eq!(book.title, "Solaris");
}
