//! TMDB API client tests
//!
//! Tests genre list, trending, discovery query composition, search and
//! error handling against a mock server.

use mockito::{Matcher, Server};
use movietui::api::{DiscoverQuery, TmdbClient};
use movietui::models::SortBy;

// =============================================================================
// Genre Tests
// =============================================================================

#[tokio::test]
async fn test_genres_parses_list() {
    let mut server = Server::new_async().await;

    let mock_response = r#"{
        "genres": [
            {"id": 28, "name": "Action"},
            {"id": 35, "name": "Comedy"},
            {"id": 18, "name": "Drama"}
        ]
    }"#;

    let mock = server
        .mock("GET", "/genre/movie/list")
        .match_query(Matcher::UrlEncoded("api_key".into(), "test_key".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(mock_response)
        .create_async()
        .await;

    let client = TmdbClient::with_base_url("test_key", server.url());
    let genres = client.genres().await.unwrap();

    mock.assert_async().await;

    assert_eq!(genres.len(), 3);
    assert_eq!(genres[0].id, 28);
    assert_eq!(genres[0].name, "Action");
    // Response order is preserved
    assert_eq!(genres[2].name, "Drama");
}

// =============================================================================
// Trending Tests
// =============================================================================

#[tokio::test]
async fn test_trending_parses_results() {
    let mut server = Server::new_async().await;

    let mock_response = r#"{
        "page": 1,
        "results": [
            {
                "id": 414906,
                "title": "The Batman",
                "overview": "Batman ventures into Gotham",
                "poster_path": "/74xTEgt7R36Fpooo50r9T25onhq.jpg",
                "vote_average": 7.8
            },
            {
                "id": 157336,
                "title": "Interstellar",
                "overview": "Space epic",
                "poster_path": "/gEU2QniE6E77NI6lCU6MxlNBvIx.jpg",
                "vote_average": 8.4
            }
        ],
        "total_results": 2,
        "total_pages": 1
    }"#;

    let mock = server
        .mock("GET", "/trending/movie/day")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(mock_response)
        .create_async()
        .await;

    let client = TmdbClient::with_base_url("test_key", server.url());
    let movies = client.trending_today().await.unwrap();

    mock.assert_async().await;

    assert_eq!(movies.len(), 2);
    assert_eq!(movies[0].id, 414906);
    assert_eq!(movies[0].title, "The Batman");
    assert!((movies[0].vote_average - 7.8).abs() < 0.01);
    assert_eq!(movies[1].title, "Interstellar");
}

// =============================================================================
// Discover Tests
// =============================================================================

#[tokio::test]
async fn test_discover_sends_filter_params() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/discover/movie")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("with_genres".into(), "28".into()),
            Matcher::UrlEncoded("primary_release_year".into(), "2019".into()),
            Matcher::UrlEncoded("sort_by".into(), "vote_average.desc".into()),
            Matcher::UrlEncoded("api_key".into(), "test_key".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"page": 1, "results": []}"#)
        .create_async()
        .await;

    let client = TmdbClient::with_base_url("test_key", server.url());
    let query = DiscoverQuery {
        page: None,
        genre: Some(28),
        year: Some(2019),
        sort: SortBy::Rating,
    };
    let result = client.discover(&query).await;

    mock.assert_async().await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_discover_omits_sentinel_params() {
    let mut server = Server::new_async().await;

    // With genre/year at their sentinels and only a sort order, the query
    // string carries exactly the sort and the key, nothing else.
    let mock = server
        .mock("GET", "/discover/movie")
        .match_query(Matcher::Exact(
            "sort_by=release_date.desc&api_key=test_key".into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"page": 1, "results": []}"#)
        .create_async()
        .await;

    let client = TmdbClient::with_base_url("test_key", server.url());
    let query = DiscoverQuery {
        page: None,
        genre: None,
        year: None,
        sort: SortBy::Latest,
    };
    let result = client.discover(&query).await;

    mock.assert_async().await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_discover_page_param() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/discover/movie")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "7".into()),
            Matcher::UrlEncoded("api_key".into(), "test_key".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"page": 7, "results": []}"#)
        .create_async()
        .await;

    let client = TmdbClient::with_base_url("test_key", server.url());
    let result = client.discover(&DiscoverQuery::page(7)).await;

    mock.assert_async().await;
    assert!(result.is_ok());
}

// =============================================================================
// Search Tests
// =============================================================================

#[tokio::test]
async fn test_search_urlencodes_query() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/search/movie")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("query".into(), "the batman".into()),
            Matcher::UrlEncoded("api_key".into(), "test_key".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"page": 1, "results": []}"#)
        .create_async()
        .await;

    let client = TmdbClient::with_base_url("test_key", server.url());
    let result = client.search("the batman").await;

    mock.assert_async().await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_search_normalizes_missing_fields() {
    let mut server = Server::new_async().await;

    let mock_response = r#"{
        "page": 1,
        "results": [
            {
                "id": 1,
                "title": "Bare Movie",
                "overview": null,
                "poster_path": null,
                "vote_average": null
            }
        ]
    }"#;

    let mock = server
        .mock("GET", "/search/movie")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(mock_response)
        .create_async()
        .await;

    let client = TmdbClient::with_base_url("test_key", server.url());
    let movies = client.search("bare").await.unwrap();

    mock.assert_async().await;

    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].overview, "");
    assert_eq!(movies[0].poster_path, None);
    assert_eq!(movies[0].vote_average, 0.0);
}

#[tokio::test]
async fn test_absent_result_list_is_empty() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/search/movie")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"page": 1}"#)
        .create_async()
        .await;

    let client = TmdbClient::with_base_url("test_key", server.url());
    let movies = client.search("nothing").await.unwrap();

    mock.assert_async().await;
    assert!(movies.is_empty());
}

// =============================================================================
// Error Handling Tests
// =============================================================================

#[tokio::test]
async fn test_handles_not_found() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/genre/movie/list")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(r#"{"success": false, "status_code": 34}"#)
        .create_async()
        .await;

    let client = TmdbClient::with_base_url("test_key", server.url());
    let result = client.genres().await;

    mock.assert_async().await;

    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(
        err.to_string().to_lowercase().contains("not found")
            || err
                .downcast_ref::<movietui::api::tmdb::TmdbError>()
                .is_some()
    );
}

#[tokio::test]
async fn test_handles_server_error() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/trending/movie/day")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("Internal Server Error")
        .create_async()
        .await;

    let client = TmdbClient::with_base_url("test_key", server.url());
    let result = client.trending_today().await;

    mock.assert_async().await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_handles_invalid_json() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/search/movie")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("not valid json {{{")
        .create_async()
        .await;

    let client = TmdbClient::with_base_url("test_key", server.url());
    let result = client.search("test").await;

    mock.assert_async().await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_single_attempt_no_retry() {
    let mut server = Server::new_async().await;

    // A failing endpoint must be hit exactly once
    let mock = server
        .mock("GET", "/discover/movie")
        .match_query(Matcher::Any)
        .with_status(429)
        .expect(1)
        .create_async()
        .await;

    let client = TmdbClient::with_base_url("test_key", server.url());
    let result = client.discover(&DiscoverQuery::page(1)).await;

    mock.assert_async().await;
    assert!(result.is_err());
}
