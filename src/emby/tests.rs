use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::{fetch_report, FetchError, LibraryStat};

const API_KEY: &str = "secret-token";

async fn mount_system_info(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/System/Info"))
        .and(header("X-Emby-Token", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ServerName": "Home",
            "Version": "4.8.0",
            "OperatingSystemDisplayName": "Linux",
            "Id": "ignored"
        })))
        .mount(server)
        .await;
}

async fn mount_folders(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/Library/VirtualFolders"))
        .and(header("X-Emby-Token", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "Name": "Movies", "ItemId": "lib-movies", "CollectionType": "movies" },
            { "Name": "Shows", "ItemId": "lib-shows", "CollectionType": "tvshows" }
        ])))
        .mount(server)
        .await;
}

async fn mount_items(server: &MockServer, parent_id: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/Items"))
        .and(header("X-Emby-Token", API_KEY))
        .and(query_param("ParentId", parent_id))
        .and(query_param("Recursive", "true"))
        .and(query_param("IncludeItemTypes", "Movie,Series,MusicAlbum"))
        .and(query_param("Fields", "ParentId"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn fetches_server_info_and_library_counts_in_server_order() {
    let server = MockServer::start().await;
    mount_system_info(&server).await;
    mount_folders(&server).await;
    mount_items(&server, "lib-movies", json!({ "TotalRecordCount": 120, "Items": [] })).await;
    mount_items(&server, "lib-shows", json!({ "TotalRecordCount": 45, "Items": [] })).await;

    let report = fetch_report(&server.uri(), API_KEY, None)
        .await
        .expect("fetch report");

    assert_eq!(report.server.name.as_deref(), Some("Home"));
    assert_eq!(report.server.version.as_deref(), Some("4.8.0"));
    assert_eq!(report.server.os_name.as_deref(), Some("Linux"));
    assert_eq!(
        report.libraries,
        vec![
            LibraryStat {
                name: Some("Movies".to_string()),
                item_count: 120,
            },
            LibraryStat {
                name: Some("Shows".to_string()),
                item_count: 45,
            },
        ]
    );
}

#[tokio::test]
async fn trailing_slash_on_base_url_is_tolerated() {
    let server = MockServer::start().await;
    mount_system_info(&server).await;
    mount_folders(&server).await;
    mount_items(&server, "lib-movies", json!({ "TotalRecordCount": 1 })).await;
    mount_items(&server, "lib-shows", json!({ "TotalRecordCount": 2 })).await;

    let base_url = format!("{}/", server.uri());
    let report = fetch_report(&base_url, API_KEY, None)
        .await
        .expect("fetch report");

    assert_eq!(report.libraries.len(), 2);
}

#[tokio::test]
async fn missing_record_count_defaults_to_zero() {
    let server = MockServer::start().await;
    mount_system_info(&server).await;
    mount_folders(&server).await;
    mount_items(&server, "lib-movies", json!({ "Items": [] })).await;
    mount_items(&server, "lib-shows", json!({ "TotalRecordCount": null })).await;

    let report = fetch_report(&server.uri(), API_KEY, None)
        .await
        .expect("fetch report");

    assert!(report.libraries.iter().all(|library| library.item_count == 0));
}

#[tokio::test]
async fn missing_server_fields_stay_absent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/System/Info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/Library/VirtualFolders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let report = fetch_report(&server.uri(), API_KEY, None)
        .await
        .expect("fetch report");

    assert_eq!(report.server.name, None);
    assert_eq!(report.server.version, None);
    assert_eq!(report.server.os_name, None);
    assert!(report.libraries.is_empty());
}

#[tokio::test]
async fn library_without_id_is_counted_as_zero_without_a_request() {
    let server = MockServer::start().await;
    mount_system_info(&server).await;
    Mock::given(method("GET"))
        .and(path("/Library/VirtualFolders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "Name": "Orphan" }])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/Items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "TotalRecordCount": 9 })))
        .expect(0)
        .mount(&server)
        .await;

    let report = fetch_report(&server.uri(), API_KEY, None)
        .await
        .expect("fetch report");

    assert_eq!(report.libraries.len(), 1);
    assert_eq!(report.libraries[0].item_count, 0);
}

#[tokio::test]
async fn failing_item_count_fails_the_whole_fetch() {
    let server = MockServer::start().await;
    mount_system_info(&server).await;
    mount_folders(&server).await;
    mount_items(&server, "lib-movies", json!({ "TotalRecordCount": 120 })).await;
    Mock::given(method("GET"))
        .and(path("/Items"))
        .and(query_param("ParentId", "lib-shows"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let error = fetch_report(&server.uri(), API_KEY, None)
        .await
        .expect_err("partial data must not be returned");

    assert!(matches!(
        error,
        FetchError::Status {
            endpoint: "/Items",
            ..
        }
    ));
    assert_eq!(error.code(), "EMBY_BAD_STATUS");
}

#[tokio::test]
async fn rejected_token_fails_on_first_phase() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/System/Info"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/Library/VirtualFolders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let error = fetch_report(&server.uri(), "wrong", None)
        .await
        .expect_err("unauthorized must fail");

    assert!(matches!(
        error,
        FetchError::Status {
            endpoint: "/System/Info",
            ..
        }
    ));
}

#[tokio::test]
async fn malformed_library_listing_is_a_decode_error() {
    let server = MockServer::start().await;
    mount_system_info(&server).await;
    Mock::given(method("GET"))
        .and(path("/Library/VirtualFolders"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let error = fetch_report(&server.uri(), API_KEY, None)
        .await
        .expect_err("malformed json must fail");

    assert_eq!(error.code(), "EMBY_DECODE_FAILED");
}

#[tokio::test]
async fn unreachable_server_is_a_request_error() {
    let error = fetch_report("http://127.0.0.1:1", API_KEY, None)
        .await
        .expect_err("closed port must fail");

    assert_eq!(error.code(), "EMBY_REQUEST_FAILED");
}
