use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client};
use serde::de::DeserializeOwned;

use crate::config::ReportSettings;

use super::error::FetchError;
use super::model::{ItemsResponse, LibraryStat, Report, SystemInfoResponse, VirtualFolder};

const SYSTEM_INFO_PATH: &str = "/System/Info";
const VIRTUAL_FOLDERS_PATH: &str = "/Library/VirtualFolders";
const ITEMS_PATH: &str = "/Items";
const TOKEN_HEADER: &str = "X-Emby-Token";
const COUNTED_ITEM_TYPES: &str = "Movie,Series,MusicAlbum";

/// Where report data comes from. The Emby implementation talks HTTP; tests
/// substitute their own.
#[async_trait]
pub trait ReportSource: Send + Sync {
    async fn fetch(&self, settings: &ReportSettings) -> Result<Report, FetchError>;
}

pub struct EmbySource;

#[async_trait]
impl ReportSource for EmbySource {
    async fn fetch(&self, settings: &ReportSettings) -> Result<Report, FetchError> {
        fetch_report(
            &settings.server_url,
            &settings.api_key,
            settings.request_timeout,
        )
        .await
    }
}

/// Runs the three request phases in order: server info, library listing, then
/// one item-count query per library. The first failure aborts the whole fetch.
pub async fn fetch_report(
    base_url: &str,
    api_key: &str,
    request_timeout: Option<Duration>,
) -> Result<Report, FetchError> {
    let client = build_client(request_timeout)?;
    let api = EmbyApi {
        client: &client,
        base_url: base_url.trim_end_matches('/'),
        api_key,
    };

    let server: SystemInfoResponse = api.get_json(SYSTEM_INFO_PATH, &[]).await?;
    let folders: Vec<VirtualFolder> = api.get_json(VIRTUAL_FOLDERS_PATH, &[]).await?;

    let mut libraries = Vec::with_capacity(folders.len());
    for folder in folders {
        let item_count = match folder.item_id.as_deref() {
            Some(parent_id) => {
                let items: ItemsResponse = api
                    .get_json(
                        ITEMS_PATH,
                        &[
                            ("ParentId", parent_id),
                            ("Recursive", "true"),
                            ("IncludeItemTypes", COUNTED_ITEM_TYPES),
                            ("Fields", "ParentId"),
                        ],
                    )
                    .await?;
                items.total_record_count.unwrap_or(0)
            }
            None => {
                log::debug!(
                    "emby_library_without_id name={:?} counted_as=0",
                    folder.name
                );
                0
            }
        };

        libraries.push(LibraryStat {
            name: folder.name,
            item_count,
        });
    }

    Ok(Report {
        server: server.into(),
        libraries,
    })
}

fn build_client(request_timeout: Option<Duration>) -> Result<Client, FetchError> {
    // Operators point this at an internal server, often with a self-signed certificate.
    let mut builder = Client::builder().danger_accept_invalid_certs(true);
    if let Some(timeout) = request_timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().map_err(FetchError::Client)
}

struct EmbyApi<'a> {
    client: &'a Client,
    base_url: &'a str,
    api_key: &'a str,
}

impl EmbyApi<'_> {
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        query: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        let mut request = self
            .client
            .get(format!("{}{}", self.base_url, endpoint))
            .header(TOKEN_HEADER, self.api_key)
            .header(CONTENT_TYPE, "application/json");
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request
            .send()
            .await
            .map_err(|source| FetchError::Request { endpoint, source })?;

        let status = response.status();
        log::debug!("emby_request endpoint={} status={}", endpoint, status.as_u16());
        if !status.is_success() {
            return Err(FetchError::Status { endpoint, status });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| FetchError::Decode { endpoint, source })
    }
}
