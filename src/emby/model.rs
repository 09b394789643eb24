use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerInfo {
    pub name: Option<String>,
    pub version: Option<String>,
    pub os_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryStat {
    pub name: Option<String>,
    pub item_count: u64,
}

/// Server description plus per-library counts in the order the server lists
/// its libraries. Only ever built from a fetch where every request succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub server: ServerInfo,
    pub libraries: Vec<LibraryStat>,
}

#[derive(Debug, Deserialize)]
pub(super) struct SystemInfoResponse {
    #[serde(rename = "ServerName", default)]
    pub server_name: Option<String>,
    #[serde(rename = "Version", default)]
    pub version: Option<String>,
    #[serde(rename = "OperatingSystemDisplayName", default)]
    pub operating_system_display_name: Option<String>,
}

impl From<SystemInfoResponse> for ServerInfo {
    fn from(response: SystemInfoResponse) -> Self {
        Self {
            name: response.server_name,
            version: response.version,
            os_name: response.operating_system_display_name,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct VirtualFolder {
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(rename = "ItemId", default)]
    pub item_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ItemsResponse {
    #[serde(rename = "TotalRecordCount", default)]
    pub total_record_count: Option<u64>,
}
