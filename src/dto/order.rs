use serde::Deserialize;

/// Query parameters accepted by `GET /order`. Orders are searched through
/// their linked entities' names, not their own fields.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListOrdersParams {
    pub client_name: Option<String>,
    pub restaurant_name: Option<String>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}
