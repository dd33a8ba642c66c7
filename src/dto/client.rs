use serde::Deserialize;

/// Query parameters accepted by `GET /client`. The four filter fields are
/// the full allow-list; anything else in the query string is ignored by
/// deserialization.
#[derive(Debug, Default, Deserialize)]
pub struct ListClientsParams {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub age: Option<i32>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}
