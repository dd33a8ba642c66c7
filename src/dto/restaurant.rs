use serde::Deserialize;

/// Query parameters accepted by `GET /restaurant`.
#[derive(Debug, Default, Deserialize)]
pub struct ListRestaurantsParams {
    pub name: Option<String>,
    pub address: Option<String>,
    pub capacity: Option<i32>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}
