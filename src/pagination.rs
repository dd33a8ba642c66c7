use serde::Serialize;

/// Number of items per page when the caller does not say otherwise.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// One bounded page of results plus the bookkeeping clients need to walk
/// the full set.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub last_page: usize,
}

impl<T> Paginated<T> {
    pub fn new(data: Vec<T>, total: usize, page: usize, per_page: usize) -> Self {
        Self {
            data,
            total,
            page,
            last_page: total.div_ceil(per_page),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_page_rounds_up() {
        let page = Paginated::new(vec![1, 2, 3], 25, 1, 10);
        assert_eq!(page.last_page, 3);
    }

    #[test]
    fn exact_multiple_has_no_trailing_page() {
        let page = Paginated::new(vec![0; 10], 20, 2, 10);
        assert_eq!(page.last_page, 2);
    }

    #[test]
    fn empty_result_set_has_zero_pages() {
        let page: Paginated<i32> = Paginated::new(vec![], 0, 1, 10);
        assert_eq!(page.last_page, 0);
    }
}
