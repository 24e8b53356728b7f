//! Query State списка товаров: поиск, сортировка, страница.
//!
//! Сортировочные ключи — идентификаторы, определённые сервером; клиент
//! передаёт их как есть и сам порядок не навязывает.

use crate::shared::list_paging::PAGE_SIZE;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Естественный порядок, параметр `_sort` не отправляется.
    #[default]
    All,
    LowPrice,
    IncreasePrice,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::All, SortKey::LowPrice, SortKey::IncreasePrice];

    /// Server-defined sort identifier, passed through verbatim.
    pub fn as_param(&self) -> Option<&'static str> {
        match self {
            SortKey::All => None,
            SortKey::LowPrice => Some("Low Price"),
            SortKey::IncreasePrice => Some("Increase Price"),
        }
    }

    /// Label shown in the sort select (the identifiers double as labels).
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::All => "All",
            SortKey::LowPrice => "Low Price",
            SortKey::IncreasePrice => "Increase Price",
        }
    }

    pub fn from_label(label: &str) -> SortKey {
        match label {
            "Low Price" => SortKey::LowPrice,
            "Increase Price" => SortKey::IncreasePrice,
            _ => SortKey::All,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub search: String,
    pub sort: SortKey,
    pub page: usize,
    pub limit: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort: SortKey::default(),
            page: 1,
            limit: PAGE_SIZE,
        }
    }
}

impl ListQuery {
    /// Смена поиска сбрасывает страницу на первую.
    pub fn set_search(&mut self, search: String) {
        self.search = search;
        self.page = 1;
    }

    /// Смена сортировки сбрасывает страницу на первую.
    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        self.page = 1;
    }

    /// Явный переход по страницам текущую выдачу не сбрасывает.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Строка запроса для `GET /products`.
    ///
    /// `_page`/`_limit` отправляются по наблюдаемому wire-контракту, но
    /// страницу режет клиент (см. `list_paging`): mock API эти параметры
    /// игнорирует и возвращает коллекцию целиком.
    pub fn to_query_string(&self) -> String {
        let mut qs = format!(
            "?search={}&_page={}&_limit={}",
            urlencoding::encode(&self.search),
            self.page,
            self.limit
        );
        if let Some(sort) = self.sort.as_param() {
            qs.push_str("&_sort=");
            qs.push_str(&urlencoding::encode(sort));
        }
        qs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_change_resets_page() {
        let mut q = ListQuery::default();
        q.set_page(3);
        q.set_search("phone".to_string());
        assert_eq!(q.page, 1);
        assert_eq!(q.search, "phone");
    }

    #[test]
    fn test_sort_change_resets_page() {
        let mut q = ListQuery::default();
        q.set_page(2);
        q.set_sort(SortKey::LowPrice);
        assert_eq!(q.page, 1);
    }

    #[test]
    fn test_explicit_page_change_keeps_rest() {
        let mut q = ListQuery::default();
        q.set_search("tv".to_string());
        q.set_page(3);
        assert_eq!(q.page, 3);
        assert_eq!(q.search, "tv");
        // page floor is 1
        q.set_page(0);
        assert_eq!(q.page, 1);
    }

    #[test]
    fn test_query_string_without_sort() {
        let q = ListQuery::default();
        assert_eq!(q.to_query_string(), "?search=&_page=1&_limit=10");
    }

    #[test]
    fn test_query_string_encodes_search_and_sort() {
        let mut q = ListQuery::default();
        q.set_search("красный диван".to_string());
        q.set_sort(SortKey::LowPrice);
        let qs = q.to_query_string();
        assert!(qs.contains("search=%D0%BA"));
        assert!(!qs.contains(' '));
        assert!(qs.ends_with("&_sort=Low%20Price"));
    }

    #[test]
    fn test_sort_param_passthrough() {
        assert_eq!(SortKey::All.as_param(), None);
        assert_eq!(SortKey::LowPrice.as_param(), Some("Low Price"));
        assert_eq!(SortKey::IncreasePrice.as_param(), Some("Increase Price"));
        for key in SortKey::ALL {
            assert_eq!(SortKey::from_label(key.label()), key);
        }
    }
}
