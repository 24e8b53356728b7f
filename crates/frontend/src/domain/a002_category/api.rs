//! Вложенная коллекция `/products/:catId/category`.
//!
//! Эндпоинт не принимает параметров поиска/сортировки/страниц; экран
//! работает с коллекцией целиком.

use contracts::domain::a001_product::aggregate::{Product, ProductDto};

use crate::shared::api_client::{self, FetchError, SubmitError};

pub fn items_path(cat_id: &str) -> String {
    format!("/products/{}/category", urlencoding::encode(cat_id))
}

pub fn item_path(cat_id: &str, id: &str) -> String {
    format!(
        "/products/{}/category/{}",
        urlencoding::encode(cat_id),
        urlencoding::encode(id)
    )
}

pub async fn fetch_items(cat_id: &str) -> Result<Vec<Product>, FetchError> {
    api_client::get_json(&items_path(cat_id)).await
}

pub async fn fetch_item(cat_id: &str, id: &str) -> Result<Product, FetchError> {
    api_client::get_json(&item_path(cat_id, id)).await
}

pub async fn create(cat_id: &str, dto: &ProductDto) -> Result<(), SubmitError> {
    api_client::post_json(&items_path(cat_id), dto).await
}

pub async fn update(cat_id: &str, id: &str, dto: &ProductDto) -> Result<(), SubmitError> {
    api_client::put_json(&item_path(cat_id, id), dto).await
}

pub async fn remove(cat_id: &str, id: &str) -> Result<(), SubmitError> {
    api_client::delete(&item_path(cat_id, id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_path() {
        assert_eq!(items_path("5"), "/products/5/category");
    }

    #[test]
    fn test_item_path_escapes_segments() {
        assert_eq!(item_path("5", "42"), "/products/5/category/42");
        assert_eq!(item_path("a b", "c/d"), "/products/a%20b/category/c%2Fd");
    }
}
