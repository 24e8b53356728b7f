//! Типизированные вызовы коллекции `/products`.

use contracts::domain::a001_product::aggregate::{Product, ProductDto};

use super::query::ListQuery;
use crate::shared::api_client::{self, FetchError, SubmitError};

pub fn products_path(query: &ListQuery) -> String {
    format!("/products{}", query.to_query_string())
}

pub fn product_path(id: &str) -> String {
    format!("/products/{}", urlencoding::encode(id))
}

pub async fn fetch_products(query: &ListQuery) -> Result<Vec<Product>, FetchError> {
    api_client::get_json(&products_path(query)).await
}

pub async fn fetch_by_id(id: &str) -> Result<Product, FetchError> {
    api_client::get_json(&product_path(id)).await
}

pub async fn create(dto: &ProductDto) -> Result<(), SubmitError> {
    api_client::post_json("/products", dto).await
}

pub async fn update(id: &str, dto: &ProductDto) -> Result<(), SubmitError> {
    api_client::put_json(&product_path(id), dto).await
}

pub async fn remove(id: &str) -> Result<(), SubmitError> {
    api_client::delete(&product_path(id)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::query::SortKey;

    #[test]
    fn test_products_path_carries_query() {
        let mut q = ListQuery::default();
        q.set_search("tv".to_string());
        q.set_sort(SortKey::IncreasePrice);
        assert_eq!(
            products_path(&q),
            "/products?search=tv&_page=1&_limit=10&_sort=Increase%20Price"
        );
    }

    #[test]
    fn test_product_path_escapes_id() {
        assert_eq!(product_path("42"), "/products/42");
        assert_eq!(product_path("a/b"), "/products/a%2Fb");
    }
}
