//! Category and product models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::validation::non_empty;

/// Category entity
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

/// Product entity
///
/// `category_name` is a denormalized copy of the referenced category's name,
/// kept on the product row so list responses need no join.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category_id: String,
    pub category_name: String,
    pub image_url: String,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
}

/// Query parameters for the product listing endpoint
#[derive(Debug, Default, Deserialize)]
pub struct ProductsQuery {
    pub category_id: Option<String>,
}

impl ProductsQuery {
    /// The effective category filter. An empty `category_id` value counts
    /// as no filter at all, the same as omitting the parameter.
    pub fn category_filter(&self) -> Option<&str> {
        non_empty(&self.category_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_filter_passes_value_through() {
        let query = ProductsQuery {
            category_id: Some("cat-1".to_string()),
        };
        assert_eq!(query.category_filter(), Some("cat-1"));
    }

    #[test]
    fn test_empty_category_id_means_no_filter() {
        let query = ProductsQuery {
            category_id: Some(String::new()),
        };
        assert_eq!(query.category_filter(), None);
    }

    #[test]
    fn test_absent_category_id_means_no_filter() {
        let query = ProductsQuery::default();
        assert_eq!(query.category_filter(), None);
    }
}
