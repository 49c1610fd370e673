//! Catalog repository for category and product reads

use anyhow::Result;
use sqlx::PgPool;

use crate::models::{Category, Product};

/// Catalog repository
#[derive(Clone)]
pub struct CatalogRepository {
    pool: PgPool,
}

impl CatalogRepository {
    /// Create a new catalog repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all categories in seed insertion order
    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, image_url, created_at
            FROM categories
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    /// List products, optionally filtered by category id. An unknown
    /// category id yields an empty list, not an error.
    pub async fn list_products(&self, category_id: Option<&str>) -> Result<Vec<Product>> {
        let products = match category_id {
            Some(category_id) => {
                sqlx::query_as::<_, Product>(
                    r#"
                    SELECT id, name, description, price, category_id, category_name,
                           image_url, stock, created_at
                    FROM products
                    WHERE category_id = $1
                    ORDER BY created_at ASC
                    "#,
                )
                .bind(category_id)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Product>(
                    r#"
                    SELECT id, name, description, price, category_id, category_name,
                           image_url, stock, created_at
                    FROM products
                    ORDER BY created_at ASC
                    "#,
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(products)
    }

    /// Find a product by ID
    pub async fn find_product(&self, id: &str) -> Result<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price, category_id, category_name,
                   image_url, stock, created_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Count categories
    pub async fn count_categories(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Count products
    pub async fn count_products(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Insert a category row
    pub async fn insert_category(&self, category: &Category) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO categories (id, name, image_url, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&category.id)
        .bind(&category.name)
        .bind(&category.image_url)
        .bind(category.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Insert a product row
    pub async fn insert_product(&self, product: &Product) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO products (id, name, description, price, category_id,
                                  category_name, image_url, stock, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(&product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(&product.category_id)
        .bind(&product.category_name)
        .bind(&product.image_url)
        .bind(product.stock)
        .bind(product.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
