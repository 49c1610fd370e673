//! Startup seed data for the catalog
//!
//! Runs once before the server accepts traffic. Each collection is guarded
//! by an emptiness check, so repeated startups never duplicate rows.

use anyhow::Result;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::{
    models::{Category, Product},
    repositories::CatalogRepository,
};

struct SeedCategory {
    name: &'static str,
    image_url: &'static str,
}

struct SeedProduct {
    name: &'static str,
    description: &'static str,
    price: f64,
    category_name: &'static str,
    image_url: &'static str,
    stock: i32,
}

fn seed_categories() -> Vec<SeedCategory> {
    vec![
        SeedCategory {
            name: "Men's Wear",
            image_url: "https://images.unsplash.com/photo-1618886614638-80e3c103d31a?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NTY2NzB8MHwxfHNlYXJjaHwxfHxtZW4lMjBmYXNoaW9ufGVufDB8fHx8MTc1OTgzOTI2M3ww&ixlib=rb-4.1.0&q=85",
        },
        SeedCategory {
            name: "Women's Wear",
            image_url: "https://images.unsplash.com/photo-1617922001439-4a2e6562f328?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NDQ2NDF8MHwxfHNlYXJjaHwxfHx3b21lbiUyMGZhc2hpb258ZW58MHx8fHwxNzU5ODcwOTg0fDA&ixlib=rb-4.1.0&q=85",
        },
        SeedCategory {
            name: "Children's Wear",
            image_url: "https://images.unsplash.com/photo-1622218286192-95f6a20083c7?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NTY2NzF8MHwxfHNlYXJjaHwxfHxraWRzJTIwY2xvdGhpbmd8ZW58MHx8fHwxNzU5OTE5MjI5fDA&ixlib=rb-4.1.0&q=85",
        },
        SeedCategory {
            name: "Underwear",
            image_url: "https://images.unsplash.com/photo-1568441556126-f36ae0900180?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NTY2Nzd8MHwxfHNlYXJjaHw0fHx1bmRlcndlYXJ8ZW58MHx8fHwxNzU5OTE5MjMzfDA&ixlib=rb-4.1.0&q=85",
        },
    ]
}

fn seed_products() -> Vec<SeedProduct> {
    vec![
        SeedProduct {
            name: "Classic Cotton T-Shirt",
            description: "Premium quality cotton t-shirt in multiple colors",
            price: 29.99,
            category_name: "Men's Wear",
            image_url: "https://images.unsplash.com/photo-1562157873-818bc0726f68?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NDk1ODF8MHwxfHNlYXJjaHwzfHxjbG90aGluZ3xlbnwwfHx8fDE3NTk4NTQyMTN8MA&ixlib=rb-4.1.0&q=85",
            stock: 100,
        },
        SeedProduct {
            name: "Elegant Women's Dress",
            description: "Beautiful and comfortable dress for all occasions",
            price: 89.99,
            category_name: "Women's Wear",
            image_url: "https://images.unsplash.com/photo-1525507119028-ed4c629a60a3?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NDk1ODF8MHwxfHNlYXJjaHwxfHxjbG90aGluZ3xlbnwwfHx8fDE3NTk4NTQyMTN8MA&ixlib=rb-4.1.0&q=85",
            stock: 75,
        },
        SeedProduct {
            name: "Trendy Yellow Track Suit",
            description: "Comfortable and stylish track suit perfect for casual wear",
            price: 79.99,
            category_name: "Women's Wear",
            image_url: "https://images.unsplash.com/photo-1515886657613-9f3515b0c78f?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NDQ2NDJ8MHwxfHNlYXJjaHwxfHxmYXNoaW9ufGVufDB8fHx8MTc1OTkxOTI3MHww&ixlib=rb-4.1.0&q=85",
            stock: 50,
        },
        SeedProduct {
            name: "Kids Colorful Collection",
            description: "Vibrant and comfortable children's clothing collection",
            price: 39.99,
            category_name: "Children's Wear",
            image_url: "https://images.unsplash.com/photo-1622218286192-95f6a20083c7?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NTY2NzF8MHwxfHNlYXJjaHwxfHxraWRzJTIwY2xvdGhpbmd8ZW58MHx8fHwxNzU5OTE5MjI5fDA&ixlib=rb-4.1.0&q=85",
            stock: 60,
        },
        SeedProduct {
            name: "Professional Shirts Collection",
            description: "High-quality professional shirts for office and formal wear",
            price: 59.99,
            category_name: "Men's Wear",
            image_url: "https://images.unsplash.com/photo-1489987707025-afc232f7ea0f?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NDk1ODF8MHwxfHNlYXJjaHw0fHxjbG90aGluZ3xlbnwwfHx8fDE3NTk4NTQyMTN8MA&ixlib=rb-4.1.0&q=85",
            stock: 80,
        },
        SeedProduct {
            name: "Stylish Outerwear",
            description: "Trendy coats and jackets for all seasons",
            price: 149.99,
            category_name: "Women's Wear",
            image_url: "https://images.unsplash.com/photo-1571513800374-df1bbe650e56?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NDQ2NDJ8MHwxfHNlYXJjaHwzfHxmYXNoaW9ufGVufDB8fHx8MTc1OTkxOTI3MHww&ixlib=rb-4.1.0&q=85",
            stock: 40,
        },
    ]
}

/// Insert seed categories and products if the respective tables are empty.
/// Idempotent across restarts.
pub async fn ensure_seed_data(catalog: &CatalogRepository) -> Result<()> {
    if catalog.count_categories().await? == 0 {
        info!("Seeding categories");

        for seed in seed_categories() {
            let category = Category {
                id: Uuid::new_v4().to_string(),
                name: seed.name.to_string(),
                image_url: seed.image_url.to_string(),
                created_at: Utc::now(),
            };
            catalog.insert_category(&category).await?;
        }
    }

    if catalog.count_products().await? == 0 {
        info!("Seeding products");

        let categories = catalog.list_categories().await?;

        for seed in seed_products() {
            let category = categories
                .iter()
                .find(|c| c.name == seed.category_name)
                .ok_or_else(|| {
                    anyhow::anyhow!("Seed product references unknown category: {}", seed.category_name)
                })?;

            let product = Product {
                id: Uuid::new_v4().to_string(),
                name: seed.name.to_string(),
                description: seed.description.to_string(),
                price: seed.price,
                category_id: category.id.clone(),
                category_name: category.name.clone(),
                image_url: seed.image_url.to_string(),
                stock: seed.stock,
                created_at: Utc::now(),
            };
            catalog.insert_product(&product).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_category_names_are_unique() {
        let categories = seed_categories();
        let names: HashSet<&str> = categories.iter().map(|c| c.name).collect();

        assert_eq!(categories.len(), 4);
        assert_eq!(names.len(), categories.len());
    }

    #[test]
    fn test_seed_products_reference_seed_categories() {
        let category_names: HashSet<&str> =
            seed_categories().iter().map(|c| c.name).collect();

        let products = seed_products();
        assert_eq!(products.len(), 6);

        for product in &products {
            assert!(
                category_names.contains(product.category_name),
                "product {} references unknown category {}",
                product.name,
                product.category_name
            );
        }
    }

    #[test]
    fn test_seed_products_have_sane_values() {
        for product in seed_products() {
            assert!(product.price >= 0.0);
            assert!(product.stock >= 0);
            assert!(!product.name.is_empty());
            assert!(!product.description.is_empty());
        }
    }
}
