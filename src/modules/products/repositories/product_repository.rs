// MySQL-backed product repository
//
// Runtime-checked queries against the `Product` table created by
// migrations/20240101000000_create_product_table.sql.

use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::traits::Repository;
use crate::core::{AppError, Result};
use crate::modules::products::models::Product;

/// Repository for product database operations
#[derive(Clone)]
pub struct MySqlProductRepository {
    pool: MySqlPool,
}

impl MySqlProductRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Product> for MySqlProductRepository {
    async fn get_all(&self) -> Result<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT Id, Name, Price, Stock, Color
            FROM Product
            ORDER BY Id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(count = products.len(), "Fetched products");
        Ok(products)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT Id, Name, Price, Stock, Color
            FROM Product
            WHERE Id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    async fn create(&self, mut entity: Product) -> Result<Product> {
        let result = sqlx::query(
            r#"
            INSERT INTO Product (Name, Price, Stock, Color)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&entity.name)
        .bind(entity.price)
        .bind(entity.stock)
        .bind(&entity.color)
        .execute(&self.pool)
        .await?;

        entity.id = i32::try_from(result.last_insert_id()).map_err(|_| {
            AppError::internal(format!(
                "Product key {} does not fit the Id column",
                result.last_insert_id()
            ))
        })?;

        tracing::debug!(id = entity.id, "Inserted product");
        Ok(entity)
    }

    async fn update(&self, entity: Product) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE Product
            SET Name = ?, Price = ?, Stock = ?, Color = ?
            WHERE Id = ?
            "#,
        )
        .bind(&entity.name)
        .bind(entity.price)
        .bind(entity.stock)
        .bind(&entity.color)
        .bind(entity.id)
        .execute(&self.pool)
        .await?;

        tracing::debug!(
            id = entity.id,
            rows_affected = result.rows_affected(),
            "Updated product"
        );
        Ok(())
    }

    async fn delete(&self, entity: Product) -> Result<()> {
        sqlx::query("DELETE FROM Product WHERE Id = ?")
            .bind(entity.id)
            .execute(&self.pool)
            .await?;

        tracing::debug!(id = entity.id, "Deleted product");
        Ok(())
    }
}
