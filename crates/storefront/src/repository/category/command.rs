use crate::{
    abstract_trait::category::CategoryCommandRepositoryTrait,
    domain::requests::{CreateCategoryRequest, UpdateCategoryRequest},
    model::Category as CategoryModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

pub struct CategoryCommandRepository {
    db: ConnectionPool,
}

impl CategoryCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryCommandRepositoryTrait for CategoryCommandRepository {
    async fn create_category(
        &self,
        req: &CreateCategoryRequest,
    ) -> Result<CategoryModel, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, CategoryModel>(
            r#"
            INSERT INTO categorias (nombre)
            VALUES ($1)
            RETURNING id, nombre
            "#,
        )
        .bind(&req.nombre)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to create category {}: {:?}", req.nombre, err);
            RepositoryError::from(err)
        })?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!("✅ Created category ID {} ({})", result.id, result.nombre);
        Ok(result)
    }

    async fn update_category(
        &self,
        req: &UpdateCategoryRequest,
    ) -> Result<CategoryModel, RepositoryError> {
        let id = req
            .id
            .ok_or_else(|| RepositoryError::Custom("category update without id".into()))?;

        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, CategoryModel>(
            r#"
            UPDATE categorias
            SET nombre = COALESCE($2, nombre)
            WHERE id = $1
            RETURNING id, nombre
            "#,
        )
        .bind(id)
        .bind(req.nombre.as_deref())
        .fetch_optional(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to update category ID {}: {:?}", id, err);
            RepositoryError::from(err)
        })?
        .ok_or(RepositoryError::NotFound)?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!("🔄 Updated category ID {}", result.id);
        Ok(result)
    }

    async fn delete_category(&self, id: i32) -> Result<(), RepositoryError> {
        info!("❌ Deleting category: {}", id);

        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            DELETE FROM categorias
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            error!("❌ Failed to delete category {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        info!("✅ Category ID {} deleted with its products", id);
        Ok(())
    }
}
