use crate::{
    abstract_trait::product::ProductCommandRepositoryTrait,
    domain::requests::{CreateProductRequest, UpdateProductRequest},
    model::ProductWithCategory,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductWithCategory, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ProductWithCategory>(
            r#"
            WITH inserted AS (
                INSERT INTO productos (nombre, descripcion, precio, imagen, categoria_id)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id, nombre, descripcion, precio, imagen, categoria_id
            )
            SELECT
                i.id,
                i.nombre,
                i.descripcion,
                i.precio,
                i.imagen,
                i.categoria_id,
                c.nombre AS categoria_nombre
            FROM inserted i
            JOIN categorias c ON c.id = i.categoria_id
            "#,
        )
        .bind(&req.nombre)
        .bind(&req.descripcion)
        .bind(&req.precio)
        .bind(req.imagen.as_deref())
        .bind(req.categoria)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to create product {}: {:?}", req.nombre, err);
            RepositoryError::from(err)
        })?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!("✅ Created product ID {} ({})", result.id, result.nombre);
        Ok(result)
    }

    async fn update_product(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<ProductWithCategory, RepositoryError> {
        let id = req
            .id
            .ok_or_else(|| RepositoryError::Custom("product update without id".into()))?;

        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ProductWithCategory>(
            r#"
            WITH updated AS (
                UPDATE productos
                SET nombre = COALESCE($2, nombre),
                    descripcion = COALESCE($3, descripcion),
                    precio = COALESCE($4, precio),
                    imagen = COALESCE($5, imagen),
                    categoria_id = COALESCE($6, categoria_id)
                WHERE id = $1
                RETURNING id, nombre, descripcion, precio, imagen, categoria_id
            )
            SELECT
                u.id,
                u.nombre,
                u.descripcion,
                u.precio,
                u.imagen,
                u.categoria_id,
                c.nombre AS categoria_nombre
            FROM updated u
            JOIN categorias c ON c.id = u.categoria_id
            "#,
        )
        .bind(id)
        .bind(req.nombre.as_deref())
        .bind(req.descripcion.as_deref())
        .bind(req.precio.as_ref())
        .bind(req.imagen.as_deref())
        .bind(req.categoria)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to update product ID {}: {:?}", id, err);
            RepositoryError::from(err)
        })?
        .ok_or(RepositoryError::NotFound)?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!("🔄 Updated product ID {}", result.id);
        Ok(result)
    }

    async fn delete_product(&self, id: i32) -> Result<(), RepositoryError> {
        info!("❌ Deleting product: {}", id);

        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            DELETE FROM productos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            error!("❌ Failed to delete product {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        info!("✅ Product ID {} deleted", id);
        Ok(())
    }
}
