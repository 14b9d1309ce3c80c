use crate::{
    abstract_trait::product::ProductQueryRepositoryTrait, domain::requests::FindAllProducts,
    model::ProductWithCategory,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<Vec<ProductWithCategory>, RepositoryError> {
        info!("🔍 Fetching products with category filter: {:?}", req.categoria);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let products = sqlx::query_as::<_, ProductWithCategory>(
            r#"
            SELECT
                p.id,
                p.nombre,
                p.descripcion,
                p.precio,
                p.imagen,
                p.categoria_id,
                c.nombre AS categoria_nombre
            FROM productos p
            JOIN categorias c ON c.id = p.categoria_id
            WHERE ($1::INTEGER IS NULL OR p.categoria_id = $1)
            ORDER BY p.id
            "#,
        )
        .bind(req.categoria)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch products: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(products)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<ProductWithCategory>, RepositoryError> {
        info!("🆔 Fetching product by ID: {}", id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ProductWithCategory>(
            r#"
            SELECT
                p.id,
                p.nombre,
                p.descripcion,
                p.precio,
                p.imagen,
                p.categoria_id,
                c.nombre AS categoria_nombre
            FROM productos p
            JOIN categorias c ON c.id = p.categoria_id
            WHERE p.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }
}
