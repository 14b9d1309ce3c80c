use crate::{domain::response::CategoryResponse, model::ProductWithCategory};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub id: i32,
    pub nombre: String,
    pub descripcion: String,
    #[schema(value_type = String, example = "35.50")]
    pub precio: BigDecimal,
    pub imagen: Option<String>,
    pub categoria: CategoryResponse,
}

impl From<ProductWithCategory> for ProductResponse {
    fn from(value: ProductWithCategory) -> Self {
        ProductResponse {
            id: value.id,
            nombre: value.nombre,
            descripcion: value.descripcion,
            precio: value.precio,
            imagen: value.imagen,
            categoria: CategoryResponse {
                id: value.categoria_id,
                nombre: value.categoria_nombre,
            },
        }
    }
}
