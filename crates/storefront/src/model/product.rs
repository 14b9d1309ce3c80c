use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i32,
    pub nombre: String,
    pub descripcion: String,
    pub precio: BigDecimal,
    pub imagen: Option<String>,
    pub categoria_id: i32,
}

/// A product row joined with the name of its category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ProductWithCategory {
    pub id: i32,
    pub nombre: String,
    pub descripcion: String,
    pub precio: BigDecimal,
    pub imagen: Option<String>,
    pub categoria_id: i32,
    pub categoria_nombre: String,
}
