use crate::model::ProductWithCategory;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct OrderLine {
    pub id: i32,
    pub pedido_id: i32,
    pub producto_id: i32,
    pub cantidad: i32,
}

/// An order line joined with its product and the product's category.
///
/// The line's own id is selected as `detalle_id` so the flattened product keeps
/// the plain `id` column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct OrderLineWithProduct {
    #[sqlx(rename = "detalle_id")]
    pub id: i32,
    pub pedido_id: i32,
    pub cantidad: i32,
    #[sqlx(flatten)]
    pub producto: ProductWithCategory,
}
