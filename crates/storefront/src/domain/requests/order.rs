use crate::{
    domain::requests::{
        deserialize_money, deserialize_optional_money, deserialize_optional_trimmed,
        deserialize_trimmed, validate_money,
    },
    model::OrderStatus,
};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateOrderRequest {
    #[serde(deserialize_with = "deserialize_trimmed")]
    #[validate(length(min = 1, max = 255, message = "Customer name must be between 1 and 255 characters"))]
    #[schema(example = "Ana López")]
    pub nombre_cliente: String,

    #[serde(deserialize_with = "deserialize_trimmed")]
    #[validate(length(min = 1, max = 20, message = "Phone must be between 1 and 20 characters"))]
    #[schema(example = "5512345678")]
    pub telefono: String,

    #[serde(deserialize_with = "deserialize_money")]
    #[validate(custom(function = "validate_money"))]
    #[schema(value_type = String, example = "120.00")]
    pub total: BigDecimal,

    /// Defaults to `pendiente` on create; kept as stored on a full update.
    #[serde(default)]
    pub estado: Option<OrderStatus>,
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateOrderRequest {
    #[serde(skip_deserializing)]
    pub id: Option<i32>,

    #[serde(default, deserialize_with = "deserialize_optional_trimmed")]
    #[validate(length(min = 1, max = 255, message = "Customer name must be between 1 and 255 characters"))]
    pub nombre_cliente: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_trimmed")]
    #[validate(length(min = 1, max = 20, message = "Phone must be between 1 and 20 characters"))]
    pub telefono: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_money")]
    #[validate(custom(function = "validate_money"))]
    #[schema(value_type = Option<String>, example = "120.00")]
    pub total: Option<BigDecimal>,

    pub estado: Option<OrderStatus>,
}

impl UpdateOrderRequest {
    pub fn replace(id: i32, body: CreateOrderRequest) -> Self {
        Self {
            id: Some(id),
            nombre_cliente: Some(body.nombre_cliente),
            telefono: Some(body.telefono),
            total: Some(body.total),
            estado: body.estado,
        }
    }
}
