use crate::domain::requests::{deserialize_optional_trimmed, deserialize_trimmed};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryRequest {
    #[serde(deserialize_with = "deserialize_trimmed")]
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    #[schema(example = "Bebidas")]
    pub nombre: String,
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryRequest {
    #[serde(skip_deserializing)]
    pub id: Option<i32>,

    #[serde(default, deserialize_with = "deserialize_optional_trimmed")]
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    #[schema(example = "Postres")]
    pub nombre: Option<String>,
}

impl UpdateCategoryRequest {
    pub fn replace(id: i32, body: CreateCategoryRequest) -> Self {
        Self {
            id: Some(id),
            nombre: Some(body.nombre),
        }
    }
}
