use crate::domain::requests::{
    deserialize_money, deserialize_optional_money, deserialize_optional_trimmed, deserialize_trimmed,
    validate_price,
};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError, ValidationErrors};

#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct FindAllProducts {
    /// Only return products of this category.
    pub categoria: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[serde(deserialize_with = "deserialize_trimmed")]
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    #[schema(example = "Café de olla")]
    pub nombre: String,

    #[serde(default, deserialize_with = "deserialize_trimmed")]
    #[schema(example = "Café con canela y piloncillo")]
    pub descripcion: String,

    #[serde(deserialize_with = "deserialize_money")]
    #[validate(custom(function = "validate_price"))]
    #[schema(value_type = String, example = "35.50")]
    pub precio: BigDecimal,

    /// Id of the owning category.
    #[schema(example = 1)]
    pub categoria: i32,

    #[serde(default)]
    #[validate(length(max = 255, message = "Image reference is too long"))]
    #[schema(example = "/media/productos/cafe.png")]
    pub imagen: Option<String>,
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[serde(skip_deserializing)]
    pub id: Option<i32>,

    #[serde(default, deserialize_with = "deserialize_optional_trimmed")]
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub nombre: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_trimmed")]
    pub descripcion: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_money")]
    #[validate(custom(function = "validate_price"))]
    #[schema(value_type = Option<String>, example = "35.50")]
    pub precio: Option<BigDecimal>,

    pub categoria: Option<i32>,

    #[validate(length(max = 255, message = "Image reference is too long"))]
    pub imagen: Option<String>,
}

impl UpdateProductRequest {
    pub fn replace(id: i32, body: CreateProductRequest) -> Self {
        Self {
            id: Some(id),
            nombre: Some(body.nombre),
            descripcion: Some(body.descripcion),
            precio: Some(body.precio),
            categoria: Some(body.categoria),
            imagen: body.imagen,
        }
    }

    /// Promotes a form that must carry every required field (create or full
    /// update) into a complete request.
    pub fn into_complete(self) -> Result<CreateProductRequest, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.nombre.is_none() {
            errors.add("nombre", required());
        }
        if self.precio.is_none() {
            errors.add("precio", required());
        }
        if self.categoria.is_none() {
            errors.add("categoria", required());
        }

        match (self.nombre, self.precio, self.categoria) {
            (Some(nombre), Some(precio), Some(categoria)) => Ok(CreateProductRequest {
                nombre,
                descripcion: self.descripcion.unwrap_or_default(),
                precio,
                categoria,
                imagen: self.imagen,
            }),
            _ => Err(errors),
        }
    }
}

fn required() -> ValidationError {
    ValidationError::new("required").with_message(Cow::from("This field is required."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn into_complete_reports_every_missing_field() {
        let errors = UpdateProductRequest::default().into_complete().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("nombre"));
        assert!(fields.contains_key("precio"));
        assert!(fields.contains_key("categoria"));
        assert!(!fields.contains_key("descripcion"));
    }

    #[test]
    fn into_complete_defaults_the_description() {
        let form = UpdateProductRequest {
            nombre: Some("Pan".into()),
            precio: Some(BigDecimal::from_str("3.5").unwrap()),
            categoria: Some(2),
            ..Default::default()
        };

        let body = form.into_complete().unwrap();
        assert_eq!(body.descripcion, "");
        assert_eq!(body.categoria, 2);
        assert!(body.imagen.is_none());
    }

    #[test]
    fn negative_price_fails_validation() {
        let body = CreateProductRequest {
            nombre: "Pan".into(),
            descripcion: String::new(),
            precio: BigDecimal::from_str("-1").unwrap(),
            categoria: 1,
            imagen: None,
        };

        let errors = body.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("precio"));
    }
}
