use super::validate::read_json;
use crate::{abstract_trait::storage::FileUpload, domain::requests::UpdateProductRequest};
use axum::{
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
};
use bigdecimal::BigDecimal;
use shared::errors::HttpError;
use std::{borrow::Cow, str::FromStr};
use validator::{ValidationError, ValidationErrors};

/// Product write body, sent either as JSON or as `multipart/form-data`.
///
/// In multipart mode the `imagen` part is a file; every other part is a
/// plain text field.
#[derive(Debug, Default)]
pub struct ProductForm {
    pub fields: UpdateProductRequest,
    pub image: Option<FileUpload>,
}

impl<S> FromRequest<S> for ProductForm
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("multipart/form-data"));

        if !is_multipart {
            let fields: UpdateProductRequest = read_json(req, state).await?;

            return Ok(Self {
                fields,
                image: None,
            });
        }

        let multipart = Multipart::from_request(req, state)
            .await
            .map_err(|rejection| HttpError::BadRequest(rejection.body_text()))?;

        read_multipart(multipart).await
    }
}

async fn read_multipart(mut multipart: Multipart) -> Result<ProductForm, HttpError> {
    let mut form = ProductForm::default();
    let mut errors = ValidationErrors::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| HttpError::BadRequest(e.body_text()))?
    {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };

        if name == "imagen" {
            if let Some(file_name) = field.file_name().map(str::to_owned) {
                let content_type = field.content_type().map(str::to_owned);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| HttpError::BadRequest(e.body_text()))?;

                if !bytes.is_empty() {
                    form.image = Some(FileUpload {
                        file_name,
                        content_type,
                        bytes,
                    });
                }
                continue;
            }
        }

        let text = field
            .text()
            .await
            .map_err(|e| HttpError::BadRequest(e.body_text()))?;

        match name.as_str() {
            "nombre" => form.fields.nombre = Some(text.trim().to_owned()),
            "descripcion" => form.fields.descripcion = Some(text.trim().to_owned()),
            "imagen" if !text.is_empty() => form.fields.imagen = Some(text),
            "precio" => match BigDecimal::from_str(text.trim()) {
                Ok(precio) => form.fields.precio = Some(precio),
                Err(_) => errors.add("precio", invalid("A valid number is required.")),
            },
            "categoria" => match text.trim().parse::<i32>() {
                Ok(categoria) => form.fields.categoria = Some(categoria),
                Err(_) => errors.add("categoria", invalid("A valid integer is required.")),
            },
            _ => {}
        }
    }

    if !errors.is_empty() {
        return Err(HttpError::from(errors));
    }

    Ok(form)
}

fn invalid(message: &'static str) -> ValidationError {
    ValidationError::new("invalid").with_message(Cow::Borrowed(message))
}
