use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{HeaderMap, header::CONTENT_TYPE},
};
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use shared::errors::HttpError;
use validator::Validate;

/// JSON body that has passed its `validator` rules.
pub struct SimpleValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for SimpleValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let value: T = read_json(req, state).await?;

        value.validate()?;

        Ok(Self(value))
    }
}

/// Reads a JSON body. Values of the wrong shape are reported against the
/// field they were sent for, like any other validation error.
pub async fn read_json<T, S>(req: Request, state: &S) -> Result<T, HttpError>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    if !has_json_content_type(req.headers()) {
        return Err(HttpError::BadRequest(
            "Expected request with `Content-Type: application/json`".into(),
        ));
    }

    let bytes = Bytes::from_request(req, state)
        .await
        .map_err(|rejection| HttpError::BadRequest(rejection.body_text()))?;

    let deserializer = &mut serde_json::Deserializer::from_slice(&bytes);
    let value = serde_path_to_error::deserialize(&mut *deserializer).map_err(|err| {
        let path = err.path().to_string();
        let inner = err.into_inner();
        let message = describe(&inner);

        match inner.classify() {
            Category::Data => match field_of(&path, &message) {
                Some((field, message)) => HttpError::invalid_field(field, message),
                None => HttpError::invalid_field("non_field_errors", message),
            },
            _ => HttpError::BadRequest(format!("Malformed JSON: {message}")),
        }
    })?;

    deserializer
        .end()
        .map_err(|err| HttpError::BadRequest(format!("Malformed JSON: {}", describe(&err))))?;

    Ok(value)
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

// serde_json appends the position to every message.
fn describe(err: &serde_json::Error) -> String {
    let text = err.to_string();
    let position = format!(" at line {} column {}", err.line(), err.column());
    text.strip_suffix(&position).unwrap_or(&text).to_owned()
}

fn field_of(path: &str, message: &str) -> Option<(String, String)> {
    if path != "." {
        return Some((path.to_owned(), message.to_owned()));
    }

    let missing = message.strip_prefix("missing field `")?.strip_suffix('`')?;
    Some((missing.to_owned(), "This field is required.".to_owned()))
}
