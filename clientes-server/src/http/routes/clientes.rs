//! Cliente endpoints
//!
//! One handler per verb; each issues a single repository call and lets
//! [`ApiError`] translate failures into statuses.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::db::{Cliente, ClienteRepo};
use crate::http::error::ApiError;
use crate::http::extractors::ClienteId;
use crate::http::server::AppState;
use crate::models::{ClienteField, Email, Nome, ValidationError};

/// Create/replace request body; fields are optional so a missing key is
/// a validation error, not a deserialization rejection.
#[derive(Deserialize)]
pub struct ClienteRequest {
    pub nome: Option<String>,
    pub email: Option<String>,
}

impl ClienteRequest {
    /// Require both fields, validating presence.
    fn into_fields(self) -> Result<(Nome, Email), ValidationError> {
        let nome = Nome::new(self.nome.as_deref().unwrap_or_default())?;
        let email = Email::new(self.email.as_deref().unwrap_or_default())?;
        Ok((nome, email))
    }
}

/// Cliente response
#[derive(Serialize)]
pub struct ClienteResponse {
    pub cliente_id: i64,
    pub nome: String,
    pub email: String,
}

impl From<Cliente> for ClienteResponse {
    fn from(c: Cliente) -> Self {
        Self {
            cliente_id: c.cliente_id,
            nome: c.nome,
            email: c.email,
        }
    }
}

/// Creation response carrying the storage-assigned id
#[derive(Serialize)]
pub struct CreatedResponse {
    pub message: &'static str,
    #[serde(rename = "insertId")]
    pub insert_id: u64,
}

/// Plain confirmation message
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// GET /clientes - list all clientes
async fn list_clientes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ClienteResponse>>, ApiError> {
    let clientes = ClienteRepo::new(&state.pool).list().await?;
    Ok(Json(clientes.into_iter().map(ClienteResponse::from).collect()))
}

/// GET /clientes/{id} - get a single cliente
async fn get_cliente(
    State(state): State<Arc<AppState>>,
    ClienteId(id): ClienteId,
) -> Result<Json<ClienteResponse>, ApiError> {
    let cliente = ClienteRepo::new(&state.pool).get(id).await?;
    Ok(Json(ClienteResponse::from(cliente)))
}

/// POST /clientes - create a new cliente
async fn create_cliente(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ClienteRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let (nome, email) = req.into_fields()?;
    let insert_id = ClienteRepo::new(&state.pool).create(&nome, &email).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Cliente criado com sucesso!",
            insert_id,
        }),
    ))
}

/// PUT /clientes/{id} - fully replace nome and email
async fn replace_cliente(
    State(state): State<Arc<AppState>>,
    ClienteId(id): ClienteId,
    Json(req): Json<ClienteRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let (nome, email) = req.into_fields()?;
    ClienteRepo::new(&state.pool)
        .replace(id, &nome, &email)
        .await?;

    Ok(Json(MessageResponse {
        message: "Cliente atualizado com sucesso!",
    }))
}

/// PATCH /clientes/{id} - update only the submitted fields
async fn patch_cliente(
    State(state): State<Arc<AppState>>,
    ClienteId(id): ClienteId,
    Json(body): Json<Map<String, Value>>,
) -> Result<Json<MessageResponse>, ApiError> {
    let changes = parse_patch(&body)?;
    ClienteRepo::new(&state.pool)
        .update_fields(id, &changes)
        .await?;

    Ok(Json(MessageResponse {
        message: "Cliente atualizado com sucesso!",
    }))
}

/// DELETE /clientes/{id} - remove a cliente
async fn delete_cliente(
    State(state): State<Arc<AppState>>,
    ClienteId(id): ClienteId,
) -> Result<Json<MessageResponse>, ApiError> {
    ClienteRepo::new(&state.pool).delete(id).await?;

    Ok(Json(MessageResponse {
        message: "Cliente removido com sucesso!",
    }))
}

/// Resolve a PATCH body against the updatable-field allow-list.
///
/// Rejects empty bodies, unknown keys, and non-string values before any
/// SQL is built.
fn parse_patch(body: &Map<String, Value>) -> Result<Vec<(ClienteField, String)>, ValidationError> {
    if body.is_empty() {
        return Err(ValidationError::NoFields);
    }

    let mut changes = Vec::with_capacity(body.len());
    for (key, value) in body {
        let field = ClienteField::from_key(key).ok_or_else(|| ValidationError::UnknownField {
            field: key.clone(),
        })?;

        let raw = value.as_str().ok_or(ValidationError::InvalidFormat {
            field: field.column(),
            reason: "deve ser uma string",
        })?;

        changes.push((field, field.validate(raw)?));
    }

    Ok(changes)
}

/// Cliente routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/clientes", get(list_clientes).post(create_cliente))
        .route(
            "/clientes/{id}",
            get(get_cliente)
                .put(replace_cliente)
                .patch(patch_cliente)
                .delete(delete_cliente),
        )
}
