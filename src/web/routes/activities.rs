use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::models::Activity;
use crate::registry::RegistryError;
use crate::web::SharedRegistry;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn list_activities_handler(
    State(registry): State<SharedRegistry>,
) -> Json<BTreeMap<String, Activity>> {
    Json(registry.read().await.list().clone())
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(registry): State<SharedRegistry>,
) -> Result<Json<MessageResponse>, RegistryError> {
    let mut registry = registry.write().await;
    match registry.signup(&activity_name, &query.email) {
        Ok(message) => {
            info!("Signed up {} for {}", query.email, activity_name);
            Ok(Json(MessageResponse { message }))
        }
        Err(e) => {
            warn!("Signup failed for {}: {}", activity_name, e);
            Err(e)
        }
    }
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(registry): State<SharedRegistry>,
) -> Result<Json<MessageResponse>, RegistryError> {
    let mut registry = registry.write().await;
    match registry.unregister(&activity_name, &query.email) {
        Ok(message) => {
            info!("Unregistered {} from {}", query.email, activity_name);
            Ok(Json(MessageResponse { message }))
        }
        Err(e) => {
            warn!("Unregister failed for {}: {}", activity_name, e);
            Err(e)
        }
    }
}
