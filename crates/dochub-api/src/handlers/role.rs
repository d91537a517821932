//! Role catalog handler.

use axum::Json;

use dochub_entity::user::Role;

use crate::dto::response::RoleResponse;

/// GET /api/roles
///
/// Roles are a fixed enum; the endpoint serves the catalog for UI
/// dropdowns, keyed by the historical numeric ids.
pub async fn list_roles() -> Json<Vec<RoleResponse>> {
    let roles = Role::all()
        .into_iter()
        .map(|role| RoleResponse {
            id: role.legacy_id(),
            name: role.as_str().to_string(),
        })
        .collect();

    Json(roles)
}
