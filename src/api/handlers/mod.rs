pub mod cart;
pub mod catalog;
pub mod exhibitions;
pub mod notifications;
pub mod orders;

use axum_extra::headers::{Authorization, authorization::Bearer};

use crate::{
    AppState,
    db::{entities::user, repositories::UserRepository},
    error::{AppError, Result},
};

/// Resolves the bearer token to a live user row. A valid token for a deleted
/// account is treated the same as a bad token.
pub(crate) async fn current_user(
    state: &AppState,
    bearer: &Authorization<Bearer>,
) -> Result<user::Model> {
    let claims = state.jwt_service.validate_token(bearer.token())?;

    UserRepository::find_user_by_id(state.db.get_connection(), claims.sub)
        .await?
        .ok_or(AppError::Unauthorized)
}
