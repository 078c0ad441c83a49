use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::{
    db::entities::{Artist, User, artist, user},
    error::{AppError, Result},
};

pub struct UserRepository;

impl UserRepository {
    pub async fn find_user_by_id<C: ConnectionTrait>(
        db_connection: &C,
        id: Uuid,
    ) -> Result<Option<user::Model>> {
        User::find_by_id(id)
            .one(db_connection)
            .await
            .map_err(AppError::DatabaseError)
    }

    pub async fn find_artist_profile<C: ConnectionTrait>(
        db_connection: &C,
        user_id: Uuid,
    ) -> Result<Option<artist::Model>> {
        Artist::find()
            .filter(artist::Column::UserId.eq(user_id))
            .one(db_connection)
            .await
            .map_err(AppError::DatabaseError)
    }

    pub async fn exists<C: ConnectionTrait>(db_connection: &C, id: Uuid) -> Result<bool> {
        Ok(User::find_by_id(id)
            .one(db_connection)
            .await
            .map_err(AppError::DatabaseError)?
            .is_some())
    }
}
