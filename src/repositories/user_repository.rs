use sea_orm::*;
use crate::entities::{user, user::Entity as User};

pub struct UserRepository;

impl UserRepository {
    pub async fn find_by_username(
        db: &DatabaseConnection,
        username: &str,
    ) -> Result<Option<user::Model>, DbErr> {
        User::find_by_id(username.to_owned()).one(db).await
    }
}
