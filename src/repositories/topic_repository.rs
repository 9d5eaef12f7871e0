use sea_orm::*;
use crate::entities::{topic, topic::Entity as Topic};

pub struct TopicRepository;

impl TopicRepository {
    pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<topic::Model>, DbErr> {
        Topic::find().all(db).await
    }

    pub async fn find_by_slug(db: &DatabaseConnection, slug: &str) -> Result<Option<topic::Model>, DbErr> {
        Topic::find_by_id(slug.to_owned()).one(db).await
    }
}
