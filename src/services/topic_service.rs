use sea_orm::DatabaseConnection;
use crate::entities::topic;
use crate::repositories::topic_repository::TopicRepository;
use crate::utils::app_error::AppError;

pub struct TopicService;

impl TopicService {
    pub async fn list_topics(db: &DatabaseConnection) -> Result<Vec<topic::Model>, AppError> {
        Ok(TopicRepository::find_all(db).await?)
    }
}
