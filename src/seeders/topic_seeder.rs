use sea_orm::{ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait};
use crate::entities::topic;

pub async fn seed_topics(db: &DatabaseConnection) -> Result<(), DbErr> {
    // `paper` deliberately has no articles
    let topics = vec![
        ("mitch", "The man, the Mitch, the legend"),
        ("cats", "Not dogs"),
        ("paper", "what books are made of"),
    ];

    let rows = topics.into_iter().map(|(slug, description)| topic::ActiveModel {
        slug: Set(slug.to_string()),
        description: Set(description.to_string()),
    });

    topic::Entity::insert_many(rows).exec_without_returning(db).await?;
    tracing::info!("Seeded topics");
    Ok(())
}
