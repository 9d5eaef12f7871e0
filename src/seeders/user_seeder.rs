use sea_orm::{ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait};
use crate::entities::user;

pub async fn seed_users(db: &DatabaseConnection) -> Result<(), DbErr> {
    let users = vec![
        (
            "butter_bridge",
            "jonny",
            "https://www.healthytherapies.com/wp-content/uploads/2016/06/Lime3.jpg",
        ),
        (
            "icellusedkars",
            "sam",
            "https://avatars2.githubusercontent.com/u/24604688?s=460&v=4",
        ),
        (
            "rogersop",
            "paul",
            "https://avatars2.githubusercontent.com/u/24394918?s=400&v=4",
        ),
        (
            "lurker",
            "do_nothing",
            "https://www.golenbock.com/wp-content/uploads/2015/01/placeholder-user.png",
        ),
    ];

    let rows = users.into_iter().map(|(username, name, avatar_url)| user::ActiveModel {
        username: Set(username.to_string()),
        name: Set(name.to_string()),
        avatar_url: Set(avatar_url.to_string()),
    });

    user::Entity::insert_many(rows).exec_without_returning(db).await?;
    tracing::info!("Seeded users");
    Ok(())
}
