use sea_orm::{ActiveValue::{NotSet, Set}, DatabaseConnection, DbErr, EntityTrait};
use crate::entities::comment;
use super::timestamp;

// (article_id, author, votes, created_at, body)
// Article 1 has eleven comments, article 2 has none.
const COMMENTS: &[(i32, &str, i32, i64, &str)] = &[
    (9, "butter_bridge", 16, 1586179020000, "Oh, I've got compassion running out of my nose, pal! I'm the Sultan of Sentiment!"),
    (1, "butter_bridge", 14, 1604113380000, "The beautiful thing about treasure is that it exists. Got to find out what kind of sheets these are; not cotton, not rayon, silky."),
    (1, "icellusedkars", 100, 1583025180000, "Replacing the quiet elegance of the dark suit and tie with the casual indifference of these muted earth tones is a form of fashion suicide, but, uh, call me crazy - on you it works."),
    (1, "icellusedkars", -100, 1582459260000, "I carry a log - yes. Is it funny to you? It is not to me."),
    (1, "icellusedkars", 0, 1604437200000, "I hate streaming noses"),
    (1, "icellusedkars", 0, 1586642520000, "I hate streaming eyes even more"),
    (1, "icellusedkars", 0, 1589577540000, "Lobster pot"),
    (1, "icellusedkars", 0, 1586899140000, "Delicious crackerbreads"),
    (1, "icellusedkars", 0, 1577848080000, "Superficially charming"),
    (3, "icellusedkars", 0, 1592220300000, "git push origin master"),
    (3, "icellusedkars", 0, 1600560600000, "Ambidextrous marsupial"),
    (1, "icellusedkars", 0, 1583133000000, "Massive intercranial brain haemorrhage"),
    (1, "icellusedkars", 0, 1602433380000, "Fruit pastilles"),
    (5, "icellusedkars", 16, 1591682400000, "What do you see? I have no idea where this will lead us. This place I speak of, is known as the Black Lodge."),
    (5, "butter_bridge", 1, 1605730500000, "I am 100% sure that we're not completely sure."),
    (6, "butter_bridge", 1, 1601819100000, "This is a bad article name"),
    (9, "icellusedkars", 20, 1586064240000, "The owls are not what they seem."),
    (1, "icellusedkars", 11, 1584205320000, "This morning, I showered for nine minutes."),
];

pub async fn seed_comments(db: &DatabaseConnection) -> Result<(), DbErr> {
    let mut rows = Vec::with_capacity(COMMENTS.len());
    for &(article_id, author, votes, created_at, body) in COMMENTS {
        rows.push(comment::ActiveModel {
            comment_id: NotSet,
            author: Set(author.to_string()),
            article_id: Set(article_id),
            votes: Set(votes),
            created_at: Set(timestamp(created_at)?),
            body: Set(body.to_string()),
        });
    }

    comment::Entity::insert_many(rows).exec_without_returning(db).await?;
    tracing::info!("Seeded {} comments", COMMENTS.len());
    Ok(())
}
