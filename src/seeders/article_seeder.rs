use sea_orm::{ActiveValue::{NotSet, Set}, DatabaseConnection, DbErr, EntityTrait};
use crate::entities::article;
use super::timestamp;

struct ArticleFixture {
    title: &'static str,
    topic: &'static str,
    author: &'static str,
    body: &'static str,
    created_at: i64,
    votes: i32,
}

const ARTICLES: &[ArticleFixture] = &[
    ArticleFixture {
        title: "Living in the shadow of a great man",
        topic: "mitch",
        author: "butter_bridge",
        body: "I find this existence challenging",
        created_at: 1594329060000,
        votes: 100,
    },
    ArticleFixture {
        title: "Sony Vaio; or, The Laptop",
        topic: "mitch",
        author: "icellusedkars",
        body: "Call me Mitchell. Some years ago I thought I would buy a laptop and see the watery part of the world.",
        created_at: 1602828180000,
        votes: 0,
    },
    ArticleFixture {
        title: "Eight pug gifs that remind me of mitch",
        topic: "mitch",
        author: "icellusedkars",
        body: "some gifs",
        created_at: 1604394720000,
        votes: 0,
    },
    ArticleFixture {
        title: "Student SUES Mitch!",
        topic: "mitch",
        author: "rogersop",
        body: "We all love Mitch and his wonderful, unique typing style.",
        created_at: 1588731240000,
        votes: 0,
    },
    ArticleFixture {
        title: "UNCOVERED: catspiracy to bring down democracy",
        topic: "cats",
        author: "rogersop",
        body: "Bastet walks amongst us, and the cats are taking arms!",
        created_at: 1596464040000,
        votes: 0,
    },
    ArticleFixture {
        title: "A",
        topic: "mitch",
        author: "icellusedkars",
        body: "Delicious tin of cat food",
        created_at: 1602986000000,
        votes: 0,
    },
    ArticleFixture {
        title: "Z",
        topic: "mitch",
        author: "icellusedkars",
        body: "I was hungry.",
        created_at: 1578406080000,
        votes: 0,
    },
    ArticleFixture {
        title: "Does Mitch predate civilisation?",
        topic: "mitch",
        author: "icellusedkars",
        body: "Archaeologists have uncovered a gigantic statue from the dawn of humanity, and it has an uncanny resemblance to Mitch.",
        created_at: 1587089280000,
        votes: 0,
    },
    ArticleFixture {
        title: "They're not exactly dogs, are they?",
        topic: "mitch",
        author: "butter_bridge",
        body: "Well? Think about it.",
        created_at: 1591438200000,
        votes: 0,
    },
    ArticleFixture {
        title: "Seven inspirational thought leaders from Manchester UK",
        topic: "mitch",
        author: "rogersop",
        body: "Who are we kidding, there is only one, and it's Mitch!",
        created_at: 1589433300000,
        votes: 0,
    },
    ArticleFixture {
        title: "Am I a cat?",
        topic: "mitch",
        author: "icellusedkars",
        body: "Having run out of ideas for articles, I am staring at the wall blankly, like a cat.",
        created_at: 1579126860000,
        votes: 0,
    },
    ArticleFixture {
        title: "Moustache",
        topic: "mitch",
        author: "butter_bridge",
        body: "Have you seen the size of that thing?",
        created_at: 1602419040000,
        votes: 0,
    },
    ArticleFixture {
        title: "Another article about Mitch",
        topic: "mitch",
        author: "butter_bridge",
        body: "There will never be enough articles about Mitch!",
        created_at: 1602419100000,
        votes: 0,
    },
];

pub async fn seed_articles(db: &DatabaseConnection) -> Result<(), DbErr> {
    let mut rows = Vec::with_capacity(ARTICLES.len());
    for fixture in ARTICLES {
        rows.push(article::ActiveModel {
            article_id: NotSet,
            title: Set(fixture.title.to_string()),
            body: Set(fixture.body.to_string()),
            votes: Set(fixture.votes),
            topic: Set(fixture.topic.to_string()),
            author: Set(fixture.author.to_string()),
            created_at: Set(timestamp(fixture.created_at)?),
        });
    }

    article::Entity::insert_many(rows).exec_without_returning(db).await?;
    tracing::info!("Seeded {} articles", ARTICLES.len());
    Ok(())
}
