use std::str::FromStr;

use sea_orm::{FromQueryResult, Order};
use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::entities::article;
use crate::utils::app_error::AppError;

/// Columns `GET /api/articles` may be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    Title,
    Votes,
    Topic,
    Author,
    #[default]
    CreatedAt,
}

impl SortField {
    pub fn column(self) -> article::Column {
        match self {
            SortField::Title => article::Column::Title,
            SortField::Votes => article::Column::Votes,
            SortField::Topic => article::Column::Topic,
            SortField::Author => article::Column::Author,
            SortField::CreatedAt => article::Column::CreatedAt,
        }
    }
}

impl FromStr for SortField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(SortField::Title),
            "votes" => Ok(SortField::Votes),
            "topic" => Ok(SortField::Topic),
            "author" => Ok(SortField::Author),
            "created_at" => Ok(SortField::CreatedAt),
            _ => Err(AppError::InvalidInput),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn order(self) -> Order {
        match self {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        }
    }
}

impl FromStr for SortOrder {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(AppError::InvalidInput),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ArticleFilterParams {
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub topic: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateVotesRequest {
    pub inc_votes: Option<i32>,
}

/// Single article with its comment tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromQueryResult)]
pub struct ArticleResponse {
    pub article_id: i32,
    pub title: String,
    pub body: String,
    pub votes: i32,
    pub topic: String,
    pub author: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub comment_count: i64,
}

/// Listing row; the body is left out of listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromQueryResult)]
pub struct ArticleSummary {
    pub article_id: i32,
    pub title: String,
    pub votes: i32,
    pub topic: String,
    pub author: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub comment_count: i64,
}
