pub mod article_model;
pub mod comment_model;
