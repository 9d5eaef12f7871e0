pub mod article_repository;
pub mod comment_repository;
pub mod topic_repository;
pub mod user_repository;
