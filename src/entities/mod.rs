pub mod article;
pub mod comment;
pub mod topic;
pub mod user;
