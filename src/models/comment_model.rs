use serde::Deserialize;
use validator::Validate;

// Unknown keys (e.g. `votes`) are dropped by serde
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateCommentRequest {
    pub author: Option<String>,

    #[validate(length(min = 1, message = "Bad request - body cannot be empty"))]
    pub body: Option<String>,
}

impl CreateCommentRequest {
    pub fn new(author: &str, body: &str) -> Self {
        Self {
            author: Some(author.to_string()),
            body: Some(body.to_string()),
        }
    }
}
