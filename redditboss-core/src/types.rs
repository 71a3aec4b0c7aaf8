use serde::{Deserialize, Serialize};

/// A candidate Reddit post plus an AI-generated comment the user may want
/// to post in response. Fields arrive verbatim from the analysis backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: String,
    pub title: String,
    pub subreddit: String,
    pub comment_suggestion: String,
    pub url: String,
}

/// Request body for the analyze-content endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}
