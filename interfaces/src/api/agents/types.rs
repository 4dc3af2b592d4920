use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateThreadRequest {}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateThreadResponse {
    pub thread_id: String,
}
