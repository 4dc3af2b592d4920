use std::time::Duration;

use serde::{Deserialize, Serialize};
use warden_interfaces::data::sign_in_message::SignInConfig;

pub const DEFAULT_TASK_DELAY_MS: u64 = 3000;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Pause between consecutive steps of a run.
    pub task_delay_ms: u64,
    pub sign_in: SignInConfig,
}

impl ClientConfig {
    pub fn task_delay(&self) -> Duration {
        Duration::from_millis(self.task_delay_ms)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            task_delay_ms: DEFAULT_TASK_DELAY_MS,
            sign_in: SignInConfig::default(),
        }
    }
}
