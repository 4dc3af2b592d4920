use serde::Deserialize;
use warden_client_sdk::{
    client::config::DEFAULT_TASK_DELAY_MS,
    external_api::{
        activity::DEFAULT_WARDEN_API_BASE_URL,
        agents::DEFAULT_AGENTS_BASE_URL,
        siwe::{DEFAULT_PRIVY_APP_ID, DEFAULT_PRIVY_BASE_URL},
    },
    utils::logger::LogStyle,
};

pub const DEFAULT_QUESTIONS_PATH: &str = "question_lists.json";

#[derive(Debug, Clone, Deserialize)]
pub struct EnvVar {
    // account
    pub private_key: Option<String>,

    // pacing and repetition
    #[serde(default = "default_task_delay")]
    pub delay_between_tasks_ms: u64,
    #[serde(default = "default_min")]
    pub min_game_plays: u32,
    #[serde(default = "default_max")]
    pub max_game_plays: u32,
    #[serde(default = "default_min")]
    pub min_chats: u32,
    #[serde(default = "default_max")]
    pub max_chats: u32,

    // input and output
    #[serde(default = "default_questions_path")]
    pub questions_path: String,
    #[serde(default)]
    pub log_style: LogStyle,

    // endpoints
    #[serde(default = "default_privy_base_url")]
    pub privy_base_url: String,
    #[serde(default = "default_privy_app_id")]
    pub privy_app_id: String,
    #[serde(default = "default_warden_api_base_url")]
    pub warden_api_base_url: String,
    #[serde(default = "default_agents_base_url")]
    pub agents_base_url: String,
    pub agents_api_key: Option<String>,
}

impl Default for EnvVar {
    fn default() -> Self {
        Self {
            private_key: None,
            delay_between_tasks_ms: default_task_delay(),
            min_game_plays: default_min(),
            max_game_plays: default_max(),
            min_chats: default_min(),
            max_chats: default_max(),
            questions_path: default_questions_path(),
            log_style: LogStyle::default(),
            privy_base_url: default_privy_base_url(),
            privy_app_id: default_privy_app_id(),
            warden_api_base_url: default_warden_api_base_url(),
            agents_base_url: default_agents_base_url(),
            agents_api_key: None,
        }
    }
}

fn default_task_delay() -> u64 {
    DEFAULT_TASK_DELAY_MS
}

fn default_min() -> u32 {
    1
}

fn default_max() -> u32 {
    2
}

fn default_questions_path() -> String {
    DEFAULT_QUESTIONS_PATH.to_string()
}

fn default_privy_base_url() -> String {
    DEFAULT_PRIVY_BASE_URL.to_string()
}

fn default_privy_app_id() -> String {
    DEFAULT_PRIVY_APP_ID.to_string()
}

fn default_warden_api_base_url() -> String {
    DEFAULT_WARDEN_API_BASE_URL.to_string()
}

fn default_agents_base_url() -> String {
    DEFAULT_AGENTS_BASE_URL.to_string()
}
