use std::path::PathBuf;

use warden_client_sdk::{
    client::config::ClientConfig,
    utils::{logger::LogStyle, signature::Credential},
};
use warden_interfaces::data::{
    question_list::QuestionList, repeat_range::RepeatRange, sign_in_message::SignInConfig,
};

use crate::{args::Args, env_var::EnvVar};

use super::{error::CliError, orchestrator::TaskSchedule};

#[derive(Debug, Clone)]
pub struct Endpoints {
    pub privy_base_url: String,
    pub privy_app_id: String,
    pub warden_api_base_url: String,
    pub agents_base_url: String,
    pub agents_api_key: Option<String>,
}

/// Everything a run needs, built once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub credential: Credential,
    pub client: ClientConfig,
    pub schedule: TaskSchedule,
    pub questions_path: PathBuf,
    pub log_style: LogStyle,
    pub endpoints: Endpoints,
}

impl BotConfig {
    /// Reads the process environment (after `.env`) and applies CLI overrides.
    pub fn load(args: &Args) -> Result<Self, CliError> {
        let env = envy::from_env::<EnvVar>()?;
        let mut config = Self::from_env_var(env)?;
        if let Some(path) = &args.questions {
            config.questions_path = path.clone();
        }
        if let Some(style) = args.log_style {
            config.log_style = style;
        }
        Ok(config)
    }

    pub fn from_env_var(env: EnvVar) -> Result<Self, CliError> {
        let private_key = env.private_key.ok_or(CliError::MissingPrivateKey)?;
        let credential = Credential::from_private_key(&private_key)?;

        let game_plays = RepeatRange::new(env.min_game_plays, env.max_game_plays).map_err(
            |source| CliError::InvalidRange {
                name: "MIN_GAME_PLAYS/MAX_GAME_PLAYS",
                source,
            },
        )?;
        let chats = RepeatRange::new(env.min_chats, env.max_chats).map_err(|source| {
            CliError::InvalidRange {
                name: "MIN_CHATS/MAX_CHATS",
                source,
            }
        })?;

        Ok(Self {
            credential,
            client: ClientConfig {
                task_delay_ms: env.delay_between_tasks_ms,
                sign_in: SignInConfig::default(),
            },
            schedule: TaskSchedule { game_plays, chats },
            questions_path: PathBuf::from(env.questions_path),
            log_style: env.log_style,
            endpoints: Endpoints {
                privy_base_url: env.privy_base_url,
                privy_app_id: env.privy_app_id,
                warden_api_base_url: env.warden_api_base_url,
                agents_base_url: env.agents_base_url,
                agents_api_key: env.agents_api_key,
            },
        })
    }

    pub fn load_questions(&self) -> Result<QuestionList, CliError> {
        Ok(QuestionList::load(&self.questions_path)?)
    }
}
