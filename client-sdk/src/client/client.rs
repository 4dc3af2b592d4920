use warden_interfaces::api::{
    activity::interface::ActivityClientInterface, agents::interface::AgentsClientInterface,
    siwe::interface::SiweClientInterface,
};

use crate::external_api::utils::time::sleep_for;

use super::config::ClientConfig;

/// Everything one account run talks to. Login lives in `auth`, activity
/// reporting in `activity`, the chat task in `chat`.
pub struct Client<S, A, G>
where
    S: SiweClientInterface,
    A: ActivityClientInterface,
    G: AgentsClientInterface,
{
    pub siwe: S,
    pub activity: A,
    pub agents: G,
    pub config: ClientConfig,
}

impl<S, A, G> Client<S, A, G>
where
    S: SiweClientInterface,
    A: ActivityClientInterface,
    G: AgentsClientInterface,
{
    /// Waits the configured delay between steps.
    pub async fn pause(&self) {
        sleep_for(self.config.task_delay()).await;
    }
}
