use warden_client_sdk::{
    client::client::Client,
    external_api::{activity::ActivityClient, agents::AgentsClient, siwe::SiweClient},
};

use super::{config::BotConfig, error::CliError};

type S = SiweClient;
type A = ActivityClient;
type G = AgentsClient;

pub fn get_client(config: &BotConfig) -> Result<Client<S, A, G>, CliError> {
    let endpoints = &config.endpoints;
    let siwe = S::new(&endpoints.privy_base_url, &endpoints.privy_app_id)?;
    let activity = A::new(&endpoints.warden_api_base_url)?;
    let agents = G::new(
        &endpoints.agents_base_url,
        endpoints.agents_api_key.as_deref(),
    )?;

    let client = Client {
        siwe,
        activity,
        agents,
        config: config.client.clone(),
    };

    Ok(client)
}
