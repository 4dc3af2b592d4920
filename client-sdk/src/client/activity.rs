use warden_interfaces::{
    api::{
        activity::{
            interface::ActivityClientInterface,
            types::{ActivityOutcome, ActivityRecord},
        },
        agents::interface::AgentsClientInterface,
        error::ServerError,
        siwe::interface::SiweClientInterface,
    },
    data::session_token::SessionToken,
};

use super::client::Client;

impl<S, A, G> Client<S, A, G>
where
    S: SiweClientInterface,
    A: ActivityClientInterface,
    G: AgentsClientInterface,
{
    /// Submits `record` and logs the outcome. A duplicate for today is a
    /// warning, not an error.
    pub async fn report_activity(
        &self,
        token: &SessionToken,
        record: &ActivityRecord,
    ) -> Result<ActivityOutcome, ServerError> {
        let activity_type = record.activity_type;
        let result = self.activity.submit_activity(token, record).await;
        match &result {
            Ok(ActivityOutcome::Recorded) => {
                log::info!("Activity {activity_type}: recorded");
            }
            Ok(ActivityOutcome::AlreadyRecorded) => {
                log::warn!("Activity {activity_type}: already done today");
            }
            Err(e) => {
                log::error!("Activity {activity_type} failed: {e}");
            }
        }
        result
    }
}
