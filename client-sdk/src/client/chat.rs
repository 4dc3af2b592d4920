use rand::Rng;
use warden_interfaces::{
    api::{
        activity::{
            interface::ActivityClientInterface,
            types::{ActivityOutcome, ActivityRecord},
        },
        agents::interface::AgentsClientInterface,
        siwe::interface::SiweClientInterface,
    },
    data::{question_list::QuestionList, session_token::SessionToken},
};

use super::{client::Client, error::ChatError};

impl<S, A, G> Client<S, A, G>
where
    S: SiweClientInterface,
    A: ActivityClientInterface,
    G: AgentsClientInterface,
{
    /// One simulated AI chat: open a thread, pick a question, report the
    /// interaction. The thread is abandoned and no reply is read.
    pub async fn chat<R: Rng + ?Sized>(
        &self,
        token: &SessionToken,
        questions: &QuestionList,
        rng: &mut R,
    ) -> Result<ActivityOutcome, ChatError> {
        log::info!("Starting AI chat task...");
        let result = self.chat_inner(token, questions, rng).await;
        if let Err(ChatError::Thread(e)) = &result {
            // activity failures are already logged by report_activity
            log::error!("AI chat task failed: {e}");
        }
        result
    }

    async fn chat_inner<R: Rng + ?Sized>(
        &self,
        token: &SessionToken,
        questions: &QuestionList,
        rng: &mut R,
    ) -> Result<ActivityOutcome, ChatError> {
        let thread_id = self
            .agents
            .create_thread(token)
            .await
            .map_err(ChatError::Thread)?;
        log::info!("Chat thread {thread_id} started");
        self.pause().await;

        let question = questions.choose(rng);
        log::info!("Sending question: {question}");
        let record = ActivityRecord::chat_interaction(message_length(question));
        self.report_activity(token, &record)
            .await
            .map_err(ChatError::Activity)
    }
}

/// Length as the web app measures it, in UTF-16 code units.
fn message_length(question: &str) -> usize {
    question.encode_utf16().count()
}

#[cfg(test)]
mod tests {
    use mockito::{Matcher, Server};
    use rand::{rngs::StdRng, SeedableRng as _};
    use serde_json::json;

    use super::*;
    use crate::client::client::test_utils::mock_client;

    #[test]
    fn test_message_length_counts_utf16_units() {
        assert_eq!(message_length("What is Warden?"), 15);
        assert_eq!(message_length("héllo"), 5);
        assert_eq!(message_length("gm 🚀"), 5);
    }

    #[tokio::test]
    async fn test_chat_reports_question_length() {
        let mut server = Server::new_async().await;
        let thread = server
            .mock("POST", "/threads")
            .match_header("authorization", "Bearer jwt-token")
            .match_header("x-api-key", "test-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"thread_id": "t-1"}"#)
            .create_async()
            .await;
        let activity = server
            .mock("POST", "/tokens/activity")
            .match_body(Matcher::Json(json!({
                "activityType": "CHAT_INTERACTION",
                "metadata": {"action": "user_chat", "message_length": 15}
            })))
            .with_status(200)
            .create_async()
            .await;

        let client = mock_client(&server.url());
        let questions = QuestionList::new(vec!["What is Warden?".to_string()]).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let outcome = client
            .chat(&SessionToken::new("jwt-token"), &questions, &mut rng)
            .await
            .unwrap();

        assert_eq!(outcome, ActivityOutcome::Recorded);
        thread.assert_async().await;
        activity.assert_async().await;
    }

    #[tokio::test]
    async fn test_thread_failure_skips_activity() {
        let mut server = Server::new_async().await;
        let _thread = server
            .mock("POST", "/threads")
            .with_status(503)
            .with_body("Service Unavailable")
            .create_async()
            .await;
        let activity = server
            .mock("POST", "/tokens/activity")
            .expect(0)
            .create_async()
            .await;

        let client = mock_client(&server.url());
        let questions = QuestionList::new(vec!["gm".to_string()]).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let result = client
            .chat(&SessionToken::new("jwt-token"), &questions, &mut rng)
            .await;

        match result {
            Err(ChatError::Thread(e)) => assert_eq!(e.status(), Some(503)),
            other => panic!("expected thread error, got {other:?}"),
        }
        activity.assert_async().await;
    }

    #[tokio::test]
    async fn test_activity_failure_is_reported() {
        let mut server = Server::new_async().await;
        let _thread = server
            .mock("POST", "/threads")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"thread_id": "t-1"}"#)
            .create_async()
            .await;
        let _activity = server
            .mock("POST", "/tokens/activity")
            .with_status(500)
            .create_async()
            .await;

        let client = mock_client(&server.url());
        let questions = QuestionList::new(vec!["gm".to_string()]).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let result = client
            .chat(&SessionToken::new("jwt-token"), &questions, &mut rng)
            .await;
        assert!(matches!(result, Err(ChatError::Activity(_))));
    }
}
