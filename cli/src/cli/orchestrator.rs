use rand::Rng;
use warden_client_sdk::{client::client::Client, utils::signature::Credential};
use warden_interfaces::{
    api::{
        activity::{
            interface::ActivityClientInterface,
            types::{ActivityOutcome, ActivityRecord, ActivityType},
        },
        agents::interface::AgentsClientInterface,
        siwe::interface::SiweClientInterface,
    },
    data::{question_list::QuestionList, repeat_range::RepeatRange},
};

use super::{client::get_client, config::BotConfig, error::CliError};

/// How often the repeatable tasks run. Counts are drawn once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskSchedule {
    pub game_plays: RepeatRange,
    pub chats: RepeatRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Start,
    Authenticated,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOutcome {
    Recorded,
    AlreadyRecorded,
    Failed,
}

impl<E> From<&Result<ActivityOutcome, E>> for TaskOutcome {
    fn from(result: &Result<ActivityOutcome, E>) -> Self {
        match result {
            Ok(ActivityOutcome::Recorded) => TaskOutcome::Recorded,
            Ok(ActivityOutcome::AlreadyRecorded) => TaskOutcome::AlreadyRecorded,
            Err(_) => TaskOutcome::Failed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskReport {
    pub activity: ActivityType,
    pub outcome: TaskOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub state: RunState,
    pub authenticated: bool,
    pub game_plays: u32,
    pub chats: u32,
    pub tasks: Vec<TaskReport>,
}

impl RunReport {
    fn new() -> Self {
        Self {
            state: RunState::Start,
            authenticated: false,
            game_plays: 0,
            chats: 0,
            tasks: Vec::new(),
        }
    }

    pub fn count(&self, outcome: TaskOutcome) -> usize {
        self.tasks.iter().filter(|t| t.outcome == outcome).count()
    }

    fn push(&mut self, activity: ActivityType, outcome: TaskOutcome) {
        self.tasks.push(TaskReport { activity, outcome });
    }
}

/// Login, then the LOGIN ping, the game plays and the chats, with the
/// configured pause before every step. Task failures never stop the run.
pub async fn run_daily_tasks<S, A, G, R>(
    client: &Client<S, A, G>,
    credential: &Credential,
    questions: &QuestionList,
    schedule: &TaskSchedule,
    rng: &mut R,
) -> RunReport
where
    S: SiweClientInterface,
    A: ActivityClientInterface,
    G: AgentsClientInterface,
    R: Rng + ?Sized,
{
    log::info!("--- Starting Warden daily activity bot ---");
    let mut report = RunReport::new();

    let Some(token) = client.login(credential).await else {
        log::warn!("Login failed, no further tasks will run.");
        report.state = RunState::Done;
        log::info!("--- All tasks for today are done. ---");
        return report;
    };
    report.state = RunState::Authenticated;
    report.authenticated = true;

    client.pause().await;
    let result = client
        .report_activity(&token, &ActivityRecord::login())
        .await;
    report.push(ActivityType::Login, TaskOutcome::from(&result));

    report.game_plays = schedule.game_plays.draw(rng);
    report.chats = schedule.chats.draw(rng);
    log::info!(
        "Planned {} game play(s) and {} chat(s)",
        report.game_plays,
        report.chats
    );

    for i in 1..=report.game_plays {
        client.pause().await;
        log::info!("Game play {i}/{}", report.game_plays);
        let result = client
            .report_activity(&token, &ActivityRecord::game_play())
            .await;
        report.push(ActivityType::GamePlay, TaskOutcome::from(&result));
    }

    for i in 1..=report.chats {
        client.pause().await;
        log::info!("Chat {i}/{}", report.chats);
        let result = client.chat(&token, questions, rng).await;
        report.push(ActivityType::ChatInteraction, TaskOutcome::from(&result));
    }

    report.state = RunState::Done;
    log::info!(
        "Summary: {} recorded, {} already done, {} failed",
        report.count(TaskOutcome::Recorded),
        report.count(TaskOutcome::AlreadyRecorded),
        report.count(TaskOutcome::Failed)
    );
    log::info!("--- All tasks for today are done. ---");
    report
}

/// Loads the question list, builds the clients and runs once.
pub async fn run<R: Rng + ?Sized>(
    config: &BotConfig,
    rng: &mut R,
) -> Result<RunReport, CliError> {
    let questions = config.load_questions()?;
    let client = get_client(config)?;
    let report = run_daily_tasks(
        &client,
        &config.credential,
        &questions,
        &config.schedule,
        rng,
    )
    .await;
    Ok(report)
}
