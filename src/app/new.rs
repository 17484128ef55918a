use color_eyre::Result;
use std::time::Instant;

use super::{App, AppMode};
use crate::log_info;
use crate::modules::{
    assistant::{AssistantHandler, AssistantKind},
    catalog::MockDataStore,
    conversation::ReplyScheduler,
    navigation::{Route, Router},
    screens::ScreenState,
    session::{LocalStorage, SessionController},
};
use crate::util::{config::AppConfig, database::Database, io::event::EventHandler, log};

impl App {
    /// Constructs a new instance of [`App`] backed by the on-disk database.
    pub async fn new(config: AppConfig) -> Result<Self> {
        log::init(&config.log_dir)?;
        let database = Database::new(&config.database_path)?;
        Self::with_storage(config, Box::new(database), EventHandler::new())
    }

    /// Builds the app around any storage and event source. Spawns the reply
    /// workers, so it must run inside a tokio runtime.
    pub fn with_storage(
        config: AppConfig,
        storage: Box<dyn LocalStorage>,
        events: EventHandler,
    ) -> Result<Self> {
        let store = MockDataStore::load()?;

        let mut session = SessionController::new(storage, store.user.clone(), config.login_delay());
        session.set_dark_mode(config.dark_mode);
        let restored = session.restore()?;

        let start = if restored { Route::Dashboard } else { Route::Auth };
        log_info!("Starting at {} (session restored: {})", start.path(), restored);

        let voice = spawn_assistant(AssistantKind::Voice, &config, &events);
        let telegram = spawn_assistant(AssistantKind::Telegram, &config, &events);

        Ok(Self {
            running: true,
            mode: AppMode::Splash,
            start_time: Instant::now(),
            screen: ScreenState::for_route(&start, &store),
            router: Router::new(start),
            config,
            store,
            session,
            voice,
            telegram,
            telegram_open: false,
            overlay_focus: None,
            events,
        })
    }
}

/// A fresh widget with only its greeting and its own reply worker
pub(super) fn spawn_assistant(
    kind: AssistantKind,
    config: &AppConfig,
    events: &EventHandler,
) -> AssistantHandler {
    AssistantHandler::new(kind, ReplyScheduler::spawn(config.reply_delay(), events.sender()))
}
