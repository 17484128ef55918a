use std::time::Duration;

use jugaad_guru::app::{App, AppMode};
use jugaad_guru::modules::assistant::{telegram, voice, AssistantKind, Topic};
use jugaad_guru::modules::conversation::Origin;
use jugaad_guru::modules::navigation::Route;
use jugaad_guru::modules::session::{LocalStorage, MemoryStorage, AUTH_FLAG_KEY};
use jugaad_guru::util::database::Database;
use jugaad_guru::util::io::event::{AppEvent, Event, EventHandler};
use jugaad_guru::AppConfig;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use tempfile::TempDir;

fn guest_app() -> App {
    let mut app = App::with_storage(
        AppConfig::default(),
        Box::new(MemoryStorage::new()),
        EventHandler::detached(),
    )
    .unwrap();
    app.dismiss_splash();
    app
}

/// Handles every app event already queued, the way the main loop would
async fn drain(app: &mut App) {
    while let Some(event) = app.events.try_next() {
        if let Event::App(app_event) = event {
            app.handle_app_event(app_event).await.unwrap();
        }
    }
}

async fn press(app: &mut App, code: KeyCode) {
    app.handle_key_events(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    drain(app).await;
}

async fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch)).await;
    }
}

/// Waits (in paused time) for the next queued app event and applies it
async fn handle_next(app: &mut App) -> AppEvent {
    let event = tokio::time::timeout(Duration::from_secs(10), app.events.next())
        .await
        .expect("event should arrive")
        .unwrap();
    match event {
        Event::App(app_event) => {
            app.handle_app_event(app_event.clone()).await.unwrap();
            app_event
        }
        other => panic!("expected an app event, got {:?}", other),
    }
}

/// Applies queued events until a scheduled reply lands
async fn deliver_next_reply(app: &mut App) -> (AssistantKind, String) {
    loop {
        if let AppEvent::AssistantReply(kind, text) = handle_next(app).await {
            return (kind, text);
        }
    }
}

fn screen_text(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    terminal
        .draw(|frame| frame.render_widget(&mut *app, frame.area()))
        .unwrap();
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[tokio::test(start_paused = true)]
async fn telegram_water_question_end_to_end() {
    let mut app = guest_app();
    press(&mut app, KeyCode::Enter).await; // nothing typed yet: stays on auth
    assert!(matches!(handle_next(&mut app).await, AppEvent::LoginFinished { .. }));
    assert_eq!(app.router.current(), &Route::Auth);
    app.handle_app_event(AppEvent::GuestLogin).await.unwrap();
    assert_eq!(app.router.current(), &Route::Dashboard);

    press(&mut app, KeyCode::Char('t')).await;
    assert_eq!(app.overlay_focus, Some(AssistantKind::Telegram));

    let before = app.telegram.conversation().len();
    type_text(&mut app, "How can I save water?").await;
    press(&mut app, KeyCode::Enter).await;

    let log = app.telegram.conversation();
    assert_eq!(log.len(), before + 1);
    assert_eq!(log.last().unwrap().origin, Origin::User);
    assert_eq!(log.last().unwrap().text, "How can I save water?");
    assert!(screen_text(&mut app).contains("Typing..."));

    let (kind, text) = deliver_next_reply(&mut app).await;
    assert_eq!(kind, AssistantKind::Telegram);
    assert_eq!(text, telegram::WATER_TIPS);

    let log = app.telegram.conversation();
    assert_eq!(log.len(), before + 2);
    assert_eq!(log.last().unwrap().origin, Origin::Assistant);
    assert!(!app.telegram.is_processing());

    // The voice conversation is untouched
    assert_eq!(app.voice.conversation().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn replies_arrive_in_submission_order() {
    let mut app = guest_app();
    app.handle_app_event(AppEvent::GuestLogin).await.unwrap();
    press(&mut app, KeyCode::Char('t')).await;

    for question in ["electricity bill", "plastic bags", "water usage"] {
        type_text(&mut app, question).await;
        press(&mut app, KeyCode::Enter).await;
    }
    assert_eq!(app.telegram.conversation().pending_replies(), 3);

    let mut replies = Vec::new();
    for _ in 0..3 {
        replies.push(deliver_next_reply(&mut app).await.1);
    }
    assert_eq!(
        replies,
        vec![telegram::ENERGY_TIPS, telegram::PACKAGING_TIPS, telegram::WATER_TIPS]
    );

    // Questions are logged right away, replies queue up behind them
    let texts: Vec<&str> = app
        .telegram
        .conversation()
        .messages()
        .iter()
        .map(|m| m.text.as_str())
        .collect();
    assert_eq!(&texts[1..3], &["electricity bill", "plastic bags"]);
    assert_eq!(texts.len(), 7);
}

#[tokio::test(start_paused = true)]
async fn blank_submissions_change_nothing() {
    let mut app = guest_app();
    app.handle_app_event(AppEvent::GuestLogin).await.unwrap();
    press(&mut app, KeyCode::Char('a')).await;
    assert_eq!(app.overlay_focus, Some(AssistantKind::Voice));

    press(&mut app, KeyCode::Enter).await;
    type_text(&mut app, "   ").await;
    press(&mut app, KeyCode::Enter).await;

    assert_eq!(app.voice.conversation().len(), 1);
    assert!(!app.voice.is_processing());
    tokio::time::sleep(Duration::from_secs(10)).await;
    assert!(app.events.try_next().is_none());
}

#[tokio::test(start_paused = true)]
async fn voice_recording_sends_the_transcription() {
    let mut app = guest_app();
    app.handle_app_event(AppEvent::GuestLogin).await.unwrap();
    press(&mut app, KeyCode::Char('a')).await;

    app.handle_key_events(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL))
        .unwrap();
    assert!(app.voice.is_recording());
    assert!(screen_text(&mut app).contains("Listening..."));

    // Typing is ignored while listening; Enter stops and sends
    type_text(&mut app, "xyz").await;
    press(&mut app, KeyCode::Enter).await;

    assert_eq!(app.voice.conversation().last().unwrap().text, voice::MOCK_TRANSCRIPTION);
    let (_, text) = deliver_next_reply(&mut app).await;
    assert_eq!(text, voice::SUSTAINABILITY_TIPS);
}

#[test]
fn rule_priority_per_assistant() {
    let voice_rules = AssistantKind::Voice.rule_table();
    let telegram_rules = AssistantKind::Telegram.rule_table();

    assert_eq!(voice_rules.resolve("hello, any reward for me?"), Topic::Rewards);
    assert_eq!(voice_rules.resolve("a fine for sustainability"), Topic::Sustainability);
    assert_eq!(telegram_rules.resolve("water reward"), Topic::Water);
    assert_eq!(voice_rules.resolve("water reward"), Topic::Rewards);
    assert_eq!(telegram_rules.resolve("good morning"), Topic::Fallback);
    assert_eq!(telegram_rules.respond("PLASTIC and ENERGY"), telegram::ENERGY_TIPS);
}

#[tokio::test(start_paused = true)]
async fn session_survives_a_restart() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("jugaad.db");

    {
        let mut app = App::with_storage(
            AppConfig::default(),
            Box::new(Database::new(&db_path).unwrap()),
            EventHandler::detached(),
        )
        .unwrap();
        app.dismiss_splash();
        assert_eq!(app.router.current(), &Route::Auth);

        type_text(&mut app, "rajesh@example.com").await;
        press(&mut app, KeyCode::Tab).await;
        type_text(&mut app, "secret").await;
        press(&mut app, KeyCode::Enter).await;
        assert!(screen_text(&mut app).contains("Signing in..."));
        handle_next(&mut app).await;

        assert!(app.session.state().is_authenticated);
        assert_eq!(app.router.current(), &Route::Dashboard);
    }

    let database = Database::new(&db_path).unwrap();
    assert_eq!(database.get_item(AUTH_FLAG_KEY).unwrap().as_deref(), Some("true"));

    let mut app = App::with_storage(AppConfig::default(), Box::new(database), EventHandler::detached())
        .unwrap();
    assert_eq!(app.router.current(), &Route::Dashboard);
    assert_eq!(app.session.state().display_name(), "Rajesh Kumar");

    app.dismiss_splash();
    press(&mut app, KeyCode::Char('t')).await;
    type_text(&mut app, "water").await;
    press(&mut app, KeyCode::Enter).await;
    deliver_next_reply(&mut app).await;
    press(&mut app, KeyCode::Esc).await;

    press(&mut app, KeyCode::Char('o')).await;
    assert_eq!(app.router.current(), &Route::Auth);
    assert_eq!(app.telegram.conversation().len(), 1);
    assert!(!app.session.state().is_authenticated);

    let database = Database::new(&db_path).unwrap();
    assert_eq!(database.get_item(AUTH_FLAG_KEY).unwrap(), None);
}

#[tokio::test]
async fn screens_render_their_content() {
    let mut app = App::with_storage(
        AppConfig::default(),
        Box::new(MemoryStorage::new()),
        EventHandler::detached(),
    )
    .unwrap();
    assert_eq!(app.mode, AppMode::Splash);
    assert!(screen_text(&mut app).contains("Sustainability with svalpa jugaad"));

    app.dismiss_splash();
    assert!(screen_text(&mut app).contains("Continue as Guest"));

    app.handle_app_event(AppEvent::GuestLogin).await.unwrap();
    let dashboard = screen_text(&mut app);
    assert!(dashboard.contains("Welcome, Guest"));
    assert!(dashboard.contains("Business Sectors"));

    press(&mut app, KeyCode::Char('4')).await;
    assert_eq!(app.router.current(), &Route::Fines);
    assert!(screen_text(&mut app).contains("Good standing"));

    app.handle_app_event(AppEvent::Navigate(Route::Sector("99".to_string())))
        .await
        .unwrap();
    assert!(screen_text(&mut app).contains("Sector not found"));

    press(&mut app, KeyCode::Esc).await;
    assert_eq!(app.router.current(), &Route::Fines);
}
