use std::time::Duration;

use crate::error::{JugaadError, Result};
use crate::{log_debug, log_error};

use super::{SessionController, AUTH_FLAG_KEY};

impl SessionController {
    /// Mock sign-in: any non-empty email and password is accepted after the
    /// simulated round trip. Sign-up goes through here as well.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<()> {
        self.begin_login();
        tokio::time::sleep(self.login_delay).await;
        self.finish_login(email, password)
    }

    /// First half of [`SessionController::login`]. The caller owns the wait,
    /// so the UI keeps running while `is_loading` is set.
    pub fn begin_login(&mut self) {
        self.state.is_loading = true;
        tracing::info!("login requested");
    }

    /// Second half of [`SessionController::login`]: checks the credentials and
    /// clears `is_loading` on every path.
    pub fn finish_login(&mut self, email: &str, password: &str) -> Result<()> {
        let result = self.complete_login(email, password);

        self.state.is_loading = false;
        if let Err(e) = &result {
            log_error!("Login error: {}", e);
        }
        result
    }

    pub fn login_delay(&self) -> Duration {
        self.login_delay
    }

    fn complete_login(&mut self, email: &str, password: &str) -> Result<()> {
        if email.is_empty() || password.is_empty() {
            return Err(JugaadError::InvalidCredentials);
        }

        self.state.user = Some(self.mock_user.clone());
        self.state.is_authenticated = true;
        self.storage.set_item(AUTH_FLAG_KEY, "true")?;

        if let Ok(snapshot) = serde_json::to_string(&self.state) {
            log_debug!("Session after login: {}", snapshot);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use crate::error::{JugaadError, Result};
    use crate::modules::session::{LocalStorage, MemoryStorage, SessionController, User, AUTH_FLAG_KEY};

    /// Lets a test look at storage after handing it to the controller
    #[derive(Debug, Clone, Default)]
    struct SharedStorage(Arc<MemoryStorage>);

    impl LocalStorage for SharedStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>> {
            self.0.get_item(key)
        }
        fn set_item(&self, key: &str, value: &str) -> Result<()> {
            self.0.set_item(key, value)
        }
        fn remove_item(&self, key: &str) -> Result<()> {
            self.0.remove_item(key)
        }
    }

    fn mock_user() -> User {
        User {
            id: "1".to_string(),
            name: "Rajesh Kumar".to_string(),
            email: "rajesh@example.com".to_string(),
            phone: None,
            business_name: Some("Green Textiles".to_string()),
            sector: Some("Textile".to_string()),
            profile_image: None,
            sustainability_score: 78,
        }
    }

    fn controller(storage: SharedStorage) -> SessionController {
        SessionController::new(Box::new(storage), mock_user(), Duration::from_millis(1000))
    }

    #[tokio::test(start_paused = true)]
    async fn login_with_credentials_persists_the_flag() {
        let storage = SharedStorage::default();
        let mut session = controller(storage.clone());

        session.login("rajesh@example.com", "secret").await.unwrap();

        assert!(session.state().is_authenticated);
        assert!(!session.state().is_loading);
        assert_eq!(session.state().display_name(), "Rajesh Kumar");
        assert_eq!(storage.get_item(AUTH_FLAG_KEY).unwrap().as_deref(), Some("true"));
    }

    #[tokio::test(start_paused = true)]
    async fn empty_credentials_are_rejected() {
        let storage = SharedStorage::default();
        let mut session = controller(storage.clone());

        let result = session.login("", "secret").await;
        assert!(matches!(result, Err(JugaadError::InvalidCredentials)));
        let result = session.login("rajesh@example.com", "").await;
        assert!(matches!(result, Err(JugaadError::InvalidCredentials)));

        assert!(!session.state().is_authenticated);
        assert!(!session.state().is_loading);
        assert_eq!(session.state().display_name(), "Guest");
        assert_eq!(storage.get_item(AUTH_FLAG_KEY).unwrap(), None);
    }

    #[test]
    fn loading_flag_spans_both_halves() {
        let mut session = controller(SharedStorage::default());
        session.begin_login();
        assert!(session.state().is_loading);

        assert!(session.finish_login("", "").is_err());
        assert!(!session.state().is_loading);
    }

    #[test]
    fn restore_needs_the_exact_true_flag() {
        let storage = SharedStorage::default();
        storage.set_item(AUTH_FLAG_KEY, "yes").unwrap();
        let mut session = controller(storage.clone());
        assert!(!session.restore().unwrap());
        assert!(!session.state().is_authenticated);

        storage.set_item(AUTH_FLAG_KEY, "true").unwrap();
        let mut session = controller(storage);
        assert!(session.restore().unwrap());
        assert!(session.state().is_authenticated);
        assert_eq!(session.state().user, Some(mock_user()));
    }

    #[tokio::test(start_paused = true)]
    async fn logout_clears_state_and_storage() {
        let storage = SharedStorage::default();
        let mut session = controller(storage.clone());
        session.login("a@b.c", "pw").await.unwrap();

        session.logout().unwrap();
        assert!(!session.state().is_authenticated);
        assert_eq!(session.state().user, None);
        assert_eq!(storage.get_item(AUTH_FLAG_KEY).unwrap(), None);

        let mut fresh = controller(storage);
        assert!(!fresh.restore().unwrap());
    }

    #[test]
    fn toggles_flip_their_flags() {
        let mut session = controller(SharedStorage::default());
        session.toggle_dark_mode();
        session.toggle_assistant();
        assert!(session.state().dark_mode);
        assert!(session.state().assistant_active);
        session.toggle_assistant();
        assert!(!session.state().assistant_active);
    }
}
