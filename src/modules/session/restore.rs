use crate::error::Result;
use crate::log_info;

use super::{SessionController, AUTH_FLAG_KEY};

impl SessionController {
    /// Startup check: a stored `"true"` flag signs the mock user back in.
    /// Returns whether a session was restored.
    pub fn restore(&mut self) -> Result<bool> {
        let flag = self.storage.get_item(AUTH_FLAG_KEY)?;
        if flag.as_deref() != Some("true") {
            return Ok(false);
        }

        self.state.user = Some(self.mock_user.clone());
        self.state.is_authenticated = true;
        log_info!("Restored session for {}", self.mock_user.email);
        Ok(true)
    }
}
