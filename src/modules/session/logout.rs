use crate::error::Result;
use crate::log_info;

use super::{SessionController, AUTH_FLAG_KEY};

impl SessionController {
    pub fn logout(&mut self) -> Result<()> {
        self.state.user = None;
        self.state.is_authenticated = false;
        self.storage.remove_item(AUTH_FLAG_KEY)?;
        log_info!("Signed out");
        Ok(())
    }
}
