pub mod app;
pub mod error;
pub mod modules;
pub mod ui;
pub mod util;

pub use app::App;
pub use error::{JugaadError, Result};
pub use util::config::AppConfig;
