//! Chain members: /start greeting, the lookup handler, and logging middleware.

mod logging;
mod lookup;
mod start;

pub use logging::LoggingMiddleware;
pub use lookup::LookupHandler;
pub use start::StartHandler;

/// Returns the command name if `text` is a bot command (`/start`, `/start@MyBot arg` → `"start"`).
pub(crate) fn command_name(text: &str) -> Option<&str> {
    let first = text.trim().split_whitespace().next()?;
    let command = first.strip_prefix('/')?;
    let name = command.split('@').next().unwrap_or(command);
    Some(name)
}
