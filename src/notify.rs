//! User-facing notifications ("toasts").

use crate::app::GetConsole;

use entrait::*;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Level {
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Toast {
    pub level: Level,
    pub text: String,
}

impl fmt::Display for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.level {
            Level::Success => "ok",
            Level::Warning => "warning",
            Level::Error => "error",
        };
        write!(f, "[{tag}] {}", self.text)
    }
}

/// Prints toasts on the terminal. There is nothing to dismiss afterwards.
#[derive(Clone, Debug, Default)]
pub struct Console;

impl Console {
    pub fn show(&self, level: Level, text: &str) {
        let toast = Toast {
            level,
            text: text.to_string(),
        };
        match level {
            Level::Success => tracing::info!("notify: {}", toast.text),
            Level::Warning => tracing::warn!("notify: {}", toast.text),
            Level::Error => tracing::error!("notify: {}", toast.text),
        }
        println!("{toast}");
    }
}

#[entrait(pub Notify, mock_api=NotifyMock)]
pub mod notifier {
    use super::*;

    pub fn success(deps: &impl GetConsole, text: &str) {
        deps.get_console().show(Level::Success, text);
    }

    pub fn warning(deps: &impl GetConsole, text: &str) {
        deps.get_console().show(Level::Warning, text);
    }

    pub fn error(deps: &impl GetConsole, text: &str) {
        deps.get_console().show(Level::Error, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::GetConsoleMock;

    use unimock::*;

    #[test]
    fn notifier_shows_toasts_on_the_console() {
        let deps = Unimock::new_partial(
            GetConsoleMock
                .each_call(matching!())
                .returns(Console::default()),
        );

        deps.success("Profile updated");
        deps.warning("Image must be less than 2 MB.");
        deps.error("Failed to update image");
    }

    #[test]
    fn toast_display() {
        let toast = Toast {
            level: Level::Warning,
            text: "Image must be less than 2 MB.".to_string(),
        };

        assert_eq!("[warning] Image must be less than 2 MB.", toast.to_string());
    }
}
