//! Terminal session lifecycle
//!
//! [`TerminalSession`] enters raw mode and the alternate screen and undoes
//! whichever of the two succeeded when it is dropped, including when entering
//! fails partway.

use crate::error::{Result, ShopListError};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::{self, stdout};
use tracing::{debug, warn};

type Step = fn() -> io::Result<()>;

/// The four terminal transitions a session performs.
#[derive(Clone, Copy)]
struct Steps {
    enable_raw: Step,
    disable_raw: Step,
    enter_screen: Step,
    leave_screen: Step,
}

fn enter_alternate_screen() -> io::Result<()> {
    execute!(stdout(), EnterAlternateScreen)
}

fn leave_alternate_screen() -> io::Result<()> {
    execute!(stdout(), LeaveAlternateScreen)
}

const CROSSTERM_STEPS: Steps = Steps {
    enable_raw: enable_raw_mode,
    disable_raw: disable_raw_mode,
    enter_screen: enter_alternate_screen,
    leave_screen: leave_alternate_screen,
};

/// Raw mode plus alternate screen, restored on drop.
pub struct TerminalSession {
    steps: Steps,
    raw: bool,
    alternate: bool,
}

impl TerminalSession {
    /// Put the controlling terminal into TUI mode.
    pub fn enter() -> Result<Self> {
        Self::enter_with(CROSSTERM_STEPS)
    }

    fn enter_with(steps: Steps) -> Result<Self> {
        let mut session = Self {
            steps,
            raw: false,
            alternate: false,
        };

        (steps.enable_raw)()
            .map_err(|e| ShopListError::terminal(format!("Failed to enable raw mode: {e}")))?;
        session.raw = true;

        // on failure `session` drops here and leaves raw mode
        (steps.enter_screen)().map_err(|e| {
            ShopListError::terminal(format!("Failed to enter alternate screen: {e}"))
        })?;
        session.alternate = true;

        debug!("Terminal session entered");
        Ok(session)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if self.alternate {
            if let Err(e) = (self.steps.leave_screen)() {
                warn!("Failed to leave alternate screen: {}", e);
            }
        }
        if self.raw {
            if let Err(e) = (self.steps.disable_raw)() {
                warn!("Failed to disable raw mode: {}", e);
            }
        }
        debug!("Terminal session restored");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    thread_local! {
        static CALLS: RefCell<Vec<&'static str>> = const { RefCell::new(Vec::new()) };
    }

    fn record(step: &'static str) {
        CALLS.with(|calls| calls.borrow_mut().push(step));
    }

    fn calls() -> Vec<&'static str> {
        CALLS.with(|calls| calls.borrow().clone())
    }

    fn enable_raw() -> io::Result<()> {
        record("enable_raw");
        Ok(())
    }

    fn disable_raw() -> io::Result<()> {
        record("disable_raw");
        Ok(())
    }

    fn enter_screen() -> io::Result<()> {
        record("enter_screen");
        Ok(())
    }

    fn leave_screen() -> io::Result<()> {
        record("leave_screen");
        Ok(())
    }

    fn broken(step: &'static str) -> io::Result<()> {
        record(step);
        Err(io::Error::other("not a terminal"))
    }

    fn broken_raw() -> io::Result<()> {
        broken("enable_raw")
    }

    fn broken_screen() -> io::Result<()> {
        broken("enter_screen")
    }

    fn steps() -> Steps {
        Steps {
            enable_raw,
            disable_raw,
            enter_screen,
            leave_screen,
        }
    }

    #[test]
    fn test_session_restores_in_reverse_order() {
        let session = TerminalSession::enter_with(steps()).unwrap();
        assert_eq!(calls(), vec!["enable_raw", "enter_screen"]);

        drop(session);
        assert_eq!(
            calls(),
            vec!["enable_raw", "enter_screen", "leave_screen", "disable_raw"]
        );
    }

    #[test]
    fn test_failed_alternate_screen_leaves_raw_mode() {
        let steps = Steps {
            enter_screen: broken_screen,
            ..steps()
        };

        let err = TerminalSession::enter_with(steps).err().unwrap();
        assert!(matches!(err, ShopListError::Terminal(_)));
        assert!(err.to_string().contains("alternate screen"));
        assert_eq!(calls(), vec!["enable_raw", "enter_screen", "disable_raw"]);
    }

    #[test]
    fn test_failed_raw_mode_restores_nothing() {
        let steps = Steps {
            enable_raw: broken_raw,
            ..steps()
        };

        let err = TerminalSession::enter_with(steps).err().unwrap();
        assert!(err.to_string().contains("raw mode"));
        assert_eq!(calls(), vec!["enable_raw"]);
    }
}
