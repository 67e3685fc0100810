use parking_lot::Mutex;
use std::io::{BufRead, Write};
use taskboard_core::{Location, PageHost};

/// Page host for a terminal: alerts and redirects go to stderr, questions
/// are answered on stdin.
pub struct TerminalHost {
    assume_yes: bool,
    alerts: Mutex<Vec<String>>,
    navigations: Mutex<Vec<Location>>,
}

impl TerminalHost {
    pub fn new(assume_yes: bool) -> Self {
        Self {
            assume_yes,
            alerts: Mutex::new(Vec::new()),
            navigations: Mutex::new(Vec::new()),
        }
    }

    pub fn last_alert(&self) -> Option<String> {
        self.alerts.lock().last().cloned()
    }

    pub fn last_navigation(&self) -> Option<Location> {
        self.navigations.lock().last().copied()
    }
}

impl PageHost for TerminalHost {
    fn show_overlay(&self) {
        tracing::debug!("waiting for backend");
    }

    fn hide_overlay(&self) {
        tracing::debug!("backend answered");
    }

    fn alert(&self, message: &str) {
        eprintln!("{}", message);
        self.alerts.lock().push(message.to_string());
    }

    fn confirm(&self, question: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        eprint!("{} [y/N] ", question);
        let _ = std::io::stderr().flush();
        read_answer(std::io::stdin().lock())
    }

    fn navigate(&self, location: Location) {
        eprintln!("-> {}", location);
        self.navigations.lock().push(location);
    }
}

/// Read one y/N line. The read blocks, so it runs via `block_in_place` to
/// keep the runtime's other tasks moving.
fn read_answer(mut input: impl BufRead) -> bool {
    let mut answer = String::new();
    if tokio::task::block_in_place(|| input.read_line(&mut answer)).is_err() {
        return false;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
