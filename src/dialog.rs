//! Restart prompt for theme selection
//!
//! Selecting a theme never re-themes a running host; it persists the choice
//! and asks the host to restart. The prompt used for that is blocking and
//! cannot be dismissed: the user either restarts or the dialog stays open.

use std::io::{self, BufRead, Write};

#[cfg(test)]
use mockall::automock;

/// Result of dialog interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogResult {
    /// User confirmed; the host should restart
    Confirm,
    /// Dialog is still open
    Open,
}

/// Content of a restart prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestartPrompt {
    pub title: String,
    pub body: String,
    pub confirm_text: String,
}

impl RestartPrompt {
    /// Prompt shown after a theme was selected
    pub fn theme_selected() -> Self {
        Self {
            title: "Restart for theme to apply".to_string(),
            body: "Restart the app for the theme to apply correctly.".to_string(),
            confirm_text: "Restart".to_string(),
        }
    }

    /// Prompt shown after the selection was cleared
    pub fn builtin_themes() -> Self {
        Self {
            title: "Restart to apply".to_string(),
            body: "Restart the app for it to use its own themes.".to_string(),
            confirm_text: "Restart".to_string(),
        }
    }
}

/// Host primitives the engine calls into after a selection change
#[cfg_attr(test, automock)]
pub trait HostRuntime {
    /// Show a blocking confirmation dialog
    fn show_dialog(&self, prompt: &RestartPrompt) -> DialogResult;

    /// Reload the app so the new theme is applied from a cold start
    fn reload(&self);
}

/// Show a restart prompt and reload the host if the user confirms
pub fn request_restart(host: &dyn HostRuntime, prompt: &RestartPrompt) -> DialogResult {
    let result = host.show_dialog(prompt);
    if result == DialogResult::Confirm {
        host.reload();
    }
    result
}

// ==================== Terminal dialog ====================

/// Line-based restart dialog
///
/// # Example
/// ```ignore
/// let mut dialog = RestartDialog::new(RestartPrompt::theme_selected());
/// dialog.show();
///
/// // For each line read from the user:
/// if dialog.handle_line(&line) == Some(DialogResult::Confirm) {
///     // restart
/// }
/// ```
pub struct RestartDialog {
    prompt: RestartPrompt,
    visible: bool,
}

impl RestartDialog {
    pub fn new(prompt: RestartPrompt) -> Self {
        Self {
            prompt,
            visible: false,
        }
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Handle one line of user input
    ///
    /// Returns `Some(DialogResult)` when the dialog should close,
    /// `None` when the dialog should stay open.
    pub fn handle_line(&mut self, line: &str) -> Option<DialogResult> {
        if !self.visible {
            return None;
        }

        let answer = line.trim();
        if answer.eq_ignore_ascii_case(&self.prompt.confirm_text) {
            self.hide();
            return Some(DialogResult::Confirm);
        }
        None
    }

    /// Render the dialog as plain text
    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        if !self.visible {
            return Ok(());
        }

        writeln!(out)?;
        writeln!(out, "== {} ==", self.prompt.title)?;
        writeln!(out, "{}", self.prompt.body)?;
        write!(out, "Type [{}] to continue: ", self.prompt.confirm_text)?;
        out.flush()
    }

    /// Run the dialog until it closes or input ends
    ///
    /// End of input leaves the dialog open.
    pub fn run(&mut self, input: &mut impl BufRead, out: &mut impl Write) -> io::Result<DialogResult> {
        self.show();
        let mut line = String::new();
        while self.visible {
            self.render(out)?;
            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                return Ok(DialogResult::Open);
            }
            if let Some(result) = self.handle_line(&line) {
                return Ok(result);
            }
        }
        Ok(DialogResult::Open)
    }
}

/// Host runtime backed by the terminal
///
/// There is no running app to reload from the CLI; a confirmed restart is
/// reported and takes effect on the next `themer apply`.
#[derive(Debug, Default)]
pub struct TerminalHost;

impl HostRuntime for TerminalHost {
    fn show_dialog(&self, prompt: &RestartPrompt) -> DialogResult {
        let mut dialog = RestartDialog::new(prompt.clone());
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        dialog
            .run(&mut stdin.lock(), &mut stdout)
            .unwrap_or(DialogResult::Open)
    }

    fn reload(&self) {
        println!("Restart requested. The theme is applied on the next start.");
    }
}
