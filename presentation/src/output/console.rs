//! Console output formatter for tutoring sessions

use colored::Colorize;
use tutor_domain::{ReviewType, TutorMode};

/// Formats tutor output for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Force colors on or off (`[output] color`).
    pub fn set_color(enabled: bool) {
        colored::control::set_override(enabled);
    }

    /// Banner shown when a session starts
    pub fn banner(mode: TutorMode, title: &str) -> String {
        let mut output = String::new();
        output.push_str(&Self::header(&format!("Story Tutor - {}", mode)));
        output.push_str(&format!("{} {}\n", "Story:".cyan().bold(), title));
        output
    }

    /// A tutor question during onboarding
    pub fn question(turn: usize, text: &str) -> String {
        format!(
            "\n{} {}\n",
            format!("Tutor [{}]:", turn).yellow().bold(),
            text.trim()
        )
    }

    /// The result of a review
    pub fn review(review_type: ReviewType, text: &str) -> String {
        let mut output = Self::section_header(&format!("Review ({})", review_type));
        output.push_str(&format!("\n{}\n", text.trim()));
        output
    }

    /// A call the tutor refused or could not complete
    pub fn notice(text: &str) -> String {
        format!("\n{} {}\n", "!".red().bold(), text.red())
    }

    /// Onboarding reached the ready signal
    pub fn ready() -> String {
        format!(
            "\n{}\n",
            "You're ready to write! Open your story and start typing."
                .green()
                .bold()
        )
    }

    /// Slash commands accepted during a spark session
    pub fn spark_help() -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", "Commands:".cyan().bold()));
        output.push_str("  /help      - Show this help\n");
        output.push_str("  /restart   - Start the questions over\n");
        output.push_str("  /quit      - Leave the session\n");
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("\n{}\n  {}\n{}\n", line.blue(), title.bold(), line.blue())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n", format!("── {} ──", title).cyan().bold())
    }
}
