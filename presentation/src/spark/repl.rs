//! REPL for the interactive spark session
//!
//! Each turn asks the tutor for the next question, prints it, and reads the
//! writer's answer. Answers are appended to the story and saved, so the
//! next question sees them in the story excerpt.

use crate::ConsoleFormatter;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing::warn;
use tutor_application::{StoryRecord, StoryStore, TutorOrchestrator};
use tutor_domain::{AccountConfig, READY_TO_WRITE, TutorMode};

/// How a spark session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SparkOutcome {
    /// The tutor emitted the ready signal.
    Ready,
    /// The writer typed `/quit` or closed the input.
    Quit,
    /// The safeguard gate refused the story; nothing was sent.
    Refused,
}

/// Interactive spark session
pub struct SparkRepl {
    tutor: TutorOrchestrator,
    store: Arc<dyn StoryStore>,
    story: StoryRecord,
    account: AccountConfig,
}

impl SparkRepl {
    pub fn new(
        tutor: TutorOrchestrator,
        store: Arc<dyn StoryStore>,
        story: StoryRecord,
        account: AccountConfig,
    ) -> Self {
        Self {
            tutor,
            store,
            story,
            account,
        }
    }

    pub fn story(&self) -> &StoryRecord {
        &self.story
    }

    /// Run the session on stdin
    pub async fn run(&mut self) -> io::Result<SparkOutcome> {
        let stdin = io::stdin();
        self.run_with(stdin.lock()).await
    }

    /// Run the session reading answers from `input`
    pub async fn run_with<R: BufRead>(&mut self, mut input: R) -> io::Result<SparkOutcome> {
        print!("{}", ConsoleFormatter::banner(TutorMode::Onboarding, &self.story.title));
        print!("{}", ConsoleFormatter::spark_help());

        loop {
            let before = self.tutor.session().count();
            let snapshot = self.story.to_snapshot(self.account.clone());
            let reply = self.tutor.run_onboarding(&snapshot).await;

            if self.tutor.session().count() == before {
                print!("{}", ConsoleFormatter::notice(&reply));
                return Ok(SparkOutcome::Refused);
            }

            if self.tutor.session().last_status() == Some(READY_TO_WRITE) {
                print!("{}", ConsoleFormatter::ready());
                return Ok(SparkOutcome::Ready);
            }

            print!(
                "{}",
                ConsoleFormatter::question(self.tutor.session().count(), &reply)
            );

            loop {
                let Some(line) = Self::read_answer(&mut input)? else {
                    println!("Bye!");
                    return Ok(SparkOutcome::Quit);
                };

                match line.as_str() {
                    "" => continue,
                    "/quit" | "/exit" | "/q" => {
                        println!("Bye!");
                        return Ok(SparkOutcome::Quit);
                    }
                    "/help" | "/h" | "/?" => {
                        print!("{}", ConsoleFormatter::spark_help());
                        continue;
                    }
                    "/restart" => {
                        self.tutor.restart();
                        println!("Starting over.");
                        break;
                    }
                    answer => {
                        self.append_answer(answer);
                        break;
                    }
                }
            }
        }
    }

    fn read_answer<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
        print!("{} ", "you>".magenta().bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn append_answer(&mut self, answer: &str) {
        let content = &mut self.story.content;
        if !content.is_empty() && !content.ends_with(char::is_whitespace) {
            content.push(' ');
        }
        content.push_str(answer);

        if let Err(e) = self.store.save(&self.story) {
            warn!("Could not save story '{}': {}", self.story.id, e);
        }
    }
}
