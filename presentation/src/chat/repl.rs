//! REPL (Read-Eval-Print Loop) for interactive triage chat

use crate::ConsoleFormatter;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::path::PathBuf;
use triage_application::HandleMessageUseCase;
use triage_domain::OutputFormat;

const HISTORY_SIZE: usize = 1000;

/// Interactive chat REPL
pub struct ChatRepl {
    use_case: HandleMessageUseCase,
    format: OutputFormat,
    session_counter: usize,
    session_id: String,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(use_case: HandleMessageUseCase) -> Self {
        Self {
            use_case,
            format: OutputFormat::Text,
            session_counter: 1,
            session_id: session_id(1),
        }
    }

    /// Set how replies are printed
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut editor = Reedline::create();
        if let Some(path) = history_path() {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            if let Ok(history) = FileBackedHistory::with_file(HISTORY_SIZE, path) {
                editor = editor.with_history(Box::new(history));
            }
        }
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("triage".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.use_case.start_session(&self.session_id).await;
        self.print_welcome();

        loop {
            match editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with('/') {
                        if self.handle_command(line).await {
                            break;
                        }
                        continue;
                    }

                    self.process_message(line).await;
                }
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                Signal::CtrlD => {
                    println!("Take care!");
                    break;
                }
                #[allow(unreachable_patterns)]
                _ => continue,
            }
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│          Symptom Triage - Chat Mode         │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Describe how you are feeling. This is not a medical diagnosis.");
        println!("In an emergency call 108 immediately.");
        println!();
        println!("Commands:");
        println!("  /help     - Show this help");
        println!("  /state    - Show triage progress");
        println!("  /reset    - Start a new conversation");
        println!("  /quit     - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    async fn handle_command(&mut self, cmd: &str) -> bool {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Take care!");
                true
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  /help, /h, /?    - Show this help");
                println!("  /state           - Show triage progress");
                println!("  /reset           - Start a new conversation");
                println!("  /quit, /exit, /q - Exit chat");
                println!();
                false
            }
            "/state" => {
                match self.use_case.snapshot(&self.session_id).await {
                    Some(session) => match self.format {
                        OutputFormat::Json => {
                            println!("{}", ConsoleFormatter::format_json(&session))
                        }
                        OutputFormat::Text => {
                            println!("{}", ConsoleFormatter::format_state(&session))
                        }
                    },
                    None => println!("No active session"),
                }
                false
            }
            "/reset" => {
                self.use_case.end_session(&self.session_id).await;
                self.session_counter += 1;
                self.session_id = session_id(self.session_counter);
                self.use_case.start_session(&self.session_id).await;
                println!("Started a new conversation ({})", self.session_id);
                false
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }

    async fn process_message(&self, text: &str) {
        println!();
        match self.use_case.execute(&self.session_id, text).await {
            Ok(reply) => match self.format {
                OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&reply)),
                OutputFormat::Text => println!("{}", ConsoleFormatter::format_reply(&reply)),
            },
            Err(e) => eprintln!("Error: {}", e),
        }
        println!();
    }
}

fn session_id(n: usize) -> String {
    format!("chat-{}", n)
}

fn history_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("symptom-triage").join("history.txt"))
}
