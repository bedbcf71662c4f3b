use std::io::Write;

use anyhow::Result;
use reqwest::Client;
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    signal,
    time::sleep,
};

use crate::{
    config::AppConfig,
    detect::{DetectClient, DetectError},
    domain::{ChatMessage, Prediction},
    guidance,
    quiz::{questions, QuizEngine},
    responder::KeywordResponder,
    session::ChatSession,
};

pub struct AssistantApp {
    config: AppConfig,
    detector: DetectClient,
    responder: KeywordResponder,
    session: ChatSession,
    quiz: QuizEngine,
    quiz_cursor: usize,
    pending_question: Option<usize>,
}

#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Chat(&'a str),
    Identify(&'a str),
    Quiz,
    Answer(usize),
    Score,
    Clear,
    Help,
    Quit,
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    fn parse(input: &'a str) -> Self {
        if !input.starts_with('/') {
            return Command::Chat(input);
        }
        let mut parts = input.splitn(2, char::is_whitespace);
        let head = parts.next().unwrap_or("");
        let rest = parts.next().map(str::trim).unwrap_or("");
        match head {
            "/identify" if !rest.is_empty() => Command::Identify(rest),
            "/quiz" => Command::Quiz,
            "/answer" => match rest.parse::<usize>() {
                Ok(n) if n >= 1 => Command::Answer(n - 1),
                _ => Command::Unknown(input),
            },
            "/score" => Command::Score,
            "/clear" => Command::Clear,
            "/help" => Command::Help,
            "/quit" | "/exit" => Command::Quit,
            _ => Command::Unknown(input),
        }
    }
}

impl AssistantApp {
    pub fn initialize(config: AppConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(format!("ecosort-assistant/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        let detector = DetectClient::new(http, config.detect.clone());

        Ok(Self {
            config,
            detector,
            responder: KeywordResponder::new(),
            session: ChatSession::new(),
            quiz: QuizEngine::new(),
            quiz_cursor: 0,
            pending_question: None,
        })
    }

    pub async fn run(mut self) -> Result<()> {
        tracing::info!("assistant session started");
        if !self.detector.is_configured() {
            tracing::warn!(
                target: "detect",
                "ROBOFLOW_API_KEY not set; /identify will be unavailable"
            );
        }

        for message in self.session.messages() {
            render_message(message);
        }
        print_help();

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            prompt()?;
            tokio::select! {
                _ = signal::ctrl_c() => {
                    println!();
                    break;
                }
                line = lines.next_line() => {
                    let Some(line) = line? else { break };
                    let input = line.trim();
                    if input.is_empty() {
                        continue;
                    }
                    if !self.handle_input(input).await? {
                        break;
                    }
                }
            }
        }

        tracing::info!("assistant session ended");
        Ok(())
    }

    async fn handle_input(&mut self, input: &str) -> Result<bool> {
        match Command::parse(input) {
            Command::Chat(text) => self.chat(text).await,
            Command::Identify(path) => self.identify(path).await,
            Command::Quiz => self.show_next_question(),
            Command::Answer(choice) => self.answer_question(choice),
            Command::Score => println!(
                "Quiz score: {} points ({}/{} questions answered)",
                self.quiz.score(),
                self.quiz.completed_count(),
                questions().len()
            ),
            Command::Clear => {
                self.session.clear();
                for message in self.session.messages() {
                    render_message(message);
                }
            }
            Command::Help => print_help(),
            Command::Quit => return Ok(false),
            Command::Unknown(raw) => println!("Unrecognized command: {raw} (try /help)"),
        }
        Ok(true)
    }

    async fn chat(&mut self, text: &str) {
        self.session.push_user(text.to_string());
        self.session.begin_typing();
        // fixed "typing" pause before the reply appears, nothing runs behind it
        sleep(self.config.chat.typing_delay).await;

        let reply = self.responder.respond(text);
        tracing::debug!(target: "chat", category = reply.category.label(), "reply selected");
        let message = self.session.push_bot(reply);
        render_message(message);
    }

    async fn identify(&mut self, path: &str) {
        let metadata = match tokio::fs::metadata(path).await {
            Ok(metadata) => metadata,
            Err(err) => {
                tracing::warn!(target: "detect", path, error = %err, "cannot stat image");
                println!("Could not open {path}: {err}");
                return;
            }
        };

        // oversized files are refused before they are even read
        if metadata.len() > self.detector.max_image_bytes() {
            let err = DetectError::TooLarge {
                size: metadata.len(),
                limit: self.detector.max_image_bytes(),
            };
            println!("{}", err.user_notice());
            return;
        }

        let image = match tokio::fs::read(path).await {
            Ok(image) => image,
            Err(err) => {
                tracing::warn!(target: "detect", path, error = %err, "cannot read image");
                println!("Could not open {path}: {err}");
                return;
            }
        };

        println!("Analyzing...");
        match self.detector.classify(&image).await {
            Ok(predictions) if predictions.is_empty() => {
                println!("No waste detected. Try a clearer image of waste items.");
            }
            Ok(predictions) => {
                println!("Analysis complete! Detected {} waste item(s):", predictions.len());
                for prediction in &predictions {
                    render_prediction(prediction);
                }
            }
            Err(err) => {
                tracing::error!(target: "detect", error = ?err, "prediction error");
                println!("{}", err.user_notice());
            }
        }
    }

    fn show_next_question(&mut self) {
        let all = questions();
        if self.quiz_cursor >= all.len() {
            println!(
                "Quiz complete! Final score: {} points.",
                self.quiz.score()
            );
            return;
        }
        let question = &all[self.quiz_cursor];
        self.pending_question = Some(self.quiz_cursor);
        println!("Question {} of {}: {}", self.quiz_cursor + 1, all.len(), question.question);
        for (idx, option) in question.options.iter().enumerate() {
            println!("  {}. {}", idx + 1, option);
        }
        println!("Answer with /answer <number>");
    }

    fn answer_question(&mut self, choice: usize) {
        let Some(index) = self.pending_question else {
            println!("No question is open. Start one with /quiz");
            return;
        };
        let question = &questions()[index];
        let Some(outcome) = self.quiz.answer(question.id, choice) else {
            println!(
                "Pick an option between 1 and {}.",
                question.options.len()
            );
            return;
        };

        if outcome.correct {
            println!("✅ Correct! +{} points. {}", outcome.awarded, outcome.explanation);
        } else {
            println!("❌ Not quite. {}", outcome.explanation);
        }
        self.pending_question = None;
        self.quiz_cursor += 1;
        if self.quiz_cursor >= questions().len() {
            println!("Quiz complete! Final score: {} points.", self.quiz.score());
        } else {
            println!("Next question: /quiz");
        }
    }
}

fn render_message(message: &ChatMessage) {
    let speaker = if message.is_bot { "EcoBot" } else { "You" };
    match message.category {
        Some(category) => println!("[{}] {}: {}", category.label(), speaker, message.text),
        None => println!("{}: {}", speaker, message.text),
    }
    println!();
}

fn render_prediction(prediction: &Prediction) {
    let details = guidance::details_for(&prediction.class);
    println!(
        "- {} ({:.1}% confidence)",
        prediction.class,
        prediction.confidence * 100.0
    );
    println!("    Disposal:      {}", details.disposal);
    println!("    Carbon:        {}", details.carbon_emission);
    println!("    Recycling:     {}", details.recycling);
    println!("    Reuse:         {}", details.reuse);
    println!("    Decomposition: {}", details.decomposition);
    println!("    Tips:          {}", details.tips);
}

fn print_help() {
    println!("Ask about recycling, composting or sustainability, or use:");
    println!("  /identify <path>   identify waste in an image file");
    println!("  /quiz              show the next quiz question");
    println!("  /answer <number>   answer the open quiz question");
    println!("  /score             show your quiz score");
    println!("  /clear             reset the chat transcript");
    println!("  /quit              exit");
    println!();
}

fn prompt() -> Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "> ")?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_chat() {
        assert_eq!(Command::parse("how do I recycle cans?"), Command::Chat("how do I recycle cans?"));
    }

    #[test]
    fn commands_parse_with_arguments() {
        assert_eq!(Command::parse("/identify photo.jpg"), Command::Identify("photo.jpg"));
        assert_eq!(Command::parse("/answer 3"), Command::Answer(2));
        assert_eq!(Command::parse("/quiz"), Command::Quiz);
        assert_eq!(Command::parse("/quit"), Command::Quit);
    }

    #[test]
    fn malformed_commands_are_unknown() {
        assert_eq!(Command::parse("/identify"), Command::Unknown("/identify"));
        assert_eq!(Command::parse("/answer zero"), Command::Unknown("/answer zero"));
        assert_eq!(Command::parse("/answer 0"), Command::Unknown("/answer 0"));
        assert_eq!(Command::parse("/leaderboard"), Command::Unknown("/leaderboard"));
    }
}
