/// Interactive session implementation
///
/// The session:
/// 1. Reads one line at a time from stdin
/// 2. Tokenizes it into a command word and arguments
/// 3. Dispatches to the command handlers
/// 4. Prints the response to stdout
///
/// Log output goes to stderr, so it never interleaves with the dialogue.

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, error, info};

use crate::commands;
use crate::domain::AddressBook;
use crate::storage::ContactStorage;

const PROMPT: &str = "Type your query >>> ";
const FAREWELL: &str = "See you!";

/// Whole-line tokens that end the session
pub const EXIT_TOKENS: [&str; 4] = ["close", ".", "bye", "exit"];

/// An interactive session over one address book
pub struct Session<S: ContactStorage> {
    book: AddressBook,
    storage: S,
}

/// Split a lowercased input line into a command word and its arguments
///
/// Plain whitespace splitting, so phone tokens keep their `+` and
/// punctuation intact.
pub fn tokenize(input: &str) -> (String, Vec<String>) {
    let mut words = input.split_whitespace().map(str::to_string);
    let command = words.next().unwrap_or_default();
    (command, words.collect())
}

impl<S: ContactStorage> Session<S> {
    pub fn new(book: AddressBook, storage: S) -> Self {
        Self { book, storage }
    }

    /// Run the read-loop until an exit token or end of input
    pub async fn run(&mut self) -> Result<(), std::io::Error> {
        let stdin = tokio::io::stdin();
        let mut reader = BufReader::new(stdin);
        let mut stdout = tokio::io::stdout();

        stdout
            .write_all(format!("\n{}\n\n", commands::greet()).as_bytes())
            .await?;

        let mut line = String::new();

        loop {
            stdout.write_all(PROMPT.as_bytes()).await?;
            stdout.flush().await?;

            line.clear();
            match reader.read_line(&mut line).await {
                Ok(0) => {
                    info!("Session ended (stdin closed)");
                    break;
                }
                Ok(_) => {
                    // names are matched case-insensitively everywhere,
                    // so lowercasing the whole line is safe
                    let input = line.trim().to_lowercase();
                    if input.is_empty() {
                        continue;
                    }

                    if EXIT_TOKENS.contains(&input.as_str()) {
                        stdout
                            .write_all(format!("\n{}\n", FAREWELL).as_bytes())
                            .await?;
                        stdout.flush().await?;
                        info!("Session ended by user");
                        break;
                    }

                    let (command, args) = tokenize(&input);
                    debug!("Dispatching command '{}' with {} args", command, args.len());

                    let response =
                        commands::dispatch(&mut self.book, &self.storage, &command, &args);
                    stdout
                        .write_all(format!("\n{}\n\n", response).as_bytes())
                        .await?;
                    stdout.flush().await?;
                }
                Err(e) => {
                    error!("Failed to read from stdin: {}", e);
                    break;
                }
            }
        }

        Ok(())
    }
}
