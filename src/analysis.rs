/*!
 * Remote analysis client
 *
 * Builds a depth-bounded digest of a scanned tree, embeds it into a fixed
 * prompt, and sends one blocking request to a chat-completion endpoint.
 * Every remote failure is folded into the returned answer text; only a
 * failed scan surfaces as an error.
 */

use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::ApiConfig;
use crate::digest::structure_to_text;
use crate::error::Result;
use crate::scanner::Scanner;

/// System instruction sent with every analysis request
const SYSTEM_PROMPT: &str = "You are a professional file structure analysis assistant. \
Based on the file structure information provided by the user, analyze the project type \
and structural characteristics, and answer the user's question.";

/// Timeout for the chat-completion request
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Transport over which a chat request travels
///
/// A single method: post the JSON body, return HTTP status and response
/// body. Prompt construction and error formatting stay testable without a
/// network.
pub trait ChatTransport {
    /// Send the request body, returning `(status, body)`
    fn send(&self, body: &Value) -> Result<(u16, String)>;
}

/// Production transport backed by a blocking reqwest client
pub struct HttpTransport {
    client: Client,
    api_url: String,
    api_key: String,
}

impl HttpTransport {
    /// Create a transport for the configured endpoint
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

impl ChatTransport for HttpTransport {
    fn send(&self, body: &Value) -> Result<(u16, String)> {
        let response = self
            .client
            .post(&self.api_url)
            .header("Content-Type", "application/json")
            .bearer_auth(&self.api_key)
            .json(body)
            .send()?;

        let status = response.status().as_u16();
        let text = response.text()?;
        Ok((status, text))
    }
}

/// Expected shape of a successful chat-completion response
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Client for the remote analysis endpoint
pub struct Analyzer {
    model: String,
    transport: Box<dyn ChatTransport>,
}

impl Analyzer {
    /// Create an analyzer talking to the configured endpoint
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let transport = HttpTransport::new(config)?;
        Ok(Self::with_transport(config, Box::new(transport)))
    }

    /// Create an analyzer with an injected transport
    pub fn with_transport(config: &ApiConfig, transport: Box<dyn ChatTransport>) -> Self {
        Self {
            model: config.model.clone(),
            transport,
        }
    }

    /// Scan `path` and ask the model `question` about its structure
    pub fn analyze(&self, path: &Path, question: &str, max_depth: usize) -> Result<String> {
        let structure = Scanner::new(path).scan()?;
        let structure_text = structure_to_text(&structure, max_depth);
        let prompt = build_prompt(path, &structure_text, question);

        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": prompt }
            ],
            "stream": false,
            "temperature": 0.7
        });

        let (status, text) = match self.transport.send(&body) {
            Ok(reply) => reply,
            Err(e) => return Ok(format!("❌ API request failed: {}", e)),
        };

        if !(200..300).contains(&status) {
            return Ok(format!("❌ API request failed: status {}: {}", status, text));
        }

        match serde_json::from_str::<ChatResponse>(&text) {
            Ok(response) => match response.choices.into_iter().next() {
                Some(choice) => Ok(choice.message.content),
                None => Ok("❌ Failed to process response: no choices returned".to_string()),
            },
            Err(e) => Ok(format!("❌ Failed to process response: {}", e)),
        }
    }
}

/// Fill the fixed prompt template with path, digest, and question
fn build_prompt(path: &Path, structure_text: &str, question: &str) -> String {
    format!(
        "Analyze the following file structure:\n\n\
         Folder path: {}\n\n\
         File structure:\n{}\n\
         Question: {}\n\n\
         Provide a detailed analysis and answer based on the file structure.",
        path.display(),
        structure_text,
        question
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScanFsError;
    use std::cell::RefCell;
    use std::fs::File;
    use std::io::Write as _;
    use std::rc::Rc;

    fn test_config() -> ApiConfig {
        ApiConfig {
            api_key: "test-key".to_string(),
            api_url: "http://localhost/never-called".to_string(),
            model: "deepseek-chat".to_string(),
        }
    }

    /// Transport that records the request and replies with a canned response
    struct FakeTransport {
        reply: Result<(u16, String)>,
        seen: Rc<RefCell<Option<Value>>>,
    }

    impl FakeTransport {
        fn replying(status: u16, body: &str) -> Self {
            Self {
                reply: Ok((status, body.to_string())),
                seen: Rc::new(RefCell::new(None)),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                reply: Err(ScanFsError::Config(message.to_string())),
                seen: Rc::new(RefCell::new(None)),
            }
        }
    }

    impl ChatTransport for FakeTransport {
        fn send(&self, body: &Value) -> Result<(u16, String)> {
            *self.seen.borrow_mut() = Some(body.clone());
            match &self.reply {
                Ok(reply) => Ok(reply.clone()),
                Err(e) => Err(ScanFsError::Config(e.to_string())),
            }
        }
    }

    fn scratch_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let mut file = File::create(dir.path().join("main.rs")).unwrap();
        writeln!(file, "fn main() {{}}").unwrap();
        dir
    }

    #[test]
    fn test_request_body_shape() {
        let dir = scratch_dir();
        let transport = Box::new(FakeTransport::replying(
            200,
            r#"{"choices":[{"message":{"content":"ok"}}]}"#,
        ));
        let seen = Rc::clone(&transport.seen);
        let analyzer = Analyzer::with_transport(&test_config(), transport);

        let answer = analyzer
            .analyze(dir.path(), "What is this project?", 3)
            .unwrap();
        assert_eq!(answer, "ok");

        let seen = seen.borrow();
        let body = seen.as_ref().expect("request was sent");
        assert_eq!(body["model"], "deepseek-chat");
        assert_eq!(body["stream"], false);
        assert_eq!(body["temperature"], 0.7);

        let messages = body["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[1]["role"], "user");

        let prompt = messages[1]["content"].as_str().unwrap();
        assert!(prompt.contains("What is this project?"));
        assert!(prompt.contains("📄 main.rs"));
        assert!(prompt.contains(&dir.path().display().to_string()));
    }

    #[test]
    fn test_http_error_status_becomes_answer_text() {
        let dir = scratch_dir();
        let transport = Box::new(FakeTransport::replying(401, r#"{"error":"bad key"}"#));
        let analyzer = Analyzer::with_transport(&test_config(), transport);

        let answer = analyzer.analyze(dir.path(), "q", 1).unwrap();
        assert!(answer.starts_with("❌ API request failed: status 401"));
    }

    #[test]
    fn test_transport_failure_becomes_answer_text() {
        let dir = scratch_dir();
        let transport = Box::new(FakeTransport::failing("connection refused"));
        let analyzer = Analyzer::with_transport(&test_config(), transport);

        let answer = analyzer.analyze(dir.path(), "q", 1).unwrap();
        assert!(answer.starts_with("❌ API request failed:"));
        assert!(answer.contains("connection refused"));
    }

    #[test]
    fn test_malformed_response_becomes_answer_text() {
        let dir = scratch_dir();
        let transport = Box::new(FakeTransport::replying(200, r#"{"unexpected":true}"#));
        let analyzer = Analyzer::with_transport(&test_config(), transport);

        let answer = analyzer.analyze(dir.path(), "q", 1).unwrap();
        assert!(answer.starts_with("❌ Failed to process response:"));
    }

    #[test]
    fn test_empty_choices_becomes_answer_text() {
        let dir = scratch_dir();
        let transport = Box::new(FakeTransport::replying(200, r#"{"choices":[]}"#));
        let analyzer = Analyzer::with_transport(&test_config(), transport);

        let answer = analyzer.analyze(dir.path(), "q", 1).unwrap();
        assert!(answer.starts_with("❌ Failed to process response:"));
    }

    #[test]
    fn test_missing_path_is_an_error() {
        let transport = Box::new(FakeTransport::replying(200, "{}"));
        let analyzer = Analyzer::with_transport(&test_config(), transport);

        let result = analyzer.analyze(Path::new("/no/such/path"), "q", 1);
        assert!(matches!(result, Err(ScanFsError::PathNotFound(_))));
    }
}
