//! End-to-end behaviour of `LegalAssistant::ask` against scripted providers.

use lexrag_assistant::{InstructionProfile, LegalAssistant, Query, NO_ANSWER_TEXT};
use lexrag_core::{AppConfig, AppError, AppResult};
use lexrag_llm::{LlmClient, LlmRequest, LlmResponse, LlmUsage};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

enum Script {
    Reply(&'static str),
    Fail(&'static str),
}

struct ScriptedClient {
    script: Script,
    calls: AtomicUsize,
    last_request: Mutex<Option<LlmRequest>>,
}

impl ScriptedClient {
    fn new(script: Script) -> Arc<Self> {
        Arc::new(Self {
            script,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl LlmClient for ScriptedClient {
    fn provider_name(&self) -> &str {
        "scripted"
    }

    async fn complete(&self, request: &LlmRequest) -> AppResult<LlmResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());

        match self.script {
            Script::Reply(text) => Ok(LlmResponse {
                content: text.to_string(),
                model: request.model.clone(),
                usage: LlmUsage::new(10, 20),
                finish_reason: Some("STOP".to_string()),
            }),
            Script::Fail(cause) => Err(AppError::Llm(cause.to_string())),
        }
    }
}

fn assistant_with(client: Arc<ScriptedClient>) -> LegalAssistant {
    LegalAssistant::new(client, InstructionProfile::default())
}

#[tokio::test]
async fn answer_carries_text_and_citations() {
    let client = ScriptedClient::new(Script::Reply(
        "Under **Section 2(68)** a private company restricts transfer of shares. \
         See also Section 3 and Section 2(68) again.",
    ));
    let assistant = assistant_with(client.clone());

    let query = Query::new("What is a private company?").unwrap();
    let answer = assistant.ask(&query).await.unwrap();

    assert!(answer.answer.contains("private company"));
    assert_eq!(
        answer.citations,
        vec![
            "Companies Act 2013, Section 2(68)".to_string(),
            "Companies Act 2013, Section 3".to_string(),
        ]
    );
    assert_eq!(client.calls(), 1);
}

#[tokio::test]
async fn request_uses_fixed_profile_and_raw_question() {
    let client = ScriptedClient::new(Script::Reply("No section applies."));
    let assistant = assistant_with(client.clone());

    let query = Query::new("  Can a minor be a member?  ").unwrap();
    assistant.ask(&query).await.unwrap();

    let request = client.last_request.lock().unwrap().clone().unwrap();
    assert_eq!(request.prompt, "  Can a minor be a member?  ");
    assert_eq!(request.temperature, Some(0.3));
    assert_eq!(request.model, "gemini-2.5-flash");
    assert!(request
        .system
        .as_deref()
        .unwrap()
        .contains("Indian Companies Act 2013"));
}

#[tokio::test]
async fn answer_without_sections_cites_general_provisions() {
    let client = ScriptedClient::new(Script::Reply("Directors owe duties of good faith."));
    let answer = assistant_with(client)
        .ask(&Query::new("Do directors owe duties?").unwrap())
        .await
        .unwrap();

    assert_eq!(
        answer.citations,
        vec!["Companies Act 2013, General Provisions".to_string()]
    );
}

#[tokio::test]
async fn empty_model_text_becomes_apology() {
    let client = ScriptedClient::new(Script::Reply(""));
    let answer = assistant_with(client.clone())
        .ask(&Query::new("Anything?").unwrap())
        .await
        .unwrap();

    assert_eq!(answer.answer, NO_ANSWER_TEXT);
    assert_eq!(
        answer.citations,
        vec!["Companies Act 2013, General Provisions".to_string()]
    );
    assert_eq!(client.calls(), 1);
}

#[tokio::test]
async fn upstream_failure_collapses_to_single_error() {
    let client = ScriptedClient::new(Script::Fail("Gemini API error (403): API key not valid"));
    let result = assistant_with(client.clone())
        .ask(&Query::new("What is a charge?").unwrap())
        .await;

    match result {
        Err(err @ AppError::AssistantUnavailable) => {
            assert_eq!(err.to_string(), "Failed to consult the legal archives.");
            assert!(!err.to_string().contains("403"));
        }
        other => panic!("Expected AssistantUnavailable, got {:?}", other),
    }
    assert_eq!(client.calls(), 1);
}

#[tokio::test]
async fn blank_question_never_reaches_the_client() {
    let client = ScriptedClient::new(Script::Reply("unused"));
    let assistant = assistant_with(client.clone());

    for blank in ["", "   ", "\n\t"] {
        if let Some(query) = Query::new(blank) {
            assistant.ask(&query).await.unwrap();
        }
    }

    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn concurrent_questions_are_independent() {
    let client = ScriptedClient::new(Script::Reply("Section 8 companies are charities."));
    let assistant = Arc::new(assistant_with(client.clone()));

    let first = {
        let assistant = assistant.clone();
        tokio::spawn(async move { assistant.ask(&Query::new("one").unwrap()).await })
    };
    let second = {
        let assistant = assistant.clone();
        tokio::spawn(async move { assistant.ask(&Query::new("two").unwrap()).await })
    };

    let (first, second) = (first.await.unwrap().unwrap(), second.await.unwrap().unwrap());
    assert_eq!(first, second);
    assert_eq!(client.calls(), 2);
}

#[tokio::test]
async fn unreachable_endpoint_is_assistant_unavailable() {
    // Reserve a port, then free it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let config = AppConfig {
        endpoint: Some(format!("http://127.0.0.1:{}", port)),
        api_key: Some("test-key".to_string()),
        ..AppConfig::default()
    };
    let assistant = LegalAssistant::from_config(&config).unwrap();

    let result = assistant
        .ask(&Query::new("What is a debenture?").unwrap())
        .await;
    assert!(matches!(result, Err(AppError::AssistantUnavailable)));
}

/// One-shot HTTP server returning a canned response; yields the raw request.
async fn serve_once(status: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            if let Some(head_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&buf[..head_end]).to_lowercase();
                let body_len = head
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|value| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= head_end + 4 + body_len {
                    break;
                }
            }
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        let _ = tx.send(String::from_utf8_lossy(&buf).into_owned());
    });

    (base_url, rx)
}

fn gemini_assistant(base_url: String) -> LegalAssistant {
    let config = AppConfig {
        endpoint: Some(base_url),
        api_key: Some("test-key".to_string()),
        ..AppConfig::default()
    };
    LegalAssistant::from_config(&config).unwrap()
}

fn assert_sent_to_gemini(raw: &str) {
    assert!(raw.starts_with("POST /v1beta/models/gemini-2.5-flash:generateContent HTTP/1.1\r\n"));
    assert!(raw.to_lowercase().contains("\r\nx-goog-api-key: test-key\r\n"));
}

#[tokio::test]
async fn rejected_key_is_assistant_unavailable() {
    let (base_url, raw) = serve_once(
        "403 Forbidden",
        r#"{"error":{"code":403,"message":"API key not valid. Please pass a valid API key."}}"#,
    )
    .await;

    let result = gemini_assistant(base_url)
        .ask(&Query::new("Who appoints the first auditor?").unwrap())
        .await;

    assert!(matches!(result, Err(AppError::AssistantUnavailable)));
    assert_sent_to_gemini(&raw.await.unwrap());
}

#[tokio::test]
async fn undecodable_reply_is_assistant_unavailable() {
    let (base_url, raw) = serve_once("200 OK", "{not json").await;

    let result = gemini_assistant(base_url)
        .ask(&Query::new("What is a resolution by circulation?").unwrap())
        .await;

    assert!(matches!(result, Err(AppError::AssistantUnavailable)));
    assert_sent_to_gemini(&raw.await.unwrap());
}

#[tokio::test]
async fn gemini_reply_becomes_answer() {
    let (base_url, raw) = serve_once(
        "200 OK",
        r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Under Section 139(1) the board appoints the first auditor."}]},"finishReason":"STOP"}]}"#,
    )
    .await;

    let answer = gemini_assistant(base_url)
        .ask(&Query::new("Who appoints the first auditor?").unwrap())
        .await
        .unwrap();

    assert_eq!(
        answer.citations,
        vec!["Companies Act 2013, Section 139(1)".to_string()]
    );
    assert_sent_to_gemini(&raw.await.unwrap());
}
