//! Scripted transport and prompt shared by the page tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use inventory_core::{
    ApiConfig, ApiError, HttpMethod, HttpRequest, HttpResponse, ProductApi, ProductPage, Prompt,
    Transport,
};

pub const BASE_URL: &str = "http://inventory.test/api/products";

/// Replays queued responses in order and records every request it sees.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, ApiError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn reply(self, status: u16, body: &str) -> Self {
        self.responses.lock().unwrap().push_back(Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(ApiError::Transport(message.to_string())));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// `(method, url)` of every request, in order.
    pub fn calls(&self) -> Vec<(HttpMethod, String)> {
        self.requests()
            .into_iter()
            .map(|r| (r.method, r.url))
            .collect()
    }

    pub fn remaining(&self) -> usize {
        self.responses.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted response left")
    }
}

/// Answers confirmations with a fixed choice and records everything asked.
#[derive(Debug, Default)]
pub struct RecordingPrompt {
    pub answer: bool,
    pub questions: Vec<String>,
    pub notices: Vec<String>,
}

impl RecordingPrompt {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            ..Self::default()
        }
    }
}

impl Prompt for RecordingPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        self.questions.push(message.to_string());
        self.answer
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}

pub fn page(
    transport: ScriptedTransport,
    prompt: RecordingPrompt,
) -> ProductPage<ScriptedTransport, RecordingPrompt> {
    let config = ApiConfig::new(BASE_URL).unwrap();
    ProductPage::new(ProductApi::new(&config, transport), prompt)
}

pub fn object(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("not an object: {other}"),
    }
}
