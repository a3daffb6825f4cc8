//! Scripted gateway
//!
//! Returns queued results in order and records every request it receives.
//! A gated instance holds each call open until [`ScriptedGateway::release`]
//! is called, which lets callers observe the in-flight state.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::Semaphore;

use franchise_assistant_core::{GatewayError, GenerateRequest, ModelGateway};

#[derive(Debug, Default)]
pub struct ScriptedGateway {
    replies: Mutex<VecDeque<Result<String, GatewayError>>>,
    requests: Mutex<Vec<GenerateRequest>>,
    default_reply: Option<String>,
    gate: Option<Arc<Semaphore>>,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gateway answering `reply` whenever the queue is empty
    pub fn with_default_reply(reply: impl Into<String>) -> Self {
        Self {
            default_reply: Some(reply.into()),
            ..Self::default()
        }
    }

    /// Gateway whose calls block until released
    pub fn gated() -> Self {
        Self {
            gate: Some(Arc::new(Semaphore::new(0))),
            ..Self::default()
        }
    }

    /// Queue a successful reply
    pub fn push_reply(&self, reply: impl Into<String>) -> &Self {
        self.replies.lock().push_back(Ok(reply.into()));
        self
    }

    /// Queue a failure
    pub fn push_error(&self, error: GatewayError) -> &Self {
        self.replies.lock().push_back(Err(error));
        self
    }

    /// Let one held call proceed
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.add_permits(1);
        }
    }

    /// Requests received so far, oldest first
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().len()
    }

    pub fn pending_replies(&self) -> usize {
        self.replies.lock().len()
    }
}

#[async_trait]
impl ModelGateway for ScriptedGateway {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn generate(&self, request: GenerateRequest) -> Result<String, GatewayError> {
        self.requests.lock().push(request);

        if let Some(gate) = &self.gate {
            let permit = gate
                .acquire()
                .await
                .map_err(|e| GatewayError::Network(e.to_string()))?;
            permit.forget();
        }

        let next = self.replies.lock().pop_front();
        match next {
            Some(result) => result,
            None => self
                .default_reply
                .clone()
                .ok_or(GatewayError::EmptyResponse),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn request(text: &str) -> GenerateRequest {
        GenerateRequest {
            system_instruction: "sys".into(),
            history: Vec::new(),
            user_text: text.into(),
            max_output_tokens: 800,
        }
    }

    #[tokio::test]
    async fn test_replies_in_order() {
        let gw = ScriptedGateway::new();
        gw.push_reply("one").push_error(GatewayError::EmptyResponse);

        assert_eq!(gw.generate(request("a")).await.unwrap(), "one");
        assert_eq!(
            gw.generate(request("b")).await,
            Err(GatewayError::EmptyResponse)
        );
        // Exhausted queue without a default
        assert!(gw.generate(request("c")).await.is_err());

        let texts: Vec<_> = gw.requests().into_iter().map(|r| r.user_text).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_default_reply() {
        let gw = ScriptedGateway::with_default_reply("canned");
        assert_eq!(gw.generate(request("x")).await.unwrap(), "canned");
    }

    #[tokio::test]
    async fn test_gate_holds_call() {
        let gw = Arc::new(ScriptedGateway::gated());
        gw.push_reply("held");

        let task = {
            let gw = gw.clone();
            tokio::spawn(async move { gw.generate(request("q")).await })
        };

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!task.is_finished());
        assert_eq!(gw.call_count(), 1);

        gw.release();
        assert_eq!(task.await.unwrap().unwrap(), "held");
    }
}
