//! # Assistant: remote answer with local fallback
//!
//! File: cli/src/agent/assistant.rs
//!
//! The assistant answers one visitor message at a time:
//!
//! 1. Blank input gets the default answer straight away.
//! 2. If a remote source is configured, it is asked with the raw message.
//!    `Ok(reply)` is returned as is.
//! 3. On any `RemoteError`, or with no remote source, the local matcher
//!    answers.
//!
//! `reply` never fails, so a chat surface never has to render an error.
//!
use super::remote::{HttpAnswerSource, RemoteAnswerSource};
use crate::core::config::AgentConfig;
use crate::core::error::Result;
use crate::knowledge::KnowledgeBase;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Where a reply came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    Remote,
    Local,
}

impl fmt::Display for ReplySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplySource::Remote => write!(f, "remote"),
            ReplySource::Local => write!(f, "local"),
        }
    }
}

/// A reply ready to be displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub source: ReplySource,
}

pub struct Assistant {
    knowledge: Arc<KnowledgeBase>,
    remote: Option<Box<dyn RemoteAnswerSource>>,
}

impl Assistant {
    /// An assistant that only uses the local matcher.
    pub fn local(knowledge: Arc<KnowledgeBase>) -> Self {
        Self {
            knowledge,
            remote: None,
        }
    }

    /// Tries `remote` first for every message.
    pub fn with_remote(mut self, remote: Box<dyn RemoteAnswerSource>) -> Self {
        self.remote = Some(remote);
        self
    }

    /// # Build From Configuration (`from_config`)
    ///
    /// Uses `endpoint_override` (CLI flag / environment) when given, then the
    /// configured `agent.endpoint`. With neither, the assistant is local only.
    pub fn from_config(
        config: &AgentConfig,
        endpoint_override: Option<&str>,
        knowledge: Arc<KnowledgeBase>,
    ) -> Result<Self> {
        let assistant = Self::local(knowledge);
        match endpoint_override.or(config.endpoint.as_deref()) {
            Some(endpoint) => {
                crate::core::config::validate_endpoint(endpoint)?;
                info!("Remote answers enabled via {}", endpoint);
                let source = HttpAnswerSource::new(endpoint, config.timeout())?;
                Ok(assistant.with_remote(Box::new(source)))
            }
            None => {
                debug!("No answer endpoint configured; using local answers only.");
                Ok(assistant)
            }
        }
    }

    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// # Reply (`reply`)
    ///
    /// Answers `message`, preferring the remote source when one is set.
    pub async fn reply(&self, message: &str) -> Reply {
        if message.trim().is_empty() {
            return self.local_reply(message);
        }

        if let Some(remote) = &self.remote {
            match remote.ask(message).await {
                Ok(text) => {
                    debug!("Answered by remote source {}", remote.name());
                    return Reply {
                        text,
                        source: ReplySource::Remote,
                    };
                }
                Err(e) => {
                    warn!("Remote answer unavailable, using local answers: {}", e);
                }
            }
        }

        self.local_reply(message)
    }

    fn local_reply(&self, message: &str) -> Reply {
        Reply {
            text: self.knowledge.answer(Some(message)).to_string(),
            source: ReplySource::Local,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::RemoteError;
    use crate::knowledge::KnowledgeEntry;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedSource {
        result: std::result::Result<String, RemoteError>,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl RemoteAnswerSource for FixedSource {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn ask(&self, _message: &str) -> std::result::Result<String, RemoteError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    fn knowledge() -> Arc<KnowledgeBase> {
        Arc::new(KnowledgeBase::new(
            vec![KnowledgeEntry::new(
                ["contact", "email"],
                "Email me at work@example.com",
            )],
            "Not sure.",
        ))
    }

    fn with_source(result: std::result::Result<String, RemoteError>) -> (Assistant, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let source = FixedSource {
            result,
            calls: Arc::clone(&calls),
        };
        (Assistant::local(knowledge()).with_remote(Box::new(source)), calls)
    }

    #[tokio::test]
    async fn test_local_only() {
        let assistant = Assistant::local(knowledge());
        assert!(!assistant.has_remote());
        let reply = assistant.reply("How can I contact you?").await;
        assert_eq!(reply.text, "Email me at work@example.com");
        assert_eq!(reply.source, ReplySource::Local);
    }

    #[tokio::test]
    async fn test_remote_success_wins() {
        let (assistant, calls) = with_source(Ok("From the model".to_string()));
        let reply = assistant.reply("How can I contact you?").await;
        assert_eq!(reply.text, "From the model");
        assert_eq!(reply.source, ReplySource::Remote);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_falls_back_on_every_remote_error() {
        let errors = [
            RemoteError::Transport("connection refused".into()),
            RemoteError::Timeout,
            RemoteError::Status {
                status: 500,
                message: "boom".into(),
            },
            RemoteError::MalformedBody("missing `reply` field".into()),
        ];
        for error in errors {
            let (assistant, calls) = with_source(Err(error));
            let reply = assistant.reply("email?").await;
            assert_eq!(reply.text, "Email me at work@example.com");
            assert_eq!(reply.source, ReplySource::Local);
            assert_eq!(calls.load(Ordering::SeqCst), 1);
        }
    }

    #[tokio::test]
    async fn test_blank_input_skips_remote() {
        let (assistant, calls) = with_source(Ok("From the model".to_string()));
        let reply = assistant.reply("   ").await;
        assert_eq!(reply.text, "Not sure.");
        assert_eq!(reply.source, ReplySource::Local);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_from_config() {
        let config = AgentConfig::default();
        let assistant = Assistant::from_config(&config, None, knowledge()).unwrap();
        assert!(!assistant.has_remote());

        let assistant =
            Assistant::from_config(&config, Some("http://127.0.0.1:9/api/chat"), knowledge())
                .unwrap();
        assert!(assistant.has_remote());

        assert!(Assistant::from_config(&config, Some("not-a-url"), knowledge()).is_err());
    }
}
