//! The analyzer ties the instruction template to an injected oracle.

use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::model::{AnalysisRequest, AnalysisResponse};
use crate::error::SafeHireResult;
use crate::oracle::Oracle;
use crate::prompt::InstructionTemplate;

/// Runs one oracle call per request and interprets the reply.
///
/// Built once at startup. The instruction and oracle handle never change
/// afterwards, so a single analyzer can be shared across requests.
#[derive(Clone)]
pub struct Analyzer {
    instruction: InstructionTemplate,
    oracle: Arc<dyn Oracle>,
}

impl Analyzer {
    pub fn new(instruction: InstructionTemplate, oracle: Arc<dyn Oracle>) -> Self {
        Self {
            instruction,
            oracle,
        }
    }

    pub fn instruction(&self) -> &InstructionTemplate {
        &self.instruction
    }

    pub fn oracle_name(&self) -> &str {
        self.oracle.name()
    }

    /// Analyze one message. Blank messages are rejected without calling the oracle.
    #[instrument(skip_all, fields(oracle = %self.oracle.name(), chars = request.message.chars().count()))]
    pub async fn analyze(&self, request: &AnalysisRequest) -> SafeHireResult<AnalysisResponse> {
        request.validate()?;

        debug!("Sending message to oracle");
        let reply = self
            .oracle
            .complete(self.instruction.as_str(), &request.message)
            .await?;

        let response = AnalysisResponse::from_reply(&reply);
        if !response.score_reading.is_found() {
            warn!(reading = ?response.score_reading, "Risk score unreadable, defaulting to 0");
        }
        if response.verdict_mismatch() {
            debug!(
                tier = %response.tier,
                reported = %response.verdict_label,
                "Oracle verdict differs from score tier"
            );
        }
        info!(score = response.risk_score, tier = %response.tier, "Analysis complete");

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::model::Verdict;
    use crate::error::SafeHireError;
    use crate::oracle::OracleError;
    use crate::prompt::PromptBuilder;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::Mutex;

    /// Oracle double that records calls and replays a canned result.
    struct ScriptedOracle {
        reply: Result<String, u16>,
        calls: Mutex<Vec<(String, String)>>,
    }

    impl ScriptedOracle {
        fn replying(text: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(text.to_string()),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn failing(status: u16) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(status),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl Oracle for ScriptedOracle {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn complete(&self, instruction: &str, message: &str) -> Result<String, OracleError> {
            self.calls
                .lock()
                .unwrap()
                .push((instruction.to_string(), message.to_string()));
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(status) => Err(OracleError::Api {
                    status: *status,
                    body: "quota exceeded".to_string(),
                }),
            }
        }
    }

    fn analyzer(oracle: Arc<ScriptedOracle>) -> Analyzer {
        let template = PromptBuilder::default().build(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap());
        Analyzer::new(template, oracle)
    }

    #[tokio::test]
    async fn test_analyze_passes_instruction_and_message() {
        let oracle = ScriptedOracle::replying("Risk Score: 55\nVerdict: Suspicious\n");
        let analyzer = analyzer(oracle.clone());

        let response = analyzer
            .analyze(&AnalysisRequest::new("Pay $50 to start your internship"))
            .await
            .unwrap();

        assert_eq!(response.risk_score, 55);
        assert_eq!(response.tier, Verdict::Suspicious);

        let calls = oracle.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, analyzer.instruction().as_str());
        assert_eq!(calls[0].1, "Pay $50 to start your internship");
    }

    #[tokio::test]
    async fn test_blank_message_skips_oracle() {
        let oracle = ScriptedOracle::replying("Risk Score: 99");
        let analyzer = analyzer(oracle.clone());

        let err = analyzer.analyze(&AnalysisRequest::new("   ")).await.unwrap_err();
        assert!(matches!(err, SafeHireError::EmptyMessage));
        assert_eq!(oracle.call_count(), 0);
    }

    #[tokio::test]
    async fn test_oracle_failure_propagates_once() {
        let oracle = ScriptedOracle::failing(429);
        let analyzer = analyzer(oracle.clone());

        let err = analyzer.analyze(&AnalysisRequest::new("hello")).await.unwrap_err();
        assert!(matches!(
            err,
            SafeHireError::Oracle(OracleError::Api { status: 429, .. })
        ));
        assert!(err.to_string().starts_with("Analysis failed:"));
        assert_eq!(oracle.call_count(), 1);
    }

    #[tokio::test]
    async fn test_malformed_reply_degrades() {
        let oracle = ScriptedOracle::replying("I cannot help with that.");
        let response = analyzer(oracle)
            .analyze(&AnalysisRequest::new("hello"))
            .await
            .unwrap();

        assert_eq!(response.risk_score, 0);
        assert_eq!(response.tier, Verdict::Legitimate);
        assert!(response.advice.is_empty());
        assert_eq!(response.raw_reply, "I cannot help with that.");
    }
}
