//! Tools exposed to the model

use crate::error::ToolError;
use serde::Deserialize;
use serde_json::{json, Value};
use std::fmt::Display;
use tracing::{debug, info};
use veracity_domain::traits::{EvidenceSource, TopicExtractor};
use veracity_domain::EvidenceDocument;
use veracity_llm::FunctionDeclaration;

/// Name of the retrieval tool
pub const RETRIEVAL_TOOL: &str = "information_retrieving_tool";

/// Name of the tool the model calls to deliver its verdict
pub const RESPONSE_TOOL: &str = "FactCheckResponse";

/// Arguments of the retrieval tool
#[derive(Debug, Deserialize)]
pub struct RetrievalParams {
    /// Claim to gather information for
    pub claim: String,
}

/// Extracts topics from a claim and fetches a reference document for them
#[derive(Debug, Clone)]
pub struct InformationRetrievalTool<E, S> {
    extractor: E,
    source: S,
}

impl<E, S> InformationRetrievalTool<E, S>
where
    E: TopicExtractor,
    S: EvidenceSource,
    S::Error: Display,
{
    /// Create a new tool
    pub fn new(extractor: E, source: S) -> Self {
        Self { extractor, source }
    }

    /// Declaration sent to the model
    pub fn definition() -> FunctionDeclaration {
        FunctionDeclaration {
            name: RETRIEVAL_TOOL.to_string(),
            description: "Retrieve information relevant to a claim from Wikipedia. \
                          Key topics are extracted from the claim and the best-matching \
                          article is returned as a list of {title, source, content} records."
                .to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "claim": {"type": "string", "description": "The claim to gather information for"}
                },
                "required": ["claim"]
            }),
        }
    }

    /// Handle a call from the model
    pub async fn call(&self, args: &Value) -> Result<Vec<EvidenceDocument>, ToolError> {
        let params: RetrievalParams = serde_json::from_value(args.clone())
            .map_err(|e| ToolError::InvalidArguments(e.to_string()))?;
        self.retrieve(&params.claim).await
    }

    /// Topics for the claim, then at most one document
    pub async fn retrieve(&self, claim: &str) -> Result<Vec<EvidenceDocument>, ToolError> {
        let topics = self.extractor.extract_topics(claim);
        if topics.is_empty() {
            return Err(ToolError::NoTopicFound);
        }
        info!("Retrieving information for topics {:?}", topics.as_slice());

        let documents = self
            .source
            .fetch_evidence(&topics)
            .await
            .map_err(|e| ToolError::Retrieval(e.to_string()))?;

        debug!("Retrieved {} document(s)", documents.len());
        Ok(documents)
    }
}

/// Declaration of the structured-answer tool
pub fn response_tool_definition() -> FunctionDeclaration {
    FunctionDeclaration {
        name: RESPONSE_TOOL.to_string(),
        description: "Deliver the final fact-check verdict. Call this exactly once, \
                      after any information retrieval."
            .to_string(),
        parameters: json!({
            "type": "object",
            "properties": {
                "fact_check_response": {
                    "type": "string",
                    "description": "Verdict starting with True, False or Unverifiable, followed by a short explanation"
                }
            },
            "required": ["fact_check_response"]
        }),
    }
}

/// Function result carrying retrieved documents
pub fn documents_to_json(documents: &[EvidenceDocument]) -> Value {
    let records: Vec<Value> = documents
        .iter()
        .map(|d| {
            json!({
                "title": d.title,
                "source": d.source,
                "content": d.content,
            })
        })
        .collect();
    json!({ "documents": records })
}

/// Function result carrying a tool failure
pub fn error_to_json(error: &ToolError) -> Value {
    json!({ "error": error.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use veracity_domain::TopicList;
    use veracity_extractor::RakeExtractor;

    struct FixedSource(Result<Vec<EvidenceDocument>, String>);

    impl EvidenceSource for FixedSource {
        type Error = String;

        fn fetch_evidence(
            &self,
            _topics: &TopicList,
        ) -> impl Future<Output = Result<Vec<EvidenceDocument>, Self::Error>> + Send {
            let result = self.0.clone();
            async move { result }
        }
    }

    fn everest() -> EvidenceDocument {
        EvidenceDocument::new(
            "Mount Everest",
            "https://en.wikipedia.org/wiki/Mount_Everest",
            "Mount Everest is Earth's highest mountain above sea level.",
        )
    }

    #[test]
    fn test_definition_schema() {
        let def = InformationRetrievalTool::<RakeExtractor, FixedSource>::definition();
        assert_eq!(def.name, "information_retrieving_tool");
        assert_eq!(def.parameters["required"][0], "claim");
        assert_eq!(def.parameters["properties"]["claim"]["type"], "string");
    }

    #[test]
    fn test_response_tool_schema() {
        let def = response_tool_definition();
        assert_eq!(def.name, "FactCheckResponse");
        assert_eq!(def.parameters["required"][0], "fact_check_response");
    }

    #[tokio::test]
    async fn test_call_returns_documents() {
        let tool = InformationRetrievalTool::new(
            RakeExtractor::default(),
            FixedSource(Ok(vec![everest()])),
        );
        let docs = tool
            .call(&json!({"claim": "Mount Everest is the tallest mountain"}))
            .await
            .unwrap();
        assert_eq!(docs, vec![everest()]);
    }

    #[tokio::test]
    async fn test_stopword_free_claim_reaches_source() {
        let tool = InformationRetrievalTool::new(
            RakeExtractor::default(),
            FixedSource(Ok(vec![everest()])),
        );
        let docs = tool
            .retrieve("Large Hadron Collider discovered Higgs boson particle")
            .await
            .unwrap();
        assert_eq!(docs.len(), 1);
    }

    #[tokio::test]
    async fn test_no_topic_found() {
        let tool = InformationRetrievalTool::new(RakeExtractor::default(), FixedSource(Ok(vec![])));
        let result = tool.call(&json!({"claim": "1234 5678"})).await;
        assert!(matches!(result, Err(ToolError::NoTopicFound)));
    }

    #[tokio::test]
    async fn test_retrieval_failure() {
        let tool = InformationRetrievalTool::new(
            RakeExtractor::default(),
            FixedSource(Err("connection refused".to_string())),
        );
        match tool.retrieve("Earth is flat").await {
            Err(ToolError::Retrieval(message)) => assert_eq!(message, "connection refused"),
            other => panic!("Expected Retrieval error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_arguments() {
        let tool = InformationRetrievalTool::new(RakeExtractor::default(), FixedSource(Ok(vec![])));
        let result = tool.call(&json!({"query": "Earth"})).await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }

    #[test]
    fn test_documents_to_json() {
        let value = documents_to_json(&[everest()]);
        assert_eq!(value["documents"][0]["title"], "Mount Everest");
        assert_eq!(
            value["documents"][0]["source"],
            "https://en.wikipedia.org/wiki/Mount_Everest"
        );

        let empty = documents_to_json(&[]);
        assert_eq!(empty["documents"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_error_to_json() {
        let value = error_to_json(&ToolError::NoTopicFound);
        assert_eq!(value["error"], "No topic found for the claim");
    }
}
