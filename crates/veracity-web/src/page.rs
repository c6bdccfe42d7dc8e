//! The single-page front end

/// Page template; the status banner is inserted at [`STATUS_MARKER`]
const TEMPLATE: &str = include_str!("../static/index.html");

const STATUS_MARKER: &str = "<!-- agent-status -->";

/// Agent state shown at the top of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentStatus {
    /// Agent constructed and usable
    Ready,
    /// No API key in the environment
    MissingCredential,
    /// Key present but construction failed
    Failed,
}

impl AgentStatus {
    fn banner(&self) -> &'static str {
        match self {
            AgentStatus::Ready => {
                r#"<div class="panel success" id="agent-status">Agent ready! Submit your claim.</div>"#
            }
            AgentStatus::MissingCredential => {
                r#"<div class="panel warning" id="agent-status">🚨 GEMINI_API_KEY environment variable not set. Please set it to run the agent.</div>"#
            }
            AgentStatus::Failed => {
                r#"<div class="panel error" id="agent-status">Agent failed to initialize. Check console for details.</div>"#
            }
        }
    }
}

/// Render the page for the given agent state
pub fn render(status: AgentStatus) -> String {
    TEMPLATE.replacen(STATUS_MARKER, status.banner(), 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_content() {
        let html = render(AgentStatus::Ready);
        assert!(html.contains("💡 Fact Checker Agent"));
        assert!(html.contains("Enter the claim to verify:"));
        assert!(html.contains(r#"placeholder="Example: Earth is flat.""#));
        assert!(html.contains("Verify Claim"));
        assert!(html.contains("Disclaimer: This tool provides a verification"));
        assert!(html.contains("https://www.github.com/yadavadarsh55"));
        assert!(!html.contains(STATUS_MARKER));
    }

    #[test]
    fn test_status_banners() {
        assert!(render(AgentStatus::Ready).contains("Agent ready! Submit your claim."));
        assert!(render(AgentStatus::MissingCredential)
            .contains("GEMINI_API_KEY environment variable not set"));
        assert!(render(AgentStatus::Failed).contains("Agent failed to initialize"));
    }

    #[test]
    fn test_warning_only_when_credential_missing() {
        assert!(!render(AgentStatus::Ready).contains("environment variable not set"));
    }
}
