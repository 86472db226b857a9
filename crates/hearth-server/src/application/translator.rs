//! Tool-Call Translator
//!
//! user utterance → LLM gateway (with the tool catalog) → either the
//! model's text, or a Home Assistant service call followed by "Done.".

use std::sync::Arc;

use hearth::{
    BridgeError, ChatMessage, ChatResponse, HomeAutomation, LlmGateway, LlmRequest, ToolCatalog,
};

pub const SYSTEM_PROMPT: &str = "You are a helpful and efficient Home Assistant conversation agent. \
Your primary purpose is to control the user's smart home devices, and you have tools that act on \
devices in the user's home. If the user's request can be fulfilled by a tool, respond with exactly \
one tool call and nothing else: no conversational text alongside it. The tool call must match one \
of the provided tool definitions. If the request is not about controlling the home, answer \
conversationally, helpfully and briefly.";

/// Application service for bridged chat requests
pub struct Translator<L: LlmGateway, H: HomeAutomation> {
    llm: Arc<L>,
    home: Arc<H>,
    catalog: ToolCatalog,
}

impl<L: LlmGateway, H: HomeAutomation> Translator<L, H> {
    pub fn new(llm: Arc<L>, home: Arc<H>, catalog: ToolCatalog) -> Self {
        Self { llm, home, catalog }
    }

    fn build_request(&self, user_input: &str) -> LlmRequest {
        LlmRequest {
            model: self.llm.model_id().to_string(),
            messages: vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(user_input),
            ],
            tools: self.catalog.specs(),
        }
    }

    /// Answer one user utterance
    pub async fn respond(&self, user_input: &str) -> Result<ChatResponse, BridgeError> {
        let request = self.build_request(user_input);
        let message = self.llm.chat(&request).await?;

        let Some(call) = message.first_tool_call()? else {
            tracing::debug!("No tool call; passing model text through");
            return Ok(ChatResponse::text(message.content));
        };

        let extra = message.tool_call_count() - 1;
        if extra > 0 {
            tracing::debug!("Ignoring {} extra tool call(s)", extra);
        }

        let invocation = self.catalog.resolve(&call)?;
        tracing::info!(
            "Tool {} → {} ({})",
            invocation.tool,
            invocation.target,
            invocation.entity_id().unwrap_or("no entity")
        );

        self.home.call_service(&invocation).await?;

        Ok(ChatResponse::done())
    }
}
