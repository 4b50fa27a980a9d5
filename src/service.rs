use std::future::Future;
use std::sync::Arc;

use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{CallToolResult, Content, ErrorData, ServerCapabilities, ServerInfo},
    ServerHandler,
};
use rmcp_macros::{tool, tool_handler, tool_router};
use tracing;

use crate::handlers::ToolHandlers;
use crate::models::ThinkParams;
use crate::repository::MemoryThoughtRepository;
use crate::timestamp::LocalClock;

/// Default server name reported to MCP clients
const DEFAULT_SERVER_NAME: &str = "think-tool";

/// Main service struct for the think-tool MCP server
#[derive(Clone)]
pub struct ThinkToolService {
    tool_router: ToolRouter<Self>,
    handlers: Arc<ToolHandlers<MemoryThoughtRepository>>,
    server_name: String,
}

impl ThinkToolService {
    /// Create a new service instance with an empty session log
    pub fn new() -> Self {
        let server_name = std::env::var("THINK_TOOL_SERVER_NAME")
            .unwrap_or_else(|_| DEFAULT_SERVER_NAME.to_string());

        // Resolve the zone label once; every timestamp in this session reuses it
        let clock = LocalClock::from_env();
        tracing::info!("Initializing {} service", server_name);
        tracing::info!("Using timezone: {}", clock.zone_label());
        tracing::info!("Current time: {}", clock.now());

        let repository = Arc::new(MemoryThoughtRepository::new());
        let handlers = Arc::new(ToolHandlers::new(repository, clock));

        Self {
            tool_router: Self::tool_router(),
            handlers,
            server_name,
        }
    }
}

impl Default for ThinkToolService {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl ThinkToolService {
    #[tool(
        description = "Use this tool to think about something. It will not obtain new information or change anything, but just append the thought to the log. Use it when complex reasoning or cache memory is needed."
    )]
    pub async fn think(
        &self,
        params: Parameters<ThinkParams>,
    ) -> std::result::Result<CallToolResult, ErrorData> {
        match self.handlers.think(params.0).await {
            Ok(confirmation) => Ok(CallToolResult::success(vec![Content::text(confirmation)])),
            Err(e) => {
                tracing::error!("think error: {}", e);
                Err(ErrorData::internal_error(e.to_string(), None))
            }
        }
    }

    #[tool(description = "Retrieve all thoughts recorded in the current session.")]
    pub async fn get_thoughts(&self) -> std::result::Result<CallToolResult, ErrorData> {
        match self.handlers.get_thoughts().await {
            Ok(rendered) => Ok(CallToolResult::success(vec![Content::text(rendered)])),
            Err(e) => {
                tracing::error!("get_thoughts error: {}", e);
                Err(ErrorData::internal_error(e.to_string(), None))
            }
        }
    }

    #[tool(description = "Clear all recorded thoughts from the current session.")]
    pub async fn clear_thoughts(&self) -> std::result::Result<CallToolResult, ErrorData> {
        match self.handlers.clear_thoughts().await {
            Ok(confirmation) => Ok(CallToolResult::success(vec![Content::text(confirmation)])),
            Err(e) => {
                tracing::error!("clear_thoughts error: {}", e);
                Err(ErrorData::internal_error(e.to_string(), None))
            }
        }
    }

    #[tool(description = "Get statistics about the thoughts recorded in the current session.")]
    pub async fn get_thought_stats(&self) -> std::result::Result<CallToolResult, ErrorData> {
        match self.handlers.get_thought_stats().await {
            Ok(stats) => Ok(CallToolResult::success(vec![Content::text(stats)])),
            Err(e) => {
                tracing::error!("get_thought_stats error: {}", e);
                Err(ErrorData::internal_error(e.to_string(), None))
            }
        }
    }
}

#[tool_handler]
impl ServerHandler for ThinkToolService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: rmcp::model::ProtocolVersion::V_2024_11_05,
            server_info: rmcp::model::Implementation {
                name: self.server_name.clone().into(),
                version: env!("CARGO_PKG_VERSION").into(),
            },
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            instructions: Some(
                "Session-scoped scratchpad for recording, reviewing, and summarizing reasoning steps".into(),
            ),
        }
    }
}
