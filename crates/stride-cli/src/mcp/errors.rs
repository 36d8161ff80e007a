//! Error handling utilities for MCP server

use rmcp::ErrorData;
use stride_core::PlannerError;

/// Helper to convert planner errors to MCP errors
///
/// Problems with what the client sent become `invalid_params` so the model
/// can correct its call; everything else is an internal error.
pub fn to_mcp_error(message: &str, error: &PlannerError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error {
        PlannerError::InvalidInput { .. }
        | PlannerError::InvalidPlan { .. }
        | PlannerError::PlanNotFound { .. }
        | PlannerError::WeekNotFound { .. } => ErrorData::invalid_params(text, None),
        _ => ErrorData::internal_error(text, None),
    }
}

#[cfg(test)]
mod tests {
    use rmcp::model::ErrorCode;

    use super::*;

    #[test]
    fn test_client_mistakes_are_invalid_params() {
        let error = to_mcp_error("Failed", &PlannerError::WeekNotFound { week_number: 5 });
        assert_eq!(error.code, ErrorCode::INVALID_PARAMS);
        assert_eq!(error.message, "Failed: Week 5 not found");

        let error = to_mcp_error(
            "Failed",
            &PlannerError::Configuration {
                message: "boom".to_string(),
            },
        );
        assert_eq!(error.code, ErrorCode::INTERNAL_ERROR);
    }
}
