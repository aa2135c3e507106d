//! Tool for resolving a company reference to a ticker

use agent_core::Result as AgentResult;
use agent_tools::{Tool, schema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

use crate::services::{StockTicker, resolver};
use crate::tools::{parse_params, rejected};

/// Identifies the ticker symbol for a company name or free-text reference
pub struct IdentifyTickerTool {
    service: Arc<StockTicker>,
}

#[derive(Debug, Deserialize)]
struct IdentifyTickerParams {
    query: String,
}

impl IdentifyTickerTool {
    pub fn new(service: Arc<StockTicker>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl Tool for IdentifyTickerTool {
    async fn execute(&self, params: Value) -> AgentResult<Value> {
        let params: IdentifyTickerParams = match parse_params(params) {
            Ok(params) => params,
            Err(e) => return Ok(rejected(e, resolver::CONTEXT)),
        };
        Ok(self.service.identify_ticker(&params.query).await.to_value())
    }

    fn name(&self) -> &str {
        "identify_ticker"
    }

    fn description(&self) -> &str {
        "Identify the stock ticker symbol for a company name or question such as \
         'Tesla stock'. Searches Yahoo Finance first and falls back to Alpha Vantage \
         symbol search. Returns the ticker and the company name."
    }

    fn input_schema(&self) -> Value {
        schema::object(
            json!({
                "query": schema::string("Company name or free-text reference, e.g. 'Why did Tesla stock drop?'")
            }),
            vec!["query"],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{MockCompanyDirectory, MockMarketData, MockNewsSource};
    use crate::services::testing::stock_ticker;
    use mockall::predicate::eq;

    fn tool(directory: MockCompanyDirectory) -> IdentifyTickerTool {
        IdentifyTickerTool::new(Arc::new(stock_ticker(
            directory,
            MockMarketData::new(),
            MockNewsSource::new(),
        )))
    }

    #[tokio::test]
    async fn test_execute() {
        let mut directory = MockCompanyDirectory::new();
        directory
            .expect_search()
            .with(eq("nvidia"))
            .returning(|_| Ok(vec!["NVDA".to_string()]));
        directory
            .expect_long_name()
            .returning(|_| Ok(Some("NVIDIA Corporation".to_string())));

        let result = tool(directory)
            .execute(json!({"query": "Nvidia stock"}))
            .await
            .unwrap();
        assert_eq!(
            result,
            json!({
                "status": "success",
                "data": {"ticker": "NVDA", "company_name": "NVIDIA Corporation"}
            })
        );
    }

    #[tokio::test]
    async fn test_missing_query_is_error_envelope() {
        let mut directory = MockCompanyDirectory::new();
        directory.expect_search().never();

        let result = tool(directory).execute(json!({})).await.unwrap();
        assert_eq!(
            result,
            json!({
                "status": "error",
                "error_message": "Error in ticker identification: Invalid arguments: missing field `query`"
            })
        );
    }
}
