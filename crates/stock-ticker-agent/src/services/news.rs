//! Recent news mentioning a ticker

use serde::Deserialize;
use serde_json::Value;

use crate::api::{NewsQuery, NewsSource};
use crate::envelope::ToolResult;
use crate::error::{Result, StockError};
use crate::models::NewsArticle;

pub(crate) const CONTEXT: &str = "Error fetching news";

/// The `articles` array of a news search response, untouched
pub fn parse_articles(body: &Value) -> Result<Vec<NewsArticle>> {
    let articles = body
        .get("articles")
        .ok_or_else(|| StockError::missing("articles"))?;
    Ok(Vec::<NewsArticle>::deserialize(articles)?)
}

async fn fetch_news(news: &dyn NewsSource, ticker: &str, page_size: u32) -> Result<Vec<NewsArticle>> {
    let body = news.everything(&NewsQuery::for_ticker(ticker, page_size)).await?;
    let articles = parse_articles(&body)?;
    tracing::debug!(ticker, count = articles.len(), "Fetched news");
    Ok(articles)
}

/// Latest English articles about `ticker`, newest first
pub async fn ticker_news(
    news: &dyn NewsSource,
    ticker: &str,
    page_size: u32,
) -> ToolResult<Vec<NewsArticle>> {
    ToolResult::from_result(fetch_news(news, ticker, page_size).await, CONTEXT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockNewsSource;
    use serde_json::json;

    fn article(title: &str) -> Value {
        json!({
            "source": {"id": "reuters", "name": "Reuters"},
            "author": null,
            "title": title,
            "url": "https://example.com/a",
            "publishedAt": "2024-01-10T14:00:00Z",
            "content": "..."
        })
    }

    #[tokio::test]
    async fn test_articles_returned_verbatim() {
        let mut news = MockNewsSource::new();
        news.expect_everything()
            .withf(|query| {
                query.q == "TSLA stock"
                    && query.language == "en"
                    && query.sort_by == "publishedAt"
                    && query.page_size == 5
            })
            .returning(|_| {
                Ok(json!({
                    "status": "ok",
                    "totalResults": 2,
                    "articles": [article("Tesla slides"), article("EV demand cools")]
                }))
            });

        let result = ticker_news(&news, "TSLA", 5).await;
        let value = result.to_value();
        assert_eq!(value["status"], "success");
        assert_eq!(value["data"][0], article("Tesla slides"));
        assert_eq!(result.data().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn test_provider_error_is_wrapped() {
        let mut news = MockNewsSource::new();
        news.expect_everything().returning(|_| {
            Err(StockError::NewsApiError(
                "Your API key is invalid or incorrect.".to_string(),
            ))
        });

        let result = ticker_news(&news, "TSLA", 5).await;
        assert_eq!(
            result.message(),
            Some("Error fetching news: News API error: Your API key is invalid or incorrect.")
        );
    }

    #[test]
    fn test_missing_articles() {
        let err = parse_articles(&json!({"status": "ok"})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unexpected response shape: missing field \"articles\""
        );
        assert!(parse_articles(&json!({"articles": ["not an object"]})).is_err());
        assert_eq!(parse_articles(&json!({"articles": []})).unwrap(), vec![]);
    }
}
