use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::debug;

use super::interface::{ProviderError, Translator};
use crate::config::GoogleConfig;

/// Translator backed by the public Google Translate `translate_a/single` API
pub struct GoogleTranslator {
    client: Client,
    base_url: String,
    user_agent: String,
}

impl GoogleTranslator {
    pub fn new(config: &GoogleConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
            user_agent: config.user_agent.clone(),
        }
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, ProviderError> {
        let params = [
            ("client", "gtx"),
            ("dt", "t"),
            ("sl", source_lang),
            ("tl", target_lang),
        ];
        debug!("Google translate request: {} -> {}, {} chars", source_lang, target_lang, text.chars().count());

        // Text goes in the form body so long messages do not blow up the URI
        let response = self
            .client
            .post(&self.base_url)
            .query(&params)
            .form(&[("q", text)])
            .header("User-Agent", &self.user_agent)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::QuotaExceeded);
        }
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ProviderError::from_status(status.as_u16(), &body));
        }

        let value: Value = serde_json::from_str(&body)?;
        parse_segments(&value)
    }

    fn name(&self) -> &str {
        "google"
    }
}

/// Join the translated segments of a `dt=t` response.
///
/// The payload looks like `[[["Hello","こんにちは",...],["world","世界",...]],null,"ja",...]`;
/// the first element of every segment is the translated text.
fn parse_segments(value: &Value) -> Result<String, ProviderError> {
    let segments = match value.get(0) {
        Some(Value::Array(segments)) => segments,
        Some(Value::Null) => return Err(ProviderError::Empty),
        _ => {
            return Err(ProviderError::UnexpectedResponse(
                "missing translation segments".to_string(),
            ))
        }
    };

    let result: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(|v| v.as_str()))
        .collect();

    match result.len() {
        0 => Err(ProviderError::Empty),
        _ => Ok(result),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::Query,
        http::{StatusCode as HttpStatus, Uri},
        response::{IntoResponse, Response},
        routing::post,
        Form, Json, Router,
    };
    use serde_json::json;
    use std::collections::HashMap;

    const MAX_URI_LEN: usize = 2048;
    const URI_TOO_LONG_PAGE: &str = "<html><body><h1>414.</h1> The requested URL is too large to process.</body></html>";

    /// Answers like `translate_a/single`, rejecting oversized URIs with an HTML page
    async fn fake_google(
        uri: Uri,
        Query(query): Query<HashMap<String, String>>,
        Form(form): Form<HashMap<String, String>>,
    ) -> Response {
        if uri.to_string().len() > MAX_URI_LEN {
            return (HttpStatus::URI_TOO_LONG, URI_TOO_LONG_PAGE).into_response();
        }
        let text = form.get("q").cloned().unwrap_or_default();
        let translation = format!("[{}->{}] {} chars", query["sl"], query["tl"], text.chars().count());
        Json(json!([[[translation, text, null, null, 10]], null, query["sl"]])).into_response()
    }

    async fn always_too_long() -> Response {
        (HttpStatus::URI_TOO_LONG, URI_TOO_LONG_PAGE).into_response()
    }

    async fn spawn(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/translate_a/single", addr)
    }

    fn translator(base_url: String) -> GoogleTranslator {
        GoogleTranslator::new(&GoogleConfig {
            base_url,
            ..GoogleConfig::default()
        })
    }

    #[tokio::test]
    async fn long_text_is_sent_in_body() {
        let base_url = spawn(Router::new().route("/translate_a/single", post(fake_google))).await;
        let text = "わたしはあしたともだちとえいがをみにいきます。".repeat(100);

        let out = translator(base_url).translate(&text, "ja", "en").await.unwrap();
        assert_eq!(out, format!("[ja->en] {} chars", text.chars().count()));
    }

    #[tokio::test]
    async fn html_error_page_is_not_echoed() {
        let base_url = spawn(Router::new().route("/translate_a/single", post(always_too_long))).await;

        let err = translator(base_url).translate("ame", "ja", "en").await.unwrap_err();
        assert!(matches!(err, ProviderError::Status { status: 414, .. }));
        assert_eq!(err.to_string(), "translation provider returned HTTP 414: non-text response omitted");
    }

    #[test]
    fn joins_all_segments() {
        let value = json!([
            [
                ["I will go see a movie ", "watashi ha eiga wo mi ni ikimasu ", null, null, 10],
                ["with a friend tomorrow.", "ashita tomodachi to", null, null, 10]
            ],
            null,
            "ja"
        ]);
        assert_eq!(
            parse_segments(&value).unwrap(),
            "I will go see a movie with a friend tomorrow."
        );
    }

    #[test]
    fn null_segments_is_empty() {
        let value = json!([null, null, "en"]);
        assert!(matches!(parse_segments(&value), Err(ProviderError::Empty)));
    }

    #[test]
    fn unexpected_shape_is_reported() {
        let value = json!({"error": "bad request"});
        let err = parse_segments(&value).unwrap_err();
        assert!(matches!(err, ProviderError::UnexpectedResponse(_)));
        assert_eq!(
            err.to_string(),
            "unexpected translation provider response: missing translation segments"
        );
    }

    #[test]
    fn segments_without_text_are_empty() {
        let value = json!([[[null, "x"]], null, "ja"]);
        assert!(matches!(parse_segments(&value), Err(ProviderError::Empty)));
    }
}
