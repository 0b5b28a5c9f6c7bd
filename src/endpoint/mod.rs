pub mod error;
pub mod request;
pub mod response;
pub mod validation;

use tracing::{debug, error, info_span, Instrument};
use uuid::Uuid;

use crate::translate::Translator;
pub use error::EndpointError;
pub use request::TranslationRequest;
pub use response::{TranslationResponse, TranslationResult};

/// Shared pipeline behind both entry points: validate the decoded request,
/// call the translator and encode the outcome.
pub async fn run(
    translator: &dyn Translator,
    decoded: Result<TranslationRequest, EndpointError>,
) -> TranslationResponse {
    let request_id = Uuid::new_v4();
    let span = info_span!("translate", %request_id);

    async move {
        match execute(translator, decoded).await {
            Ok(result) => {
                debug!("Translated {} -> {}", result.from, result.to);
                TranslationResponse::Success(result)
            }
            Err(err) => {
                debug!("Request failed: {}", err);
                err.into()
            }
        }
    }
    .instrument(span)
    .await
}

async fn execute(
    translator: &dyn Translator,
    decoded: Result<TranslationRequest, EndpointError>,
) -> Result<TranslationResult, EndpointError> {
    let request = decoded?;
    let text = validation::validate(&request)?;
    let translation = invoke(translator, text, &request.from, &request.to).await?;

    Ok(TranslationResult {
        input: text.to_string(),
        from: request.from,
        to: request.to,
        translation,
    })
}

/// No retry and no fallback; provider failures are logged and surfaced.
async fn invoke(
    translator: &dyn Translator,
    text: &str,
    from: &str,
    to: &str,
) -> Result<String, EndpointError> {
    translator.translate(text, from, to).await.map_err(|e| {
        error!("Translation error ({}): {}", translator.name(), e);
        EndpointError::TranslationFailure(e)
    })
}
