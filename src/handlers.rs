use axum::{
    body::Bytes,
    extract::{FromRequest, Query, Request, State},
    Form,
};
use std::collections::HashMap;

use crate::endpoint::{self, request::is_json_content_type, EndpointError, TranslationRequest, TranslationResponse};
use crate::state::AppState;

type Params = HashMap<String, String>;

/// GET entry point: parameters come from the query string only
pub async fn translate_get(
    State(state): State<AppState>,
    query: Option<Query<Params>>,
) -> TranslationResponse {
    let params = query.map(|Query(p)| p).unwrap_or_default();
    endpoint::run(state.translator.as_ref(), Ok(TranslationRequest::from_params(&params))).await
}

/// POST entry point: a JSON body, or query and form parameters
pub async fn translate_post(
    State(state): State<AppState>,
    query: Option<Query<Params>>,
    request: Request,
) -> TranslationResponse {
    let decoded = decode_post(query, request).await;
    endpoint::run(state.translator.as_ref(), decoded).await
}

async fn decode_post(
    query: Option<Query<Params>>,
    request: Request,
) -> Result<TranslationRequest, EndpointError> {
    // A JSON body replaces every other parameter source, even when it fails to parse
    if is_json_content_type(request.headers()) {
        let body = Bytes::from_request(request, &())
            .await
            .map_err(|e| EndpointError::BodyRead(e.body_text()))?;
        return TranslationRequest::from_json(&body);
    }

    let mut params = query.map(|Query(p)| p).unwrap_or_default();
    if let Ok(Form(form)) = Form::<Params>::from_request(request, &()).await {
        params.extend(form);
    }
    Ok(TranslationRequest::from_params(&params))
}
