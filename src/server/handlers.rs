use axum::extract::Query;
use axum::response::Html;
use axum::Json;
use serde::Deserialize;

use crate::core::classifier;
use crate::domain::model::{Classification, ParsedNumber};
use crate::utils::error::ApiError;
use crate::utils::validation::parse_number_token;

const WELCOME_PAGE: &str = "\
<h1>Welcome to the Number Classification API</h1>
<p>Use the <code>/api/classify-number?number=XXX</code> endpoint to classify a number.</p>
<p>Example: <a href=\"/api/classify-number?number=371\">/api/classify-number?number=371</a></p>
";

#[derive(Debug, Deserialize)]
pub struct NumberQuery {
    pub number: Option<String>,
}

pub async fn welcome() -> Html<&'static str> {
    Html(WELCOME_PAGE)
}

/// `GET /api/classify-number?number=<token>`. Parsing happens here at the
/// boundary; the classifier itself only ever receives a well-typed integer.
pub async fn classify_number(
    Query(query): Query<NumberQuery>,
) -> Result<Json<Classification>, ApiError> {
    match parse_number_token(query.number.as_deref()) {
        ParsedNumber::Valid(n) => {
            tracing::debug!("Classifying number: {}", n);
            Ok(Json(classifier::classify(n)))
        }
        ParsedNumber::Invalid(raw) => {
            tracing::debug!("Rejected non-numeric input: {:?}", raw);
            Err(ApiError::InvalidNumber { raw })
        }
    }
}
