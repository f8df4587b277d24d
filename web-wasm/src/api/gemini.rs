//! Gemini API integration
//!
//! One classification call per submission: the fixed instruction plus the
//! image as inline base64 data, with a response schema asking for the
//! four-field classification object. The candidate text is handed to the
//! shared parser, which enforces the taxonomy the schema only hints at.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use neurobin_common::config::gemini_endpoint;
use neurobin_common::error::{INVALID_RESPONSE_STRUCTURE, UNKNOWN_API_ERROR};
use neurobin_common::{
    classification_prompt, parse_classification, rewrite_api_message, Classification,
    ClassifyError, Result, WasteCategory,
};

use crate::image::js_value_message;

/// Gemini API request
#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Serialize)]
struct InlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
    #[serde(rename = "responseSchema")]
    response_schema: ResponseSchema,
}

#[derive(Serialize)]
struct ResponseSchema {
    #[serde(rename = "type")]
    schema_type: &'static str,
    properties: SchemaProperties,
    required: Vec<&'static str>,
}

#[derive(Serialize)]
struct SchemaProperties {
    waste_type: SchemaField,
    confidence: SchemaField,
    reasoning: SchemaField,
    disposal_method: SchemaField,
}

#[derive(Serialize)]
struct SchemaField {
    #[serde(rename = "type")]
    field_type: &'static str,
    description: String,
}

/// Gemini API response
#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: ResponseContent,
}

#[derive(Deserialize)]
struct ResponseContent {
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: String,
}

/// Error envelope of a non-2xx response
#[derive(Deserialize)]
struct GeminiErrorResponse {
    error: Option<GeminiErrorDetail>,
}

#[derive(Deserialize)]
struct GeminiErrorDetail {
    message: String,
}

fn classification_schema() -> ResponseSchema {
    ResponseSchema {
        schema_type: "OBJECT",
        properties: SchemaProperties {
            waste_type: SchemaField {
                field_type: "STRING",
                description: format!("One of {}.", WasteCategory::enumerated_labels()),
            },
            confidence: SchemaField {
                field_type: "NUMBER",
                description:
                    "A floating-point number between 0 and 1 representing classification certainty."
                        .to_string(),
            },
            reasoning: SchemaField {
                field_type: "STRING",
                description: "A brief, one-sentence explanation for the classification."
                    .to_string(),
            },
            disposal_method: SchemaField {
                field_type: "STRING",
                description: "The single optimal disposal method based on the provided guidance."
                    .to_string(),
            },
        },
        required: vec!["waste_type", "confidence", "reasoning", "disposal_method"],
    }
}

/// Classify a normalized image payload.
///
/// # Arguments
/// * `api_key` - Gemini API key
/// * `base64_data` - base64 body of the normalized image
/// * `mime_type` - MIME type of the payload (e.g. "image/jpeg")
///
/// # Returns
/// A validated `Classification`, or a flow error with a user-facing message
pub async fn classify_waste(
    api_key: &str,
    base64_data: &str,
    mime_type: &str,
) -> Result<Classification> {
    if base64_data.is_empty() {
        return Err(ClassifyError::MissingImage);
    }

    let request = GeminiRequest {
        contents: vec![Content {
            parts: vec![
                Part::Text {
                    text: classification_prompt(),
                },
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type: mime_type.to_string(),
                        data: base64_data.to_string(),
                    },
                },
            ],
        }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json".to_string(),
            response_schema: classification_schema(),
        },
    };

    let response_text = call_gemini_api(api_key, &request).await?;
    parse_classification(&response_text)
}

/// Issue the generateContent call and return the candidate text.
async fn call_gemini_api(api_key: &str, request: &GeminiRequest) -> Result<String> {
    let url = format!("{}?key={}", gemini_endpoint(), api_key);
    let body = serde_json::to_string(request)
        .map_err(|e| ClassifyError::Classification(e.to_string()))?;

    let mut opts = RequestInit::new();
    opts.method("POST");
    opts.mode(RequestMode::Cors);
    opts.body(Some(&JsValue::from_str(&body)));

    let request = Request::new_with_str_and_init(&url, &opts).map_err(transport_error)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(transport_error)?;

    let window = web_sys::window()
        .ok_or_else(|| ClassifyError::Classification("no window".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport_error)?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| ClassifyError::Classification("unexpected fetch result".to_string()))?;

    let json = JsFuture::from(resp.json().map_err(transport_error)?)
        .await
        .map_err(transport_error)?;

    if !resp.ok() {
        let raw = serde_wasm_bindgen::from_value::<GeminiErrorResponse>(json)
            .ok()
            .and_then(|e| e.error.map(|d| d.message))
            .unwrap_or_else(|| UNKNOWN_API_ERROR.to_string());
        return Err(ClassifyError::Classification(rewrite_api_message(&raw)));
    }

    let response: GeminiResponse = serde_wasm_bindgen::from_value(json)
        .map_err(|_| ClassifyError::Classification(INVALID_RESPONSE_STRUCTURE.to_string()))?;

    response
        .candidates
        .first()
        .and_then(|c| c.content.parts.first())
        .map(|p| p.text.clone())
        .ok_or_else(|| ClassifyError::Classification(INVALID_RESPONSE_STRUCTURE.to_string()))
}

fn transport_error(value: JsValue) -> ClassifyError {
    ClassifyError::Classification(js_value_message(&value))
}
