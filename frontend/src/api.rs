use gloo_console::error;
use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use shared::{ApiErrorBody, ModelVariant, PredictionResponse};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::{Model, Msg};

/// Deployment of the classification service this UI talks to.
pub const INFERENCE_BASE_URL: &str =
    "https://malaria-detection-model-production.up.railway.app";

/// Endpoint for one model variant, e.g. `<base>/predict/svm`.
pub fn predict_url(variant: ModelVariant) -> String {
    format!("{}/predict/{}", INFERENCE_BASE_URL, variant.path_segment())
}

/// Posts the selected image as multipart form data and reports the outcome
/// back to the component as a `PredictionFinished` message. The file part is
/// named `file` and carries the image's original content type; the browser's
/// fetch stack governs how long we wait.
pub fn send_prediction_request(ctx: &Context<Model>, file: GlooFile, variant: ModelVariant) {
    spawn_local({
        let link = ctx.link().clone();

        async move {
            let form_data = web_sys::FormData::new().unwrap();
            form_data.append_with_blob("file", file.as_ref()).unwrap();

            let request = Request::post(&predict_url(variant))
                .body(form_data)
                .expect("Failed to build request.");

            match request.send().await {
                Ok(response) => {
                    if response.ok() {
                        match response.json::<PredictionResponse>().await {
                            Ok(prediction) => {
                                link.send_message(Msg::PredictionFinished(Ok(prediction)))
                            }
                            Err(e) => link.send_message(Msg::PredictionFinished(Err(format!(
                                "Failed to parse response: {}",
                                e
                            )))),
                        }
                    } else {
                        let status = response.status();
                        let body = response.text().await.unwrap_or_default();
                        error!(format!("Prediction request failed: {} - {}", status, body));
                        link.send_message(Msg::PredictionFinished(Err(format!(
                            "Server error: {} - {}",
                            status,
                            error_detail(&body)
                        ))))
                    }
                }
                Err(e) => link.send_message(Msg::PredictionFinished(Err(format!(
                    "Network error: {}",
                    e
                )))),
            }
        }
    });
}

/// The service reports failures as `{"error": "..."}`; fall back to the raw
/// body text when it is anything else.
fn error_detail(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .map(|parsed| parsed.error)
        .unwrap_or_else(|_| body.to_string())
}
