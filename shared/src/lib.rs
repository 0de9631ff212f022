use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

pub use strum::IntoEnumIterator;

/// Success body of the prediction endpoint. The service also sends a `model`
/// name alongside these; anything beyond `class` and `confidence` is ignored.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PredictionResponse {
    pub class: String,
    pub confidence: f64,
}

/// Failure body of the prediction endpoint (`{"error": "..."}` with a
/// non-2xx status).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ApiErrorBody {
    pub error: String,
}

/// Backing classification algorithm the endpoint should apply. Selects the
/// endpoint path only; the request and response shapes are identical.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumIter)]
pub enum ModelVariant {
    #[default]
    #[strum(serialize = "SVM")]
    Svm,
    #[strum(serialize = "Logistic Regression")]
    Logistic,
}

impl ModelVariant {
    /// Path segment under `/predict/`, e.g. `/predict/svm`.
    pub fn path_segment(&self) -> &'static str {
        match self {
            ModelVariant::Svm => "svm",
            ModelVariant::Logistic => "logistic",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_prediction_response() {
        let parsed: PredictionResponse = serde_json::from_str(
            r#"{"class": "Parasitized", "confidence": 0.97, "model": "SVM"}"#,
        )
        .unwrap();

        assert_eq!(parsed.class, "Parasitized");
        assert!((parsed.confidence - 0.97).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rejects_response_missing_fields() {
        assert!(serde_json::from_str::<PredictionResponse>(r#"{"class": "Parasitized"}"#).is_err());
        assert!(serde_json::from_str::<PredictionResponse>(r#"{"confidence": 0.5}"#).is_err());
        assert!(serde_json::from_str::<PredictionResponse>("[]").is_err());
    }

    #[test]
    fn test_decodes_error_body() {
        let parsed: ApiErrorBody =
            serde_json::from_str(r#"{"error": "cannot identify image file"}"#).unwrap();
        assert_eq!(parsed.error, "cannot identify image file");
    }

    #[test]
    fn test_variant_path_segments() {
        assert_eq!(ModelVariant::Svm.path_segment(), "svm");
        assert_eq!(ModelVariant::Logistic.path_segment(), "logistic");
        assert_eq!(ModelVariant::default(), ModelVariant::Svm);
    }

    #[test]
    fn test_variant_display_labels() {
        let labels: Vec<String> = ModelVariant::iter().map(|v| v.to_string()).collect();
        assert_eq!(labels, vec!["SVM", "Logistic Regression"]);
    }
}
