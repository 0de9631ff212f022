//! Upload-and-classify interaction flow.
//!
//! The whole flow is a small state machine: Empty until an image is picked,
//! Ready while one is selected, Pending while its classification request is
//! in flight. User actions and request completions come in as [`Event`]s;
//! the work the component has to do on behalf of a transition (send the
//! request, show a toast) comes back out as [`Effect`]s. The machine is
//! generic over the file handle so it never touches browser types and can be
//! driven natively in tests.

use shared::{ModelVariant, PredictionResponse};

/// Classification outcome shown in the result panel, mapped 1:1 from the
/// endpoint's `class` and `confidence` fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    pub confidence: f64,
}

impl Classification {
    /// Fixed-precision percent rendering, e.g. 0.97 -> "97.00%".
    pub fn confidence_percent(&self) -> String {
        format!("{:.2}%", self.confidence * 100.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// One transient user-facing notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    fn success(text: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// The selected image plus the metadata validation runs against.
#[derive(Debug, Clone)]
pub struct SelectedImage<F> {
    pub file: F,
    pub name: String,
    pub content_type: String,
}

/// Interaction phases. A result only exists on `Ready`, so a stale result can
/// never survive into a new selection or submission.
#[derive(Debug, Clone)]
pub enum Phase<F> {
    Empty,
    Ready {
        image: SelectedImage<F>,
        result: Option<Classification>,
    },
    Pending {
        image: SelectedImage<F>,
    },
}

impl<F> Default for Phase<F> {
    fn default() -> Self {
        Phase::Empty
    }
}

/// Discrete inputs driving the machine: user actions and request completions.
#[derive(Debug)]
pub enum Event<F> {
    FileOffered {
        file: F,
        name: String,
        content_type: String,
    },
    ClearRequested,
    SubmitRequested,
    VariantPicked(ModelVariant),
    RequestSucceeded(PredictionResponse),
    RequestFailed {
        reason: String,
    },
}

/// Work the component performs on behalf of a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect<F> {
    SendRequest { file: F, variant: ModelVariant },
    Notify(Notice),
}

pub struct Controller<F> {
    phase: Phase<F>,
    variant: ModelVariant,
}

impl<F: Clone> Default for Controller<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Clone> Controller<F> {
    pub fn new() -> Self {
        Controller {
            phase: Phase::Empty,
            variant: ModelVariant::default(),
        }
    }

    pub fn phase(&self) -> &Phase<F> {
        &self.phase
    }

    /// True while a request is in flight. The interactive surface is disabled
    /// whenever this holds.
    pub fn busy(&self) -> bool {
        matches!(self.phase, Phase::Pending { .. })
    }

    pub fn variant(&self) -> ModelVariant {
        self.variant
    }

    pub fn image(&self) -> Option<&SelectedImage<F>> {
        match &self.phase {
            Phase::Empty => None,
            Phase::Ready { image, .. } | Phase::Pending { image } => Some(image),
        }
    }

    pub fn result(&self) -> Option<&Classification> {
        match &self.phase {
            Phase::Ready { result, .. } => result.as_ref(),
            _ => None,
        }
    }

    /// Runs one transition. User-initiated events that are disallowed in the
    /// current phase (anything while a request is pending) are dropped.
    pub fn apply(&mut self, event: Event<F>) -> Vec<Effect<F>> {
        match event {
            Event::FileOffered {
                file,
                name,
                content_type,
            } => self.offer_file(file, name, content_type),
            Event::ClearRequested => self.clear(),
            Event::SubmitRequested => self.submit(),
            Event::VariantPicked(variant) => self.pick_variant(variant),
            Event::RequestSucceeded(response) => self.finish(Ok(response)),
            Event::RequestFailed { reason } => self.finish(Err(reason)),
        }
    }

    fn offer_file(&mut self, file: F, name: String, content_type: String) -> Vec<Effect<F>> {
        if self.busy() {
            return Vec::new();
        }

        if !is_image_type(&content_type) {
            log::warn!("Rejected non-image file: {}", name);
            return vec![Effect::Notify(Notice::error(format!(
                "Not an image file: {}",
                name
            )))];
        }

        // Replacing the phase drops any previous image, which releases its
        // preview along with any prior result.
        self.phase = Phase::Ready {
            image: SelectedImage {
                file,
                name,
                content_type,
            },
            result: None,
        };
        Vec::new()
    }

    fn clear(&mut self) -> Vec<Effect<F>> {
        if self.busy() {
            return Vec::new();
        }
        self.phase = Phase::Empty;
        Vec::new()
    }

    fn submit(&mut self) -> Vec<Effect<F>> {
        match std::mem::take(&mut self.phase) {
            Phase::Empty => vec![Effect::Notify(Notice::error("Please select an image first"))],
            Phase::Ready { image, .. } => {
                let file = image.file.clone();
                let variant = self.variant;
                self.phase = Phase::Pending { image };
                vec![Effect::SendRequest { file, variant }]
            }
            // One request in flight at a time; the surface is disabled, so
            // this only happens on a raced double submit.
            Phase::Pending { image } => {
                self.phase = Phase::Pending { image };
                Vec::new()
            }
        }
    }

    fn pick_variant(&mut self, variant: ModelVariant) -> Vec<Effect<F>> {
        if !self.busy() {
            self.variant = variant;
        }
        Vec::new()
    }

    fn finish(&mut self, outcome: Result<PredictionResponse, String>) -> Vec<Effect<F>> {
        match std::mem::take(&mut self.phase) {
            Phase::Pending { image } => match outcome {
                Ok(response) => {
                    self.phase = Phase::Ready {
                        image,
                        result: Some(Classification {
                            label: response.class,
                            confidence: response.confidence,
                        }),
                    };
                    vec![Effect::Notify(Notice::success("Image processed successfully"))]
                }
                Err(reason) => {
                    self.phase = Phase::Ready {
                        image,
                        result: None,
                    };
                    vec![Effect::Notify(Notice::error(reason))]
                }
            },
            // Completion for a request this machine no longer tracks.
            other => {
                self.phase = other;
                Vec::new()
            }
        }
    }
}

/// Content-type gate for the browse/drop/paste surface.
pub fn is_image_type(content_type: &str) -> bool {
    content_type.starts_with("image/")
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestFile = &'static str;

    fn offered(
        file: TestFile,
        name: &str,
        content_type: &str,
    ) -> Event<TestFile> {
        Event::FileOffered {
            file,
            name: name.to_string(),
            content_type: content_type.to_string(),
        }
    }

    fn ready_controller() -> Controller<TestFile> {
        let mut controller = Controller::new();
        let effects = controller.apply(offered("cell-bytes", "cell.png", "image/png"));
        assert!(effects.is_empty());
        controller
    }

    fn pending_controller() -> Controller<TestFile> {
        let mut controller = ready_controller();
        let effects = controller.apply(Event::SubmitRequested);
        assert_eq!(effects.len(), 1);
        controller
    }

    fn notices(effects: &[Effect<TestFile>]) -> Vec<Notice> {
        effects
            .iter()
            .filter_map(|effect| match effect {
                Effect::Notify(notice) => Some(notice.clone()),
                _ => None,
            })
            .collect()
    }

    fn requests(effects: &[Effect<TestFile>]) -> usize {
        effects
            .iter()
            .filter(|effect| matches!(effect, Effect::SendRequest { .. }))
            .count()
    }

    #[test]
    fn test_rejects_non_image_file() {
        let mut controller = Controller::new();

        let effects = controller.apply(offered("doc-bytes", "report.pdf", "application/pdf"));

        assert!(controller.image().is_none());
        assert!(matches!(controller.phase(), Phase::Empty));
        let notices = notices(&effects);
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, NoticeKind::Error);
        assert_eq!(requests(&effects), 0);
    }

    #[test]
    fn test_rejected_file_keeps_previous_selection() {
        let mut controller = ready_controller();

        let effects = controller.apply(offered("doc-bytes", "notes.txt", "text/plain"));

        assert_eq!(notices(&effects).len(), 1);
        assert_eq!(controller.image().unwrap().name, "cell.png");
    }

    #[test]
    fn test_accepts_image_file() {
        let mut controller = Controller::new();

        let effects = controller.apply(offered("cell-bytes", "cell.png", "image/png"));

        assert!(effects.is_empty());
        let image = controller.image().unwrap();
        assert_eq!(image.file, "cell-bytes");
        assert_eq!(image.name, "cell.png");
        assert_eq!(image.content_type, "image/png");
        assert!(controller.result().is_none());
        assert!(!controller.busy());
    }

    #[test]
    fn test_new_selection_replaces_file_and_clears_result() {
        let mut controller = pending_controller();
        controller.apply(Event::RequestSucceeded(PredictionResponse {
            class: "Parasitized".to_string(),
            confidence: 0.97,
        }));
        assert!(controller.result().is_some());

        let effects = controller.apply(offered("other-bytes", "smear.jpg", "image/jpeg"));

        assert!(effects.is_empty());
        assert_eq!(controller.image().unwrap().file, "other-bytes");
        assert!(controller.result().is_none());
    }

    #[test]
    fn test_clear_returns_to_empty_and_is_idempotent() {
        let mut controller = ready_controller();

        assert!(controller.apply(Event::ClearRequested).is_empty());
        assert!(matches!(controller.phase(), Phase::Empty));
        assert!(controller.image().is_none());

        // Clearing again from Empty changes nothing.
        assert!(controller.apply(Event::ClearRequested).is_empty());
        assert!(matches!(controller.phase(), Phase::Empty));
    }

    #[test]
    fn test_submit_without_selection_notifies_and_sends_nothing() {
        let mut controller: Controller<TestFile> = Controller::new();

        let effects = controller.apply(Event::SubmitRequested);

        assert_eq!(requests(&effects), 0);
        let notices = notices(&effects);
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, NoticeKind::Error);
        assert!(matches!(controller.phase(), Phase::Empty));
    }

    #[test]
    fn test_submit_sends_exactly_one_request() {
        let mut controller = ready_controller();

        let effects = controller.apply(Event::SubmitRequested);

        assert_eq!(
            effects,
            vec![Effect::SendRequest {
                file: "cell-bytes",
                variant: ModelVariant::Svm,
            }]
        );
        assert!(controller.busy());

        // A second submit while the request is outstanding is a no-op: the
        // transport sees exactly one call.
        let effects = controller.apply(Event::SubmitRequested);
        assert!(effects.is_empty());
        assert!(controller.busy());
    }

    #[test]
    fn test_selection_and_clear_ignored_while_pending() {
        let mut controller = pending_controller();

        assert!(controller
            .apply(offered("other-bytes", "late.png", "image/png"))
            .is_empty());
        assert_eq!(controller.image().unwrap().name, "cell.png");

        assert!(controller.apply(Event::ClearRequested).is_empty());
        assert!(controller.busy());
        assert!(controller.image().is_some());
    }

    #[test]
    fn test_success_maps_response_into_result() {
        let mut controller = pending_controller();

        let effects = controller.apply(Event::RequestSucceeded(PredictionResponse {
            class: "Parasitized".to_string(),
            confidence: 0.97,
        }));

        assert!(!controller.busy());
        let result = controller.result().unwrap();
        assert_eq!(result.label, "Parasitized");
        assert_eq!(result.confidence_percent(), "97.00%");

        let notices = notices(&effects);
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, NoticeKind::Success);
    }

    #[test]
    fn test_failure_keeps_image_and_sets_no_result() {
        let mut controller = pending_controller();

        let effects = controller.apply(Event::RequestFailed {
            reason: "Server error: 500 - cannot identify image file".to_string(),
        });

        assert!(!controller.busy());
        assert!(controller.result().is_none());
        assert_eq!(controller.image().unwrap().name, "cell.png");

        let notices = notices(&effects);
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, NoticeKind::Error);
        assert!(!notices[0].text.is_empty());

        // The flow stays usable: the same selection can be resubmitted.
        let effects = controller.apply(Event::SubmitRequested);
        assert_eq!(requests(&effects), 1);
    }

    #[test]
    fn test_variant_change_affects_next_request_only() {
        let mut controller = pending_controller();
        controller.apply(Event::RequestSucceeded(PredictionResponse {
            class: "Uninfected".to_string(),
            confidence: 0.88,
        }));

        let effects = controller.apply(Event::VariantPicked(ModelVariant::Logistic));

        assert!(effects.is_empty());
        assert_eq!(controller.result().unwrap().label, "Uninfected");
        assert_eq!(controller.image().unwrap().name, "cell.png");

        let effects = controller.apply(Event::SubmitRequested);
        assert_eq!(
            effects,
            vec![Effect::SendRequest {
                file: "cell-bytes",
                variant: ModelVariant::Logistic,
            }]
        );
    }

    #[test]
    fn test_variant_change_ignored_while_pending() {
        let mut controller = pending_controller();

        controller.apply(Event::VariantPicked(ModelVariant::Logistic));

        assert_eq!(controller.variant(), ModelVariant::Svm);
    }

    #[test]
    fn test_stray_completion_is_dropped() {
        let mut controller = ready_controller();

        let effects = controller.apply(Event::RequestFailed {
            reason: "Network error: connection reset".to_string(),
        });

        assert!(effects.is_empty());
        assert!(matches!(
            controller.phase(),
            Phase::Ready { result: None, .. }
        ));
    }

    #[test]
    fn test_image_type_gate() {
        assert!(is_image_type("image/png"));
        assert!(is_image_type("image/jpeg"));
        assert!(!is_image_type("application/pdf"));
        assert!(!is_image_type(""));
    }
}
