use crate::backend::Backend;
use crate::error::ClientError;
use crate::notice::NoticeLevel;
use crate::PredictionResult;

pub const AWAITING_TEXT: &str = "Awaiting Analysis...";
pub const ANALYZING_TEXT: &str = "Analyzing image...";
pub const FAILURE_TEXT: &str = "Error: Could not reach prediction service.";
pub const MISSING_FILE_NOTICE: &str = "Please select an MRI image file before detecting!";
pub const FAILURE_NOTICE: &str = "Error: Failed to predict tumor. Check console for details.";

// Labels that mention a tumor but report its absence.
const NEGATIVE_FINDINGS: [&str; 3] = ["no tumor", "non-tumor", "tumor not detected"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Neutral,
    Danger,
    Safe,
    Warning,
}

impl Emphasis {
    pub fn classes(&self) -> &'static str {
        match self {
            Emphasis::Neutral => "",
            Emphasis::Danger => "text-red-400 text-glow",
            Emphasis::Safe => "text-green-400 text-glow",
            Emphasis::Warning => "text-yellow-300/90",
        }
    }
}

impl PredictionResult {
    pub fn summary(&self) -> String {
        format!("{} (Confidence: {:.2}%)", self.label, self.confidence * 100.0)
    }

    pub fn indicates_tumor(&self) -> bool {
        let label = self.label.to_lowercase();
        label.contains("tumor") && !NEGATIVE_FINDINGS.iter().any(|neg| label.contains(neg))
    }

    pub fn emphasis(&self) -> Emphasis {
        if self.indicates_tumor() { Emphasis::Danger } else { Emphasis::Safe }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PredictionStatus {
    Awaiting,
    Analyzing,
    Ready(PredictionResult),
    Failed,
}

/// Result area plus the enabled state of the "detect" trigger.
#[derive(Debug)]
pub struct PredictionPanel {
    status: PredictionStatus,
    busy: bool,
}

impl Default for PredictionPanel {
    fn default() -> Self {
        Self { status: PredictionStatus::Awaiting, busy: false }
    }
}

impl PredictionPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &PredictionStatus {
        &self.status
    }

    /// While busy the trigger control is disabled.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn text(&self) -> String {
        match &self.status {
            PredictionStatus::Awaiting => AWAITING_TEXT.to_string(),
            PredictionStatus::Analyzing => ANALYZING_TEXT.to_string(),
            PredictionStatus::Ready(result) => result.summary(),
            PredictionStatus::Failed => FAILURE_TEXT.to_string(),
        }
    }

    pub fn emphasis(&self) -> Emphasis {
        match &self.status {
            PredictionStatus::Awaiting | PredictionStatus::Analyzing => Emphasis::Neutral,
            PredictionStatus::Ready(result) => result.emphasis(),
            PredictionStatus::Failed => Emphasis::Warning,
        }
    }

    /// Enters the analyzing state, or fails fast when nothing is selected.
    pub fn begin(&mut self, has_file: bool) -> Result<(), ClientError> {
        if !has_file {
            log::warn!("Prediction requested without a selected image");
            self.status = PredictionStatus::Awaiting;
            return Err(ClientError::UserInputMissing);
        }
        self.status = PredictionStatus::Analyzing;
        self.busy = true;
        Ok(())
    }

    /// Handles a press of the detect trigger. `None` means the press was
    /// ignored because a prediction is already running.
    pub fn trigger(&mut self, has_file: bool) -> Option<Result<(), ClientError>> {
        if self.busy {
            log::debug!("Ignoring detect trigger while a prediction is running");
            return None;
        }
        Some(self.begin(has_file))
    }

    /// Applies the endpoint's outcome. Always releases the trigger.
    pub fn finish(
        &mut self,
        outcome: Result<PredictionResult, ClientError>,
    ) -> Result<PredictionResult, ClientError> {
        self.busy = false;
        match outcome {
            Ok(result) => {
                log::info!("Prediction received: {}", result.summary());
                self.status = PredictionStatus::Ready(result.clone());
                Ok(result)
            }
            Err(e) => {
                log::error!("Prediction error: {}", e);
                self.status = PredictionStatus::Failed;
                Err(e)
            }
        }
    }

    /// Runs one full prediction against `backend`.
    pub async fn submit<B: Backend>(
        &mut self,
        backend: &B,
        upload: Option<&B::Upload>,
    ) -> Result<PredictionResult, ClientError> {
        self.begin(upload.is_some())?;
        let Some(upload) = upload else {
            return Err(ClientError::UserInputMissing);
        };
        let outcome = backend.predict(upload).await;
        self.finish(outcome)
    }
}

/// The transient notice a failed prediction shows next to the result area.
pub fn notice_for(err: &ClientError) -> (NoticeLevel, &'static str) {
    match err {
        ClientError::UserInputMissing => (NoticeLevel::Error, MISSING_FILE_NOTICE),
        _ => (NoticeLevel::Error, FAILURE_NOTICE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(label: &str, confidence: f64) -> PredictionResult {
        PredictionResult { label: label.to_string(), confidence }
    }

    #[test]
    fn tumor_label_renders_red() {
        let r = result("Tumor Detected", 0.8734);
        assert_eq!(r.summary(), "Tumor Detected (Confidence: 87.34%)");
        assert_eq!(r.emphasis(), Emphasis::Danger);
    }

    #[test]
    fn negative_finding_renders_green() {
        let r = result("No Tumor", 0.95);
        assert_eq!(r.summary(), "No Tumor (Confidence: 95.00%)");
        assert_eq!(r.emphasis(), Emphasis::Safe);
    }

    #[test]
    fn tumor_match_ignores_case() {
        assert!(result("Possible TUMOR", 0.6).indicates_tumor());
        assert!(!result("Healthy", 0.99).indicates_tumor());
    }

    #[test]
    fn missing_file_keeps_trigger_enabled() {
        let mut panel = PredictionPanel::new();
        assert_eq!(panel.begin(false), Err(ClientError::UserInputMissing));
        assert!(!panel.is_busy());
        assert_eq!(panel.text(), AWAITING_TEXT);
        assert_eq!(
            notice_for(&ClientError::UserInputMissing),
            (NoticeLevel::Error, MISSING_FILE_NOTICE)
        );
    }

    #[test]
    fn trigger_is_ignored_until_prediction_finishes() {
        let mut panel = PredictionPanel::new();
        assert_eq!(panel.trigger(true), Some(Ok(())));
        assert_eq!(panel.trigger(true), None);
        assert_eq!(panel.trigger(false), None);
        assert_eq!(panel.status(), &PredictionStatus::Analyzing);

        panel.finish(Ok(result("No Tumor", 0.5))).unwrap();
        assert_eq!(panel.trigger(false), Some(Err(ClientError::UserInputMissing)));
        assert_eq!(panel.trigger(true), Some(Ok(())));
    }

    #[test]
    fn failure_releases_trigger_and_shows_warning() {
        let mut panel = PredictionPanel::new();
        panel.begin(true).unwrap();
        assert!(panel.is_busy());
        assert_eq!(panel.status(), &PredictionStatus::Analyzing);

        let err = panel.finish(Err(ClientError::Network("offline".into()))).unwrap_err();
        assert!(!panel.is_busy());
        assert_eq!(panel.text(), FAILURE_TEXT);
        assert_eq!(panel.emphasis(), Emphasis::Warning);
        assert_eq!(notice_for(&err).1, FAILURE_NOTICE);
    }
}
