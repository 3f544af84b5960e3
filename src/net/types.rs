#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// One unit of the guided tutorial, as stored in the step document.
///
/// Steps are fixed at load time and never mutated. The
/// `requiresBallAndChain` flag marks membership in the gated second part
/// of the puzzle.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub step_number: u32,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub congratulations: Option<String>,
    #[serde(default)]
    pub requires_ball_and_chain: bool,
}

/// Top-level shape of `data/tutorial-steps.json`.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct TutorialData {
    pub steps: Vec<Step>,
}

/// A catalogue entry for the game gallery.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Game {
    pub name: String,
    pub console: String,
    pub year: i32,
    pub description: String,
}

/// Snapshot of a successfully validated contact form, persisted locally in
/// place of a real backend submission.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub newsletter: bool,
    pub timestamp: String,
}
