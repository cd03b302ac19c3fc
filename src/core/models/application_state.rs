use super::generated_script::GeneratedScript;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplicationState {
    Idle,
    Analyzing,
    Success(GeneratedScript),
    Error(String),
}

/// The one section of the window that is shown for a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderBranch {
    CapturePrompt,
    Loading,
    ErrorMessage,
    ResultView,
}

impl ApplicationState {
    pub fn render_branch(&self) -> RenderBranch {
        match self {
            ApplicationState::Idle => RenderBranch::CapturePrompt,
            ApplicationState::Analyzing => RenderBranch::Loading,
            ApplicationState::Error(_) => RenderBranch::ErrorMessage,
            ApplicationState::Success(_) => RenderBranch::ResultView,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ApplicationState::Idle => "Idle",
            ApplicationState::Analyzing => "Analyzing",
            ApplicationState::Success(_) => "Success",
            ApplicationState::Error(_) => "Error",
        }
    }
}
