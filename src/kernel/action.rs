use super::catalog::VariantId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ToggleFavorite(VariantId),
    Dismiss(VariantId),
    UndoDismiss(VariantId),
    SetFeedback {
        id: VariantId,
        text: String,
    },
    /// Compose the prompt for `count` more variants and hand it to the clipboard.
    CopyPrompt {
        count: u32,
    },
}

impl Action {
    pub fn variant(&self) -> Option<VariantId> {
        match self {
            Action::ToggleFavorite(id)
            | Action::Dismiss(id)
            | Action::UndoDismiss(id)
            | Action::SetFeedback { id, .. } => Some(*id),
            Action::CopyPrompt { .. } => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Action::ToggleFavorite(_) => "toggle_favorite",
            Action::Dismiss(_) => "dismiss",
            Action::UndoDismiss(_) => "undo_dismiss",
            Action::SetFeedback { .. } => "set_feedback",
            Action::CopyPrompt { .. } => "copy_prompt",
        }
    }
}
