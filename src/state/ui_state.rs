/// Represents a pending action waiting for confirmation
#[derive(Debug, Clone)]
pub enum PendingAction {
    Open,
    Close,
}

/// UI flow state management
/// This struct contains only UI-specific state (dialogs, pending actions)
#[derive(Debug)]
pub struct UiState {
    /// Pending action awaiting user confirmation
    pub pending_action: Option<PendingAction>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            pending_action: None,
        }
    }

    /// Set a pending action
    pub fn set_pending(&mut self, action: PendingAction) {
        self.pending_action = Some(action);
    }

    /// Take and consume the pending action
    pub fn take_pending(&mut self) -> Option<PendingAction> {
        self.pending_action.take()
    }
}
