use thiserror::Error;

use crate::ui::panel::FolderId;

/// Errors from panel bookkeeping
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PanelError {
    #[error("A folder named '{0}' already exists")]
    DuplicateFolder(String),
    #[error("No folder with id {0}")]
    UnknownFolder(FolderId),
    #[error("Folder {folder} has no control labelled '{label}'")]
    UnknownControl { folder: FolderId, label: String },
}

/// Errors from hosting a panel in a window
#[derive(Error, Debug)]
pub enum HostError {
    #[error("Failed to prepare ImGui frame: {0}")]
    Platform(#[from] winit::error::ExternalError),
    #[error("Failed to render ImGui: {0}")]
    Render(String),
}
