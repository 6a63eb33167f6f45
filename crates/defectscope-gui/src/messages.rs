use std::path::PathBuf;

/// Events sent from the file-dialog helper thread back to the UI thread.
pub enum AppEvent {
    /// User picked a file to open.
    FileChosen { path: PathBuf },
    /// Dialog closed without a selection.
    DialogDismissed,
}
