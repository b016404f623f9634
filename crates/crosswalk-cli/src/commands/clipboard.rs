use crosswalk_core::clipboard::Clipboard;

/// `arboard`-backed system clipboard. Fire-and-forget per the clipboard
/// contract: failures are dropped.
#[derive(Debug, Default)]
pub(super) struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) {
        if let Ok(mut board) = arboard::Clipboard::new() {
            let _ = board.set_text(text.to_string());
        }
    }
}
