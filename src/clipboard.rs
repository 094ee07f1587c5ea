//! Clipboard access

use crate::error::{AppError, Result};
use std::time::Duration;

/// Destination for copied passwords
pub trait ClipboardService {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// Operating system clipboard.
///
/// The handle is opened on first use and kept so the copied text stays
/// owned by this process on platforms that require it. On Linux the text is
/// only served while the process runs; a holding clipboard blocks in
/// `set_text` until the hold expires or another program takes the selection.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Option<arboard::Clipboard>,
    hold: Option<Duration>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clipboard for one-shot commands that exit right after copying
    pub fn holding(hold: Duration) -> Self {
        Self {
            handle: None,
            hold: Some(hold),
        }
    }

    pub fn hold(&self) -> Option<Duration> {
        self.hold
    }
}

impl ClipboardService for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if self.handle.is_none() {
            let handle = arboard::Clipboard::new()
                .map_err(|e| AppError::clipboard(format!("init failed: {}", e)))?;
            self.handle = Some(handle);
        }

        if let Some(handle) = self.handle.as_mut() {
            match self.hold {
                #[cfg(target_os = "linux")]
                Some(hold) if !hold.is_zero() => {
                    use arboard::SetExtLinux;

                    log::info!("📋 Holding clipboard for {}s", hold.as_secs());
                    handle
                        .set()
                        .wait_until(std::time::Instant::now() + hold)
                        .text(text.to_string())
                }
                _ => handle.set_text(text.to_string()),
            }
            .map_err(|e| AppError::clipboard(format!("set failed: {}", e)))?;
        }
        Ok(())
    }
}

/// Clipboard that keeps the last copied text in memory
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl ClipboardService for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}
