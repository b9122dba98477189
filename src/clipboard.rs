//! System clipboard access.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use crate::error::{Error, Result};

type ProviderResult<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync + 'static>>;

/// Open the system clipboard.
pub fn open() -> Result<ClipboardContext> {
    ClipboardContext::new().map_err(|e| Error::Clipboard(e.to_string()))
}

/// Copy `text` to `clipboard`.
///
/// The contents are read back once so the provider has taken ownership of
/// the selection before our copy is wiped.
pub fn copy(clipboard: &mut dyn ClipboardProvider, text: &str) -> Result<()> {
    clipboard
        .set_contents(text.to_owned())
        .map_err(|e| Error::Clipboard(e.to_string()))?;
    if let Ok(mut retrieved) = clipboard.get_contents() {
        retrieved.zeroize();
    }
    Ok(())
}

/// Stand-in used when no clipboard could be opened; every copy fails.
pub struct Unavailable(pub String);

impl ClipboardProvider for Unavailable {
    fn get_contents(&mut self) -> ProviderResult<String> {
        Err(self.0.clone().into())
    }

    fn set_contents(&mut self, mut contents: String) -> ProviderResult<()> {
        contents.zeroize();
        Err(self.0.clone().into())
    }
}

/// In-memory clipboard for tests.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

#[cfg(test)]
impl ClipboardProvider for MemoryClipboard {
    fn get_contents(&mut self) -> ProviderResult<String> {
        self.contents.clone().ok_or_else(|| "empty clipboard".into())
    }

    fn set_contents(&mut self, contents: String) -> ProviderResult<()> {
        self.contents = Some(contents);
        Ok(())
    }
}
