//! Copy-to-clipboard with a transient "copied" acknowledgment.
//!
//! Time is passed in explicitly as an offset since the widget was mounted.
//! Each copy moves the revert deadline, so a later copy supersedes the
//! pending revert of an earlier one.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{GlassError, Result};

/// How long the acknowledgment stays visible after a copy.
pub const COPY_FEEDBACK: Duration = Duration::from_millis(2000);

/// Which output block was copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CopyTarget {
    /// The utility-class string.
    Tailwind,
    /// The style-sheet text.
    Css,
}

impl CopyTarget {
    pub fn as_str(self) -> &'static str {
        match self {
            CopyTarget::Tailwind => "tailwind",
            CopyTarget::Css => "css",
        }
    }
}

impl fmt::Display for CopyTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CopyTarget {
    type Err = GlassError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "tailwind" => Ok(CopyTarget::Tailwind),
            "css" => Ok(CopyTarget::Css),
            other => Err(GlassError::UnknownCopyTarget(other.to_string())),
        }
    }
}

/// A plain-text sink on the host. Only writes are needed.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// Keeps the last written text in memory.
///
/// The dev server writes here and forwards the text to the browser, which
/// owns the real clipboard.
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

    /// Remove and return the last written text.
    pub fn take(&mut self) -> Option<String> {
        self.contents.take()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Tracks the acknowledgment label and when it reverts.
#[derive(Debug, Default, Clone)]
pub struct CopyNotifier {
    label: Option<CopyTarget>,
    revert_at: Option<Duration>,
}

impl CopyNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write `text` to `clipboard` and show `target` as copied until
    /// `now + COPY_FEEDBACK`.
    ///
    /// A rejected write is logged and otherwise ignored; the label is shown
    /// either way.
    pub fn copy<C: Clipboard + ?Sized>(
        &mut self,
        clipboard: &mut C,
        text: &str,
        target: CopyTarget,
        now: Duration,
    ) {
        if let Err(e) = clipboard.write_text(text) {
            log::debug!("ignoring clipboard failure for {target}: {e}");
        }
        self.label = Some(target);
        self.revert_at = Some(now + COPY_FEEDBACK);
    }

    /// The label visible at `now`.
    pub fn state(&self, now: Duration) -> Option<CopyTarget> {
        match self.revert_at {
            Some(deadline) if now < deadline => self.label,
            _ => None,
        }
    }

    /// Run the pending revert if its deadline has passed.
    ///
    /// Returns `true` when the label was cleared by this call.
    pub fn expire(&mut self, now: Duration) -> bool {
        match self.revert_at {
            Some(deadline) if now >= deadline => {
                self.label = None;
                self.revert_at = None;
                true
            }
            _ => false,
        }
    }

    /// Time left before the label reverts, if one is showing.
    pub fn remaining(&self, now: Duration) -> Option<Duration> {
        self.revert_at
            .and_then(|deadline| deadline.checked_sub(now))
            .filter(|left| !left.is_zero())
    }
}
