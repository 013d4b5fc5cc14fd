//! Opaque failure causes crossing the sandbox trust boundary.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Failure category carried by an [`IoCause`].
pub enum IoCauseKind {
    /// The file-choice dialog itself failed to produce a usable result.
    Dialog,
    /// Reading the chosen file failed after selection.
    Read,
    /// Writing the chosen file failed after selection.
    Write,
    /// The request/response channel to the privileged host broke down.
    Transport,
    /// No backend capable of servicing the operation is present.
    Unsupported,
}

impl IoCauseKind {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dialog => "dialog",
            Self::Read => "read",
            Self::Write => "write",
            Self::Transport => "transport",
            Self::Unsupported => "unsupported",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Tagged, serializable failure cause delivered to the sandboxed side.
///
/// The privileged executor stringifies platform errors into `message` before they
/// cross the trust boundary; raw error objects and file-system paths never do.
pub struct IoCause {
    /// Failure category.
    pub kind: IoCauseKind,
    /// Stringified, path-free description of the underlying failure.
    pub message: String,
}

impl IoCause {
    /// Creates a cause from a kind and a path-free message.
    pub fn new(kind: IoCauseKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Creates a [`IoCauseKind::Read`] cause.
    pub fn read(message: impl Into<String>) -> Self {
        Self::new(IoCauseKind::Read, message)
    }

    /// Creates a [`IoCauseKind::Write`] cause.
    pub fn write(message: impl Into<String>) -> Self {
        Self::new(IoCauseKind::Write, message)
    }

    /// Creates a [`IoCauseKind::Transport`] cause.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(IoCauseKind::Transport, message)
    }

    /// Creates a [`IoCauseKind::Unsupported`] cause.
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::new(IoCauseKind::Unsupported, message)
    }
}

impl std::fmt::Display for IoCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind.as_str(), self.message)
    }
}

impl std::error::Error for IoCause {}
