//! Canonical operation outcomes and the wire shapes that carry them.
//!
//! Outcomes are what backends resolve to internally; responses are the serde shapes
//! exchanged with the privileged host. Decoding a loose response applies the channel
//! precedence `canceled` over `error` over `data`, so a malformed peer can never make
//! cancellation look like failure or vice versa.

use serde::{Deserialize, Serialize};

use crate::cause::IoCause;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Terminal result of one `open` operation.
pub enum OpenOutcome {
    /// The user dismissed the file-choice dialog or picker.
    Canceled,
    /// The dialog completed without returning a usable file reference.
    Empty,
    /// A file was chosen but could not be read.
    Failed(IoCause),
    /// The chosen file's bytes, ownership transferred to the caller.
    Loaded(Vec<u8>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Terminal result of one `save` operation.
pub enum SaveOutcome {
    /// The user dismissed the save-location dialog or picker.
    Canceled,
    /// A location was chosen but the write did not complete.
    Failed(IoCause),
    /// The full buffer was written to the chosen location.
    Saved,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Wire response for one `open` round trip.
pub struct OpenResponse {
    /// Set when the user dismissed the dialog; excludes `data` and `error`.
    #[serde(default)]
    pub canceled: bool,
    /// Bytes of the chosen file, or `None` when no file reference was produced.
    #[serde(default)]
    pub data: Option<Vec<u8>>,
    /// Read failure after a file was chosen.
    #[serde(default)]
    pub error: Option<IoCause>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Wire response for one `save` round trip. The empty response means success.
pub struct SaveResponse {
    /// Set when the user dismissed the dialog; excludes `error`.
    #[serde(default)]
    pub canceled: bool,
    /// Write failure after a location was chosen.
    #[serde(default)]
    pub error: Option<IoCause>,
}

impl From<OpenOutcome> for OpenResponse {
    fn from(outcome: OpenOutcome) -> Self {
        match outcome {
            OpenOutcome::Canceled => Self {
                canceled: true,
                ..Self::default()
            },
            OpenOutcome::Empty => Self::default(),
            OpenOutcome::Failed(cause) => Self {
                error: Some(cause),
                ..Self::default()
            },
            OpenOutcome::Loaded(data) => Self {
                data: Some(data),
                ..Self::default()
            },
        }
    }
}

impl From<OpenResponse> for OpenOutcome {
    fn from(response: OpenResponse) -> Self {
        if response.canceled {
            Self::Canceled
        } else if let Some(cause) = response.error {
            Self::Failed(cause)
        } else if let Some(data) = response.data {
            Self::Loaded(data)
        } else {
            Self::Empty
        }
    }
}

impl From<SaveOutcome> for SaveResponse {
    fn from(outcome: SaveOutcome) -> Self {
        match outcome {
            SaveOutcome::Canceled => Self {
                canceled: true,
                ..Self::default()
            },
            SaveOutcome::Failed(cause) => Self {
                error: Some(cause),
                ..Self::default()
            },
            SaveOutcome::Saved => Self::default(),
        }
    }
}

impl From<SaveResponse> for SaveOutcome {
    fn from(response: SaveResponse) -> Self {
        if response.canceled {
            Self::Canceled
        } else if let Some(cause) = response.error {
            Self::Failed(cause)
        } else {
            Self::Saved
        }
    }
}
