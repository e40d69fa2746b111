use crate::model::DisableFlag;

/// The `disable` flag of a displayed user, as far as the client knows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlagState {
    /// Matches the last value the backend returned or acknowledged.
    Confirmed(DisableFlag),
    /// An update to `to` is in flight; `from` is restored if it fails.
    Pending { from: DisableFlag, to: DisableFlag },
}

impl FlagState {
    /// The value to display: the target of a pending write, otherwise the
    /// confirmed value.
    #[must_use]
    pub fn displayed(self) -> DisableFlag {
        match self {
            Self::Confirmed(flag) | Self::Pending { to: flag, .. } => flag,
        }
    }

    #[must_use]
    pub fn is_pending(self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    /// Marks the flag pending and returns the value to send, or `None` when a
    /// write is already in flight.
    pub fn begin(&mut self) -> Option<DisableFlag> {
        match *self {
            Self::Confirmed(from) => {
                let to = from.toggled();
                *self = Self::Pending { from, to };
                Some(to)
            }
            Self::Pending { .. } => None,
        }
    }

    /// Settles a pending write. Returns `false` if nothing was pending.
    pub fn finish(&mut self, succeeded: bool) -> bool {
        match *self {
            Self::Pending { from, to } => {
                *self = Self::Confirmed(if succeeded { to } else { from });
                true
            }
            Self::Confirmed(_) => false,
        }
    }
}

/// Update the caller must send with [`crate::api::ApiClient::update_disable`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleRequest {
    pub uid: String,
    pub value: DisableFlag,
}
