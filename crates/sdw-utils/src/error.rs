//! Errors raised while binding a codec to a card.

use platform::Errno;

/// Failure of a codec runtime init, tagged with the step that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BindError {
    /// Component list could not grow.
    OutOfMemory,
    /// DAPM registrar rejected the codec's routes.
    Routes(Errno),
    /// Jack or pin registration failed.
    JackCreate(Errno),
    /// The codec component refused the jack.
    SetJack(Errno),
    /// No codec info matches the DAI name.
    UnknownDai,
}

impl BindError {
    /// Underlying errno.
    pub fn errno(self) -> Errno {
        match self {
            Self::OutOfMemory => Errno::ENOMEM,
            Self::Routes(errno) | Self::JackCreate(errno) | Self::SetJack(errno) => errno,
            Self::UnknownDai => Errno::EINVAL,
        }
    }

    /// Negative kernel status, e.g. `-22`.
    pub fn to_errno(self) -> i32 {
        self.errno().to_kernel()
    }
}

impl core::fmt::Display for BindError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::OutOfMemory => write!(f, "component list allocation failed"),
            Self::Routes(errno) => write!(f, "map addition failed: {errno}"),
            Self::JackCreate(errno) => write!(f, "Headset Jack creation failed: {errno}"),
            Self::SetJack(errno) => write!(f, "Headset Jack call-back failed: {errno}"),
            Self::UnknownDai => write!(f, "no codec info for DAI"),
        }
    }
}

impl core::error::Error for BindError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Routes(errno) | Self::JackCreate(errno) | Self::SetJack(errno) => Some(errno),
            Self::OutOfMemory | Self::UnknownDai => None,
        }
    }
}

/// Collapse a bind result into the integer status machine drivers return:
/// `0` on success, a negative errno otherwise.
pub fn status(result: Result<(), BindError>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => err.to_errno(),
    }
}
