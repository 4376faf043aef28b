//! Input-event key codes and key events
//!
//! Jack buttons are reported to user space as ordinary key presses. The
//! codes here use the Linux input-event numbering so a headset's play/pause
//! button reaches media players the same way a keyboard media key does.

/// Linux input-event key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct KeyCode(u16);

impl KeyCode {
    /// Mute
    pub const MUTE: Self = Self(113);
    /// Volume down
    pub const VOLUMEDOWN: Self = Self(114);
    /// Volume up
    pub const VOLUMEUP: Self = Self(115);
    /// Phone / call key
    pub const PHONE: Self = Self(169);
    /// Next track
    pub const NEXTSONG: Self = Self(163);
    /// Play/Pause toggle
    pub const PLAYPAUSE: Self = Self(164);
    /// Previous track
    pub const PREVIOUSSONG: Self = Self(165);
    /// Media key
    pub const MEDIA: Self = Self(226);
    /// Voice command / assistant
    pub const VOICECOMMAND: Self = Self(0x246);

    /// Raw key code.
    pub const fn code(self) -> u16 {
        self.0
    }
}

/// Key transitions produced by a jack report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// Key went down
    KeyPress(KeyCode),
    /// Key went up
    KeyRelease(KeyCode),
}

impl InputEvent {
    /// The key this event refers to.
    pub fn key(self) -> KeyCode {
        match self {
            Self::KeyPress(key) | Self::KeyRelease(key) => key,
        }
    }

    /// `true` for [`InputEvent::KeyPress`].
    pub fn is_press(self) -> bool {
        matches!(self, Self::KeyPress(_))
    }
}
