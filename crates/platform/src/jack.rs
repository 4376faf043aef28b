//! Jack detection: presence bits, pins and button keys.
//!
//! A [`Jack`] represents one physical connector. Its [`JackType`] mask says
//! which presence and button bits it can report. Pins tie presence bits to
//! DAPM widgets so that plugging a headset powers up "Headphone" and
//! "Headset Mic". Button bits are translated to input key codes.
//!
//! ```text
//! codec driver ──report(status, mask)──▶ Jack ──▶ pin enable/disable (DAPM)
//!                                             └──▶ key press/release (input)
//! ```

use core::ops::{BitAnd, BitOr, BitOrAssign, Not};

use crate::errno::Errno;
use crate::input::{InputEvent, KeyCode};

/// Maximum number of pins a single jack can drive.
pub const MAX_JACK_PINS: usize = 8;

// ── JackType ─────────────────────────────────────────────────────────────────

/// Jack presence and button bit mask.
///
/// Bit values follow the sound core's `SND_JACK_*` numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct JackType(u32);

impl JackType {
    /// Headphone plugged in.
    pub const HEADPHONE: Self = Self(0x0001);
    /// Microphone plugged in.
    pub const MICROPHONE: Self = Self(0x0002);
    /// Headphone plus microphone.
    pub const HEADSET: Self = Self(0x0001 | 0x0002);
    /// Line out.
    pub const LINEOUT: Self = Self(0x0004);
    /// Mechanical switch.
    pub const MECHANICAL: Self = Self(0x0008);
    /// Video out.
    pub const VIDEOOUT: Self = Self(0x0010);
    /// Line in.
    pub const LINEIN: Self = Self(0x0020);
    /// Button 0.
    pub const BTN_0: Self = Self(0x4000);
    /// Button 1.
    pub const BTN_1: Self = Self(0x2000);
    /// Button 2.
    pub const BTN_2: Self = Self(0x1000);
    /// Button 3.
    pub const BTN_3: Self = Self(0x0800);
    /// Button 4.
    pub const BTN_4: Self = Self(0x0400);
    /// Button 5.
    pub const BTN_5: Self = Self(0x0200);

    const ALL_BITS: u32 = 0x003F | 0x7E00;

    /// No bits set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Keep only bits the sound core knows about.
    pub const fn from_bits_truncate(bits: u32) -> Self {
        Self(bits & Self::ALL_BITS)
    }

    /// Raw bits.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// `true` when no bits are set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// All bits of `other` are set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// At least one bit is shared.
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Const-context union.
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl BitOr for JackType {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for JackType {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for JackType {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl Not for JackType {
    type Output = Self;

    /// Complement within the known bits.
    fn not(self) -> Self {
        Self(!self.0 & Self::ALL_BITS)
    }
}

// ── JackButton ───────────────────────────────────────────────────────────────

/// Button bits that can carry a key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum JackButton {
    /// `BTN_0`
    Btn0,
    /// `BTN_1`
    Btn1,
    /// `BTN_2`
    Btn2,
    /// `BTN_3`
    Btn3,
    /// `BTN_4`
    Btn4,
    /// `BTN_5`
    Btn5,
}

impl JackButton {
    /// Number of button bits.
    pub const COUNT: usize = 6;

    /// Every button, in key-slot order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Btn0,
        Self::Btn1,
        Self::Btn2,
        Self::Btn3,
        Self::Btn4,
        Self::Btn5,
    ];

    /// The mask bit this button reports on.
    pub const fn mask(self) -> JackType {
        match self {
            Self::Btn0 => JackType::BTN_0,
            Self::Btn1 => JackType::BTN_1,
            Self::Btn2 => JackType::BTN_2,
            Self::Btn3 => JackType::BTN_3,
            Self::Btn4 => JackType::BTN_4,
            Self::Btn5 => JackType::BTN_5,
        }
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

// ── JackPin ──────────────────────────────────────────────────────────────────

/// Associates a DAPM widget with the presence bits that enable it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JackPin {
    /// Widget name.
    pub pin: &'static str,
    /// Presence bits that enable the widget.
    pub mask: JackType,
    /// Enable the widget when the bits are *clear* instead.
    pub invert: bool,
}

impl JackPin {
    /// Non-inverted pin.
    pub const fn new(pin: &'static str, mask: JackType) -> Self {
        Self {
            pin,
            mask,
            invert: false,
        }
    }

    /// Pin enabled while its bits are absent (e.g. internal speaker).
    pub const fn inverted(pin: &'static str, mask: JackType) -> Self {
        Self {
            pin,
            mask,
            invert: true,
        }
    }

    fn enabled_for(&self, status: JackType) -> bool {
        status.intersects(self.mask) != self.invert
    }
}

// ── Jack ─────────────────────────────────────────────────────────────────────

/// Widget state after a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinState {
    /// Widget name.
    pub pin: &'static str,
    /// Whether the widget is now enabled.
    pub enabled: bool,
}

/// Result of [`Jack::report`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JackReport {
    /// Status after masking to the jack's type.
    pub status: JackType,
    /// New state of each attached pin, in attach order.
    pub pins: heapless::Vec<PinState, MAX_JACK_PINS>,
    /// Key transitions caused by button bits changing.
    pub keys: heapless::Vec<InputEvent, { JackButton::COUNT }>,
}

/// A detection jack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Jack {
    name: &'static str,
    jack_type: JackType,
    pins: heapless::Vec<JackPin, MAX_JACK_PINS>,
    keys: [Option<KeyCode>; JackButton::COUNT],
    status: JackType,
}

impl Jack {
    /// Create a jack with no pins and no key mapping.
    pub const fn new(name: &'static str, jack_type: JackType) -> Self {
        Self {
            name,
            jack_type,
            pins: heapless::Vec::new(),
            keys: [None; JackButton::COUNT],
            status: JackType::empty(),
        }
    }

    /// Jack name as shown to user space.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Bits this jack can report.
    pub fn jack_type(&self) -> JackType {
        self.jack_type
    }

    /// Attached pins.
    pub fn pins(&self) -> &[JackPin] {
        &self.pins
    }

    /// Last reported status.
    pub fn status(&self) -> JackType {
        self.status
    }

    /// Attach pins.
    ///
    /// All pins are validated before any is attached. A pin with an empty
    /// name or mask is rejected with `EINVAL`; running out of pin slots
    /// gives `ENOMEM`.
    pub fn add_pins(&mut self, pins: &[JackPin]) -> Result<(), Errno> {
        if let Some(bad) = pins.iter().find(|p| p.pin.is_empty() || p.mask.is_empty()) {
            tracing::error!(jack = self.name, pin = bad.pin, "invalid jack pin");
            return Err(Errno::EINVAL);
        }
        self.pins.extend_from_slice(pins).map_err(|_| Errno::ENOMEM)
    }

    /// Assign the key code reported for `button`.
    ///
    /// Buttons outside the jack's type keep their mapping but never fire,
    /// since [`Jack::report`] masks status to the jack type.
    pub fn set_key(&mut self, button: JackButton, key: KeyCode) {
        if let Some(slot) = self.keys.get_mut(button.slot()) {
            *slot = Some(key);
        }
    }

    /// Key code assigned to `button`, if any.
    pub fn key(&self, button: JackButton) -> Option<KeyCode> {
        self.keys.get(button.slot()).copied().flatten()
    }

    /// Number of buttons with a key assigned.
    pub fn mapped_keys(&self) -> usize {
        self.keys.iter().filter(|k| k.is_some()).count()
    }

    /// Report a new detection status for the bits in `mask`.
    ///
    /// Only bits in both `mask` and the jack type are updated from `status`;
    /// every other bit keeps its previous value, so a codec can report
    /// buttons without touching presence and vice versa. Each pin is enabled
    /// when its mask intersects the resulting status (inverted pins the
    /// opposite). Buttons whose bit changed produce a key press or release
    /// for their assigned code.
    pub fn report(&mut self, status: JackType, mask: JackType) -> JackReport {
        let mask = mask & self.jack_type;
        let status = (self.status & !mask) | (status & mask);
        let previous = core::mem::replace(&mut self.status, status);

        let mut pins = heapless::Vec::new();
        for pin in &self.pins {
            // Both vectors share MAX_JACK_PINS capacity.
            let _ = pins.push(PinState {
                pin: pin.pin,
                enabled: pin.enabled_for(status),
            });
        }

        let mut keys = heapless::Vec::new();
        for button in JackButton::ALL {
            let Some(key) = self.key(button) else {
                continue;
            };
            let mask = button.mask();
            let down = status.contains(mask);
            if down == previous.contains(mask) {
                continue;
            }
            tracing::debug!(jack = self.name, key = key.code(), down, "jack button");
            let event = if down {
                InputEvent::KeyPress(key)
            } else {
                InputEvent::KeyRelease(key)
            };
            let _ = keys.push(event);
        }

        tracing::debug!(jack = self.name, status = status.bits(), "jack report");
        JackReport { status, pins, keys }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    const PINS: [JackPin; 2] = [
        JackPin::new("Headphone", JackType::HEADPHONE),
        JackPin::new("Headset Mic", JackType::MICROPHONE),
    ];

    const BUTTONS: JackType = JackType::BTN_0
        .union(JackType::BTN_1)
        .union(JackType::BTN_2)
        .union(JackType::BTN_3);

    const HEADSET_TYPE: JackType = JackType::HEADSET.union(JackType::BTN_0);

    fn headset() -> Jack {
        let mut jack = Jack::new("Headset Jack", HEADSET_TYPE);
        jack.add_pins(&PINS).unwrap();
        jack.set_key(JackButton::Btn0, KeyCode::PLAYPAUSE);
        jack
    }

    #[test]
    fn headset_is_headphone_plus_microphone() {
        assert_eq!(JackType::HEADPHONE | JackType::MICROPHONE, JackType::HEADSET);
        assert!(JackType::HEADSET.contains(JackType::MICROPHONE));
        assert!(!JackType::HEADPHONE.contains(JackType::HEADSET));
    }

    #[test]
    fn button_bits_match_sound_core() {
        assert_eq!(JackButton::Btn0.mask().bits(), 0x4000);
        assert_eq!(JackButton::Btn3.mask().bits(), 0x0800);
        assert_eq!(JackButton::Btn5.mask().bits(), 0x0200);
    }

    #[test]
    fn from_bits_truncate_drops_unknown_bits() {
        assert_eq!(JackType::from_bits_truncate(0x8001), JackType::HEADPHONE);
    }

    #[test]
    fn complement_stays_within_known_bits() {
        let rest = !JackType::HEADSET;
        assert!(!rest.intersects(JackType::HEADSET));
        assert!(rest.contains(JackType::BTN_0 | JackType::LINEIN));
        assert_eq!(rest.bits() & 0x8000, 0);
    }

    #[test]
    fn new_jack_is_unconfigured() {
        let jack = Jack::new("Headset Jack", JackType::HEADSET);
        assert!(jack.pins().is_empty());
        assert_eq!(jack.mapped_keys(), 0);
        assert!(jack.status().is_empty());
    }

    #[test]
    fn add_pins_rejects_empty_mask() {
        let mut jack = Jack::new("Headset Jack", JackType::HEADSET);
        let bad = [PINS[0], JackPin::new("Line", JackType::empty())];
        assert_eq!(jack.add_pins(&bad), Err(Errno::EINVAL));
        assert!(jack.pins().is_empty(), "no pin attached on rejection");
    }

    #[test]
    fn add_pins_rejects_overflow() {
        let mut jack = Jack::new("Headset Jack", JackType::HEADSET);
        let many = [PINS[0]; MAX_JACK_PINS + 1];
        assert_eq!(jack.add_pins(&many), Err(Errno::ENOMEM));
    }

    #[test]
    fn set_key_overwrites_previous_mapping() {
        let mut jack = headset();
        jack.set_key(JackButton::Btn0, KeyCode::MEDIA);
        assert_eq!(jack.key(JackButton::Btn0), Some(KeyCode::MEDIA));
        assert_eq!(jack.mapped_keys(), 1);
    }

    #[test]
    fn report_enables_matching_pins() {
        let mut jack = headset();
        let report = jack.report(JackType::HEADPHONE, HEADSET_TYPE);
        assert_eq!(report.pins[0], PinState { pin: "Headphone", enabled: true });
        assert_eq!(report.pins[1], PinState { pin: "Headset Mic", enabled: false });
    }

    #[test]
    fn report_masks_status_to_jack_type() {
        let mut jack = headset();
        let status = JackType::HEADSET | JackType::LINEOUT | JackType::BTN_2;
        let report = jack.report(status, JackType::from_bits_truncate(u32::MAX));
        assert_eq!(report.status, JackType::HEADSET);
        assert_eq!(jack.status(), JackType::HEADSET);
    }

    #[test]
    fn report_emits_press_then_release() {
        let mut jack = headset();
        let pressed = jack.report(JackType::HEADSET | JackType::BTN_0, HEADSET_TYPE);
        assert_eq!(pressed.keys.as_slice(), &[InputEvent::KeyPress(KeyCode::PLAYPAUSE)]);

        let held = jack.report(JackType::HEADSET | JackType::BTN_0, HEADSET_TYPE);
        assert!(held.keys.is_empty(), "unchanged button produces no event");

        let released = jack.report(JackType::HEADSET, HEADSET_TYPE);
        assert_eq!(released.keys.as_slice(), &[InputEvent::KeyRelease(KeyCode::PLAYPAUSE)]);
    }

    #[test]
    fn button_report_keeps_headset_presence() {
        let mut jack = headset();
        jack.report(JackType::HEADSET, JackType::HEADSET);

        let pressed = jack.report(JackType::BTN_0, BUTTONS);
        assert_eq!(pressed.status, JackType::HEADSET | JackType::BTN_0);
        assert_eq!(pressed.pins[0], PinState { pin: "Headphone", enabled: true });
        assert_eq!(pressed.pins[1], PinState { pin: "Headset Mic", enabled: true });
        assert_eq!(pressed.keys.as_slice(), &[InputEvent::KeyPress(KeyCode::PLAYPAUSE)]);

        let released = jack.report(JackType::empty(), BUTTONS);
        assert_eq!(released.status, JackType::HEADSET);
        assert_eq!(released.keys.as_slice(), &[InputEvent::KeyRelease(KeyCode::PLAYPAUSE)]);
    }

    #[test]
    fn presence_report_leaves_held_button() {
        let mut jack = headset();
        jack.report(JackType::HEADSET | JackType::BTN_0, HEADSET_TYPE);

        let unplugged = jack.report(JackType::empty(), JackType::HEADSET);
        assert_eq!(unplugged.status, JackType::BTN_0);
        assert!(unplugged.pins.iter().all(|p| !p.enabled));
        assert!(unplugged.keys.is_empty());
    }

    #[test]
    fn empty_mask_changes_nothing() {
        let mut jack = headset();
        jack.report(JackType::HEADPHONE, HEADSET_TYPE);
        let report = jack.report(JackType::empty(), JackType::empty());
        assert_eq!(report.status, JackType::HEADPHONE);
        assert!(report.keys.is_empty());
    }

    #[test]
    fn inverted_pin_tracks_absence() {
        let mut jack = Jack::new("Headphone Jack", JackType::HEADPHONE);
        jack.add_pins(&[JackPin::inverted("Speaker", JackType::HEADPHONE)]).unwrap();
        assert!(jack.report(JackType::empty(), JackType::HEADPHONE).pins[0].enabled);
        assert!(!jack.report(JackType::HEADPHONE, JackType::HEADPHONE).pins[0].enabled);
    }
}
