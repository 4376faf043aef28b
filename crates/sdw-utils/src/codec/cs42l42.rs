//! Cirrus Logic CS42L42 headset codec on SoundWire
//!
//! The CS42L42 drives the headset jack: headphone output, headset
//! microphone input, and detection of plug state plus four headset buttons.
//! [`rtd_init`] binds it into a card when its DAI link comes up:
//!
//! 1. add `hs:cs42l42` to the card component list (UCM keys off it)
//! 2. route `cs42l42 HP` → "Headphone" and "Headset Mic" → `cs42l42 HS`
//! 3. create "Headset Jack" with the headphone and microphone pins
//! 4. map buttons 0–3 to play/pause, volume up/down and voice command
//! 5. hand the finished jack to the codec
//!
//! Any failure aborts the sequence. Earlier steps are not rolled back.

use platform::{
    CodecComponent, DapmRoute, Dai, JackButton, JackPin, JackType, KeyCode, PcmRuntime, SoundCard,
};

use crate::config::{HEADPHONE_WIDGET, HEADSET_JACK_NAME, HEADSET_MIC_WIDGET};
use crate::error::BindError;

/// Codec name used in the component list and widget prefixes.
pub const CODEC_NAME: &str = "cs42l42";

/// Appended to the card component list.
pub const COMPONENT_SUFFIX: &str = " hs:cs42l42";

/// SoundWire part id.
pub const PART_ID: u16 = 0x4242;

/// SoundWire DAI name.
pub const DAI_NAME: &str = "cs42l42-sdw";

/// Codec-side routes between the codec pins and the machine jack widgets.
pub static CS42L42_MAP: [DapmRoute; 2] = [
    // HP jack connectors - unknown if we have jack detection
    DapmRoute::direct(HEADPHONE_WIDGET, "cs42l42 HP"),
    DapmRoute::direct("cs42l42 HS", HEADSET_MIC_WIDGET),
];

/// Widgets switched by headset presence.
pub static CS42L42_JACK_PINS: [JackPin; 2] = [
    JackPin::new(HEADPHONE_WIDGET, JackType::HEADPHONE),
    JackPin::new(HEADSET_MIC_WIDGET, JackType::MICROPHONE),
];

/// The four headset buttons. The codec reports button events with this mask.
pub const BUTTON_MASK: JackType = JackType::BTN_0
    .union(JackType::BTN_1)
    .union(JackType::BTN_2)
    .union(JackType::BTN_3);

/// Headset presence plus four buttons.
pub const HEADSET_JACK_TYPE: JackType = JackType::HEADSET.union(BUTTON_MASK);

/// Button to key mapping for the headset buttons.
pub const CS42L42_BUTTON_KEYS: [(JackButton, KeyCode); 4] = [
    (JackButton::Btn0, KeyCode::PLAYPAUSE),
    (JackButton::Btn1, KeyCode::VOLUMEUP),
    (JackButton::Btn2, KeyCode::VOLUMEDOWN),
    (JackButton::Btn3, KeyCode::VOICECOMMAND),
];

/// Runtime init for the CS42L42 DAI link.
///
/// On success the card context holds the configured headset jack and the
/// codec component has been given the same jack.
pub fn rtd_init<S, C>(rtd: &mut PcmRuntime<'_, S>, dai: &mut Dai<'_, C>) -> Result<(), BindError>
where
    S: SoundCard,
    C: CodecComponent,
{
    let card = &mut *rtd.card;

    card.append_components(COMPONENT_SUFFIX)
        .map_err(|_| BindError::OutOfMemory)?;

    if let Err(err) = card.ops_mut().add_routes(&CS42L42_MAP) {
        tracing::error!(
            dev = card.dev_name(),
            errno = err.name(),
            "cs42l42 map addition failed: {}",
            err
        );
        return Err(BindError::Routes(err));
    }

    let mut jack = match card
        .ops_mut()
        .jack_new_pins(HEADSET_JACK_NAME, HEADSET_JACK_TYPE, &CS42L42_JACK_PINS)
    {
        Ok(jack) => jack,
        Err(err) => {
            tracing::error!(
                dev = card.dev_name(),
                errno = err.name(),
                "Headset Jack creation failed: {}",
                err
            );
            return Err(BindError::JackCreate(err));
        }
    };

    for (button, key) in CS42L42_BUTTON_KEYS {
        jack.set_key(button, key);
    }

    // The codec only ever sees the jack with pins and keys in place.
    let jack = card.drvdata_mut().sdw_headset.insert(jack);
    let ret = dai.component_mut().set_jack(jack);
    if let Err(err) = ret {
        tracing::error!(
            dev = card.dev_name(),
            errno = err.name(),
            "Headset Jack call-back failed: {}",
            err
        );
        return Err(BindError::SetJack(err));
    }

    tracing::debug!(dev = card.dev_name(), dai = dai.name(), "cs42l42 headset bound");
    Ok(())
}
