//! SoundWire codec table and DAI-link init dispatch
//!
//! Each supported codec is described by a [`CodecInfo`]: its SoundWire part
//! id, its DAIs, and which runtime init (if any) binds each DAI into the
//! card. The machine driver looks codecs up by part id while building DAI
//! links and calls [`rtd_init`] for every codec DAI when a link comes up.
//!
//! | Codec     | Part id  | DAI           | Init                 |
//! |-----------|----------|---------------|----------------------|
//! | CS42L42   | `0x4242` | `cs42l42-sdw` | [`cs42l42::rtd_init`] |

pub mod cs42l42;

use platform::{CodecComponent, Dai, PcmRuntime, SoundCard};

use crate::config::MAX_CODEC_DAIS;
use crate::error::BindError;

/// Role of a codec DAI on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DaiType {
    /// Headset jack (headphone out + headset mic in).
    Jack,
    /// Speaker amplifier.
    Amp,
    /// Digital microphones.
    Mic,
}

/// DAI-link slots a codec DAI can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DaiLinkId {
    /// Headphone playback.
    JackOut,
    /// Headset capture.
    JackIn,
    /// Speaker playback.
    AmpOut,
    /// Echo reference capture.
    AmpIn,
    /// Microphone capture.
    DmicIn,
}

/// Runtime init callback selected for a DAI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RtdInit {
    /// [`cs42l42::rtd_init`]
    Cs42l42,
}

impl RtdInit {
    /// Run the selected init.
    pub fn run<S, C>(self, rtd: &mut PcmRuntime<'_, S>, dai: &mut Dai<'_, C>) -> Result<(), BindError>
    where
        S: SoundCard,
        C: CodecComponent,
    {
        match self {
            Self::Cs42l42 => cs42l42::rtd_init(rtd, dai),
        }
    }
}

/// One DAI of a codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecDaiInfo {
    /// DAI name as registered by the codec driver.
    pub dai_name: &'static str,
    /// Role on the card.
    pub dai_type: DaiType,
    /// Playback and capture link slots.
    pub dailink: [Option<DaiLinkId>; 2],
    /// Card-side init, run once per card.
    pub rtd_init: Option<RtdInit>,
}

/// A supported SoundWire codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecInfo {
    /// SoundWire part id.
    pub part_id: u16,
    /// Codec name.
    pub name: &'static str,
    dais: [Option<CodecDaiInfo>; MAX_CODEC_DAIS],
}

impl CodecInfo {
    /// DAIs of this codec.
    pub fn dais(&self) -> impl Iterator<Item = &CodecDaiInfo> {
        self.dais.iter().flatten()
    }
}

/// Codecs this crate knows how to bind.
pub static CODEC_INFO_LIST: [CodecInfo; 1] = [CodecInfo {
    part_id: cs42l42::PART_ID,
    name: cs42l42::CODEC_NAME,
    dais: [
        Some(CodecDaiInfo {
            dai_name: cs42l42::DAI_NAME,
            dai_type: DaiType::Jack,
            dailink: [Some(DaiLinkId::JackOut), Some(DaiLinkId::JackIn)],
            rtd_init: Some(RtdInit::Cs42l42),
        }),
        None,
        None,
        None,
    ],
}];

/// Find a codec by SoundWire part id.
pub fn find_codec_info_part(part_id: u16) -> Option<&'static CodecInfo> {
    CODEC_INFO_LIST.iter().find(|info| info.part_id == part_id)
}

/// Find the codec and DAI entry for a codec DAI name.
pub fn find_codec_info_dai(
    dai_name: &str,
) -> Option<(&'static CodecInfo, &'static CodecDaiInfo)> {
    CODEC_INFO_LIST.iter().find_map(|info| {
        info.dais()
            .find(|dai| dai.dai_name == dai_name)
            .map(|dai| (info, dai))
    })
}

/// Run the card-side init for one codec DAI of a link.
///
/// Each DAI's init runs once per card; later links sharing the codec skip
/// it. A DAI without an init callback is marked done and succeeds.
pub fn rtd_init<S, C>(rtd: &mut PcmRuntime<'_, S>, dai: &mut Dai<'_, C>) -> Result<(), BindError>
where
    S: SoundCard,
    C: CodecComponent,
{
    let Some((codec, info)) = find_codec_info_dai(dai.name()) else {
        tracing::error!(dev = rtd.card.dev_name(), dai = dai.name(), "no codec info for DAI");
        return Err(BindError::UnknownDai);
    };

    if rtd.card.drvdata().is_rtd_init_done(info.dai_name) {
        tracing::debug!(codec = codec.name, link = rtd.name, "rtd init already done");
        return Ok(());
    }

    if let Some(init) = info.rtd_init {
        init.run(rtd, dai)?;
    }

    rtd.card
        .drvdata_mut()
        .set_rtd_init_done(info.dai_name)
        .map_err(|_| BindError::OutOfMemory)
}

/// Run [`rtd_init`] for every codec DAI of a link, stopping at the first
/// failure.
pub fn rtd_init_dais<S, C>(
    rtd: &mut PcmRuntime<'_, S>,
    dais: &mut [Dai<'_, C>],
) -> Result<(), BindError>
where
    S: SoundCard,
    C: CodecComponent,
{
    for dai in dais.iter_mut() {
        rtd_init(rtd, dai)?;
    }
    Ok(())
}
