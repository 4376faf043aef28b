//! Machine-driver configuration constants
//!
//! Names and identifiers shared between the codec helpers and user space.
//! UCM configurations match on the jack name and the component tags, so
//! these must not change between releases.

/// Jack name exported to user space for every SoundWire headset codec.
pub const HEADSET_JACK_NAME: &str = "Headset Jack";

/// Machine-level headphone widget.
pub const HEADPHONE_WIDGET: &str = "Headphone";

/// Machine-level headset microphone widget.
pub const HEADSET_MIC_WIDGET: &str = "Headset Mic";

/// Maximum DAIs a single codec exposes.
pub const MAX_CODEC_DAIS: usize = 4;
