//! SoundWire codec helpers for the generic machine driver
//!
//! The machine driver builds one DAI link per SoundWire codec function and,
//! when a link's PCM runtime comes up, asks the codec helper to wire the
//! codec into the card: DAPM routes, jacks, component tags.
//!
//! ```text
//! machine driver ──rtd_init(rtd, dai)──▶ codec table lookup
//!                                             │
//!                                             ▼
//!                                   cs42l42::rtd_init
//!                      ┌──────────┬───────────┼────────────┐
//!                      ▼          ▼           ▼            ▼
//!               component    DAPM routes   Headset Jack   codec set_jack
//!                 list
//! ```
//!
//! # Example
//!
//! ```no_run
//! use platform::{Card, CodecComponent, Dai, PcmRuntime, SoundCard};
//!
//! fn bring_up<S: SoundCard, C: CodecComponent>(card: &mut Card<S>, codec: &mut C) -> i32 {
//!     let mut rtd = PcmRuntime::new("SDW0-Playback", card);
//!     let mut dai = Dai::new("cs42l42-sdw", codec);
//!     sdw_utils::status(sdw_utils::codec::rtd_init(&mut rtd, &mut dai))
//! }
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)]
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::doc_markdown)] // codec and widget names in doc comments
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod codec;
pub mod config;
pub mod error;

pub use codec::{find_codec_info_dai, find_codec_info_part, CodecInfo, CODEC_INFO_LIST};
pub use error::{status, BindError};
