//! Sound-card framework abstractions for SoundWire machine drivers
//!
//! This crate models the pieces of the sound-card framework that a codec
//! helper touches during card probe, so helpers can be written and tested
//! without a running sound subsystem.
//!
//! # Architecture Layers
//!
//! ```text
//! Machine driver (card probe, DAI-link setup)
//!         ↓
//! Codec helpers (sdw-utils crate)
//!         ↓
//! Card framework (this crate - DAPM, jacks, components)
//!         ↓
//! Sound core / input subsystem / codec driver
//! ```
//!
//! # Abstractions
//!
//! - [`SoundCard`] - DAPM route registration and jack creation
//! - [`CodecComponent`] - codec side of jack detection
//! - [`Card`] - a card with its component list and private context
//! - [`PcmRuntime`] / [`Dai`] - the runtime binding handed to init callbacks
//! - [`Jack`] - headset presence and button state
//!
//! # Features
//!
//! - `std`: expose [`mocks`] to other crates' tests
//! - `defmt`: enable defmt derives
//!
//! # Example
//!
//! ```no_run
//! use platform::{Card, Errno, SoundCard};
//!
//! fn append<S: SoundCard>(card: &mut Card<S>) -> Result<(), Errno> {
//!     card.append_components(" hs:example")
//! }
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(clippy::unreachable)] // no unreachable!() that isn't documented
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code
#![allow(clippy::must_use_candidate)] // accessors — callers decide
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod card;
pub mod component;
pub mod dapm;
pub mod errno;
pub mod input;
pub mod jack;
pub mod mocks;
pub mod runtime;

pub use card::{Card, ComponentList, McPrivate, SoundCard};
pub use component::CodecComponent;
pub use dapm::DapmRoute;
pub use errno::Errno;
pub use input::{InputEvent, KeyCode};
pub use jack::{Jack, JackButton, JackPin, JackReport, JackType, PinState};
pub use runtime::{Dai, PcmRuntime};
