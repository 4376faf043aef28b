//! Sound card and its machine-driver private context.
//!
//! [`SoundCard`] is the framework side of a card: DAPM route registration and
//! jack creation. [`Card`] wraps an implementation together with the state a
//! machine driver keeps per card, the component list string and the
//! [`McPrivate`] context that owns the headset jack.

use crate::dapm::DapmRoute;
use crate::errno::Errno;
use crate::jack::{Jack, JackPin, JackType};

/// Capacity of the card's component list string.
pub const COMPONENT_LIST_CAPACITY: usize = 128;

/// Maximum number of codec DAIs whose init has run on one card.
pub const MAX_INITIALIZED_DAIS: usize = 16;

/// Space-separated capability list exported to user space (UCM).
pub type ComponentList = heapless::String<COMPONENT_LIST_CAPACITY>;

/// Framework operations a codec helper needs from the card.
pub trait SoundCard {
    /// Device name used in diagnostics.
    fn dev_name(&self) -> &str;

    /// Add routes to the card's DAPM graph.
    ///
    /// Returns the registrar's error when any route is rejected.
    fn add_routes(&mut self, routes: &[DapmRoute]) -> Result<(), Errno>;

    /// Create a jack reporting `jack_type` and attach `pins` to it.
    fn jack_new_pins(
        &mut self,
        name: &'static str,
        jack_type: JackType,
        pins: &'static [JackPin],
    ) -> Result<Jack, Errno>;
}

/// Per-card machine-driver context.
#[derive(Debug, Clone, Default)]
pub struct McPrivate {
    /// Headset jack shared with the codec once configured.
    pub sdw_headset: Option<Jack>,
    rtd_init_done: heapless::Vec<&'static str, MAX_INITIALIZED_DAIS>,
}

impl McPrivate {
    /// Empty context.
    pub const fn new() -> Self {
        Self {
            sdw_headset: None,
            rtd_init_done: heapless::Vec::new(),
        }
    }

    /// Whether the runtime init for `dai_name` already ran on this card.
    pub fn is_rtd_init_done(&self, dai_name: &str) -> bool {
        self.rtd_init_done.iter().any(|done| *done == dai_name)
    }

    /// Record that the runtime init for `dai_name` ran.
    pub fn set_rtd_init_done(&mut self, dai_name: &'static str) -> Result<(), Errno> {
        if self.is_rtd_init_done(dai_name) {
            return Ok(());
        }
        self.rtd_init_done.push(dai_name).map_err(|_| Errno::ENOMEM)
    }
}

/// A sound card under construction.
pub struct Card<S> {
    ops: S,
    components: ComponentList,
    drvdata: McPrivate,
}

impl<S: SoundCard> Card<S> {
    /// Card with an empty component list.
    pub fn new(ops: S) -> Self {
        Self {
            ops,
            components: ComponentList::new(),
            drvdata: McPrivate::new(),
        }
    }

    /// Card whose component list starts as `components`.
    pub fn with_components(ops: S, components: &str) -> Result<Self, Errno> {
        let mut card = Self::new(ops);
        card.components
            .push_str(components)
            .map_err(|_| Errno::ENOMEM)?;
        Ok(card)
    }

    /// Device name used in diagnostics.
    pub fn dev_name(&self) -> &str {
        self.ops.dev_name()
    }

    /// Current component list.
    pub fn components(&self) -> &str {
        &self.components
    }

    /// Append `suffix` to the component list.
    ///
    /// The list is left unchanged when `suffix` does not fit.
    pub fn append_components(&mut self, suffix: &str) -> Result<(), Errno> {
        let remaining = COMPONENT_LIST_CAPACITY.saturating_sub(self.components.len());
        if suffix.len() > remaining {
            tracing::error!(dev = self.ops.dev_name(), "component list full");
            return Err(Errno::ENOMEM);
        }
        self.components.push_str(suffix).map_err(|_| Errno::ENOMEM)
    }

    /// Framework operations.
    pub fn ops(&self) -> &S {
        &self.ops
    }

    /// Framework operations, mutably.
    pub fn ops_mut(&mut self) -> &mut S {
        &mut self.ops
    }

    /// Machine-driver context.
    pub fn drvdata(&self) -> &McPrivate {
        &self.drvdata
    }

    /// Machine-driver context, mutably.
    pub fn drvdata_mut(&mut self) -> &mut McPrivate {
        &mut self.drvdata
    }
}
