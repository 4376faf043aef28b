//! PCM runtime binding handed to codec init callbacks.

use crate::card::{Card, SoundCard};
use crate::component::CodecComponent;

/// One DAI link being brought up on a card.
pub struct PcmRuntime<'a, S> {
    /// DAI-link name.
    pub name: &'static str,
    /// Card the link belongs to.
    pub card: &'a mut Card<S>,
}

impl<'a, S: SoundCard> PcmRuntime<'a, S> {
    /// Bind a DAI link to its card.
    pub fn new(name: &'static str, card: &'a mut Card<S>) -> Self {
        Self { name, card }
    }
}

/// A codec DAI and the component that owns it.
pub struct Dai<'a, C> {
    name: &'static str,
    component: &'a mut C,
}

impl<'a, C: CodecComponent> Dai<'a, C> {
    /// Wrap a component's DAI.
    pub fn new(name: &'static str, component: &'a mut C) -> Self {
        Self { name, component }
    }

    /// DAI name, e.g. `"cs42l42-sdw"`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Owning component, mutably.
    pub fn component_mut(&mut self) -> &mut C {
        &mut *self.component
    }
}
