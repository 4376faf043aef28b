//! Codec component abstraction

use crate::errno::Errno;
use crate::jack::Jack;

/// The codec side of a DAI.
///
/// After card setup the codec driver reports detection and button events
/// through the jack it is given here.
pub trait CodecComponent {
    /// Component name.
    fn name(&self) -> &str;

    /// Hand the configured jack to the codec driver.
    ///
    /// No callback data is passed; the codec uses its own detection path.
    fn set_jack(&mut self, jack: &Jack) -> Result<(), Errno>;
}
