//! DAPM routing graph edges.
//!
//! A route connects a source widget to a sink widget, optionally through a
//! named control (mixer input, mux selection). Codec helpers declare their
//! routes as `static` tables and hand them to [`crate::SoundCard::add_routes`].

/// One edge of the DAPM graph: `source` → (`control`) → `sink`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DapmRoute {
    /// Destination widget.
    pub sink: &'static str,
    /// Optional control gating the path; `None` for a static connection.
    pub control: Option<&'static str>,
    /// Source widget.
    pub source: &'static str,
}

impl DapmRoute {
    /// Build a route in `(sink, control, source)` order.
    pub const fn new(sink: &'static str, control: Option<&'static str>, source: &'static str) -> Self {
        Self {
            sink,
            control,
            source,
        }
    }

    /// Static connection without a control.
    pub const fn direct(sink: &'static str, source: &'static str) -> Self {
        Self::new(sink, None, source)
    }
}
