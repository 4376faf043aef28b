//! Mock implementations for testing
//!
//! Mock card and codec component with call recording and failure
//! injection, for use in unit and integration tests.

#![cfg(any(test, feature = "std"))]

use crate::*;

/// Maximum routes a mock card records.
pub const MOCK_MAX_ROUTES: usize = 32;
/// Maximum widgets a mock card knows about.
pub const MOCK_MAX_WIDGETS: usize = 32;

/// Mock sound card
///
/// With no widgets declared every route is accepted. After
/// [`MockCard::with_widgets`], routes naming an unknown widget are rejected
/// with `ENODEV` while the valid ones are still added, as the DAPM registrar
/// does.
pub struct MockCard {
    dev_name: &'static str,
    widgets: heapless::Vec<&'static str, MOCK_MAX_WIDGETS>,
    routes: heapless::Vec<DapmRoute, MOCK_MAX_ROUTES>,
    add_routes_calls: usize,
    jack_new_calls: usize,
    fail_add_routes: Option<Errno>,
    fail_jack_new: Option<Errno>,
}

impl MockCard {
    /// Create new mock card
    pub fn new(dev_name: &'static str) -> Self {
        Self {
            dev_name,
            widgets: heapless::Vec::new(),
            routes: heapless::Vec::new(),
            add_routes_calls: 0,
            jack_new_calls: 0,
            fail_add_routes: None,
            fail_jack_new: None,
        }
    }

    /// Declare the widgets routes may reference.
    ///
    /// Panics past [`MOCK_MAX_WIDGETS`].
    pub fn with_widgets(mut self, widgets: &[&'static str]) -> Self {
        for widget in widgets {
            assert!(self.widgets.push(*widget).is_ok(), "too many widgets for MockCard");
        }
        self
    }

    /// Make the next `add_routes` calls fail with `errno`.
    pub fn fail_add_routes(&mut self, errno: Errno) {
        self.fail_add_routes = Some(errno);
    }

    /// Make the next `jack_new_pins` calls fail with `errno`.
    pub fn fail_jack_new(&mut self, errno: Errno) {
        self.fail_jack_new = Some(errno);
    }

    /// Routes installed so far
    pub fn routes(&self) -> &[DapmRoute] {
        &self.routes
    }

    /// Number of `add_routes` calls
    pub fn add_routes_calls(&self) -> usize {
        self.add_routes_calls
    }

    /// Number of `jack_new_pins` calls
    pub fn jack_new_calls(&self) -> usize {
        self.jack_new_calls
    }

    fn knows(&self, widget: &str) -> bool {
        self.widgets.is_empty() || self.widgets.iter().any(|w| *w == widget)
    }
}

impl SoundCard for MockCard {
    fn dev_name(&self) -> &str {
        self.dev_name
    }

    fn add_routes(&mut self, routes: &[DapmRoute]) -> Result<(), Errno> {
        self.add_routes_calls = self.add_routes_calls.saturating_add(1);
        if let Some(errno) = self.fail_add_routes {
            return Err(errno);
        }

        let mut result = Ok(());
        for route in routes {
            if !self.knows(route.sink) || !self.knows(route.source) {
                result = Err(Errno::ENODEV);
                continue;
            }
            if self.routes.push(*route).is_err() {
                result = Err(Errno::ENOMEM);
            }
        }
        result
    }

    fn jack_new_pins(
        &mut self,
        name: &'static str,
        jack_type: JackType,
        pins: &'static [JackPin],
    ) -> Result<Jack, Errno> {
        self.jack_new_calls = self.jack_new_calls.saturating_add(1);
        if let Some(errno) = self.fail_jack_new {
            return Err(errno);
        }
        let mut jack = Jack::new(name, jack_type);
        jack.add_pins(pins)?;
        Ok(jack)
    }
}

/// Mock codec component
pub struct MockComponent {
    name: &'static str,
    jack: Option<Jack>,
    set_jack_calls: usize,
    fail_set_jack: Option<Errno>,
}

impl MockComponent {
    /// Create new mock component
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            jack: None,
            set_jack_calls: 0,
            fail_set_jack: None,
        }
    }

    /// Make `set_jack` fail with `errno`.
    pub fn fail_set_jack(&mut self, errno: Errno) {
        self.fail_set_jack = Some(errno);
    }

    /// Let `set_jack` succeed again.
    pub fn clear_failures(&mut self) {
        self.fail_set_jack = None;
    }

    /// Jack the codec was given, as it looked at hand-off
    pub fn jack(&self) -> Option<&Jack> {
        self.jack.as_ref()
    }

    /// Number of `set_jack` calls
    pub fn set_jack_calls(&self) -> usize {
        self.set_jack_calls
    }
}

impl CodecComponent for MockComponent {
    fn name(&self) -> &str {
        self.name
    }

    fn set_jack(&mut self, jack: &Jack) -> Result<(), Errno> {
        self.set_jack_calls = self.set_jack_calls.saturating_add(1);
        if let Some(errno) = self.fail_set_jack {
            return Err(errno);
        }
        self.jack = Some(jack.clone());
        Ok(())
    }
}
