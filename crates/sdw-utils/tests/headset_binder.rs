//! Integration tests for the CS42L42 headset binder.
//!
//! Drives `cs42l42::rtd_init` through the public API against mock card and
//! codec component, checking the integer status the machine driver sees and
//! the side effects left on the card.

// Test file — unwrap/expect/panic acceptable in test code.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::indexing_slicing)]

use platform::mocks::{MockCard, MockComponent};
use platform::{Card, Dai, Errno, InputEvent, JackType, KeyCode, PcmRuntime, PinState};
use sdw_utils::codec::cs42l42;
use sdw_utils::status;

const MACHINE_WIDGETS: [&str; 4] = ["Headphone", "Headset Mic", "cs42l42 HP", "cs42l42 HS"];

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn bind(card: &mut Card<MockCard>, component: &mut MockComponent) -> i32 {
    init_tracing();
    let mut rtd = PcmRuntime::new("SDW0-Playback", card);
    let mut dai = Dai::new(cs42l42::DAI_NAME, component);
    status(cs42l42::rtd_init(&mut rtd, &mut dai))
}

#[test]
fn success_returns_zero_and_wires_everything() {
    let mut card = Card::with_components(
        MockCard::new("sof-soundwire").with_widgets(&MACHINE_WIDGETS),
        "cfg-amp:2",
    )
    .unwrap();
    let mut component = MockComponent::new("sdw:0:1:01fa:4242:01");

    assert_eq!(bind(&mut card, &mut component), 0);

    assert_eq!(card.components(), "cfg-amp:2 hs:cs42l42");
    assert_eq!(card.ops().routes().len(), 2);

    let jack = card.drvdata().sdw_headset.as_ref().unwrap();
    let pins: Vec<_> = jack.pins().iter().map(|p| (p.pin, p.mask)).collect();
    assert_eq!(
        pins,
        [
            ("Headphone", JackType::HEADPHONE),
            ("Headset Mic", JackType::MICROPHONE)
        ]
    );
    assert_eq!(jack.mapped_keys(), 4);
    assert_eq!(component.jack(), Some(jack));
}

#[test]
fn registrar_einval_is_returned_unchanged() {
    let mut card = Card::new(MockCard::new("sof-soundwire"));
    card.ops_mut().fail_add_routes(Errno::EINVAL);
    let mut component = MockComponent::new("cs42l42");

    assert_eq!(bind(&mut card, &mut component), -22);
    assert!(card.drvdata().sdw_headset.is_none());
    assert_eq!(card.ops().jack_new_calls(), 0);
    assert_eq!(component.set_jack_calls(), 0);
}

#[test]
fn unknown_widget_fails_route_step() {
    let mut card = Card::new(MockCard::new("sof-soundwire").with_widgets(&["Headphone"]));
    let mut component = MockComponent::new("cs42l42");

    assert_eq!(bind(&mut card, &mut component), -19);
    assert_eq!(card.ops().jack_new_calls(), 0);
}

#[test]
fn jack_creation_failure_stops_before_binding() {
    let mut card = Card::new(MockCard::new("sof-soundwire"));
    card.ops_mut().fail_jack_new(Errno::ENOMEM);
    let mut component = MockComponent::new("cs42l42");

    assert_eq!(bind(&mut card, &mut component), -12);
    assert_eq!(component.set_jack_calls(), 0);
    assert_eq!(card.ops().routes().len(), 2, "routes stay installed");
}

#[test]
fn binding_failure_keeps_earlier_steps() {
    let mut card = Card::new(MockCard::new("sof-soundwire"));
    let mut component = MockComponent::new("cs42l42");
    component.fail_set_jack(Errno::EOPNOTSUPP);

    assert_eq!(bind(&mut card, &mut component), -95);
    assert_eq!(card.components(), " hs:cs42l42");
    assert_eq!(card.ops().routes().len(), 2);
    assert!(card.drvdata().sdw_headset.is_some());
}

#[test]
fn codec_reports_through_bound_jack() {
    let mut card = Card::new(MockCard::new("sof-soundwire"));
    let mut component = MockComponent::new("cs42l42");
    assert_eq!(bind(&mut card, &mut component), 0);

    let jack = card.drvdata_mut().sdw_headset.as_mut().unwrap();

    let plugged = jack.report(JackType::HEADSET, JackType::HEADSET);
    assert_eq!(
        plugged.pins.as_slice(),
        &[
            PinState { pin: "Headphone", enabled: true },
            PinState { pin: "Headset Mic", enabled: true },
        ]
    );
    assert!(plugged.keys.is_empty());

    let volume_up = jack.report(JackType::BTN_1, cs42l42::BUTTON_MASK);
    assert_eq!(volume_up.keys.as_slice(), &[InputEvent::KeyPress(KeyCode::VOLUMEUP)]);
    assert_eq!(volume_up.pins, plugged.pins, "button report keeps headset presence");

    let released = jack.report(JackType::empty(), cs42l42::BUTTON_MASK);
    assert_eq!(released.keys.as_slice(), &[InputEvent::KeyRelease(KeyCode::VOLUMEUP)]);
    assert_eq!(released.status, JackType::HEADSET);

    let unplugged = jack.report(JackType::empty(), cs42l42::HEADSET_JACK_TYPE);
    assert!(unplugged.keys.is_empty());
    assert!(unplugged.pins.iter().all(|p| !p.enabled));
}

#[test]
fn dispatcher_binds_once_across_links() {
    init_tracing();
    let mut card = Card::new(MockCard::new("sof-soundwire"));
    let mut component = MockComponent::new("cs42l42");

    for link in ["SDW0-Playback", "SDW0-Capture"] {
        let mut rtd = PcmRuntime::new(link, &mut card);
        let mut dais = [Dai::new(cs42l42::DAI_NAME, &mut component)];
        assert_eq!(status(sdw_utils::codec::rtd_init_dais(&mut rtd, &mut dais)), 0);
    }

    assert_eq!(card.ops().add_routes_calls(), 1);
    assert_eq!(component.set_jack_calls(), 1);
}
