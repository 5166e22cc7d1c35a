//! Fleet fan-out behavior across several connected devices.

use std::rc::Rc;

use futures_lite::future::block_on;
use strokedrive::{
    ActuatorCapability, ActuatorKind, ClimaxStyle, DeviceFleet, FleetConfig, GamePhase, Stroke,
    TransportError,
};

use crate::mock_transport::{MockTransport, TransportCall};

fn vib_report() -> Vec<ActuatorCapability> {
    vec![ActuatorCapability {
        kind: ActuatorKind::Vibration,
        index: 0,
        step_count: 10,
    }]
}

fn two_device_fleet() -> (
    DeviceFleet<MockTransport>,
    Rc<MockTransport>,
    Rc<MockTransport>,
) {
    let mut fleet = DeviceFleet::new(FleetConfig::default());
    let a = Rc::new(MockTransport::new("alpha"));
    let b = Rc::new(MockTransport::new("beta"));
    fleet.attach(Rc::clone(&a), &vib_report());
    fleet.attach(Rc::clone(&b), &vib_report());
    (fleet, a, b)
}

#[test]
fn tick_fans_out_to_every_device() {
    let (mut fleet, a, b) = two_device_fleet();

    block_on(fleet.tick(Stroke::Up, 50.0, 1.0)).unwrap();

    assert_eq!(a.vibration_calls(), vec![vec![Some(0.5)]]);
    assert_eq!(b.vibration_calls(), vec![vec![Some(0.5)]]);
}

#[test]
fn one_failing_device_does_not_starve_siblings() {
    let (mut fleet, a, b) = two_device_fleet();
    a.fail_with(TransportError::Disconnected);

    let err = block_on(fleet.tick(Stroke::Up, 50.0, 1.0)).unwrap_err();

    assert_eq!(err, TransportError::Disconnected);
    assert!(a.vibration_calls().is_empty());
    assert_eq!(b.vibration_calls(), vec![vec![Some(0.5)]], "beta still driven");
}

#[test]
fn stop_all_issues_device_level_stops() {
    let (fleet, a, b) = two_device_fleet();

    block_on(fleet.stop_all()).unwrap();

    assert_eq!(a.calls(), vec![TransportCall::Stop]);
    assert_eq!(b.calls(), vec![TransportCall::Stop]);
}

#[test]
fn climax_edge_yields_one_run_per_device() {
    let (mut fleet, _a, _b) = two_device_fleet();

    let runs = block_on(fleet.on_phase_change(GamePhase::Climax)).unwrap();

    assert_eq!(runs.len(), 2);
}

#[test]
fn pause_edge_silences_the_whole_fleet() {
    let (mut fleet, a, b) = two_device_fleet();

    let runs = block_on(fleet.on_phase_change(GamePhase::Pause)).unwrap();

    assert!(runs.is_empty());
    assert_eq!(a.vibration_calls(), vec![vec![Some(0.0)]]);
    assert_eq!(b.vibration_calls(), vec![vec![Some(0.0)]]);
}

#[test]
fn detach_removes_a_disconnected_device() {
    let (mut fleet, _a, b) = two_device_fleet();

    fleet.detach("alpha");
    assert_eq!(fleet.len(), 1);

    block_on(fleet.tick(Stroke::Up, 50.0, 1.0)).unwrap();
    assert_eq!(b.vibration_calls().len(), 1);
}

#[test]
fn climax_style_comes_from_fleet_config() {
    let mut fleet = DeviceFleet::new(FleetConfig {
        climax_style: ClimaxStyle::Thump,
    });
    let a = Rc::new(MockTransport::new("alpha"));
    fleet.attach(Rc::clone(&a), &vib_report());

    let runs = block_on(fleet.on_phase_change(GamePhase::Climax)).unwrap();
    for run in runs {
        block_on(run.run()).unwrap();
    }

    assert!(!a.pulse_calls().is_empty(), "thump style must pulse");
    assert!(a.vibration_calls().is_empty());
}
