//! DeviceDriver tick and phase-edge behavior.

use std::rc::Rc;

use futures_lite::future::block_on;
use strokedrive::{
    ActuatorCapability, ActuatorKind, ActuatorMode, ClimaxStyle, DeviceDriver, GamePhase, Stroke,
    TransportError,
};

use crate::mock_transport::{MockTransport, TransportCall};

fn cap(kind: ActuatorKind, index: u32) -> ActuatorCapability {
    ActuatorCapability {
        kind,
        index,
        step_count: 10,
    }
}

fn driver_with(
    report: &[ActuatorCapability],
) -> (DeviceDriver<MockTransport>, Rc<MockTransport>) {
    let transport = Rc::new(MockTransport::new("mock-device"));
    let driver = DeviceDriver::new(Rc::clone(&transport), report);
    (driver, transport)
}

#[test]
fn single_motor_upstroke_tick_issues_one_batched_command() {
    let (mut driver, transport) = driver_with(&[cap(ActuatorKind::Vibration, 0)]);

    block_on(driver.tick(Stroke::Up, 50.0, 1.0)).unwrap();

    let calls = transport.vibration_calls();
    assert_eq!(calls.len(), 1, "exactly one batched vibration command");
    assert_eq!(calls[0], vec![Some(0.5)]);
}

#[test]
fn downstroke_floors_to_min_intensity() {
    let (mut driver, transport) = driver_with(&[cap(ActuatorKind::Vibration, 0)]);
    driver
        .registry_mut()
        .vibration_mut()
        .for_each(|m| m.set_min_intensity(0.2));

    block_on(driver.tick(Stroke::Down, 50.0, 1.0)).unwrap();

    assert_eq!(transport.vibration_calls()[0], vec![Some(0.2)]);
}

#[test]
fn sparse_indices_leave_no_change_holes() {
    let (mut driver, transport) = driver_with(&[
        cap(ActuatorKind::Vibration, 0),
        cap(ActuatorKind::Vibration, 2),
    ]);

    block_on(driver.tick(Stroke::Up, 100.0, 1.0)).unwrap();

    // Slot 1 belongs to nobody: it must be "no change", never zero.
    assert_eq!(
        transport.vibration_calls()[0],
        vec![Some(1.0), None, Some(1.0)]
    );
}

#[test]
fn position_actuator_moves_with_inverse_pace_travel() {
    let (mut driver, transport) = driver_with(&[cap(ActuatorKind::Position, 0)]);

    block_on(driver.tick(Stroke::Up, 50.0, 2.0)).unwrap();

    assert_eq!(
        transport.calls(),
        vec![TransportCall::Move {
            target: 1.0,
            duration_ms: 500
        }]
    );
}

#[test]
fn at_most_one_position_command_per_tick() {
    let (mut driver, transport) = driver_with(&[
        cap(ActuatorKind::Position, 0),
        cap(ActuatorKind::Position, 1),
    ]);
    // Give the rails distinct targets so the winner is observable.
    let mut rails = driver.registry_mut().position_mut();
    rails.next().unwrap().set_max_position(0.5);
    drop(rails);

    block_on(driver.tick(Stroke::Up, 50.0, 1.0)).unwrap();

    // Last computed output wins; exactly one move goes out.
    assert_eq!(
        transport.calls(),
        vec![TransportCall::Move {
            target: 1.0,
            duration_ms: 1000
        }]
    );
}

#[test]
fn unsupported_kinds_never_produce_commands() {
    let (mut driver, transport) = driver_with(&[
        cap(ActuatorKind::Oscillate, 0),
        cap(ActuatorKind::Rotate, 1),
    ]);

    block_on(driver.tick(Stroke::Up, 100.0, 1.0)).unwrap();

    assert!(transport.calls().is_empty());
}

#[test]
fn always_off_motor_still_reports_zero_in_batch() {
    let (mut driver, transport) = driver_with(&[cap(ActuatorKind::Vibration, 0)]);
    driver
        .registry_mut()
        .vibration_mut()
        .for_each(|m| m.set_mode(ActuatorMode::AlwaysOff));

    block_on(driver.tick(Stroke::Up, 100.0, 1.0)).unwrap();

    assert_eq!(transport.vibration_calls()[0], vec![Some(0.0)]);
}

#[test]
fn pause_edge_silences_immediately() {
    let (mut driver, transport) = driver_with(&[cap(ActuatorKind::Vibration, 0)]);

    block_on(driver.tick(Stroke::Up, 80.0, 1.0)).unwrap();
    let run =
        block_on(driver.on_phase_change(GamePhase::Pause, ClimaxStyle::Constant)).unwrap();
    assert!(run.is_none());

    assert_eq!(
        transport.vibration_calls().last().unwrap(),
        &vec![Some(0.0)]
    );
}

#[test]
fn break_edge_silences_like_pause() {
    let (mut driver, transport) = driver_with(&[cap(ActuatorKind::Vibration, 0)]);

    block_on(driver.on_phase_change(GamePhase::Break, ClimaxStyle::Constant)).unwrap();

    assert_eq!(transport.vibration_calls(), vec![vec![Some(0.0)]]);
}

#[test]
fn repeated_phase_is_edge_triggered_noop() {
    let (mut driver, transport) = driver_with(&[cap(ActuatorKind::Vibration, 0)]);

    block_on(driver.on_phase_change(GamePhase::Pause, ClimaxStyle::Constant)).unwrap();
    let before = transport.call_count();
    block_on(driver.on_phase_change(GamePhase::Pause, ClimaxStyle::Constant)).unwrap();

    assert_eq!(transport.call_count(), before, "same phase must be a no-op");
}

#[test]
fn transport_failure_propagates_without_state_damage() {
    let (mut driver, transport) = driver_with(&[cap(ActuatorKind::Vibration, 0)]);
    driver
        .registry_mut()
        .vibration_mut()
        .for_each(|m| m.set_min_intensity(0.3));
    transport.fail_with(TransportError::Timeout);

    let err = block_on(driver.tick(Stroke::Up, 50.0, 1.0)).unwrap_err();
    assert_eq!(err, TransportError::Timeout);

    // Configuration survives a lost command; the next tick works again.
    transport.heal();
    block_on(driver.tick(Stroke::Down, 50.0, 1.0)).unwrap();
    assert_eq!(transport.vibration_calls()[0], vec![Some(0.3)]);
}

#[test]
fn stop_issues_device_level_stop() {
    let (driver, transport) = driver_with(&[cap(ActuatorKind::Vibration, 0)]);

    block_on(driver.stop()).unwrap();

    assert_eq!(transport.calls(), vec![TransportCall::Stop]);
}
