//! End-to-end scenarios for the remote control, checked against the full
//! transcript and device states after every step.

use remote_patterns::core::{CeilingFan, Device, Lamp, RecordingTrace};
use remote_patterns::remote::{RemoteControl, UndoOutcome};
use remote_patterns::HomeConfig;
use std::rc::Rc;

use remote_patterns::core::PowerState::{Off, On};

fn setup() -> (Rc<Lamp>, Rc<CeilingFan>, Rc<RecordingTrace>, RemoteControl) {
    let trace = Rc::new(RecordingTrace::new());
    let (lamp, fan, remote) = HomeConfig::default().install(trace.clone());
    (lamp, fan, trace, remote)
}

#[test]
fn light_then_fan_then_undo_past_empty() {
    let (lamp, fan, trace, mut remote) = setup();
    assert_eq!(lamp.power(), Off);

    remote.light_on();
    assert_eq!(lamp.power(), On);
    assert_eq!(remote.history().labels(), vec!["light-on"]);

    remote.fan_on();
    assert_eq!(fan.power(), On);
    assert_eq!(remote.history().labels(), vec!["light-on", "fan-on"]);

    assert_eq!(remote.undo(), UndoOutcome::Undone { label: "fan-on" });
    assert_eq!(fan.power(), Off);
    assert_eq!(remote.history().labels(), vec!["light-on"]);

    assert_eq!(remote.undo(), UndoOutcome::Undone { label: "light-on" });
    assert_eq!(lamp.power(), Off);
    assert!(remote.history().is_empty());

    assert_eq!(remote.undo(), UndoOutcome::NothingToUndo);
    assert_eq!((lamp.power(), fan.power()), (Off, Off));

    assert_eq!(
        trace.lines(),
        vec![
            "Living room Lamp is ON",
            "Bedroom Ceiling Fan is ON",
            "Undoing last command...",
            "Bedroom Ceiling Fan is OFF",
            "Undoing last command...",
            "Living room Lamp is OFF",
            "No commands to undo.",
        ]
    );
}

#[test]
fn four_presses_then_four_undos_replay_in_reverse() {
    let (lamp, fan, trace, mut remote) = setup();

    remote.light_on();
    remote.light_off();
    remote.fan_on();
    remote.fan_off();
    assert_eq!((lamp.power(), fan.power()), (Off, Off));

    assert_eq!(remote.undo(), UndoOutcome::Undone { label: "fan-off" });
    assert_eq!(fan.power(), On);

    assert_eq!(remote.undo(), UndoOutcome::Undone { label: "fan-on" });
    assert_eq!(fan.power(), Off);

    assert_eq!(remote.undo(), UndoOutcome::Undone { label: "light-off" });
    assert_eq!(lamp.power(), On);

    assert_eq!(remote.undo(), UndoOutcome::Undone { label: "light-on" });
    assert_eq!(lamp.power(), Off);

    assert_eq!((lamp.power(), fan.power()), (Off, Off));
    assert_eq!(remote.undo(), UndoOutcome::NothingToUndo);

    assert_eq!(
        trace.lines(),
        vec![
            "Living room Lamp is ON",
            "Living room Lamp is OFF",
            "Bedroom Ceiling Fan is ON",
            "Bedroom Ceiling Fan is OFF",
            "Undoing last command...",
            "Bedroom Ceiling Fan is ON",
            "Undoing last command...",
            "Bedroom Ceiling Fan is OFF",
            "Undoing last command...",
            "Living room Lamp is ON",
            "Undoing last command...",
            "Living room Lamp is OFF",
            "No commands to undo.",
        ]
    );
}

#[test]
fn interleaved_presses_and_undos() {
    let (lamp, fan, _trace, mut remote) = setup();

    remote.light_on();
    remote.undo();
    remote.fan_on();
    remote.light_on();
    remote.undo();

    assert_eq!(lamp.power(), Off);
    assert_eq!(fan.power(), On);
    assert_eq!(remote.history().labels(), vec!["fan-on"]);
    assert!(remote.can_undo());
}

#[test]
fn two_remotes_on_shared_devices_keep_separate_histories() {
    let trace = Rc::new(RecordingTrace::new());
    let lamp = Rc::new(Lamp::new("Living room", trace.clone()));
    let fan = Rc::new(CeilingFan::new("Bedroom", trace.clone()));
    let mut first = RemoteControl::for_devices(lamp.clone(), fan.clone(), trace.clone());
    let mut second = RemoteControl::for_devices(lamp.clone(), fan.clone(), trace.clone());

    first.light_on();
    second.fan_on();

    assert_eq!(first.undo(), UndoOutcome::Undone { label: "light-on" });
    assert_eq!(first.undo(), UndoOutcome::NothingToUndo);
    assert!(fan.is_on());
    assert_eq!(second.history().len(), 1);
}
