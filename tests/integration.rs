// SPDX-License-Identifier: MPL-2.0
//! End-to-end scenarios driving the manager on a virtual clock.

use approx::assert_abs_diff_eq;
use std::collections::HashSet;
use std::time::Duration;
use tempfile::tempdir;
use toastline::clock::ManualClock;
use toastline::config;
use toastline::diagnostics::{DiagnosticEventKind, DiagnosticsCollector, NotificationEvent};
use toastline::notifications::{Kind, Manager, Notification, Preset, Settings};

fn manager() -> (Manager<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    (Manager::with_clock(clock.clone(), Settings::default()), clock)
}

/// Advances the clock in tick-sized steps, ticking after each one.
fn run_for(manager: &mut Manager<ManualClock>, clock: &ManualClock, millis: u64) {
    let step = manager.settings().tick_interval.value();
    let mut elapsed = 0;
    while elapsed < millis {
        let advance = step.min(millis - elapsed);
        clock.advance_millis(advance);
        manager.tick();
        elapsed += advance;
    }
}

#[test]
fn guestbook_preset_shows_then_expires() {
    let (mut manager, clock) = manager();
    let id = manager.show_preset(Preset::GuestbookSigned);

    let views = manager.views();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].kind, Kind::Love);
    assert_eq!(views[0].title.as_deref(), Some("Thank you!"));
    assert_eq!(views[0].duration, Duration::from_millis(5_000));

    run_for(&mut manager, &clock, 4_900);
    assert!(manager.contains(id));

    run_for(&mut manager, &clock, 100);
    assert!(manager.is_empty());
    assert_eq!(manager.pending_timers(), 0);
}

#[test]
fn overflow_keeps_the_five_newest() {
    let (mut manager, clock) = manager();
    let mut ids = Vec::new();
    for i in 1..=6 {
        ids.push(manager.info(format!("msg-{i}")).expect("push"));
        clock.advance_millis(1);
    }

    let messages: Vec<String> = manager.views().into_iter().map(|v| v.message).collect();
    assert_eq!(messages, ["msg-2", "msg-3", "msg-4", "msg-5", "msg-6"]);
    assert!(!manager.contains(ids[0]));
    assert_eq!(manager.pending_timers(), 5);
}

#[test]
fn hover_pauses_and_resume_uses_remaining_time() {
    let (mut manager, clock) = manager();
    let id = manager.show_preset(Preset::SubmissionFailed);

    run_for(&mut manager, &clock, 3_000);
    assert!(manager.pause(id));

    // Hovering well past the original deadline.
    run_for(&mut manager, &clock, 10_000);
    assert!(manager.contains(id));
    let paused = &manager.views()[0];
    assert!(paused.paused);
    assert_eq!(paused.remaining, Some(Duration::from_millis(5_000)));

    assert!(manager.resume(id));
    run_for(&mut manager, &clock, 4_900);
    assert!(manager.contains(id));
    run_for(&mut manager, &clock, 100);
    assert!(!manager.contains(id));
}

#[test]
fn clear_all_cancels_every_timer() {
    let (mut manager, clock) = manager();
    manager.show_preset(Preset::PhotoUploaded);
    manager.show_preset(Preset::RsvpSubmitted);
    manager.show_preset(Preset::Offline);

    manager.clear_all();
    assert!(manager.is_empty());
    assert_eq!(manager.pending_timers(), 0);

    let revision = manager.revision();
    run_for(&mut manager, &clock, 40_000);
    assert_eq!(manager.revision(), revision, "no timer may fire after clear");
}

#[test]
fn persistent_offline_banner_outlives_the_sweep() {
    let (mut manager, clock) = manager();
    let id = manager.show_preset(Preset::Offline);

    run_for(&mut manager, &clock, 120_000);
    assert!(manager.contains(id));
    assert_eq!(manager.views()[0].remaining, None);

    assert!(manager.remove(id));
    assert!(!manager.remove(id));
}

#[test]
fn paused_toast_is_swept_after_thirty_seconds() {
    let (mut manager, clock) = manager();
    let id = manager.show_preset(Preset::LinkCopied);
    manager.pause(id);

    run_for(&mut manager, &clock, 30_000);
    assert!(manager.contains(id));

    // The next sweep runs within one sweep interval.
    run_for(&mut manager, &clock, 5_000);
    assert!(!manager.contains(id));
}

#[test]
fn error_can_be_evicted_by_info() {
    let (mut manager, _clock) = manager();
    let error = manager.error("upload failed").expect("push");
    for i in 0..5 {
        manager.info(format!("info-{i}")).expect("push");
    }

    assert!(!manager.contains(error));
    assert!(manager.iter().all(|n| n.kind() == Kind::Info));
}

#[test]
fn ids_are_unique_across_managers() {
    let (mut first, _) = manager();
    let (mut second, _) = manager();
    let mut seen = HashSet::new();

    for preset in Preset::ALL {
        assert!(seen.insert(first.show_preset(preset)));
        assert!(seen.insert(second.show_preset(preset)));
    }
}

#[test]
fn unknown_preset_key_is_reported() {
    let (mut manager, _clock) = manager();
    assert!(manager.show_preset_named("confettiCannon").is_err());
    assert!(manager.show_preset_named("songSuggested").is_ok());
    assert_eq!(manager.len(), 1);
}

#[test]
fn progress_counts_down_linearly() {
    let (mut manager, clock) = manager();
    manager
        .push(Notification::celebration("party").auto_dismiss(Duration::from_secs(10)))
        .expect("push");

    for expected in [1.0_f32, 0.75, 0.5, 0.25] {
        let progress = manager.views()[0].progress.expect("timed toast");
        assert_abs_diff_eq!(progress, expected, epsilon = 1e-5);
        run_for(&mut manager, &clock, 2_500);
    }
    assert!(manager.is_empty());
}

#[test]
fn settings_file_drives_durations() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let path = temp_dir.path().join("settings.toml");
    std::fs::write(&path, "[durations]\nsuccess_ms = 1500\nwarning_ms = 0\n").expect("write");

    let config = config::load_from_path(&path).expect("valid config");
    let clock = ManualClock::new();
    let mut manager = Manager::with_clock(clock.clone(), Settings::from(&config));

    let saved = manager.success("saved").expect("push");
    let banner = manager.warning("maintenance tonight").expect("push");

    run_for(&mut manager, &clock, 1_500);
    assert!(!manager.contains(saved));
    assert!(manager.contains(banner));
    assert_eq!(manager.pending_timers(), 0);
}

#[test]
fn diagnostics_report_lists_lifecycle() {
    let mut collector = DiagnosticsCollector::default();
    let (mut manager, clock) = manager();
    manager.set_diagnostics(collector.handle());

    let id = manager.show_preset(Preset::PhotoUploaded);
    manager.remove(id);
    manager.show_preset(Preset::SubmissionFailed);
    run_for(&mut manager, &clock, 8_000);
    collector.process_pending();

    let lifecycle: Vec<_> = collector
        .iter()
        .filter_map(|event| match &event.kind {
            DiagnosticEventKind::Notification { event } => Some(event.clone()),
            _ => None,
        })
        .collect();
    assert!(matches!(lifecycle[0], NotificationEvent::Shown { .. }));
    assert_eq!(lifecycle[1], NotificationEvent::Dismissed { id });
    assert!(matches!(lifecycle.last(), Some(NotificationEvent::Expired { .. })));

    let json = collector.export_json().expect("serializable report");
    assert!(json.contains("\"event\": \"expired\""));
}
