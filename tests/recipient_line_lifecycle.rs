use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use pretty_assertions::assert_eq;

use recipient_line::{
    Component, EnvConfig, FitTrigger, RecipientFitter, RecipientLine, ResizeBus, TextMeasurer,
    TextStyle,
};

const TEAM: [&str; 4] = [
    "alice@example.com",
    "bob@example.com",
    "carol@example.com",
    "dave@example.com",
];

#[test]
fn resize_storm_keeps_only_latest_result() {
    let bus = ResizeBus::new();
    let mut line = RecipientLine::for_terminal(TextStyle::default(), 10.0);
    line.set_recipients(TEAM);
    let mounted = line.mount(&bus);

    for cols in (5..120).rev() {
        bus.emit(cols as f32 * 10.0);
    }
    bus.emit(2000.0);

    let result = mounted.result();
    assert_eq!(result.hidden_count, 0);
    assert_eq!(result.display_text, TEAM.join(", "));
}

#[test]
fn unmount_releases_subscription_on_early_teardown() {
    let bus = ResizeBus::new();
    {
        let mut line = RecipientLine::for_terminal(TextStyle::default(), 10.0);
        line.set_recipients(TEAM);
        let _mounted = line.mount(&bus);
        assert_eq!(bus.listener_count(), 1);
    }
    assert_eq!(bus.listener_count(), 0);
}

#[test]
fn unmount_releases_subscription_when_unwinding() {
    let bus = ResizeBus::new();
    let for_thread = bus.clone();
    let outcome = std::thread::spawn(move || {
        let line = RecipientLine::for_terminal(TextStyle::default(), 10.0);
        let _mounted = line.mount(&for_thread);
        panic!("component setup failed");
    })
    .join();
    assert!(outcome.is_err());
    assert_eq!(bus.listener_count(), 0);
}

#[test]
fn every_trigger_runs_one_pass_with_the_current_measurer() {
    let passes = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&passes);
    // Counts badge measurements, which happen exactly once per pass for a two-item list.
    let measurer = move |text: &str, style: &TextStyle| {
        if text.starts_with('+') {
            counter.fetch_add(1, Ordering::SeqCst);
        }
        text.chars().count() as f32 * style.font_size
    };

    let mut line = RecipientLine::new(RecipientFitter::default(), measurer, 14.0);
    line.set_recipients(["a@x.com", "b@x.com"]);
    line.dispatch(FitTrigger::RecipientsChanged);
    line.set_container_width(10.0);
    assert_eq!(passes.load(Ordering::SeqCst), 3);
}

#[test]
fn configured_line_renders_badge_at_trailing_edge() {
    let config = EnvConfig {
        cell_width_px: Some(8.0),
        ..EnvConfig::default()
    };
    let mut line = RecipientLine::from_config(&config);
    line.set_recipients(TEAM);

    let rendered = line.render(40);
    assert_eq!(rendered.len(), 1);
    assert!(rendered[0].starts_with("alice@example.com, ..."));
    assert!(rendered[0].ends_with(" +3 "));
    assert_eq!(rendered[0].chars().count(), 40);
}

#[test]
fn measurer_closures_are_accepted() {
    let measurer = |text: &str, _style: &TextStyle| text.len() as f32;
    assert_eq!(measurer.measure("abc", &TextStyle::default()), 3.0);
}
