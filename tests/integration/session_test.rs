//! End-to-end tests of the playback engine through the public API

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::rc::Rc;
use std::time::Duration;

use subplay::subtitle::srt;
use subplay::{
    ConfigSettingsStore, FontStyle, PlaybackClock, PlaybackSession, PlayerEvent, Settings,
    SettingsStore, TickSource,
};
use tempfile::TempDir;

use crate::helpers::fixtures_dir;

/// Tick source replaying a fixed list of deltas, one per poll.
struct ScriptedTicks {
    running: bool,
    deltas: VecDeque<u64>,
}

impl ScriptedTicks {
    fn new(deltas: &[u64]) -> Self {
        Self {
            running: false,
            deltas: deltas.iter().copied().collect(),
        }
    }
}

impl TickSource for ScriptedTicks {
    fn start(&mut self) {
        self.running = true;
    }

    fn stop(&mut self) {
        self.running = false;
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn poll(&mut self) -> Option<u64> {
        if !self.running {
            return None;
        }
        self.deltas.pop_front()
    }

    fn until_next(&self) -> Option<Duration> {
        self.running.then_some(Duration::ZERO)
    }
}

/// Records (event, elapsed, active id) for each notification.
type Log = Rc<RefCell<Vec<(PlayerEvent, u64, Option<u32>)>>>;

fn record(session: &PlaybackSession) -> Log {
    let log: Log = Rc::default();
    let sink = Rc::clone(&log);
    session.add_listener(Rc::new(move |p: &PlaybackSession, e: PlayerEvent| {
        sink.borrow_mut()
            .push((e, p.elapsed_ms(), p.active_subtitle().map(|s| s.id())));
    }));
    log
}

fn temp_store() -> (TempDir, ConfigSettingsStore) {
    let dir = TempDir::new().unwrap();
    let store = ConfigSettingsStore::new(dir.path().join("config.toml"));
    (dir, store)
}

#[test]
fn fixture_plays_through_to_the_end() {
    let (_dir, store) = temp_store();
    let ticks = ScriptedTicks::new(&[2_000, 4_000, 30_000, 30_000, 30_000]);
    let mut session = PlaybackSession::new(
        PlaybackClock::with_timer(Box::new(ticks)),
        Box::new(store),
    );
    let log = record(&session);

    session.load_subtitles(srt::parse(fixtures_dir().join("sample.srt")).unwrap());
    session.start().unwrap();
    while session.poll().unwrap().is_some() {}

    let seen: Vec<_> = log.borrow().iter().map(|(e, t, id)| (*e, *t, *id)).collect();
    assert_eq!(
        seen,
        vec![
            (PlayerEvent::SubtitlesLoaded, 0, None),
            (PlayerEvent::Started, 0, None),
            (PlayerEvent::Tick { seek: false }, 2_000, Some(1)),
            (PlayerEvent::Tick { seek: false }, 6_000, Some(2)),
            (PlayerEvent::Tick { seek: false }, 36_000, None),
            (PlayerEvent::Tick { seek: false }, 62_000, None),
            (PlayerEvent::Stopped, 62_000, None),
        ]
    );
    assert!(!session.is_playing());
}

#[test]
fn seek_while_playing_continues_from_target() {
    let (_dir, store) = temp_store();
    let ticks = ScriptedTicks::new(&[40, 40]);
    let mut session = PlaybackSession::new(
        PlaybackClock::with_timer(Box::new(ticks)),
        Box::new(store),
    );
    session.load_subtitles(srt::parse(fixtures_dir().join("sample.srt")).unwrap());
    session.start().unwrap();

    session.seek(59_990).unwrap();
    assert!(session.is_playing());
    session.poll().unwrap();

    assert_eq!(session.elapsed_ms(), 60_030);
    assert_eq!(session.active_subtitle().map(|s| s.text()), Some("The end."));
}

#[test]
fn settings_survive_a_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    let mut first = PlaybackSession::new(
        PlaybackClock::default(),
        Box::new(ConfigSettingsStore::new(&path)),
    );
    assert_eq!(*first.settings(), Settings::default());

    let changed = first
        .settings()
        .with_opacity(128)
        .with_font_style(FontStyle::Italic);
    first.set_settings(changed);
    first.set_last_folder(dir.path());
    first.close();

    let second = PlaybackSession::new(
        PlaybackClock::default(),
        Box::new(ConfigSettingsStore::new(&path)),
    );
    assert_eq!(second.settings().opacity, 128);
    assert_eq!(second.settings().font_style, FontStyle::Italic);
    assert_eq!(second.last_folder(), dir.path());
}

#[test]
fn unreadable_settings_fall_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "this is not toml = = =").unwrap();

    let store = ConfigSettingsStore::new(&path);
    assert_eq!(store.load(), Settings::default());
}

#[test]
fn close_silences_listeners() {
    let (_dir, store) = temp_store();
    let mut session = PlaybackSession::new(PlaybackClock::default(), Box::new(store));
    let log = record(&session);
    session.load_subtitles(srt::parse(fixtures_dir().join("sample.srt")).unwrap());
    session.close();

    let before = log.borrow().len();
    session.load_subtitles(srt::parse(fixtures_dir().join("sample.srt")).unwrap());
    assert_eq!(log.borrow().len(), before);
    assert_eq!(session.listener_count(), 0);
}
