use std::collections::VecDeque;
use std::io::{self, Write};
use std::time::Duration;

use tempfile::{tempdir, NamedTempFile};
use toroidal_life::screen::{Event, FrameMeta, Screen};
use toroidal_life::{Cadence, Grid, LifeEngine, LoadError, Session, SessionOutcome, Settings};

/// Headless screen that replays scripted key events and records every frame
#[derive(Default)]
struct ScriptedScreen {
    events: VecDeque<Event>,
    frames: Vec<(Grid, FrameMeta)>,
    messages: Vec<String>,
    waits: usize,
}

impl ScriptedScreen {
    fn with_events(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
            ..Self::default()
        }
    }
}

impl Screen for ScriptedScreen {
    fn render(&mut self, grid: &Grid, meta: &FrameMeta) -> io::Result<()> {
        self.frames.push((grid.clone(), *meta));
        Ok(())
    }

    fn poll_event(&mut self) -> Event {
        self.events.pop_front().unwrap_or(Event::None)
    }

    fn wait_key(&mut self) -> io::Result<()> {
        self.waits += 1;
        Ok(())
    }

    fn show_message(&mut self, message: &str) -> io::Result<()> {
        self.messages.push(message.to_string());
        Ok(())
    }
}

fn grid_with(height: usize, width: usize, living: &[(usize, usize)]) -> Grid {
    let mut grid = Grid::new(height, width);
    for &(r, c) in living {
        grid.set(r, c, true).unwrap();
    }
    grid
}

fn blinker_session() -> Session {
    Session::new(
        LifeEngine::new(grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)])),
        Cadence::default(),
    )
}

#[test]
fn test_empty_grid_stops_after_one_frame() {
    let mut session = Session::new(LifeEngine::new(Grid::new(25, 80)), Cadence::default());
    let mut screen = ScriptedScreen::default();
    let mut sleeps = Vec::new();

    let outcome = session
        .run_with_sleeper(&mut screen, |d| sleeps.push(d))
        .unwrap();

    assert_eq!(outcome, SessionOutcome::Stabilized);
    assert_eq!(screen.frames.len(), 1);
    assert_eq!(screen.waits, 1);
    assert_eq!(screen.messages.len(), 1);
    assert!(screen.messages[0].contains("dead or stationary"));
    assert!(sleeps.is_empty());
}

#[test]
fn test_quit_is_observed_before_advancing() {
    let mut session = blinker_session();
    let mut screen = ScriptedScreen::with_events([Event::None, Event::None, Event::Quit]);

    let outcome = session.run_with_sleeper(&mut screen, |_| {}).unwrap();

    assert_eq!(outcome, SessionOutcome::Quit);
    assert_eq!(screen.frames.len(), 3);
    assert_eq!(session.engine().generation(), 2);
    assert_eq!(screen.waits, 0);

    let generations: Vec<u64> = screen.frames.iter().map(|(_, meta)| meta.generation).collect();
    assert_eq!(generations, vec![0, 1, 2]);
}

#[test]
fn test_frames_show_committed_generations() {
    let mut session = blinker_session();
    let mut screen = ScriptedScreen::with_events([Event::None, Event::Quit]);

    session.run_with_sleeper(&mut screen, |_| {}).unwrap();

    let (first, _) = &screen.frames[0];
    let (second, _) = &screen.frames[1];
    assert_eq!(first.living_cells(), vec![(2, 1), (2, 2), (2, 3)]);
    assert_eq!(second.living_cells(), vec![(1, 2), (2, 2), (3, 2)]);
}

#[test]
fn test_speed_events_adjust_cadence_and_sleep() {
    let mut session = blinker_session();
    let mut events = vec![Event::IncreaseSpeed; 30];
    events.extend(vec![Event::DecreaseSpeed; 3]);
    events.push(Event::Quit);
    let mut screen = ScriptedScreen::with_events(events);
    let mut sleeps = Vec::new();

    session
        .run_with_sleeper(&mut screen, |d| sleeps.push(d))
        .unwrap();

    assert_eq!(sleeps.len(), 33);
    assert!(sleeps.iter().all(|d| *d >= Duration::from_secs_f64(0.05)));
    assert_eq!(sleeps[29], Duration::from_secs_f64(0.05));
    assert!((session.cadence().seconds() - 0.08).abs() < 1e-9);

    let last_meta = screen.frames.last().unwrap().1;
    assert!((last_meta.cadence_seconds - 0.08).abs() < 1e-9);
}

#[test]
fn test_cadence_never_exceeds_ceiling() {
    let mut session = blinker_session();
    let mut events = vec![Event::DecreaseSpeed; 150];
    events.push(Event::Quit);
    let mut screen = ScriptedScreen::with_events(events);

    session.run_with_sleeper(&mut screen, |_| {}).unwrap();

    assert_eq!(session.cadence().seconds(), 1.0);
    assert!(screen.frames.iter().all(|(_, meta)| meta.cadence_seconds <= 1.0));
}

#[test]
fn test_dying_pattern_runs_until_stable() {
    let mut session = Session::new(
        LifeEngine::new(grid_with(10, 10, &[(4, 4), (4, 5)])),
        Cadence::default(),
    );
    let mut screen = ScriptedScreen::default();

    let outcome = session.run_with_sleeper(&mut screen, |_| {}).unwrap();

    assert_eq!(outcome, SessionOutcome::Stabilized);
    assert_eq!(session.engine().generation(), 1);
    assert_eq!(screen.frames.len(), 2);
    assert!(screen.frames[1].0.is_empty());

    let summary = session.summary(outcome);
    assert_eq!(summary.generation, 1);
    assert_eq!(summary.living_cells, 0);
}

#[test]
fn test_session_from_file_uses_configured_dimensions() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "0 1 0").unwrap();
    writeln!(file, "0 1 0").unwrap();
    writeln!(file, "0 1 0").unwrap();

    let session = Session::from_settings(file.path(), &Settings::default()).unwrap();
    let grid = session.engine().grid();

    assert_eq!((grid.height, grid.width), (25, 80));
    assert_eq!(grid.living_cells(), vec![(0, 1), (1, 1), (2, 1)]);
    assert_eq!(session.cadence().seconds(), 0.15);
}

#[test]
fn test_missing_file_never_builds_a_session() {
    let temp_dir = tempdir().unwrap();
    let result = Session::from_settings(temp_dir.path().join("nope.txt"), &Settings::default());

    assert!(matches!(result, Err(LoadError::Io { .. })));
}
