use std::path::{Path, PathBuf};
use std::time::Duration;

use minitv::error::KioskError;
use minitv::input::ScriptedButtons;
use minitv::{
    Button, ButtonSet, Kiosk, KioskConfig, MediaPlayer, Renderer, Screen, Storage, Surface,
};

#[derive(Default)]
struct FakeCard {
    present: bool,
    mounted: bool,
    fail_mount: bool,
    files: Vec<String>,
    unmounts: usize,
}

impl FakeCard {
    fn with_files(files: &[&str]) -> Self {
        Self {
            present: true,
            files: files.iter().map(|f| f.to_string()).collect(),
            ..Self::default()
        }
    }
}

impl Storage for FakeCard {
    fn is_present(&self) -> bool {
        self.present
    }
    fn mount(&mut self) -> Result<(), KioskError> {
        if self.fail_mount {
            return Err(KioskError::Io(std::io::Error::other("busy")));
        }
        self.mounted = true;
        Ok(())
    }
    fn unmount(&mut self) -> Result<(), KioskError> {
        self.mounted = false;
        self.unmounts += 1;
        Ok(())
    }
    fn list_media(&self) -> Result<Vec<String>, KioskError> {
        Ok(self.files.clone())
    }
    fn media_path(&self, name: &str) -> PathBuf {
        Path::new("/media").join(name)
    }
}

#[derive(Default)]
struct FakePlayer {
    current: Option<PathBuf>,
    finished: bool,
    played: Vec<PathBuf>,
    stops: usize,
}

impl MediaPlayer for FakePlayer {
    fn play(&mut self, path: &Path) -> Result<(), KioskError> {
        self.current = Some(path.to_path_buf());
        self.finished = false;
        self.played.push(path.to_path_buf());
        Ok(())
    }
    fn is_running(&mut self) -> bool {
        self.current.is_some() && !self.finished
    }
    fn is_active(&self) -> bool {
        self.current.is_some()
    }
    fn stop(&mut self) {
        if self.current.take().is_some() {
            self.stops += 1;
        }
    }
}

struct Rig {
    kiosk: Kiosk,
    renderer: Renderer,
    buttons: ScriptedButtons,
    card: FakeCard,
    player: FakePlayer,
}

impl Rig {
    fn new(card: FakeCard) -> Self {
        Self {
            kiosk: Kiosk::new(KioskConfig::default()).unwrap(),
            renderer: Renderer::new(Surface::memory(480, 272)),
            buttons: ScriptedButtons::default(),
            card,
            player: FakePlayer::default(),
        }
    }

    fn step(&mut self) -> Duration {
        self.kiosk
            .step(
                &mut self.renderer,
                &mut self.buttons,
                &mut self.card,
                &mut self.player,
            )
            .unwrap()
    }

    /// Releases everything, then holds `button` for one step.
    fn press(&mut self, button: Button) -> Duration {
        self.buttons.push(ButtonSet::EMPTY);
        self.step();
        self.buttons.push(ButtonSet::of(&[button]));
        self.step()
    }

    fn screen_is_blank(&mut self) -> bool {
        self.renderer
            .surface_mut()
            .snapshot()
            .unwrap()
            .pixels()
            .iter()
            .all(|&p| p == 0)
    }
}

fn media(name: &str) -> PathBuf {
    Path::new("/media").join(name)
}

#[test]
fn waits_for_a_card_then_browses() {
    let mut rig = Rig::new(FakeCard::default());
    assert_eq!(rig.step(), Duration::from_millis(1000));
    assert_eq!(rig.kiosk.screen(), Screen::InsertCard);
    assert!(!rig.kiosk.needs_redraw());
    assert!(!rig.screen_is_blank());

    rig.card = FakeCard::with_files(&["a.mp4", "b.mp4", "c.mp4"]);
    assert_eq!(rig.step(), Duration::from_millis(50));
    assert_eq!(rig.kiosk.screen(), Screen::Browse);
    assert!(rig.kiosk.is_mounted());
    assert_eq!(rig.kiosk.media(), ["a.mp4", "b.mp4", "c.mp4"]);
    assert_eq!(rig.kiosk.selected_media(), Some("a.mp4"));
}

#[test]
fn buttons_move_the_selection_circularly() {
    let mut rig = Rig::new(FakeCard::with_files(&["a.mp4", "b.mp4", "c.mp4"]));
    rig.step();
    rig.press(Button::Prev);
    assert_eq!(rig.kiosk.selected_media(), Some("c.mp4"));
    rig.press(Button::Next);
    assert_eq!(rig.kiosk.selected_media(), Some("a.mp4"));
    rig.press(Button::Next);
    assert_eq!(rig.kiosk.selected_media(), Some("b.mp4"));
}

#[test]
fn held_button_acts_once() {
    let mut rig = Rig::new(FakeCard::with_files(&["a.mp4", "b.mp4", "c.mp4"]));
    rig.step();
    for _ in 0..3 {
        rig.buttons.push(ButtonSet::of(&[Button::Next]));
    }
    for _ in 0..3 {
        rig.step();
    }
    assert_eq!(rig.kiosk.selected_media(), Some("b.mp4"));
}

#[test]
fn play_next_and_stop() {
    let mut rig = Rig::new(FakeCard::with_files(&["a.mp4", "b.mp4"]));
    rig.step();

    assert_eq!(rig.press(Button::Play), Duration::from_millis(2000));
    assert_eq!(rig.kiosk.screen(), Screen::Playing);
    assert_eq!(rig.player.current, Some(media("a.mp4")));
    // the panel is handed to the player cleared, and never redrawn meanwhile
    assert!(rig.screen_is_blank());

    rig.press(Button::Next);
    assert_eq!(rig.player.played, vec![media("a.mp4"), media("b.mp4")]);
    assert_eq!(rig.kiosk.screen(), Screen::Playing);
    assert!(rig.screen_is_blank());

    assert_eq!(rig.press(Button::Stop), Duration::from_millis(50));
    assert_eq!(rig.kiosk.screen(), Screen::Browse);
    assert!(rig.player.current.is_none());
    assert!(!rig.screen_is_blank());
    assert_eq!(rig.kiosk.selected_media(), Some("b.mp4"));
}

#[test]
fn prev_while_playing_wraps_to_the_last_file() {
    let mut rig = Rig::new(FakeCard::with_files(&["a.mp4", "b.mp4", "c.mp4"]));
    rig.step();
    rig.press(Button::Play);
    rig.press(Button::Prev);
    assert_eq!(rig.player.current, Some(media("c.mp4")));
}

#[test]
fn finished_playback_returns_to_the_list() {
    let mut rig = Rig::new(FakeCard::with_files(&["a.mp4"]));
    rig.step();
    rig.press(Button::Play);
    rig.player.finished = true;
    rig.step();
    assert_eq!(rig.kiosk.screen(), Screen::Browse);
    assert_eq!(rig.player.stops, 1);
    assert!(!rig.kiosk.needs_redraw());
}

#[test]
fn removing_the_card_stops_and_unmounts() {
    let mut rig = Rig::new(FakeCard::with_files(&["a.mp4"]));
    rig.step();
    rig.press(Button::Play);

    rig.card.present = false;
    assert_eq!(rig.step(), Duration::from_millis(1000));
    assert_eq!(rig.kiosk.screen(), Screen::InsertCard);
    assert!(!rig.kiosk.is_mounted());
    assert!(rig.player.current.is_none());
    assert_eq!(rig.card.unmounts, 1);
    assert!(rig.kiosk.media().is_empty());
}

#[test]
fn mount_failure_is_retried() {
    let mut card = FakeCard::with_files(&["a.mp4"]);
    card.fail_mount = true;
    let mut rig = Rig::new(card);
    rig.step();
    assert!(!rig.kiosk.is_mounted());
    assert_eq!(rig.kiosk.screen(), Screen::InsertCard);

    rig.card.fail_mount = false;
    rig.step();
    assert!(rig.kiosk.is_mounted());
    assert_eq!(rig.kiosk.screen(), Screen::Browse);
}

#[test]
fn play_on_an_empty_card_does_nothing() {
    let mut rig = Rig::new(FakeCard::with_files(&[]));
    rig.step();
    rig.press(Button::Play);
    assert_eq!(rig.kiosk.screen(), Screen::Browse);
    assert!(rig.player.played.is_empty());
}
