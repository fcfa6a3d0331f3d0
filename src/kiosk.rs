//! Top-level polling state machine of the appliance.
//!
//! Each [`Kiosk::step`] reads the buttons once, reacts to card insertion or
//! removal and to the player finishing, and redraws the UI when something
//! changed. The caller sleeps for the returned duration between steps.

use std::time::Duration;

use log::{debug, info, warn};

use crate::config::KioskConfig;
use crate::error::KioskError;
use crate::input::{Button, ButtonEdges, ButtonSet};
use crate::layout::{Anchors, Spacing};
use crate::renderer::Renderer;
use crate::traits::{ButtonPad, MediaPlayer, Storage};
use crate::ui::Element;
use crate::utils::{BLACK, LIGHT_GRAY, WHITE};

pub const ROOT: &str = "root";
pub const TITLE: &str = "title";
pub const PROMPT: &str = "prompt";
pub const MEDIA_LIST: &str = "media";

/// Cleared to before each screen, and before handing the panel to the player.
const SCREEN_CLEAR: u32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    InsertCard,
    Browse,
    Playing,
}

pub struct Kiosk {
    config: KioskConfig,
    root: Element,
    screen: Screen,
    mounted: bool,
    needs_redraw: bool,
    edges: ButtonEdges,
    media: Vec<String>,
}

impl Kiosk {
    pub fn new(config: KioskConfig) -> Result<Self, KioskError> {
        let mut kiosk = Self {
            config,
            root: root_panel(),
            screen: Screen::InsertCard,
            mounted: false,
            needs_redraw: true,
            edges: ButtonEdges::default(),
            media: Vec::new(),
        };
        kiosk.build_insert_screen()?;
        Ok(kiosk)
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn media(&self) -> &[String] {
        &self.media
    }

    pub fn selected_media(&mut self) -> Option<&str> {
        let index = self.root.list_view_mut(MEDIA_LIST).ok()?.selected_index()?;
        self.media.get(index).map(String::as_str)
    }

    /// One poll iteration. Returns how long to wait before the next one.
    pub fn step(
        &mut self,
        renderer: &mut Renderer,
        buttons: &mut dyn ButtonPad,
        storage: &mut dyn Storage,
        player: &mut dyn MediaPlayer,
    ) -> Result<Duration, KioskError> {
        let held = buttons.poll().unwrap_or_else(|e| {
            warn!("button poll failed: {e}");
            ButtonSet::EMPTY
        });
        let pressed = self.edges.update(held);
        if !pressed.is_empty() {
            debug!("pressed {:?}", pressed.iter().collect::<Vec<_>>());
        }

        if !storage.is_present() {
            if self.mounted {
                info!("card removed");
                player.stop();
                if let Err(e) = storage.unmount() {
                    warn!("{e}");
                }
                self.mounted = false;
                renderer.clear(SCREEN_CLEAR)?;
                self.build_insert_screen()?;
            }
        } else if !self.mounted {
            match storage.mount() {
                Ok(()) => {
                    self.mounted = true;
                    let media = storage.list_media().unwrap_or_else(|e| {
                        warn!("cannot list media: {e}");
                        Vec::new()
                    });
                    renderer.clear(SCREEN_CLEAR)?;
                    self.build_browse_screen(media)?;
                }
                Err(e) => warn!("{e}"),
            }
        } else if self.screen == Screen::Playing {
            self.step_playing(renderer, pressed, storage, player)?;
        } else {
            self.step_browse(renderer, pressed, storage, player)?;
        }

        if self.screen == Screen::Playing {
            return Ok(Duration::from_millis(self.config.poll.playing_ms));
        }
        if self.needs_redraw {
            self.redraw(renderer)?;
        }
        let wait = if self.mounted {
            self.config.poll.browse_ms
        } else {
            self.config.poll.no_card_ms
        };
        Ok(Duration::from_millis(wait))
    }

    /// Lays out and paints the whole tree, then presents it.
    pub fn redraw(&mut self, renderer: &mut Renderer) -> Result<(), KioskError> {
        let area = renderer.surface().rect();
        self.root
            .render(renderer, area.x, area.y, area.width, area.height)?;
        renderer.present()?;
        self.needs_redraw = false;
        Ok(())
    }

    fn step_browse(
        &mut self,
        renderer: &mut Renderer,
        pressed: ButtonSet,
        storage: &mut dyn Storage,
        player: &mut dyn MediaPlayer,
    ) -> Result<(), KioskError> {
        if pressed.contains(Button::Play) {
            player.stop();
            self.start_selected(renderer, storage, player)?;
        } else if pressed.contains(Button::Next) {
            self.move_selection(Button::Next)?;
        } else if pressed.contains(Button::Prev) {
            self.move_selection(Button::Prev)?;
        }
        Ok(())
    }

    fn step_playing(
        &mut self,
        renderer: &mut Renderer,
        pressed: ButtonSet,
        storage: &mut dyn Storage,
        player: &mut dyn MediaPlayer,
    ) -> Result<(), KioskError> {
        if !player.is_running() {
            info!("playback finished");
            player.stop();
            return self.back_to_list(renderer);
        }
        for button in [Button::Next, Button::Prev] {
            if pressed.contains(button) {
                player.stop();
                self.move_selection(button)?;
                return self.start_selected(renderer, storage, player);
            }
        }
        if pressed.contains(Button::Stop) {
            player.stop();
            return self.back_to_list(renderer);
        }
        Ok(())
    }

    fn move_selection(&mut self, button: Button) -> Result<(), KioskError> {
        let mut list = match self.root.list_view_mut(MEDIA_LIST) {
            Ok(list) => list,
            Err(_) => return Ok(()),
        };
        match button {
            Button::Next => list.select_next(),
            Button::Prev => list.select_prev(),
            _ => {}
        }
        self.needs_redraw = true;
        Ok(())
    }

    fn start_selected(
        &mut self,
        renderer: &mut Renderer,
        storage: &mut dyn Storage,
        player: &mut dyn MediaPlayer,
    ) -> Result<(), KioskError> {
        let Some(name) = self.selected_media().map(str::to_owned) else {
            return Ok(());
        };
        renderer.clear(SCREEN_CLEAR)?;
        renderer.present()?;
        match player.play(&storage.media_path(&name)) {
            Ok(()) => self.screen = Screen::Playing,
            Err(e) => {
                warn!("{e}");
                self.screen = Screen::Browse;
                self.needs_redraw = true;
            }
        }
        Ok(())
    }

    fn back_to_list(&mut self, renderer: &mut Renderer) -> Result<(), KioskError> {
        renderer.clear(SCREEN_CLEAR)?;
        self.screen = Screen::Browse;
        self.needs_redraw = true;
        Ok(())
    }

    fn build_insert_screen(&mut self) -> Result<(), KioskError> {
        self.root.clear();
        self.media.clear();
        self.root.insert(title_label(&self.config.ui.title))?;
        self.root.insert(prompt_label(&self.config.ui.insert_prompt))?;
        self.screen = Screen::InsertCard;
        self.needs_redraw = true;
        Ok(())
    }

    fn build_browse_screen(&mut self, media: Vec<String>) -> Result<(), KioskError> {
        self.root.clear();
        self.root.insert(title_label(&self.config.ui.browse_title))?;
        if media.is_empty() {
            self.root.insert(prompt_label(&self.config.ui.empty_prompt))?;
        } else {
            let mut list = Element::list_view(MEDIA_LIST);
            list.margin = Spacing::uniform(10);
            list.border = Spacing::uniform(1);
            list.border_color = LIGHT_GRAY;
            list.padding = Spacing::uniform(1);
            list.expand_x = true;
            list.expand_y = true;
            list.transparent = true;
            list.alignment = Anchors::LEFT_TOP;
            {
                let mut view = list.as_list_view()?;
                for (i, name) in media.iter().enumerate() {
                    view.add_item(&format!("item{i}"), name)?;
                }
            }
            self.root.insert(list)?;
        }
        info!("browsing {} files", media.len());
        self.media = media;
        self.screen = Screen::Browse;
        self.needs_redraw = true;
        Ok(())
    }
}

fn root_panel() -> Element {
    let mut root = Element::panel(ROOT);
    root.margin = Spacing::uniform(2);
    root.border = Spacing::uniform(2);
    root.border_color = WHITE;
    root.transparent = true;
    root.expand_x = true;
    root.expand_y = true;
    root
}

fn title_label(text: &str) -> Element {
    let mut title = Element::label(TITLE, text);
    title.border = Spacing::new(0, 1);
    title.padding = Spacing::uniform(2);
    title.border_color = WHITE;
    title.fill_color = BLACK;
    title.expand_x = true;
    title.alignment = Anchors::CENTER_TOP;
    if let Ok(label) = title.as_label_mut() {
        label.font_color = WHITE;
    }
    title
}

fn prompt_label(text: &str) -> Element {
    let mut prompt = Element::label(PROMPT, text);
    prompt.expand_x = true;
    prompt.expand_y = true;
    prompt.transparent = true;
    prompt.alignment = Anchors::CENTER;
    if let Ok(label) = prompt.as_label_mut() {
        label.font_color = WHITE;
    }
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_insert_screen() {
        let kiosk = Kiosk::new(KioskConfig::default()).unwrap();
        assert_eq!(kiosk.screen(), Screen::InsertCard);
        assert!(kiosk.needs_redraw());
        let names: Vec<&str> = kiosk.root().children().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec![TITLE, PROMPT]);
        assert_eq!(
            kiosk.root().label_ref(PROMPT).unwrap().caption_str(),
            Some("Please insert an SD card. It can be removed at any time.")
        );
    }

    #[test]
    fn browse_screen_lists_media_in_order() {
        let mut kiosk = Kiosk::new(KioskConfig::default()).unwrap();
        kiosk
            .build_browse_screen(vec!["a.mp4".into(), "b.mp4".into()])
            .unwrap();
        assert_eq!(kiosk.screen(), Screen::Browse);
        let list = kiosk.root.list_view_mut(MEDIA_LIST).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.selected_index(), Some(0));
        assert_eq!(kiosk.selected_media(), Some("a.mp4"));
    }

    #[test]
    fn empty_card_shows_prompt() {
        let mut kiosk = Kiosk::new(KioskConfig::default()).unwrap();
        kiosk.build_browse_screen(Vec::new()).unwrap();
        assert!(kiosk.root().get(MEDIA_LIST).is_none());
        assert_eq!(
            kiosk.root().label_ref(PROMPT).unwrap().caption_str(),
            Some("No media files on this card.")
        );
        assert_eq!(kiosk.selected_media(), None);
    }

    #[test]
    fn insert_screen_rebuild_replaces_the_browse_tree() {
        let mut kiosk = Kiosk::new(KioskConfig::default()).unwrap();
        kiosk.build_browse_screen(vec!["a.mp4".into()]).unwrap();
        kiosk.build_insert_screen().unwrap();
        assert_eq!(kiosk.screen(), Screen::InsertCard);
        assert!(kiosk.media().is_empty());
        assert!(kiosk.root().get(MEDIA_LIST).is_none());
        assert_eq!(kiosk.root().len(), 2);
    }
}
