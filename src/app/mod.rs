// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting a single player widget.
//!
//! The host page holds a `#stage` region with some host content. The widget is
//! mounted into whatever node the configured selector names and drives a
//! [`SimulatedMedia`] clock, advanced by a periodic tick while playing.

mod message;
mod subscription;

pub use message::{Flags, Message};

use crate::application::port::MediaPlayback;
use crate::config::{self, WidgetConfig};
use crate::error::InitError;
use crate::host::HostPage;
use crate::i18n::fluent::I18n;
use crate::infrastructure::SimulatedMedia;
use crate::widget::{design_tokens::spacing, PlayerWidget};
use iced::widget::{container, text};
use iced::{window, Element, Length, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 520;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 320;

/// Selector used when neither the CLI nor the config names a host node.
pub const DEFAULT_HOST_SELECTOR: &str = "#stage";
/// Length of the simulated media when none is given.
pub const DEFAULT_DURATION_SECS: f64 = 60.0;

/// Root state of the demo.
pub struct App {
    i18n: I18n,
    page: HostPage,
    player: PlayerWidget<SimulatedMedia>,
    init_error: Option<InitError>,
    last_tick: Option<Instant>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("initialized", &self.player.is_initialized())
            .field("init_error", &self.init_error)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a `Fn` boot function, flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Merges the configuration file with the CLI overrides.
fn resolve_config(flags: &Flags) -> WidgetConfig {
    let loaded = match &flags.config_path {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    };
    let mut config = loaded.unwrap_or_else(|err| {
        log::warn!("Falling back to default configuration: {err}");
        WidgetConfig::default()
    });

    if let Some(url) = &flags.media_url {
        config.media_url = Some(url.clone());
    }
    if let Some(selector) = &flags.host_selector {
        config.host_selector = Some(selector.clone());
    }
    if config.host_selector.is_none() {
        config.host_selector = Some(DEFAULT_HOST_SELECTOR.to_string());
    }
    config
}

/// The page the widget is mounted into.
fn demo_page() -> HostPage {
    let mut page = HostPage::new();
    let body = page.body();
    page.append_text(body, "iced_vplayer demo");
    let stage = page.add_node("main", Some("stage"), &["player-host"]);
    page.append_text(stage, "Host content below the player");
    page
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let app = Self::from_flags(&flags);
        (app, Task::none())
    }

    /// Builds the page, the media and the widget, then mounts it.
    pub fn from_flags(flags: &Flags) -> Self {
        let config = resolve_config(flags);
        let duration = flags.duration_secs.unwrap_or(DEFAULT_DURATION_SECS);
        let media = match config.media_url() {
            Some(url) => SimulatedMedia::new(url, duration),
            None => SimulatedMedia::unloaded(),
        };

        let mut page = demo_page();
        let mut player = PlayerWidget::new(config, media);
        let init_error = player.init(&mut page).err();

        Self {
            i18n: I18n::new(flags.lang.clone()),
            page,
            player,
            init_error,
            last_tick: None,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let media = self.player.media();
        subscription::create_tick_subscription(self.player.is_initialized() && !media.is_paused())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Player(message) => self.player.update(message),
            Message::Tick(now) => {
                if let Some(previous) = self.last_tick.replace(now) {
                    self.player
                        .media_mut()
                        .advance(now.saturating_duration_since(previous));
                }
            }
        }
        self.player.pump_notifications();

        // Paused by the user or by reaching the end: the clock restarts on play.
        if self.player.media().is_paused() {
            self.last_tick = None;
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        match &self.init_error {
            Some(err) => container(text(self.i18n.tr(err.i18n_key())))
                .center(Length::Fill)
                .padding(spacing::SM)
                .into(),
            None => self.player.view(&self.i18n).map(Message::Player),
        }
    }

    pub fn player(&self) -> &PlayerWidget<SimulatedMedia> {
        &self.player
    }

    pub fn page(&self) -> &HostPage {
        &self.page
    }

    pub fn init_error(&self) -> Option<&InitError> {
        self.init_error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::Child;
    use crate::widget::{Pointer, Target, UiEvent};
    use std::time::Duration;

    fn flags(url: Option<&str>, host: Option<&str>) -> Flags {
        Flags {
            lang: Some("en-US".to_string()),
            config_path: Some("/nonexistent/iced_vplayer/player.toml".into()),
            media_url: url.map(str::to_string),
            host_selector: host.map(str::to_string),
            duration_secs: Some(10.0),
        }
    }

    #[test]
    fn mounts_into_stage_by_default() {
        let app = App::from_flags(&flags(Some("video/mov_bbb.mp4"), None));
        assert!(app.init_error().is_none());

        let stage = app.page().query("#stage").expect("stage exists");
        assert!(matches!(app.page().children(stage)[0], Child::Surface(_)));
        assert_eq!(app.title(), "Video player");
    }

    #[test]
    fn missing_url_reports_init_error() {
        let app = App::from_flags(&flags(None, None));
        assert_eq!(app.init_error(), Some(&InitError::MissingMediaUrl));
        assert!(!app.player().is_initialized());
    }

    #[test]
    fn unknown_host_reports_init_error() {
        let app = App::from_flags(&flags(Some("a.mp4"), Some("#nowhere")));
        assert_eq!(
            app.init_error(),
            Some(&InitError::HostNotFound("#nowhere".to_string()))
        );
    }

    #[test]
    fn ticks_advance_media_and_progress() {
        let mut app = App::from_flags(&flags(Some("a.mp4"), None));
        let _ = app.update(Message::Player(crate::widget::Message::Interaction {
            target: Target::Toggle,
            event: UiEvent::Activate(Pointer::default()),
        }));

        let start = Instant::now();
        let _ = app.update(Message::Tick(start));
        let _ = app.update(Message::Tick(start + Duration::from_secs(5)));

        let fill = app
            .player()
            .surface()
            .expect("mounted")
            .progress
            .fill
            .value();
        assert!((fill - 50.0).abs() < 0.01);
    }

    #[test]
    fn replay_after_end_starts_from_the_beginning() {
        let mut app = App::from_flags(&flags(Some("a.mp4"), None));
        let toggle = || {
            Message::Player(crate::widget::Message::Interaction {
                target: Target::Toggle,
                event: UiEvent::Activate(Pointer::default()),
            })
        };

        let start = Instant::now();
        let _ = app.update(toggle());
        let _ = app.update(Message::Tick(start));
        let _ = app.update(Message::Tick(start + Duration::from_secs(11)));
        assert!(app.player().media().is_paused());

        let _ = app.update(toggle());
        let _ = app.update(Message::Tick(start + Duration::from_secs(41)));
        assert!(!app.player().media().is_paused());
        assert!(app.player().media().current_time() < 0.01);

        let _ = app.update(Message::Tick(start + Duration::from_secs(43)));
        assert!((app.player().media().current_time() - 2.0).abs() < 0.01);
    }

    #[test]
    fn view_renders_error_and_player() {
        let app = App::from_flags(&flags(None, None));
        let _element = app.view();
        let app = App::from_flags(&flags(Some("a.mp4"), None));
        let _element = app.view();
    }
}
