// SPDX-License-Identifier: MPL-2.0
//! The player widget.
//!
//! A [`PlayerWidget`] owns its configuration, the media capability it drives
//! and, once initialized, the surface it rendered into the host page. There
//! is no global instance: the host creates as many widgets as it needs and
//! routes messages to each of them.
//!
//! # Lifecycle
//!
//! 1. [`PlayerWidget::new`] stores the configuration, nothing else happens.
//! 2. [`PlayerWidget::init`] validates it, renders the surface as the first
//!    child of the host node and installs the listeners.
//! 3. Interactions arrive either as iced [`Message`]s through
//!    [`PlayerWidget::update`] or as toolkit-neutral events through
//!    [`PlayerWidget::dispatch`]. Media notifications are pulled with
//!    [`PlayerWidget::pump_notifications`].
//!
//! # Example
//!
//! ```
//! use iced_vplayer::config::WidgetConfig;
//! use iced_vplayer::host::HostPage;
//! use iced_vplayer::infrastructure::SimulatedMedia;
//! use iced_vplayer::widget::{PlayerWidget, Target, UiEvent, Pointer};
//!
//! let config = WidgetConfig {
//!     media_url: Some("video/mov_bbb.mp4".into()),
//!     host_selector: Some("body".into()),
//!     ..WidgetConfig::default()
//! };
//! let mut page = HostPage::new();
//! let mut player = PlayerWidget::new(config, SimulatedMedia::new("video/mov_bbb.mp4", 10.0));
//! player.init(&mut page).unwrap();
//!
//! player.dispatch(Target::Toggle, UiEvent::Activate(Pointer::default()));
//! assert_eq!(player.surface().unwrap().toggle.glyph.symbol(), "❚❚");
//! ```

pub mod design_tokens;
pub mod events;
pub mod template;
mod view;

use std::collections::HashMap;

use crate::application::port::{MediaNotification, MediaPlayback};
use crate::config::{WidgetConfig, EDGE_ZONE_PX};
use crate::diagnostics::{DiagnosticsLog, UserAction};
use crate::domain::video::{Glyph, ProgressPercent, ScrubRatio, SeekDirection, SeekStep};
use crate::error::InitError;
use crate::host::{HostPage, NodeId};
use crate::i18n::fluent::I18n;
use events::{Handler, ListenerTable};
use iced::Element;

pub use events::{EventKind, Pointer, Target, UiEvent, WidgetEvent};
pub use template::Surface;

/// Messages produced by the iced rendering of the widget.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// A toolkit-neutral interaction, dispatched as-is.
    Interaction { target: Target, event: UiEvent },
    /// Cursor moved over a target.
    PointerMoved {
        target: Target,
        offset_x: f32,
        width: f32,
    },
    /// Left button pressed over a target.
    PointerPressed(Target),
    /// Left button released over a target.
    PointerReleased(Target),
    /// Double click over a target.
    DoubleClicked(Target),
    /// Range control released: commits its current value.
    ControlReleased(Target),
}

#[derive(Debug, Clone)]
struct Mount {
    host: NodeId,
    surface: Surface,
}

/// Last known cursor position per target and the target holding the press.
#[derive(Debug, Clone, Default)]
struct PointerTracker {
    last: HashMap<Target, Pointer>,
    pressed: Option<Target>,
}

impl PointerTracker {
    fn position(&self, target: Target) -> Pointer {
        self.last.get(&target).copied().unwrap_or_default()
    }
}

/// Video player bound to a media capability.
#[derive(Debug)]
pub struct PlayerWidget<M: MediaPlayback> {
    config: WidgetConfig,
    media: M,
    mount: Option<Mount>,
    listeners: ListenerTable,
    scrubbing: bool,
    pointers: PointerTracker,
    diagnostics: DiagnosticsLog,
}

impl<M: MediaPlayback> PlayerWidget<M> {
    /// Creates an unbound widget. Nothing is validated or rendered yet.
    pub fn new(config: WidgetConfig, media: M) -> Self {
        Self {
            config,
            media,
            mount: None,
            listeners: ListenerTable::default(),
            scrubbing: false,
            pointers: PointerTracker::default(),
            diagnostics: DiagnosticsLog::default(),
        }
    }

    /// Renders the player into the host node and wires its controls.
    ///
    /// On failure the page is left untouched and nothing is bound.
    ///
    /// # Errors
    ///
    /// - [`InitError::MissingMediaUrl`] / [`InitError::MissingHostSelector`]
    ///   when a required option is missing or blank
    /// - [`InitError::HostNotFound`] when no node matches the selector
    /// - [`InitError::AlreadyInitialized`] on a second call
    pub fn init(&mut self, page: &mut HostPage) -> Result<(), InitError> {
        if self.mount.is_some() {
            return Err(self.fail(InitError::AlreadyInitialized));
        }
        let (source, selector) = match self.config.validate() {
            Ok((source, selector)) => (source.to_string(), selector.to_string()),
            Err(err) => return Err(self.fail(err)),
        };

        let Some(host) = page.query(&selector) else {
            return Err(self.fail(InitError::HostNotFound(selector)));
        };
        let Some(surface_id) = page.insert_first(host) else {
            return Err(self.fail(InitError::HostNotFound(selector)));
        };

        let surface = template::render(surface_id, &source, &self.config, self.media.volume());
        self.mount = Some(Mount { host, surface });
        self.listeners = ListenerTable::player();

        log::info!("Mounted {surface_id} into '{selector}' ({source})");
        self.diagnostics
            .log_action(UserAction::Mount { host: selector });
        Ok(())
    }

    fn fail(&mut self, err: InitError) -> InitError {
        log::error!("Player init failed: {err}");
        self.diagnostics.log_error(err.to_string());
        err
    }

    /// Delivers an event to `target`, running every listener attached to it.
    ///
    /// Does nothing before a successful [`init`](Self::init).
    pub fn dispatch(&mut self, target: Target, event: impl Into<WidgetEvent>) {
        let event = event.into();
        let Some(mount) = self.mount.as_mut() else {
            log::trace!("Ignoring {event:?} on {target:?}: widget not initialized");
            return;
        };

        // Range controls follow the pointer whether or not anything listens.
        if let (Some(range), Some(value)) = (mount.surface.range_mut(target), event.value()) {
            range.value = value;
        }

        for handler in self.listeners.handlers_for(target, event.kind()) {
            self.run(handler, target, &event);
        }
    }

    /// Delivers a media notification to the video surface.
    pub fn notify(&mut self, notification: MediaNotification) {
        self.dispatch(Target::Video, notification);
    }

    /// Drains the media capability's pending notifications and delivers them.
    pub fn pump_notifications(&mut self) {
        for notification in self.media.take_notifications() {
            self.notify(notification);
        }
    }

    /// Applies a message produced by [`view`](Self::view).
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Interaction { target, event } => self.dispatch(target, event),
            Message::PointerMoved {
                target,
                offset_x,
                width,
            } => {
                let pointer = Pointer::new(offset_x, width);
                self.pointers.last.insert(target, pointer);
                self.dispatch(target, UiEvent::Drag(pointer));
            }
            Message::PointerPressed(target) => {
                let pointer = self.pointers.position(target);
                self.pointers.pressed = Some(target);
                self.dispatch(target, UiEvent::PressStart(pointer));
            }
            Message::PointerReleased(target) => {
                let pointer = self.pointers.position(target);
                self.dispatch(target, UiEvent::PressEnd(pointer));
                if self.pointers.pressed.take() == Some(target) {
                    self.dispatch(target, UiEvent::Activate(pointer));
                }
            }
            Message::DoubleClicked(target) => {
                let pointer = self.pointers.position(target);
                self.dispatch(target, UiEvent::DoubleActivate(pointer));
            }
            Message::ControlReleased(target) => {
                let value = self
                    .mount
                    .as_mut()
                    .and_then(|mount| mount.surface.range_mut(target))
                    .map(|range| range.value);
                if let Some(value) = value {
                    self.dispatch(target, UiEvent::ValueCommitted(value));
                }
            }
        }
    }

    /// Renders the bound surface, or an empty placeholder before `init`.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        match &self.mount {
            Some(mount) => view::surface(&mount.surface, i18n),
            None => view::placeholder(i18n),
        }
    }

    // -------------------------------------------------------------------------
    // Handlers
    // -------------------------------------------------------------------------

    fn run(&mut self, handler: Handler, target: Target, event: &WidgetEvent) {
        match handler {
            Handler::TogglePlayback => self.toggle_playback(),
            Handler::UpdateProgress => self.update_progress(),
            Handler::ResetProgress => self.reset_progress(),
            Handler::Scrub => {
                if let Some(pointer) = event.pointer() {
                    self.scrub(pointer);
                }
            }
            Handler::ScrubWhilePressed => {
                if let (true, Some(pointer)) = (self.scrubbing, event.pointer()) {
                    self.scrub(pointer);
                }
            }
            Handler::BeginScrub => self.scrubbing = true,
            Handler::EndScrub => self.scrubbing = false,
            Handler::SetVolume => {
                if let Some(volume) = event.value() {
                    self.media.set_volume(volume);
                    self.diagnostics
                        .log_action(UserAction::SetVolume { volume });
                }
            }
            Handler::SetRate => {
                if let Some(rate) = event.value() {
                    self.media.set_playback_rate(rate);
                    self.diagnostics
                        .log_action(UserAction::SetPlaybackRate { rate });
                }
            }
            Handler::StepSeek => self.step_seek(target, event.pointer()),
        }
    }

    fn toggle_playback(&mut self) {
        let Some(mount) = self.mount.as_mut() else {
            return;
        };
        let was_paused = self.media.is_paused();
        let previous = mount.surface.toggle.glyph;
        mount.surface.toggle.glyph = Glyph::after_toggle(was_paused);

        let result = if was_paused {
            self.media.play()
        } else {
            self.media.pause()
        };

        match result {
            Ok(()) => {
                log::debug!("Playback {}", if was_paused { "started" } else { "paused" });
                self.diagnostics
                    .log_action(UserAction::TogglePlayback { play: was_paused });
            }
            Err(err) => {
                mount.surface.toggle.glyph = previous;
                log::warn!("Toggle playback failed: {err}");
                self.diagnostics.log_warning(err.to_string());
            }
        }
    }

    fn update_progress(&mut self) {
        if let Some(mount) = self.mount.as_mut() {
            mount.surface.progress.fill =
                ProgressPercent::from_position(self.media.current_time(), self.media.duration());
        }
    }

    fn reset_progress(&mut self) {
        if let Some(mount) = self.mount.as_mut() {
            mount.surface.progress.fill = ProgressPercent::ZERO;
        }
        self.diagnostics.log_action(UserAction::PlaybackEnded);
    }

    fn scrub(&mut self, pointer: Pointer) {
        let position = ScrubRatio::from_pointer(pointer.offset_x, pointer.width)
            .and_then(|ratio| ratio.position_in(self.media.duration()));
        let Some(position_secs) = position else {
            log::debug!("Scrub ignored: track width {} or duration unknown", pointer.width);
            return;
        };
        self.media.set_current_time(position_secs);
        self.diagnostics
            .log_action(UserAction::SeekVideo { position_secs });
    }

    fn step_seek(&mut self, target: Target, pointer: Option<Pointer>) {
        let direction = match target {
            Target::StepBackward => Some(SeekDirection::Backward),
            Target::StepForward => Some(SeekDirection::Forward),
            Target::Video => pointer
                .and_then(|p| SeekDirection::from_edge(p.offset_x, p.width, EDGE_ZONE_PX)),
            _ => None,
        };
        let Some(direction) = direction else {
            return;
        };

        let current = self.media.current_time();
        let position =
            SeekStep::new(self.config.seek_step).target(current, direction, self.media.duration());
        self.media.set_current_time(position);
        self.diagnostics.log_action(UserAction::StepSeek {
            offset_secs: position - current,
        });
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.mount.is_some()
    }

    /// The bound surface, once initialized.
    #[must_use]
    pub fn surface(&self) -> Option<&Surface> {
        self.mount.as_ref().map(|mount| &mount.surface)
    }

    /// The host node the surface was mounted into.
    #[must_use]
    pub fn host(&self) -> Option<NodeId> {
        self.mount.as_ref().map(|mount| mount.host)
    }

    #[must_use]
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    /// True between a press and a release on the progress track.
    #[must_use]
    pub fn is_scrubbing(&self) -> bool {
        self.scrubbing
    }

    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsLog {
        &self.diagnostics
    }

    /// Number of listeners currently attached.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::SimulatedMedia;
    use crate::test_utils::{assert_abs_diff_eq, sample_config as config, SAMPLE_URL};

    fn mounted(duration: f64) -> (HostPage, PlayerWidget<SimulatedMedia>) {
        let mut page = HostPage::new();
        let mut player =
            PlayerWidget::new(config(), SimulatedMedia::new(SAMPLE_URL, duration));
        player.init(&mut page).expect("init succeeds");
        (page, player)
    }

    #[test]
    fn new_does_not_bind() {
        let player = PlayerWidget::new(config(), SimulatedMedia::new("a.mp4", 10.0));
        assert!(!player.is_initialized());
        assert!(player.surface().is_none());
        assert_eq!(player.listener_count(), 0);
    }

    #[test]
    fn init_binds_and_wires() {
        let (page, player) = mounted(10.0);
        assert!(player.is_initialized());
        assert_eq!(player.host(), Some(page.body()));
        assert_eq!(player.listener_count(), 13);
    }

    #[test]
    fn pointer_release_on_pressed_target_activates() {
        let (_page, mut player) = mounted(100.0);
        player.update(Message::PointerMoved {
            target: Target::ProgressTrack,
            offset_x: 25.0,
            width: 100.0,
        });
        assert_abs_diff_eq!(player.media().current_time(), 0.0);

        player.update(Message::PointerPressed(Target::ProgressTrack));
        assert!(player.is_scrubbing());
        player.update(Message::PointerReleased(Target::ProgressTrack));
        assert!(!player.is_scrubbing());
        assert_abs_diff_eq!(player.media().current_time(), 25.0);
    }

    #[test]
    fn pointer_release_elsewhere_does_not_activate() {
        let (_page, mut player) = mounted(100.0);
        player.update(Message::PointerPressed(Target::Video));
        player.update(Message::PointerReleased(Target::ProgressTrack));
        assert!(player.media().is_paused());
    }

    #[test]
    fn control_release_commits_rate() {
        let (_page, mut player) = mounted(100.0);
        player.update(Message::Interaction {
            target: Target::Rate,
            event: UiEvent::ValueLive(2.5),
        });
        assert_abs_diff_eq!(player.media().playback_rate(), 1.0);

        player.update(Message::ControlReleased(Target::Rate));
        assert_abs_diff_eq!(player.media().playback_rate(), 2.5);
    }

    #[test]
    fn control_release_without_range_is_ignored() {
        let (_page, mut player) = mounted(100.0);
        player.update(Message::ControlReleased(Target::Toggle));
        assert!(player.media().is_paused());
    }

    #[test]
    fn double_click_uses_last_pointer_position() {
        let (_page, mut player) = mounted(100.0);
        player.media_mut().set_current_time(50.0);
        player.update(Message::PointerMoved {
            target: Target::Video,
            offset_x: 635.0,
            width: 640.0,
        });
        player.update(Message::DoubleClicked(Target::Video));
        assert_abs_diff_eq!(player.media().current_time(), 52.0);
    }

    #[test]
    fn view_renders_before_and_after_init() {
        let i18n = I18n::default();
        let player = PlayerWidget::new(config(), SimulatedMedia::new("a.mp4", 10.0));
        let _element = player.view(&i18n);

        let (_page, player) = mounted(10.0);
        let _element = player.view(&i18n);
    }
}
