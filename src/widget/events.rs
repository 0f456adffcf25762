// SPDX-License-Identifier: MPL-2.0
//! Interaction events and the listener table that wires them to handlers.
//!
//! Events are toolkit-neutral: a press/drag/release on a target, a click
//! (`Activate`), a double click, or a value change on a range control that
//! is either still moving (`ValueLive`) or committed (`ValueCommitted`).
//! Media notifications travel through the same table, addressed to the video
//! surface.

use crate::application::port::MediaNotification;

/// Interactive element of the rendered surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Video,
    Toggle,
    ProgressTrack,
    Volume,
    Rate,
    StepBackward,
    StepForward,
}

/// Pointer position relative to the left edge of a target.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointer {
    /// Horizontal offset from the target's left edge, in logical pixels.
    pub offset_x: f32,
    /// Width of the target, in logical pixels.
    pub width: f32,
}

impl Pointer {
    #[must_use]
    pub fn new(offset_x: f32, width: f32) -> Self {
        Self { offset_x, width }
    }
}

/// User interaction on a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiEvent {
    /// Press and release on the same target (a click).
    Activate(Pointer),
    /// Two quick activations.
    DoubleActivate(Pointer),
    /// Pointer button went down.
    PressStart(Pointer),
    /// Pointer moved over the target, pressed or not.
    Drag(Pointer),
    /// Pointer button went up.
    PressEnd(Pointer),
    /// Range control value changing while the user is still dragging.
    ValueLive(f64),
    /// Range control value settled (pointer released).
    ValueCommitted(f64),
}

/// Anything the widget can react to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WidgetEvent {
    Ui(UiEvent),
    Media(MediaNotification),
}

impl From<UiEvent> for WidgetEvent {
    fn from(event: UiEvent) -> Self {
        WidgetEvent::Ui(event)
    }
}

impl From<MediaNotification> for WidgetEvent {
    fn from(notification: MediaNotification) -> Self {
        WidgetEvent::Media(notification)
    }
}

/// Event discriminant used as listener key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Activate,
    DoubleActivate,
    PressStart,
    Drag,
    PressEnd,
    ValueLive,
    ValueCommitted,
    TimeAdvanced,
    Ended,
}

impl WidgetEvent {
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            WidgetEvent::Ui(UiEvent::Activate(_)) => EventKind::Activate,
            WidgetEvent::Ui(UiEvent::DoubleActivate(_)) => EventKind::DoubleActivate,
            WidgetEvent::Ui(UiEvent::PressStart(_)) => EventKind::PressStart,
            WidgetEvent::Ui(UiEvent::Drag(_)) => EventKind::Drag,
            WidgetEvent::Ui(UiEvent::PressEnd(_)) => EventKind::PressEnd,
            WidgetEvent::Ui(UiEvent::ValueLive(_)) => EventKind::ValueLive,
            WidgetEvent::Ui(UiEvent::ValueCommitted(_)) => EventKind::ValueCommitted,
            WidgetEvent::Media(MediaNotification::TimeAdvanced) => EventKind::TimeAdvanced,
            WidgetEvent::Media(MediaNotification::Ended) => EventKind::Ended,
        }
    }

    /// Pointer carried by the event, if any.
    #[must_use]
    pub fn pointer(&self) -> Option<Pointer> {
        match self {
            WidgetEvent::Ui(
                UiEvent::Activate(p)
                | UiEvent::DoubleActivate(p)
                | UiEvent::PressStart(p)
                | UiEvent::Drag(p)
                | UiEvent::PressEnd(p),
            ) => Some(*p),
            _ => None,
        }
    }

    /// Value carried by a range control event, if any.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        match self {
            WidgetEvent::Ui(UiEvent::ValueLive(v) | UiEvent::ValueCommitted(v)) => Some(*v),
            _ => None,
        }
    }
}

/// Playback-state handler run by a listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Handler {
    TogglePlayback,
    UpdateProgress,
    ResetProgress,
    Scrub,
    ScrubWhilePressed,
    BeginScrub,
    EndScrub,
    SetVolume,
    SetRate,
    StepSeek,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Listener {
    pub target: Target,
    pub kind: EventKind,
    pub handler: Handler,
}

/// Listeners attached to the bound surface.
#[derive(Debug, Clone, Default)]
pub(crate) struct ListenerTable {
    listeners: Vec<Listener>,
}

impl ListenerTable {
    /// Attaches a listener. Duplicates are kept and run once each.
    pub fn add(&mut self, target: Target, kind: EventKind, handler: Handler) {
        self.listeners.push(Listener {
            target,
            kind,
            handler,
        });
    }

    /// Handlers listening for `kind` on `target`, in attachment order.
    pub fn handlers_for(&self, target: Target, kind: EventKind) -> Vec<Handler> {
        self.listeners
            .iter()
            .filter(|l| l.target == target && l.kind == kind)
            .map(|l| l.handler)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// The full wiring of a player surface.
    pub fn player() -> Self {
        use EventKind as K;
        use Handler as H;

        let mut table = Self::default();
        table.add(Target::Video, K::Activate, H::TogglePlayback);
        table.add(Target::Toggle, K::Activate, H::TogglePlayback);
        table.add(Target::Video, K::TimeAdvanced, H::UpdateProgress);
        table.add(Target::Video, K::Ended, H::ResetProgress);
        table.add(Target::ProgressTrack, K::Activate, H::Scrub);
        table.add(Target::ProgressTrack, K::Drag, H::ScrubWhilePressed);
        table.add(Target::ProgressTrack, K::PressStart, H::BeginScrub);
        table.add(Target::ProgressTrack, K::PressEnd, H::EndScrub);
        table.add(Target::Volume, K::ValueLive, H::SetVolume);
        // Rate follows commits only so it does not fluctuate while dragging.
        table.add(Target::Rate, K::ValueCommitted, H::SetRate);
        table.add(Target::StepForward, K::Activate, H::StepSeek);
        table.add(Target::StepBackward, K::Activate, H::StepSeek);
        table.add(Target::Video, K::DoubleActivate, H::StepSeek);
        table
    }
}
