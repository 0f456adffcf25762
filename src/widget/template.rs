// SPDX-License-Identifier: MPL-2.0
//! Rendering of the player surface.
//!
//! [`render`] builds the typed tree of the surface (video, progress track,
//! toggle, range controls, step buttons) and hands it straight to the widget,
//! so binding never depends on looking elements up by name. The stable hook
//! names are still emitted by [`Surface::to_markup`] for hosts that consume
//! the HTML-shaped markup.

use crate::config::{WidgetConfig, DEFAULT_RATE, RATE_MAX, RATE_MIN, VOLUME_MAX, VOLUME_MIN};
use crate::domain::video::{Glyph, ProgressPercent, SeekStep};
use crate::host::SurfaceId;
use crate::i18n::fluent::I18n;
use crate::widget::events::Target;
use std::fmt::Write as _;

/// Class and id hooks of the rendered markup.
pub mod hooks {
    pub const PLAYER: &str = "player";
    pub const VIDEO: &str = "player_video viewer";
    pub const CONTROLS: &str = "player_controls";
    pub const PROGRESS: &str = "progress";
    pub const PROGRESS_FILLED: &str = "progress_filled";
    pub const TOGGLE: &str = "toggle";
    pub const VOLUME: &str = "volume";
    pub const PLAYBACK_RATE: &str = "playbackRate";
    pub const STEP_BACKWARD: &str = "stepBackward";
    pub const STEP_FORWARD: &str = "stepForward";
}

#[derive(Debug, Clone, PartialEq)]
pub struct VideoSurface {
    pub source: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressTrack {
    pub fill: ProgressPercent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToggleButton {
    pub glyph: Glyph,
}

/// A range control (volume or playback rate).
#[derive(Debug, Clone, PartialEq)]
pub struct RangeInput {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepButton {
    pub id: &'static str,
    /// Seconds skipped per activation.
    pub seconds: f64,
    pub label: String,
}

/// The rendered player, owned by the widget once bound.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    pub id: SurfaceId,
    pub video: VideoSurface,
    pub progress: ProgressTrack,
    pub toggle: ToggleButton,
    pub volume: RangeInput,
    pub rate: RangeInput,
    pub step_backward: StepButton,
    pub step_forward: StepButton,
}

/// Renders the surface for `config`.
///
/// `initial_volume` is the volume of the media at render time, so the control
/// starts where the audio actually is.
#[must_use]
pub fn render(id: SurfaceId, source: &str, config: &WidgetConfig, initial_volume: f64) -> Surface {
    let seek_step = SeekStep::new(config.seek_step);

    Surface {
        id,
        video: VideoSurface {
            source: source.to_string(),
        },
        progress: ProgressTrack {
            fill: ProgressPercent::ZERO,
        },
        toggle: ToggleButton {
            glyph: Glyph::Play,
        },
        volume: RangeInput {
            name: hooks::VOLUME,
            min: VOLUME_MIN,
            max: VOLUME_MAX,
            step: config.volume_step,
            value: initial_volume,
        },
        rate: RangeInput {
            name: hooks::PLAYBACK_RATE,
            min: RATE_MIN,
            max: RATE_MAX,
            step: config.rate_step,
            value: DEFAULT_RATE,
        },
        step_backward: StepButton {
            id: hooks::STEP_BACKWARD,
            seconds: seek_step.value(),
            label: seek_step.backward_label(),
        },
        step_forward: StepButton {
            id: hooks::STEP_FORWARD,
            seconds: seek_step.value(),
            label: seek_step.forward_label(),
        },
    }
}

impl Surface {
    /// Range control bound to `target`, if it is one.
    pub fn range_mut(&mut self, target: Target) -> Option<&mut RangeInput> {
        match target {
            Target::Volume => Some(&mut self.volume),
            Target::Rate => Some(&mut self.rate),
            _ => None,
        }
    }

    /// Serializes the surface to markup with the stable hooks.
    #[must_use]
    pub fn to_markup(&self, i18n: &I18n) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(out, "<div class=\"{}\">", hooks::PLAYER);
        let _ = writeln!(
            out,
            "  <video class=\"{}\" src=\"{}\"></video>",
            hooks::VIDEO,
            escape(&self.video.source)
        );
        let _ = writeln!(out, "  <div class=\"{}\">", hooks::CONTROLS);
        let _ = writeln!(out, "    <div class=\"{}\">", hooks::PROGRESS);
        let _ = writeln!(
            out,
            "      <div class=\"{}\" style=\"width: {}\"></div>",
            hooks::PROGRESS_FILLED,
            self.progress.fill
        );
        let _ = writeln!(out, "    </div>");
        let _ = writeln!(
            out,
            "    <button class=\"player-button {}\" title=\"{}\">{}</button>",
            hooks::TOGGLE,
            escape(&i18n.tr("player-toggle-tooltip")),
            self.toggle.glyph.symbol()
        );
        for range in [&self.volume, &self.rate] {
            let _ = writeln!(
                out,
                "    <input type=\"range\" name=\"{}\" min=\"{}\" max=\"{}\" step=\"{}\" value=\"{}\">",
                range.name, range.min, range.max, range.step, range.value
            );
        }
        for button in [&self.step_backward, &self.step_forward] {
            let _ = writeln!(
                out,
                "    <button class=\"player-button seconds\" id=\"{}\">{}</button>",
                button.id,
                escape(&button.label)
            );
        }
        let _ = writeln!(out, "  </div>");
        let _ = write!(out, "</div>");
        out
    }
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::HostPage;
    use crate::test_utils::sample_config as config;

    fn surface_for(config: &WidgetConfig) -> Surface {
        let mut page = HostPage::new();
        let id = page.insert_first(page.body()).expect("body exists");
        let source = config.media_url().expect("config has a media URL");
        render(id, source, config, 0.8)
    }

    #[test]
    fn render_uses_configured_source_and_steps() {
        let surface = surface_for(&config());
        assert_eq!(surface.video.source, "video/mov_bbb.mp4");
        assert_eq!(surface.volume.step, 0.05);
        assert_eq!(surface.rate.step, 0.5);
        assert_eq!(surface.step_backward.label, "<<2s");
        assert_eq!(surface.step_forward.label, "2s>>");
    }

    #[test]
    fn render_starts_paused_with_empty_progress() {
        let surface = surface_for(&config());
        assert_eq!(surface.toggle.glyph, Glyph::Play);
        assert_eq!(surface.progress.fill, ProgressPercent::ZERO);
    }

    #[test]
    fn render_sets_control_ranges() {
        let surface = surface_for(&config());
        assert_eq!((surface.volume.min, surface.volume.max), (0.0, 1.0));
        assert_eq!(surface.volume.value, 0.8);
        assert_eq!((surface.rate.min, surface.rate.max), (0.0, 5.0));
        assert_eq!(surface.rate.value, 1.0);
    }

    #[test]
    fn render_labels_follow_seek_step() {
        let config = WidgetConfig {
            seek_step: 5.0,
            ..config()
        };
        let surface = surface_for(&config);
        assert_eq!(surface.step_backward.label, "<<5s");
        assert_eq!(surface.step_forward.label, "5s>>");
    }

    #[test]
    fn range_mut_only_for_range_targets() {
        let mut surface = surface_for(&config());
        assert!(surface.range_mut(Target::Volume).is_some());
        assert!(surface.range_mut(Target::Rate).is_some());
        assert!(surface.range_mut(Target::Toggle).is_none());
    }

    #[test]
    fn markup_contains_stable_hooks() {
        let i18n = I18n::new(Some("en-US".to_string()));
        let markup = surface_for(&config()).to_markup(&i18n);

        assert!(markup.contains("src=\"video/mov_bbb.mp4\""));
        assert!(markup.contains("class=\"progress\""));
        assert!(markup.contains("class=\"progress_filled\" style=\"width: 0%\""));
        assert!(markup.contains("class=\"player-button toggle\" title=\"Toggle play\">►<"));
        assert!(markup.contains("name=\"volume\" min=\"0\" max=\"1\" step=\"0.05\""));
        assert!(markup.contains("name=\"playbackRate\" min=\"0\" max=\"5\" step=\"0.5\" value=\"1\""));
        assert!(markup.contains("id=\"stepBackward\">&lt;&lt;2s<"));
        assert!(markup.contains("id=\"stepForward\">2s&gt;&gt;<"));
    }

    #[test]
    fn markup_escapes_source() {
        let config = WidgetConfig {
            media_url: Some("a.mp4?x=1&y=\"2\"".to_string()),
            ..config()
        };
        let markup = surface_for(&config).to_markup(&I18n::default());
        assert!(markup.contains("src=\"a.mp4?x=1&amp;y=&quot;2&quot;\""));
    }
}
