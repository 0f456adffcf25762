// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for widget event dispatch.
//!
//! Measures the performance of:
//! - Mounting a widget into a host page
//! - Dispatching a scrub drag (listener lookup + seek)
//! - Pumping time notifications into progress updates

use criterion::{criterion_group, criterion_main, Criterion};
use iced_vplayer::application::port::MediaPlayback;
use iced_vplayer::config::WidgetConfig;
use iced_vplayer::host::HostPage;
use iced_vplayer::infrastructure::SimulatedMedia;
use iced_vplayer::widget::{PlayerWidget, Pointer, Target, UiEvent};
use std::hint::black_box;
use std::time::Duration;

fn config() -> WidgetConfig {
    WidgetConfig {
        media_url: Some("video/mov_bbb.mp4".to_string()),
        host_selector: Some("body".to_string()),
        ..WidgetConfig::default()
    }
}

fn mounted() -> PlayerWidget<SimulatedMedia> {
    let mut page = HostPage::new();
    let mut player = PlayerWidget::new(config(), SimulatedMedia::new("video/mov_bbb.mp4", 600.0));
    player.init(&mut page).unwrap();
    player
}

fn bench_init(c: &mut Criterion) {
    let mut group = c.benchmark_group("widget_dispatch");

    group.bench_function("init", |b| {
        b.iter(|| {
            let mut page = HostPage::new();
            let mut player =
                PlayerWidget::new(config(), SimulatedMedia::new("video/mov_bbb.mp4", 600.0));
            player.init(&mut page).unwrap();
            black_box(&player);
        });
    });

    group.finish();
}

/// Continuous scrubbing: one drag event per pointer move.
fn bench_scrub_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("widget_dispatch");

    let mut player = mounted();
    player.dispatch(Target::ProgressTrack, UiEvent::PressStart(Pointer::new(0.0, 800.0)));

    group.bench_function("scrub_drag", |b| {
        let mut x = 0.0_f32;
        b.iter(|| {
            x = (x + 7.0) % 800.0;
            player.dispatch(Target::ProgressTrack, UiEvent::Drag(Pointer::new(x, 800.0)));
            player.pump_notifications();
            black_box(player.media());
        });
    });

    group.finish();
}

fn bench_playback_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("widget_dispatch");

    let mut player = mounted();
    player.dispatch(Target::Toggle, UiEvent::Activate(Pointer::default()));

    group.bench_function("playback_tick", |b| {
        b.iter(|| {
            // Restart from 0 once the end pauses the media.
            if player.media().is_paused() {
                player.media_mut().play().unwrap();
            }
            player.media_mut().advance(Duration::from_millis(100));
            player.pump_notifications();
            black_box(player.surface());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_init, bench_scrub_drag, bench_playback_tick);
criterion_main!(benches);
