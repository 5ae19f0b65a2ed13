//! Integration tests for the tierbar crate.
//!
//! These tests drive several bars at once through the shared spinner and
//! frame pool, and check the public API from builder to rendered line.

use std::sync::Arc;
use std::thread;
use tierbar::{FramePool, ProgressBarBuilder, ProgressDisplay, Renderer, Spinner, Tier};

mod common;
use common::helpers::*;

#[test]
fn test_end_to_end_render_from_builder() {
    let bar = ProgressBarBuilder::new(TEST_TOTAL)
        .additional(TEST_ADDITIONAL)
        .build()
        .unwrap();
    bar.set_current(500);

    let mut out = Vec::new();
    bar.render_to(&create_fixed_renderer(130), &mut out).unwrap();
    let line = String::from_utf8(out).unwrap();

    assert!(line.starts_with("[===================>                    ]  --/s  500(50.00%) of 1000"));
    assert!(line.contains(" [downloading chunk 42]  Elapsed: 0s  Left: calculating"));
}

#[test]
fn test_concurrent_bars_share_spinner_and_pool() {
    let renderer = Renderer::new()
        .with_fixed_width(120)
        .with_spinner(Arc::new(Spinner::new()));

    thread::scope(|s| {
        for i in 1..=4u64 {
            let renderer = renderer.clone();
            s.spawn(move || {
                let bar = ProgressBarBuilder::new(100 * i)
                    .additional(format!("worker {i}"))
                    .build()
                    .unwrap();
                for step in 0..50 {
                    bar.add(2 * i);
                    let mut out = Vec::new();
                    bar.render_to(&renderer, &mut out).unwrap();
                    let line = String::from_utf8(out).unwrap();
                    assert!(line.starts_with('['), "step {step}: {line}");
                    assert!(line.contains(&format!("[worker {i}]")));
                }
                assert!(bar.is_finished());
            });
        }
    });
}

#[test]
fn test_pooled_frames_do_not_leak_between_bars() {
    let pool = FramePool::new();
    let first = ProgressBarBuilder::new(10).additional("alpha").build().unwrap();
    let second = ProgressBarBuilder::new(20).build().unwrap();

    drop(first.frame(&pool));
    let frame = second.frame(&pool);
    assert_eq!(frame.additional, "");
    assert_eq!(frame.total, 20);
}

#[test]
fn test_narrowing_terminal_degrades_tiers() {
    let frame = create_half_frame();
    let tiers: Vec<Tier> = [130, 110, 90, 66, 40]
        .into_iter()
        .map(|width| Tier::select(width, frame.bar_width, &frame.additional))
        .collect();
    assert_eq!(
        tiers,
        vec![Tier::Full, Tier::Standard, Tier::Lite, Tier::Mini, Tier::Fallback]
    );

    let renderer = create_fixed_renderer(40);
    assert_eq!(
        render_to_string(&renderer, &frame),
        format!("[{}]", expected_bar(17, 35))
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_display_with_background_worker() {
    init_tracing();
    let bar = create_test_progress_bar(20);
    let sink = SharedBuffer::default();
    let display = ProgressDisplay::start(bar.clone(), create_fixed_renderer(70), sink.clone());

    let worker = {
        let bar = bar.clone();
        tokio::spawn(async move {
            for _ in 0..20 {
                bar.add(1);
                tokio::time::sleep(std::time::Duration::from_millis(2)).await;
            }
        })
    };
    worker.await.unwrap();
    display.join().await.unwrap();

    // Lite tier completion wording.
    let output = sink.contents();
    assert!(last_line(&output).contains("20/20 E: 0s"));
}
