use birb_material::{
    ChipBar, ChipBarConfig, ChipBarStyle, ChipItem, Config, Host, InterimSpace, PulseOverlay,
    Rect, ScrollMode, Touch,
};
use birb_material_core::cgmath::{Point2, Vector2};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

fn chips(widths: &[f64]) -> Vec<ChipItem> {
    widths
        .iter()
        .enumerate()
        .map(|(i, &w)| ChipItem::new(format!("chip {}", i), Vector2::new(w, 20.)))
        .collect()
}

fn chip_bar(host: &Host, config: ChipBarConfig, width: f64) -> ChipBar {
    let mut bar = ChipBar::new(config, host.compositor());
    bar.set_frame(Rect::from_xywh(0., 0., width, 44.)).unwrap();
    bar.set_attached(true).unwrap();
    bar
}

#[test]
fn scrolls_selected_chip_into_view() {
    let mut host = Host::new();
    let config = ChipBarConfig {
        interim_space: InterimSpace::Custom(8.),
        ..ChipBarConfig::default()
    };
    let mut bar = chip_bar(&host, config, 300.);
    bar.set_chip_items(chips(&[80., 90., 70., 100., 85.])).unwrap();
    host.poll().unwrap();

    assert_eq!(bar.mode(), Some(ScrollMode::Scrollable));
    assert_eq!(bar.content_size().x, 465.);
    let scroll = host.tree.scroll(bar.scroll_view()).unwrap();
    assert_eq!(scroll.content_size.x, 465.);
    assert_eq!(scroll.content_offset.x, 0.);

    let chip = &bar.chip_items()[3];
    assert_eq!(chip.frame().min_x(), 264.);
    assert_eq!(chip.frame().width(), 100.);

    bar.select(3, None).unwrap();
    assert_eq!(bar.selected_index(), Some(3));
    assert!(bar.is_animating());
    assert!((bar.content_offset() - 64.).abs() < 1e-9);

    assert_eq!(host.poll().unwrap(), 1);
    let scroll = host.tree.scroll(bar.scroll_view()).unwrap();
    assert!((scroll.content_offset.x - 64.).abs() < 1e-9);
    assert_eq!(host.tree.last_duration(bar.scroll_view()), Some(0.3));

    // scrolling back to the first chip aligns its left edge
    bar.select(0, None).unwrap();
    assert_eq!(bar.content_offset(), 0.);
}

#[test]
fn fitting_chips_do_not_scroll() {
    let mut host = Host::new();
    let config = ChipBarConfig {
        interim_space: InterimSpace::Custom(8.),
        ..ChipBarConfig::default()
    };
    // 3 * (92 + 8) == 300 exactly
    let mut bar = chip_bar(&host, config, 300.);
    bar.set_chip_items(chips(&[92., 92., 92.])).unwrap();
    host.poll().unwrap();

    assert_eq!(bar.mode(), Some(ScrollMode::Fixed));
    let scroll = host.tree.scroll(bar.scroll_view()).unwrap();
    assert!((scroll.content_size.x - bar.content_frame().width()).abs() < 1e-9);

    bar.set_chip_items(chips(&[92., 92., 93.])).unwrap();
    assert_eq!(bar.mode(), Some(ScrollMode::Scrollable));
}

#[test]
fn user_taps_run_the_full_selection_cycle() {
    let mut host = Host::new();
    let config = Config::from_ron("(chip_bar: (style: Scrollable, interim_space: Custom(8.0)))")
        .unwrap()
        .chip_bar;
    let mut bar = chip_bar(&host, config, 300.);
    assert_eq!(bar.style(), ChipBarStyle::Scrollable);
    bar.set_chip_items(chips(&[80., 90., 70., 100., 85.])).unwrap();

    let will = Arc::new(AtomicUsize::new(0));
    let did = Arc::new(AtomicUsize::new(0));
    let (w, d) = (Arc::clone(&will), Arc::clone(&did));
    bar.on_will_select(move |_| {
        w.fetch_add(1, Ordering::SeqCst);
    });
    bar.on_did_select(move |event| {
        d.store(event.index, Ordering::SeqCst);
    });

    // the fourth chip peeks out at the right edge
    assert!(bar.tap(Point2::new(280., 20.)).unwrap());
    assert_eq!(will.load(Ordering::SeqCst), 1);
    assert_eq!(bar.selected_index(), Some(3));
    assert!((bar.content_offset() - 64.).abs() < 1e-9);

    bar.advance(Duration::from_millis(300));
    assert!(!bar.is_animating());
    assert_eq!(did.load(Ordering::SeqCst), 3);

    host.poll().unwrap();
    let chip_ids: Vec<_> = bar.chip_items().iter().map(ChipItem::id).collect();
    assert_eq!(host.tree.subviews(bar.scroll_view()), chip_ids.as_slice());
}

#[test]
fn pulse_round_trip_through_the_host() {
    let mut host = Host::new();
    let config = Config::default().pulse;
    let mut pulse =
        PulseOverlay::new(Rect::from_xywh(0., 0., 120., 48.), config, host.compositor()).unwrap();
    host.poll().unwrap();
    assert_eq!(host.tree.subviews(pulse.id()), &[pulse.pulse_id()]);
    assert!(host.tree.layer(pulse.pulse_id()).unwrap().hidden);

    pulse.touch(&Touch::began(Point2::new(60., 24.))).unwrap();
    assert_eq!(host.poll().unwrap(), 2);
    let layer = host.tree.layer(pulse.pulse_id()).unwrap();
    assert!(!layer.hidden);
    assert_eq!(layer.scale(), 3.);
    assert_eq!(host.tree.layer(pulse.id()).unwrap().scale(), 1.1);

    pulse.touch(&Touch::ended(Point2::new(60., 24.))).unwrap();
    pulse.touch(&Touch::ended(Point2::new(60., 24.))).unwrap();
    assert_eq!(host.poll().unwrap(), 2);
    let layer = host.tree.layer(pulse.pulse_id()).unwrap();
    assert!(layer.hidden);
    assert!(layer.is_identity());
    assert!(host.tree.layer(pulse.id()).unwrap().is_identity());
}
