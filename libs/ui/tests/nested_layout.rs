//! Layouts composed from several nested containers
//!
//! These tests drive the public API the way a render pass does: build a
//! page over a root surface, carve containers out of it, draw, and check
//! what reached the root.

use chrono::NaiveDate;
use core::convert::Infallible;
use pagekit_ui::test_utils::{DrawCall, FixedFont, RecordingSurface};
use pagekit_ui::{
    BootPage, ClipGuard, Container, DrawingSurface, HeaderStatus, IconSet, Page, PageStyle,
    TextAlign,
};

type Root<'a> =
    dyn DrawingSurface<Color = bool, Font = FixedFont, Image = str, Error = Infallible> + 'a;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn status() -> HeaderStatus {
    HeaderStatus {
        now: NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap(),
        wifi_percent: 75.0,
        api_connected: true,
    }
}

/// Draw through `depth` containers, each offset by (dx, dy) from its parent
fn print_through(surface: &mut Root<'_>, offsets: &[(i32, i32)], font: &FixedFont) {
    match offsets.split_first() {
        None => surface
            .print(3, 4, font, true, TextAlign::TOP_LEFT, "x")
            .unwrap(),
        Some((&(dx, dy), rest)) => {
            let mut inner = Container::new(surface, dx, dy, 10, 10);
            print_through(&mut inner, rest, font);
        }
    }
}

#[test]
fn test_offsets_sum_across_nesting() {
    init_logging();
    let font = FixedFont::default();
    let offsets = [(1, 2), (10, 20), (-3, 5), (7, 0)];

    for depth in 0..=offsets.len() {
        let mut root = RecordingSurface::new(250, 122);
        print_through(&mut root, &offsets[..depth], &font);

        let (sum_x, sum_y) = offsets[..depth]
            .iter()
            .fold((0, 0), |(x, y), (dx, dy)| (x + dx, y + dy));
        assert_eq!(
            root.calls(),
            &[DrawCall::Print {
                x: 3 + sum_x,
                y: 4 + sum_y,
                align: TextAlign::TOP_LEFT,
                text: "x".to_string(),
            }],
            "depth {depth}"
        );
    }
}

#[test]
fn test_rectangles_never_scale() {
    init_logging();
    let mut root = RecordingSurface::new(250, 122);
    {
        let mut a = Container::new(&mut root, 5, 5, 100, 100);
        let mut b = Container::new(&mut a, 5, 5, 50, 50);
        let mut c = Container::new(&mut b, 5, 5, 25, 25);
        c.rectangle(1, 1, 40, 30, true).unwrap();
        c.filled_rectangle(2, 2, 40, 30, true).unwrap();
    }

    assert_eq!(
        root.calls(),
        &[
            DrawCall::Rectangle {
                x: 16,
                y: 16,
                width: 40,
                height: 30,
                filled: false
            },
            DrawCall::Rectangle {
                x: 17,
                y: 17,
                width: 40,
                height: 30,
                filled: true
            },
        ]
    );
}

#[test]
fn test_cells_inside_page() {
    init_logging();
    let mut root = RecordingSurface::new(250, 122);
    let font = FixedFont::default();
    let icons = IconSet::ascii();
    let style = PageStyle {
        header_font: &font,
        glyph_font: &font,
        icons: &icons,
    };

    {
        let mut page = Page::new(&mut root, &style, &status()).unwrap();
        let half = page.get_width() / 2;
        let height = page.get_height();

        let mut right = Container::new(&mut page, half, 0, half, height);
        let metrics = right.get_text_metrics(&font, "42");
        let (w, h) = (right.get_width(), right.get_height());
        let baseline = h / 2 + metrics.baseline / 2;
        right
            .print(w / 2, baseline, &font, true, TextAlign::BASELINE_CENTER, "42")
            .unwrap();
        assert_eq!(font.measure_calls(), 1);
    }

    assert_eq!(root.printed(), vec!["@4", "42"]);
    assert_eq!(
        root.calls().last(),
        Some(&DrawCall::Print {
            x: 125 + 62,
            y: 24 + 49 + 5,
            align: TextAlign::BASELINE_CENTER,
            text: "42".to_string(),
        })
    );
}

#[test]
fn test_clip_guard_inside_boot_page() {
    init_logging();
    let mut root = RecordingSurface::new(250, 240);
    let font = FixedFont::default();
    let icons = IconSet::default();
    let style = PageStyle {
        header_font: &font,
        glyph_font: &font,
        icons: &icons,
    };

    {
        let mut boot = BootPage::new(&mut root, &style, &status()).unwrap();
        let mut clip = ClipGuard::new(&mut boot, 0, 0, 50, 50).unwrap();
        clip.line(0, 0, 49, 49, true).unwrap();
    }

    let calls = root.calls();
    assert_eq!(calls.len(), 7);
    assert_eq!(
        calls[4],
        DrawCall::StartClipping {
            x: 0,
            y: 24,
            width: 50,
            height: 50
        }
    );
    assert_eq!(
        calls[5],
        DrawCall::Line {
            x1: 0,
            y1: 24,
            x2: 49,
            y2: 73
        }
    );
    assert_eq!(calls[6], DrawCall::EndClipping);
}
