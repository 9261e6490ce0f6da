use ratatui::layout::Position;
use ratatui::widgets::Widget;

use crate::api::PriceBar;
use crate::testutils::TestTerminal;
use crate::tui::app::widgets::candle_chart::CandleChart;

fn bar(time: i64, open: f64, high: f64, low: f64, close: f64) -> PriceBar {
    PriceBar {
        time,
        open,
        high,
        low,
        close,
    }
}

// ============================================================================
// Update / fit-content state
// ============================================================================

#[test]
fn default_chart_is_empty() {
    let chart = CandleChart::default();
    assert!(chart.is_empty());
    assert_eq!(chart.y_bounds(), (0.0, 0.0));
}

#[test]
fn update_fits_bounds_to_full_span() {
    let mut chart = CandleChart::default();
    chart.update(vec![
        bar(100, 10.0, 12.0, 9.0, 11.0),
        bar(200, 11.0, 15.0, 10.0, 14.0),
    ]);
    assert_eq!(chart.y_bounds(), (9.0, 15.0));
}

#[test]
fn update_passes_fields_through_unchanged() {
    let mut chart = CandleChart::default();
    chart.update(vec![bar(1700000000, 10.0, 12.0, 9.0, 11.0)]);

    let bars = chart.bars();
    assert_eq!(bars.len(), 1);
    assert_eq!(bars[0].time, 1700000000);
    assert_eq!(bars[0].open, 10.0);
    assert_eq!(bars[0].high, 12.0);
    assert_eq!(bars[0].low, 9.0);
    assert_eq!(bars[0].close, 11.0);
}

#[test]
fn update_sorts_bars_by_time() {
    let mut chart = CandleChart::default();
    chart.update(vec![
        bar(200, 11.0, 15.0, 10.0, 14.0),
        bar(100, 10.0, 12.0, 9.0, 11.0),
    ]);
    assert_eq!(chart.bars()[0].time, 100);
}

#[test]
fn update_replaces_prior_content() {
    let mut chart = CandleChart::default();
    chart.update(vec![
        bar(100, 10.0, 12.0, 9.0, 11.0),
        bar(200, 11.0, 15.0, 10.0, 14.0),
    ]);
    chart.update(vec![bar(300, 20.0, 22.0, 19.0, 21.0)]);
    assert_eq!(chart.bars().len(), 1);
    assert_eq!(chart.y_bounds(), (19.0, 22.0));
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn renders_single_bar_with_body_and_axis_labels() {
    let mut chart = CandleChart::default();
    chart.update(vec![bar(1700000000, 10.0, 12.0, 9.0, 11.0)]);

    let mut terminal = TestTerminal::new(40, 12);
    (&chart).render(terminal.area, &mut terminal.buffer);

    let rendered = terminal.render_to_string();
    assert!(rendered.contains("┃"), "expected a candle body:\n{rendered}");
    assert!(rendered.contains("12.00"), "expected max label:\n{rendered}");
    assert!(rendered.contains("┘"), "expected axis corner:\n{rendered}");
}

#[test]
fn renders_empty_chart_as_axes_only() {
    let chart = CandleChart::default();

    let mut terminal = TestTerminal::new(40, 12);
    (&chart).render(terminal.area, &mut terminal.buffer);

    let rendered = terminal.render_to_string();
    assert!(rendered.contains("┘"));
    assert!(!rendered.contains("┃"));
}

#[test]
fn empty_chart_shows_no_value_labels() {
    let chart = CandleChart::default();

    let mut terminal = TestTerminal::new(40, 12);
    (&chart).render(terminal.area, &mut terminal.buffer);

    let rendered = terminal.render_to_string();
    assert!(rendered.contains("│"), "expected axis frame:\n{rendered}");
    assert!(
        !rendered.contains("0.00"),
        "expected no fabricated labels:\n{rendered}"
    );
    assert!(!rendered.contains('-'), "expected no labels:\n{rendered}");
}

#[test]
fn flat_range_centers_the_candle_with_matching_labels() {
    let mut chart = CandleChart::default();
    chart.update(vec![bar(100, 10.0, 10.0, 10.0, 10.0)]);

    let mut terminal = TestTerminal::new(40, 12);
    (&chart).render(terminal.area, &mut terminal.buffer);

    let rendered = terminal.render_to_string();
    // band is padded to [9.50, 10.50], so labels stay around the price
    assert!(rendered.contains("10.50"), "expected top label:\n{rendered}");
    assert!(!rendered.contains('-'), "expected no negative labels:\n{rendered}");
    assert!(rendered.contains("┃"), "expected a candle body:\n{rendered}");

    // single bar sits at the rightmost column, away from both edges of the
    // 10 row chart height
    let top = terminal.buffer.cell(Position::new(26, 0)).unwrap();
    let bottom = terminal.buffer.cell(Position::new(26, 9)).unwrap();
    assert_ne!(top.symbol(), "┃");
    assert_ne!(bottom.symbol(), "┃");
}

#[test]
fn fit_content_spans_the_full_chart_width() {
    // Bodies cover the whole y range so the edge columns must be painted.
    let mut chart = CandleChart::default();
    chart.update(vec![
        bar(100, 9.0, 12.0, 9.0, 12.0),
        bar(200, 9.0, 12.0, 9.0, 12.0),
    ]);

    let mut terminal = TestTerminal::new(40, 12);
    (&chart).render(terminal.area, &mut terminal.buffer);

    // y axis is 13 wide (9 char label + 4), leaving columns 0..27 for candles
    let left = terminal.buffer.cell(Position::new(0, 0)).unwrap();
    let right = terminal.buffer.cell(Position::new(26, 0)).unwrap();
    assert_eq!(left.symbol(), "┃");
    assert_eq!(right.symbol(), "┃");
}

#[test]
fn more_bars_than_columns_renders_without_panic() {
    let mut chart = CandleChart::default();
    chart.update(
        (0..500)
            .map(|i| bar(i * 60, 10.0, 12.0, 9.0, 11.0))
            .collect(),
    );

    let mut terminal = TestTerminal::new(40, 12);
    (&chart).render(terminal.area, &mut terminal.buffer);
    assert!(terminal.render_to_string().contains("┃"));
}

#[test]
fn tiny_area_renders_nothing() {
    let mut chart = CandleChart::default();
    chart.update(vec![bar(100, 10.0, 12.0, 9.0, 11.0)]);

    let mut terminal = TestTerminal::new(5, 3);
    (&chart).render(terminal.area, &mut terminal.buffer);
    assert_eq!(terminal.render_to_string(), "");
}

#[test]
fn rendering_twice_at_same_size_is_identical() {
    let mut chart = CandleChart::default();
    chart.update(vec![
        bar(100, 10.0, 12.0, 9.0, 11.0),
        bar(200, 11.0, 15.0, 10.0, 14.0),
    ]);

    let mut terminal = TestTerminal::new(40, 12);
    (&chart).render(terminal.area, &mut terminal.buffer);
    let first = terminal.render_to_string();

    terminal.clear();
    (&chart).render(terminal.area, &mut terminal.buffer);
    assert_eq!(first, terminal.render_to_string());
}

#[test]
fn wider_area_reuses_the_same_data() {
    let mut chart = CandleChart::default();
    chart.update(vec![
        bar(100, 10.0, 12.0, 9.0, 11.0),
        bar(200, 11.0, 15.0, 10.0, 14.0),
    ]);

    let mut narrow = TestTerminal::new(30, 12);
    (&chart).render(narrow.area, &mut narrow.buffer);
    let mut wide = TestTerminal::new(80, 12);
    (&chart).render(wide.area, &mut wide.buffer);

    assert!(narrow.render_to_string().contains("┃"));
    assert!(wide.render_to_string().contains("┃"));
    // data untouched by geometry changes
    assert_eq!(chart.bars().len(), 2);
}
