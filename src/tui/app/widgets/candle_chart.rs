use chrono::{DateTime, Local, TimeZone};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::api::PriceBar;

const UNICODE_BODY: &str = "┃";
const UNICODE_WICK: &str = "│";

/// Candlestick chart that always fits the full span of the loaded bars into
/// the area it is given. A terminal resize therefore needs no state change,
/// the next render picks up the new area.
#[derive(Debug)]
pub struct CandleChart {
    bars: Vec<PriceBar>,
    y_min: f64,
    y_max: f64,
    y_axis_width: u16,
    up_color: Color,
    down_color: Color,
    axis_color: Color,
}

impl Default for CandleChart {
    fn default() -> Self {
        Self {
            bars: Vec::new(),
            y_min: 0.0,
            y_max: 0.0,
            y_axis_width: numeric_format(0.0).len() as u16 + 4,
            up_color: Color::Rgb(0x26, 0xa6, 0x9a),
            down_color: Color::Rgb(0xef, 0x53, 0x50),
            axis_color: Color::DarkGray,
        }
    }
}

impl CandleChart {
    /// Replace the chart content with the given bars and fit the visible
    /// range to their full span. All five fields pass through unchanged.
    pub fn update(&mut self, mut bars: Vec<PriceBar>) {
        bars.sort_by_key(|b| b.time);

        self.y_max = bars.iter().map(|b| b.high).reduce(f64::max).unwrap_or(0.0);
        self.y_min = bars.iter().map(|b| b.low).reduce(f64::min).unwrap_or(0.0);
        self.y_axis_width = std::cmp::max(
            numeric_format(self.y_max).len(),
            numeric_format(self.y_min).len(),
        ) as u16
            + 4;
        self.bars = bars;
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn y_bounds(&self) -> (f64, f64) {
        (self.y_min, self.y_max)
    }

    fn candle_color(&self, bar: &PriceBar) -> Color {
        if bar.close >= bar.open {
            self.up_color
        } else {
            self.down_color
        }
    }

    /// One bar per chart column. When there are more bars than columns,
    /// consecutive bars falling on the same column are merged (first open,
    /// last close, extreme high/low) so the full span stays visible.
    fn column_bars(&self, chart_width: u16) -> Vec<(u16, PriceBar)> {
        let n = self.bars.len();
        let columns = chart_width as usize;
        if n == 0 || columns == 0 {
            return Vec::new();
        }

        if n <= columns {
            return self
                .bars
                .iter()
                .enumerate()
                .map(|(i, bar)| {
                    let x = if n == 1 {
                        columns - 1
                    } else {
                        i * (columns - 1) / (n - 1)
                    };
                    (x as u16, *bar)
                })
                .collect();
        }

        let mut out: Vec<(u16, PriceBar)> = Vec::with_capacity(columns);
        for (i, bar) in self.bars.iter().enumerate() {
            let x = (i * columns / n) as u16;
            match out.last_mut() {
                Some((last_x, merged)) if *last_x == x => {
                    merged.high = merged.high.max(bar.high);
                    merged.low = merged.low.min(bar.low);
                    merged.close = bar.close;
                }
                _ => out.push((x, *bar)),
            }
        }
        out
    }

    fn time_label(&self, timestamp: i64) -> String {
        let span = self
            .bars
            .last()
            .map(|l| l.time - self.bars[0].time)
            .unwrap_or(0);
        let Some(datetime) = DateTime::from_timestamp(timestamp, 0) else {
            return String::new();
        };
        let local = Local.from_utc_datetime(&datetime.naive_utc());
        // Time labels are shown without seconds; dates once the span leaves
        // the intraday scale.
        if span >= 60 * 60 * 24 * 2 {
            local.format("%Y/%m/%d").to_string()
        } else {
            local.format("%m/%d %H:%M").to_string()
        }
    }
}

impl Widget for &CandleChart {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let y_width = self.y_axis_width;
        if area.width <= y_width + 4 || area.height <= 3 {
            return;
        }
        let chart_width = area.width - y_width;
        let y_height = area.height - 2;

        // A flat range is padded so the price sits mid-band and the labels
        // stay true to the data. An empty chart keeps the axes frame but
        // shows no value labels at all.
        let range = self.y_max - self.y_min;
        let (y_lo, y_hi) = if range > 0.0 {
            (self.y_min, self.y_max)
        } else {
            (self.y_min - 0.5, self.y_max + 0.5)
        };
        let y_scale = (y_hi - y_lo) / y_height as f64;

        let axis_style = Style::default().fg(self.axis_color);

        // y axis on the right, a label every 4 rows
        for i in 0..y_height {
            let string = if i % 4 == 0 && !self.bars.is_empty() {
                let value = y_hi - y_scale * i as f64;
                format!(" ┤ {} ", numeric_format(value))
            } else {
                format!(" │ {} ", " ".repeat(y_width as usize - 4))
            };
            buf.set_string(area.x + chart_width, area.y + i, string, axis_style);
        }

        // x axis line with the corner joining the y axis
        let axis_line = "─".repeat(chart_width as usize) + "┘";
        buf.set_string(area.x, area.y + y_height, axis_line, axis_style);

        // first and last time labels under the axis
        if let (Some(first), Some(last)) = (self.bars.first(), self.bars.last()) {
            let left = self.time_label(first.time);
            let right = self.time_label(last.time);
            let label_row = area.y + y_height + 1;
            buf.set_string(area.x, label_row, &left, axis_style);
            if left.len() + right.len() + 2 <= chart_width as usize {
                let right_x = area.x + chart_width - right.len() as u16;
                buf.set_string(right_x, label_row, &right, axis_style);
            }
        }

        // candles, scaled so [y_min, y_max] covers the full chart height
        for (x, bar) in self.column_bars(chart_width) {
            let style = Style::default().fg(self.candle_color(&bar));
            let body_min = bar.open.min(bar.close);
            let body_max = bar.open.max(bar.close);

            for row in 0..y_height {
                let cell_lo = y_lo + (y_height - 1 - row) as f64 * y_scale;
                let cell_hi = cell_lo + y_scale;

                let glyph = if body_max >= cell_lo && body_min < cell_hi {
                    UNICODE_BODY
                } else if bar.high >= cell_lo && bar.low < cell_hi {
                    UNICODE_WICK
                } else {
                    continue;
                };
                buf.set_string(area.x + x, area.y + row, glyph, style);
            }
        }
    }
}

fn numeric_format(value: f64) -> String {
    let precision = 9;
    let scale = 2;
    format!("{value:>precision$.scale$}")
}
