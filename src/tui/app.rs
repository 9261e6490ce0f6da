use std::{
    io,
    sync::{atomic::AtomicBool, mpsc, Arc},
};

use ratatui::{
    buffer::Buffer,
    crossterm::event::KeyEventKind,
    layout::Rect,
    style::Style,
    widgets::{Block, Widget},
    DefaultTerminal,
};

use crate::{
    disk::{Config, DiskInterface},
    nifty_log,
};

use super::{
    events::{self, Event},
    theme::Theme,
};
use widgets::candle_chart::CandleChart;

pub mod widgets;

/// The app has two observable states: awaiting data, and data loaded or
/// failed silently. `loaded` makes the transition explicit even though the
/// failed case renders the same empty chart.
pub struct App {
    pub chart: CandleChart,
    pub theme: Theme,
    pub loaded: bool,
    pub exit: bool,

    pub input_thread: Option<std::thread::JoinHandle<()>>,
    pub load_task: Option<tokio::task::JoinHandle<()>>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            chart: CandleChart::default(),
            theme: Theme::default(),
            loaded: false,
            exit: false,

            input_thread: None,
            load_task: None,
        }
    }
}

impl App {
    pub fn draw(&self, terminal: &mut DefaultTerminal) -> io::Result<()> {
        terminal.draw(|frame| {
            frame.render_widget(self, frame.area());
        })?;
        Ok(())
    }

    pub fn init_threads(&mut self, tr: &mpsc::Sender<Event>, sd: &Arc<AtomicBool>) {
        let tr_input = tr.clone();
        let shutdown_signal = sd.clone();
        self.input_thread = Some(std::thread::spawn(move || {
            events::input::watch_input_events(tr_input, shutdown_signal);
        }));

        // A bad endpoint in the config takes the same silent-failure path as
        // a failed fetch: log it and leave the chart empty.
        match Config::load().endpoint_url() {
            Ok(endpoint) => {
                let tr_bars = tr.clone();
                self.load_task = Some(tokio::spawn(async move {
                    events::bars::load_bars(endpoint, tr_bars).await;
                }));
            }
            Err(err) => {
                nifty_log!("failed to load NIFTY chart: {err}");
                self.loaded = true;
            }
        }
    }

    pub fn handle_event(&mut self, event: Event) -> crate::Result<()> {
        match event {
            Event::Input(key_event) => {
                if key_event.kind == KeyEventKind::Press && events::input::is_exit_key(&key_event) {
                    self.exit = true;
                }
            }
            // Only geometry changes on resize. The main loop redraws into the
            // new area, data and theme stay untouched.
            Event::Resize(_, _) => {}
            Event::BarsLoaded(bars) => {
                nifty_log!("loaded {} bars", bars.len());
                self.chart.update(bars);
                self.loaded = true;
            }
            Event::BarsLoadFailed(err) => {
                // The chart shell stays rendered with no data and no
                // user-facing error indicator.
                nifty_log!("failed to load NIFTY chart: {err}");
                self.loaded = true;
            }
        }
        Ok(())
    }

    pub async fn exit_threads(&mut self) {
        if let Some(thread) = self.input_thread.take() {
            thread.join().unwrap();
        }
        if let Some(task) = self.load_task.take() {
            task.abort();
            let _ = task.await;
        }
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::from(&self.theme));

        let block = Block::bordered()
            .title(" NIFTY 50 ")
            .border_style(self.theme.grid_style());
        let inner = block.inner(area);
        block.render(area, buf);

        self.chart.render(inner, buf);
    }
}
