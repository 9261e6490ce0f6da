pub mod bars;
pub mod input;

use crate::api::PriceBar;

pub enum Event {
    Input(ratatui::crossterm::event::KeyEvent),
    Resize(u16, u16),
    BarsLoaded(Vec<PriceBar>),
    BarsLoadFailed(String),
}
