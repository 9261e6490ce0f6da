pub mod api;
pub mod disk;
pub mod error;
pub mod server;
pub mod tui;
pub mod yahoo;

#[cfg(test)]
pub mod testutils;

pub use error::{Error, Result};

#[macro_export]
macro_rules! nifty_log {
    ($($arg:tt)*) => {{
        use std::fs::OpenOptions;
        use std::io::Write;

        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open("nifty.log")
            .unwrap();

        writeln!(file, $($arg)*).unwrap();
    }};
}
