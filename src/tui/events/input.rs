use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        mpsc, Arc,
    },
    thread,
};

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Keys that make the main loop exit: `q`, `ESC` and `control + c`. A plain
/// `c` is not one of them.
pub(crate) fn is_exit_key(key_event: &KeyEvent) -> bool {
    match key_event.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key_event.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

pub fn watch_input_events(tx: mpsc::Sender<super::Event>, shutdown_signal: Arc<AtomicBool>) {
    while !shutdown_signal.load(Ordering::Relaxed) {
        match ratatui::crossterm::event::read().unwrap() {
            ratatui::crossterm::event::Event::Key(key_event) => {
                // Send result back to main thread. If main thread has already
                // shutdown, then we will get error. Since our event is not
                // critical, we do not store it to disk.
                let _ = tx.send(super::Event::Input(key_event));
                // When we want to quit from our main thread, we want to
                // gracefully quit this thread, however it is blocked on the
                // `event::read()` above. It needs a key press to be able to
                // check the shutdown signal.
                //
                // The `shutdown_signal` takes a while to be updated on the
                // main thread, so after an exit key we wait for a moment
                // before letting the execution go to the while loop condition
                // check.
                if is_exit_key(&key_event) {
                    thread::sleep(std::time::Duration::from_millis(10));
                }
            }
            ratatui::crossterm::event::Event::Resize(width, height) => {
                // The next draw picks up the new terminal area, nothing else
                // changes on resize.
                let _ = tx.send(super::Event::Resize(width, height));
            }
            _ => {}
        }
    }
}
