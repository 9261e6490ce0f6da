pub(crate) mod events;
pub mod app;
pub mod theme;

use std::sync::{
    atomic::{AtomicBool, Ordering},
    mpsc, Arc,
};

use app::App;
pub use events::Event;

/// Run the chart viewer. Acquiring the terminal comes first: if that fails no
/// network request is ever issued.
pub async fn run() -> crate::Result<()> {
    let (event_tr, event_rc) = mpsc::channel::<Event>();
    let shutdown = Arc::new(AtomicBool::new(false));

    let mut terminal = ratatui::init();

    let mut app = App::default();
    app.init_threads(&event_tr, &shutdown);

    while !app.exit {
        // render the view based on the app state
        app.draw(&mut terminal)?;

        // make any changes to the app state
        let event = event_rc.recv()?;
        app.handle_event(event)?;
    }

    // final render before exiting
    app.draw(&mut terminal)?;

    // signal all the threads to exit
    shutdown.store(true, Ordering::Relaxed);

    // wait for app component threads to exit
    app.exit_threads().await;

    // restore normal terminal
    ratatui::restore();

    Ok(())
}
