//! Event loop: terminal events in, frames out.

use std::io;
use std::time::Instant;

use crossterm::event::EventStream;
use futures::StreamExt;
use log::{debug, info};
use termcell::{Event, Terminal};
use thiserror::Error;
use tokio::time::sleep_until;

use crate::config::{ConfigError, PageConfig};
use crate::page::{Flow, Page};

/// Errors that end the program.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Run the page until the user quits.
pub async fn run(config: PageConfig) -> Result<(), AppError> {
    let background = config.theme.background;
    let mut terminal = Terminal::new()?;
    let mut events = EventStream::new();
    let mut page = Page::new(config);
    info!("runtime started");

    loop {
        if page.take_needs_render() {
            let now = Instant::now();
            terminal.draw(background, |buf| page.render(buf, now))?;
        }

        // Wait for input, or for the next frame while something animates.
        let next = match page.next_frame(Instant::now()) {
            Some(at) => tokio::select! {
                event = events.next() => Some(event),
                _ = sleep_until(at.into()) => None,
            },
            None => Some(events.next().await),
        };

        let now = Instant::now();
        match next {
            Some(Some(Ok(raw))) => {
                if let Some(event) = Event::from_crossterm(raw) {
                    if page.handle(event, now) == Flow::Quit {
                        break;
                    }
                } else {
                    debug!("unhandled terminal event");
                }
            }
            Some(Some(Err(err))) => return Err(err.into()),
            Some(None) => {
                info!("event stream closed");
                break;
            }
            None => {}
        }
        page.tick(now);
    }

    info!("runtime stopped");
    Ok(())
}
