//! Terminal event loop.
//!
//! One `select!` multiplexes terminal input, worker events and the render
//! tick. The loop never blocks on the network; slow requests only delay
//! their own event.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use tokio::sync::mpsc::UnboundedReceiver;

use bookstand_core::ApiEvent;

use crate::input;
use crate::render::render;
use crate::ui::{App, Tui};

const TICK_INTERVAL: Duration = Duration::from_millis(50);

pub async fn run_app(
    terminal: &mut Tui,
    app: &mut App,
    mut api_events: UnboundedReceiver<ApiEvent>,
) -> Result<()> {
    let mut event_stream = EventStream::new();
    let mut tick = tokio::time::interval(TICK_INTERVAL);

    while app.running {
        terminal.draw(|f| render(f, app))?;

        tokio::select! {
            term_event = event_stream.next() => {
                match term_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        if key.code == KeyCode::Char('c')
                            && key.modifiers.contains(KeyModifiers::CONTROL)
                        {
                            if app.pending_quit {
                                app.quit();
                            } else {
                                app.pending_quit = true;
                            }
                        } else {
                            // Any other key disarms the quit warning.
                            app.pending_quit = false;
                            input::handle_key(app, key);
                        }
                    }
                    Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                    Some(Ok(_)) => {}
                    Some(Err(err)) => return Err(err.into()),
                    None => break,
                }
            }
            Some(event) = api_events.recv() => {
                app.apply_event(event);
            }
            _ = tick.tick() => {
                app.tick();
            }
        }
    }

    Ok(())
}
