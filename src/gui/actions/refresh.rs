// src/gui/actions/refresh.rs
use std::{sync::Arc, thread};

use eframe::egui;

use crate::gui::app::App;

/// Kick off a refresh on a worker thread. Overlapping calls are allowed;
/// each gets its own token and only the newest result is applied.
pub fn refresh(app: &mut App, ctx: &egui::Context) {
    let Some(ticket) = app.board.begin_refresh() else {
        // No source: board now shows the configuration message
        return;
    };

    logf!("Refresh: spawn worker token={}", ticket.token);

    let fetcher = Arc::clone(&app.fetcher);
    let tx = app.tx.clone();
    let ctx2 = ctx.clone();

    thread::spawn(move || {
        let outcome = ticket.run(fetcher.as_ref());
        // receiver gone means the window closed; nothing to do
        let _ = tx.send(outcome);
        ctx2.request_repaint();
    });
}
