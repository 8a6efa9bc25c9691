// src/gui/app.rs
use std::{
    error::Error,
    sync::{
        Arc,
        mpsc::{self, Receiver, Sender},
    },
};

use eframe::egui;

use crate::{
    board::{Board, RefreshOutcome},
    config::state::AppState,
    core::{Fetch, HttpFetcher},
};

use super::{actions, components};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let fetcher: Arc<dyn Fetch> = Arc::new(HttpFetcher::new()?);
    eframe::run_native(
        "PgBee Leaderboard",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(AppState::default(), fetcher)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub board: Board,

    // refresh workers send finished loads back here
    pub(super) fetcher: Arc<dyn Fetch>,
    pub(super) tx: Sender<RefreshOutcome>,
    rx: Receiver<RefreshOutcome>,
}

impl App {
    pub fn new(state: AppState, fetcher: Arc<dyn Fetch>) -> Self {
        let board = Board::new(state.options.source.url());
        let (tx, rx) = mpsc::channel();

        logf!("Init: source configured={}", board.source().is_some());

        Self { state, board, fetcher, tx, rx }
    }

    /// Apply every finished refresh waiting on the channel.
    /// Superseded ones are dropped by the board.
    pub fn drain_outcomes(&mut self) -> usize {
        let mut n = 0;
        while let Ok(outcome) = self.rx.try_recv() {
            self.board.complete(outcome);
            n += 1;
        }
        n
    }

    /// Automatic refresh on first activation; later calls are no-ops.
    pub fn activate(&mut self, ctx: &egui::Context) {
        if self.state.gui.activated { return; }
        self.state.gui.activated = true;
        logd!("UI: first activation → refresh");
        actions::refresh(self, ctx);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.activate(ctx);
        self.drain_outcomes();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            components::header::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::titles::draw(ui);

            components::banner::draw(ui, self);

            components::board_table::draw(ui, self);
        });
    }
}
