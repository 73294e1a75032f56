//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use crate::Stone;
use super::board_view::{mark_symbol, paint_mark, BoardView, Overlay};
use super::game_state::{GameState, MatchConfig, Outcome};
use super::theme::*;

/// Which screen is showing
enum Screen {
    Menu,
    Playing(Box<GameState>),
}

/// Requests collected while drawing, applied once the frame is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Start(MatchConfig),
    Undo,
    NewGame,
    BackToMenu,
}

/// Main Gomoku application
pub struct GomokuApp {
    screen: Screen,
    board_view: BoardView,
    show_debug: bool,
    pending: Option<Action>,
}

impl Default for GomokuApp {
    fn default() -> Self {
        Self {
            screen: Screen::Menu,
            board_view: BoardView::default(),
            show_debug: true,
            pending: None,
        }
    }
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Start(config) => {
                self.screen = Screen::Playing(Box::new(GameState::new(config)));
            }
            Action::BackToMenu => self.screen = Screen::Menu,
            Action::Undo => {
                if let Screen::Playing(state) = &mut self.screen {
                    state.undo();
                }
            }
            Action::NewGame => {
                if let Screen::Playing(state) = &mut self.screen {
                    state.reset();
                }
            }
        }
    }

    /// Render the start screen
    fn render_menu(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(FELT))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() * 0.25);
                    ui.label(RichText::new("GOMOKU").size(56.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new("Five in a row on a 15x15 board").size(14.0).color(TEXT_PRIMARY));
                    ui.add_space(40.0);

                    if ui.add(menu_button("Play vs AI")).clicked() {
                        self.pending = Some(Action::Start(MatchConfig::vs_ai()));
                    }
                    ui.add_space(12.0);
                    if ui.add(menu_button("Watch AI vs AI")).clicked() {
                        self.pending = Some(Action::Start(MatchConfig::ai_vs_ai()));
                    }
                });
            });
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context, state: &GameState) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("Play vs AI").clicked() {
                        self.pending = Some(Action::Start(MatchConfig::vs_ai()));
                        ui.close_menu();
                    }
                    if ui.button("Watch AI vs AI").clicked() {
                        self.pending = Some(Action::Start(MatchConfig::ai_vs_ai()));
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo (U)").clicked() {
                        self.pending = Some(Action::Undo);
                        ui.close_menu();
                    }
                    if ui.button("Main Menu (Esc)").clicked() {
                        self.pending = Some(Action::BackToMenu);
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!(
                        "{} vs {}",
                        state.config.label(Stone::Black),
                        state.config.label(Stone::White)
                    ));
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context, state: &GameState) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                Self::render_title_card(ui);
                ui.add_space(12.0);

                Self::render_turn_card(ui, state);
                ui.add_space(10.0);

                Self::render_timer_card(ui, state);
                ui.add_space(10.0);

                self.render_actions_card(ui, state);

                if self.show_debug {
                    ui.add_space(10.0);
                    Self::render_debug_card(ui, state);
                }

                if let Some(outcome) = state.outcome {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, outcome);
                }

                if let Some(msg) = &state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("15x15, five in a row").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(ui: &mut egui::Ui, state: &GameState) {
        Self::card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().rect_filled(rect, CornerRadius::same(6), FELT);
                paint_mark(ui.painter(), rect.center(), rect.width(), state.current_turn, MARK);

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(state.config.label(state.current_turn))
                            .size(16.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );

                    let status = if state.is_game_over() {
                        ("Game over", OK)
                    } else if state.is_ai_thinking() {
                        ("AI thinking...", WARN)
                    } else if state.is_human_turn() {
                        ("Your turn", OK)
                    } else {
                        ("Waiting", TEXT_SECONDARY)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Render timer card
    fn render_timer_card(ui: &mut egui::Ui, state: &GameState) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TIMER").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(elapsed) = state.ai_thinking_elapsed() {
                let secs = elapsed.as_secs_f32();
                let color = if secs < 1.0 {
                    OK
                } else if secs < 3.0 {
                    WARN
                } else {
                    ALERT
                };
                ui.label(RichText::new(format!("{:.2}s", secs)).size(28.0).strong().color(color));
            } else {
                let elapsed = state.move_timer.elapsed();
                ui.label(RichText::new(format!("{:.1}s", elapsed.as_secs_f32())).size(24.0).color(TEXT_PRIMARY));
            }

            if let Some(ai_time) = state.move_timer.ai_thinking_time {
                ui.add_space(4.0);
                ui.label(RichText::new(format!("Last AI: {:.3}s", ai_time.as_secs_f32())).size(10.0).color(TEXT_SECONDARY));
            }
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui, state: &GameState) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let undo = ui.add_enabled(
                    !state.move_history.is_empty() && !state.is_ai_thinking(),
                    egui::Button::new(RichText::new("Undo").size(12.0)),
                );
                if undo.clicked() {
                    self.pending = Some(Action::Undo);
                }
                if ui.button(RichText::new("New Game").size(12.0)).clicked() {
                    self.pending = Some(Action::NewGame);
                }
                if ui.button(RichText::new("Menu").size(12.0)).clicked() {
                    self.pending = Some(Action::BackToMenu);
                }
            });

            ui.add_space(8.0);
            ui.label(RichText::new(format!("Move #{}", state.move_history.len())).size(11.0).color(TEXT_SECONDARY));
        });
    }

    /// Render debug card
    fn render_debug_card(ui: &mut egui::Ui, state: &GameState) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                let Some(result) = &state.last_ai_result else {
                    ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                    return;
                };

                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(format!("{} (depth {})", result.engine, result.depth))
                                .size(11.0)
                                .strong()
                                .color(OK),
                        );
                        ui.label(RichText::new(format!("Score: {}", result.score)).size(10.0).color(TEXT_SECONDARY));
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                        ui.vertical(|ui| {
                            ui.label(RichText::new(format!("{}ms", result.time_ms)).size(10.0).color(TEXT_SECONDARY));
                            ui.label(RichText::new(format!("{} nodes", result.nodes())).size(10.0).color(TEXT_MUTED));
                        });
                    });
                });

                let stats = result.stats;
                ui.label(
                    RichText::new(format!(
                        "leaf evals {}, ordering evals {}, cutoffs {}",
                        stats.leaf_evals, stats.ordering_evals, stats.cutoffs
                    ))
                    .size(10.0)
                    .color(TEXT_MUTED),
                );

                if let Some(pos) = result.best_move {
                    ui.add_space(4.0);
                    ui.label(RichText::new(format!("-> {}", pos)).size(12.0).strong().color(OK));
                }
            });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, outcome: Outcome) {
        let (headline, detail) = match outcome {
            Outcome::Win { winner, .. } => (
                format!("{} ({}) WINS!", mark_symbol(winner), winner.name().to_uppercase()),
                "by 5-in-a-row",
            ),
            Outcome::Draw => ("DRAW".to_string(), "the board is full"),
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(4.0);
                    ui.label(RichText::new(detail).size(11.0).color(TEXT_SECONDARY));
                    ui.add_space(12.0);

                    if ui.button(RichText::new("New Game").size(14.0).strong()).clicked() {
                        self.pending = Some(Action::NewGame);
                    }
                });
            });
    }

    /// Render status message card
    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board, forwarding clicks to the game state
    fn render_board(board_view: &mut BoardView, ctx: &Context, state: &mut GameState) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let overlay = Overlay {
                last_move: state.last_move,
                winning_line: match state.outcome {
                    Some(Outcome::Win { line, .. }) => line,
                    _ => None,
                },
                human_to_move: (!state.is_game_over() && state.is_human_turn())
                    .then_some(state.current_turn),
            };

            let clicked = board_view.show(ui, &state.board, &overlay, |pos| state.can_play(pos));

            if let Some(pos) = clicked {
                if let Err(err) = state.try_place_stone(pos) {
                    state.message = Some(err.to_string());
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }
            if i.key_pressed(egui::Key::U) {
                self.pending = Some(Action::Undo);
            }
            if i.key_pressed(egui::Key::N) {
                self.pending = Some(Action::NewGame);
            }
            if i.key_pressed(egui::Key::Escape) {
                self.pending = Some(Action::BackToMenu);
            }
        });
    }
}

fn menu_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(RichText::new(text).size(20.0)).min_size(Vec2::new(240.0, 48.0))
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut screen = std::mem::replace(&mut self.screen, Screen::Menu);

        match &mut screen {
            Screen::Menu => self.render_menu(ctx),
            Screen::Playing(state) => {
                self.handle_input(ctx);

                state.check_ai_result();
                if state.engine_to_move().is_some() && !state.is_ai_thinking() && !state.is_game_over() {
                    state.start_ai_thinking();
                }

                self.render_menu_bar(ctx, state);
                self.render_side_panel(ctx, state);
                Self::render_board(&mut self.board_view, ctx, state);

                // Keep polling the worker and ticking the timer
                if state.is_ai_thinking() || !state.is_game_over() {
                    ctx.request_repaint();
                }
            }
        }

        self.screen = screen;
        if let Some(action) = self.pending.take() {
            self.apply(action);
        }
    }
}
