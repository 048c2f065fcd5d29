use egui::Context;
use egui_winit::State as EguiWinitState;
use winit::{event::WindowEvent, event_loop::EventLoop, window::Window};

use crate::controllers::interactive::SortController;
use crate::core::playback::clock::{MAX_SPEED, MIN_SPEED};
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::state::GuiAppState;
use crate::input::gui::events::GuiEvent;

pub struct GuiApp<T: GuiPresenterPort> {
    width: u32,
    height: u32,
    pub scale_factor: f64,
    presenter: T,
    pub controller: SortController,
    ui_state: GuiAppState,
    last_error_message: Option<String>,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<GuiEvent>,
        presenter: T,
        controller: SortController,
    ) -> Self {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None,
        );

        let ui_state = GuiAppState::new(controller.playback_state().speed);

        Self {
            width: size.width,
            height: size.height,
            scale_factor,
            presenter,
            controller,
            ui_state,
            last_error_message: None,
            egui_ctx,
            egui_state,
        }
    }

    /// Drains run outcomes from the presenter into the panel state.
    pub fn poll_outcomes(&mut self) {
        for event in &self.presenter.take_outcomes() {
            self.ui_state.record_event(event);
        }
    }

    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), pixels::Error> {
        let values = self.controller.array().snapshot();

        self.presenter.render(egui_output, &self.egui_ctx, &values)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;

        if width == 0 || height == 0 {
            return;
        }

        self.presenter.resize(width, height);
    }

    pub fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let playback = self.controller.playback_state();

        let mut start_clicked = false;
        let mut pause_clicked = false;
        let mut reset_clicked = false;
        let mut speed_changed = false;

        let output = self.egui_ctx.run(raw_input, |ctx| {
            egui::TopBottomPanel::top("playback_controls").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    start_clicked = ui
                        .add_enabled(playback.is_idle(), egui::Button::new("Start"))
                        .clicked();
                    pause_clicked = ui
                        .add_enabled(
                            playback.sorting,
                            egui::Button::new(GuiAppState::pause_label(playback)),
                        )
                        .clicked();
                    reset_clicked = ui.button("Reset").clicked();

                    ui.separator();
                    ui.label("Speed:");
                    speed_changed = ui
                        .add(egui::Slider::new(
                            &mut self.ui_state.speed,
                            i32::from(MIN_SPEED)..=i32::from(MAX_SPEED),
                        ))
                        .changed();
                });

                ui.label(self.ui_state.status_line(playback));
                if let Some(message) = &self.last_error_message {
                    ui.colored_label(egui::Color32::LIGHT_RED, message);
                }
            });
        });

        if speed_changed {
            self.controller.set_speed(self.ui_state.speed);
        }
        if start_clicked && self.controller.start() {
            self.ui_state.clear_status();
        }
        if pause_clicked {
            self.controller.pause_toggle();
        }
        if reset_clicked {
            match self.controller.reset() {
                Ok(()) => {
                    self.ui_state.clear_status();
                    self.last_error_message = None;
                }
                Err(error) => {
                    tracing::error!(%error, "reset failed");
                    self.last_error_message = Some(error.to_string());
                }
            }
        }

        output
    }

    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }
}
