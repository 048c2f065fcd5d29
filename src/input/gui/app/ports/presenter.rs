use std::sync::Arc;

use egui::Context as EguiContext;
use winit::{event_loop::EventLoopProxy, window::Window};

use crate::controllers::interactive::data::visualizer_config::VisualizerConfig;
use crate::controllers::interactive::events::sort_event::SortEvent;
use crate::controllers::interactive::ports::presenter::SortPresenterPort;
use crate::input::gui::events::GuiEvent;

pub trait GuiPresenterPort {
    fn new(
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
        config: &VisualizerConfig,
    ) -> Result<Self, pixels::Error>
    where
        Self: Sized;
    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
        values: &[i32],
    ) -> Result<(), pixels::Error>;
    fn share_adapter(&self) -> Arc<dyn SortPresenterPort>;
    /// Run outcomes received since the last call, oldest first.
    fn take_outcomes(&self) -> Vec<SortEvent>;
    fn resize(&mut self, width: u32, height: u32);
}
