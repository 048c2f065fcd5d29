use crate::adapters::bar_raster::{BarLayout, draw_bars};
use crate::controllers::interactive::data::visualizer_config::VisualizerConfig;
use crate::controllers::interactive::events::sort_event::SortEvent;
use crate::controllers::interactive::ports::presenter::SortPresenterPort;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::adapter::PixelsAdapter;
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::{Pixels, PixelsContext};
use pixels::SurfaceTexture;
use pixels::wgpu;
use std::sync::Arc;
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

/// Draws the bars into a fixed-size framebuffer scaled onto the window, with the
/// egui controls on top.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    adapter: Arc<PixelsAdapter>,
    layout: BarLayout,
    surface_width: u32,
    surface_height: u32,
}

impl GuiPresenterPort for PixelsPresenter {
    fn new(
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
        config: &VisualizerConfig,
    ) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);

        let pixels = Pixels::new(config.display_width, config.display_height, surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            egui_renderer,
            adapter: Arc::new(PixelsAdapter::new(event_loop_proxy)),
            layout: BarLayout {
                width: config.display_width,
                height: config.display_height,
                bar_width: config.bar_width,
            },
            surface_width: size.width,
            surface_height: size.height,
        })
    }

    fn share_adapter(&self) -> Arc<dyn SortPresenterPort> {
        Arc::clone(&self.adapter) as Arc<dyn SortPresenterPort>
    }

    fn take_outcomes(&self) -> Vec<SortEvent> {
        self.adapter.take_outcomes()
    }

    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
        values: &[i32],
    ) -> Result<(), pixels::Error> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Ok(());
        }

        draw_bars(
            self.pixels.frame_mut(),
            self.layout,
            values,
            self.adapter.step(),
        );

        let screen = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.surface_width, self.surface_height],
            pixels_per_point: egui_ctx.pixels_per_point(),
        };
        let primitives = egui_ctx.tessellate(egui_output.shapes, screen.pixels_per_point);
        let textures = egui_output.textures_delta;
        let egui_renderer = &mut self.egui_renderer;

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            paint_overlay(
                egui_renderer,
                context,
                encoder,
                render_target,
                &OverlayFrame {
                    primitives: &primitives,
                    textures: &textures,
                    screen: &screen,
                },
            );

            Ok(())
        })
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.surface_width = width;
        self.surface_height = height;

        if let Err(error) = self.pixels.resize_surface(width, height) {
            tracing::error!(%error, width, height, "failed to resize surface");
        }
    }
}

struct OverlayFrame<'a> {
    primitives: &'a [egui::ClippedPrimitive],
    textures: &'a egui::TexturesDelta,
    screen: &'a egui_wgpu::ScreenDescriptor,
}

/// Paints the egui controls over the bars already in `render_target`.
fn paint_overlay(
    renderer: &mut EguiRenderer,
    context: &PixelsContext,
    encoder: &mut wgpu::CommandEncoder,
    render_target: &wgpu::TextureView,
    frame: &OverlayFrame<'_>,
) {
    for (id, delta) in &frame.textures.set {
        renderer.update_texture(&context.device, &context.queue, *id, delta);
    }

    renderer.update_buffers(
        &context.device,
        &context.queue,
        encoder,
        frame.primitives,
        frame.screen,
    );

    {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("controls_overlay"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: render_target,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            ..Default::default()
        });

        renderer.render(&mut pass, frame.primitives, frame.screen);
    }

    for id in &frame.textures.free {
        renderer.free_texture(id);
    }
}
