//! Core application state and lifecycle.

use std::sync::Arc;

use thiserror::Error;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

use crate::ui::{render_ui, UiState};

/// Errors raised while bringing up the window and GPU surface.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("no suitable GPU adapter: {0}")]
    RequestAdapter(#[from] wgpu::RequestAdapterError),
    #[error("failed to acquire GPU device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
}

/// Window configuration for the demo shell.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Window title.
    pub title: String,
    /// Initial logical width.
    pub width: u32,
    /// Initial logical height.
    pub height: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "StarInk".to_string(),
            width: 960,
            height: 640,
        }
    }
}

struct AppState {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    surface_config: wgpu::SurfaceConfiguration,
    device: wgpu::Device,
    queue: wgpu::Queue,

    // egui
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,

    ui_state: UiState,
}

/// The demo application.
pub struct App {
    config: AppConfig,
    state: Option<AppState>,
}

impl App {
    /// Create the application with the default window configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create the application with a custom window configuration.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Run the demo application until the window is closed.
    pub fn run() -> Result<(), ShellError> {
        let event_loop = EventLoop::new()?;
        let mut app = Self::new();
        event_loop.run_app(&mut app)?;
        Ok(())
    }

    /// Finish initialization once the window exists.
    fn init_state(&self, window: Arc<Window>) -> Result<AppState, ShellError> {
        let size = window.inner_size();
        let (width, height) = if size.width == 0 || size.height == 0 {
            (self.config.width, self.config.height)
        } else {
            (size.width, size.height)
        };

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance.create_surface(window.clone())?;
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::LowPower,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))?;
        let (device, queue) =
            pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor::default()))?;

        let capabilities = surface.get_capabilities(&adapter);
        let format = capabilities
            .formats
            .iter()
            .copied()
            .find(|format| format.is_srgb())
            .or_else(|| capabilities.formats.first().copied())
            .unwrap_or(wgpu::TextureFormat::Bgra8UnormSrgb);
        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: capabilities
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);

        // Initialize egui
        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer =
            egui_wgpu::Renderer::new(&device, format, egui_wgpu::RendererOptions::default());

        log::info!("StarInk initialized - {}x{}", width, height);

        Ok(AppState {
            window,
            surface,
            surface_config,
            device,
            queue,
            egui_ctx,
            egui_state,
            egui_renderer,
            ui_state: UiState::default(),
        })
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        log::info!("Creating window...");

        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                log::error!("Failed to create window: {err}");
                event_loop.exit();
                return;
            }
        };

        match self.init_state(window.clone()) {
            Ok(state) => {
                self.state = Some(state);
                window.request_redraw();
            }
            Err(err) => {
                log::error!("Failed to initialize GPU shell: {err}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(state) = self.state.as_mut() else {
            return;
        };

        // Let egui process the event first.
        let egui_response = state.egui_state.on_window_event(&state.window, &event);
        if egui_response.repaint {
            state.window.request_redraw();
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width == 0 || size.height == 0 {
                    return;
                }
                state.surface_config.width = size.width;
                state.surface_config.height = size.height;
                state.surface.configure(&state.device, &state.surface_config);
                state.window.request_redraw();
            }

            WindowEvent::RedrawRequested => {
                let egui_input = state.egui_state.take_egui_input(&state.window);
                let egui_output = state.egui_ctx.run(egui_input, |ctx| {
                    render_ui(ctx, &mut state.ui_state);
                });
                state
                    .egui_state
                    .handle_platform_output(&state.window, egui_output.platform_output);
                let egui_primitives = state
                    .egui_ctx
                    .tessellate(egui_output.shapes, egui_output.pixels_per_point);

                let surface_texture = match state.surface.get_current_texture() {
                    Ok(texture) => texture,
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        state.surface.configure(&state.device, &state.surface_config);
                        state.window.request_redraw();
                        return;
                    }
                    Err(err) => {
                        log::error!("Failed to acquire frame: {err}");
                        return;
                    }
                };
                let surface_view = surface_texture
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());

                // Update egui textures
                for (id, image_delta) in &egui_output.textures_delta.set {
                    state
                        .egui_renderer
                        .update_texture(&state.device, &state.queue, *id, image_delta);
                }

                let screen_descriptor = egui_wgpu::ScreenDescriptor {
                    size_in_pixels: [state.surface_config.width, state.surface_config.height],
                    pixels_per_point: egui_output.pixels_per_point,
                };

                let mut encoder =
                    state
                        .device
                        .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                            label: Some("starink encoder"),
                        });

                state.egui_renderer.update_buffers(
                    &state.device,
                    &state.queue,
                    &mut encoder,
                    &egui_primitives,
                    &screen_descriptor,
                );

                {
                    let render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                        label: Some("starink render pass"),
                        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                            view: &surface_view,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(wgpu::Color {
                                    r: 0.975,
                                    g: 0.975,
                                    b: 0.985,
                                    a: 1.0,
                                }),
                                store: wgpu::StoreOp::Store,
                            },
                            depth_slice: None,
                        })],
                        depth_stencil_attachment: None,
                        timestamp_writes: None,
                        occlusion_query_set: None,
                    });

                    // Use forget_lifetime to satisfy egui-wgpu's 'static requirement
                    let mut render_pass = render_pass.forget_lifetime();
                    state
                        .egui_renderer
                        .render(&mut render_pass, &egui_primitives, &screen_descriptor);
                }

                state.queue.submit(std::iter::once(encoder.finish()));

                // Free egui textures
                for id in &egui_output.textures_delta.free {
                    state.egui_renderer.free_texture(id);
                }
                surface_texture.present();

                // Keep animating while egui has pending repaints (pulses).
                if state.egui_ctx.has_requested_repaint() {
                    state.window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.title, "StarInk");
        assert!(config.width > 0 && config.height > 0);
    }
}
