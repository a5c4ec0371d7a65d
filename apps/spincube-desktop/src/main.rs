use anyhow::{Context, Result};
use clap::Parser;
use spincube_math::to_rad;
use spincube_render::{DebugTextRenderer, Renderer, SceneView, Spin};
use spincube_render_wgpu::{CubeRenderer, acquire_device};
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

#[derive(Parser)]
#[command(name = "spincube", about = "Rotating colored cube demo")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Seconds per full revolution of the cube
    #[arg(long, default_value_t = 6.0, value_parser = parse_period)]
    period: f32,

    /// Vertical field of view in degrees
    #[arg(long, default_value_t = 45.0)]
    fov: f32,

    /// Window width in pixels
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Print N frames as text to stdout instead of opening a window
    #[arg(long, value_name = "FRAMES")]
    headless: Option<u32>,
}

fn parse_period(s: &str) -> Result<f32, String> {
    let secs: f32 = s.parse().map_err(|e| format!("{e}"))?;
    if secs.is_finite() && secs > 0.0 {
        Ok(secs)
    } else {
        Err("period must be a positive number of seconds".into())
    }
}

/// Windowed application state. GPU resources stay `None` until `resumed`.
struct CubeApp {
    spin: Spin,
    view: SceneView,
    started: Instant,
    window: Option<Arc<Window>>,
    surface: Option<wgpu::Surface<'static>>,
    device: Option<wgpu::Device>,
    queue: Option<wgpu::Queue>,
    config: Option<wgpu::SurfaceConfiguration>,
    renderer: Option<CubeRenderer>,
    initial_size: PhysicalSize<u32>,
}

impl CubeApp {
    fn new(cli: &Cli) -> Self {
        let view = SceneView {
            fov_y: to_rad(cli.fov),
            ..SceneView::default()
        };
        Self {
            spin: Spin::new(cli.period),
            view,
            started: Instant::now(),
            window: None,
            surface: None,
            device: None,
            queue: None,
            config: None,
            renderer: None,
            initial_size: PhysicalSize::new(cli.width.max(1), cli.height.max(1)),
        }
    }

    fn init_gpu(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title("spincube")
            .with_inner_size(self.initial_size);
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("create window")?,
        );

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .context("create rendering surface")?;

        let (adapter, device, queue) = acquire_device(&instance, &surface)?;

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        self.view.set_aspect(size.width, size.height);

        let renderer = CubeRenderer::new(&device, surface_format, size.width, size.height, &self.view)?;

        self.window = Some(window);
        self.surface = Some(surface);
        self.device = Some(device);
        self.queue = Some(queue);
        self.config = Some(config);
        self.renderer = Some(renderer);

        Ok(())
    }

    fn redraw(&mut self) {
        let elapsed = self.started.elapsed().as_secs_f64();
        self.spin.update(elapsed);

        let (Some(surface), Some(device), Some(queue)) =
            (&self.surface, &self.device, &self.queue)
        else {
            return;
        };

        let output = match surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                if let Some(config) = &self.config {
                    surface.configure(device, config);
                }
                return;
            }
            Err(e) => {
                tracing::error!("surface error: {e}");
                return;
            }
        };

        let target = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        if let Some(renderer) = &self.renderer {
            renderer.render(device, queue, &target, self.spin.world());
        }

        output.present();
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for CubeApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init_gpu(event_loop) {
            tracing::error!("this system cannot run the demo: {e:#}");
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let (Some(surface), Some(device), Some(queue), Some(config)) = (
                    &self.surface,
                    &self.device,
                    &self.queue,
                    &mut self.config,
                ) {
                    config.width = new_size.width.max(1);
                    config.height = new_size.height.max(1);
                    surface.configure(device, config);
                    self.view.set_aspect(config.width, config.height);
                    if let Some(renderer) = &mut self.renderer {
                        renderer.resize(device, queue, config.width, config.height, &self.view);
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                self.redraw();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Render `frames` frames as text at a synthetic 60 fps. Needs no GPU.
fn run_headless(cli: &Cli, frames: u32) {
    let mut spin = Spin::new(cli.period);
    let view = SceneView {
        fov_y: to_rad(cli.fov),
        ..SceneView::default()
    };
    let renderer = DebugTextRenderer::new();

    for frame in 0..frames {
        let t = f64::from(frame) / 60.0;
        spin.update(t);
        print!("{}", renderer.render(&spin, &view, t));
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    if let Some(frames) = cli.headless {
        run_headless(&cli, frames);
        return Ok(());
    }

    tracing::info!("spincube starting");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = CubeApp::new(&cli);
    event_loop.run_app(&mut app)?;

    Ok(())
}
