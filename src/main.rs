//! Flightcam - flight-style camera demo
//!
//! Drives the flight camera from a winit window: WASD throttle/rudder, mouse
//! look with a confined cursor, telemetry on the log instead of an on-screen
//! HUD.

use std::path::Path;
use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowId},
};

use flightcam::core::{
    Error,
    camera::Camera,
    config::FlightConfig,
    flight::FlightCamera,
    input::InputState,
    logging,
    time::FrameTimer,
};

/// Seconds between telemetry log lines
const HUD_INTERVAL_SECS: f32 = 0.5;

struct App {
    window: Option<Arc<Window>>,
    input: InputState,
    flight: FlightCamera,
    timer: FrameTimer,
    cursor_grabbed: bool,
    /// Half the window size in pixels, for normalizing raw mouse deltas
    half_extent: (f32, f32),
    hud_timer: f32,
}

impl App {
    fn new(config: FlightConfig) -> Self {
        let camera = Camera::new(config.start_position());
        Self {
            window: None,
            input: InputState::new(),
            flight: FlightCamera::new(camera, config),
            timer: FrameTimer::new(),
            cursor_grabbed: false,
            half_extent: (540.0, 360.0),
            hud_timer: 0.0,
        }
    }

    fn toggle_cursor_grab(&mut self) {
        if let Some(window) = &self.window {
            self.cursor_grabbed = !self.cursor_grabbed;

            if self.cursor_grabbed {
                window
                    .set_cursor_grab(CursorGrabMode::Confined)
                    .or_else(|_| window.set_cursor_grab(CursorGrabMode::Locked))
                    .ok();
                window.set_cursor_visible(false);
            } else {
                window.set_cursor_grab(CursorGrabMode::None).ok();
                window.set_cursor_visible(true);
            }

            self.input.set_captured(self.cursor_grabbed);
        }
    }

    fn log_telemetry(&mut self, dt: f32) {
        self.hud_timer += dt;
        if self.hud_timer < HUD_INTERVAL_SECS {
            return;
        }
        self.hud_timer = 0.0;

        let t = self.flight.telemetry();
        log::info!(
            "Throttle: {:.2} | MdX: {:.2}, MdY: {:.2}",
            t.throttle_percent,
            t.mouse_dx,
            t.mouse_dy
        );
        log::info!(
            "Heading: {:.2}, Pitch: {:.2}, Roll: {:.2}",
            t.heading,
            t.pitch,
            t.roll
        );
        log::info!("Coordinates: ({:.2}, {:.2})", t.position[0], t.position[1]);

        if let Some(window) = &self.window {
            window.set_title(&format!(
                "Controls Demo - {:.1} FPS | WASD=fly, mouse=look, Tab=mouse, Esc=exit",
                self.timer.fps()
            ));
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let attributes = Window::default_attributes()
                .with_title("Controls Demo")
                .with_inner_size(PhysicalSize::new(1080, 720));

            match event_loop.create_window(attributes) {
                Ok(window) => {
                    let window = Arc::new(window);
                    let size = window.inner_size();
                    self.half_extent = (
                        (size.width as f32 / 2.0).max(1.0),
                        (size.height as f32 / 2.0).max(1.0),
                    );
                    window.request_redraw();
                    self.window = Some(window);
                    self.toggle_cursor_grab();
                }
                Err(e) => {
                    log::error!("Failed to create window: {}", e);
                    event_loop.exit();
                }
            }
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
                log::info!("Window close requested");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                self.half_extent = (
                    (size.width as f32 / 2.0).max(1.0),
                    (size.height as f32 / 2.0).max(1.0),
                );
            }
            WindowEvent::RedrawRequested => {
                self.timer.tick();
                let dt = self.timer.delta_secs();

                self.flight.update(&mut self.input, dt);
                self.log_telemetry(dt);

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            other => {
                if let WindowEvent::KeyboardInput { event: key, .. } = &other {
                    if key.state.is_pressed() {
                        match key.physical_key {
                            PhysicalKey::Code(KeyCode::Escape) => {
                                event_loop.exit();
                                return;
                            }
                            PhysicalKey::Code(KeyCode::Tab) => self.toggle_cursor_grab(),
                            _ => {}
                        }
                    }
                }
                self.input.process_event(&other);
            }
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            // Normalized window units: one half-window of travel is 1.0,
            // matching the gains in FlightConfig.
            self.input.push_mouse_delta(
                delta.0 as f32 / self.half_extent.0,
                delta.1 as f32 / self.half_extent.1,
            );
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn run(config: FlightConfig) -> flightcam::core::Result<()> {
    let event_loop = EventLoop::new()
        .map_err(|e| Error::Window(format!("Failed to create event loop: {}", e)))?;

    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);

    event_loop
        .run_app(&mut app)
        .map_err(|e| Error::Window(format!("Event loop error: {}", e)))?;

    Ok(())
}

fn log_instructions() {
    log::info!("Controls: WASD & Mouse | ESC to exit");
    log::info!("> Mouse left-right: ailerons (roll)");
    log::info!("> Mouse up-down: elevators (pitch)");
    log::info!("> W & S: throttle");
    log::info!("> A & D: rudder (yaw)");
    log::info!("> Tab: toggle mouse capture");
}

/// Parse --config argument from command line
fn parse_config_arg(args: &[String]) -> Option<String> {
    for i in 0..args.len() {
        if args[i] == "--config" || args[i] == "-c" {
            if let Some(path) = args.get(i + 1) {
                return Some(path.clone());
            }
        }
    }
    None
}

fn main() {
    logging::init();
    log::info!("flightcam starting...");

    let args: Vec<String> = std::env::args().collect();
    let config = match parse_config_arg(&args) {
        Some(path) => match FlightConfig::load(Path::new(&path)) {
            Ok(config) => {
                log::info!("Loaded flight config from {}", path);
                config
            }
            Err(e) => {
                log::error!("Failed to load config: {}", e);
                std::process::exit(1);
            }
        },
        None => FlightConfig::default(),
    };

    log_instructions();

    if let Err(e) = run(config) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
