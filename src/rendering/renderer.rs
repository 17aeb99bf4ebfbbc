use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use winit::window::Window;

use crate::rendering::render_config::RenderConfig;
use crate::rendering::resources::FrameResources;
use crate::simulation::World;

/// Sleep-based pacing toward a fixed steps-per-second target, on top of
/// vsync presentation. Keeps the step rate at the configured value even
/// when the display refreshes faster or vsync is unavailable.
struct FrameLimiter {
    frame_budget: Duration,
    last_frame: Instant,
}

impl FrameLimiter {
    fn new(frame_rate: u32) -> Self {
        Self {
            frame_budget: Duration::from_secs(1) / frame_rate,
            last_frame: Instant::now(),
        }
    }

    /// Blocks until the current frame's budget has elapsed.
    fn wait(&mut self) {
        let elapsed = self.last_frame.elapsed();
        if elapsed < self.frame_budget {
            thread::sleep(self.frame_budget - elapsed);
        }
        self.last_frame = Instant::now();
    }
}

// Main renderer struct: owns the window surface, the GPU handles and the
// simulation it presents
pub(crate) struct Renderer {
    window: Arc<Window>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    size: winit::dpi::PhysicalSize<u32>,
    surface: wgpu::Surface<'static>,

    render_config: RenderConfig,
    resources: FrameResources,

    world: World,
    limiter: FrameLimiter,
}

impl Renderer {
    pub(crate) async fn new(window: Arc<Window>, world: World) -> Self {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions::default())
            .await
            .expect("no suitable GPU adapter found");
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: None,
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::Off,
            })
            .await
            .expect("failed to open GPU device");

        let size = window.inner_size();

        let surface = instance
            .create_surface(window.clone())
            .expect("failed to create surface");
        let cap = surface.get_capabilities(&adapter);
        let surface_format = cap.formats[0];

        let render_config = RenderConfig::new(&device, surface_format);
        let resources = FrameResources::new(&device, &render_config, &world);
        let limiter = FrameLimiter::new(world.config().frame_rate);

        let renderer = Self {
            window,
            device,
            queue,
            size,
            surface,
            render_config,
            resources,
            world,
            limiter,
        };

        // Configure surface for the first time
        renderer.configure_surface();

        renderer
    }

    pub(crate) fn get_window(&self) -> &Window {
        &self.window
    }

    fn configure_surface(&self) {
        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: self.render_config.surface_format,
            // Request compatibility with the sRGB-format texture view we're going to create later.
            view_formats: vec![self.render_config.surface_format.add_srgb_suffix()],
            alpha_mode: wgpu::CompositeAlphaMode::Auto,
            width: self.size.width,
            height: self.size.height,
            desired_maximum_frame_latency: 2,
            present_mode: wgpu::PresentMode::AutoVsync,
        };
        self.surface.configure(&self.device, &surface_config);
    }

    pub(crate) fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;

            // The simulation viewport is fixed; only the surface follows
            // the window.
            self.configure_surface();
        }
    }

    /// Runs one simulation step, then draws and presents the frame.
    pub(crate) fn render(&mut self) {
        self.world.step();
        self.resources.update_bodies(&self.queue, &self.world);

        // Create texture view
        let surface_texture = self
            .surface
            .get_current_texture()
            .expect("failed to acquire next swapchain texture");
        let texture_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor {
                format: Some(self.render_config.surface_format.add_srgb_suffix()),
                ..Default::default()
            });

        // Create command encoder
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Particle Command Encoder"),
            });

        // Render pass - draw the bodies over a black clear
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Particle Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &texture_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_pipeline(&self.render_config.render_pipeline);
            render_pass.set_bind_group(0, &self.resources.bind_group, &[]);

            // Draw 6 vertices (2 triangles) per body instance
            render_pass.draw(0..6, 0..self.world.bodies.len() as u32);
        }

        // Submit command buffer
        self.queue.submit([encoder.finish()]);
        self.window.pre_present_notify();
        surface_texture.present();

        self.limiter.wait();
    }
}
