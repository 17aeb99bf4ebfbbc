use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::rendering::render_config::RenderConfig;
use crate::simulation::World;

// Per-body snapshot uploaded to the GPU each frame
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(crate) struct BodyInstance {
    pub position: [f32; 4], // xy = center in viewport units, z = radius, w = unused
    pub color: [f32; 4],    // rgba color
}

// Viewport dimensions for the world-to-clip transform in the shader
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(crate) struct ViewportUniform {
    pub size: [f32; 2],
    pub _padding: [f32; 2],
}

// GPU-side buffers fed from the simulation once per frame
pub(crate) struct FrameResources {
    pub bind_group: wgpu::BindGroup,
    instance_buffer: wgpu::Buffer,
    instances: Vec<BodyInstance>,
}

impl FrameResources {
    pub(crate) fn new(
        device: &wgpu::Device,
        render_config: &RenderConfig,
        world: &World,
    ) -> Self {
        let instances: Vec<BodyInstance> = snapshot(world).collect();

        let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Body Instance Buffer"),
            contents: bytemuck::cast_slice(&instances),
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
        });

        // The viewport is fixed for the process lifetime; written once.
        // The bind group keeps the buffer alive.
        let viewport = ViewportUniform {
            size: [world.config().width, world.config().height],
            _padding: [0.0; 2],
        };
        let viewport_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Viewport Buffer"),
            contents: bytemuck::cast_slice(&[viewport]),
            usage: wgpu::BufferUsages::UNIFORM,
        });

        let bind_group = render_config.create_bind_group(device, &instance_buffer, &viewport_buffer);

        Self {
            bind_group,
            instance_buffer,
            instances,
        }
    }

    /// Re-reads every body's position/radius/color and uploads the batch.
    pub(crate) fn update_bodies(&mut self, queue: &wgpu::Queue, world: &World) {
        self.instances.clear();
        self.instances.extend(snapshot(world));
        queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&self.instances));
    }
}

fn snapshot(world: &World) -> impl Iterator<Item = BodyInstance> + '_ {
    world
        .bodies
        .iter()
        .zip(&world.colors)
        .map(|(body, color)| BodyInstance {
            position: [body.position.x, body.position.y, body.radius, 0.0],
            color: *color,
        })
}
