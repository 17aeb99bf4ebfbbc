mod render_config;
mod renderer;
mod resources;

pub(crate) use renderer::Renderer;
