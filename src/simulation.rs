pub(crate) mod body;
pub(crate) mod boundary;
pub(crate) mod collision;
pub(crate) mod world;

pub(crate) use world::{World, WorldConfig};
