mod obb_fixtures;
mod obb_properties;
mod point_buffers;
