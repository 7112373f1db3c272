mod component;

pub use component::VisionGraphCanvas;
