mod hello_world;

pub use hello_world::*;
