// Interface adapters: the engine boundary and its headless implementation.

pub mod engine;
pub mod headless;
