#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod components;
pub mod config;
pub mod error;
pub mod input;
pub mod panels;
pub mod shape;
pub mod surface;
pub mod tool;

pub use app::SketchApp;
pub use canvas::Canvas;
pub use config::CanvasConfig;
pub use error::{CanvasError, CanvasResult};
pub use input::{CanvasEvent, InputHandler, PointerSample};
pub use shape::{Drawable, Shape};
pub use surface::{PainterSurface, RecordingSurface, Surface};
pub use tool::ToolKind;
