pub mod clipboard;
pub mod color;
pub mod error;
pub mod export;
pub mod params;
pub mod synth;
pub mod widget;

#[cfg(not(target_arch = "wasm32"))]
pub mod server;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use clipboard::{Clipboard, CopyNotifier, CopyTarget, MemoryClipboard, COPY_FEEDBACK};
pub use color::Rgb;
pub use error::{GlassError, Result};
pub use params::{ParameterSet, Slider};
pub use synth::{synthesize, DerivedStyles, InlineStyle};
pub use widget::{GlassWidget, ParamPatch, Snapshot};
