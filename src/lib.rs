#![no_std]

pub mod buffer;
pub mod color;
pub mod correction;
pub mod error;
pub mod gamma;
pub mod light;
pub mod math8;
pub mod partition;
pub mod transition;
pub mod view;

pub use buffer::{CorrectedBuffer, Pixel, PixelBuffer, PixelStore};
pub use color::{Channel, Color};
pub use correction::{ColorCorrection, CorrectionConfig};
pub use error::Error;
pub use gamma::GammaTable;
pub use light::{AddressableLight, AddressableLightConfig, LightValues, OutputDriver};
pub use partition::{Segment, SegmentPartition};
pub use transition::{AddressableFade, TransitionClock, ValueTransition};
pub use view::RangeView;

pub use embassy_time::{Duration, Instant};
