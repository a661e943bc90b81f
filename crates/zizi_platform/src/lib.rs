//! Zizi Platform
//!
//! OS family detection and the platform signals the theme engine consumes:
//! host HiDPI awareness, the system message-box font, and the label font.

mod configurator;
mod error;
mod os;
mod signals;

pub use configurator::{configurator_for, Appearance, OsConfigurator, StartupHints};
pub use error::{PlatformError, Result};
pub use os::{OsFamily, PlatformInfo};
pub use signals::PlatformSignals;
