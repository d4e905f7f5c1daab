//! Layout constants and runtime configuration defaults

// Sizing of the motif map
/// Scale applied to every radius drawn from the size palette
pub const MOTIF_SIZE_MULTIPLIER: f64 = 1.0;
/// Ratio of canvas area to total circle area (>= 1.0, the smaller, the denser)
pub const MOTIF_DENSITY: f64 = 1.05;

// Placement jitter, applied as JITTER_SCALE * U(0, 1) * (clearance - radius) / JITTER_DIVISOR
/// Amplitude factor of the placement jitter
pub const JITTER_SCALE: f64 = 0.05;
/// Divisor applied to the spare clearance before jittering
pub const JITTER_DIVISOR: f64 = 100.0;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed clearance grid dimension along either axis
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Default values for configurable parameters
/// Fixed seed for reproducible layouts
pub const DEFAULT_SEED: u64 = 42;
/// Viewport width used when none is given
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1920.0;
/// Viewport height used when none is given
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 1080.0;
/// Pixels per canvas unit in layout previews
pub const DEFAULT_PREVIEW_SCALE: f64 = 0.25;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Suffix added to layout output filenames
pub const OUTPUT_SUFFIX: &str = "_layout";
/// Suffix added to preview image filenames
pub const PREVIEW_SUFFIX: &str = "_preview";
/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "motifmap=info";
/// Log filter used with `--quiet`
pub const QUIET_LOG_FILTER: &str = "motifmap=warn";
