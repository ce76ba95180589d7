//! Engine-wide constants.
//!
//! Centralizes magic numbers and fallback values so the interaction code,
//! the settings defaults and the tests all agree on them.

// ============================================================================
// Stamp Geometry
// ============================================================================

/// Minimum width and height of a stamp after any interactive resize
pub const MIN_STAMP_SIZE: f32 = 20.0;

/// Rotation of a freshly placed stamp, in degrees
pub const DEFAULT_ROTATION: f32 = 0.0;

/// Full turn in degrees, used when normalizing rotation for rendering
pub const FULL_TURN_DEGREES: f32 = 360.0;

// ============================================================================
// Handles
// ============================================================================

/// Side length of the square corner resize handles, in screen pixels
pub const HANDLE_SIZE: f32 = 10.0;

/// Distance of the rotate handle above the top edge of the stamp
pub const ROTATE_HANDLE_OFFSET: f32 = 25.0;

/// Radius of the circular rotate handle hit area
pub const ROTATE_HANDLE_RADIUS: f32 = 8.0;

// ============================================================================
// Fallback Input
// ============================================================================

/// Page width used when page metadata cannot be fetched (A4 in points)
pub const DEFAULT_PAGE_WIDTH: f32 = 595.0;

/// Page height used when page metadata cannot be fetched (A4 in points)
pub const DEFAULT_PAGE_HEIGHT: f32 = 842.0;

/// Page count used when page metadata cannot be fetched
pub const DEFAULT_PAGE_COUNT: u32 = 1;

/// Id of the placeholder asset substituted when the catalog is unavailable
pub const PLACEHOLDER_ASSET_ID: &str = "stamp_0";

/// Display name of the placeholder asset
pub const PLACEHOLDER_ASSET_NAME: &str = "stamp1.png";

/// Intrinsic size of the placeholder asset
pub const PLACEHOLDER_ASSET_SIZE: (f32, f32) = (100.0, 100.0);

// ============================================================================
// Apply
// ============================================================================

/// Suffix the backend gives the session that previews the stamped document
pub const SIGNED_PREVIEW_SUFFIX: &str = "_signed_preview";

// ============================================================================
// Timing
// ============================================================================

/// Pointer handlers slower than this are reported when profiling is on
pub const POINTER_BUDGET_MS: f64 = 16.67;
