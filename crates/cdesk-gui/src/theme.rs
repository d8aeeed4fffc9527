//! Layout constants for consistent spacing throughout the form.
//!
//! All values are in pixels (f32) and follow a consistent scale.

/// Extra small spacing - tight gaps between a label and its input
pub const SPACING_XS: f32 = 4.0;

/// Small spacing - small gaps, icon margins
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing - default padding, gaps between fields
pub const SPACING_MD: f32 = 16.0;

/// Large spacing - window margins
pub const SPACING_LG: f32 = 24.0;

/// Large radius - modal dialogs
pub const BORDER_RADIUS_LG: f32 = 8.0;

/// Width of the outcome dialog box
pub const MODAL_WIDTH: f32 = 380.0;
