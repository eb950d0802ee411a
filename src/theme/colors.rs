//! Color constants shared by the stylesheet and inline styles.
//!
//! Bright education palette: blue for the brand, indigo for gradients.

#![allow(dead_code)]

// === BRAND ===
pub const BLUE: &str = "#2563EB";
pub const BLUE_DARK: &str = "#1D4ED8";
pub const INDIGO: &str = "#4F46E5";

// === SURFACES ===
pub const WHITE: &str = "#FFFFFF";
pub const SLATE_50: &str = "#F8FAFC";
pub const SLATE_200: &str = "#E2E8F0";
pub const SLATE_800: &str = "#1E293B";
pub const SLATE_900: &str = "#0F172A";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#0F172A";
pub const TEXT_SECONDARY: &str = "#475569";
pub const TEXT_INVERSE: &str = "#F1F5F9";

// === SEMANTIC ===
pub const SUCCESS: &str = "#16A34A";
pub const DANGER: &str = "#DC2626";
pub const AMBER: &str = "#D97706";

// === CHART ===
pub const CHART_SCORE: &str = BLUE;
pub const CHART_ENGAGEMENT: &str = SUCCESS;
