use log::Level;

pub const BRAND: &str = "TA Quant";
pub const BRAND_MARK: &str = "TA";

pub const HELLO_EMAIL: &str = "hello@taquant.io";
pub const SALES_EMAIL: &str = "sales@taquant.io";
pub const PARTNERS_EMAIL: &str = "partners@taquant.io";
pub const WISHLIST_EMAIL: &str = "wishlist@taquant.io";
pub const CAREERS_EMAIL: &str = "careers@taquant.io";

/// How long a submitted form shows its acknowledgement before clearing.
pub const SUBMIT_ACK_MS: u32 = 3000;
/// How long the copy button reads "Copied".
pub const COPY_ACK_MS: u32 = 2000;
/// Window scroll offset after which the navbar switches to its solid style.
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;
/// Elements reveal once they are this far inside the viewport.
pub const IN_VIEW_MARGIN_PX: f64 = 50.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
