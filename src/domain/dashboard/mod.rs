//! Dashboard value types exchanged with the landing page.

mod fallback;
pub mod state;
pub mod status;

pub use state::{
    Achievement, Alert, AlertType, DashboardState, PlatformStat, SentimentPoint, Trend,
};
pub use status::VibeStatus;
