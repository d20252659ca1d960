pub mod panels;
pub mod report;
pub mod state;

#[cfg(test)]
mod tests;

pub use panels::{coaching_advice, render_dashboard, Panel};
pub use report::weekly_report;
pub use state::DashboardState;
