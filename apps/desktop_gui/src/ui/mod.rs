//! UI layer for the portfolio window: app shell and terminal theme.

pub mod app;
pub mod theme;

pub use app::PortfolioApp;
