//! Terminal presentation: capability detection, theme, report views and
//! CI annotations.

pub mod ci;
pub mod context;
pub mod output;
pub mod terminal;
pub mod theme;
pub mod views;
