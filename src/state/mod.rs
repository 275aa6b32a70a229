/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - The in-memory shopping list (list.rs)
/// - The add-item dialog (dialog.rs)
/// - Quantity text parsing (quantity.rs)

pub mod data;
pub mod dialog;
pub mod list;
pub mod quantity;
