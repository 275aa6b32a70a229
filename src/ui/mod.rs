/// View layer
///
/// - `row.rs` - one list row in display or edit mode
/// - `dialog.rs` - the modal add-item dialog

pub mod dialog;
pub mod row;
