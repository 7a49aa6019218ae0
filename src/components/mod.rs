//! UI Components

mod bound_field;
mod edit_todo_modal;
mod new_todo_form;
mod notice;
mod todo_detail;
pub(crate) mod todo_row;

pub use bound_field::BoundField;
pub use edit_todo_modal::EditTodoModal;
pub use new_todo_form::NewTodoForm;
pub use notice::Notice;
pub use todo_detail::TodoDetail;
pub use todo_row::TodoRow;
