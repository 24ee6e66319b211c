pub mod theme;
pub mod widgets;

pub use widgets::post_list::PostRow;
pub use widgets::toast::{ToastLevel, ToastMessage};
