//! 可复用 UI 组件

mod button;
mod input_field;
mod popup;

pub use button::Button;
pub use input_field::InputField;
pub use popup::Popup;
