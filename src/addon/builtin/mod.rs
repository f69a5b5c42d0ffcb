//! Addons compiled into the binary
//!
//! Each registers its class with `addon_class!`; it is only constructed when a
//! matching directory is discovered on disk.

mod html;
mod text;

pub use html::{BlockPresenter, HtmlBlock};
pub use text::TextFieldType;
