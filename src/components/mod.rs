pub mod button;
pub mod header;
pub mod image;
pub mod input;
pub mod menu_icon;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use header::Header;
pub use image::Image;
pub use input::Input;
pub use menu_icon::MenuIcon;
