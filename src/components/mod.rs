mod color_button;

pub use color_button::ColorButton;
