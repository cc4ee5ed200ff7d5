//! UI Components
//!
//! Leptos components making up the board.

mod color_picker;
mod container_card;
mod container_list;
mod notice_banner;
mod todo_row;

pub use color_picker::ColorPicker;
pub use container_card::ContainerCard;
pub use container_list::ContainerList;
pub use notice_banner::NoticeBanner;
pub use todo_row::TodoRow;
