//! UI components for the gallery window.

mod card_grid;
mod detail_modal;
mod filter_bar;
mod resource_card;
mod upload_form;

pub use card_grid::CardGrid;
pub use detail_modal::DetailModal;
pub use filter_bar::FilterBar;
pub use resource_card::ResourceCard;
pub use upload_form::UploadPanel;
