//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `TitleBar`: App name, status message, loading spinner
//! - `Controls`: Active genre filter and sort mode
//! - `PaginationBar`: Prev / numbered pages / Next
//! - `DetailModal`: Overlay for the selected podcast
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `SearchBar`: Title search input
//! - `PodcastList`: Cards on the current page with a highlighted selection
//!
//! Components receive external data as props, never by reaching into `App`
//! directly, so every one of them can be rendered on a `TestBackend`.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_bar.rs      (Top status bar)
//! ├── search_bar.rs     (Search input)
//! ├── controls.rs       (Genre + sort strip, genre cycling)
//! ├── podcast_list.rs   (Current page of cards)
//! ├── pagination_bar.rs (Page buttons)
//! └── detail_modal.rs   (Podcast detail overlay)
//! ```

pub mod controls;
pub mod detail_modal;
pub mod pagination_bar;
pub mod podcast_list;
pub mod search_bar;
mod title_bar;

pub use controls::Controls;
pub use detail_modal::DetailModal;
pub use pagination_bar::PaginationBar;
pub use podcast_list::{PodcastList, PodcastListState};
pub use search_bar::{SearchBar, SearchEvent};
pub use title_bar::TitleBar;
