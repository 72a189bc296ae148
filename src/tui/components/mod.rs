//! # TUI Components
//!
//! Every visible piece of the page is a component here.
//!
//! ## Stateless Components (Props-Based Rendering)
//!
//! - `Header`: name and subtitle across the top
//! - `Footer`: prompt text and the live clock
//! - `SnakeView`: game board plus status line
//!
//! ## Stateful Components
//!
//! - `TerminalView`: scrollback with a persisted `TerminalViewState`
//! - `IdCard`: writes its hit areas into `CardHits`
//! - `CoverPage`: writes the bulb's hit area while it is clickable
//!
//! Components receive what they show as fields ("props") rather than
//! reaching into `App`, so each can be rendered against a `TestBackend`
//! on its own.
//!
//! ```text
//! components/
//! ├── mod.rs
//! ├── header.rs
//! ├── footer.rs
//! ├── terminal_view.rs
//! ├── snake_view.rs
//! ├── id_card.rs
//! └── cover.rs
//! ```

pub mod cover;
pub mod footer;
pub mod header;
pub mod id_card;
pub mod snake_view;
pub mod terminal_view;

pub use cover::CoverPage;
pub use footer::{Footer, format_clock};
pub use header::Header;
pub use id_card::{CardHits, IdCard};
pub use snake_view::SnakeView;
pub use terminal_view::{TerminalView, TerminalViewState};
