//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four parts:
//!
//! - **[`app`]** — application state, keyboard event loop, replay of recorded frames
//! - **[`renderer`]** — [`TerminalRenderer`], the renderer handed to the sort engine
//! - **[`panes`]** — stateless render functions for the controls, the bar chart
//!   and the status bar
//! - **[`theme`]** — centralized color palette, including the bar role colors
//!
//! The entry point for consumers is [`App`]: construct it with a [`Session`] and
//! call [`App::run`] to start the event loop.
//!
//! [`Session`]: crate::session::Session
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod renderer;
pub mod theme;

pub use app::App;
pub use renderer::TerminalRenderer;
