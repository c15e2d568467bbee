//! tui-tree-prompt - pick a node from a rendered tree widget
//!
//! This crate glues two host widgets together:
//! - a `tui_tree_widget::Tree` is rendered off-screen into plain text lines
//! - the lines become the choices of a `dialoguer::Select` prompt
//!
//! Nothing is drawn or parsed here beyond splitting the rendered text on
//! newlines; tree layout, connector glyphs, and interactive selection are all
//! the host libraries' business.
//!
//! ```no_run
//! use tui_tree_prompt::{to_select_prompt, BufferRenderer, Console, TreeItem};
//!
//! # fn main() -> tui_tree_prompt::Result<()> {
//! let items = [TreeItem::new(
//!     "root".to_string(),
//!     "Root",
//!     vec![TreeItem::new_leaf("child".to_string(), "child")],
//! )?];
//!
//! let renderer = BufferRenderer::new(Console::detect()?)?;
//! let picked = to_select_prompt(&renderer, &items)?
//!     .with_prompt("Pick a node")
//!     .interact();
//! # Ok(())
//! # }
//! ```

pub mod console;
pub mod error;
pub mod render;
pub mod select;

// Re-export commonly used types
pub use console::Console;
pub use error::{Result, TreePromptError};
pub use render::{split_lines, BufferRenderer, RenderToText};
pub use select::{build_lines, to_select_prompt, PAGE_SIZE};

// Host widget types this crate glues together, for convenience.
pub use dialoguer::Select;
pub use tui_tree_widget::TreeItem;
