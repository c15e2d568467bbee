//! Off-screen rendering of tree widgets into plain text lines.
//!
//! The host widget draws itself; this module only gives it a buffer to draw
//! into and reads the rows back. The seam is the [`RenderToText`] trait so the
//! conversion layer never depends on how the text was produced.

use std::hash::Hash;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::StatefulWidget;
use tui_tree_widget::{Tree, TreeItem, TreeState};

use crate::console::Console;
use crate::error::{Result, TreePromptError};

/// Narrow seam over the host library's text-rendering capability.
///
/// Production code uses [`BufferRenderer`]; tests substitute stubs to simulate
/// an incompatible or broken host renderer.
pub trait RenderToText<Identifier> {
    /// Render the tree to a single string with `\n` line separators and no
    /// trailing newline.
    fn render_text(&self, items: &[TreeItem<'_, Identifier>]) -> Result<String>;
}

/// Renders tree widgets through ratatui's off-screen [`Buffer`].
///
/// Owns the [`Console`] it renders against. Construction performs the
/// capability check up front: an unusable console or a host renderer that
/// produces nothing for a probe tree fails with
/// [`TreePromptError::MissingCapability`] before any conversion can run.
#[derive(Debug, Clone)]
pub struct BufferRenderer {
    console: Console,
}

impl BufferRenderer {
    pub fn new(console: Console) -> Result<Self> {
        if console.width() == 0 {
            return Err(TreePromptError::MissingCapability(
                "console reports zero width".into(),
            ));
        }

        // Probe the whole pipeline once with a one-leaf tree.
        let probe = [TreeItem::new_leaf("probe".to_string(), "probe")];
        let text = render_items(&console, &probe)?;
        if text.is_empty() {
            return Err(TreePromptError::MissingCapability(
                "host renderer produced no output for a probe tree".into(),
            ));
        }

        Ok(Self { console })
    }

    /// The console this renderer draws against.
    pub fn console(&self) -> Console {
        self.console
    }
}

impl<Identifier> RenderToText<Identifier> for BufferRenderer
where
    Identifier: Clone + Default + PartialEq + Eq + Hash,
{
    fn render_text(&self, items: &[TreeItem<'_, Identifier>]) -> Result<String> {
        let text = render_items(&self.console, items)?;
        if text.is_empty() {
            // A tree with at least one node always renders to at least one
            // line, so nothing here means the host broke its contract.
            return Err(TreePromptError::EmptyRender);
        }

        tracing::debug!(
            width = self.console.width(),
            bytes = text.len(),
            "rendered tree to text"
        );
        Ok(text)
    }
}

/// Render the tree fully expanded into a buffer and read the rows back.
fn render_items<Identifier>(console: &Console, items: &[TreeItem<'_, Identifier>]) -> Result<String>
where
    Identifier: Clone + Default + PartialEq + Eq + Hash,
{
    if items.is_empty() {
        return Ok(String::new());
    }

    let tree = Tree::new(items)?;

    let mut state = TreeState::default();
    open_all(&mut state, items, &mut Vec::new());

    let height = u16::try_from(total_height(items)).unwrap_or(u16::MAX);
    // Not Rect::new: that caps the cell count at u16::MAX, which would drop
    // the bottom rows of a tall tree on a wide console.
    let area = Rect {
        x: 0,
        y: 0,
        width: console.width(),
        height,
    };
    let mut buffer = Buffer::empty(area);
    StatefulWidget::render(tree, area, &mut buffer, &mut state);

    let mut rows = Vec::with_capacity(area.height as usize);
    for y in 0..area.height {
        let mut row = String::new();
        for x in 0..area.width {
            row.push_str(buffer[(x, y)].symbol());
        }
        rows.push(row.trim_end().to_string());
    }

    // The buffer is sized from the item heights; anything blank at the bottom
    // is padding, not tree content.
    while rows.last().is_some_and(|row| row.is_empty()) {
        rows.pop();
    }

    Ok(rows.join("\n"))
}

/// Mark every branch node as open so the host draws the full hierarchy.
fn open_all<Identifier>(
    state: &mut TreeState<Identifier>,
    items: &[TreeItem<'_, Identifier>],
    path: &mut Vec<Identifier>,
) where
    Identifier: Clone + PartialEq + Eq + Hash,
{
    for item in items {
        if item.children().is_empty() {
            continue;
        }
        path.push(item.identifier().clone());
        state.open(path.clone());
        open_all(state, item.children(), path);
        path.pop();
    }
}

/// Rows the fully expanded tree occupies.
fn total_height<Identifier>(items: &[TreeItem<'_, Identifier>]) -> usize
where
    Identifier: Clone + PartialEq + Eq + Hash,
{
    items
        .iter()
        .map(|item| item.height() + total_height(item.children()))
        .sum()
}

/// Split rendered text into choice lines.
///
/// Splits on `\n` and strips one trailing `\r` per segment so CRLF-terminated
/// output yields the same lines as LF output. Order is preserved. A final
/// newline in the input yields a trailing empty line; callers get exactly the
/// segments the renderer produced.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}
