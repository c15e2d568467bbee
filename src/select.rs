//! Conversion from rendered tree lines into a dialoguer selection prompt.

use dialoguer::Select;
use tui_tree_widget::TreeItem;

use crate::error::Result;
use crate::render::{split_lines, RenderToText};

/// Entries shown per page of the produced prompt, regardless of tree size.
pub const PAGE_SIZE: usize = 30;

/// Render the tree and split the text into its choice lines.
///
/// The lines equal the rendered text split on `\n` (minus trailing `\r`), in
/// top-to-bottom render order. Never empty: a tree with at least one node
/// renders to at least one line, and an empty or unrenderable tree is an
/// error from the renderer instead.
pub fn build_lines<Identifier, R>(
    renderer: &R,
    items: &[TreeItem<'_, Identifier>],
) -> Result<Vec<String>>
where
    R: RenderToText<Identifier> + ?Sized,
{
    let text = renderer.render_text(items)?;
    Ok(split_lines(&text))
}

/// Turn a tree widget into a [`Select`] prompt over its rendered lines.
///
/// The prompt pages at [`PAGE_SIZE`] entries and is returned unshown; the
/// caller owns it and may configure it further (prompt title, default index)
/// before calling `interact()`. Renderer failures propagate before any prompt
/// is constructed.
pub fn to_select_prompt<Identifier, R>(
    renderer: &R,
    items: &[TreeItem<'_, Identifier>],
) -> Result<Select<'static>>
where
    R: RenderToText<Identifier> + ?Sized,
{
    let choices = build_lines(renderer, items)?;

    tracing::debug!(
        choices = choices.len(),
        page_size = PAGE_SIZE,
        "built selection prompt from tree"
    );

    Ok(Select::new().items(&choices).max_length(PAGE_SIZE))
}
