//! End-to-end tests: tree widget in, selection choices out.

use tui_tree_prompt::{
    build_lines, to_select_prompt, BufferRenderer, Console, TreeItem, TreePromptError,
};

fn renderer() -> BufferRenderer {
    BufferRenderer::new(Console::new(60)).unwrap()
}

#[test]
fn single_root_yields_one_choice() {
    let items = [TreeItem::new_leaf("root".to_string(), "Root")];

    let lines = build_lines(&renderer(), &items).unwrap();

    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("Root"));
}

#[test]
fn root_with_two_children_yields_three_choices_in_order() {
    let items = [TreeItem::new(
        "root".to_string(),
        "Root",
        vec![
            TreeItem::new_leaf("first".to_string(), "first child"),
            TreeItem::new_leaf("second".to_string(), "second child"),
        ],
    )
    .unwrap()];

    let lines = build_lines(&renderer(), &items).unwrap();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("Root"));
    assert!(lines[1].contains("first child"));
    assert!(lines[2].contains("second child"));
}

#[test]
fn deep_nesting_keeps_top_to_bottom_order() {
    let items = [TreeItem::new(
        "a".to_string(),
        "a",
        vec![TreeItem::new(
            "b".to_string(),
            "b",
            vec![TreeItem::new_leaf("c".to_string(), "c")],
        )
        .unwrap()],
    )
    .unwrap()];

    let lines = build_lines(&renderer(), &items).unwrap();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains('a'));
    assert!(lines[1].contains('b'));
    assert!(lines[2].contains('c'));
}

#[test]
fn choice_count_is_stable_across_renders() {
    let items = [TreeItem::new(
        "root".to_string(),
        "Root",
        vec![
            TreeItem::new_leaf("a".to_string(), "alpha"),
            TreeItem::new_leaf("b".to_string(), "beta"),
        ],
    )
    .unwrap()];

    let renderer = renderer();
    let first = build_lines(&renderer, &items).unwrap();
    let second = build_lines(&renderer, &items).unwrap();

    assert_eq!(first, second);
}

#[test]
fn prompt_construction_succeeds_for_populated_tree() {
    let items = [TreeItem::new(
        "root".to_string(),
        "Root",
        vec![TreeItem::new_leaf("child".to_string(), "child")],
    )
    .unwrap()];

    assert!(to_select_prompt(&renderer(), &items).is_ok());
}

#[test]
fn tall_tree_on_wide_console_keeps_one_choice_per_node() {
    // 700 rows at width 100 exceeds u16::MAX cells; every row must survive.
    let items: Vec<TreeItem<String>> = (0..700)
        .map(|i| TreeItem::new_leaf(i.to_string(), format!("node {i}")))
        .collect();

    let renderer = BufferRenderer::new(Console::new(100)).unwrap();
    let lines = build_lines(&renderer, &items).unwrap();

    assert_eq!(lines.len(), 700);
    assert!(lines[0].contains("node 0"));
    assert!(lines[699].contains("node 699"));
}

#[test]
fn unusable_console_fails_before_any_prompt_exists() {
    let err = BufferRenderer::new(Console::new(0)).unwrap_err();
    assert!(matches!(err, TreePromptError::MissingCapability(_)));
}

#[test]
fn narrow_console_still_yields_one_choice_per_row() {
    // Labels wider than the console get truncated by the host renderer, but
    // the row count must not change.
    let items = [TreeItem::new(
        "root".to_string(),
        "a rather long root label",
        vec![TreeItem::new_leaf(
            "child".to_string(),
            "an even longer child label",
        )],
    )
    .unwrap()];

    let renderer = BufferRenderer::new(Console::new(10)).unwrap();
    let lines = build_lines(&renderer, &items).unwrap();

    assert_eq!(lines.len(), 2);
}
