//! Pagination UI component builders (page select menu and previous/next buttons).

use tracing::warn;
use twilight_model::channel::message::component::{
    ActionRow, Button, ButtonStyle, Component, SelectMenu, SelectMenuOption, SelectMenuType,
};

use super::MAX_SELECT_OPTIONS;
use super::control::{NEXT_CONTROL, PREVIOUS_CONTROL, SELECT_CONTROL};

/// Build the navigation rows for the page at `current_index`.
///
/// Returns no rows for a single page. Callers must keep `total_pages` within
/// [`MAX_SELECT_OPTIONS`]; the menu is never truncated here.
pub fn build_pagination_rows(current_index: usize, total_pages: usize) -> Vec<Component> {
    if total_pages <= 1 {
        return vec![];
    }

    if total_pages > MAX_SELECT_OPTIONS {
        warn!(
            total_pages,
            max = MAX_SELECT_OPTIONS,
            "page select menu exceeds the platform option limit"
        );
    }

    let options = (0..total_pages)
        .map(|index| SelectMenuOption {
            default: index == current_index,
            description: None,
            emoji: None,
            label: format!("Page {}", index + 1),
            value: index.to_string(),
        })
        .collect();

    let select_menu = SelectMenu {
        id: None,
        channel_types: None,
        custom_id: SELECT_CONTROL.to_owned(),
        default_values: None,
        disabled: false,
        kind: SelectMenuType::Text,
        max_values: Some(1),
        min_values: Some(1),
        options: Some(options),
        placeholder: None,
        required: None,
    };

    let previous_button = nav_button(PREVIOUS_CONTROL, "◀ Prev");
    let next_button = nav_button(NEXT_CONTROL, "Next ▶");

    vec![
        Component::ActionRow(ActionRow {
            id: None,
            components: vec![Component::SelectMenu(select_menu)],
        }),
        Component::ActionRow(ActionRow {
            id: None,
            components: vec![
                Component::Button(previous_button),
                Component::Button(next_button),
            ],
        }),
    ]
}

fn nav_button(custom_id: &str, label: &str) -> Button {
    Button {
        id: None,
        custom_id: Some(custom_id.to_owned()),
        disabled: false,
        emoji: None,
        label: Some(label.to_owned()),
        style: ButtonStyle::Secondary,
        url: None,
        sku_id: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select_options(rows: &[Component]) -> Vec<SelectMenuOption> {
        let Some(Component::ActionRow(row)) = rows.first() else {
            panic!("expected a select row first");
        };
        let Some(Component::SelectMenu(menu)) = row.components.first() else {
            panic!("expected a select menu");
        };
        menu.options.clone().unwrap_or_default()
    }

    #[test]
    fn single_page_gets_no_controls() {
        assert!(build_pagination_rows(0, 1).is_empty());
    }

    #[test]
    fn menu_lists_every_page_and_marks_the_current_one() {
        let rows = build_pagination_rows(3, 5);
        assert_eq!(rows.len(), 2);

        let options = select_options(&rows);
        let labels: Vec<&str> = options.iter().map(|option| option.label.as_str()).collect();
        assert_eq!(labels, ["Page 1", "Page 2", "Page 3", "Page 4", "Page 5"]);

        let defaults: Vec<&str> = options
            .iter()
            .filter(|option| option.default)
            .map(|option| option.value.as_str())
            .collect();
        assert_eq!(defaults, ["3"]);
    }

    #[test]
    fn button_row_holds_previous_then_next() {
        let rows = build_pagination_rows(0, 2);
        let Some(Component::ActionRow(row)) = rows.get(1) else {
            panic!("expected a button row second");
        };

        let ids: Vec<Option<&str>> = row
            .components
            .iter()
            .map(|component| match component {
                Component::Button(button) => button.custom_id.as_deref(),
                _ => None,
            })
            .collect();
        assert_eq!(ids, [Some(PREVIOUS_CONTROL), Some(NEXT_CONTROL)]);
    }

    #[test]
    fn oversized_menus_are_not_truncated() {
        let rows = build_pagination_rows(0, MAX_SELECT_OPTIONS + 3);
        assert_eq!(select_options(&rows).len(), MAX_SELECT_OPTIONS + 3);
    }
}
