//! Text field and checkbox rendering.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::text_input_state::TextInputState;

use super::styles;

const CHECKED: &str = "[x]";
const UNCHECKED: &str = "[ ]";

/// Renders a bordered single-line input. Places the terminal cursor when focused.
pub fn render_text_field(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    placeholder: &str,
    input: &TextInputState,
    is_focused: bool,
    base_style: Style,
) {
    let border_style = if is_focused {
        styles::focused_border_style()
    } else {
        styles::unfocused_border_style()
    };

    let cursor_column = input.width_before_cursor().min(u16::MAX as usize) as u16;
    let offset = horizontal_offset(cursor_column, area.width.saturating_sub(2));

    let paragraph = Paragraph::new(build_field_line(input, placeholder, is_focused))
        .style(base_style)
        .scroll((0, offset))
        .block(
            Block::default()
                .title(title.to_owned())
                .borders(Borders::ALL)
                .border_style(border_style),
        );

    frame.render_widget(paragraph, area);

    if is_focused {
        let cursor_x = area
            .x
            .saturating_add(1)
            .saturating_add(cursor_column - offset);
        let cursor_y = area.y.saturating_add(1);
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

pub fn checkbox_line(label: &str, checked: bool, is_focused: bool) -> Line<'static> {
    let mark = if checked { CHECKED } else { UNCHECKED };
    let style = if is_focused {
        styles::focused_button_style()
    } else {
        Style::default()
    };

    Line::from(Span::styled(format!("{mark} {label}"), style))
}

/// Columns to skip so the cursor stays inside a field `inner_width` wide.
fn horizontal_offset(cursor_column: u16, inner_width: u16) -> u16 {
    cursor_column.saturating_sub(inner_width.saturating_sub(1))
}

/// Placeholder only shows on an empty, unfocused field.
fn build_field_line(input: &TextInputState, placeholder: &str, is_focused: bool) -> Line<'static> {
    if input.is_empty() && !is_focused {
        Line::from(Span::styled(placeholder.to_owned(), styles::hint_style()))
    } else {
        Line::from(input.text().to_owned())
    }
}
