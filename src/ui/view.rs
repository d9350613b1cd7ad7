use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::domain::{
    dialog::{DialogKind, DialogState},
    form_state::{FormFocus, FormState},
    user_info::UserInfoView,
};

use super::{
    form_input::{checkbox_line, render_text_field},
    host_surface::HostSurface,
    styles,
};

const SEND_MESSAGE_LABEL: &str = "✉️ Отправить сообщение";
const CLOSE_LABEL: &str = "❌ Закрыть";
const PAGE_HINTS: &str = "Tab: next  Enter: activate  Ctrl-S/F2: main button  Esc: close  Ctrl-C: quit";

pub fn render(frame: &mut Frame<'_>, surface: &HostSurface, dialog: Option<&DialogState>) {
    let form = surface.form();
    let page_style = styles::page_style(form.theme());
    let area = frame.area();
    frame.render_widget(Block::default().style(page_style), area);

    let info_lines = user_info_lines(form.user_info());
    let info_height = (info_lines.len() as u16).saturating_add(2);

    let [header_area, info_area, name_area, email_area, checkbox_area, buttons_area, _, main_button_area, hints_area] =
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(info_height),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .areas(area);

    frame.render_widget(Paragraph::new(header_line(surface)), header_area);

    let info = Paragraph::new(info_lines)
        .style(page_style)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(info, info_area);

    let text_cursor = dialog.is_none();
    render_text_field(
        frame,
        name_area,
        "Имя",
        "Введите ваше имя",
        form.name(),
        text_cursor && form.focus() == FormFocus::Name,
        page_style,
    );
    render_text_field(
        frame,
        email_area,
        "Email",
        "Введите ваш email",
        form.email(),
        text_cursor && form.focus() == FormFocus::Email,
        page_style,
    );

    frame.render_widget(
        Paragraph::new(checkbox_line(
            "Получать уведомления",
            form.notifications(),
            form.focus() == FormFocus::Notifications,
        )),
        checkbox_area,
    );
    frame.render_widget(Paragraph::new(buttons_line(form)), buttons_area);

    if let Some(button) = surface.main_button() {
        frame.render_widget(
            Paragraph::new(button.text.clone())
                .style(styles::main_button_style())
                .centered(),
            main_button_area,
        );
    }

    frame.render_widget(
        Paragraph::new(Span::styled(PAGE_HINTS, styles::hint_style())),
        hints_area,
    );

    if let Some(dialog) = dialog {
        render_dialog(frame, dialog);
    }
}

fn header_line(surface: &HostSurface) -> Line<'static> {
    let mode = if surface.is_expanded() {
        "expanded"
    } else {
        "compact"
    };

    Line::from(vec![
        Span::styled("Mini App", styles::heading_style()),
        Span::styled(
            format!("  [{mode}, sent: {}]", surface.delivered()),
            styles::hint_style(),
        ),
    ])
}

fn user_info_lines(view: &UserInfoView) -> Vec<Line<'static>> {
    match view {
        UserInfoView::Known { heading, rows } => std::iter::once(Line::from(Span::styled(
            (*heading).to_owned(),
            styles::heading_style(),
        )))
        .chain(rows.iter().map(|row| {
            Line::from(vec![
                Span::styled(format!("{}: ", row.label), styles::label_style()),
                Span::raw(row.value.clone()),
            ])
        }))
        .collect(),
        other => other.lines().into_iter().map(Line::from).collect(),
    }
}

fn buttons_line(form: &FormState) -> Line<'static> {
    let button = |label: &str, focus: FormFocus| {
        let style = if form.focus() == focus {
            styles::focused_button_style()
        } else {
            styles::button_style()
        };
        Span::styled(format!(" {label} "), style)
    };

    Line::from(vec![
        button(SEND_MESSAGE_LABEL, FormFocus::SendMessageButton),
        Span::raw("  "),
        button(CLOSE_LABEL, FormFocus::CloseButton),
    ])
}

fn render_dialog(frame: &mut Frame<'_>, dialog: &DialogState) {
    let hint = match dialog.kind() {
        DialogKind::Alert => "Enter: OK",
        DialogKind::Confirm => "y/Enter: OK  n/Esc: Cancel",
        DialogKind::Prompt => "Enter: OK  Esc: Cancel",
    };

    let screen = frame.area();
    let width = dialog_width(screen, dialog.message());
    let inner_width = usize::from(width.saturating_sub(2)).max(1);
    let message_lines = dialog.message().width().div_ceil(inner_width).max(1);
    let input_lines = u16::from(dialog.kind() == DialogKind::Prompt);
    let height = (message_lines as u16)
        .saturating_add(input_lines)
        .saturating_add(3);
    let area = centered(screen, width, height);

    let mut lines = vec![Line::from(dialog.message().to_owned())];
    if dialog.kind() == DialogKind::Prompt {
        lines.push(Line::from(dialog.input().text().to_owned()));
    }
    lines.push(Line::from(Span::styled(hint, styles::hint_style())));

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styles::dialog_border_style()),
        ),
        area,
    );

    if dialog.kind() == DialogKind::Prompt {
        let cursor_x = area
            .x
            .saturating_add(1)
            .saturating_add(dialog.input().width_before_cursor().min(u16::MAX as usize) as u16);
        let cursor_y = area
            .y
            .saturating_add(1)
            .saturating_add(message_lines as u16);
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

fn dialog_width(screen: Rect, message: &str) -> u16 {
    let wanted = (message.width() as u16).saturating_add(4).max(30);
    wanted.min(screen.width.saturating_sub(4)).max(10)
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}
