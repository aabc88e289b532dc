use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
};
use walletsim_core::{
    render::{ADDRESS_LINE_CHARS, DeviceView, MenuRowView, PinSlotView, ScreenView},
    text_policy::fixed_width_lines,
};

const DEVICE_WIDTH: u16 = 30;
const DEVICE_HEIGHT: u16 = 14;
const HELP: &str = "←/→ buttons  Enter both  Esc back  s settings  p power  q quit";

/// Draws the device body centered in `frame`, with the key help underneath.
pub fn device(frame: &mut Frame<'_>, title: &str, view: DeviceView<'_>) {
    let [device_row, help_row] = Layout::vertical([
        Constraint::Length(DEVICE_HEIGHT),
        Constraint::Length(1),
    ])
    .flex(Flex::Center)
    .areas(frame.area());
    let [body] = Layout::horizontal([Constraint::Length(DEVICE_WIDTH)])
        .flex(Flex::Center)
        .areas(device_row);

    let border_style = if view.powered {
        Style::default().fg(Color::Gray)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(Line::from(format!(" {title} ")).centered());
    let inner = block.inner(body);
    frame.render_widget(block, body);

    let [screen_area, toast_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

    frame.render_widget(
        Paragraph::new(screen_lines(view.screen)).alignment(Alignment::Center),
        screen_area,
    );

    if let Some(toast) = view.toast {
        frame.render_widget(
            Paragraph::new(Line::from(toast))
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Black).bg(Color::Yellow)),
            toast_area,
        );
    }

    frame.render_widget(
        Paragraph::new(HELP)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        help_row,
    );
}

fn screen_lines(screen: ScreenView<'_>) -> Vec<Line<'_>> {
    let heading = Style::default().add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(Color::DarkGray);

    match screen {
        ScreenView::PoweredOff => vec![
            Line::raw(""),
            Line::styled("powered off", dim),
            Line::raw(""),
            Line::styled("p to power on", dim),
        ],
        ScreenView::Splash { title } => vec![
            Line::raw(""),
            Line::raw(""),
            Line::styled(title, heading),
            Line::styled("starting…", dim),
        ],
        ScreenView::Lock { slots, cursor } => {
            let mut digits = Vec::with_capacity(slots.len() * 2);
            for (index, slot) in slots.iter().enumerate() {
                let symbol = match slot {
                    PinSlotView::Empty => "_".to_owned(),
                    PinSlotView::Digit(digit) => digit.to_string(),
                };
                let style = if index == cursor {
                    Style::default().add_modifier(Modifier::REVERSED)
                } else {
                    Style::default()
                };
                digits.push(Span::styled(format!(" {symbol} "), style));
                digits.push(Span::raw(" "));
            }

            vec![
                Line::raw(""),
                Line::styled("Enter PIN", heading),
                Line::raw(""),
                Line::from(digits),
                Line::raw(""),
                Line::styled("←/→ slot  both: +1", dim),
            ]
        }
        ScreenView::Home { title, hint } => vec![
            Line::raw(""),
            Line::styled(title, heading),
            Line::raw(""),
            Line::raw("Ready"),
            Line::raw(""),
            Line::styled(hint, dim),
        ],
        ScreenView::Apps { rows, cursor } => {
            let mut lines = vec![Line::styled("Apps", heading), Line::raw("")];
            lines.extend(menu_lines(rows, cursor));
            lines
        }
        ScreenView::Address {
            app_name,
            currency,
            address,
        } => {
            let mut lines = vec![
                Line::styled(format!("{app_name} ({currency})"), heading),
                Line::styled("Receive address", dim),
                Line::raw(""),
            ];
            lines.extend(fixed_width_lines(address, ADDRESS_LINE_CHARS).map(Line::raw));
            lines.push(Line::raw(""));
            lines.push(Line::styled("both: send", dim));
            lines
        }
        ScreenView::TxReview {
            app_name,
            step_label,
            value,
            step,
            step_count,
            approved,
        } => {
            let mut lines = vec![
                Line::styled(format!("{app_name} send"), heading),
                Line::styled(format!("Review {}/{}", step + 1, step_count), dim),
                Line::raw(""),
                Line::styled(step_label, heading),
                Line::raw(value),
                Line::raw(""),
            ];
            if approved {
                lines.push(Line::styled(
                    "✓ approved",
                    Style::default().fg(Color::Green),
                ));
            } else if step + 1 < step_count {
                lines.push(Line::styled("both: next", dim));
            }
            lines
        }
        ScreenView::Settings { rows, cursor } => {
            let mut lines = vec![Line::styled("Settings", heading), Line::raw("")];
            lines.extend(menu_lines(rows, cursor));
            lines
        }
    }
}

fn menu_lines<'a>(rows: &[MenuRowView<'a>], cursor: usize) -> Vec<Line<'a>> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            let selected = index == cursor;
            let marker = if selected { '›' } else { ' ' };
            let style = if selected {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            Line::styled(format!("{marker} {:<11}{:>9} ", row.label, row.detail), style)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(view: DeviceView<'_>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|frame| device(frame, "Test", view)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn lock_screen_shows_slots_and_toast() {
        let out = render(DeviceView {
            screen: ScreenView::Lock {
                slots: [
                    PinSlotView::Digit(1),
                    PinSlotView::Digit(2),
                    PinSlotView::Empty,
                    PinSlotView::Empty,
                ],
                cursor: 1,
            },
            toast: Some("Wrong PIN"),
            powered: true,
        });

        assert!(out.contains("Enter PIN"));
        assert!(out.contains(" 1 "));
        assert!(out.contains("Wrong PIN"));
    }

    #[test]
    fn address_is_wrapped_across_lines() {
        let address = "0123456789abcdef0123456789abcdef";
        let out = render(DeviceView {
            screen: ScreenView::Address {
                app_name: "Ethereum",
                currency: "ETH",
                address,
            },
            toast: None,
            powered: true,
        });

        assert!(out.contains("Ethereum (ETH)"));
        assert!(out.contains(&address[..ADDRESS_LINE_CHARS]));
        assert!(!out.contains(address));
    }
}
