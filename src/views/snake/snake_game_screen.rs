use std::time::Duration;

use iced::{
    alignment::{Horizontal, Vertical},
    keyboard::{self, Key},
    time::{self, Instant},
    widget::{button, column, container, row, text, Column, Row, Space},
    Border, Color, Element, Length, Subscription, Theme,
};

use crate::{
    app::Message,
    models::snake::snake_game::{Heading, SnakeBlock},
    theme::Palette,
    view::View,
    view_model::ViewModel,
    view_models::snake::snake_view_model::SnakeViewModel,
};

const CELL_SIZE: f32 = 24.0;
const PAD_BUTTON_SIZE: f32 = 64.0;

#[derive(Clone, Debug)]
pub enum SnakeMessage {
    Timer(Instant),
    Key(Key),
    Turn(Heading),
    Reset,
}

#[derive(Debug, Default)]
pub struct SnakeGameScreen {
    view_model: SnakeViewModel,
}

impl SnakeGameScreen {
    #[must_use]
    pub fn new(view_model: SnakeViewModel) -> Self {
        Self { view_model }
    }

    #[must_use]
    pub fn view_model(&self) -> &SnakeViewModel {
        &self.view_model
    }

    fn board(&self) -> Column<'_, Message> {
        let make_container = |block: SnakeBlock| {
            container(text(" ")) // Empty text to preserve size
                .width(CELL_SIZE)
                .height(CELL_SIZE)
                .style(move |theme: &Theme| {
                    let palette = Palette::for_theme(theme);
                    let color = match block {
                        SnakeBlock::Empty => palette.board,
                        SnakeBlock::Food => palette.food,
                        SnakeBlock::SnakeBody => palette.snake_body,
                        SnakeBlock::SnakeHead => palette.snake_head,
                    };
                    container::Style {
                        border: Border {
                            color: palette.grid_line,
                            width: 1.0,
                            radius: 3.0.into(),
                        },
                        background: Some(color.into()),
                        ..container::Style::default()
                    }
                })
        };

        let mut grid_view = Column::new();
        for grid_row in self.view_model.get_grid() {
            let mut row = Row::new();
            for entry in grid_row {
                row = row.push(make_container(entry));
            }
            grid_view = grid_view.push(row);
        }
        grid_view
    }

    fn controls() -> Column<'static, Message> {
        let make_button = |label: &'static str, heading: Heading| {
            button(
                text(label)
                    .size(22.0)
                    .align_x(Horizontal::Center)
                    .align_y(Vertical::Center),
            )
            .on_press(Message::Snake(SnakeMessage::Turn(heading)))
            .style(button::success)
            .width(PAD_BUTTON_SIZE)
            .height(PAD_BUTTON_SIZE)
        };

        column![
            make_button("▲", Heading::Up),
            row![
                make_button("◀", Heading::Left),
                Space::with_width(PAD_BUTTON_SIZE),
                make_button("▶", Heading::Right),
            ]
            .spacing(10),
            make_button("▼", Heading::Down),
        ]
        .spacing(10)
        .align_x(Horizontal::Center)
    }

    fn game_over_panel(&self) -> Element<'_, Message> {
        let restart_button = button(text("Restart").align_x(Horizontal::Center))
            .on_press(Message::Snake(SnakeMessage::Reset))
            .width(100.0)
            .height(40.0);
        container(
            column![
                text("Game over").size(22.0),
                text(format!("Final score: {}", self.view_model.get_score())),
                restart_button,
            ]
            .spacing(10)
            .align_x(Horizontal::Center),
        )
        .padding(25)
        .style(|_: &Theme| container::Style {
            text_color: Some(Color::WHITE),
            background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.8).into()),
            border: Border {
                radius: 12.0.into(),
                ..Default::default()
            },
            ..container::Style::default()
        })
        .into()
    }
}

impl View for SnakeGameScreen {
    fn update(&mut self, message: Message) -> Option<Message> {
        self.view_model.update(message)
    }

    fn view(&self) -> Element<'_, Message> {
        let themed = |theme: &Theme| text::Style {
            color: Some(Palette::for_theme(theme).text),
        };
        let title = text("Snake").size(28.0).style(themed);
        let score = text(format!("Score: {}", self.view_model.get_score()))
            .size(16.0)
            .style(themed);

        let bottom: Element<Message> = if self.view_model.game_over() {
            self.game_over_panel()
        } else {
            Self::controls().into()
        };

        container(
            column![title, score, self.board(), bottom]
                .spacing(10)
                .align_x(Horizontal::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(|theme: &Theme| container::Style {
            background: Some(Palette::for_theme(theme).background.into()),
            ..container::Style::default()
        })
        .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        let keyboard =
            keyboard::on_key_press(|key, _| Some(Message::Snake(SnakeMessage::Key(key))));
        if self.view_model.game_over() {
            return keyboard;
        }
        // a new interval means a new subscription, so the timer restarts at the new speed
        let timer = time::every(Duration::from_millis(
            self.view_model.get_time_between_frames(),
        ))
        .map(SnakeMessage::Timer)
        .map(Message::Snake);
        Subscription::batch(vec![timer, keyboard])
    }
}
