use iced::{Element, Subscription, Theme};
use log::debug;

use crate::{
    models::snake::snake_game::SnakeGame,
    theme::{ThemeMessage, ThemeMode},
    view::View,
    view_models::snake::snake_view_model::SnakeViewModel,
    views::snake::snake_game_screen::{SnakeGameScreen, SnakeMessage},
};

// https://docs.rs/iced/latest/i686-unknown-linux-gnu/iced/?search=command#scaling-applications
pub struct State {
    screen: SnakeGameScreen,
    theme: ThemeMode,
}

#[derive(Clone, Debug)]
pub enum Message {
    Snake(SnakeMessage),
    Theme(ThemeMessage),
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self {
            screen: SnakeGameScreen::default(),
            theme: ThemeMode::default(),
        }
    }

    /// Starts the application on an existing game.
    #[must_use]
    pub fn with_game(game: SnakeGame) -> Self {
        Self {
            screen: SnakeGameScreen::new(SnakeViewModel::from_game(game)),
            theme: ThemeMode::default(),
        }
    }

    pub fn update(state: &mut State, message: Message) {
        let mut next = Some(message);
        while let Some(message) = next.take() {
            next = match message {
                Message::Theme(ThemeMessage::Toggle) => {
                    state.theme = state.theme.toggle();
                    debug!("Theme switched to {:?}", state.theme);
                    None
                }
                Message::Snake(_) => state.screen.update(message),
            };
        }
    }

    #[must_use]
    pub fn view(state: &State) -> Element<'_, Message> {
        state.screen.view()
    }

    #[must_use]
    pub fn subscription(state: &State) -> Subscription<Message> {
        state.screen.subscription()
    }

    #[must_use]
    pub fn theme(state: &State) -> Theme {
        state.theme.to_iced()
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use iced::{
        keyboard::{key::Named, Key},
        time::Instant,
    };

    use super::*;
    use crate::models::snake::{
        snake_config::SnakeConfig,
        snake_game::{Cell, Heading},
    };

    fn tick(state: &mut State) {
        State::update(state, Message::Snake(SnakeMessage::Timer(Instant::now())));
    }

    #[test]
    fn test_eating_toggles_theme() {
        let game = SnakeGame::from_parts(
            SnakeConfig::default(),
            vec![Cell::new(7, 7)],
            Heading::Right,
            Cell::new(8, 7),
            8,
        )
        .unwrap();
        let mut state = State::with_game(game);
        assert_eq!(state.theme_mode(), ThemeMode::Light);
        assert_eq!(State::theme(&state), Theme::Light);

        tick(&mut state);
        assert_eq!(state.theme_mode(), ThemeMode::Dark);
        assert_eq!(State::theme(&state), Theme::Dark);
        assert_eq!(state.screen.view_model().get_score(), 1);
        assert_eq!(state.screen.view_model().get_game().body().len(), 2);
    }

    #[test]
    fn test_space_resets_through_routing() {
        let game = SnakeGame::from_parts(
            SnakeConfig::default(),
            vec![
                Cell::new(1, 0),
                Cell::new(1, 1),
                Cell::new(0, 1),
                Cell::new(0, 0),
            ],
            Heading::Left,
            Cell::new(9, 9),
            6,
        )
        .unwrap();
        let mut state = State::with_game(game);
        tick(&mut state);
        assert!(state.screen.view_model().game_over());
        assert_eq!(state.theme_mode(), ThemeMode::Light);

        State::update(
            &mut state,
            Message::Snake(SnakeMessage::Key(Key::Named(Named::Space))),
        );
        assert!(!state.screen.view_model().game_over());
        assert_eq!(state.screen.view_model().get_score(), 0);
    }

    #[test]
    fn test_theme_message_flips_mode() {
        let mut state = State::new();
        State::update(&mut state, Message::Theme(ThemeMessage::Toggle));
        assert_eq!(state.theme_mode(), ThemeMode::Dark);
        State::update(&mut state, Message::Theme(ThemeMessage::Toggle));
        assert_eq!(state.theme_mode(), ThemeMode::Light);
    }
}
