use iced::keyboard::{key::Named, Key};
use log::{debug, warn};

use crate::{
    app::Message,
    models::snake::{
        snake_config::SnakeConfig,
        snake_game::{Heading, SnakeBlock, SnakeGame, TickOutcome},
    },
    theme::ThemeMessage,
    view_model::ViewModel,
    views::snake::snake_game_screen::SnakeMessage,
};

/// Owns the running [`SnakeGame`] and drives it from UI messages.
#[derive(Debug)]
pub struct SnakeViewModel {
    game: SnakeGame,
}

impl SnakeViewModel {
    #[must_use]
    pub fn new(config: SnakeConfig) -> Self {
        debug!("New SnakeViewModel config: {:#?}", config);
        Self::from_game(SnakeGame::new(config))
    }

    #[must_use]
    pub fn from_game(game: SnakeGame) -> Self {
        Self { game }
    }

    fn heading_for_key(key: &Key) -> Option<Heading> {
        match key {
            Key::Named(code) => match code {
                Named::ArrowUp => Some(Heading::Up),
                Named::ArrowDown => Some(Heading::Down),
                Named::ArrowLeft => Some(Heading::Left),
                Named::ArrowRight => Some(Heading::Right),
                _ => None,
            },
            Key::Character(c) => match c.as_str() {
                "w" | "W" => Some(Heading::Up),
                "s" | "S" => Some(Heading::Down),
                "a" | "A" => Some(Heading::Left),
                "d" | "D" => Some(Heading::Right),
                _ => None,
            },
            Key::Unidentified => None,
        }
    }

    #[must_use]
    pub fn get_game(&self) -> &SnakeGame {
        &self.game
    }

    #[must_use]
    pub fn get_grid(&self) -> Vec<Vec<SnakeBlock>> {
        self.game.get_grid()
    }

    #[must_use]
    pub fn get_score(&self) -> u32 {
        self.game.score()
    }

    #[must_use]
    pub fn get_time_between_frames(&self) -> u64 {
        self.game.interval()
    }

    #[must_use]
    pub fn game_over(&self) -> bool {
        self.game.is_game_over()
    }
}

impl Default for SnakeViewModel {
    fn default() -> Self {
        Self::new(SnakeConfig::default())
    }
}

impl ViewModel for SnakeViewModel {
    fn update(&mut self, message: Message) -> Option<Message> {
        if let Message::Snake(snake_message) = message {
            match snake_message {
                SnakeMessage::Timer(_) => match self.game.tick() {
                    TickOutcome::Ate { score } => {
                        debug!("Score is now {score}. Toggling theme");
                        Some(Message::Theme(ThemeMessage::Toggle))
                    }
                    TickOutcome::Moved | TickOutcome::Collided | TickOutcome::Finished => None,
                },
                SnakeMessage::Turn(heading) => {
                    self.game.turn(heading);
                    None
                }
                SnakeMessage::Key(key) => {
                    if self.game.is_game_over() {
                        if matches!(key, Key::Named(Named::Space | Named::Enter)) {
                            return Some(Message::Snake(SnakeMessage::Reset));
                        }
                        return None;
                    }
                    if let Some(heading) = Self::heading_for_key(&key) {
                        self.game.turn(heading);
                    }
                    None
                }
                SnakeMessage::Reset => {
                    debug!("Reset requested. Cleaning up board...");
                    self.game.reset();
                    None
                }
            }
        } else {
            warn!("Non-snake message sent to SnakeViewModel: {:#?}", message);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use iced::time::Instant;

    use super::*;
    use crate::models::snake::snake_game::Cell;

    fn view_model_with_food_ahead() -> SnakeViewModel {
        let game = SnakeGame::from_parts(
            SnakeConfig::default(),
            vec![Cell::new(7, 7)],
            Heading::Right,
            Cell::new(8, 7),
            21,
        )
        .unwrap();
        SnakeViewModel::from_game(game)
    }

    fn tick() -> Message {
        Message::Snake(SnakeMessage::Timer(Instant::now()))
    }

    #[test]
    fn test_eating_asks_for_theme_toggle() {
        let mut view_model = view_model_with_food_ahead();
        let reply = view_model.update(tick());
        assert!(matches!(reply, Some(Message::Theme(ThemeMessage::Toggle))));
        assert_eq!(view_model.get_score(), 1);
        assert_eq!(view_model.get_time_between_frames(), 140);

        // plain move does not toggle
        assert!(view_model.update(tick()).is_none());
    }

    #[test]
    fn test_keys_and_buttons_turn_the_snake() {
        let mut view_model = view_model_with_food_ahead();
        assert!(view_model
            .update(Message::Snake(SnakeMessage::Key(Key::Named(Named::ArrowUp))))
            .is_none());
        assert_eq!(view_model.get_game().heading(), Heading::Up);
        assert!(view_model.update(tick()).is_none());
        assert_eq!(view_model.get_game().head(), Some(Cell::new(7, 6)));

        view_model.update(Message::Snake(SnakeMessage::Key(Key::Character("a".into()))));
        assert_eq!(view_model.get_game().heading(), Heading::Left);

        // opposite of the last move is ignored
        view_model.update(Message::Snake(SnakeMessage::Turn(Heading::Right)));
        assert_eq!(view_model.get_game().heading(), Heading::Left);

        view_model.update(Message::Snake(SnakeMessage::Key(Key::Character("q".into()))));
        assert_eq!(view_model.get_game().heading(), Heading::Left);
    }

    #[test]
    fn test_space_restarts_after_game_over() {
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
            4,
        )
        .unwrap();
        let mut view_model = SnakeViewModel::from_game(game);

        // space does nothing while playing
        assert!(view_model
            .update(Message::Snake(SnakeMessage::Key(Key::Named(Named::Space))))
            .is_none());

        assert!(view_model.update(tick()).is_none());
        assert!(view_model.game_over());

        assert!(view_model
            .update(Message::Snake(SnakeMessage::Key(Key::Named(Named::ArrowUp))))
            .is_none());
        let reply = view_model.update(Message::Snake(SnakeMessage::Key(Key::Named(Named::Space))));
        assert!(matches!(reply, Some(Message::Snake(SnakeMessage::Reset))));

        assert!(view_model.update(Message::Snake(SnakeMessage::Reset)).is_none());
        assert!(!view_model.game_over());
        assert_eq!(view_model.get_game().body().len(), 1);
        assert_eq!(view_model.get_time_between_frames(), 150);
    }

    #[test]
    fn test_ignores_theme_messages() {
        let mut view_model = view_model_with_food_ahead();
        assert!(view_model
            .update(Message::Theme(ThemeMessage::Toggle))
            .is_none());
        assert_eq!(view_model.get_score(), 0);
    }
}
