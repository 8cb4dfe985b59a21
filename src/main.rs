use log::debug;
use retrosnake::app::State;

fn main() -> iced::Result {
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "retrosnake=debug");
    }
    env_logger::init();
    debug!("Debug on");
    iced::application("Snake", State::update, State::view)
        .window_size(iced::Size::new(480.0, 760.0))
        .subscription(State::subscription)
        .theme(State::theme)
        .run()
}
