fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let presenter_factory = maze_animator::PixelsPresenterFactory::new();
    let command = maze_animator::RunGuiCommand::new(presenter_factory);

    command.execute()
}
