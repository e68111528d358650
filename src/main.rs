fn main() -> Result<(), eframe::Error> {
    // Set up logging; RUST_LOG controls verbosity
    env_logger::init();

    // Run the canvas application
    rect_canvas::run_app()
}
