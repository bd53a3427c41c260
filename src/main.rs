fn main() {
    env_logger::init();
    if let Err(err) = garden_svg_renderer::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
