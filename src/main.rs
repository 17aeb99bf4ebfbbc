mod app;
mod error;
mod rendering;
mod simulation;
mod utils;

fn main() {
    app::run();
}
