mod app;
mod batch;
mod config;
mod error;
mod particle;
mod simulation;

fn main() {
    app::run();
}
