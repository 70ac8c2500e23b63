fn main() {
    ghctx::app::cli::run();
}
