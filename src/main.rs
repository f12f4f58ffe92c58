fn main() {
    launch_control::app::cli::run();
}
