fn main() {
    leadmail::app::cli::run();
}
