fn main() {
    unbg_compat::cli::run();
}
