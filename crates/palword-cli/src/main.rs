fn main() -> std::process::ExitCode {
    palword_cli::run()
}
