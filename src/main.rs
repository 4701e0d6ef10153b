fn main() {
    let args: Vec<String> = std::env::args().collect();
    std::process::exit(proj::cli::run(args));
}
