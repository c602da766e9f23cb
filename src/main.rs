fn main() {
    if let Err(e) = frustration::run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
