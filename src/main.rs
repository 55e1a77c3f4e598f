fn main() {
    if let Err(e) = lingo_lib::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
