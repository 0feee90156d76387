fn main() {
    if let Err(err) = xlfixtures::multiline::run(std::env::args_os()) {
        eprintln!("error generating fixture: {err:#}");
        std::process::exit(1);
    }
}
