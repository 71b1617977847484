use gallery_cursor::file_navigation::FileNavigator;
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let args = pico_args::Arguments::from_env();
    let file_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    let mut navigator = FileNavigator::new();
    if let Some(path) = &file_path {
        if let Err(err) = navigator.load_file(Path::new(path)) {
            eprintln!("Failed to load {}: {}", path, err);
            return ExitCode::FAILURE;
        }
    }

    match navigator.current_file() {
        Some(current) => println!("{}", current.display()),
        None => println!("no file selected"),
    }
    ExitCode::SUCCESS
}
