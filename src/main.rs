use env_logger::Env;
use std::env;
use std::path::PathBuf;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "kernel-filter".to_string());
    let input_path = match args.next() {
        Some(path) => PathBuf::from(path),
        None => {
            eprintln!("usage: {} <image>", program);
            ::std::process::exit(1);
        }
    };

    if let Err(ref e) = kernel_filter::run_filters(&input_path) {
        eprintln!("error: {}", e);

        for e in e.iter().skip(1) {
            eprintln!("caused by: {}", e);
        }

        if let Some(backtrace) = e.backtrace() {
            eprintln!("backtrace: {:?}", backtrace);
        }

        ::std::process::exit(1);
    }
}
