use uniffi_template_tools::{
    cli::{has_extra_args, run_setup},
    constants::exit_codes,
    error::default_error_handler,
    prompt::DialoguerPrompter,
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();

    if has_extra_args(std::env::args_os()) {
        println!("Setup doesn't accept any arguments.");
        std::process::exit(exit_codes::USAGE);
    }

    if let Err(err) = run_setup(&DialoguerPrompter::new()) {
        default_error_handler(err);
    }
}
