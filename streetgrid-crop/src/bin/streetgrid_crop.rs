use clap::Parser;
use streetgrid_crop::app::CropCliArguments;

fn main() {
    env_logger::init();
    let args = CropCliArguments::parse();
    match args.run() {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running streetgrid_crop: {e}");
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
