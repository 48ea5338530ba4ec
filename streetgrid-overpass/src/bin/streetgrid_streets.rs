use clap::Parser;
use streetgrid_overpass::app::StreetsCliArguments;

fn main() {
    env_logger::init();
    let args = StreetsCliArguments::parse();
    match args.run() {
        Ok(path) => log::info!("finished writing {}", path.display()),
        Err(e) => {
            log::error!("failed running streetgrid_streets: {e}");
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
