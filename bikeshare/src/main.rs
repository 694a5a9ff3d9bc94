use bikeshare::app::BikeshareApp;
use bikeshare_core::BikeshareError;
use clap::Parser;

fn main() -> Result<(), BikeshareError> {
    env_logger::init();
    log::debug!("cwd: {:?}", std::env::current_dir());
    let args = BikeshareApp::parse();
    args.run()
}
