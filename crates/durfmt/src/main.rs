use clap::Parser;
use command::{DurfmtCmd, current_settings};
use env_logger::{Builder, Env, Target};
use log::{debug, error};

mod command;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const LOG_ENV: &str = "DURFMT_LOG";

static HELP_TEMPLATE: &str = "\
    {before-help} {name} {version}
    {author}
    {about}

    {usage-heading}
      {usage}


    {all-args}
    {after-help}";

#[derive(Parser)]
#[command(
    author = "Tyler Saunders <tyler@thesummit.dev>",
    version = VERSION,
    about = "Pretty print spans of time.",
    help_template(HELP_TEMPLATE),
)]
struct Durfmt {
    #[command(subcommand)]
    durfmt: DurfmtCmd,
}

impl Durfmt {
    fn run(self) {
        let settings = match current_settings() {
            Ok(settings) => settings,
            Err(err) => {
                error!("invalid configuration: {err}");
                eprintln!("durfmt: invalid configuration: {err}");
                std::process::exit(1);
            }
        };
        debug!("settings: {:?}", settings.spec);
        self.durfmt.run(&settings);
    }
}

fn main() {
    let default_filter = if cfg!(debug_assertions) {
        "info"
    } else {
        "warn"
    };
    let env = Env::new().filter_or(LOG_ENV, default_filter);
    let mut builder = Builder::from_env(env);
    builder.target(Target::Stderr);
    builder.init();

    Durfmt::parse().run();
}
