use clap::Parser;
use mvnreps::cli::{self, Cli, Settings};
use mvnreps::{MavenCentralRegistry, app};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let mut stdout = std::io::stdout();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if let Err(write_err) = cli::print_parse_error(&mut stdout, &e) {
                eprintln!("Failed to write output: {write_err}");
            }
            return;
        }
    };
    let settings = Settings::from(&cli);
    mvnreps::logging::init(settings.verbose);

    let Some(query) = cli.query.as_deref() else {
        if let Err(e) = cli::print_missing_query(&mut stdout) {
            tracing::error!("Failed to write usage: {}", e);
        }
        return;
    };

    let registry = match MavenCentralRegistry::with_base_url(&settings.endpoint) {
        Ok(registry) => registry,
        Err(e) => {
            if let Err(write_err) = app::report(&mut stdout, &e) {
                tracing::error!("Failed to write output: {}", write_err);
            }
            return;
        }
    };

    if let Err(e) = app::run(&registry, query, cli.format.as_deref(), &mut stdout).await {
        tracing::error!("Failed to write output: {}", e);
    }
}
