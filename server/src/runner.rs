use std::future::Future;

use structopt::clap::AppSettings;
use structopt::StructOpt;

use crate::graphql_schemas::create_schema;
use crate::settings::Settings;
use crate::system;

#[derive(StructOpt, Debug)]
#[structopt(name = "usergraph", global_settings = &[AppSettings::DisableVersion])]
struct CliOptions {
    /// Configuration environment, read from `config/<config>.yaml`
    #[structopt(short, long, default_value = "development")]
    config: String,
    /// Check the configuration and exit
    #[structopt(long)]
    check_conf: bool,
    /// Print the GraphQL schema and exit
    #[structopt(long)]
    print_schema: bool,
    /// Print the version and commit hash and exit
    #[structopt(short = "V", long)]
    version: bool,
}

fn build_info() -> String {
    format!(
        "Build Version: {}\nCommit Hash: {}",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH")
    )
}

pub async fn with_config<F, T>(system_fn: F) -> anyhow::Result<()>
where
    F: FnOnce(Settings) -> T,
    T: Future<Output = anyhow::Result<()>>,
{
    let opts = CliOptions::from_args();
    if opts.version {
        println!("{}", build_info());
        return Ok(());
    }
    if opts.print_schema {
        println!("{}", create_schema().as_sdl());
        return Ok(());
    }

    let settings = Settings::new(&opts.config)?;
    if let Err(e) = util::trace::init_tracing_env_subscriber(settings.log.json) {
        eprintln!("tracing init failed: {}", e);
    }

    if opts.check_conf {
        system::identity(&settings)?;
        info!("configuration {} is valid", settings.config_file);
        return Ok(());
    }

    info!("starting usergraph {} with {}", env!("CARGO_PKG_VERSION"), settings.config_file);
    let result = system_fn(settings).await;
    if let Err(e) = &result {
        error!("usergraph exited in error: {:?}", e);
    }
    result
}

#[cfg(test)]
mod test {
    use structopt::StructOpt;

    use crate::runner::{build_info, CliOptions};

    #[test]
    fn test_version_flag() {
        for flag in ["--version", "-V"] {
            let opts = CliOptions::from_iter_safe(["usergraph", flag]).unwrap();
            assert!(opts.version, "{}", flag);
        }
        let opts = CliOptions::from_iter_safe(["usergraph"]).unwrap();
        assert!(!opts.version);
        assert_eq!(opts.config, "development");
    }

    #[test]
    fn test_version_has_commit_hash() {
        let info = build_info();
        assert!(info.contains(env!("CARGO_PKG_VERSION")), "{}", info);
        assert!(info.contains(&format!("Commit Hash: {}", env!("GIT_HASH"))), "{}", info);
    }
}
