use bucket_cors::{report, Config, CorsUploader};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bucket_cors=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env()?;
    info!(bucket = %config.bucket, tool = %config.tool, "Loaded configuration");

    println!("{}", report::banner());

    let uploader = CorsUploader::new(config);
    if let Err(e) = uploader.preflight() {
        println!("{}", report::install_steps(&uploader.config().tool));
        std::process::exit(e.exit_code());
    }
    println!("{}", report::tool_found(&uploader.config().tool));

    // A failed upload is reported but leaves the exit status at 0.
    println!("{}", report::uploading(&uploader.config().bucket));
    let result = uploader.apply();
    if let Err(e) = &result {
        error!(code = e.error_code(), "CORS upload failed: {}", e);
    }
    println!("{}", report::outcome(&result));

    Ok(())
}
