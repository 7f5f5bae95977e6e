use std::env::{self, set_var};

use api::{create_app, AppConfig, AppState};
use lambda_http::{run, tracing, Error};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let on_lambda = env::var("AWS_LAMBDA_RUNTIME_API").is_ok();

    if on_lambda {
        set_var("AWS_LAMBDA_HTTP_IGNORE_STAGE_IN_PATH", "true");
        // required to enable CloudWatch error logging by the runtime
        tracing::init_default_subscriber();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .init();
    }

    let config = AppConfig::from_env()?;
    tracing::info!(
        "Starting move guesser on a {0}x{0} board ({1:?} out-of-board positions)",
        config.board_size,
        config.out_of_board_policy
    );

    let state = AppState::from_config(&config)?;
    let app = create_app(state);

    if on_lambda {
        return run(app).await;
    }

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
