use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,artic_gui=debug")),
        )
        .init();

    tracing::info!("starting artic-gui");
    artic_gui::app::application::run();
}
