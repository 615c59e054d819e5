//! Application Bootstrap
//!
//! Loads the configuration, wires the catalog service to the UI event
//! channel and opens the main window.

use gpui::{
    actions, px, size, App, AppContext, Application, Bounds, KeyBinding, TitlebarOptions,
    WindowBounds, WindowOptions,
};

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::domain::config::AppConfig;
use crate::services::hub::CatalogHub;
use crate::utils::config_store;

actions!(artic, [Quit]);

/// Run the application
pub fn run() {
    let config = config_store::load_config().unwrap_or_else(|e| {
        tracing::warn!("failed to load configuration, using defaults: {e}");
        AppConfig::default()
    });

    Application::new().run(move |cx: &mut App| {
        cx.on_action(quit);
        cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

        let entities = AppEntities::init(config.table.page_size, cx);

        let (event_tx, event_rx) = flume::unbounded();
        match CatalogHub::new(&config, event_tx) {
            Ok(hub) => cx.set_global(hub),
            Err(e) => {
                tracing::error!("failed to start catalog service: {e}");
                cx.quit();
                return;
            }
        }

        let bounds = Bounds::centered(None, size(px(1200.0), px(800.0)), cx);
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some("Artic Collection Browser".into()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(options, |_window, cx| {
            cx.new(|cx| Workspace::new(entities, event_rx, cx))
        });
        if let Err(e) = opened {
            tracing::error!("failed to open window: {e}");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}

fn quit(_: &Quit, cx: &mut App) {
    tracing::info!("quitting");
    cx.quit();
}
