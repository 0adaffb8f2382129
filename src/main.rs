//! Staff Console - Main Entry Point
//!
//! Headless wiring of the client core: configuration, logging, the REST
//! directory, and the list controller. Performs an initial roster fetch
//! and prints the first page; a presentation layer would keep the
//! controller alive and drain its events instead.

use std::time::Duration;

use staff_console::domain::config::AppConfig;
use staff_console::eventing::app_event::{AppEvent, NoticeLevel};
use staff_console::features::employees::EmployeeListController;
use staff_console::helpers::fs::get_or_create_data_dir;
use staff_console::services::employees::RestDirectory;
use staff_console::utils::config_store;
use tracing_appender::non_blocking::WorkerGuard;

/// Initialize tracing with console output plus a daily-rolling log file in
/// the data directory. Falls back to console-only if the data directory is
/// unavailable.
fn init_tracing() -> Option<WorkerGuard> {
    use tracing_subscriber::fmt::writer::MakeWriterExt;

    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    match get_or_create_data_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "staff-console.log");
            let (file_writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr.and(file_writer))
                .init();
            Some(guard)
        }
        Err(_) => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
            None
        }
    }
}

fn log_event(event: &AppEvent) {
    match event {
        AppEvent::Notice { level, message, .. } => match level {
            NoticeLevel::Error => tracing::error!("{message}"),
            _ => tracing::info!("{message}"),
        },
        AppEvent::ListUpdated { employees, pager } => {
            tracing::info!(
                page = pager.current_page,
                shown = employees.len(),
                total = pager.total_items,
                "list updated"
            );
        }
        AppEvent::LoadingChanged { loading } => {
            tracing::debug!(loading, "loading changed");
        }
        AppEvent::DialogDismissed => {}
    }
}

#[tokio::main]
async fn main() {
    let _guard = init_tracing();

    tracing::info!("Starting Staff Console...");

    let config = match config_store::load_app_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("failed to load configuration, using defaults: {e}");
            AppConfig::default()
        }
    };

    let directory = match RestDirectory::new(
        &config.server_url,
        Duration::from_secs(config.request_timeout_secs),
    ) {
        Ok(directory) => directory,
        Err(e) => {
            tracing::error!("failed to build HTTP client: {e}");
            std::process::exit(1);
        }
    };

    let controller = EmployeeListController::new(directory, &config);
    let events = controller.events();

    if controller.refresh().await.is_err() {
        for event in events.try_iter() {
            log_event(&event);
        }
        std::process::exit(1);
    }

    for event in events.try_iter() {
        log_event(&event);
    }

    let state = controller.snapshot();
    println!(
        "Employees - page {} of {} ({} total)",
        state.pager.current_page.max(1),
        state.pager.total_pages.max(1),
        state.pager.total_items
    );
    for employee in &state.visible_list {
        println!(
            "  [{}] {} <{}> {} | sales {:.2} | salary {:.2} | {}",
            employee.id.unwrap_or_default(),
            employee.name,
            employee.email,
            employee.mobile,
            employee.total_sales,
            employee.salary,
            if employee.status { "active" } else { "inactive" }
        );
    }
}
