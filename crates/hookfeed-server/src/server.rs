//! Server module.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web::{self, Data},
    App, HttpServer,
};
use actix_web_prom::PrometheusMetrics;
use hookfeed_config::Config;
use hookfeed_core::{CoreContext, CoreModule};
use hookfeed_database_interface::DbService;
use tracing::info;

use crate::{
    constants::MAX_PAYLOAD_SIZE, feed::events_list, health::health_check_route,
    metrics::build_metrics_handler, viewer::index_page, webhook::configure_webhook_handlers,
    Result, ServerError,
};

/// App context.
pub struct AppContext {
    /// Config.
    pub config: Config,
    /// Core module.
    pub core_module: CoreModule,
    /// Event store.
    pub db_service: Box<dyn DbService>,
}

impl AppContext {
    /// Create new app context.
    pub fn new(config: Config, core_module: CoreModule, db_service: Box<dyn DbService>) -> Self {
        Self {
            config,
            core_module,
            db_service,
        }
    }

    /// Convert the context for the core module.
    pub fn as_core_context(&self) -> CoreContext {
        CoreContext {
            config: &self.config,
            core_module: &self.core_module,
            db_service: self.db_service.as_ref(),
        }
    }
}

/// Build Actix app.
pub fn build_actix_app(
    context: Data<AppContext>,
    prometheus: PrometheusMetrics,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(context)
        .app_data(web::PayloadConfig::new(MAX_PAYLOAD_SIZE))
        .wrap(prometheus)
        .wrap(Logger::default())
        .service(web::scope("/webhook").configure(configure_webhook_handlers))
        .route("/api/events", web::get().to(events_list))
        .route("/health", web::get().to(health_check_route))
        .route("/", web::get().to(index_page))
}

/// Run HTTP server.
pub async fn run_server(context: AppContext) -> Result<()> {
    let address = get_bind_address(&context.config);

    info!(
        version = context.config.version,
        address = %address,
        message = "Starting server",
    );

    run_server_internal(address, context).await
}

fn get_bind_address(config: &Config) -> String {
    format!("{}:{}", config.server.bind_ip, config.server.bind_port)
}

async fn run_server_internal(ip_with_port: String, context: AppContext) -> Result<()> {
    let workers_count = context.config.server.workers_count;
    let context = Data::new(context);
    let prometheus = build_metrics_handler()?;

    let mut server =
        HttpServer::new(move || build_actix_app(context.clone(), prometheus.clone()));

    if let Some(workers) = workers_count {
        server = server.workers(workers as usize);
    }

    server
        .bind(ip_with_port)
        .map_err(|e| ServerError::IoError { source: e })?
        .run()
        .await
        .map_err(|e| ServerError::IoError { source: e })
}
