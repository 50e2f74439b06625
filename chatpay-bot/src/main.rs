use std::sync::Arc;

use actix_web::{web, App, HttpServer};

use chatpay_bot::api::handlers::{command_webhook, health, message_webhook, reaction_webhook};
use chatpay_bot::app::bot::PaymentBot;
use chatpay_bot::app::identity::HttpIdentityResolver;
use chatpay_bot::infrastructure::config::Config;
use chatpay_bot::infrastructure::logger;
use chatpay_core::shared::constants::TOKEN_REGISTRY_TTL;
use chatpay_core::{
    HttpChainReader, HttpTokenRegistry, PaymentInteractionBuilder, TokenRegistryCache,
    TokenResolver,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = Config::from_env().map_err(|e| {
        std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("Configuration loading failed: {e}"),
        )
    })?;

    logger::init(&config.log_level);
    log::info!("🚀 Starting chatpay bot...");

    let validation_errors = config.validate();
    if !validation_errors.is_empty() {
        log::error!(
            "❌ Configuration validation failed: {}",
            validation_errors.join(", ")
        );
        return Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!(
                "Configuration validation failed: {}",
                validation_errors.join(", ")
            ),
        ));
    }
    log::info!("✅ Configuration validated");

    let http = reqwest::Client::new();

    let chain_reader = match HttpChainReader::new(&config.rpc_url) {
        Ok(reader) => Arc::new(reader),
        Err(e) => {
            log::error!("❌ Failed to initialize chain reader: {e}");
            return Err(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Chain reader initialization failed: {e}"),
            ));
        }
    };
    log::info!("✅ Chain reader ready on {}", config.rpc_url);

    let registry_cache = Arc::new(TokenRegistryCache::new(
        Arc::new(HttpTokenRegistry::new(
            config.registry_url.clone(),
            http.clone(),
        )),
        TOKEN_REGISTRY_TTL,
    ));
    let resolver = TokenResolver::new(chain_reader, registry_cache);
    let builder = PaymentInteractionBuilder::new(resolver);

    let identity = Arc::new(HttpIdentityResolver::new(
        config.identity_api_url.clone(),
        http,
    ));

    let bot = Arc::new(PaymentBot::new(
        builder,
        identity,
        config.trigger_keyword.clone(),
        config.bot_address(),
    ));
    log::info!(
        "✅ Payment bot ready (keyword: {})",
        config.trigger_keyword
    );

    log::info!("🌐 Listening on port {}", config.port);
    log::info!("📊 Environment: {}", config.environment);

    HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(actix_cors::Cors::permissive())
            .app_data(web::Data::new(Arc::clone(&bot)))
            .service(health)
            .service(message_webhook)
            .service(reaction_webhook)
            .service(command_webhook)
    })
    .bind(("0.0.0.0", config.port))?
    .run()
    .await
}
