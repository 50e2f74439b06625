use std::sync::Arc;

use actix_web::web::Data;
use actix_web::{get, post, web, HttpResponse, Responder};

use crate::app::bot::PaymentBot;
use crate::app::transport::{MessageEvent, ReactionEvent, SlashCommand};

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "message": "chatpay bot is running"
    }))
}

/// Inbound chat message. Interpreter failures are chat replies, so this
/// endpoint always answers 200 with the actions to execute.
#[post("/webhook/message")]
pub async fn message_webhook(
    bot: Data<Arc<PaymentBot>>,
    event: web::Json<MessageEvent>,
) -> impl Responder {
    let actions = bot.handle_message(&event).await;
    HttpResponse::Ok().json(serde_json::json!({ "actions": actions }))
}

#[post("/webhook/reaction")]
pub async fn reaction_webhook(
    bot: Data<Arc<PaymentBot>>,
    event: web::Json<ReactionEvent>,
) -> impl Responder {
    let actions: Vec<_> = bot.handle_reaction(&event).into_iter().collect();
    HttpResponse::Ok().json(serde_json::json!({ "actions": actions }))
}

#[post("/webhook/command")]
pub async fn command_webhook(
    bot: Data<Arc<PaymentBot>>,
    command: web::Json<SlashCommand>,
) -> impl Responder {
    let actions: Vec<_> = bot.handle_command(&command).into_iter().collect();
    HttpResponse::Ok().json(serde_json::json!({ "actions": actions }))
}
