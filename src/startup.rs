use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use std::net::TcpListener;
use std::sync::Arc;

use crate::configuration::AuthSettings;
use crate::middleware::AuthMiddleware;
use crate::request_logging::RequestLogging;
use crate::routes::{get_profile, health_check, login, register, update_profile};
use crate::store::UserStore;

pub fn run(
    listener: TcpListener,
    store: Arc<dyn UserStore>,
    auth_settings: AuthSettings,
) -> Result<Server, std::io::Error> {
    let store = web::Data::from(store);
    let auth_settings_data = web::Data::new(auth_settings.clone());

    let server = HttpServer::new(move || {
        App::new()
            // Global middleware
            .wrap(RequestLogging)

            // Shared state
            .app_data(store.clone())
            .app_data(auth_settings_data.clone())

            // Public routes (no authentication required)
            .route("/health_check", web::get().to(health_check))
            .route("/register", web::post().to(register))
            .route("/login", web::post().to(login))

            // Protected routes (require a valid session token)
            .service(
                web::scope("/profile")
                    .wrap(AuthMiddleware::new(auth_settings.clone()))
                    .route("/{id}", web::get().to(get_profile))
                    .route("/{id}", web::put().to(update_profile)),
            )
    })
    .listen(listener)?
    .run();

    Ok(server)
}
