use actix_web::web;

pub mod system;

pub fn config(cfg: &mut web::ServiceConfig) {
    // Liveness routes (public)
    cfg.service(system::root).service(system::health_check);
}
