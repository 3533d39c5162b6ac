use crate::common::default_handler::default_handler;
use crate::formats::format_routes;
use crate::plans::plan_routes;
use crate::squad::squad_routes;
use crate::AppData;
use axum::Router;

pub struct ServerRoutes;

impl ServerRoutes {
    pub fn create() -> Router<AppData> {
        Router::<AppData>::new()
            .merge(format_routes())
            .merge(squad_routes())
            .merge(plan_routes())
            .fallback(default_handler)
    }
}
