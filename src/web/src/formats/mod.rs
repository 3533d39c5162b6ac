pub mod list;
pub mod slots;

use crate::AppData;
use axum::Router;

pub fn format_routes() -> Router<AppData> {
    Router::new()
        .merge(list::routes::routes())
        .merge(slots::routes::routes())
}
