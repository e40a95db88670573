use actix_web::{get, HttpResponse, web};
use log::error;

use crate::data_structs::responses::home_view::HomeView;
use crate::error::AppError;
use crate::SharedResources;

#[get("/")]
pub async fn home(data: web::Data<SharedResources>) -> Result<HttpResponse, AppError> {
    let hit_counter = &data.get_ref().hit_counter;
    let hits = hit_counter.increment().await.map_err(|e| {
        error!("Error incrementing the {} hit counter: {}", hit_counter.backend_name(), e);
        e
    })?;
    Ok(HttpResponse::Ok().json(HomeView { hits }))
}
