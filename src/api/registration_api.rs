use actix_web::{get, HttpResponse, post, Responder, web};
use actix_web::web::Redirect;
use log::{debug, info};

use crate::data_structs::requests::course_selection::CourseSelection;
use crate::data_structs::responses::registrations_view::RegistrationsView;
use crate::error::AppError;
use crate::roster::DropOutcome;
use crate::SharedResources;

#[get("/register")]
pub async fn registrations(data: web::Data<SharedResources>) -> impl Responder {
    HttpResponse::Ok().json(RegistrationsView {
        catalog: data.catalog.courses(),
        registered: data.registrations.list(),
    })
}

#[post("/register")]
pub async fn register_course(data: web::Data<SharedResources>, payload: web::Form<CourseSelection>) -> Result<Redirect, AppError> {
    let course = payload.into_inner().into_course()?;
    if !data.registrations.register(&course) {
        debug!("Already registered for {}", course);
    }
    Ok(Redirect::to("/register").see_other())
}

#[post("/unregister")]
pub async fn unregister_course(data: web::Data<SharedResources>, payload: web::Form<CourseSelection>) -> Result<Redirect, AppError> {
    let course = payload.into_inner().into_course()?;
    match data.registrations.unregister(&course) {
        DropOutcome::Removed(_) => info!("Unregistered from {}", course),
        DropOutcome::NotFound => info!("Not registered for {}, nothing to drop", course),
    }
    Ok(Redirect::to("/register").see_other())
}
