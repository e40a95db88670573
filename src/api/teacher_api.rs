use actix_web::{get, HttpResponse, post, Responder, web};
use actix_web::web::Redirect;
use log::info;

use crate::data_structs::requests::drop_request::TeacherDropRequest;
use crate::data_structs::requests::teacher_registration::TeacherRegistration;
use crate::data_structs::responses::form_view::FormView;
use crate::data_structs::responses::roster_view::TeachersView;
use crate::error::AppError;
use crate::roster::DropOutcome;
use crate::SharedResources;

#[get("/register/teacher")]
pub async fn teacher_form(data: web::Data<SharedResources>) -> impl Responder {
    HttpResponse::Ok().json(FormView::new(
        "/register/teacher",
        &["name", "email", "subject"],
        data.catalog.courses(),
    ))
}

#[post("/register/teacher")]
pub async fn register_teacher(data: web::Data<SharedResources>, payload: web::Form<TeacherRegistration>) -> Result<Redirect, AppError> {
    let teacher = payload.into_inner().into_teacher()?;
    info!("Registering teacher {} for {}", teacher.email, teacher.subject);
    data.teachers.register(teacher);
    Ok(Redirect::to("/teachers").see_other())
}

#[get("/teachers")]
pub async fn list_teachers(data: web::Data<SharedResources>) -> impl Responder {
    HttpResponse::Ok().json(TeachersView {
        teachers: data.teachers.list()
    })
}

#[post("/drop/teacher")]
pub async fn drop_teacher(data: web::Data<SharedResources>, payload: web::Form<TeacherDropRequest>) -> Result<Redirect, AppError> {
    let (email, subject) = payload.into_inner().into_key()?;

    match data.teachers.drop_registration(&email, &subject) {
        DropOutcome::Removed(count) => info!(
            "Dropped {} teacher registration(s) of {} from {}, {} left on record",
            count, email, subject, data.teachers.len()
        ),
        DropOutcome::NotFound => info!("No teacher registration of {} in {}, nothing to drop", email, subject),
    }

    Ok(Redirect::to("/teachers").see_other())
}
