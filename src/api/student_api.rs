use actix_web::{get, HttpResponse, post, Responder, web};
use actix_web::web::Redirect;
use log::{debug, info};

use crate::data_structs::requests::drop_request::DropRequest;
use crate::data_structs::requests::student_registration::StudentRegistration;
use crate::data_structs::responses::courses_view::CoursesView;
use crate::data_structs::responses::form_view::FormView;
use crate::data_structs::responses::roster_view::StudentsView;
use crate::error::AppError;
use crate::roster::DropOutcome;
use crate::SharedResources;

#[get("/register/student")]
pub async fn student_form(data: web::Data<SharedResources>) -> impl Responder {
    HttpResponse::Ok().json(FormView::new(
        "/register/student",
        &["name", "email", "course"],
        data.catalog.courses(),
    ))
}

#[post("/register/student")]
pub async fn register_student(data: web::Data<SharedResources>, payload: web::Form<StudentRegistration>) -> Result<Redirect, AppError> {
    let student = payload.into_inner().into_student()?;

    data.catalog.observe(&student.course);
    info!("Registering student {} for {}", student.email, student.course);
    let roster_size = data.students.register(student);
    debug!("{} student registration(s) on record", roster_size);

    Ok(Redirect::to("/students").see_other())
}

#[get("/students")]
pub async fn list_students(data: web::Data<SharedResources>) -> impl Responder {
    HttpResponse::Ok().json(StudentsView {
        students: data.students.list()
    })
}

#[get("/courses")]
pub async fn list_courses(data: web::Data<SharedResources>) -> impl Responder {
    let catalog = &data.get_ref().catalog;
    HttpResponse::Ok().json(CoursesView {
        catalog: catalog.courses(),
        students_by_course: data.students.group_by_course(&catalog.seed()),
        teachers_by_subject: data.teachers.group_by_course(&[]),
    })
}

#[get("/drop")]
pub async fn drop_form(data: web::Data<SharedResources>) -> impl Responder {
    HttpResponse::Ok().json(FormView::new("/drop", &["email", "course"], data.catalog.courses()))
}

#[post("/drop")]
pub async fn drop_student(data: web::Data<SharedResources>, payload: web::Form<DropRequest>) -> Result<Redirect, AppError> {
    let (email, course) = payload.into_inner().into_key()?;

    // an unknown registration is not an error for the client
    match data.students.drop_registration(&email, &course) {
        DropOutcome::Removed(count) => info!(
            "Dropped {} registration(s) of {} from {}, {} left on record",
            count, email, course, data.students.len()
        ),
        DropOutcome::NotFound => info!("No registration of {} in {}, nothing to drop", email, course),
    }

    Ok(Redirect::to("/students").see_other())
}
