pub mod home_api;
pub mod registration_api;
pub mod student_api;
pub mod teacher_api;

use actix_web::web;

use crate::error::AppError;

/// Registers every route and the form extractor's error handler.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::FormConfig::default()
            .error_handler(|err, _req| AppError::MalformedForm(err.to_string()).into()))
        .service(home_api::home)
        .service(student_api::student_form)
        .service(student_api::register_student)
        .service(student_api::list_students)
        .service(student_api::list_courses)
        .service(student_api::drop_form)
        .service(student_api::drop_student)
        .service(teacher_api::teacher_form)
        .service(teacher_api::register_teacher)
        .service(teacher_api::list_teachers)
        .service(teacher_api::drop_teacher)
        .service(registration_api::registrations)
        .service(registration_api::register_course)
        .service(registration_api::unregister_course);
}
