pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod hit_counter;
pub mod registration_set;
pub mod roster;
mod utils;

pub mod data_structs {
    pub mod enrollment;
    pub mod student;
    pub mod teacher;
    pub mod requests {
        pub mod course_selection;
        pub mod drop_request;
        pub mod student_registration;
        pub mod teacher_registration;
    }
    pub mod responses {
        pub mod courses_view;
        pub mod error_response;
        pub mod form_view;
        pub mod home_view;
        pub mod registrations_view;
        pub mod roster_view;
    }
}

use std::io;

use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use actix_web::middleware::{Condition, Logger};
use log::{info, warn};

use crate::catalog::Catalog;
use crate::config::{AppConfig, CONFIG_PATH, HitCounterBackend};
use crate::data_structs::student::Student;
use crate::data_structs::teacher::Teacher;
use crate::hit_counter::HitCounter;
use crate::registration_set::RegistrationSet;
use crate::roster::Roster;

/// Everything the handlers share. Built once and handed to every worker.
pub struct SharedResources {
    catalog: Catalog,
    students: Roster<Student>,
    teachers: Roster<Teacher>,
    registrations: RegistrationSet,
    hit_counter: HitCounter,
}

impl SharedResources {
    pub fn new(catalog: Catalog, hit_counter: HitCounter) -> Self {
        SharedResources {
            catalog,
            students: Roster::new(),
            teachers: Roster::new(),
            registrations: RegistrationSet::new(),
            hit_counter,
        }
    }
}

fn load(config: &AppConfig) -> io::Result<SharedResources> {
    let catalog = Catalog::new(config.catalog_mode, config.courses.clone());
    info!("Loaded {} course catalog with {} course(s)", catalog.mode(), catalog.courses().len());

    let hit_counter = match &config.hit_counter {
        HitCounterBackend::Memory => {
            warn!("Counting hits in memory, the count resets on restart");
            HitCounter::in_memory()
        }
        HitCounterBackend::Redis { host, port } => {
            info!("Counting hits in redis at {}:{}, connecting on the first hit", host, port);
            HitCounter::redis(host, *port)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?
        }
    };

    Ok(SharedResources::new(catalog, hit_counter))
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Loading configurations...");
    let config = AppConfig::load(CONFIG_PATH)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    // one instance shared by all workers, otherwise each worker would keep its own rosters
    let shared_resources = web::Data::new(load(&config)?);
    let permissive_cors = config.permissive_cors;

    info!("Starting HTTP server on {}:{}...", config.host, config.port);
    HttpServer::new(move || {
        App::new()
            .app_data(shared_resources.clone())
            .wrap(Logger::new("%a \"%r\" %s %b \"%{User-Agent}i\" %T"))
            .wrap(Condition::new(permissive_cors, Cors::permissive()))
            .configure(api::configure)
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
