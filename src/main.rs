mod config;
mod logging;
mod routing;
mod models;


use {
    rocket::{
        routes,
        catchers,
        Rocket,
        Build,
        figment::Figment,
        fairing::AdHoc
    },
    crate::{
        config::TriviaConfig,
        models::{
            db::{self, DbConn},
            quiz::Dice,
            web::Cors
        }
    }
};

pub fn build(figment: Figment) -> Rocket<Build> {
    rocket::custom(figment)
        .mount("/", routes![
            routing::preflight,
            routing::api::list_categories,
            routing::api::category_questions,
            routing::api::list_questions,
            routing::api::delete_question,
            routing::api::create_question,
            routing::api::search_questions,
            routing::api::next_question
        ])
        .register("/", catchers![
            routing::catchers::bad_request,
            routing::catchers::not_found,
            routing::catchers::unprocessable,
            routing::catchers::default
        ])
        .attach(DbConn::fairing())
        .attach(AdHoc::try_on_ignite("Database Migrations", db::run_migrations))
        .attach(AdHoc::config::<TriviaConfig>())
        .attach(AdHoc::on_ignite("Quiz Dice", |rocket| async move {
            let seed = rocket
                .state::<TriviaConfig>()
                .and_then(|config| config.quiz_seed);
            rocket.manage(Dice::new(seed))
        }))
        .attach(Cors)
}

#[rocket::main]
async fn main() -> Result<(), rocket::Error> {
    dotenv::dotenv().ok();
    logging::init();

    build(rocket::Config::figment())
        .launch()
        .await
        .map(drop)
}
