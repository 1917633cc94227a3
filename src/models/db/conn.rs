use {
    tracing::{info, error},
    rocket::{Rocket, Build, fairing},
    rocket_sync_db_pools::database,
    diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness}
};

pub type Connection = diesel::SqliteConnection;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

#[database("trivia")]
pub struct DbConn(Connection);

pub fn migrate(conn: &mut Connection) -> Result<usize, Box<dyn std::error::Error + Send + Sync>> {
    conn.run_pending_migrations(MIGRATIONS)
        .map(|applied| applied.len())
}

pub async fn run_migrations(rocket: Rocket<Build>) -> fairing::Result {
    let conn = match DbConn::get_one(&rocket).await {
        Some(conn) => conn,
        None => {
            error!("no database connection available for migrations");
            return Err(rocket)
        }
    };

    match conn.run(|c| migrate(c).map_err(|e| e.to_string())).await {
        Ok(applied) => {
            info!(applied, "database migrations complete");
            Ok(rocket)
        },
        Err(e) => {
            error!(error = %e, "database migrations failed");
            Err(rocket)
        }
    }
}
