use sea_orm_migration::prelude::*;

use rolodex_users_migration::Migrator;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
